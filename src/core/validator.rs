use crate::domain::model::Coordinate;
use crate::utils::error::{Result, SignupError};

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Range-checks a coordinate pair. Both bounds are inclusive.
///
/// Pure; callers run this before any provider request so invalid input
/// never leaves the process.
pub fn validate_coordinate(latitude: f64, longitude: f64) -> Result<Coordinate> {
    check_range("latitude", latitude, LATITUDE_RANGE)?;
    check_range("longitude", longitude, LONGITUDE_RANGE)?;
    Ok(Coordinate::new_unchecked(latitude, longitude))
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    // NaN fails `contains`, infinities fall outside the bounds
    if !(min..=max).contains(&value) {
        return Err(SignupError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
