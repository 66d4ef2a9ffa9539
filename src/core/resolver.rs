use crate::domain::model::{Coordinate, GeocodeResult, ProviderResponse};
use crate::domain::ports::GeocodingProvider;
use crate::utils::error::{Result, SignupError};

/// Provider status code for a successful lookup.
pub const PROVIDER_SUCCESS_CODE: i64 = 200;

pub const DEFAULT_TARGET_COUNTRY: &str = "Egypt";

/// Turns a validated coordinate into a city label, accepting only locations
/// inside the target country.
pub struct LocationResolver<P: GeocodingProvider> {
    provider: P,
    target_country: String,
}

impl<P: GeocodingProvider> LocationResolver<P> {
    pub fn new(provider: P, target_country: impl Into<String>) -> Self {
        Self {
            provider,
            target_country: target_country.into(),
        }
    }

    pub fn target_country(&self) -> &str {
        &self.target_country
    }

    pub async fn resolve(&self, coordinate: &Coordinate) -> Result<GeocodeResult> {
        let response = self.provider.reverse_geocode(coordinate).await?;
        let result = interpret_response(response, &self.target_country)?;

        tracing::info!(
            latitude = coordinate.latitude(),
            longitude = coordinate.longitude(),
            city = %result.city,
            "Resolved coordinate"
        );
        Ok(result)
    }

    pub async fn resolve_city(&self, coordinate: &Coordinate) -> Result<String> {
        self.resolve(coordinate).await.map(|result| result.city)
    }
}

/// Applies the provider status check, the target-country rule and the
/// state-then-town tie-break to a raw provider response.
pub fn interpret_response(
    response: ProviderResponse,
    target_country: &str,
) -> Result<GeocodeResult> {
    if response.status_code != PROVIDER_SUCCESS_CODE {
        tracing::debug!(
            code = response.status_code,
            "Geocoding provider rejected the request"
        );
        return Err(SignupError::ProviderRejected {
            code: response.status_code,
            message: response.status_message,
        });
    }

    let first = response
        .results
        .into_iter()
        .next()
        .ok_or(SignupError::UnresolvableLocation)?;

    match first.country.as_deref() {
        Some(country) if country == target_country => {}
        other => {
            return Err(SignupError::OutsideRegion {
                country: other.unwrap_or("unknown").to_string(),
            })
        }
    }

    // state is preferred over town, even when both are present
    let city = non_empty(first.state)
        .or_else(|| non_empty(first.town))
        .ok_or(SignupError::UnresolvableLocation)?;

    Ok(GeocodeResult { city })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
