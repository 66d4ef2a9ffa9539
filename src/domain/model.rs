use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair that has passed range validation.
///
/// Only `core::validator::validate_coordinate` builds one, so holding a
/// `Coordinate` means both values are finite and in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub(crate) fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Provider query form, `"<latitude>,<longitude>"`.
    pub fn to_query(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub city: String,
}

/// Provider payload after the adapter has unwrapped its wire format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderResponse {
    pub status_code: i64,
    pub status_message: String,
    pub results: Vec<ProviderResult>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderResult {
    pub country: Option<String>,
    pub state: Option<String>,
    pub town: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
}
