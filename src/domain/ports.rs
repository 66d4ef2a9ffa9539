use crate::domain::model::{Coordinate, ProviderResponse, User};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound reverse-geocoding lookup.
///
/// Implementations issue exactly one request per call and report transport
/// problems as `SignupError::ProviderUnavailable`. Provider-level failures
/// are returned inside the `ProviderResponse` status, not as errors.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    async fn reverse_geocode(&self, coordinate: &Coordinate) -> Result<ProviderResponse>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: u64) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Fails with `SignupError::EmailTaken` when the email is already stored.
    async fn create(&self, name: &str, email: &str, city: &str) -> Result<User>;
}
