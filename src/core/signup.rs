use crate::core::resolver::LocationResolver;
use crate::core::validator::validate_coordinate;
use crate::domain::model::{NewUser, User};
use crate::domain::ports::{GeocodingProvider, UserRepository};
use crate::utils::error::{Result, SignupError};
use crate::utils::validation::{validate_email, validate_max_length, validate_non_empty_string};

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 40;

/// Signup workflow: input checks, coordinate validation, city resolution,
/// then persistence.
pub struct SignupService<P: GeocodingProvider, R: UserRepository> {
    resolver: LocationResolver<P>,
    repository: R,
}

impl<P: GeocodingProvider, R: UserRepository> SignupService<P, R> {
    pub fn new(resolver: LocationResolver<P>, repository: R) -> Self {
        Self {
            resolver,
            repository,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn sign_up(&self, request: NewUser) -> Result<User> {
        let name = request.name.trim();
        let email = request.email.trim();

        validate_non_empty_string("name", name)?;
        validate_max_length("name", name, MAX_NAME_LENGTH)?;
        validate_email("email", email)?;
        validate_max_length("email", email, MAX_EMAIL_LENGTH)?;

        let coordinate = validate_coordinate(request.latitude, request.longitude)
            .inspect_err(|e| log_rejection(e, request.latitude, request.longitude))?;

        let city = self
            .resolver
            .resolve_city(&coordinate)
            .await
            .inspect_err(|e| log_rejection(e, request.latitude, request.longitude))?;

        let user = self.repository.create(name, email, &city).await?;
        tracing::info!(id = user.id, city = %user.city, "Created user");
        Ok(user)
    }

    pub async fn find_user(&self, id: u64) -> Result<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SignupError::UserNotFound { id })
    }
}

fn log_rejection(err: &SignupError, latitude: f64, longitude: f64) {
    tracing::warn!(kind = ?err.kind(), latitude, longitude, "Rejected signup: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::core::resolver::DEFAULT_TARGET_COUNTRY;
    use crate::domain::model::{Coordinate, ProviderResponse, ProviderResult};
    use crate::utils::error::ErrorKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    struct FixedCityProvider {
        country: String,
        state: String,
        calls: Arc<AtomicUsize>,
    }

    impl FixedCityProvider {
        fn new(country: &str, state: &str) -> Self {
            Self {
                country: country.to_string(),
                state: state.to_string(),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl GeocodingProvider for FixedCityProvider {
        async fn reverse_geocode(&self, _coordinate: &Coordinate) -> Result<ProviderResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ProviderResponse {
                status_code: 200,
                status_message: "OK".to_string(),
                results: vec![ProviderResult {
                    country: Some(self.country.clone()),
                    state: Some(self.state.clone()),
                    town: None,
                }],
            })
        }
    }

    fn service(
        provider: FixedCityProvider,
    ) -> SignupService<FixedCityProvider, InMemoryUserRepository> {
        SignupService::new(
            LocationResolver::new(provider, DEFAULT_TARGET_COUNTRY),
            InMemoryUserRepository::new(),
        )
    }

    fn request(email: &str, latitude: f64, longitude: f64) -> NewUser {
        NewUser {
            name: "omar shalaby".to_string(),
            email: email.to_string(),
            latitude,
            longitude,
        }
    }

    #[tokio::test]
    async fn test_sign_up_stores_resolved_city() {
        let service = service(FixedCityProvider::new("Egypt", "Cairo"));

        let user = service
            .sign_up(request("omar@example.com", 30.0444, 31.2357))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "omar shalaby");
        assert_eq!(user.city, "Cairo");

        let found = service.find_user(user.id).await.unwrap();
        assert_eq!(found, user);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_duplicate_email() {
        let service = service(FixedCityProvider::new("Egypt", "Cairo"));
        service
            .sign_up(request("omar@example.com", 30.0444, 31.2357))
            .await
            .unwrap();

        let err = service
            .sign_up(request("omar@example.com", 31.2001, 29.9187))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmailTaken);
    }

    #[tokio::test]
    async fn test_invalid_input_skips_provider() {
        let provider = FixedCityProvider::new("Egypt", "Cairo");
        let calls = provider.calls.clone();
        let service = service(provider);

        let err = service
            .sign_up(request("not-an-email", 30.0444, 31.2357))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let mut blank_name = request("omar@example.com", 30.0444, 31.2357);
        blank_name.name = "   ".to_string();
        let err = service.sign_up(blank_name).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = service
            .sign_up(request("omar@example.com", 91.7128, -74.006))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_sign_up_outside_region_persists_nothing() {
        let service = service(FixedCityProvider::new("United States", "New York"));

        let err = service
            .sign_up(request("omar@example.com", 40.7128, -74.006))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutsideRegion);

        let stored = service
            .repository()
            .find_by_email("omar@example.com")
            .await
            .unwrap();
        assert!(stored.is_none());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_rejection_log_omits_email() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let service = service(FixedCityProvider::new("United States", "New York"));
        service
            .sign_up(request("omar@example.com", 40.7128, -74.006))
            .await
            .unwrap_err();
        service
            .sign_up(request("omar@example.com", 31.7128, 180.006))
            .await
            .unwrap_err();

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Rejected signup"));
        assert!(output.contains("OutsideRegion"));
        assert!(output.contains("OutOfRange"));
        assert!(output.contains("40.7128"));
        assert!(!output.contains("omar@example.com"));
    }

    #[tokio::test]
    async fn test_find_user_not_found() {
        let service = service(FixedCityProvider::new("Egypt", "Cairo"));
        let err = service.find_user(2).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UserNotFound);
        assert_eq!(err.to_string(), "User with ID: 2 not found");
    }
}
