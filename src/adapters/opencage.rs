use crate::config::GeocoderConfig;
use crate::domain::model::{Coordinate, ProviderResponse, ProviderResult};
use crate::domain::ports::GeocodingProvider;
use crate::utils::error::{Result, SignupError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct OpenCageBody {
    status: OpenCageStatus,
    #[serde(default)]
    results: Vec<OpenCageResult>,
}

#[derive(Debug, Deserialize)]
struct OpenCageStatus {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct OpenCageResult {
    #[serde(default)]
    components: OpenCageComponents,
}

#[derive(Debug, Default, Deserialize)]
struct OpenCageComponents {
    country: Option<String>,
    state: Option<String>,
    town: Option<String>,
}

impl From<OpenCageBody> for ProviderResponse {
    fn from(body: OpenCageBody) -> Self {
        ProviderResponse {
            status_code: body.status.code,
            status_message: body.status.message,
            results: body
                .results
                .into_iter()
                .map(|r| ProviderResult {
                    country: r.components.country,
                    state: r.components.state,
                    town: r.components.town,
                })
                .collect(),
        }
    }
}

/// OpenCage-style reverse geocoding over HTTP.
///
/// Requests are bounded by the configured timeout. Dropping the future
/// returned by `reverse_geocode` aborts the in-flight request.
pub struct OpenCageClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    language: String,
}

impl OpenCageClient {
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| SignupError::config("geocoder.endpoint", e.to_string()))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SignupError::config("geocoder", format!("HTTP client setup: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            language: config.language().to_string(),
        })
    }

    fn request_url(&self, coordinate: &Coordinate) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("q", &coordinate.to_query())
            .append_pair("language", &self.language);
        url
    }
}

#[async_trait]
impl GeocodingProvider for OpenCageClient {
    async fn reverse_geocode(&self, coordinate: &Coordinate) -> Result<ProviderResponse> {
        // endpoint is logged without the query string, it carries the key
        tracing::debug!(
            latitude = coordinate.latitude(),
            longitude = coordinate.longitude(),
            "Making reverse geocode request to: {}",
            self.endpoint
        );

        let response = self.client.get(self.request_url(coordinate)).send().await?;
        let http_status = response.status();
        tracing::debug!("Geocoding response status: {}", http_status);

        // The provider reports failures in the body status, so non-2xx
        // responses are still parsed.
        let body = response.bytes().await?;
        let parsed: OpenCageBody = serde_json::from_slice(&body).map_err(|e| {
            SignupError::unavailable(format!(
                "unparseable provider response (HTTP {}): {}",
                http_status, e
            ))
        })?;

        Ok(parsed.into())
    }
}
