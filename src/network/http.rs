use crate::models::RentalProperty;
use crate::network::error::FetchError;
use crate::network::logging::HttpLogLevel;
use crate::network::traits::RentalService;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT};
use reqwest::{Client, Url};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const PROPERTIES_ENDPOINT: &str = "properties";

/// Rental API client over HTTP/JSON
pub struct HttpRentalService {
    client: Client,
    base_url: Url,
    properties_url: Url,
    log_level: HttpLogLevel,
}

impl HttpRentalService {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// `base_url` must end with `/`; [`crate::config::parse_base_url`]
    /// produces URLs in that shape.
    pub fn new(base_url: Url, timeout: Duration, log_level: HttpLogLevel) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rental-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        let properties_url = base_url
            .join(PROPERTIES_ENDPOINT)
            .with_context(|| format!("Failed to build properties URL from {}", base_url))?;

        Ok(Self {
            client,
            base_url,
            properties_url,
            log_level,
        })
    }

    pub fn log_level(&self) -> HttpLogLevel {
        self.log_level
    }

    fn log_headers(&self, direction: &str, headers: &HeaderMap) {
        if !self.log_level.logs_headers() {
            return;
        }
        for (name, value) in headers {
            debug!("{} {}: {}", direction, name, value.to_str().unwrap_or("<binary>"));
        }
    }
}

#[async_trait]
impl RentalService for HttpRentalService {
    async fn get_properties(&self) -> Result<Vec<RentalProperty>, FetchError> {
        let url = self.properties_url.clone();

        let request = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .build()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        if self.log_level.logs_requests() {
            info!("--> GET {}", url);
        }
        self.log_headers("-->", request.headers());

        let started = Instant::now();
        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(source) => {
                if self.log_level.logs_requests() {
                    warn!("<-- HTTP FAILED: {}", source);
                }
                return Err(FetchError::Transport { url, source });
            }
        };

        let status = response.status();
        if self.log_level.logs_requests() {
            info!(
                "<-- {} {} ({}ms)",
                status,
                url,
                started.elapsed().as_millis()
            );
        }
        self.log_headers("<--", response.headers());

        if !status.is_success() {
            warn!("Rental API returned status: {}", status);
            return Err(FetchError::Status { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        if self.log_level.logs_body() {
            debug!("<-- body ({} bytes): {}", body.len(), String::from_utf8_lossy(&body));
        } else {
            debug!("Downloaded {} bytes", body.len());
        }

        let properties: Vec<RentalProperty> =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })?;

        debug!("Decoded {} properties", properties.len());
        Ok(properties)
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_url_is_under_base_path() {
        let base = Url::parse("http://192.168.1.230:8088/api/").unwrap();
        let service =
            HttpRentalService::new(base, Duration::from_secs(5), HttpLogLevel::None).unwrap();

        assert_eq!(
            service.properties_url.as_str(),
            "http://192.168.1.230:8088/api/properties"
        );
        assert_eq!(service.base_url().as_str(), "http://192.168.1.230:8088/api/");
    }
}
