use crate::models::RentalProperty;
use crate::network::error::FetchError;
use async_trait::async_trait;
use reqwest::Url;

/// Remote source of rental property data
/// Implemented over HTTP today; tests substitute their own sources
#[async_trait]
pub trait RentalService: Send + Sync {
    /// Fetch every property from the `properties` endpoint
    async fn get_properties(&self) -> Result<Vec<RentalProperty>, FetchError>;

    /// Base URL the service was configured with
    fn base_url(&self) -> &Url;
}
