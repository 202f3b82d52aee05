use crate::models::RentalProperty;
use crate::network::{FetchError, RentalService};
use async_trait::async_trait;

/// Domain-facing access to rental properties
/// Keeps the UI layer independent of the transport so other sources
/// (cache, fixtures) can be plugged in later
#[async_trait]
pub trait RentalRepository: Send + Sync {
    async fn get_rental_properties(&self) -> Result<Vec<RentalProperty>, FetchError>;
}

/// Repository backed directly by a remote [`RentalService`]
pub struct NetworkRentalRepository<S> {
    service: S,
}

impl<S: RentalService> NetworkRentalRepository<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

#[async_trait]
impl<S: RentalService> RentalRepository for NetworkRentalRepository<S> {
    async fn get_rental_properties(&self) -> Result<Vec<RentalProperty>, FetchError> {
        self.service.get_properties().await
    }
}
