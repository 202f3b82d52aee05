pub mod container;
pub mod repository;

pub use container::AppContainer;
pub use repository::{NetworkRentalRepository, RentalRepository};
