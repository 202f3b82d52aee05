pub mod config;
pub mod data;
pub mod models;
pub mod network;
pub mod telemetry;
pub mod ui;

pub use config::AppConfig;
pub use data::{AppContainer, RentalRepository};
pub use models::{Client, RentalProperty, VisitInfo};
pub use network::{FetchError, HttpRentalService, RentalService};
pub use ui::{RentalUiState, RentalViewModel};
