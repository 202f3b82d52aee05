pub mod navigation;
pub mod screens;
pub mod state;
pub mod view_model;

pub use navigation::{Navigator, Route};
pub use state::RentalUiState;
pub use view_model::{RefreshOrdering, RentalViewModel};
