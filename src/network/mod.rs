pub mod error;
pub mod http;
pub mod logging;
pub mod traits;

pub use error::{FetchError, FetchErrorKind};
pub use http::HttpRentalService;
pub use logging::HttpLogLevel;
pub use traits::RentalService;
