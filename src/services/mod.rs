pub mod api_client;
pub mod error_handler;

pub use api_client::{ApiClient, ApiError};
pub use error_handler::{handle_api_error, Custom401};
