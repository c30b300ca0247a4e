use serde::{Deserialize, Serialize};

mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod log;
pub use log::*;

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
