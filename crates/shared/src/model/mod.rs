mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod log;
pub use log::*;

pub mod date;
pub mod validate;

use crate::api::error::ValidationError;

/// Turns an unchecked request payload into the value the store accepts
pub trait ValidateModel {
    type Valid;

    fn validate(self) -> Result<Self::Valid, ValidationError>;
}
