use std::error::Error;

use shared::api::error::{Nothing, ServerError};
use tracing::error;

/// Maps any error to a 500 response, logging the cause
pub fn internal_error<E: Error>(err: E) -> ServerError<Nothing> {
    error!(%err, "internal error");
    ServerError::Other {
        message: err.to_string(),
    }
}
