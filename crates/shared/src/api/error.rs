use std::{error::Error, fmt};

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All of the field failures found while validating one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{model} validation failed: {}", .error_messages.join(", "))]
pub struct ValidationError {
    pub model: String,
    pub error_messages: Vec<String>,
}

impl ValidationError {
    pub fn new<S: Into<String>>(model: S) -> Self {
        Self {
            model: model.into(),
            error_messages: Vec::new(),
        }
    }

    pub fn push<P: fmt::Display, M: fmt::Display>(&mut self, path: P, message: M) {
        self.error_messages.push(format!("{path}: {message}"));
    }
}

/// Error type for routes that have no failure modes of their own
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Nothing {}

impl fmt::Display for Nothing {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl Error for Nothing {}

#[derive(Debug, Error)]
pub enum ServerError<T: Error> {
    /// A route specific error with its own status code
    #[error("{inner}")]
    Inner { code: StatusCode, inner: T },
    #[error("{inner}")]
    Validation { inner: ValidationError },
    /// The request couldn't be extracted (bad body, bad query string, ...)
    #[error("{message}")]
    Rejection { code: StatusCode, message: String },
    #[error("{message}")]
    Other { message: String },
}

impl<T: Error> ServerError<T> {
    pub fn code(&self) -> StatusCode {
        match self {
            Self::Inner { code, .. } | Self::Rejection { code, .. } => *code,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T: Error> From<ValidationError> for ServerError<T> {
    fn from(inner: ValidationError) -> Self {
        Self::Validation { inner }
    }
}

/// Builds a [ServerError::Other] from format args
#[macro_export]
macro_rules! other_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::Other {
            message: format!($($arg)*),
        }
    };
}

#[cfg(feature = "backend")]
mod backend {
    use std::error::Error;

    use axum::{
        extract::rejection::{FormRejection, JsonRejection, QueryRejection},
        response::{IntoResponse, Response},
        Json,
    };
    use deadpool_sqlite::InteractError;
    use tracing::{debug, error};

    use super::ServerError;
    use crate::api::payloads::ErrorResponse;

    impl<T: Error> From<rusqlite::Error> for ServerError<T> {
        fn from(err: rusqlite::Error) -> Self {
            Self::Other {
                message: err.to_string(),
            }
        }
    }

    impl<T: Error> From<InteractError> for ServerError<T> {
        fn from(err: InteractError) -> Self {
            Self::Other {
                message: format!("Database interaction failed: {err}"),
            }
        }
    }

    macro_rules! rejection {
        ($($rejection:ty),*) => {
            $(
                impl<T: Error> From<$rejection> for ServerError<T> {
                    fn from(rejection: $rejection) -> Self {
                        Self::Rejection {
                            code: rejection.status(),
                            message: rejection.body_text(),
                        }
                    }
                }
            )*
        };
    }

    rejection!(JsonRejection, FormRejection, QueryRejection);

    // Render the error as `{ "error": "<message>" }`
    impl<T: Error> IntoResponse for ServerError<T> {
        fn into_response(self) -> Response {
            let code = self.code();
            let message = self.to_string();

            if code.is_server_error() {
                error!(%code, error = %message, "request failed");
            } else {
                debug!(%code, error = %message, "request rejected");
            }

            (code, Json(ErrorResponse { error: message })).into_response()
        }
    }
}
