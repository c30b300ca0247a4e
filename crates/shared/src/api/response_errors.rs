use serde::{Deserialize, Serialize};
use thiserror::Error;
use {crate::api::error::ServerError, http::StatusCode};

macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            #[error($($message:tt)*)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error($($message)*)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                let code = match &inner {
                    $( $name::$variant { .. } => $variant_code, )*
                };
                Self::Inner { code, inner }
            }
        }
    };
}

response_error!(CreateUserError {
    #[code(StatusCode::INTERNAL_SERVER_ERROR)]
    #[error("Failed to create user")]
    Failed,
});

response_error!(UserLookupError {
    #[code(StatusCode::NOT_FOUND)]
    #[error("User not found")]
    NotFound,
});

// Aliases used to allow future expansion of the errors without having to go
// back and update all routes that use them
pub type ExerciseError = UserLookupError;
pub type LogError = UserLookupError;
