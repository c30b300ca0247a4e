use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use mime::Mime;
use serde::de::DeserializeOwned;
use shared::api::error::{Nothing, ServerError};

/// Extracts a body sent either as JSON or as a url-encoded form, picked by
/// the request's content type
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<Mime>().ok())
        .is_some_and(|m| {
            m.type_() == mime::APPLICATION
                && (m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON))
        })
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ServerError<Nothing>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(payload) = Json::<T>::from_request(req, state).await?;
            Ok(Self(payload))
        } else {
            let Form(payload) = Form::<T>::from_request(req, state).await?;
            Ok(Self(payload))
        }
    }
}
