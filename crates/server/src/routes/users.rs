use axum::Json;
use shared::{
    api::{
        error::{Nothing, ServerError},
        payloads::{CreatedUser, UserPayload, UserRecord},
        response_errors::CreateUserError,
    },
    model::{User, ValidateModel},
};
use tracing::{info, instrument, warn};

use crate::{db::DatabaseConnection, JsonOrForm};

/// Any failure, including a bad or missing username, is reported as the same
/// generic error
#[instrument(skip(conn, payload))]
pub async fn create_user(
    DatabaseConnection(conn): DatabaseConnection,
    payload: Result<JsonOrForm<UserPayload>, ServerError<Nothing>>,
) -> Result<Json<CreatedUser>, ServerError<CreateUserError>> {
    let result = async move {
        let JsonOrForm(payload) = payload?;
        let new_user = payload.validate()?;
        let user = conn
            .interact(move |conn| User::create(conn, new_user))
            .await??;
        Ok::<_, ServerError<Nothing>>(user)
    }
    .await;

    match result {
        Ok(user) => {
            info!(id = %user.id, username = %user.username, "Created user");
            Ok(Json(user.into()))
        }
        Err(err) => {
            warn!(%err, "Failed to create user");
            Err(CreateUserError::Failed.into())
        }
    }
}

#[instrument(skip(conn))]
pub async fn list_users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<Vec<UserRecord>>, ServerError<Nothing>> {
    let records = conn
        .interact(|conn| {
            let users = User::fetch_all(conn)?;
            let mut records = Vec::with_capacity(users.len());
            for user in users {
                let exercises = user.exercise_ids(conn)?;
                records.push(UserRecord::new(user, exercises));
            }
            Ok::<_, ServerError<Nothing>>(records)
        })
        .await??;

    Ok(Json(records))
}
