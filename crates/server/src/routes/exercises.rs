use axum::{extract::Path, Json};
use shared::{
    api::{
        error::ServerError,
        payloads::{ExercisePayload, ExerciseResponse},
        response_errors::ExerciseError,
    },
    model::{User, ValidateModel},
    types::Uuid,
};
use tracing::{info, instrument};

use crate::{db::DatabaseConnection, JsonOrForm};

/// The user is looked up before the payload is validated so an unknown user
/// is always a 404
#[instrument(skip(conn, payload))]
pub async fn add_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<String>,
    JsonOrForm(payload): JsonOrForm<ExercisePayload>,
) -> Result<Json<ExerciseResponse>, ServerError<ExerciseError>> {
    let user_id = Uuid::parse(&id).map_err(|_| ExerciseError::NotFound)?;

    let (user, exercise) = conn
        .interact(move |conn| {
            let user = User::fetch_maybe(conn, &user_id)?.ok_or(ExerciseError::NotFound)?;
            let new_exercise = payload.validate()?;
            let exercise = user.add_exercise(conn, new_exercise)?;
            Ok::<_, ServerError<ExerciseError>>((user, exercise))
        })
        .await??;

    info!(user_id = %user.id, exercise_id = %exercise.id, "Added exercise");
    Ok(Json(ExerciseResponse::new(user, exercise)))
}
