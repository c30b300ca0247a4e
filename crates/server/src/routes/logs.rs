use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    Json,
};
use shared::{
    api::{
        error::ServerError,
        payloads::{LogQuery, LogResponse},
        response_errors::LogError,
    },
    model::{LogFilter, User},
    types::Uuid,
};
use tracing::instrument;

use crate::db::DatabaseConnection;

#[instrument(skip(conn, query))]
pub async fn get_logs(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<String>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> Result<Json<LogResponse>, ServerError<LogError>> {
    let Query(query) = query?;
    let user_id = Uuid::parse(&id).map_err(|_| LogError::NotFound)?;
    let filter = LogFilter::from_query(&query);

    let (user, exercises) = conn
        .interact(move |conn| {
            let user = User::fetch_maybe(conn, &user_id)?.ok_or(LogError::NotFound)?;
            let exercises = user.exercise_log(conn, &filter)?;
            Ok::<_, ServerError<LogError>>((user, exercises))
        })
        .await??;

    Ok(Json(LogResponse::new(user, exercises)))
}
