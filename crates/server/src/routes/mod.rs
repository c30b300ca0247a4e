use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::AppState;

mod exercises;
pub use exercises::*;

mod logs;
pub use logs::*;

mod users;
pub use users::*;

/// Builds the application router. Anything that isn't an api route is looked
/// up in the assets directory, which is where the landing page lives.
pub fn build(state: AppState) -> Router {
    let args = state.args.clone();

    let cors = match &args.cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE]),
        None => CorsLayer::permissive(),
    };

    Router::new()
        .route(Object::Users.path(), post(create_user).get(list_users))
        .route(Object::UserExercises.path(), post(add_exercise))
        .route(Object::UserLogs.path(), get(get_logs))
        .fallback_service(ServeDir::new(&args.assets_dir))
        .layer(RequestBodyLimitLayer::new(args.request_body_limit))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
