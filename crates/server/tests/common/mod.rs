use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use clap::Parser;
use exercise_tracker::{cli::Cli, db, routes, AppState};
use serde_json::Value;
use shared::{api::Object, types::Uuid};
use tower::ServiceExt;

/// Builds the app on top of a fresh, migrated in-memory database. The
/// database lives as long as the pool keeps a connection open.
pub async fn app() -> Router {
    let uri = format!("file:{}?mode=memory&cache=shared", Uuid::new_v4());
    let pool = db::create_pool(&uri).unwrap();

    let conn = pool.get().await.unwrap();
    conn.interact(|conn| db::migrate(conn))
        .await
        .unwrap()
        .unwrap();
    drop(conn);

    let args = Cli::parse_from([
        "server",
        "--assets-dir",
        concat!(env!("CARGO_MANIFEST_DIR"), "/assets"),
    ]);

    routes::build(AppState::new(pool, args))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

/// Sends the request, returning the status and the body parsed as JSON
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send_raw(app, req).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

/// Creates a user and returns its id
pub async fn create_user(app: &Router, username: &str) -> String {
    let (status, body) = send(
        app,
        post_json(Object::Users.path(), serde_json::json!({ "username": username })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["_id"].as_str().unwrap().to_owned()
}

pub async fn add_exercise(app: &Router, user_id: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        post_json(&Object::UserExercises.id_path(user_id), body),
    )
    .await
}
