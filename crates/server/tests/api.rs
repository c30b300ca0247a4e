use axum::http::StatusCode;
use chrono::Utc;
use serde_json::{json, Value};
use shared::{api::Object, model::date::format_date};

mod common;
use common::*;

async fn add_three_exercises(app: &axum::Router, user_id: &str) {
    for (description, date) in [
        ("first", "1990-01-01"),
        ("second", "1990-01-02"),
        ("third", "1990-01-03"),
    ] {
        let (status, body) = add_exercise(
            app,
            user_id,
            json!({ "description": description, "duration": 10, "date": date }),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
    }
}

async fn log_descriptions(app: &axum::Router, user_id: &str, query: &str) -> (u64, Vec<String>) {
    let (status, body) = send(app, get(&format!("{}{query}", Object::UserLogs.id_path(user_id)))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let descriptions = body["log"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["description"].as_str().unwrap().to_owned())
        .collect();
    (body["count"].as_u64().unwrap(), descriptions)
}

#[tokio::test]
async fn test_create_user_then_list() {
    let app = app().await;

    let (status, body) = send(&app, post_json("/api/users", json!({ "username": "fcc_test" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "fcc_test");
    let id = body["_id"].as_str().unwrap().to_owned();
    assert!(!id.is_empty());

    let (status, body) = send(&app, get("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "_id": id, "username": "fcc_test", "exercises": [] }])
    );
}

#[tokio::test]
async fn test_create_user_from_form() {
    let app = app().await;

    let (status, body) = send(&app, post_form("/api/users", "username=form+user")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "form user");
}

#[tokio::test]
async fn test_create_user_casts_scalars_to_text() {
    let app = app().await;

    let (status, body) = send(&app, post_json("/api/users", json!({ "username": 5 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "5");

    let (status, body) = send(&app, post_json("/api/users", json!({ "username": true }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "true");
}

#[tokio::test]
async fn test_create_user_without_username_fails() {
    let app = app().await;

    for req in [
        post_json("/api/users", json!({})),
        post_json("/api/users", json!({ "username": "" })),
        post_form("/api/users", "username="),
    ] {
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to create user" }));
    }

    let (_, body) = send(&app, get("/api/users")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_add_exercise_to_unknown_user() {
    let app = app().await;

    for id in [
        shared::types::Uuid::new_v4().to_string(),
        "5fb5853f734231456ccb3b05".to_owned(),
    ] {
        let (status, body) = add_exercise(
            &app,
            &id,
            json!({ "description": "run", "duration": 10 }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "User not found" }));
    }
}

#[tokio::test]
async fn test_add_exercise_with_bad_duration() {
    let app = app().await;
    let id = create_user(&app, "runner").await;

    let (status, body) = add_exercise(
        &app,
        &id,
        json!({ "description": "run", "duration": "abc" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(
        error.contains(r#"Cast to Number failed for value "abc" (type string) at path "duration""#),
        "{error}"
    );
}

#[tokio::test]
async fn test_add_exercise_with_numeric_description() {
    let app = app().await;
    let id = create_user(&app, "runner").await;

    let (status, body) = add_exercise(
        &app,
        &id,
        json!({ "description": 123, "duration": 10, "date": "1990-01-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["description"], "123");
}

#[tokio::test]
async fn test_add_exercise_reports_every_missing_field() {
    let app = app().await;
    let id = create_user(&app, "runner").await;

    let (status, body) = add_exercise(&app, &id, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Exercise validation failed: description: Description is required, duration: Path `duration` is required."
    );

    let (_, body) = send(&app, get(&Object::UserLogs.id_path(&id))).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_add_exercise_defaults_to_today() {
    let app = app().await;
    let id = create_user(&app, "runner").await;

    let before = format_date(&Utc::now());
    let (status, body) = add_exercise(
        &app,
        &id,
        json!({ "description": "run", "duration": "30" }),
    )
    .await;
    let after = format_date(&Utc::now());

    assert_eq!(status, StatusCode::OK, "{body}");
    let date = body["date"].as_str().unwrap();
    assert!(date == before || date == after, "{date}");
    assert_eq!(body["duration"], 30.0);
    assert_eq!(body["username"], "runner");
    assert_eq!(body["_id"], id.as_str());
}

#[tokio::test]
async fn test_add_exercise_from_form() {
    let app = app().await;
    let id = create_user(&app, "runner").await;

    let (status, body) = send(
        &app,
        post_form(
            &Object::UserExercises.id_path(&id),
            "%3A_id=&description=swim&duration=45&date=1990-01-01",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(
        body,
        json!({
            "_id": id,
            "username": "runner",
            "date": "Mon Jan 01 1990",
            "duration": 45.0,
            "description": "swim",
        })
    );
}

#[tokio::test]
async fn test_exercise_date_round_trips_into_the_log() {
    let app = app().await;
    let id = create_user(&app, "runner").await;

    let (_, added) = add_exercise(
        &app,
        &id,
        json!({ "description": "run", "duration": 10, "date": "2021-06-15" }),
    )
    .await;
    let (_, logs) = send(&app, get(&Object::UserLogs.id_path(&id))).await;

    assert_eq!(added["date"], "Tue Jun 15 2021");
    assert_eq!(logs["log"][0]["date"], added["date"]);
    assert_eq!(
        logs,
        json!({
            "_id": id,
            "username": "runner",
            "count": 1,
            "log": [{ "description": "run", "duration": 10.0, "date": "Tue Jun 15 2021" }],
        })
    );
}

#[tokio::test]
async fn test_listing_reports_exercise_ids_in_order() {
    let app = app().await;
    let id = create_user(&app, "runner").await;
    add_three_exercises(&app, &id).await;

    let (_, users) = send(&app, get("/api/users")).await;
    let exercises = users[0]["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), 3);
    assert!(exercises.iter().all(Value::is_string));
}

#[tokio::test]
async fn test_logs_filters() {
    let app = app().await;
    let id = create_user(&app, "runner").await;
    add_three_exercises(&app, &id).await;

    let (count, log) = log_descriptions(&app, &id, "").await;
    assert_eq!((count, log), (3, vec!["first".into(), "second".into(), "third".into()]));

    let (count, log) = log_descriptions(&app, &id, "?from=1990-01-02").await;
    assert_eq!((count, log), (2, vec!["second".into(), "third".into()]));

    let (count, log) = log_descriptions(&app, &id, "?to=1990-01-02").await;
    assert_eq!((count, log), (2, vec!["first".into(), "second".into()]));

    let (count, log) = log_descriptions(&app, &id, "?from=1990-01-02&to=1990-01-02").await;
    assert_eq!((count, log), (1, vec!["second".into()]));

    let (count, log) = log_descriptions(&app, &id, "?limit=1").await;
    assert_eq!((count, log), (1, vec!["first".into()]));

    let (count, _) = log_descriptions(&app, &id, "?from=1990-01-02&limit=1").await;
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_logs_ignore_bad_bounds_and_limits() {
    let app = app().await;
    let id = create_user(&app, "runner").await;
    add_three_exercises(&app, &id).await;

    for query in ["?from=not-a-date", "?to=", "?limit=0", "?limit=abc", "?from=&to=&limit="] {
        let (count, _) = log_descriptions(&app, &id, query).await;
        assert_eq!(count, 3, "{query}");
    }

    let (count, _) = log_descriptions(&app, &id, "?limit=2abc").await;
    assert_eq!(count, 2);

    for query in ["?limit=9223372036854775808", "?limit=99999999999999999999999"] {
        let (count, _) = log_descriptions(&app, &id, query).await;
        assert_eq!(count, 3, "{query}");
    }
}

#[tokio::test]
async fn test_logs_for_unknown_user() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/users/nobody/logs")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_landing_page() {
    let app = app().await;

    let (status, body) = send_raw(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("Exercise tracker"));

    let (status, _) = send_raw(&app, get("/style.css")).await;
    assert_eq!(status, StatusCode::OK);
}
