mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use drankspel::{db::Db, router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> (axum::Router, Db) {
    let db = common::create_test_db().await;
    (router(AppState { db: db.clone() }), db)
}

async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            req = req.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(req.body(body).expect("request build should succeed"))
        .await
        .expect("router should respond");

    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response should be JSON")
    };
    (status, value)
}

#[tokio::test]
async fn users_can_register_and_be_fetched() {
    let (app, _db) = app().await;

    let (status, user) = send(&app, Method::POST, "/users", Some(json!({"name": "Mila"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "Mila");
    assert_eq!(user["is_admin"], false);
    assert_eq!(user["wins"], 0);

    // registering the same name again returns the same row
    let (status, again) = send(&app, Method::POST, "/users", Some(json!({"name": "Mila"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again["id"], user["id"]);

    let uri = format!("/users/{}", user["id"]);
    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Mila");

    let (status, _) = send(&app, Method::GET, "/users/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_registration_requires_a_name() {
    let (app, _db) = app().await;

    for body in [json!({}), json!({"name": ""}), json!({"name": "   "})] {
        let (status, err) = send(&app, Method::POST, "/users", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], "name required");
    }
}

#[tokio::test]
async fn game_creation_rejects_bad_setups_before_writing() {
    let (app, db) = app().await;

    let cases = [
        json!({"player_names": ["Ann", "Bo"]}),
        json!({"point_limit": 0, "player_names": ["Ann", "Bo"]}),
        json!({"point_limit": 10, "player_names": ["Ann"]}),
        json!({"point_limit": 10}),
    ];
    for body in cases {
        let (status, err) = send(&app, Method::POST, "/games", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], "invalid game setup");
    }

    // the rejected setups never registered their players
    assert!(db.get_user(1).await.unwrap().is_none());
}

#[tokio::test]
async fn full_game_round_trip_over_http() {
    let (app, _db) = app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/games",
        Some(json!({"point_limit": 1000, "player_names": ["Ann", "Bo"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let game_id = created["game_id"].as_i64().expect("game_id should be set");

    let (status, view) = send(&app, Method::GET, &format!("/games/{game_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["game"]["status"], "active");
    assert_eq!(view["players"].as_array().unwrap().len(), 2);
    assert_eq!(view["players"][0]["name"], "Ann");
    assert_eq!(view["players"][1]["name"], "Bo");

    let (status, card) = send(
        &app,
        Method::GET,
        &format!("/games/{game_id}/next-card"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(card["current_player"]["name"], "Ann");
    let questions = card["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    let mut points: Vec<i64> = questions.iter().map(|q| q["points"].as_i64().unwrap()).collect();
    points.sort();
    assert_eq!(points, [1, 3, 5]);

    let tier2 = questions.iter().find(|q| q["points"] == 3).unwrap();
    let (status, resolved) = send(
        &app,
        Method::POST,
        &format!("/games/{game_id}/answer"),
        Some(json!({
            "card_id": card["card_id"],
            "question_id": tier2["id"],
            "action_type": "answered",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resolved["success"], true);
    assert_eq!(resolved["next_player_turn"], 1);
    assert_eq!(resolved["new_score"], 3);
}

#[tokio::test]
async fn unknown_games_return_not_found() {
    let (app, _db) = app().await;

    let (status, _) = send(&app, Method::GET, "/games/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/games/42/next-card", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/games/42/answer",
        Some(json!({"card_id": 1, "question_id": 1, "action_type": "answered"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_endpoints_reject_non_admin_callers() {
    let (app, db) = app().await;
    let plain = db.find_or_create_user("Mila").await.unwrap();

    let cases = [
        json!({"difficulty": 1, "text": "t"}),
        json!({"user_id": plain.id, "difficulty": 1, "text": "t"}),
        json!({"user_id": 999999, "difficulty": 1, "text": "t"}),
    ];
    for body in cases {
        let (status, err) = send(&app, Method::POST, "/admin/questions", Some(body)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(err["error"], "not admin");
    }

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/admin/questions/1",
        Some(json!({"user_id": plain.id})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admins_can_manage_the_question_bank() {
    let (app, db) = app().await;
    let admin = db.find_or_create_user("Root").await.unwrap();
    db.set_admin(admin.id, true).await.unwrap();

    let (status, question) = send(
        &app,
        Method::POST,
        "/admin/questions",
        Some(json!({
            "user_id": admin.id,
            "difficulty": 2,
            "text": "Vertel je beste mop",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(question["difficulty"], 2);
    assert_eq!(question["points"], 3, "tier 2 maps to 3 points");
    let question_id = question["id"].as_i64().unwrap();

    // invalid tier is rejected
    let (status, _) = send(
        &app,
        Method::POST,
        "/admin/questions",
        Some(json!({"user_id": admin.id, "difficulty": 4, "text": "t"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // listed among the live questions, ordered by tier then id
    let (status, listed) = send(&app, Method::GET, "/admin/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed.len(), 151);
    assert!(listed.iter().any(|q| q["id"] == question_id));
    let tiers: Vec<i64> = listed.iter().map(|q| q["difficulty"].as_i64().unwrap()).collect();
    let mut sorted = tiers.clone();
    sorted.sort();
    assert_eq!(tiers, sorted);

    let (status, deleted) = send(
        &app,
        Method::DELETE,
        &format!("/admin/questions/{question_id}"),
        Some(json!({"user_id": admin.id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["success"], true);

    let (_, listed) = send(&app, Method::GET, "/admin/questions", None).await;
    assert!(listed.as_array().unwrap().iter().all(|q| q["id"] != question_id));
}
