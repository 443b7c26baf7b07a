use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use ride_hub::api::rest::router;
use ride_hub::seed;
use ride_hub::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

fn setup() -> axum::Router {
    router(Arc::new(AppState::with_demo_data(1024)), "static")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn names(body: &Value, field: &str) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item[field].as_str().unwrap().to_string())
        .collect()
}

fn ride_payload(organizer_id: &str, max_riders: Value) -> Value {
    json!({
        "organizer_id": organizer_id,
        "title": "Canyon Sunrise",
        "description": "Early twisties before the traffic",
        "date": "2024-03-02T06:30:00Z",
        "meeting_location": {
            "name": "Rock Store",
            "address": "30354 Mulholland Hwy",
            "coordinates": { "lat": 34.12, "lng": -118.76 }
        },
        "ride_type": "sport",
        "skill_level": "advanced",
        "max_riders": max_riders
    })
}

#[tokio::test]
async fn health_reports_catalog_sizes() {
    let app = setup();
    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["riders"], 3);
    assert_eq!(body["rides"], 2);
    assert_eq!(body["routes"], 3);
}

#[tokio::test]
async fn empty_state_has_no_riders() {
    let app = router(Arc::new(AppState::empty(16)), "static");
    let response = app.oneshot(get_request("/riders")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn unfiltered_riders_keep_seed_order() {
    let app = setup();
    let response = app.oneshot(get_request("/riders")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        names(&body, "name"),
        vec!["Mike Johnson", "Sarah Chen", "Alex Rodriguez"]
    );
}

#[tokio::test]
async fn rider_search_is_case_insensitive() {
    let app = setup();

    let upper = body_json(
        app.clone()
            .oneshot(get_request("/riders?search=HARLEY"))
            .await
            .unwrap(),
    )
    .await;
    let lower = body_json(
        app.oneshot(get_request("/riders?search=harley"))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(upper, lower);
    assert_eq!(names(&upper, "name"), vec!["Mike Johnson"]);
}

#[tokio::test]
async fn rider_filters_combine() {
    let app = setup();
    let response = app
        .oneshot(get_request(
            "/riders?riding_style=touring&bike_type=adventure&skill_level=all",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(names(&body, "name"), vec!["Alex Rodriguez"]);
}

#[tokio::test]
async fn unknown_skill_level_returns_400() {
    let app = setup();
    let response = app
        .oneshot(get_request("/riders?skill_level=legendary"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("skill_level"));
}

#[tokio::test]
async fn rides_filter_by_type() {
    let app = setup();
    let response = app
        .oneshot(get_request("/rides?ride_type=sport"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(names(&body, "title"), vec!["Twisty Mountain Roads"]);
    assert_eq!(body[0]["skill_level"], "advanced");
}

#[tokio::test]
async fn routes_filter_by_tag_selection() {
    let app = setup();
    let response = app
        .oneshot(get_request("/routes?tags=scenic"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        names(&body, "name"),
        vec!["Pacific Coast Highway", "Blue Ridge Parkway"]
    );
}

#[tokio::test]
async fn route_tags_are_listed_once_in_order() {
    let app = setup();
    let response = app.oneshot(get_request("/routes/tags")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let tags: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|tag| tag.as_str().unwrap())
        .collect();
    assert_eq!(&tags[..4], &["coastal", "scenic", "highway", "twisty"]);
    assert_eq!(tags.len(), 8);
}

#[tokio::test]
async fn create_ride_appends_to_listing() {
    let app = setup();
    let organizer = seed::SARAH_ID.to_string();

    let res = app
        .clone()
        .oneshot(json_request("POST", "/rides", ride_payload(&organizer, json!(8))))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let ride = body_json(res).await;
    assert_eq!(ride["status"], "planning");
    assert_eq!(ride["organizer"]["id"], organizer);
    assert_eq!(ride["current_riders"].as_array().unwrap().len(), 0);

    let res = app
        .oneshot(get_request("/rides?ride_type=sport"))
        .await
        .unwrap();
    let body = body_json(res).await;
    assert_eq!(
        names(&body, "title"),
        vec!["Twisty Mountain Roads", "Canyon Sunrise"]
    );
}

#[tokio::test]
async fn create_ride_with_zero_capacity_returns_400() {
    let app = setup();
    let response = app
        .oneshot(json_request(
            "POST",
            "/rides",
            ride_payload(&seed::MIKE_ID.to_string(), json!(0)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_ride_for_unknown_organizer_returns_404() {
    let app = setup();
    let response = app
        .oneshot(json_request(
            "POST",
            "/rides",
            ride_payload("00000000-0000-0000-0000-000000000000", Value::Null),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_route_without_waypoints_returns_400() {
    let app = setup();
    let response = app
        .oneshot(json_request(
            "POST",
            "/routes",
            json!({
                "creator_id": seed::ALEX_ID.to_string(),
                "name": "Nowhere",
                "description": "No stops at all",
                "waypoints": [],
                "difficulty": "easy",
                "tags": ["empty"]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn created_route_is_searchable_by_tag() {
    let app = setup();

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/routes",
            json!({
                "creator_id": seed::ALEX_ID.to_string(),
                "name": "Million Dollar Highway",
                "description": "Ouray to Silverton",
                "waypoints": [
                    { "name": "Ouray", "coordinates": { "lat": 38.02, "lng": -107.67 }, "waypoint_type": "start" },
                    { "name": "Red Mountain Pass", "coordinates": { "lat": 37.89, "lng": -107.71 }, "waypoint_type": "scenic" },
                    { "name": "Silverton", "coordinates": { "lat": 37.81, "lng": -107.66 }, "waypoint_type": "end" }
                ],
                "difficulty": "difficult",
                "tags": [" alpine ", "mountains"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let route = body_json(res).await;
    assert_eq!(route["is_public"], true);
    assert_eq!(route["tags"], json!(["alpine", "mountains"]));

    let res = app
        .oneshot(get_request("/routes?search=ALPINE&difficulty=difficult"))
        .await
        .unwrap();
    let body = body_json(res).await;
    assert_eq!(names(&body, "name"), vec!["Million Dollar Highway"]);
}

#[tokio::test]
async fn edit_profile_updates_rider() {
    let app = setup();
    let id = seed::MIKE_ID;

    let res = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/riders/{id}"),
            json!({
                "name": "Mike Johnson",
                "bio": "Now riding sport bikes too",
                "city": "Brooklyn",
                "state": "NY",
                "skill_level": "advanced",
                "riding_styles": ["sport", "cruise"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let rider = body_json(res).await;
    assert_eq!(rider["location"]["city"], "Brooklyn");
    assert_eq!(rider["riding_styles"], json!(["sport", "cruise"]));

    let res = app
        .oneshot(get_request("/riders?riding_style=sport&skill_level=advanced"))
        .await
        .unwrap();
    let body = body_json(res).await;
    assert_eq!(names(&body, "name"), vec!["Mike Johnson"]);
}

#[tokio::test]
async fn edit_profile_without_styles_returns_400() {
    let app = setup();
    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/riders/{}", seed::MIKE_ID),
            json!({
                "name": "Mike",
                "city": "New York",
                "state": "NY",
                "skill_level": "beginner",
                "riding_styles": []
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn added_bike_is_found_by_bike_type_filter() {
    let app = setup();

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/riders/{}/bikes", seed::SARAH_ID),
            json!({
                "make": "Vespa",
                "model": "GTS 300",
                "year": 2021,
                "bike_type": "scooter",
                "mods": ["Windscreen", " "]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let rider = body_json(res).await;
    assert_eq!(rider["bikes"].as_array().unwrap().len(), 2);
    assert_eq!(rider["bikes"][1]["mods"], json!(["Windscreen"]));

    let res = app
        .oneshot(get_request("/riders?bike_type=scooter&search=vespa"))
        .await
        .unwrap();
    let body = body_json(res).await;
    assert_eq!(names(&body, "name"), vec!["Sarah Chen"]);
}

#[tokio::test]
async fn hooks_return_accepted_and_broadcast() {
    let state = Arc::new(AppState::with_demo_data(16));
    let mut rx = state.activity_tx.subscribe();
    let app = router(state.clone(), "static");

    let res = app
        .clone()
        .oneshot(post_empty(&format!("/rides/{}/join", seed::SUNDAY_CRUISE_ID)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::ACCEPTED);
    let event = body_json(res).await;
    assert_eq!(event["action"], "join");

    let received = rx.recv().await.unwrap();
    assert_eq!(received.target_id, seed::SUNDAY_CRUISE_ID);

    let res = app
        .clone()
        .oneshot(post_empty(&format!("/riders/{}/connect", seed::ALEX_ID)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::ACCEPTED);

    let res = app
        .oneshot(post_empty(&format!("/routes/{}/save", seed::PACIFIC_COAST_ID)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn hook_on_unknown_target_returns_404() {
    let app = setup();
    let fake_id = "00000000-0000-0000-0000-000000000000";
    let response = app
        .oneshot(post_empty(&format!("/routes/{fake_id}/save")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn metrics_count_filters_and_hooks() {
    let app = setup();

    app.clone()
        .oneshot(get_request("/routes?difficulty=moderate"))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_empty(&format!("/routes/{}/save", seed::BLUE_RIDGE_ID)))
        .await
        .unwrap();

    let response = app.oneshot(get_request("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("filter_requests_total{entity=\"route\"} 1"));
    assert!(body.contains("hook_events_total{action=\"save\"} 1"));
    assert!(body.contains("catalog_size{entity=\"rider\"} 3"));
}
