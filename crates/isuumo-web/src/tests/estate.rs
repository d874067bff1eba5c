use axum::http::StatusCode;
use serde_json::{Value, json};

use super::harness::{TestHarness, chair_row, decode_json, estate_row, json_request};

fn ids(body: &Value, key: &str) -> Vec<i64> {
    body[key]
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}

async fn seed_estates(harness: &TestHarness, csv: &str) {
    let response = harness.upload_csv("/api/estate", "estates", csv).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn estate_detail_uses_camel_case_keys() {
    let harness = TestHarness::setup();
    seed_estates(&harness, &estate_row(1, 35.6, 139.7, (90, 120))).await;

    let response = harness.get("/api/estate/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = decode_json(response).await;
    assert_eq!(body["doorWidth"], 90);
    assert_eq!(body["doorHeight"], 120);
    assert!(body.get("popularity").is_none());

    assert_eq!(
        harness.get("/api/estate/2").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn estate_search_and_low_priced_listing() {
    let harness = TestHarness::setup();
    let csv = (1..=25)
        .map(|id| estate_row(id, 35.0, 139.0, (100, 100)))
        .collect::<String>();
    seed_estates(&harness, &csv).await;

    let body: Value = decode_json(
        harness
            .get("/api/estate/search?rentRangeId=0&page=0&perPage=3")
            .await,
    )
    .await;
    assert_eq!(body["count"], 9);
    assert_eq!(ids(&body, "estates"), vec![9, 8, 7]);

    let low: Value = decode_json(harness.get("/api/estate/low_priced").await).await;
    let low_ids = ids(&low, "estates");
    assert_eq!(low_ids.len(), 20);
    assert_eq!(low_ids[0], 1);
}

#[tokio::test]
async fn estate_search_condition_uses_camel_case() {
    let harness = TestHarness::setup();
    let body: Value = decode_json(harness.get("/api/estate/search/condition").await).await;
    assert_eq!(
        body["doorWidth"]["ranges"].as_array().map(Vec::len),
        Some(4)
    );
    assert_eq!(body["rent"]["ranges"][3]["max"], -1);
}

#[tokio::test]
async fn document_request_validates_email_and_estate() {
    let harness = TestHarness::setup();
    seed_estates(&harness, &estate_row(1, 35.0, 139.0, (100, 100))).await;

    let ok = harness
        .send(json_request(
            "/api/estate/req_doc/1",
            json!({"email": "me@example.com"}),
        ))
        .await;
    assert_eq!(ok.status(), StatusCode::OK);

    let missing_email = harness
        .send(json_request("/api/estate/req_doc/1", json!({})))
        .await;
    assert_eq!(missing_email.status(), StatusCode::BAD_REQUEST);

    let missing_estate = harness
        .send(json_request(
            "/api/estate/req_doc/99",
            json!({"email": "me@example.com"}),
        ))
        .await;
    assert_eq!(missing_estate.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn nazotte_returns_estates_inside_polygon() {
    let harness = TestHarness::setup();
    let csv = [
        estate_row(1, 5.0, 5.0, (100, 100)),
        estate_row(2, 20.0, 20.0, (100, 100)),
        estate_row(3, 0.0, 0.0, (100, 100)),
    ]
    .concat();
    seed_estates(&harness, &csv).await;

    let polygon = json!({"coordinates": [
        {"latitude": 0.0, "longitude": 0.0},
        {"latitude": 0.0, "longitude": 10.0},
        {"latitude": 10.0, "longitude": 10.0},
        {"latitude": 10.0, "longitude": 0.0},
    ]});
    let response = harness
        .send(json_request("/api/estate/nazotte", polygon))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = decode_json(response).await;
    assert_eq!(body["count"], 2);
    assert_eq!(ids(&body, "estates"), vec![3, 1]);
}

#[tokio::test]
async fn nazotte_rejects_empty_or_malformed_polygon() {
    let harness = TestHarness::setup();

    let empty = harness
        .send(json_request(
            "/api/estate/nazotte",
            json!({"coordinates": []}),
        ))
        .await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

    let malformed = harness
        .send(json_request(
            "/api/estate/nazotte",
            json!({"coordinates": "nope"}),
        ))
        .await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn estate_upload_larger_than_default_body_limit_is_accepted() {
    let harness = TestHarness::setup();
    let csv = (1..=30_000)
        .map(|id| estate_row(id, 35.0, 139.0, (100, 100)))
        .collect::<String>();
    assert!(csv.len() > 2 * 1024 * 1024);

    seed_estates(&harness, &csv).await;
    assert_eq!(
        harness.get("/api/estate/30000").await.status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn recommendations_refresh_after_estate_upload() {
    let harness = TestHarness::setup();
    // chair is 100 wide, 90 high, 60 deep
    let response = harness
        .upload_csv("/api/chair", "chairs", &chair_row(1, 4500, 1))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    seed_estates(
        &harness,
        &[
            estate_row(1, 35.0, 139.0, (60, 90)),
            estate_row(2, 35.0, 139.0, (59, 59)),
        ]
        .concat(),
    )
    .await;

    let first: Value = decode_json(harness.get("/api/recommended_estate/1").await).await;
    assert_eq!(ids(&first, "estates"), vec![1]);
    assert_eq!(
        harness
            .state
            .app
            .recommendation_cache()
            .len()
            .expect("cache len"),
        1
    );

    seed_estates(&harness, &estate_row(3, 35.0, 139.0, (100, 60))).await;
    let second: Value = decode_json(harness.get("/api/recommended_estate/1").await).await;
    assert_eq!(ids(&second, "estates"), vec![3, 1]);
}

#[tokio::test]
async fn recommendation_for_unknown_chair_is_bad_request() {
    let harness = TestHarness::setup();
    let response = harness.get("/api/recommended_estate/404").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = decode_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}
