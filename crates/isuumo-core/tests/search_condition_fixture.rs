use std::{fs, path::PathBuf, time::Duration};

use isuumo_core::catalog::{CHAIR_CONDITION_FILE, ESTATE_CONDITION_FILE};
use isuumo_core::models::EstateSearchParams;
use isuumo_core::{AppConfig, Isuumo, IsuumoError, SearchConditions};
use serde_json::Value;
use tempfile::tempdir;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture_raw(name: &str) -> Value {
    let raw = fs::read_to_string(fixture_dir().join(name)).expect("read condition fixture");
    serde_json::from_str(&raw).expect("parse condition fixture")
}

#[test]
fn fixture_conditions_roundtrip_to_same_json_shape() {
    let conditions = SearchConditions::load(fixture_dir()).expect("load fixtures");

    let chair = serde_json::to_value(&conditions.chair).expect("serialize chair");
    assert_eq!(chair, load_fixture_raw(CHAIR_CONDITION_FILE));
    let estate = serde_json::to_value(&conditions.estate).expect("serialize estate");
    assert_eq!(estate, load_fixture_raw(ESTATE_CONDITION_FILE));
}

#[test]
fn fixture_buckets_agree_with_builtin_classifier_buckets() {
    let conditions = SearchConditions::load(fixture_dir()).expect("load fixtures");
    let builtin = SearchConditions::default();

    assert_eq!(conditions.chair.price.ranges, builtin.chair.price.ranges);
    assert_eq!(conditions.chair.width.ranges, builtin.chair.width.ranges);
    assert_eq!(conditions.estate.rent.ranges, builtin.estate.rent.ranges);
    assert_eq!(
        conditions.estate.door_height.ranges,
        builtin.estate.door_height.ranges
    );
}

#[test]
fn fixture_with_open_middle_bucket_is_rejected() {
    let temp = tempdir().expect("tempdir");
    let mut chair = load_fixture_raw(CHAIR_CONDITION_FILE);
    chair["price"]["ranges"][2]["max"] = Value::from(-1);
    fs::write(
        temp.path().join(CHAIR_CONDITION_FILE),
        serde_json::to_vec(&chair).expect("chair json"),
    )
    .expect("write chair");
    fs::copy(
        fixture_dir().join(ESTATE_CONDITION_FILE),
        temp.path().join(ESTATE_CONDITION_FILE),
    )
    .expect("copy estate");

    let err = SearchConditions::load(temp.path()).expect_err("gapped price ranges");
    assert!(matches!(err, IsuumoError::Validation(_)));
}

#[test]
fn service_built_from_config_uses_fixture_catalog() {
    let temp = tempdir().expect("tempdir");
    let config = AppConfig {
        db_path: temp.path().join("isuumo.sqlite3"),
        fixture_dir: Some(fixture_dir()),
        feature_throttle: Duration::ZERO,
        ..AppConfig::default()
    };
    let app = Isuumo::from_config(&config).expect("app");

    assert_eq!(app.estate_search_condition().feature.list[0], "バストイレ別");
    let params = EstateSearchParams {
        door_width_range_id: Some("4".to_string()),
        page: Some("0".to_string()),
        per_page: Some("10".to_string()),
        ..EstateSearchParams::default()
    };
    assert!(matches!(
        app.search_estates(&params),
        Err(IsuumoError::OutOfRange(_))
    ));
}

#[test]
fn internal_error_payload_is_opaque() {
    let err = IsuumoError::Internal("sqlite path /var/db leaked".to_string());
    let payload = err.to_payload("estate.search");

    assert_eq!(payload.code, "INTERNAL_ERROR");
    assert_eq!(payload.message, "internal error");
    assert_eq!(payload.operation, "estate.search");
    assert!(uuid::Uuid::parse_str(&payload.trace_id).is_ok());
}

#[test]
fn estate_ingest_through_service_refreshes_recommendations() {
    let temp = tempdir().expect("tempdir");
    let app = Isuumo::new(temp.path().join("isuumo.sqlite3"))
        .expect("app")
        .with_feature_throttle(Duration::ZERO);
    app.ingest_chairs_csv(
        "1,椅子,説明,/images/chair/1.png,4500,20,10,30,黒,肘掛け,座椅子,1,1\n".as_bytes(),
    )
    .expect("chairs");
    app.ingest_estates_csv(
        "1,物件,説明,/images/estate/1.png,東京都,35.6,139.7,80000,20,10,バストイレ別,1\n".as_bytes(),
    )
    .expect("estates");

    let ids = |estates: &[isuumo_core::models::Estate]| {
        estates.iter().map(|estate| estate.id).collect::<Vec<_>>()
    };
    assert_eq!(ids(app.recommended_estates(1).expect("first").as_slice()), vec![1]);

    app.ingest_estates_csv(
        "2,物件,説明,/images/estate/2.png,東京都,35.6,139.7,80000,10,20,バストイレ別,2\n".as_bytes(),
    )
    .expect("more estates");
    assert_eq!(ids(app.recommended_estates(1).expect("second").as_slice()), vec![2, 1]);
}
