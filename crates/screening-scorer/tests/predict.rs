use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use screening_core::models::scoring::ScoringRequest;
use screening_scorer::router;
use screening_scorer::scoring::Scores;

async fn call(request: Request<Body>) -> (StatusCode, Value) {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_predict(body: Value) -> Request<Body> {
    Request::post("/predict")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn full_payload(faq: &str, npi: (&str, &str), gds: &str, cdr: &str) -> Value {
    let faq: serde_json::Map<_, _> = (1..=10).map(|i| (format!("Q{i}"), json!(faq))).collect();
    let gds: serde_json::Map<_, _> = (1..=15).map(|i| (format!("Q{i}"), json!(gds))).collect();
    let npi: serde_json::Map<_, _> = screening_instruments::instruments::npi::DOMAINS
        .iter()
        .map(|d| (d.to_string(), json!({ "frequency": npi.0, "severity": npi.1 })))
        .collect();
    let cdr: serde_json::Map<_, _> = screening_instruments::instruments::cdr::DOMAINS
        .iter()
        .map(|d| (d.to_string(), json!(cdr)))
        .collect();
    json!({ "FAQ": faq, "NPI": npi, "GDS": gds, "CDR": cdr })
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = call(Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lowest_answers_are_unlikely() {
    let (status, body) = call(post_predict(full_payload("0", ("1", "1"), "0", "0"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["result"],
        "Unlikely Alzheimer's (FAQ: 0, NPI: 12, GDS: 0, CDR: 0.0)"
    );
}

#[tokio::test]
async fn any_cutoff_exceeded_is_likely() {
    let (_, body) = call(post_predict(full_payload("1", ("1", "1"), "0", "0"))).await;
    assert_eq!(
        body["result"],
        "Likely Alzheimer's (FAQ: 10, NPI: 12, GDS: 0, CDR: 0.0)"
    );

    let (_, body) = call(post_predict(full_payload("0", ("1", "1"), "0", "0.5"))).await;
    assert_eq!(
        body["result"],
        "Likely Alzheimer's (FAQ: 0, NPI: 12, GDS: 0, CDR: 3.0)"
    );
}

#[tokio::test]
async fn empty_instruments_score_zero() {
    let (status, body) = call(post_predict(json!({ "FAQ": {}, "NPI": {}, "GDS": {}, "CDR": {} }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["result"],
        "Unlikely Alzheimer's (FAQ: 0, NPI: 0, GDS: 0, CDR: 0.0)"
    );
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let request = Request::post("/predict")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = call(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn instrument_catalog_is_served() {
    let (status, body) = call(Request::get("/instruments").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["FAQ", "NPI", "GDS", "CDR"]);

    let (status, body) = call(Request::get("/instruments/cdr").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["shape"], "scalar_mapped");
    assert_eq!(body["questions"][1]["options"]["options"][1]["value"], "0.5");

    let (status, _) = call(Request::get("/instruments/mmse").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn non_numeric_values_contribute_nothing() {
    let request: ScoringRequest = serde_json::from_value(json!({
        "FAQ": { "Q1": "3", "Q2": "x" },
        "NPI": { "Anxiety": { "frequency": "4" }, "Apathy/Indifference": { "frequency": "2", "severity": "3" } },
        "GDS": { "Q1": "1" },
        "CDR": { "Memory": "0.5", "Orientation": "n/a" }
    }))
    .unwrap();

    let scores = Scores::from_request(&request);
    assert_eq!(scores.faq, 3);
    assert_eq!(scores.npi, 6);
    assert_eq!(scores.gds, 1);
    assert_eq!(scores.cdr, 0.5);
}

#[test]
fn values_outside_the_option_set_contribute_nothing() {
    let request: ScoringRequest = serde_json::from_value(json!({
        "FAQ": { "Q1": "4294967295", "Q2": "1", "Q3": "7" },
        "NPI": {
            "Delusions": { "frequency": "4294967295", "severity": "2" },
            "Anxiety": { "frequency": "3", "severity": "3" }
        },
        "GDS": { "Q1": "4294967295", "Q2": "1" },
        "CDR": { "Memory": "1e308", "Orientation": "inf", "Judgment & Problem Solving": "1" }
    }))
    .unwrap();

    let scores = Scores::from_request(&request);
    assert_eq!(scores.faq, 1);
    assert_eq!(scores.npi, 9);
    assert_eq!(scores.gds, 1);
    assert_eq!(scores.cdr, 1.0);
}

#[tokio::test]
async fn oversized_numbers_still_get_a_verdict() {
    let (status, body) = call(post_predict(json!({
        "FAQ": { "Q1": "4294967295", "Q2": "1" },
        "NPI": {},
        "GDS": {},
        "CDR": {}
    })))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["result"],
        "Unlikely Alzheimer's (FAQ: 1, NPI: 0, GDS: 0, CDR: 0.0)"
    );
}
