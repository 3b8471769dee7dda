//! Drives the HTTP client against the reference scorer on a loopback port.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;

use screening_core::models::instrument::{Axis, InstrumentId};
use screening_core::models::scoring::ScoringRequest;
use screening_session::assessment::{Assessment, Phase};
use screening_session::client::{HttpScoringClient, ScoringClient};
use screening_session::error::ScoringError;
use screening_session::shared::{PredictOutcome, SharedAssessment};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/predict")
}

fn all_complete() -> Assessment {
    let mut assessment = Assessment::new();
    for id in InstrumentId::ALL {
        assessment.select(id);
        assessment.start();
        loop {
            if id == InstrumentId::Npi {
                assessment.answer_axis(Axis::Frequency, "1").unwrap();
                assessment.answer_axis(Axis::Severity, "1").unwrap();
            } else {
                assessment.answer_option(None, 0).unwrap();
            }
            if !assessment.next() {
                break;
            }
        }
        assert!(assessment.submit());
    }
    assessment
}

#[tokio::test]
async fn full_session_against_the_reference_scorer() {
    let url = serve(screening_scorer::router()).await;
    let client = HttpScoringClient::new(url, None).unwrap();
    let shared = SharedAssessment::new(all_complete());

    let outcome = shared.predict(&client).await;
    assert_eq!(
        outcome,
        PredictOutcome::Ready("Unlikely Alzheimer's (FAQ: 0, NPI: 12, GDS: 0, CDR: 0.0)".to_string())
    );

    let mut assessment = shared.lock().await;
    assert_eq!(assessment.phase(), Phase::ResultReady);
    assert!(assessment.restart());
    assert_eq!(assessment.phase(), Phase::Selecting);
}

#[tokio::test]
async fn error_status_is_reported() {
    let app = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model offline") }),
    );
    let client = HttpScoringClient::new(serve(app).await, None).unwrap();

    let err = client.predict(&ScoringRequest::default()).await.unwrap_err();
    assert!(matches!(err, ScoringError::Status { status: 500, ref body } if body == "model offline"));
}

#[tokio::test]
async fn response_without_result_is_malformed() {
    let app = Router::new().route(
        "/predict",
        post(|| async { axum::Json(serde_json::json!({ "prediction": "likely" })) }),
    );
    let client = HttpScoringClient::new(serve(app).await, None).unwrap();
    let shared = SharedAssessment::new(all_complete());

    let outcome = shared.predict(&client).await;
    assert!(matches!(outcome, PredictOutcome::Failed(ref msg) if msg.contains("malformed")));

    let assessment = shared.lock().await;
    assert!(assessment.result().is_none());
    assert!(assessment.can_predict());
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpScoringClient::new(format!("http://{addr}/predict"), None).unwrap();
    let err = client.predict(&ScoringRequest::default()).await.unwrap_err();
    assert!(matches!(err, ScoringError::Transport(_)));
}
