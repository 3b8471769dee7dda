//! screening-scorer
//!
//! Reference scoring service. Sums each instrument, applies fixed cut-offs
//! and answers `POST /predict` with a one-line verdict. Also serves the
//! instrument catalog so a web front end can render the questions.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod scoring;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

/// Build the service router.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route("/predict", post(routes::predict::predict))
        .layer(axum_mw::from_fn(middleware::access_log::access_log))
        .layer(cors)
}
