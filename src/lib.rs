//! Delivery order price calculator.
//!
//! An axum service quoting the total price of a delivery order from the cart
//! value, the venue's pricing rules and the customer's distance to the venue.

pub mod config;
pub mod error;
pub mod middleware;
pub mod pricing;
pub mod routes;
pub mod venues;

use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::pricing::CartValueMode;
use crate::venues::VenueClient;

/// Shared per-process state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub venues: VenueClient,
    pub cart_value_mode: CartValueMode,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(middleware::REQUEST_ID_HEADER),
        ])
}

/// Build the application router with all routes and layers.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(pricing::router())
        .route("/health", get(routes::health::health))
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http().make_span_with(middleware::make_request_span))
                .layer(build_cors()),
        )
        .with_state(state)
}
