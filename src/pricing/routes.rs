//! HTTP handler for the delivery order price endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::errors::PricingError;
use super::requests::PriceQuery;
use super::responses::PriceResponse;
use super::services::quote_delivery_price;

pub const DELIVERY_ORDER_PRICE_PATH: &str = "/api/v1/delivery-order-price";

/// Pricing routes. Only retrieval methods are served; anything else is 405.
pub fn router() -> Router<AppState> {
    Router::new().route(
        DELIVERY_ORDER_PRICE_PATH,
        get(delivery_order_price).fallback(method_not_allowed),
    )
}

/// `GET /api/v1/delivery-order-price?venue_slug=&cart_value=&user_lat=&user_lon=`
pub async fn delivery_order_price(
    State(state): State<AppState>,
    query: std::result::Result<Query<PriceQuery>, QueryRejection>,
) -> Result<Json<PriceResponse>> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!("Query rejected: {}", rejection);
        PricingError::InvalidParameterType
    })?;

    let request = query.into_price_request(state.cart_value_mode)?;
    let result = quote_delivery_price(&state.venues, &request).await?;

    Ok(Json(result.into()))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
