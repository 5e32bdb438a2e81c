//! Response DTOs for the pricing API endpoint.

use serde::Serialize;

use super::models::{DeliveryQuote, PriceResult};

/// Delivery breakdown in a price response
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryResponse {
    pub fee: i64,
    pub distance: i64,
}

/// Response for a delivery order price calculation
#[derive(Debug, Clone, Serialize)]
pub struct PriceResponse {
    pub total_price: i64,
    pub small_order_surcharge: i64,
    pub cart_value: i64,
    pub delivery: DeliveryResponse,
}

impl From<DeliveryQuote> for DeliveryResponse {
    fn from(quote: DeliveryQuote) -> Self {
        Self {
            fee: quote.fee,
            distance: quote.distance,
        }
    }
}

impl From<PriceResult> for PriceResponse {
    fn from(result: PriceResult) -> Self {
        Self {
            total_price: result.total_price,
            small_order_surcharge: result.small_order_surcharge,
            cart_value: result.cart_value,
            delivery: result.delivery.into(),
        }
    }
}

/// Error body shared by every failing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
