//! Response DTOs for calculator API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::area::AreaCalculation;
use super::format::format_area;
use super::pricing::{ListingType, PriceField, PricingOutcome};

/// Response for area calculation
#[derive(Debug, Serialize)]
pub struct AreaResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub length: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub area: Decimal,
    pub area_display: String,
    pub degenerate: bool,
}

impl From<AreaCalculation> for AreaResponse {
    fn from(calculation: AreaCalculation) -> Self {
        Self {
            length: calculation.length.normalize(),
            area: calculation.area.normalize(),
            area_display: format_area(calculation.area),
            degenerate: calculation.is_degenerate(),
        }
    }
}

/// Response for price synchronisation
#[derive(Debug, Serialize)]
pub struct PricingResponse {
    pub unit_price: String,
    pub total_price: String,
    pub driving_field: PriceField,
    pub derived_field: PriceField,
    pub recalculated: bool,
}

impl PricingResponse {
    pub fn new(outcome: PricingOutcome, listing_type: ListingType) -> Self {
        Self {
            unit_price: outcome.unit_price,
            total_price: outcome.total_price,
            driving_field: listing_type.driving_field(),
            derived_field: listing_type.derived_field(),
            recalculated: outcome.recalculated,
        }
    }
}

/// Generic calculator error response
#[derive(Debug, Serialize)]
pub struct CalculatorErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
