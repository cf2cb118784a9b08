//! Calculator route handlers

use axum::{routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::area::compute_area_str;
use super::pricing::sync_pricing;
use super::requests::{CalculateAreaRequest, SyncPricingRequest};
use super::responses::{AreaResponse, PricingResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/calculator/area", post(calculate_area))
        .route("/api/calculator/pricing", post(calculate_pricing))
}

/// Closed area from a column layout
pub async fn calculate_area(Json(req): Json<CalculateAreaRequest>) -> Result<Json<AreaResponse>> {
    let calculation = compute_area_str(&req.column_count, &req.column_spacing, &req.width)?;

    if calculation.is_degenerate() {
        tracing::debug!(
            column_count = %req.column_count,
            column_spacing = %req.column_spacing,
            width = %req.width,
            area = %calculation.area,
            "Column layout gives no usable area"
        );
    }

    Ok(Json(calculation.into()))
}

/// Unit/total price synchronisation for a listing form
pub async fn calculate_pricing(Json(req): Json<SyncPricingRequest>) -> Json<PricingResponse> {
    let outcome = sync_pricing(
        req.closed_area.as_deref(),
        &req.unit_price,
        &req.total_price,
        req.listing_type,
    );
    Json(PricingResponse::new(outcome, req.listing_type))
}
