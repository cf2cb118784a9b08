//! Share route handlers

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::AppState;

use super::message::{render_share_text, whatsapp_url};
use super::models::ListingSummary;
use super::qr::qr_code_data_uri;

/// Request to build a share message for a listing
#[derive(Debug, Deserialize)]
pub struct ShareListingRequest {
    #[serde(flatten)]
    pub listing: ListingSummary,
    #[serde(default)]
    pub include_qr: bool,
}

/// Response for a listing share message
#[derive(Debug, Serialize)]
pub struct ShareListingResponse {
    pub text: String,
    pub whatsapp_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/listings/share", post(share_listing))
}

/// Share message, WhatsApp link and optional QR code for a listing
pub async fn share_listing(
    State(state): State<AppState>,
    Json(req): Json<ShareListingRequest>,
) -> Result<Json<ShareListingResponse>> {
    let text = render_share_text(&req.listing, state.config.default_currency)?;
    let url = whatsapp_url(&state.config.share_base_url, &text);

    let qr_code = if req.include_qr {
        let link = url.clone();
        let uri = tokio::task::spawn_blocking(move || qr_code_data_uri(&link))
            .await
            .map_err(|e| AppError::Internal(format!("QR code task failed: {}", e)))??;
        Some(uri)
    } else {
        None
    };

    tracing::debug!(
        title = %req.listing.title,
        listing_type = ?req.listing.listing_type,
        with_qr = qr_code.is_some(),
        "Built listing share message"
    );

    Ok(Json(ShareListingResponse {
        text,
        whatsapp_url: url,
        qr_code,
    }))
}
