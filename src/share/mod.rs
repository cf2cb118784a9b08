//! Listing share messages.
//!
//! Builds the plain-text portfolio announcement a broker sends to contacts,
//! the WhatsApp link that pre-fills it, and an optional QR code of that link.

pub mod message;
pub mod models;
pub mod qr;
pub mod routes;

pub use message::{render_share_text, whatsapp_url};
pub use models::{Currency, ListingSummary, PropertyCategory};
pub use qr::qr_code_data_uri;
pub use routes::router;

/// Share message generation error types
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("QR code error: {0}")]
    QrCode(#[from] qrcode::types::QrError),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
