//! Area and pricing calculator for property listings.
//!
//! Turns an industrial column layout into closed area and keeps the unit and
//! total price of a listing consistent with that area. The calculation
//! functions are pure; `routes` exposes them over HTTP/JSON for the listing
//! form front-end.

pub mod area;
pub mod format;
pub mod pricing;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use area::{compute_area, compute_area_str, parse_number, AreaCalculation, AreaInput, CalculationError};
pub use format::{format_area, format_tr, round_price};
pub use pricing::{sync_pricing, ListingType, PriceField, PricingOutcome, PricingState};
pub use routes::router;
