//! Request DTOs for calculator API endpoints.

use serde::{Deserialize, Deserializer};

use super::pricing::ListingType;

/// Form fields arrive as text, but JSON clients may also send plain numbers.
/// Both are kept as the raw text the user would have typed.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Null(()) => String::new(),
    })
}

fn optional_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = text_or_number(deserializer)?;
    Ok(if text.is_empty() { None } else { Some(text) })
}

/// Request to calculate closed area from a column layout
#[derive(Debug, Deserialize)]
pub struct CalculateAreaRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub column_count: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub column_spacing: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub width: String,
}

/// Request to synchronise the price fields of a listing form
#[derive(Debug, Deserialize)]
pub struct SyncPricingRequest {
    #[serde(default, deserialize_with = "optional_text_or_number")]
    pub closed_area: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub unit_price: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub total_price: String,
    pub listing_type: ListingType,
}
