//! Listing models used by the share message.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::requests::text_or_number;
use crate::calculator::ListingType;

/// Property category of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    Daire,
    #[default]
    Fabrika,
    Arsa,
    Ofis,
    Depo,
    Arazi,
}

impl PropertyCategory {
    pub fn label(self) -> &'static str {
        match self {
            PropertyCategory::Daire => "Daire",
            PropertyCategory::Fabrika => "Fabrika",
            PropertyCategory::Arsa => "Arsa",
            PropertyCategory::Ofis => "Ofis",
            PropertyCategory::Depo => "Depo",
            PropertyCategory::Arazi => "Arazi",
        }
    }
}

/// Listing currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Try,
    Usd,
    Eur,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Try => "TRY",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency '{0}', expected TRY, USD or EUR")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRY" => Ok(Currency::Try),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

/// What the listing form knows about a property when the user shares it.
///
/// Numeric fields are the raw form text; empty means "not filled in".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingSummary {
    pub title: String,
    #[serde(default)]
    pub category: PropertyCategory,
    #[serde(default)]
    pub listing_type: ListingType,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub closed_area: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub open_area: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub total_price: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub unit_price: String,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub height: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub power: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub ada: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub parsel: String,
}
