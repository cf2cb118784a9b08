//! Unit/total price synchronisation.
//!
//! One price field drives and the other is derived from it and the closed
//! area, depending on the listing type:
//!
//! * for rent: `total = area * unit` (unit price drives)
//! * for sale: `unit = total / area` (total price drives)
//!
//! Missing or non-numeric inputs never fail; the fields are left as they are.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::area::{parse_number, AreaCalculation};
use super::format::round_price;

/// Whether a listing is offered for sale or for rent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    #[default]
    #[serde(alias = "satilik")]
    ForSale,
    #[serde(alias = "kiralik")]
    ForRent,
}

impl ListingType {
    /// The price field the user types into.
    pub fn driving_field(self) -> PriceField {
        match self {
            ListingType::ForSale => PriceField::TotalPrice,
            ListingType::ForRent => PriceField::UnitPrice,
        }
    }

    /// The read-only price field recomputed from the driving one.
    pub fn derived_field(self) -> PriceField {
        self.driving_field().other()
    }

    /// Upper-case label used in share messages.
    pub fn label(self) -> &'static str {
        match self {
            ListingType::ForSale => "SATILIK",
            ListingType::ForRent => "KİRALIK",
        }
    }

    /// Label for the total price line.
    pub fn price_label(self) -> &'static str {
        match self {
            ListingType::ForSale => "Fiyat",
            ListingType::ForRent => "Aylık Kira",
        }
    }
}

/// One of the two price fields on a listing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    UnitPrice,
    TotalPrice,
}

impl PriceField {
    pub fn other(self) -> PriceField {
        match self {
            PriceField::UnitPrice => PriceField::TotalPrice,
            PriceField::TotalPrice => PriceField::UnitPrice,
        }
    }
}

/// Price fields after a synchronisation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingOutcome {
    pub unit_price: String,
    pub total_price: String,
    /// Whether the derived field was recomputed
    pub recalculated: bool,
}

/// Recompute the derived price field from the area and the driving field.
///
/// Returns both fields; the driving one is always passed through verbatim.
/// When the area is absent, zero or non-numeric, or the driving field is
/// empty or non-numeric, nothing is recomputed.
///
/// # Examples
/// ```
/// use listing_calculator::calculator::{sync_pricing, ListingType};
///
/// let out = sync_pricing(Some("500"), "", "1000000", ListingType::ForSale);
/// assert_eq!(out.unit_price, "2000.00");
///
/// let out = sync_pricing(Some("500"), "2000", "", ListingType::ForRent);
/// assert_eq!(out.total_price, "1000000");
/// ```
pub fn sync_pricing(
    area: Option<&str>,
    unit_price: &str,
    total_price: &str,
    listing_type: ListingType,
) -> PricingOutcome {
    let unchanged = || PricingOutcome {
        unit_price: unit_price.to_string(),
        total_price: total_price.to_string(),
        recalculated: false,
    };

    let area = match area.and_then(parse_number) {
        Some(area) if !area.is_zero() => area,
        _ => return unchanged(),
    };

    match listing_type {
        ListingType::ForRent => {
            let total = parse_number(unit_price).and_then(|unit| area.checked_mul(unit));
            match total {
                Some(total) => PricingOutcome {
                    unit_price: unit_price.to_string(),
                    total_price: total.normalize().to_string(),
                    recalculated: true,
                },
                None => unchanged(),
            }
        }
        ListingType::ForSale => {
            let unit = parse_number(total_price).and_then(|total| total.checked_div(area));
            match unit {
                Some(unit) => PricingOutcome {
                    unit_price: round_price(unit).to_string(),
                    total_price: total_price.to_string(),
                    recalculated: true,
                },
                None => unchanged(),
            }
        }
    }
}

/// Caller-owned pricing state for one listing form.
///
/// Holds the raw text of the closed area and both price fields. Every edit
/// re-runs [`sync_pricing`] so the derived field always matches the area
/// and the driving field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingState {
    #[serde(default)]
    pub closed_area: String,
    #[serde(default)]
    pub unit_price: String,
    #[serde(default)]
    pub total_price: String,
    #[serde(default)]
    pub listing_type: ListingType,
}

impl PricingState {
    pub fn new(listing_type: ListingType) -> Self {
        Self {
            listing_type,
            ..Self::default()
        }
    }

    /// Parsed closed area, if the field holds a number.
    pub fn area(&self) -> Option<Decimal> {
        parse_number(&self.closed_area)
    }

    pub fn driving_field(&self) -> PriceField {
        self.listing_type.driving_field()
    }

    pub fn derived_field(&self) -> PriceField {
        self.listing_type.derived_field()
    }

    /// Re-run synchronisation against the current fields.
    pub fn sync(&mut self) -> bool {
        let outcome = sync_pricing(
            Some(&self.closed_area),
            &self.unit_price,
            &self.total_price,
            self.listing_type,
        );
        self.unit_price = outcome.unit_price;
        self.total_price = outcome.total_price;
        outcome.recalculated
    }

    pub fn set_closed_area(&mut self, value: impl Into<String>) {
        self.closed_area = value.into();
        self.sync();
    }

    /// Copy an area calculator result into the closed area field.
    pub fn apply_calculated_area(&mut self, calculation: &AreaCalculation) {
        self.set_closed_area(calculation.area.normalize().to_string());
    }

    /// Edit a price field. Edits to the derived field are refused.
    pub fn set_price(&mut self, field: PriceField, value: impl Into<String>) -> bool {
        if field != self.driving_field() {
            tracing::debug!(?field, listing_type = ?self.listing_type, "Ignoring edit to derived price field");
            return false;
        }
        match field {
            PriceField::UnitPrice => self.unit_price = value.into(),
            PriceField::TotalPrice => self.total_price = value.into(),
        }
        self.sync();
        true
    }

    pub fn set_unit_price(&mut self, value: impl Into<String>) -> bool {
        self.set_price(PriceField::UnitPrice, value)
    }

    pub fn set_total_price(&mut self, value: impl Into<String>) -> bool {
        self.set_price(PriceField::TotalPrice, value)
    }

    /// Switch listing type. The new driving field keeps its value and the
    /// new derived field is recomputed from it.
    pub fn set_listing_type(&mut self, listing_type: ListingType) {
        self.listing_type = listing_type;
        self.sync();
    }
}
