//! Industrial area calculator.
//!
//! Converts a column layout (supports along the length of the building, the
//! spacing between them and the span across) into closed floor area.
//! Pure functions, no I/O.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Calculation failure. Callers treat any variant as "no result".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    #[error("{field} is missing or not a number")]
    InvalidNumber { field: &'static str },

    #[error("area calculation overflowed")]
    Overflow,
}

/// Parse a number typed into a form field.
///
/// Empty or whitespace-only input is `None`, as is anything that is not a
/// finite decimal (`NaN`, `inf`, `12abc`, `1_000`).
pub fn parse_number(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    // Decimal's parser skips `_` separators
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Parsed calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaInput {
    pub column_count: Decimal,
    pub column_spacing: Decimal,
    pub width: Decimal,
}

impl AreaInput {
    /// Parse the three raw calculator fields, naming the first one that fails.
    pub fn parse(
        column_count: &str,
        column_spacing: &str,
        width: &str,
    ) -> Result<Self, CalculationError> {
        let field = |raw: &str, field: &'static str| {
            parse_number(raw).ok_or(CalculationError::InvalidNumber { field })
        };

        Ok(Self {
            column_count: field(column_count, "column_count")?,
            column_spacing: field(column_spacing, "column_spacing")?,
            width: field(width, "width")?,
        })
    }

    pub fn compute(&self) -> Result<AreaCalculation, CalculationError> {
        compute_area(self.column_count, self.column_spacing, self.width)
    }
}

/// Result of the area calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaCalculation {
    /// `(column_count - 1) * column_spacing`, in meters
    pub length: Decimal,
    /// `length * width`, in square meters
    pub area: Decimal,
}

impl AreaCalculation {
    /// True when the layout produced no usable floor area (zero or negative).
    ///
    /// Out-of-range inputs are not rejected, so a single column or a negative
    /// spacing end up here.
    pub fn is_degenerate(&self) -> bool {
        self.area <= Decimal::ZERO
    }
}

/// Calculate closed area from a column layout.
///
/// `area = (column_count - 1) * column_spacing * width`, unrounded.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use listing_calculator::calculator::compute_area;
///
/// let result = compute_area(dec!(6), dec!(7), dec!(20)).unwrap();
/// assert_eq!(result.length, dec!(35));
/// assert_eq!(result.area, dec!(700));
/// ```
pub fn compute_area(
    column_count: Decimal,
    column_spacing: Decimal,
    width: Decimal,
) -> Result<AreaCalculation, CalculationError> {
    let length = column_count
        .checked_sub(Decimal::ONE)
        .and_then(|bays| bays.checked_mul(column_spacing))
        .ok_or(CalculationError::Overflow)?;

    let area = length
        .checked_mul(width)
        .ok_or(CalculationError::Overflow)?;

    Ok(AreaCalculation { length, area })
}

/// Calculate closed area straight from form text.
pub fn compute_area_str(
    column_count: &str,
    column_spacing: &str,
    width: &str,
) -> Result<AreaCalculation, CalculationError> {
    AreaInput::parse(column_count, column_spacing, width)?.compute()
}
