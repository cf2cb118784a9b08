//! Display rounding and Turkish locale formatting.

use rust_decimal::prelude::*;

/// Round a derived price to two places, half away from zero.
///
/// The result always carries two decimal places so it renders as `2000.00`.
pub fn round_price(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Format a number the way the `tr-TR` locale does.
///
/// `.` groups thousands, `,` separates decimals, at most three fraction
/// digits are kept and trailing fraction zeros are dropped.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use listing_calculator::calculator::format_tr;
///
/// assert_eq!(format_tr(dec!(1000000)), "1.000.000");
/// assert_eq!(format_tr(dec!(1234.5678)), "1.234,568");
/// ```
pub fn format_tr(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let plain = rounded.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }

    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }

    out
}

/// Format an area for display, e.g. `1.250 m²`.
pub fn format_area(area: Decimal) -> String {
    format!("{} m²", format_tr(area))
}
