//! Share message and share link for a listing.

use askama::Template;

use crate::calculator::{format_tr, parse_number};

use super::models::{Currency, ListingSummary};
use super::ShareError;

/// Plain-text portfolio announcement
#[derive(Template)]
#[template(path = "share/listing.txt", escape = "none")]
struct ListingShareTemplate<'a> {
    title: &'a str,
    category: &'a str,
    listing_label: &'a str,
    has_location: bool,
    city: &'a str,
    district: &'a str,
    closed_area: &'a str,
    has_open_area: bool,
    open_area: &'a str,
    price_label: &'a str,
    total_price: String,
    currency: &'a str,
    has_unit_price: bool,
    unit_price: &'a str,
    has_height: bool,
    height: &'a str,
    has_power: bool,
    power: &'a str,
    has_ada_parsel: bool,
    ada: &'a str,
    parsel: &'a str,
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Total price as shown to the reader: locale-formatted when it is a number.
fn display_price(raw: &str) -> String {
    match parse_number(raw) {
        Some(amount) => format_tr(amount),
        None => raw.trim().to_string(),
    }
}

/// Sections with no filled-in fields leave runs of blank lines; keep one.
fn collapse_blank_lines(rendered: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in rendered.lines().map(str::trim_end) {
        if line.is_empty() && out.last().map_or(true, |prev| prev.is_empty()) {
            continue;
        }
        out.push(line);
    }
    out.join("\n").trim().to_string()
}

/// Render the share message for a listing.
pub fn render_share_text(
    summary: &ListingSummary,
    default_currency: Currency,
) -> Result<String, ShareError> {
    let listing_type = summary.listing_type;
    let template = ListingShareTemplate {
        title: summary.title.trim(),
        category: summary.category.label(),
        listing_label: listing_type.label(),
        has_location: present(&summary.city) && present(&summary.district),
        city: summary.city.trim(),
        district: summary.district.trim(),
        closed_area: summary.closed_area.trim(),
        has_open_area: present(&summary.open_area),
        open_area: summary.open_area.trim(),
        price_label: listing_type.price_label(),
        total_price: display_price(&summary.total_price),
        currency: summary.currency.unwrap_or(default_currency).code(),
        has_unit_price: present(&summary.unit_price),
        unit_price: summary.unit_price.trim(),
        has_height: present(&summary.height),
        height: summary.height.trim(),
        has_power: present(&summary.power),
        power: summary.power.trim(),
        has_ada_parsel: present(&summary.ada) && present(&summary.parsel),
        ada: summary.ada.trim(),
        parsel: summary.parsel.trim(),
    };

    Ok(collapse_blank_lines(&template.render()?))
}

/// Link that opens WhatsApp with `text` pre-filled.
pub fn whatsapp_url(base: &str, text: &str) -> String {
    format!("{}?text={}", base, urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ListingType;
    use crate::share::models::PropertyCategory;

    fn factory() -> ListingSummary {
        ListingSummary {
            title: "Gebze OSB Fabrika".to_string(),
            category: PropertyCategory::Fabrika,
            listing_type: ListingType::ForSale,
            city: "Kocaeli".to_string(),
            district: "Gebze".to_string(),
            closed_area: "5000".to_string(),
            open_area: "2000".to_string(),
            total_price: "10000000".to_string(),
            unit_price: "2000.00".to_string(),
            currency: None,
            height: "12".to_string(),
            power: "400".to_string(),
            ada: "101".to_string(),
            parsel: "7".to_string(),
        }
    }

    #[test]
    fn test_render_full_listing() {
        let text = render_share_text(&factory(), Currency::Try).unwrap();
        let expected = "🏭 *YENİ PORTFÖY: Gebze OSB Fabrika* (Fabrika - SATILIK)\n\
                        \n\
                        📍 *Konum:* Gebze, Kocaeli\n\
                        📐 *Kapalı Alan:* 5000 m²\n\
                        🌳 *Açık Alan:* 2000 m²\n\
                        💰 *Fiyat:* 10.000.000 TRY\n\
                        💵 *Birim Fiyat:* 2000.00 TRY/m²\n\
                        \n\
                        🏗 *Yükseklik:* 12 m\n\
                        ⚡ *Enerji:* 400 kW\n\
                        📍 *Ada-Parsel:* 101/7\n\
                        \n\
                        Detaylar için arayınız.";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_minimal_rental() {
        let summary = ListingSummary {
            title: "Depo".to_string(),
            category: PropertyCategory::Depo,
            listing_type: ListingType::ForRent,
            closed_area: "700".to_string(),
            total_price: "17500".to_string(),
            currency: Some(Currency::Usd),
            city: "İstanbul".to_string(),
            ada: "12".to_string(),
            ..ListingSummary::default()
        };

        let text = render_share_text(&summary, Currency::Try).unwrap();
        let expected = "🏭 *YENİ PORTFÖY: Depo* (Depo - KİRALIK)\n\
                        \n\
                        📐 *Kapalı Alan:* 700 m²\n\
                        💰 *Aylık Kira:* 17.500 USD\n\
                        \n\
                        Detaylar için arayınız.";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_display_price_keeps_non_numeric_text() {
        assert_eq!(display_price("1250000.5"), "1.250.000,5");
        assert_eq!(display_price("görüşülür"), "görüşülür");
        assert_eq!(display_price(""), "");
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb\n  \nc\n\n"), "a\n\nb\n\nc");
        assert_eq!(collapse_blank_lines("\n\na"), "a");
    }

    #[test]
    fn test_whatsapp_url_encodes_text() {
        let url = whatsapp_url("https://wa.me/", "Fiyat: 1.000 TRY\nDetaylar");
        assert_eq!(url, "https://wa.me/?text=Fiyat%3A%201.000%20TRY%0ADetaylar");
    }
}
