//! Service-level route handlers

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::{app, AppState};

    fn make_app() -> Router {
        app(AppState::new(Config::default()))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = make_app()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .method("POST")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = make_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_area_endpoint() {
        let (status, body) = post_json(
            "/api/calculator/area",
            json!({"column_count": "6", "column_spacing": 7, "width": "20"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["length"], "35");
        assert_eq!(body["area"], "700");
        assert_eq!(body["area_display"], "700 m²");
        assert_eq!(body["degenerate"], false);
    }

    #[tokio::test]
    async fn test_area_endpoint_flags_single_column() {
        let (status, body) = post_json(
            "/api/calculator/area",
            json!({"column_count": "1", "column_spacing": "7", "width": "20"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["area"], "0");
        assert_eq!(body["degenerate"], true);
    }

    #[tokio::test]
    async fn test_area_endpoint_rejects_non_numeric() {
        let (status, body) = post_json(
            "/api/calculator/area",
            json!({"column_count": "NaN", "column_spacing": "7", "width": "20"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "invalid_number");
        assert_eq!(body["details"]["field"], "column_count");
        assert!(body.get("area").is_none());
    }

    #[tokio::test]
    async fn test_pricing_endpoint_for_sale() {
        let (status, body) = post_json(
            "/api/calculator/pricing",
            json!({"closed_area": "500", "unit_price": "", "total_price": "1000000", "listing_type": "for_sale"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["unit_price"], "2000.00");
        assert_eq!(body["total_price"], "1000000");
        assert_eq!(body["driving_field"], "total_price");
        assert_eq!(body["derived_field"], "unit_price");
        assert_eq!(body["recalculated"], true);
    }

    #[tokio::test]
    async fn test_pricing_endpoint_missing_area_is_noop() {
        let (status, body) = post_json(
            "/api/calculator/pricing",
            json!({"unit_price": "2000", "total_price": "", "listing_type": "kiralik"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["unit_price"], "2000");
        assert_eq!(body["total_price"], "");
        assert_eq!(body["driving_field"], "unit_price");
        assert_eq!(body["recalculated"], false);
    }

    #[tokio::test]
    async fn test_share_endpoint() {
        let (status, body) = post_json(
            "/api/listings/share",
            json!({
                "title": "Depo",
                "category": "depo",
                "listing_type": "for_rent",
                "closed_area": "700",
                "total_price": "17500",
                "include_qr": true
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let text = body["text"].as_str().unwrap();
        assert!(text.starts_with("🏭 *YENİ PORTFÖY: Depo* (Depo - KİRALIK)"));
        assert!(text.contains("💰 *Aylık Kira:* 17.500 TRY"));

        let url = body["whatsapp_url"].as_str().unwrap();
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(!url.contains(' '));

        let qr = body["qr_code"].as_str().unwrap();
        assert!(qr.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_share_endpoint_numeric_fields() {
        let (status, body) = post_json(
            "/api/listings/share",
            json!({"title": "Depo", "closed_area": 700, "total_price": 17500, "height": 9.5}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let text = body["text"].as_str().unwrap();
        assert!(text.contains("📐 *Kapalı Alan:* 700 m²"));
        assert!(text.contains("💰 *Fiyat:* 17.500 TRY"));
        assert!(text.contains("🏗 *Yükseklik:* 9.5 m"));
    }

    #[tokio::test]
    async fn test_share_endpoint_without_qr() {
        let (status, body) = post_json(
            "/api/listings/share",
            json!({"title": "Arsa", "category": "arsa", "currency": "EUR", "total_price": "250000"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["text"].as_str().unwrap().contains("💰 *Fiyat:* 250.000 EUR"));
        assert!(body.get("qr_code").is_none());
    }
}
