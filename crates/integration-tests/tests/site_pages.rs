//! Integration tests for the pricing site.
//!
//! These tests require:
//! - A migrated and seeded `PostgreSQL` database
//! - The site running (cargo run -p eduskills-site)
//!
//! Run with: cargo test -p eduskills-integration-tests -- --ignored

use eduskills_core::format_price_str;
use eduskills_integration_tests::site_base_url;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};

const SUBJECTS: [&str; 3] = ["info", "physics", "math"];

const FIELDS: [&str; 6] = [
    "name",
    "cost",
    "opt_cost",
    "package_size",
    "opt_cost_without_discount",
    "discount_percent",
];

async fn fetch_pricing(client: &Client) -> Map<String, Value> {
    let resp = client
        .get(format!("{}/api/pricing", site_base_url()))
        .send()
        .await
        .expect("Failed to get pricing");

    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Pricing is not a JSON object")
}

#[tokio::test]
#[ignore = "Requires running site and seeded database"]
async fn test_health() {
    let resp = Client::new()
        .get(format!("{}/health", site_base_url()))
        .send()
        .await
        .expect("Failed to get health");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
#[ignore = "Requires running site and seeded database"]
async fn test_pricing_page_renders() {
    let resp = Client::new()
        .get(site_base_url())
        .send()
        .await
        .expect("Failed to get pricing page");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("price-card--math"));
    assert!(body.contains('₽'));
}

#[tokio::test]
#[ignore = "Requires running site and seeded database"]
async fn test_pricing_api_has_every_field() {
    let context = fetch_pricing(&Client::new()).await;

    for subject in SUBJECTS {
        for field in FIELDS {
            let key = format!("{subject}_{field}");
            assert!(context.contains_key(&key), "missing {key}");
        }
        assert!(context[&format!("{subject}_package_size")].is_i64());
    }
}

#[tokio::test]
#[ignore = "Requires running site and seeded database"]
async fn test_pricing_api_prices_are_formatted() {
    let context = fetch_pricing(&Client::new()).await;

    for subject in SUBJECTS {
        for field in ["cost", "opt_cost", "opt_cost_without_discount"] {
            let shown = context[&format!("{subject}_{field}")]
                .as_str()
                .expect("price is a string");
            assert!(shown.starts_with('₽'), "{subject}_{field} = {shown}");
            assert_eq!(format_price_str(shown).as_deref(), Ok(shown));
        }
    }
}

#[tokio::test]
#[ignore = "Requires running site"]
async fn test_redirect_page() {
    let resp = Client::new()
        .get(format!("{}/redirect", site_base_url()))
        .send()
        .await
        .expect("Failed to get redirect page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("refresh"));
}
