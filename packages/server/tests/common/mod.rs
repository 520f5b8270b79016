//! Shared harness for API tests: a small deterministic catalog, an app
//! builder with instant trade settlement, and request helpers.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use server_core::common::ListingId;
use server_core::domains::catalog::{Catalog, Category, Listing};
use server_core::domains::engagement::EngagementStore;
use server_core::domains::trading::TradeSimulator;
use server_core::server::{build_app, AppState};
use tower::ServiceExt;

/// Fixed listing ids so tests can address listings by URL.
pub const NEON_SKYLINE: &str = "00000000-0000-4000-8000-000000000001";
pub const CHROME_DRAKE: &str = "00000000-0000-4000-8000-000000000002";
pub const MIDNIGHT_FREQUENCY: &str = "00000000-0000-4000-8000-000000000003";
pub const DUST_STORM: &str = "00000000-0000-4000-8000-000000000004";
pub const AURORA_FIELD: &str = "00000000-0000-4000-8000-000000000005";

pub const SESSION_ALPHA: &str = "11111111-1111-4111-8111-111111111111";
pub const SESSION_BETA: &str = "22222222-2222-4222-8222-222222222222";

fn listing(
    id: &str,
    name: &str,
    creator: &str,
    price: &str,
    category: Category,
    likes: u64,
    views: u64,
    day: u32,
) -> Listing {
    Listing {
        id: ListingId::parse(id).unwrap(),
        name: name.to_string(),
        description: format!("{} description", name),
        image_url: format!("https://example.com/{}.png", day),
        price: price.parse().unwrap(),
        category,
        rarity: None,
        likes,
        views,
        creator: creator.to_string(),
        creator_address: format!("{}-addr", creator),
        token_id: format!("#{:04}", day),
        created_at: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
    }
}

/// Five listings: two creators share a name prefix, two listings tie on both
/// price and likes so stable ordering is observable.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(NEON_SKYLINE, "Neon Skyline", "PixelSmith", "2.5", Category::Art, 12, 100, 1),
        listing(CHROME_DRAKE, "Chrome Drake", "Forgewright", "1.0", Category::Gaming, 40, 300, 2),
        listing(MIDNIGHT_FREQUENCY, "Midnight Frequency", "WaveTable", "3.2", Category::Music, 7, 50, 3),
        listing(DUST_STORM, "Dust Storm", "PixelSmith", "1.0", Category::Photography, 40, 120, 4),
        listing(AURORA_FIELD, "Aurora Field", "Northlight", "0.8", Category::Art, 25, 80, 5),
    ]
}

/// Build the full app over the sample catalog with instant settlement.
pub fn test_app() -> Router {
    let catalog = Catalog::new(sample_listings()).expect("sample catalog is valid");
    build_app(AppState {
        catalog: Arc::new(catalog),
        engagement: Arc::new(EngagementStore::new()),
        trades: Arc::new(TradeSimulator::new(Duration::ZERO)),
    })
}

fn request(method: &str, uri: &str, session: Option<&str>, body: Option<Value>) -> Request<Body> {
    // The rate limiter keys on the forwarded IP; every test request carries
    // one so extraction never fails under `oneshot`.
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-forwarded-for", "127.0.0.1");

    if let Some(session) = session {
        builder = builder.header("x-session-id", session);
    }

    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    request("GET", uri, None, None)
}

pub fn get_with_session(uri: &str, session: &str) -> Request<Body> {
    request("GET", uri, Some(session), None)
}

pub fn post(uri: &str) -> Request<Body> {
    request("POST", uri, None, None)
}

pub fn post_with_session(uri: &str, session: &str) -> Request<Body> {
    request("POST", uri, Some(session), None)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    request("POST", uri, None, Some(body))
}

/// Run one request against a clone of the app, returning status + JSON body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Names of the nodes in a connection response, in order.
pub fn node_names(body: &Value) -> Vec<String> {
    body["nodes"]
        .as_array()
        .expect("connection has nodes")
        .iter()
        .map(|node| node["name"].as_str().unwrap().to_string())
        .collect()
}
