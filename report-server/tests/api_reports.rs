//! End-to-end report tests through the router

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use report_server::db::{RepoError, RepoResult, TransactionFilter, TransactionStore};
use report_server::{Config, ServerState, api};
use serde_json::{Value, json};
use shared::{CategoryCount, Transaction};

use common::{SeedServer, get_json, march_fixture, memory_app, record};

async fn seeded_app(doc: Value) -> (SeedServer, axum::Router) {
    let seed = SeedServer::start(doc).await;
    let app = memory_app(&seed.url("/seed.json")).await;
    let (status, _) = get_json(&app, "/api/initialize-database").await;
    assert_eq!(status, StatusCode::OK);
    (seed, app)
}

fn bucket(body: &Value, range: &str) -> u64 {
    body.as_array()
        .unwrap()
        .iter()
        .find(|b| b["range"] == range)
        .unwrap()["count"]
        .as_u64()
        .unwrap()
}

#[tokio::test]
async fn test_march_end_to_end() {
    let (_seed, app) = seeded_app(march_fixture()).await;

    let (status, page) = get_json(&app, "/api/transactions?month=March").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 3);
    assert_eq!(page["page"], 1);
    assert_eq!(page["totalPages"], 1);
    assert_eq!(page["transactions"].as_array().unwrap().len(), 3);

    let (_, stats) = get_json(&app, "/api/statistics?month=March").await;
    assert_eq!(stats["totalSale"], 1199.0);
    assert_eq!(stats["soldItems"], 2);
    assert_eq!(stats["notSoldItems"], 1);

    let (_, bars) = get_json(&app, "/api/bar-chart?month=March").await;
    let bars_arr = bars.as_array().unwrap();
    assert_eq!(bars_arr.len(), 10);
    assert_eq!(bars_arr[0]["range"], "0-100");
    assert_eq!(bars_arr[9]["range"], "901-above");
    assert_eq!(bucket(&bars, "0-100"), 1);
    assert_eq!(bucket(&bars, "101-200"), 1);
    assert_eq!(bucket(&bars, "901-above"), 1);
    let total: u64 = bars_arr.iter().map(|b| b["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 3);

    let (_, pie) = get_json(&app, "/api/pie-chart?month=March").await;
    assert_eq!(
        pie,
        json!([
            {"category": "electronics", "count": 1},
            {"category": "jewelery", "count": 1},
            {"category": "men's clothing", "count": 1},
        ])
    );
}

#[tokio::test]
async fn test_combined_matches_individual_routes() {
    let (_seed, app) = seeded_app(march_fixture()).await;

    let (status, combined) = get_json(&app, "/api/combined-data?month=mar").await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = get_json(&app, "/api/statistics?month=March").await;
    let (_, bars) = get_json(&app, "/api/bar-chart?month=March").await;
    let (_, pie) = get_json(&app, "/api/pie-chart?month=March").await;

    assert_eq!(combined["statistics"], stats);
    assert_eq!(combined["barChart"], bars);
    assert_eq!(combined["pieChart"], pie);
}

#[tokio::test]
async fn test_search_title_description_and_price() {
    let (_seed, app) = seeded_app(march_fixture()).await;

    let (_, page) = get_json(&app, "/api/transactions?month=March&search=gold").await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["transactions"][0]["id"], 2);

    // description match, case-insensitive
    let (_, page) = get_json(&app, "/api/transactions?month=March&search=DRIVE%20DESC").await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["transactions"][0]["id"], 3);

    let (_, page) = get_json(&app, "/api/transactions?month=March&search=999").await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["transactions"][0]["price"], 999.0);

    let (_, page) = get_json(&app, "/api/transactions?month=March&search=zzzz").await;
    assert_eq!(page["total"], 0);
    assert_eq!(page["totalPages"], 0);
    assert!(page["transactions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_keeps_surrounding_whitespace() {
    let doc = json!([
        record(1, "Gold Ring", 120.0, "jewelery", true, "2021-03-01T00:00:00Z"),
        record(2, "Earrings", 80.0, "jewelery", false, "2021-03-02T00:00:00Z"),
        record(3, "Lamp", 40.0, "home", false, "2021-03-03T00:00:00Z"),
    ]);
    let (_seed, app) = seeded_app(doc).await;

    let (_, page) = get_json(&app, "/api/transactions?month=March&search=%20ring").await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["transactions"][0]["title"], "Gold Ring");

    // "Gold Ring" and "Gold Ring description" both carry one space, never two
    let (_, page) = get_json(&app, "/api/transactions?month=March&search=%20%20").await;
    assert_eq!(page["total"], 0);
}

#[tokio::test]
async fn test_pagination_total_pages() {
    let doc: Vec<Value> = (1..=25)
        .map(|i| {
            record(
                i,
                &format!("Item {i}"),
                10.0 * i as f64,
                "misc",
                i % 2 == 0,
                "2021-03-10T00:00:00Z",
            )
        })
        .collect();
    let (_seed, app) = seeded_app(Value::Array(doc)).await;

    let (_, page) = get_json(&app, "/api/transactions?month=March&page=3&perPage=10").await;
    assert_eq!(page["total"], 25);
    assert_eq!(page["page"], 3);
    assert_eq!(page["totalPages"], 3);
    let items = page["transactions"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["id"], 21);

    // bad paging values fall back to the defaults
    let (_, page) = get_json(&app, "/api/transactions?month=March&page=abc&perPage=0").await;
    assert_eq!(page["page"], 1);
    assert_eq!(page["transactions"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_histogram_gap_prices_fall_outside_buckets() {
    let doc = json!([
        record(1, "Edge", 100.0, "misc", true, "2021-03-01T00:00:00Z"),
        record(2, "Edge too", 900.5, "misc", false, "2021-03-02T00:00:00Z"),
        record(3, "Inside", 101.0, "misc", false, "2021-03-03T00:00:00Z"),
    ]);
    let (_seed, app) = seeded_app(doc).await;

    let (_, bars) = get_json(&app, "/api/bar-chart?month=March").await;
    let sum: u64 = bars
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["count"].as_u64().unwrap())
        .sum();
    assert_eq!(sum, 1);
    assert_eq!(bucket(&bars, "101-200"), 1);

    let (_, stats) = get_json(&app, "/api/statistics?month=March").await;
    let matching = stats["soldItems"].as_u64().unwrap() + stats["notSoldItems"].as_u64().unwrap();
    assert!(sum < matching);
}

#[tokio::test]
async fn test_unknown_month_reports_nothing() {
    let (_seed, app) = seeded_app(march_fixture()).await;

    let (status, page) = get_json(&app, "/api/transactions?month=Smarch").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 0);

    let (_, stats) = get_json(&app, "/api/statistics").await;
    assert_eq!(stats["totalSale"], 0.0);
    assert_eq!(stats["soldItems"], 0);
    assert_eq!(stats["notSoldItems"], 0);
}

#[tokio::test]
async fn test_welcome_and_health() {
    let (_seed, app) = seeded_app(march_fixture()).await;

    let (_, health) = get_json(&app, "/health").await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["records"], 4);

    let resp = tower::ServiceExt::oneshot(
        app.clone(),
        axum::http::Request::get("/")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
}

/// Store whose grouped query always fails
struct BrokenCategories;

#[async_trait]
impl TransactionStore for BrokenCategories {
    async fn replace_all(&self, records: Vec<Transaction>) -> RepoResult<u64> {
        Ok(records.len() as u64)
    }

    async fn count(&self, _filter: &TransactionFilter) -> RepoResult<u64> {
        Ok(0)
    }

    async fn find(
        &self,
        _filter: &TransactionFilter,
        _skip: u64,
        _limit: u64,
    ) -> RepoResult<Vec<Transaction>> {
        Ok(Vec::new())
    }

    async fn sum_price(&self, _filter: &TransactionFilter) -> RepoResult<f64> {
        Ok(0.0)
    }

    async fn count_by_category(&self, _filter: &TransactionFilter) -> RepoResult<Vec<CategoryCount>> {
        Err(RepoError::Database("category index unavailable".into()))
    }
}

#[tokio::test]
async fn test_combined_fails_when_any_part_fails() {
    let config = Config::with_overrides("memory", "http://127.0.0.1:9/seed.json");
    let state = ServerState::with_store(config, Arc::new(BrokenCategories)).unwrap();
    let app = api::router(state);

    let (status, body) = get_json(&app, "/api/combined-data?month=March").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("category index unavailable"));

    // the parts that don't touch categories still work
    let (status, _) = get_json(&app, "/api/statistics?month=March").await;
    assert_eq!(status, StatusCode::OK);
}
