//! Stand-in for a live miningcore REST API, used by the client's
//! integration tests and runnable as a bin for manual poking.
//!
//! Serves one fixture pool (`eth`) with one known miner. Two special pool
//! ids exercise failure paths: `mock` answers 403 on every route, and
//! `slow` delays its response long enough to trip short client timeouts.
//! The settings POST route answers 500 — the client must never contact it.

use std::time::Duration;

use axum::{
    extract::Path,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

// Fixture bodies shared with the client crate's decode tests.
const POOLS: &str = include_str!("../../test-vectors/pools.json");
const POOL_ETH: &str = include_str!("../../test-vectors/pool_eth.json");
const BLOCKS: &str = include_str!("../../test-vectors/blocks.json");
const MINER: &str = include_str!("../../test-vectors/miner.json");
const PAYMENTS: &str = include_str!("../../test-vectors/payments.json");

/// Address of the one miner the fixtures know about.
pub const KNOWN_MINER: &str = "0xdeadbeef00000000000000000000000000000001";

pub fn app() -> Router {
    Router::new()
        .route("/api/pools", get(list_pools))
        .route("/api/pools/{id}", get(get_pool))
        .route("/api/v2/pools/{id}/blocks", get(list_blocks))
        .route("/api/v2/pools/{id}/payments", get(list_pool_payments))
        .route("/api/pools/{id}/miners", get(list_miners))
        .route("/api/pools/{id}/miners/{addr}", get(get_miner))
        .route(
            "/api/v2/pools/{id}/miners/{addr}/payments",
            get(list_miner_payments),
        )
        .route(
            "/api/v2/pools/{id}/miners/{addr}/earnings/daily",
            get(list_daily_earnings),
        )
        .route(
            "/api/v2/pools/{id}/miners/{addr}/balancechanges",
            get(list_balance_changes),
        )
        .route(
            "/api/pools/{id}/miners/{addr}/performance",
            get(miner_performance),
        )
        .route(
            "/api/pools/{id}/miners/{addr}/settings",
            get(miner_settings).post(update_miner_settings),
        )
        .route("/api/pools/{id}/performance", get(pool_performance))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn fixture(raw: &str) -> Json<Value> {
    Json(serde_json::from_str(raw).expect("fixture is valid JSON"))
}

/// 403 for the `mock` pool, 404 for anything that is not `eth`.
fn check_pool(id: &str) -> Result<(), (StatusCode, String)> {
    match id {
        "eth" => Ok(()),
        "mock" => Err((
            StatusCode::FORBIDDEN,
            "access to pool mock is forbidden".to_string(),
        )),
        _ => Err((StatusCode::NOT_FOUND, format!("pool {id} not found"))),
    }
}

fn check_miner(id: &str, addr: &str) -> Result<(), (StatusCode, String)> {
    check_pool(id)?;
    if addr == KNOWN_MINER {
        Ok(())
    } else {
        Err((StatusCode::NOT_FOUND, format!("miner {addr} not found")))
    }
}

async fn list_pools() -> Json<Value> {
    fixture(POOLS)
}

async fn get_pool(Path(id): Path<String>) -> Result<Json<Value>, (StatusCode, String)> {
    if id == "slow" {
        tokio::time::sleep(Duration::from_millis(500)).await;
        return Ok(fixture(POOL_ETH));
    }
    check_pool(&id)?;
    Ok(fixture(POOL_ETH))
}

async fn list_blocks(Path(id): Path<String>) -> Result<Json<Value>, (StatusCode, String)> {
    check_pool(&id)?;
    Ok(fixture(BLOCKS))
}

async fn list_pool_payments(Path(id): Path<String>) -> Result<Json<Value>, (StatusCode, String)> {
    check_pool(&id)?;
    Ok(fixture(PAYMENTS))
}

async fn list_miners(Path(id): Path<String>) -> Result<Json<Value>, (StatusCode, String)> {
    check_pool(&id)?;
    Ok(Json(json!([
        {
            "miner": KNOWN_MINER,
            "hashrate": 1200000000.0,
            "sharesPerSecond": 0.5
        },
        {
            "miner": "0xdeadbeef00000000000000000000000000000002",
            "hashrate": 310000000.0,
            "sharesPerSecond": 0.12
        }
    ])))
}

async fn get_miner(
    Path((id, addr)): Path<(String, String)>,
) -> Result<Json<Value>, (StatusCode, String)> {
    check_miner(&id, &addr)?;
    Ok(fixture(MINER))
}

async fn list_miner_payments(
    Path((id, addr)): Path<(String, String)>,
) -> Result<Json<Value>, (StatusCode, String)> {
    check_miner(&id, &addr)?;
    Ok(fixture(PAYMENTS))
}

async fn list_daily_earnings(
    Path((id, addr)): Path<(String, String)>,
) -> Result<Json<Value>, (StatusCode, String)> {
    check_miner(&id, &addr)?;
    Ok(Json(json!({
        "pageCount": 1,
        "success": true,
        "responseMessageType": null,
        "responseMessageId": null,
        "responseMessageArgs": null,
        "result": [
            { "amount": 0.25, "date": "2021-04-13T00:00:00Z" },
            { "amount": 0.27, "date": "2021-04-12T00:00:00Z" }
        ]
    })))
}

async fn list_balance_changes(
    Path((id, addr)): Path<(String, String)>,
) -> Result<Json<Value>, (StatusCode, String)> {
    check_miner(&id, &addr)?;
    Ok(Json(json!({
        "pageCount": 1,
        "success": true,
        "responseMessageType": null,
        "responseMessageId": null,
        "responseMessageArgs": null,
        "result": [
            {
                "poolId": id,
                "address": addr,
                "amount": 0.25,
                "usage": "daily earning",
                "created": "2021-04-13T00:05:00Z"
            }
        ]
    })))
}

async fn miner_performance(
    Path((id, addr)): Path<(String, String)>,
) -> Result<Json<Value>, (StatusCode, String)> {
    check_miner(&id, &addr)?;
    Ok(Json(json!([
        {
            "created": "2021-04-13T21:00:00Z",
            "workers": {
                "rig1": {
                    "hashrate": 510000000,
                    "reportedHashrate": 525000000,
                    "sharesPerSecond": 0.17
                }
            }
        },
        {
            "created": "2021-04-13T22:00:00Z",
            "workers": {
                "rig1": {
                    "hashrate": 520000000,
                    "reportedHashrate": 530000000,
                    "sharesPerSecond": 0.18
                }
            }
        }
    ])))
}

async fn miner_settings(
    Path((id, addr)): Path<(String, String)>,
) -> Result<Json<Value>, (StatusCode, String)> {
    check_miner(&id, &addr)?;
    Ok(Json(json!({ "paymentThreshold": 0.05 })))
}

/// The client's settings update is unimplemented client-side; reaching
/// this route means it issued a network call it must not make.
async fn update_miner_settings() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "settings updates must not reach the mock server".to_string(),
    )
}

async fn pool_performance(Path(id): Path<String>) -> Result<Json<Value>, (StatusCode, String)> {
    check_pool(&id)?;
    Ok(Json(json!([
        {
            "poolHashrate": 4130000000.0,
            "connectedMiners": 11,
            "validSharesPerSecond": 2,
            "networkHashrate": 551000000000000.0,
            "networkDifficulty": 7360000000000000.0,
            "created": "2021-04-13T22:00:00Z"
        }
    ])))
}
