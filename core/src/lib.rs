//! Synchronous client library for the miningcore pool-management REST API.
//!
//! # Overview
//! One [`Client`] per miningcore instance. Every REST endpoint maps to a
//! typed method: pool listings and detail, paginated blocks, payments,
//! earnings and balance changes, miner and pool performance history, and
//! miner settings. Results decode into the DTOs in [`types`], which mirror
//! the server's JSON schema verbatim. Websocket event payloads are declared
//! in [`ws`] as plain data shapes; this crate ships no websocket transport.
//!
//! # Design
//! - [`Client`] is stateless between calls: it holds only the base URL and
//!   the HTTP agent built from [`ClientConfig`], so concurrent calls from
//!   multiple threads are safe.
//! - Each endpoint method is a thin wrapper over one generic request core
//!   that builds the URL, runs the round trip, and decodes the body into a
//!   per-endpoint strongly typed result.
//! - Failures carry the HTTP status ([`Error::status`]) so callers branch
//!   on the code rather than parse messages; nothing is retried or logged.
//! - List endpoints take an ordered `&[(key, value)]` parameter slice that
//!   is passed through to the server verbatim; an empty slice means no
//!   query string.

pub mod client;
pub mod error;
pub mod types;
pub mod ws;

pub use client::{Client, ClientConfig};
pub use error::Error;
pub use types::{
    BalanceChange, Block, CoinConfig, DailyEarning, Meta, MinerPerformanceStats, MinerSettings,
    MinerSettingsUpdate, MinerSettingsUpdateResponse, MinerStats, PagedResponse, Payment,
    PoolInfo, PoolPerformance, WorkerPerformanceStats, WorkerStats,
};
