//! Data transfer objects for the miningcore REST API.
//!
//! # Design
//! These types mirror the server's JSON schema field-for-field and carry no
//! invariants of their own — validation is entirely the server's job. Fields
//! the server may omit or null out (nested config blocks, explorer links,
//! timestamps of events that have not happened yet) are `Option`; everything
//! else falls back to its zero value via `serde(default)` so partial
//! responses decode instead of erroring. Enum-like fields such as
//! [`Block::status`] stay plain strings: the value set is server-defined and
//! not validated client-side.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Pagination metadata shared by all `/api/v2/` list responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    pub page_count: i64,
    pub success: bool,
    pub response_message_type: Option<i64>,
    pub response_message_id: Option<String>,
    pub response_message_args: Option<Vec<String>>,
}

/// Generic paginated envelope: [`Meta`] plus a result list.
///
/// Used uniformly by every `/api/v2/` list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(default)]
    pub result: Vec<T>,
}

/// Full description of one pool as returned by `/api/pools`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PoolInfo {
    /// Coin/algorithm-specific pool id, e.g. `"eth"`.
    pub id: String,
    pub coin: Option<CoinConfig>,
    /// Stratum endpoints keyed by port number.
    pub ports: HashMap<String, PoolEndpoint>,
    pub payment_processing: Option<PaymentProcessingConfig>,
    pub share_based_banning: Option<ShareBasedBanningConfig>,
    pub client_connection_timeout: i32,
    pub job_rebroadcast_timeout: i32,
    pub block_refresh_interval: i32,
    pub pool_fee_percent: f64,
    pub address: Option<String>,
    pub address_info_link: Option<String>,
    pub pool_stats: Option<PoolStats>,
    pub network_stats: Option<BlockchainStats>,
    pub top_miners: Vec<MinerPerformanceStats>,
    pub total_paid: f64,
    pub total_blocks: i32,
    pub last_pool_block_time: Option<String>,
    pub api_endpoint: Option<String>,
}

/// Coin metadata attached to a pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinConfig {
    #[serde(rename = "type")]
    pub coin_type: String,
    pub name: String,
    pub symbol: String,
    pub website: Option<String>,
    pub family: String,
    pub algorithm: String,
    pub twitter: Option<String>,
    pub discord: Option<String>,
    pub telegram: Option<String>,
    pub canonical_name: Option<String>,
}

/// Per-port stratum endpoint configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PoolEndpoint {
    pub listen_address: String,
    pub name: Option<String>,
    pub difficulty: f64,
    pub tcp_proxy_protocol: Option<TcpProxyProtocolConfig>,
    pub var_diff: Option<VarDiffConfig>,
    pub tls: bool,
    pub tls_auto: bool,
    pub tls_pfx_file: Option<String>,
    pub tls_pfx_password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TcpProxyProtocolConfig {
    pub enable: bool,
    pub mandatory: bool,
    pub proxy_addresses: Option<Vec<String>>,
}

/// Variable-difficulty tuning for one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VarDiffConfig {
    pub min_diff: f64,
    pub max_diff: f64,
    pub max_delta: f64,
    pub target_time: f64,
    pub retarget_time: f64,
    pub variance_percent: f64,
}

/// Payment-processing policy of a pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentProcessingConfig {
    pub enabled: bool,
    pub minimum_payment: f64,
    /// Server-side payout policy name, e.g. `"PPLNS"` or `"SOLO"`.
    pub payout_scheme: String,
    /// Scheme-specific knobs, passed through undecoded.
    pub extra: HashMap<String, serde_json::Value>,
}

/// Share-based banning thresholds of a pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareBasedBanningConfig {
    pub enabled: bool,
    pub check_threshold: i32,
    pub invalid_percent: f64,
    pub time: i32,
}

/// Aggregate live statistics of a pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PoolStats {
    pub last_pool_block_time: Option<String>,
    pub connected_miners: i32,
    pub pool_hashrate: i64,
    pub shares_per_second: i32,
}

/// Statistics of the network a pool mines against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockchainStats {
    pub network_type: String,
    pub network_hashrate: f64,
    pub network_difficulty: f64,
    pub next_network_target: Option<String>,
    pub next_network_bits: Option<String>,
    pub last_network_block_time: Option<String>,
    pub block_height: i64,
    pub connected_peers: i32,
    pub reward_type: Option<String>,
}

/// Address-keyed hashrate summary, used for miner lists and top-miner
/// rankings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinerPerformanceStats {
    pub miner: String,
    pub hashrate: f64,
    pub shares_per_second: f64,
}

/// A block found by a pool.
///
/// `status` is a server-defined lifecycle string (`"pending"`,
/// `"confirmed"`, `"orphaned"`, ...) and is passed through unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Block {
    pub pool_id: String,
    pub block_height: i64,
    pub network_difficulty: f64,
    pub status: String,
    #[serde(rename = "type")]
    pub block_type: Option<String>,
    pub confirmation_progress: f64,
    /// Work expended relative to network difficulty; absent until known.
    pub effort: Option<f64>,
    pub transaction_confirmation_data: Option<String>,
    pub reward: f64,
    pub info_link: Option<String>,
    pub hash: Option<String>,
    pub miner: Option<String>,
    pub source: Option<String>,
    pub created: String,
}

/// A payment executed by a pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub coin: Option<String>,
    pub address: String,
    pub address_info_link: Option<String>,
    pub amount: f64,
    pub transaction_confirmation_data: Option<String>,
    pub transaction_info_link: Option<String>,
    pub created: String,
}

/// Full statistics for one miner of a pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinerStats {
    pub pending_shares: i64,
    pub pending_balance: f64,
    pub total_paid: f64,
    pub today_paid: f64,
    pub last_payment: Option<String>,
    pub last_payment_link: Option<String>,
    pub performance: Option<WorkerStats>,
    pub performance_samples: Vec<WorkerStats>,
}

/// One timestamped performance sample, broken down per worker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkerStats {
    pub created: String,
    /// Keyed by worker name; the unnamed default worker uses `""`.
    pub workers: HashMap<String, WorkerPerformanceStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkerPerformanceStats {
    pub hashrate: i64,
    pub reported_hashrate: i64,
    pub shares_per_second: f64,
}

/// One day of earnings for a miner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyEarning {
    pub amount: f64,
    pub date: String,
}

/// A ledger entry in a miner's balance history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BalanceChange {
    pub pool_id: String,
    pub address: String,
    pub amount: f64,
    pub usage: String,
    pub created: String,
}

/// One sample of pool-wide performance history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PoolPerformance {
    pub pool_hashrate: f64,
    pub connected_miners: i32,
    pub valid_shares_per_second: i32,
    pub network_hashrate: f64,
    pub network_difficulty: f64,
    pub created: String,
}

/// Mutable per-miner settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinerSettings {
    pub payment_threshold: f64,
}

/// Request payload for updating miner settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinerSettingsUpdate {
    /// Caller IP the server checks against the miner's known workers.
    pub ip_address: String,
    pub settings: MinerSettings,
}

/// Response shape of the settings-update endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinerSettingsUpdateResponse {
    pub success: bool,
    pub response_message_type: Option<i64>,
    pub response_message_id: Option<String>,
    pub response_message_args: Option<Vec<String>>,
    pub result: Option<MinerSettings>,
}
