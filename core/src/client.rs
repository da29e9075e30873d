//! Synchronous client for the miningcore REST API.
//!
//! # Design
//! `Client` holds only immutable configuration (the parsed base URL plus a
//! `ureq` agent built once from [`ClientConfig`]) and no state between
//! calls, so one client can serve concurrent callers from multiple threads.
//! Every endpoint method is a thin wrapper over one generic `request` core
//! that builds the URL, runs the round trip, reads the full body, and on 200
//! decodes it into the endpoint's result type; any other status surfaces the
//! body text verbatim together with the code. Which filters an endpoint
//! accepts is the server's contract — query parameters are passed through
//! as given, never validated.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;
use crate::types::{
    BalanceChange, Block, DailyEarning, MinerPerformanceStats, MinerSettings,
    MinerSettingsUpdate, MinerSettingsUpdateResponse, MinerStats, PagedResponse, Payment,
    PoolInfo, PoolPerformance, WorkerStats,
};

/// Configuration applied when constructing a [`Client`].
///
/// Immutable after construction; to change it, build a new client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Wall-clock budget for one complete request, connect included.
    /// Defaults to 20 seconds.
    pub timeout: Duration,
    /// Skip TLS certificate verification, for pools running on self-signed
    /// or test certificates. Defaults to `false`.
    pub danger_accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            danger_accept_invalid_certs: false,
        }
    }
}

/// Client for one miningcore instance.
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    agent: ureq::Agent,
}

impl Client {
    /// Create a client for the API at `base_url` with default configuration.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a client with explicit configuration.
    ///
    /// A trailing slash on `base_url` is tolerated.
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        let tls = ureq::tls::TlsConfig::builder()
            .disable_verification(config.danger_accept_invalid_certs)
            .build();
        // Status interpretation is ours: non-2xx bodies carry the server's
        // error text and must come back as data, not as ureq errors.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .tls_config(tls)
            .build()
            .new_agent();
        Ok(Self { base_url, agent })
    }

    /// List all pools known to the server.
    pub fn pools(&self) -> Result<Vec<PoolInfo>, Error> {
        #[derive(serde::Deserialize)]
        struct PoolsResponse {
            pools: Vec<PoolInfo>,
        }
        let res: PoolsResponse = self.request(&["api", "pools"], &[])?;
        Ok(res.pools)
    }

    /// Fetch one pool by its coin-specific id.
    pub fn pool(&self, pool_id: &str) -> Result<PoolInfo, Error> {
        #[derive(serde::Deserialize)]
        struct PoolResponse {
            pool: PoolInfo,
        }
        let res: PoolResponse = self.request(&["api", "pools", pool_id], &[])?;
        Ok(res.pool)
    }

    /// Blocks found by a pool, paginated via `page` / `perPage`.
    pub fn pool_blocks(
        &self,
        pool_id: &str,
        params: &[(&str, &str)],
    ) -> Result<PagedResponse<Block>, Error> {
        self.request(&["api", "v2", "pools", pool_id, "blocks"], params)
    }

    /// Payments made by a pool, paginated via `page` / `perPage`.
    pub fn pool_payments(
        &self,
        pool_id: &str,
        params: &[(&str, &str)],
    ) -> Result<PagedResponse<Payment>, Error> {
        self.request(&["api", "v2", "pools", pool_id, "payments"], params)
    }

    /// Performance summaries for the miners of a pool, paginated via
    /// `page` / `perPage`.
    pub fn miners(
        &self,
        pool_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<MinerPerformanceStats>, Error> {
        self.request(&["api", "pools", pool_id, "miners"], params)
    }

    /// Full statistics for one miner of a pool.
    pub fn miner(&self, pool_id: &str, address: &str) -> Result<MinerStats, Error> {
        self.request(&["api", "pools", pool_id, "miners", address], &[])
    }

    /// Payments received by a miner, paginated via `page` / `perPage`.
    pub fn miner_payments(
        &self,
        pool_id: &str,
        address: &str,
        params: &[(&str, &str)],
    ) -> Result<PagedResponse<Payment>, Error> {
        self.request(&["api", "v2", "pools", pool_id, "miners", address, "payments"], params)
    }

    /// Daily earnings of a miner, paginated via `page` / `perPage`.
    pub fn miner_daily_earnings(
        &self,
        pool_id: &str,
        address: &str,
        params: &[(&str, &str)],
    ) -> Result<PagedResponse<DailyEarning>, Error> {
        self.request(&["api", "v2", "pools", pool_id, "miners", address, "earnings", "daily"], params)
    }

    /// Balance-change ledger of a miner, paginated via `page` / `perPage`.
    pub fn miner_balance_changes(
        &self,
        pool_id: &str,
        address: &str,
        params: &[(&str, &str)],
    ) -> Result<PagedResponse<BalanceChange>, Error> {
        self.request(&["api", "v2", "pools", pool_id, "miners", address, "balancechanges"], params)
    }

    /// Per-worker performance samples of a miner. Accepts the stats range
    /// and interval selectors `r` / `i` (values like `"Hour"`, `"Day"`).
    pub fn miner_performance(
        &self,
        pool_id: &str,
        address: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<WorkerStats>, Error> {
        self.request(&["api", "pools", pool_id, "miners", address, "performance"], params)
    }

    /// Current settings of a miner.
    pub fn miner_settings(&self, pool_id: &str, address: &str) -> Result<MinerSettings, Error> {
        self.request(&["api", "pools", pool_id, "miners", address, "settings"], &[])
    }

    /// Update the settings of a miner.
    ///
    /// Always returns [`Error::NotImplemented`] without touching the
    /// network; callers can distinguish this from any server-side failure.
    pub fn update_miner_settings(
        &self,
        _pool_id: &str,
        _address: &str,
        _settings: &MinerSettingsUpdate,
    ) -> Result<MinerSettingsUpdateResponse, Error> {
        // TODO: wire up the POST once the upstream settings contract settles.
        Err(Error::NotImplemented)
    }

    /// Pool-wide performance history. Accepts the stats range and interval
    /// selectors `r` / `i`.
    pub fn pool_performance(
        &self,
        pool_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<PoolPerformance>, Error> {
        self.request(&["api", "pools", pool_id, "performance"], params)
    }

    /// Build a request URL from the configured base, percent-encoding both
    /// path segments and query values. Duplicate query keys are
    /// last-write-wins; pair order is the caller's order.
    fn request_url(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        if !params.is_empty() {
            let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(params.len());
            for &(key, value) in params {
                pairs.retain(|&(seen, _)| seen != key);
                pairs.push((key, value));
            }
            let mut query = url.query_pairs_mut();
            for (key, value) in pairs {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// One GET round trip: issue the request, read the body to completion,
    /// branch on status. 200 decodes into `T`; anything else surfaces the
    /// body text as an [`Error::Api`] with the real status code.
    fn request<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = self.request_url(segments, params)?;
        let mut response = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Error::Transport(e.to_string()))?;
        if status != 200 {
            return Err(Error::Api {
                status,
                message: body,
            });
        }
        serde_json::from_str(&body).map_err(Error::Decode)
    }
}
