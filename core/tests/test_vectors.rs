//! Decode the JSON fixtures in `test-vectors/` into typed DTOs.
//!
//! The same bodies are served by the mock server, so these tests pin the
//! client-side schema against exactly what the integration tests see on
//! the wire, without any HTTP involved.

use std::collections::HashMap;

use miningcore_client::{
    Block, MinerStats, PagedResponse, Payment, PoolInfo, WorkerStats,
};

// ---------------------------------------------------------------------------
// Pools
// ---------------------------------------------------------------------------

#[test]
fn pool_detail_vector_decodes() {
    #[derive(serde::Deserialize)]
    struct PoolResponse {
        pool: PoolInfo,
    }

    let raw = include_str!("../../test-vectors/pool_eth.json");
    let res: PoolResponse = serde_json::from_str(raw).unwrap();
    let pool = res.pool;

    assert_eq!(pool.id, "eth");
    let coin = pool.coin.unwrap();
    assert_eq!(coin.coin_type, "ETH");
    assert_eq!(coin.symbol, "ETH");
    assert_eq!(coin.canonical_name.as_deref(), Some("Ethereum"));

    // Port 4000 has full vardiff config, 4001 leans on defaults.
    let gpu = &pool.ports["4000"];
    assert_eq!(gpu.difficulty, 0.1);
    assert_eq!(gpu.var_diff.as_ref().unwrap().target_time, 15.0);
    assert!(!gpu.tls);
    let asic = &pool.ports["4001"];
    assert!(asic.tls);
    assert!(asic.var_diff.is_none());
    assert!(asic.tls_pfx_file.is_none());

    let payments = pool.payment_processing.unwrap();
    assert!(payments.enabled);
    assert_eq!(payments.payout_scheme, "PPLNS");
    assert_eq!(payments.extra["factor"], serde_json::json!(2.0));

    let banning = pool.share_based_banning.unwrap();
    assert_eq!(banning.check_threshold, 50);

    let stats = pool.pool_stats.unwrap();
    assert_eq!(stats.pool_hashrate, 4130000000);
    let network = pool.network_stats.unwrap();
    assert_eq!(network.block_height, 12230000);
    assert!(network.next_network_target.is_none());

    assert_eq!(pool.total_blocks, 421);
    assert!(pool.api_endpoint.is_none());
}

#[test]
fn pools_vector_wraps_the_same_pool() {
    #[derive(serde::Deserialize)]
    struct PoolsResponse {
        pools: Vec<PoolInfo>,
    }

    let raw = include_str!("../../test-vectors/pools.json");
    let res: PoolsResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(res.pools.len(), 1);
    assert_eq!(res.pools[0].id, "eth");
    assert_eq!(res.pools[0].top_miners[0].shares_per_second, 0.5);
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

#[test]
fn blocks_vector_decodes_envelope_and_lifecycle_fields() {
    let raw = include_str!("../../test-vectors/blocks.json");
    let blocks: PagedResponse<Block> = serde_json::from_str(raw).unwrap();

    assert_eq!(blocks.meta.page_count, 12);
    assert!(blocks.meta.success);
    assert!(blocks.meta.response_message_id.is_none());

    let confirmed = &blocks.result[0];
    assert_eq!(confirmed.block_height, 12230001);
    assert_eq!(confirmed.status, "confirmed");
    assert_eq!(confirmed.confirmation_progress, 1.0);
    assert_eq!(confirmed.effort, Some(0.89));
    assert_eq!(confirmed.reward, 2.974);

    let pending = &blocks.result[1];
    assert_eq!(pending.status, "pending");
    assert!(pending.effort.is_none());
    assert!(pending.info_link.is_none());
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

#[test]
fn payments_vector_tolerates_omitted_fields() {
    let raw = include_str!("../../test-vectors/payments.json");
    let payments: PagedResponse<Payment> = serde_json::from_str(raw).unwrap();

    assert_eq!(payments.meta.page_count, 3);
    let full = &payments.result[0];
    assert_eq!(full.coin.as_deref(), Some("ETH"));
    assert_eq!(full.amount, 0.21);
    let sparse = &payments.result[1];
    assert!(sparse.coin.is_none());
    assert!(sparse.transaction_info_link.is_none());
    assert_eq!(sparse.amount, 0.108);
}

// ---------------------------------------------------------------------------
// Miner stats
// ---------------------------------------------------------------------------

#[test]
fn miner_vector_decodes_worker_breakdown() {
    let raw = include_str!("../../test-vectors/miner.json");
    let miner: MinerStats = serde_json::from_str(raw).unwrap();

    assert_eq!(miner.pending_shares, 17);
    assert_eq!(miner.pending_balance, 0.0335);
    assert_eq!(miner.last_payment.as_deref(), Some("2021-04-13T20:00:00Z"));

    let current = miner.performance.unwrap();
    assert_eq!(current.workers.len(), 2);
    assert_eq!(current.workers["rig1"].reported_hashrate, 530000000);
    // The unnamed default worker is keyed by the empty string.
    assert_eq!(current.workers[""].hashrate, 70000000);

    assert_eq!(miner.performance_samples.len(), 2);
    assert_eq!(
        miner.performance_samples[0].created,
        "2021-04-13T21:00:00Z"
    );
}

#[test]
fn worker_stats_default_to_empty_map() {
    let sample: WorkerStats = serde_json::from_str(r#"{"created":"2021-04-13T21:00:00Z"}"#).unwrap();
    assert_eq!(sample.workers, HashMap::new());
}
