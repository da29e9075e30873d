//! Websocket event payloads published by the miningcore notification relay.
//!
//! # Design
//! Pure data-shape declarations: this crate ships no websocket transport.
//! Consumers bring their own connection, probe each frame with
//! [`RawMessage`] to learn its type tag, then decode into the matching
//! payload. Block-related events share the [`BlockMessage`] header, which is
//! flattened into the concrete payloads the way the server emits it.

use serde::{Deserialize, Serialize};

/// Type tag carried in the `type` field of every websocket frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WsMessageType {
    BlockFound,
    NewChainHeight,
    Payment,
    BlockUnlockedProgress,
    HashrateUpdated,
}

/// Minimal probe for dispatching a frame before full decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(rename = "type")]
    pub msg_type: WsMessageType,
}

/// Header shared by all block-related events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockMessage {
    pub pool_id: String,
    pub block_height: u64,
    pub symbol: String,
    pub name: String,
}

/// A new block was found by the pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockFoundMessage {
    #[serde(flatten)]
    pub block: BlockMessage,
    pub miner: String,
    pub miner_explorer_link: Option<String>,
    pub source: Option<String>,
}

/// The chain the pool mines against advanced to a new height.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainHeightMessage {
    #[serde(flatten)]
    pub block: BlockMessage,
}

/// A payment run was executed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMessage {
    pub pool_id: String,
    pub symbol: String,
    pub tx_fee: f64,
    pub tx_ids: Vec<String>,
    pub tx_explorer_links: Vec<String>,
    // The field name typo is the server's; keep it to match the wire.
    #[serde(rename = "recpientsCount")]
    pub recipients_count: i64,
    pub amount: f64,
    pub error: Option<String>,
}

/// A found block reached full confirmation and was unlocked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockUnlockedMessage {
    #[serde(flatten)]
    pub block: BlockMessage,
    pub block_type: Option<String>,
    pub block_hash: Option<String>,
    pub reward: f64,
    pub effort: Option<f64>,
    pub miner: String,
    pub explorer_link: Option<String>,
    pub miner_explorer_link: Option<String>,
}

/// Confirmation progress of a pending block changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockUnlockProgressMessage {
    #[serde(flatten)]
    pub block: BlockMessage,
    pub progress: f64,
    pub effort: Option<f64>,
}

/// Recomputed hashrate for one miner/worker pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HashrateUpdateMessage {
    pub pool_id: String,
    pub hashrate: f64,
    pub miner: String,
    pub worker: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_type_tags_match_wire_values() {
        let probe: RawMessage = serde_json::from_str(r#"{"type":"blockfound"}"#).unwrap();
        assert_eq!(probe.msg_type, WsMessageType::BlockFound);

        let probe: RawMessage =
            serde_json::from_str(r#"{"type":"blockunlockedprogress"}"#).unwrap();
        assert_eq!(probe.msg_type, WsMessageType::BlockUnlockedProgress);

        assert_eq!(
            serde_json::to_string(&WsMessageType::HashrateUpdated).unwrap(),
            r#""hashrateupdated""#
        );
    }

    #[test]
    fn unknown_message_type_is_rejected() {
        let result: Result<RawMessage, _> = serde_json::from_str(r#"{"type":"sharelogged"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn block_found_decodes_flattened_header() {
        let msg: BlockFoundMessage = serde_json::from_str(
            r#"{
                "poolId": "eth",
                "blockHeight": 12230001,
                "symbol": "ETH",
                "name": "Ethereum",
                "miner": "0xdeadbeef",
                "minerExplorerLink": "https://etherscan.io/address/0xdeadbeef",
                "source": "eth1"
            }"#,
        )
        .unwrap();
        assert_eq!(msg.block.pool_id, "eth");
        assert_eq!(msg.block.block_height, 12230001);
        assert_eq!(msg.miner, "0xdeadbeef");
    }

    #[test]
    fn payment_message_reads_typoed_recipients_field() {
        let msg: PaymentMessage = serde_json::from_str(
            r#"{
                "poolId": "eth",
                "symbol": "ETH",
                "txFee": 0.002,
                "txIds": ["0xabc"],
                "txExplorerLinks": ["https://etherscan.io/tx/0xabc"],
                "recpientsCount": 42,
                "amount": 12.5,
                "error": null
            }"#,
        )
        .unwrap();
        assert_eq!(msg.recipients_count, 42);
        assert!(msg.error.is_none());
    }

    #[test]
    fn unlock_progress_tolerates_missing_effort() {
        let msg: BlockUnlockProgressMessage = serde_json::from_str(
            r#"{"poolId":"eth","blockHeight":1,"symbol":"ETH","name":"Ethereum","progress":0.4}"#,
        )
        .unwrap();
        assert_eq!(msg.progress, 0.4);
        assert!(msg.effort.is_none());
    }
}
