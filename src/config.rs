//! SDK configuration

use serde::{Deserialize, Serialize};
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

use crate::constants::program_id;

/// Connection configuration for the SDK
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SdkConfig {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// WebSocket URL for subscriptions
    pub ws_url: Option<String>,

    /// Concentrated liquidity program ID
    pub program_id: Pubkey,

    /// Commitment level for reads
    pub commitment: CommitmentLevel,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl SdkConfig {
    pub fn localnet() -> Self {
        Self {
            rpc_url: "http://localhost:8899".to_string(),
            ws_url: Some("ws://localhost:8900".to_string()),
            program_id: program_id(),
            commitment: CommitmentLevel::Confirmed,
            timeout: 30,
        }
    }

    pub fn devnet() -> Self {
        Self {
            rpc_url: "https://api.devnet.solana.com".to_string(),
            ws_url: Some("wss://api.devnet.solana.com".to_string()),
            program_id: program_id(),
            commitment: CommitmentLevel::Confirmed,
            timeout: 30,
        }
    }

    pub fn mainnet() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            ws_url: Some("wss://api.mainnet-beta.solana.com".to_string()),
            program_id: program_id(),
            commitment: CommitmentLevel::Confirmed,
            timeout: 30,
        }
    }

    pub fn with_rpc_url(mut self, url: String) -> Self {
        self.rpc_url = url;
        self
    }

    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }
}
