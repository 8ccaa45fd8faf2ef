//! Tick array fetching
//!
//! The detector and any higher-level orchestration consume tick arrays
//! through the [`TickArrayFetcher`] seam: one batched lookup, one result
//! per requested address, absent accounts surfaced as `None`. The RPC
//! implementation decodes raw account data and keeps a read-through
//! cache that [`FetchOptions`] can bypass.

use std::sync::{Arc, RwLock};

use ahash::AHashMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::config::SdkConfig;
use crate::constants::TICK_ARRAY_SIZE;
use crate::error::{SdkError, SdkResult};
use crate::types::{Tick, TickArrayData};

/// Cache-control flags for a batched fetch
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct FetchOptions {
    /// Bypass the fetcher's local cache and hit storage directly
    pub skip_cache: bool,
}

/// Batched lookup of tick array accounts.
///
/// Implementations return exactly one element per input address, in
/// input order, with `None` for accounts that do not exist. Absence is
/// an ordinary result; only transport failures are errors.
#[async_trait]
pub trait TickArrayFetcher {
    async fn get_tick_arrays(
        &self,
        addresses: &[Pubkey],
        options: &FetchOptions,
    ) -> SdkResult<Vec<Option<TickArrayData>>>;
}

/// Account discriminator for tick array accounts
pub const TICK_ARRAY_DISCRIMINATOR: [u8; 8] = [69, 97, 189, 190, 110, 7, 66, 187];

const TICK_RECORD_LEN: usize = 80;
const HEADER_LEN: usize = 8 + 32 + 4 + 12;

/// On-chain size of a tick array account
pub const TICK_ARRAY_ACCOUNT_LEN: usize = HEADER_LEN + TICK_ARRAY_SIZE * TICK_RECORD_LEN;

/// Decode a raw tick array account.
///
/// Layout: discriminator(8) + pool(32) + start_tick_index(4) + pad(12),
/// then 88 tick records of 80 bytes each.
pub fn decode_tick_array(data: &[u8]) -> SdkResult<TickArrayData> {
    if data.len() < 8 || data[..8] != TICK_ARRAY_DISCRIMINATOR {
        return Err(SdkError::InvalidTickArray(
            "account discriminator mismatch".to_string(),
        ));
    }
    if data.len() < TICK_ARRAY_ACCOUNT_LEN {
        return Err(SdkError::InvalidTickArray(format!(
            "account data too short: {} bytes",
            data.len()
        )));
    }

    let pool = Pubkey::try_from(&data[8..40])
        .map_err(|_| SdkError::InvalidTickArray("bad pool pubkey".to_string()))?;
    let start_tick_index = i32::from_le_bytes(
        data[40..44]
            .try_into()
            .map_err(|_| SdkError::InvalidTickArray("bad start index".to_string()))?,
    );

    let mut ticks = [Tick::default(); TICK_ARRAY_SIZE];
    for (i, tick) in ticks.iter_mut().enumerate() {
        let record = &data[HEADER_LEN + i * TICK_RECORD_LEN..HEADER_LEN + (i + 1) * TICK_RECORD_LEN];
        tick.liquidity_net = i128::from_le_bytes(
            record[0..16]
                .try_into()
                .map_err(|_| SdkError::InvalidTickArray("bad tick record".to_string()))?,
        );
        tick.liquidity_gross = u128::from_le_bytes(
            record[16..32]
                .try_into()
                .map_err(|_| SdkError::InvalidTickArray("bad tick record".to_string()))?,
        );
        tick.fee_growth_outside_a = u128::from_le_bytes(
            record[32..48]
                .try_into()
                .map_err(|_| SdkError::InvalidTickArray("bad tick record".to_string()))?,
        );
        tick.fee_growth_outside_b = u128::from_le_bytes(
            record[48..64]
                .try_into()
                .map_err(|_| SdkError::InvalidTickArray("bad tick record".to_string()))?,
        );
        tick.initialized = record[64] != 0;
    }

    Ok(TickArrayData {
        pool,
        start_tick_index,
        ticks,
    })
}

/// RPC-backed tick array fetcher with a read-through cache
pub struct RpcTickArrayFetcher {
    rpc: Arc<RpcClient>,
    cache: RwLock<AHashMap<Pubkey, TickArrayData>>,
}

impl RpcTickArrayFetcher {
    pub fn new(rpc: Arc<RpcClient>) -> Self {
        Self {
            rpc,
            cache: RwLock::new(AHashMap::new()),
        }
    }

    pub fn from_config(config: &SdkConfig) -> Self {
        let rpc = RpcClient::new_with_commitment(
            config.rpc_url.clone(),
            CommitmentConfig {
                commitment: config.commitment,
            },
        );
        Self::new(Arc::new(rpc))
    }

    /// Get the RPC client
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Drop all cached arrays
    pub fn clear_cache(&self) {
        self.cache.write().unwrap().clear();
    }
}

#[async_trait]
impl TickArrayFetcher for RpcTickArrayFetcher {
    async fn get_tick_arrays(
        &self,
        addresses: &[Pubkey],
        options: &FetchOptions,
    ) -> SdkResult<Vec<Option<TickArrayData>>> {
        let mut results: Vec<Option<TickArrayData>> = vec![None; addresses.len()];

        let misses: Vec<(usize, Pubkey)> = if options.skip_cache {
            addresses.iter().copied().enumerate().collect()
        } else {
            let cache = self.cache.read().unwrap();
            addresses
                .iter()
                .enumerate()
                .filter_map(|(i, address)| match cache.get(address) {
                    Some(data) => {
                        results[i] = Some(*data);
                        None
                    }
                    None => Some((i, *address)),
                })
                .collect()
        };

        debug!(
            "Fetching tick arrays: {} requested, {} not cached",
            addresses.len(),
            misses.len()
        );

        if !misses.is_empty() {
            let keys: Vec<Pubkey> = misses.iter().map(|&(_, address)| address).collect();
            let accounts = self.rpc.get_multiple_accounts(&keys).await?;

            let mut cache = self.cache.write().unwrap();
            for ((i, address), account) in misses.into_iter().zip(accounts) {
                if let Some(account) = account {
                    let data = decode_tick_array(&account.data)?;
                    cache.insert(address, data);
                    results[i] = Some(data);
                }
            }
        }

        Ok(results)
    }
}
