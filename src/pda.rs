//! Tick array address derivation

use solana_sdk::pubkey::Pubkey;

use crate::constants::{program_id, seeds};

/// Derive the tick array PDA for a pool and start tick index
pub fn find_tick_array_address(
    program_id: &Pubkey,
    pool: &Pubkey,
    start_tick_index: i32,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::TICK_ARRAY,
            pool.as_ref(),
            &start_tick_index.to_le_bytes(),
        ],
        program_id,
    )
}

/// Pure derivation of tick array storage addresses.
///
/// Narrow seam so the sequencer and detector stay independent of any
/// particular deployment; substitute an in-memory deriver in tests.
pub trait AddressDeriver {
    fn derive_tick_array_address(&self, pool: &Pubkey, start_tick_index: i32) -> Pubkey;
}

/// PDA-based deriver for a deployed program
#[derive(Clone, Debug)]
pub struct PdaDeriver {
    pub program_id: Pubkey,
}

impl PdaDeriver {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }
}

impl Default for PdaDeriver {
    fn default() -> Self {
        Self::new(program_id())
    }
}

impl AddressDeriver for PdaDeriver {
    fn derive_tick_array_address(&self, pool: &Pubkey, start_tick_index: i32) -> Pubkey {
        find_tick_array_address(&self.program_id, pool, start_tick_index).0
    }
}
