//! Core data types for tick array accounts

use solana_sdk::pubkey::Pubkey;

use crate::constants::TICK_ARRAY_SIZE;

/// Per-tick liquidity state within a tick array
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    pub initialized: bool,
    pub liquidity_net: i128,
    pub liquidity_gross: u128,
    pub fee_growth_outside_a: u128,
    pub fee_growth_outside_b: u128,
}

/// Decoded contents of one tick array account.
///
/// The slot at offset `k` holds the state for global tick
/// `start_tick_index + k * tick_spacing`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickArrayData {
    pub pool: Pubkey,
    pub start_tick_index: i32,
    pub ticks: [Tick; TICK_ARRAY_SIZE],
}

impl TickArrayData {
    /// An empty array for a pool at the given start index
    pub fn new(pool: Pubkey, start_tick_index: i32) -> Self {
        Self {
            pool,
            start_tick_index,
            ticks: [Tick::default(); TICK_ARRAY_SIZE],
        }
    }
}

/// An inclusive tick range
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickRange {
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
}

/// A tick array that must be initialized before a dependent
/// transaction can proceed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InitializableTickArray {
    pub start_tick_index: i32,
    pub address: Pubkey,
}
