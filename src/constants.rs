use solana_sdk::pubkey::Pubkey;

/// Default program ID for the concentrated liquidity program
pub const PROGRAM_ID: &str = "CAMMCzo5YL8w4VFF8KVHrK22GGUsp5VTaW7grrKgrWqK";

/// Get the default program ID as a Pubkey
pub fn program_id() -> Pubkey {
    PROGRAM_ID.parse().unwrap()
}

/// Seeds for program PDAs
pub mod seeds {
    pub const TICK_ARRAY: &[u8] = b"tick_array";
}

/// Number of ticks stored per tick array account
pub const TICK_ARRAY_SIZE: usize = 88;

/// Hard bounds of the tick domain
pub const MIN_TICK_INDEX: i32 = -443_636;
pub const MAX_TICK_INDEX: i32 = 443_636;

/// Pools at or above this tick spacing only permit full-range positions
pub const FULL_RANGE_ONLY_TICK_SPACING_THRESHOLD: u16 = 32_768;
