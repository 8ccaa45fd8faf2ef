//! Tick array indexing SDK for concentrated liquidity markets
//!
//! Maps the discretized price domain onto fixed-capacity tick array
//! accounts and locates the arrays an operation needs:
//! - Tick/array index arithmetic and bounds rules
//! - Initialized-tick search within an array
//! - Ordered tick array address sequences for a price sweep
//! - Detection of arrays that are not yet initialized on chain

pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod pda;
pub mod sweep;
pub mod tick_array;
pub mod tick_index;
pub mod types;
pub mod uninitialized;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use fetch::*;
pub use pda::*;
pub use sweep::*;
pub use tick_array::*;
pub use tick_index::*;
pub use types::*;
pub use uninitialized::*;
