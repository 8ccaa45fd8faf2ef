//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Computed tick array start index fell outside the representable domain.
    /// Signals an inconsistent tick/spacing/offset combination from the caller.
    #[error("Tick array start index {0} is out of bounds")]
    StartIndexOutOfBounds(i64),

    /// The requested tick is not covered by the given tick array.
    /// Signals that the caller paired the wrong array with the tick/spacing.
    #[error("Tick {tick_index} is not in the array starting at {start_tick_index}")]
    TickNotInArray {
        tick_index: i32,
        start_tick_index: i32,
    },

    /// Account data did not decode as a tick array
    #[error("Invalid tick array account: {0}")]
    InvalidTickArray(String),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// RPC error
    #[error("RPC error: {0}")]
    Rpc(String),
}

impl From<solana_client::client_error::ClientError> for SdkError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        SdkError::Rpc(err.to_string())
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
