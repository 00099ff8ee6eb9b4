//! Error handling for the application

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Curve-math errors
///
/// These are domain errors recovered locally: a failing candidate is
/// skipped by the evaluation loop, never propagated as a fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("insufficient liquidity: pool must retain {required} but holds {available}")]
    InsufficientLiquidity { required: u64, available: u64 },

    #[error("pool has no reserves to price against")]
    EmptyPool,

    #[error("computed amount does not fit in 64 bits")]
    AmountOverflow,
}

/// Static-configuration errors, fatal at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("market name {name:?} does not match its token pair {expected:?}")]
    PairMismatch { name: String, expected: String },

    #[error("invalid fee schedule {numerator}/{denominator}")]
    InvalidFeeSchedule { numerator: u64, denominator: u64 },

    #[error("registry contains no markets")]
    EmptyRegistry,
}

/// Reserve-fetch errors from the RPC boundary
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("rpc request failed: {0}")]
    Rpc(String),

    #[error("vault account {0} not found")]
    AccountMissing(Pubkey),

    #[error("vault account {0} is not a valid token account")]
    InvalidAccountData(Pubkey),
}

/// Execution-related errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("failed to encode trade plan: {0}")]
    Encode(String),

    #[error("trade plan rejected: {0}")]
    Rejected(String),
}
