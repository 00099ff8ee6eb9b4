//! Poolarb - cross-DEX AMM arbitrage bot for Solana
//!
//! The core is a pure constant-product pricing engine plus a cross-venue
//! sizing evaluator; reserve fetching and trade submission live behind
//! trait seams in the infrastructure layer.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types for convenience
pub use application::ArbitrageMonitor;
pub use domain::arbitrage::{ArbitrageCandidate, ArbitrageEvaluator, ArbitragePlan};
pub use domain::market::{AmmMarket, MarketRegistry, QuoteProvider, SwapQuote};
