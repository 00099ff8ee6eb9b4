//! Arbitrage domain - opportunity detection and trade sizing

pub mod evaluator;
pub mod plan;

pub use evaluator::ArbitrageEvaluator;
pub use plan::{ArbitrageCandidate, ArbitragePlan, TradeLeg};
