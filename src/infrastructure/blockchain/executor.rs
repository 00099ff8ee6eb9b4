//! Trade execution boundary

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::arbitrage::ArbitrageCandidate;
use crate::shared::errors::ExecutionError;

/// Consumes sized plans. The plan's leg tuples are exactly the parameters
/// an instruction builder embeds: input amount and minimum-out per swap,
/// both legs submitted atomically. Building and submitting the actual
/// transaction is this collaborator's job, not the core's.
#[async_trait]
pub trait TradeExecutor: Send + Sync {
    async fn execute(&self, candidate: &ArbitrageCandidate) -> Result<(), ExecutionError>;
}

/// Logs the plan instead of submitting it.
pub struct SimulatedExecutor;

#[async_trait]
impl TradeExecutor for SimulatedExecutor {
    async fn execute(&self, candidate: &ArbitrageCandidate) -> Result<(), ExecutionError> {
        let plan = &candidate.plan;
        info!(
            "simulated arbitrage on {}: buy {} for {} {} on {}, sell {} {} for {} {} on {} (ratio {})",
            plan.pair,
            plan.buy_leg.min_to_amount,
            plan.buy_leg.from_amount,
            plan.buy_leg.from_token,
            plan.buy_leg.venue,
            plan.sell_leg.from_amount,
            plan.sell_leg.from_token,
            plan.sell_leg.min_to_amount,
            plan.sell_leg.to_token,
            plan.sell_leg.venue,
            plan.round_trip_ratio,
        );

        let report = plan
            .to_json()
            .map_err(|e| ExecutionError::Encode(e.to_string()))?;
        debug!("trade plan: {}", report);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arbitrage::ArbitrageEvaluator;
    use crate::domain::market::{ReserveSnapshot, Side, SwapQuote, TokenId, TokenPair, Venue};
    use rust_decimal_macros::dec;

    fn candidate() -> ArbitrageCandidate {
        let pair = TokenPair::new(TokenId::Btc, TokenId::Usdc);
        let reserves = ReserveSnapshot::new(1_000_000_000000, 1_000_000_000000);
        let mut buy = SwapQuote::zero(Venue::Orca, "BTC/USDC", pair, Side::Buy, &reserves, 100);
        buy.input_trade_amount = 1_000_000000;
        buy.expected_output_amount = 1_990_000000;
        buy.rate = dec!(2);
        buy.price = dec!(0.5);
        let mut sell = SwapQuote::zero(Venue::Raydium, "BTC/USDC", pair, Side::Sell, &reserves, 100);
        sell.input_trade_amount = 3_000_000000;
        sell.expected_output_amount = 2_910_000000;
        sell.rate = dec!(0.98);
        sell.price = dec!(0.98);

        ArbitrageEvaluator::new(10, 5).evaluate(&buy, &sell).unwrap()
    }

    #[tokio::test]
    async fn simulated_executor_accepts_plans() {
        let executor = SimulatedExecutor;
        executor.execute(&candidate()).await.unwrap();
    }
}
