//! Sized arbitrage trade plans

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::market::{SwapQuote, TokenId, TokenPair, Venue};

/// Instruction parameters for one leg of the trade, exactly what the
/// external instruction builder embeds: input amount and minimum-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeLeg {
    pub venue: Venue,
    pub market: String,
    pub from_token: TokenId,
    pub from_amount: u64,
    pub to_token: TokenId,
    pub min_to_amount: u64,
}

/// The sized two-leg trade emitted for a profitable candidate.
///
/// Amounts are internally consistent: the sell leg's input equals the buy
/// leg's minimum-out, so the second swap can never be short of inventory
/// if the first clears its guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitragePlan {
    pub pair: TokenPair,
    pub buy_leg: TradeLeg,
    pub sell_leg: TradeLeg,
    /// Which leg's liquidity constrained the sizing.
    pub is_sell_binding: bool,
    /// Initial input, base units of the quote token.
    pub min_input_amount: u64,
    /// Amount bridged between the legs, base units of the primary token.
    pub intermediate_amount: u64,
    /// Guaranteed final output, base units of the quote token.
    pub final_output_amount: u64,
    pub min_input_display: Decimal,
    pub intermediate_display: Decimal,
    pub final_output_display: Decimal,
    pub round_trip_ratio: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl ArbitragePlan {
    /// Guaranteed gross return multiple over the initial input.
    pub fn expected_return(&self) -> Decimal {
        if self.min_input_display.is_zero() {
            return Decimal::ZERO;
        }
        self.final_output_display / self.min_input_display
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A matched pair of quotes plus the sized plan derived from them.
/// Ephemeral: built per evaluation cycle, dropped after the execution
/// attempt regardless of outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitrageCandidate {
    pub buy: SwapQuote,
    pub sell: SwapQuote,
    pub plan: ArbitragePlan,
}
