//! Cross-venue opportunity detection and trade sizing
//!
//! Takes a buy-side quote from one venue and a sell-side quote from
//! another for the same pair, gates on the round-trip edge, and sizes
//! both legs so the sell leg's input never exceeds what the buy leg can
//! realistically deliver. Pure: returns a plan, performs no I/O.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::market::SwapQuote;
use crate::shared::decimal::{from_base_units, to_base_units};
use crate::shared::math::BPS_DENOMINATOR;

use super::plan::{ArbitrageCandidate, ArbitragePlan, TradeLeg};

/// Evaluator parameters, fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct ArbitrageEvaluator {
    /// Required round-trip edge over break-even, basis points. The gate
    /// accepts when `buy.rate * sell.rate` exceeds `1 + min_edge_bps/10000`.
    min_edge_bps: u64,
    /// Safety margin shaved off the converting rate during sizing, basis
    /// points. Keeps the derived amounts conservative against quote drift
    /// between evaluation and execution.
    margin_bps: u64,
}

impl ArbitrageEvaluator {
    pub fn new(min_edge_bps: u64, margin_bps: u64) -> Self {
        Self {
            min_edge_bps,
            margin_bps,
        }
    }

    /// Round-trip ratio of a candidate: the product of the two legs' rates.
    /// Fees, curve convexity, and slippage guards are already embedded in
    /// each rate, so a ratio above one is an actual edge.
    pub fn round_trip_ratio(buy: &SwapQuote, sell: &SwapQuote) -> Decimal {
        buy.rate * sell.rate
    }

    /// The acceptance threshold as a ratio.
    pub fn threshold(&self) -> Decimal {
        Decimal::ONE + Decimal::from(self.min_edge_bps) / Decimal::from(BPS_DENOMINATOR)
    }

    fn margin_factor(&self) -> Decimal {
        Decimal::from(BPS_DENOMINATOR - self.margin_bps.min(BPS_DENOMINATOR))
            / Decimal::from(BPS_DENOMINATOR)
    }

    /// Profitability gate, evaluated before sizing.
    pub fn is_profitable(&self, buy: &SwapQuote, sell: &SwapQuote) -> bool {
        Self::round_trip_ratio(buy, sell) > self.threshold()
    }

    /// Gate and size in one step. `None` means no executable opportunity:
    /// unprofitable, degenerate quotes, or mismatched inputs.
    pub fn evaluate(&self, buy: &SwapQuote, sell: &SwapQuote) -> Option<ArbitrageCandidate> {
        if buy.pair != sell.pair {
            return None;
        }
        if buy.input_trade_amount == 0 || sell.input_trade_amount == 0 {
            return None;
        }
        if !self.is_profitable(buy, sell) {
            return None;
        }

        let plan = self.size_trade(buy, sell)?;
        Some(ArbitrageCandidate {
            buy: buy.clone(),
            sell: sell.clone(),
            plan,
        })
    }

    /// Size both legs around the binding one.
    ///
    /// Leg values are compared in the quote-token unit: the buy input is
    /// already denominated there, the sell input converts through the sell
    /// price. The smaller value constrains the trade; the other leg's
    /// amount is derived through the counterpart rate discounted by the
    /// safety margin.
    pub fn size_trade(&self, buy: &SwapQuote, sell: &SwapQuote) -> Option<ArbitragePlan> {
        let pair = buy.pair;
        let decimals_a = pair.token_a.decimals();
        let decimals_b = pair.token_b.decimals();

        let buy_trade_value = from_base_units(buy.input_trade_amount, decimals_b);
        let sell_trade_value = from_base_units(sell.input_trade_amount, decimals_a) * sell.price;
        let is_sell_binding = sell_trade_value < buy_trade_value;

        let margin = self.margin_factor();

        let (min_input_amount, min_input_display, intermediate_amount, final_output_amount) =
            if is_sell_binding {
                // The sell leg can only absorb its own quoted input; cap the
                // buy leg's output there and back out the initial input
                // through the buy rate.
                let intermediate_amount = sell.input_trade_amount;
                let final_output_amount = sell.expected_output_amount;

                let discounted_rate = buy.rate * margin;
                if discounted_rate.is_zero() {
                    return None;
                }
                let min_input_display =
                    from_base_units(intermediate_amount, decimals_a) / discounted_rate;
                let min_input_amount = to_base_units(min_input_display, decimals_b)?;

                (
                    min_input_amount,
                    min_input_display,
                    intermediate_amount,
                    final_output_amount,
                )
            } else {
                // The buy leg binds: spend its quoted input, bridge its
                // guaranteed output, and project the final output through
                // the discounted sell rate.
                let min_input_amount = buy.input_trade_amount;
                let min_input_display = from_base_units(min_input_amount, decimals_b);
                let intermediate_amount = buy.expected_output_amount;

                let final_output_display = from_base_units(intermediate_amount, decimals_a)
                    * (sell.rate * margin);
                let final_output_amount = to_base_units(final_output_display, decimals_b)?;

                (
                    min_input_amount,
                    min_input_display,
                    intermediate_amount,
                    final_output_amount,
                )
            };

        if min_input_amount == 0 || intermediate_amount == 0 || final_output_amount == 0 {
            return None;
        }

        Some(ArbitragePlan {
            pair,
            buy_leg: TradeLeg {
                venue: buy.venue,
                market: buy.market.clone(),
                from_token: pair.token_b,
                from_amount: min_input_amount,
                to_token: pair.token_a,
                min_to_amount: intermediate_amount,
            },
            sell_leg: TradeLeg {
                venue: sell.venue,
                market: sell.market.clone(),
                from_token: pair.token_a,
                from_amount: intermediate_amount,
                to_token: pair.token_b,
                min_to_amount: final_output_amount,
            },
            is_sell_binding,
            min_input_amount,
            intermediate_amount,
            final_output_amount,
            min_input_display,
            intermediate_display: from_base_units(intermediate_amount, decimals_a),
            final_output_display: from_base_units(final_output_amount, decimals_b),
            round_trip_ratio: Self::round_trip_ratio(buy, sell),
            timestamp: Utc::now(),
        })
    }
}
