//! Quote records and the venue-agnostic quoting seam

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::errors::CurveError;

use super::curve::Venue;
use super::token::TokenPair;

/// Trade direction relative to the pair: "buy" spends token B to acquire
/// token A, "sell" is the mirror. The convention holds across all venues
/// so cross-venue comparison is well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

/// Point-in-time read of a pool's two vault balances, oriented for one
/// trade direction: `in_pool_amount` is the reserve of the token being
/// spent, `out_pool_amount` the reserve of the token being received.
///
/// Snapshots are fetched fresh per quote and discarded after use; the
/// caller manages staleness by re-fetching before every decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveSnapshot {
    pub in_pool_amount: u64,
    pub out_pool_amount: u64,
}

impl ReserveSnapshot {
    pub fn new(in_pool_amount: u64, out_pool_amount: u64) -> Self {
        Self {
            in_pool_amount,
            out_pool_amount,
        }
    }

    /// The same pool state oriented for the opposite trade direction.
    pub fn flipped(&self) -> Self {
        Self {
            in_pool_amount: self.out_pool_amount,
            out_pool_amount: self.in_pool_amount,
        }
    }
}

/// Priced view of one trade leg against one pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapQuote {
    pub venue: Venue,
    pub market: String,
    pub pair: TokenPair,
    pub side: Side,
    /// Input actually used, base units of the input token.
    pub input_trade_amount: u64,
    /// Minimum output guaranteed after the slippage haircut; this is the
    /// value submitted on-chain as the minimum-out guard.
    pub expected_output_amount: u64,
    /// Theoretical output at the ideal (zero-size) rate.
    pub no_slippage_output_amount: u64,
    /// Output per input at the actual trade size, post-fee and post-curve
    /// but before the slippage haircut.
    pub rate: Decimal,
    /// Cost to acquire one unit of the primary token, derived from the
    /// slippage-guarded rate: buy quotes invert it (B per A), sell quotes
    /// carry it directly (B per A). The asymmetry is intentional; both
    /// directions price the primary token so round-trip ratios multiply.
    pub price: Decimal,
    /// Worst-case divergence from the ideal rate, percent.
    pub price_impact: Decimal,
    /// Reserves the quote was computed against, kept for audit logging.
    pub in_pool_amount: u64,
    pub out_pool_amount: u64,
    pub slippage_tolerance_bps: u64,
}

impl SwapQuote {
    /// The degenerate zero-input quote: all amounts, rates, and impacts
    /// are zero. A valid result, not an error.
    pub fn zero(
        venue: Venue,
        market: &str,
        pair: TokenPair,
        side: Side,
        reserves: &ReserveSnapshot,
        slippage_tolerance_bps: u64,
    ) -> Self {
        Self {
            venue,
            market: market.to_string(),
            pair,
            side,
            input_trade_amount: 0,
            expected_output_amount: 0,
            no_slippage_output_amount: 0,
            rate: Decimal::ZERO,
            price: Decimal::ZERO,
            price_impact: Decimal::ZERO,
            in_pool_amount: reserves.in_pool_amount,
            out_pool_amount: reserves.out_pool_amount,
            slippage_tolerance_bps,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.input_trade_amount == 0
    }
}

/// Both directions of one pool, computed from a single reserve snapshot.
#[derive(Debug, Clone)]
pub struct PairQuotes {
    pub buy: SwapQuote,
    pub sell: SwapQuote,
}

/// Quoting capability shared by every venue type. Constant-product AMMs
/// implement it with curve math; an order-book venue would implement the
/// same contract from book depth. The evaluator only ever sees the trait.
pub trait QuoteProvider {
    fn market_name(&self) -> &str;

    fn venue(&self) -> Venue;

    fn pair(&self) -> TokenPair;

    /// Price one leg. `reserves` must be oriented for `side`; a zero
    /// `input_trade_amount` asks the venue to pick its own probe size.
    fn quote(
        &self,
        side: Side,
        reserves: &ReserveSnapshot,
        input_trade_amount: u64,
        slippage_bps: u64,
    ) -> Result<SwapQuote, CurveError>;

    /// Price both directions from one buy-oriented snapshot.
    fn quote_both_sides(
        &self,
        buy_side_reserves: &ReserveSnapshot,
        input_trade_amount: u64,
        slippage_bps: u64,
    ) -> Result<PairQuotes, CurveError> {
        let buy = self.quote(Side::Buy, buy_side_reserves, input_trade_amount, slippage_bps)?;
        let sell = self.quote(
            Side::Sell,
            &buy_side_reserves.flipped(),
            input_trade_amount,
            slippage_bps,
        )?;
        Ok(PairQuotes { buy, sell })
    }
}
