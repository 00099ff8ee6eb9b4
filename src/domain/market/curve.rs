//! Constant-product pricing engine
//!
//! Pure integer/decimal math over a `x * y = k` pool with a proportional
//! input fee. Amounts are `u64` base units with `u128` intermediates;
//! rounding always favors the pool. No I/O happens here: reserves arrive
//! already fetched.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::shared::decimal::{from_base_units, round_to_decimals};
use crate::shared::errors::{ConfigError, CurveError};
use crate::shared::math::{apply_bps_haircut, bps_of, ceiling_division};

use super::quote::{QuoteProvider, ReserveSnapshot, Side, SwapQuote};
use super::token::{TokenId, TokenPair};

/// Venues hosting constant-product pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    Orca,
    Raydium,
}

impl Venue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Orca => "Orca",
            Venue::Raydium => "Raydium",
        }
    }

    pub fn program_id(&self) -> Pubkey {
        let id = match self {
            Venue::Orca => "9W959DqEETiGZocYWCQPaJ6sBmUzgfxXfqGeTEdp3aQP",
            Venue::Raydium => "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8",
        };
        Pubkey::from_str(id).unwrap()
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proportional fee taken from the trade input before curve math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub numerator: u64,
    pub denominator: u64,
}

impl FeeSchedule {
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, ConfigError> {
        if denominator == 0 || numerator >= denominator {
            return Err(ConfigError::InvalidFeeSchedule {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Fee amount on `input`, truncating division (pool-favorable).
    pub fn fee_amount(&self, input: u64) -> u64 {
        (input as u128 * self.numerator as u128 / self.denominator as u128) as u64
    }
}

/// Static configuration and pricing for one constant-product pool.
///
/// Immutable after construction; one instance per pool, shared freely
/// across concurrent evaluation cycles.
#[derive(Debug, Clone)]
pub struct AmmMarket {
    name: String,
    venue: Venue,
    pair: TokenPair,
    vault_a: Pubkey,
    vault_b: Pubkey,
    fees: FeeSchedule,
}

impl AmmMarket {
    /// Build a market, validating the display name against the pair.
    /// A mismatch is a configuration fault, fatal at load time.
    pub fn new(
        name: &str,
        venue: Venue,
        pair: TokenPair,
        vault_a: Pubkey,
        vault_b: Pubkey,
        fees: FeeSchedule,
    ) -> Result<Self, ConfigError> {
        if name != pair.label() {
            return Err(ConfigError::PairMismatch {
                name: name.to_string(),
                expected: pair.label(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            venue,
            pair,
            vault_a,
            vault_b,
            fees,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn venue(&self) -> Venue {
        self.venue
    }

    pub fn pair(&self) -> TokenPair {
        self.pair
    }

    pub fn fees(&self) -> FeeSchedule {
        self.fees
    }

    pub fn input_token(&self, side: Side) -> TokenId {
        match side {
            Side::Buy => self.pair.token_b,
            Side::Sell => self.pair.token_a,
        }
    }

    pub fn output_token(&self, side: Side) -> TokenId {
        match side {
            Side::Buy => self.pair.token_a,
            Side::Sell => self.pair.token_b,
        }
    }

    pub fn input_vault(&self, side: Side) -> Pubkey {
        match side {
            Side::Buy => self.vault_b,
            Side::Sell => self.vault_a,
        }
    }

    pub fn output_vault(&self, side: Side) -> Pubkey {
        match side {
            Side::Buy => self.vault_a,
            Side::Sell => self.vault_b,
        }
    }

    /// Raw curve output for `input_amount`, before fees.
    ///
    /// The new output-side reserve is `ceil(k / (in_pool + input))`, so the
    /// rounding remainder stays in the pool. The caller is expected to keep
    /// trade sizes well below `in_pool`; a trade the pool cannot cover is
    /// reported as insufficient liquidity.
    pub fn output_amount(
        &self,
        input_amount: u64,
        in_pool: u64,
        out_pool: u64,
    ) -> Result<u64, CurveError> {
        let new_pool_input = in_pool as u128 + input_amount as u128;
        if new_pool_input == 0 {
            return Err(CurveError::EmptyPool);
        }

        let invariant = in_pool as u128 * out_pool as u128;
        let (new_pool_output, _) = ceiling_division(invariant, new_pool_input);

        let out_pool = out_pool as u128;
        if new_pool_output > out_pool {
            return Err(CurveError::InsufficientLiquidity {
                required: new_pool_output as u64,
                available: out_pool as u64,
            });
        }

        Ok((out_pool - new_pool_output) as u64)
    }

    /// LP fee on `input_amount` under this market's schedule.
    pub fn lp_fee(&self, input_amount: u64) -> u64 {
        self.fees.fee_amount(input_amount)
    }

    /// Curve output after deducting the LP fee from the input. This is the
    /// receivable quantity before any slippage tolerance is applied.
    pub fn expected_output_amount(
        &self,
        input_amount: u64,
        in_pool: u64,
        out_pool: u64,
    ) -> Result<u64, CurveError> {
        let input_less_fees = input_amount - self.lp_fee(input_amount);
        self.output_amount(input_less_fees, in_pool, out_pool)
    }

    /// Fee-adjusted input priced at the ideal spot rate `out_pool / in_pool`,
    /// with no curve convexity. An empty input-side pool degenerates to the
    /// full output reserve.
    pub fn expected_output_amount_no_slippage(
        &self,
        input_amount: u64,
        in_pool: u64,
        out_pool: u64,
    ) -> Result<u64, CurveError> {
        if in_pool == 0 {
            return Ok(out_pool);
        }

        let input_less_fees = input_amount - self.lp_fee(input_amount);
        let ideal = input_less_fees as u128 * out_pool as u128 / in_pool as u128;
        u64::try_from(ideal).map_err(|_| CurveError::AmountOverflow)
    }

    /// The binding minimum-out guard: expected output reduced by the
    /// slippage tolerance, in basis points out of 10_000.
    pub fn minimum_amount_out(
        &self,
        input_amount: u64,
        in_pool: u64,
        out_pool: u64,
        slippage_bps: u64,
    ) -> Result<u64, CurveError> {
        let expected = self.expected_output_amount(input_amount, in_pool, out_pool)?;
        Ok(apply_bps_haircut(expected, slippage_bps))
    }

    /// Output-per-input at the actual trade size, display-scaled and
    /// rounded to the output token's decimals. Zero input prices at zero.
    pub fn rate(
        &self,
        input_amount: u64,
        in_pool: u64,
        out_pool: u64,
        side: Side,
    ) -> Result<Decimal, CurveError> {
        let expected = self.expected_output_amount(input_amount, in_pool, out_pool)?;
        self.display_rate(input_amount, expected, side)
    }

    /// Like `rate`, but against the slippage-guarded minimum output: the
    /// conservative floor the trade is guaranteed to clear.
    pub fn min_rate(
        &self,
        input_amount: u64,
        in_pool: u64,
        out_pool: u64,
        side: Side,
        slippage_bps: u64,
    ) -> Result<Decimal, CurveError> {
        let minimum = self.minimum_amount_out(input_amount, in_pool, out_pool, slippage_bps)?;
        self.display_rate(input_amount, minimum, side)
    }

    /// Divergence of the realized output from the ideal zero-size output,
    /// in percent: the cost of curve convexity, excluding the slippage cut.
    pub fn price_impact(
        &self,
        input_amount: u64,
        in_pool: u64,
        out_pool: u64,
        side: Side,
    ) -> Result<Decimal, CurveError> {
        let expected = self.expected_output_amount(input_amount, in_pool, out_pool)?;
        self.impact_against_ideal(input_amount, expected, in_pool, out_pool, side)
    }

    /// Worst-case impact with the slippage guard included.
    pub fn max_price_impact(
        &self,
        input_amount: u64,
        in_pool: u64,
        out_pool: u64,
        side: Side,
        slippage_bps: u64,
    ) -> Result<Decimal, CurveError> {
        let minimum = self.minimum_amount_out(input_amount, in_pool, out_pool, slippage_bps)?;
        self.impact_against_ideal(input_amount, minimum, in_pool, out_pool, side)
    }

    /// Default probe size when the caller does not fix one: a slice of the
    /// input-side reserve proportional to the slippage tolerance, so probe
    /// sizes stay sane on shallow pools.
    pub fn optimal_input_amount(&self, in_pool: u64, slippage_bps: u64) -> u64 {
        bps_of(in_pool, slippage_bps)
    }

    fn display_rate(
        &self,
        input_amount: u64,
        output_amount: u64,
        side: Side,
    ) -> Result<Decimal, CurveError> {
        if input_amount == 0 {
            return Ok(Decimal::ZERO);
        }

        let input = from_base_units(input_amount, self.input_token(side).decimals());
        let output = from_base_units(output_amount, self.output_token(side).decimals());
        let rate = output.checked_div(input).ok_or(CurveError::AmountOverflow)?;
        Ok(round_to_decimals(rate, self.output_token(side).decimals()))
    }

    fn impact_against_ideal(
        &self,
        input_amount: u64,
        realized_output: u64,
        in_pool: u64,
        out_pool: u64,
        side: Side,
    ) -> Result<Decimal, CurveError> {
        if input_amount == 0 {
            return Ok(Decimal::ZERO);
        }

        let ideal_output =
            self.expected_output_amount_no_slippage(input_amount, in_pool, out_pool)?;
        if ideal_output == 0 {
            return Ok(Decimal::ZERO);
        }

        let decimals = self.output_token(side).decimals();
        let ideal = from_base_units(ideal_output, decimals);
        let realized = from_base_units(realized_output, decimals);
        let impact = (ideal - realized) / ideal * Decimal::ONE_HUNDRED;
        Ok(round_to_decimals(impact, decimals))
    }
}

impl QuoteProvider for AmmMarket {
    fn market_name(&self) -> &str {
        &self.name
    }

    fn venue(&self) -> Venue {
        self.venue
    }

    fn pair(&self) -> TokenPair {
        self.pair
    }

    fn quote(
        &self,
        side: Side,
        reserves: &ReserveSnapshot,
        input_trade_amount: u64,
        slippage_bps: u64,
    ) -> Result<SwapQuote, CurveError> {
        let in_pool = reserves.in_pool_amount;
        let out_pool = reserves.out_pool_amount;

        let input_trade_amount = if input_trade_amount == 0 {
            self.optimal_input_amount(in_pool, slippage_bps)
        } else {
            input_trade_amount
        };
        if input_trade_amount == 0 {
            return Ok(SwapQuote::zero(
                self.venue,
                &self.name,
                self.pair,
                side,
                reserves,
                slippage_bps,
            ));
        }

        let minimum_output_amount =
            self.minimum_amount_out(input_trade_amount, in_pool, out_pool, slippage_bps)?;
        let no_slippage_output_amount =
            self.expected_output_amount_no_slippage(input_trade_amount, in_pool, out_pool)?;

        let rate = self.rate(input_trade_amount, in_pool, out_pool, side)?;
        let min_rate = self.min_rate(input_trade_amount, in_pool, out_pool, side, slippage_bps)?;
        let price = match side {
            Side::Buy => {
                if min_rate.is_zero() {
                    Decimal::ZERO
                } else {
                    Decimal::ONE / min_rate
                }
            }
            Side::Sell => min_rate,
        };

        let price_impact =
            self.max_price_impact(input_trade_amount, in_pool, out_pool, side, slippage_bps)?;

        Ok(SwapQuote {
            venue: self.venue,
            market: self.name.clone(),
            pair: self.pair,
            side,
            input_trade_amount,
            expected_output_amount: minimum_output_amount,
            no_slippage_output_amount,
            rate,
            price,
            price_impact,
            in_pool_amount: in_pool,
            out_pool_amount: out_pool,
            slippage_tolerance_bps: slippage_bps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn btc_usdc(venue: Venue, fee_numerator: u64) -> AmmMarket {
        AmmMarket::new(
            "BTC/USDC",
            venue,
            TokenPair::new(TokenId::Btc, TokenId::Usdc),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            FeeSchedule::new(fee_numerator, 10_000).unwrap(),
        )
        .unwrap()
    }

    fn sol_usdc() -> AmmMarket {
        AmmMarket::new(
            "SOL/USDC",
            Venue::Orca,
            TokenPair::new(TokenId::Sol, TokenId::Usdc),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            FeeSchedule::new(30, 10_000).unwrap(),
        )
        .unwrap()
    }

    const IN_POOL: u64 = 1_000_000_000000;
    const OUT_POOL: u64 = 500_000_000000;
    const INPUT: u64 = 10_000_000000;

    #[test]
    fn fee_schedule_rejects_degenerate_fractions() {
        assert!(FeeSchedule::new(30, 10_000).is_ok());
        assert!(FeeSchedule::new(10_000, 10_000).is_err());
        assert!(FeeSchedule::new(1, 0).is_err());
    }

    #[test]
    fn market_name_must_match_pair() {
        let err = AmmMarket::new(
            "ETH/USDC",
            Venue::Orca,
            TokenPair::new(TokenId::Btc, TokenId::Usdc),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            FeeSchedule::new(30, 10_000).unwrap(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::PairMismatch {
                name: "ETH/USDC".to_string(),
                expected: "BTC/USDC".to_string(),
            }
        );
    }

    #[test]
    fn output_amount_matches_hand_computed_curve() {
        let market = btc_usdc(Venue::Orca, 30);
        // k = 1e12 * 5e11; new input reserve 1.01e12; output reserve rounds up.
        assert_eq!(market.output_amount(INPUT, IN_POOL, OUT_POOL).unwrap(), 4_950_495_049);
        assert_eq!(market.output_amount(10, 100, 100).unwrap(), 9);
        assert_eq!(market.output_amount(0, 100, 100).unwrap(), 0);
    }

    #[test]
    fn expected_output_amount_exact() {
        let market = btc_usdc(Venue::Orca, 30);
        // fee = 30_000_000; curve output of the remaining 9_970_000_000.
        assert_eq!(market.lp_fee(INPUT), 30_000_000);
        assert_eq!(
            market.expected_output_amount(INPUT, IN_POOL, OUT_POOL).unwrap(),
            4_935_790_171
        );
    }

    #[test]
    fn no_slippage_output_exact() {
        let market = btc_usdc(Venue::Orca, 30);
        assert_eq!(
            market
                .expected_output_amount_no_slippage(INPUT, IN_POOL, OUT_POOL)
                .unwrap(),
            4_985_000_000
        );
    }

    #[test]
    fn no_slippage_output_empty_pool_degenerates_to_reserve() {
        let market = btc_usdc(Venue::Orca, 30);
        assert_eq!(
            market
                .expected_output_amount_no_slippage(INPUT, 0, OUT_POOL)
                .unwrap(),
            OUT_POOL
        );
    }

    #[test]
    fn minimum_amount_out_exact() {
        let market = btc_usdc(Venue::Orca, 30);
        assert_eq!(
            market
                .minimum_amount_out(INPUT, IN_POOL, OUT_POOL, 100)
                .unwrap(),
            4_886_432_269
        );
        assert_eq!(
            market.minimum_amount_out(INPUT, IN_POOL, OUT_POOL, 50).unwrap(),
            4_911_111_220
        );
    }

    #[test]
    fn guard_ordering_holds() {
        let market = btc_usdc(Venue::Raydium, 25);
        let minimum = market
            .minimum_amount_out(INPUT, IN_POOL, OUT_POOL, 100)
            .unwrap();
        let expected = market.expected_output_amount(INPUT, IN_POOL, OUT_POOL).unwrap();
        let ideal = market
            .expected_output_amount_no_slippage(INPUT, IN_POOL, OUT_POOL)
            .unwrap();
        assert!(minimum <= expected);
        assert!(expected <= ideal);
    }

    #[test]
    fn zero_input_quotes_at_zero() {
        let market = btc_usdc(Venue::Orca, 30);
        assert_eq!(market.rate(0, IN_POOL, OUT_POOL, Side::Buy).unwrap(), Decimal::ZERO);
        assert_eq!(
            market.min_rate(0, IN_POOL, OUT_POOL, Side::Buy, 100).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            market.price_impact(0, IN_POOL, OUT_POOL, Side::Buy).unwrap(),
            Decimal::ZERO
        );
        // Slippage tolerance of zero also forces the auto-sized probe to
        // zero, which must yield the degenerate quote rather than an error.
        let reserves = ReserveSnapshot::new(IN_POOL, OUT_POOL);
        let quote = market.quote(Side::Buy, &reserves, 0, 0).unwrap();
        assert!(quote.is_zero());
        assert_eq!(quote.rate, Decimal::ZERO);
        assert_eq!(quote.price, Decimal::ZERO);
        assert_eq!(quote.price_impact, Decimal::ZERO);
    }

    #[test]
    fn rate_exact_for_scenario_pool() {
        let market = btc_usdc(Venue::Orca, 30);
        // 4_935_790_171 out for 10_000_000000 in, both at 6 decimals.
        assert_eq!(
            market.rate(INPUT, IN_POOL, OUT_POOL, Side::Buy).unwrap(),
            dec!(0.493579)
        );
        assert_eq!(
            market.min_rate(INPUT, IN_POOL, OUT_POOL, Side::Buy, 100).unwrap(),
            dec!(0.488643)
        );
    }

    #[test]
    fn rate_scales_by_token_decimals() {
        let market = sol_usdc();
        // Sell 1 SOL (9 decimals) into a deep pool; output in USDC (6).
        let in_pool = 1_000_000_000_000_000; // 1M SOL
        let out_pool = 20_000_000_000_000; // 20M USDC
        let input = 1_000_000_000; // 1 SOL
        let rate = market.rate(input, in_pool, out_pool, Side::Sell).unwrap();
        // Spot is 20 USDC/SOL; fee and convexity pull slightly under.
        assert!(rate > dec!(19.9) && rate < dec!(20));
    }

    #[test]
    fn price_impact_positive_and_bounded_by_max() {
        let market = btc_usdc(Venue::Orca, 30);
        let impact = market.price_impact(INPUT, IN_POOL, OUT_POOL, Side::Buy).unwrap();
        let max_impact = market
            .max_price_impact(INPUT, IN_POOL, OUT_POOL, Side::Buy, 100)
            .unwrap();
        assert_eq!(impact, dec!(0.987158));
        assert_eq!(max_impact, dec!(1.977286));
        assert!(impact > Decimal::ZERO);
        assert!(max_impact >= impact);
    }

    #[test]
    fn optimal_input_amount_scales_with_depth_and_tolerance() {
        let market = btc_usdc(Venue::Orca, 30);
        assert_eq!(market.optimal_input_amount(IN_POOL, 100), 10_000_000000);
        assert_eq!(market.optimal_input_amount(IN_POOL, 0), 0);
        assert_eq!(market.optimal_input_amount(0, 100), 0);
    }

    #[test]
    fn quote_defaults_to_optimal_size_and_inverts_buy_price() {
        let market = btc_usdc(Venue::Orca, 30);
        let reserves = ReserveSnapshot::new(IN_POOL, OUT_POOL);
        let quote = market.quote(Side::Buy, &reserves, 0, 100).unwrap();

        assert_eq!(quote.input_trade_amount, 10_000_000000);
        assert_eq!(quote.expected_output_amount, 4_886_432_269);
        assert_eq!(quote.no_slippage_output_amount, 4_985_000_000);
        assert_eq!(quote.rate, dec!(0.493579));
        // Buy quotes price as input-per-output, from the guarded rate.
        assert_eq!(quote.price, Decimal::ONE / dec!(0.488643));
        assert_eq!(quote.in_pool_amount, IN_POOL);
        assert_eq!(quote.out_pool_amount, OUT_POOL);
        assert_eq!(quote.slippage_tolerance_bps, 100);
        assert!(quote.expected_output_amount <= quote.no_slippage_output_amount);
    }

    #[test]
    fn sell_quote_carries_rate_as_price() {
        let market = btc_usdc(Venue::Orca, 30);
        let reserves = ReserveSnapshot::new(OUT_POOL, IN_POOL);
        let quote = market.quote(Side::Sell, &reserves, INPUT, 100).unwrap();
        let min_rate = market
            .min_rate(INPUT, OUT_POOL, IN_POOL, Side::Sell, 100)
            .unwrap();
        assert_eq!(quote.price, min_rate);
    }

    #[test]
    fn quote_both_sides_mirrors_reserves() {
        let market = btc_usdc(Venue::Orca, 30);
        let buy_side = ReserveSnapshot::new(IN_POOL, OUT_POOL);
        let quotes = market.quote_both_sides(&buy_side, 0, 100).unwrap();

        assert_eq!(quotes.buy.side, Side::Buy);
        assert_eq!(quotes.sell.side, Side::Sell);
        assert_eq!(quotes.buy.in_pool_amount, IN_POOL);
        assert_eq!(quotes.buy.out_pool_amount, OUT_POOL);
        assert_eq!(quotes.sell.in_pool_amount, OUT_POOL);
        assert_eq!(quotes.sell.out_pool_amount, IN_POOL);
        // Sell probe sizes off its own input reserve.
        assert_eq!(quotes.sell.input_trade_amount, 5_000_000000);
    }

    #[test]
    fn impacts_vanish_only_at_zero_tolerance() {
        let market = btc_usdc(Venue::Orca, 30);
        // Zero tolerance: the auto probe is zero-sized, both impacts zero.
        let input = market.optimal_input_amount(IN_POOL, 0);
        assert_eq!(input, 0);
        assert_eq!(
            market.price_impact(input, IN_POOL, OUT_POOL, Side::Buy).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            market
                .max_price_impact(input, IN_POOL, OUT_POOL, Side::Buy, 0)
                .unwrap(),
            Decimal::ZERO
        );

        // Any positive tolerance sizes a real probe with real impact.
        for bps in [10, 100, 500] {
            let input = market.optimal_input_amount(IN_POOL, bps);
            let impact = market.price_impact(input, IN_POOL, OUT_POOL, Side::Buy).unwrap();
            let max_impact = market
                .max_price_impact(input, IN_POOL, OUT_POOL, Side::Buy, bps)
                .unwrap();
            assert!(impact > Decimal::ZERO);
            assert!(max_impact > Decimal::ZERO);
            assert!(max_impact >= impact);
        }
    }

    proptest! {
        /// The pool's ceiling rounding never grants more than the exact
        /// curve: the retained reserves must still cover the invariant.
        #[test]
        fn rounding_never_favors_trader(
            input in 1u64..=u64::MAX / 2,
            in_pool in 1u64..=u64::MAX / 2,
            out_pool in 1u64..=u64::MAX / 2,
        ) {
            let market = btc_usdc(Venue::Orca, 30);
            let output = market.output_amount(input, in_pool, out_pool).unwrap();
            prop_assert!(output <= out_pool);
            let retained_out = (out_pool - output) as u128;
            let new_in = in_pool as u128 + input as u128;
            prop_assert!(retained_out * new_in >= in_pool as u128 * out_pool as u128);
        }

        /// Guard ordering: minimum-out <= expected <= ideal, everywhere.
        #[test]
        fn guard_ordering_universal(
            input in 0u64..=1u64 << 30,
            in_pool in 1u64 << 20..=1u64 << 50,
            out_pool in 1u64..=1u64 << 50,
            slippage_bps in 0u64..=10_000,
        ) {
            let market = btc_usdc(Venue::Raydium, 25);
            let minimum = market
                .minimum_amount_out(input, in_pool, out_pool, slippage_bps)
                .unwrap();
            let expected = market.expected_output_amount(input, in_pool, out_pool).unwrap();
            let ideal = market
                .expected_output_amount_no_slippage(input, in_pool, out_pool)
                .unwrap();
            prop_assert!(minimum <= expected);
            prop_assert!(expected <= ideal);
        }

        /// Expected output is monotonically non-decreasing in the input.
        #[test]
        fn expected_output_monotone_in_input(
            input in 0u64..=1u64 << 40,
            step in 1u64..=1u64 << 20,
            in_pool in 1u64..=1u64 << 50,
            out_pool in 1u64..=1u64 << 50,
        ) {
            let market = btc_usdc(Venue::Orca, 30);
            let smaller = market.expected_output_amount(input, in_pool, out_pool).unwrap();
            let larger = market
                .expected_output_amount(input + step, in_pool, out_pool)
                .unwrap();
            prop_assert!(larger >= smaller);
        }
    }
}
