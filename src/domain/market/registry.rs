//! Market registry for Solana mainnet pools
//!
//! An explicit, immutable registry built by the caller at startup and
//! passed into the evaluation loop. Tests construct synthetic registries
//! the same way production builds the mainnet table.

use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;

use crate::shared::errors::ConfigError;

use super::curve::{AmmMarket, FeeSchedule, Venue};
use super::token::{TokenId, TokenPair};

/// Constant-product fee schedules by venue.
const ORCA_FEE: (u64, u64) = (30, 10_000);
const RAYDIUM_FEE: (u64, u64) = (25, 10_000);

#[derive(Debug, Clone)]
pub struct MarketRegistry {
    markets: Vec<AmmMarket>,
}

impl MarketRegistry {
    pub fn new(markets: Vec<AmmMarket>) -> Result<Self, ConfigError> {
        if markets.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }
        Ok(Self { markets })
    }

    /// The hardcoded mainnet table: every monitored pool on every venue.
    pub fn mainnet() -> Result<Self, ConfigError> {
        let markets = vec![
            mainnet_market(
                Venue::Orca,
                TokenId::Btc,
                "D3Wv78j9STkfJx3vhzoCzpMZ4RqCg8oaTNGzi1rZpdJg",
                "HMFLg2GtbWSSEe92Vuf2LQdUpCacGj2m2PwvMqzwQFNi",
            )?,
            mainnet_market(
                Venue::Raydium,
                TokenId::Btc,
                "HWTaEDR6BpWjmyeUyfGZjeppLnH7s8o225Saar7FYDt5",
                "7iGcnvoLAxthsXY3AFSgkTDoqnLiuti5fyPNm2VwZ3Wz",
            )?,
            mainnet_market(
                Venue::Orca,
                TokenId::Sbr,
                "DrJTQqNZqNCf2HDLpYg9zRCMRwnhZEVQuGjeaWtX6CA7",
                "DEVLUv1uiUSukQoBdy9fDQyehi4N2Boojy8J2LQ8bK2E",
            )?,
            mainnet_market(
                Venue::Raydium,
                TokenId::Sbr,
                "8vwzjpW7KPGFLQdRuyoBBoiBCsNG6SLRGssKMNsofch2",
                "AcK6bv25Q7xofBUiXKwUgueSi3ELS6anMbmNn2NPV8FZ",
            )?,
        ];
        Self::new(markets)
    }

    pub fn markets(&self) -> &[AmmMarket] {
        &self.markets
    }

    /// Distinct pairs in registration order.
    pub fn pairs(&self) -> Vec<TokenPair> {
        let mut pairs = Vec::new();
        for market in &self.markets {
            if !pairs.contains(&market.pair()) {
                pairs.push(market.pair());
            }
        }
        pairs
    }

    /// All venues hosting the given pair.
    pub fn markets_for(&self, pair: TokenPair) -> Vec<&AmmMarket> {
        self.markets.iter().filter(|m| m.pair() == pair).collect()
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}

fn mainnet_market(
    venue: Venue,
    token_a: TokenId,
    vault_a: &str,
    vault_b: &str,
) -> Result<AmmMarket, ConfigError> {
    let pair = TokenPair::new(token_a, TokenId::Usdc);
    let (numerator, denominator) = match venue {
        Venue::Orca => ORCA_FEE,
        Venue::Raydium => RAYDIUM_FEE,
    };
    AmmMarket::new(
        &pair.label(),
        venue,
        pair,
        Pubkey::from_str(vault_a).unwrap(),
        Pubkey::from_str(vault_b).unwrap(),
        FeeSchedule::new(numerator, denominator)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_table_loads() {
        let registry = MarketRegistry::mainnet().unwrap();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.pairs().len(), 2);

        let btc_usdc = TokenPair::new(TokenId::Btc, TokenId::Usdc);
        let markets = registry.markets_for(btc_usdc);
        assert_eq!(markets.len(), 2);
        assert!(markets.iter().any(|m| m.venue() == Venue::Orca));
        assert!(markets.iter().any(|m| m.venue() == Venue::Raydium));
    }

    #[test]
    fn venue_fees_differ() {
        let registry = MarketRegistry::mainnet().unwrap();
        for market in registry.markets() {
            let expected = match market.venue() {
                Venue::Orca => 30,
                Venue::Raydium => 25,
            };
            assert_eq!(market.fees().numerator, expected);
            assert_eq!(market.fees().denominator, 10_000);
        }
    }

    #[test]
    fn empty_registry_rejected() {
        assert_eq!(MarketRegistry::new(vec![]).unwrap_err(), ConfigError::EmptyRegistry);
    }
}
