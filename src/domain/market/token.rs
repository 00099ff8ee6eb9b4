//! Token identities and trading pairs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Tokens known to the bot. Each carries its mainnet mint and the
/// display-decimal exponent used when scaling base-unit amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenId {
    Btc,
    Eth,
    Sbr,
    Sol,
    Usdc,
}

impl TokenId {
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenId::Btc => "BTC",
            TokenId::Eth => "ETH",
            TokenId::Sbr => "SBR",
            TokenId::Sol => "SOL",
            TokenId::Usdc => "USDC",
        }
    }

    /// Display decimals of the mint.
    pub fn decimals(&self) -> u8 {
        match self {
            TokenId::Btc => 6,
            TokenId::Eth => 6,
            TokenId::Sbr => 6,
            TokenId::Sol => 9,
            TokenId::Usdc => 6,
        }
    }

    /// Mainnet mint address.
    pub fn mint(&self) -> Pubkey {
        let mint = match self {
            TokenId::Btc => "9n4nfM5sD1Z3z6rh8cgzXhkH4cR5mAeXUemXpYNBvRCM",
            TokenId::Eth => "2FPyTwcZLUg1MDrwsyoP4D6s1tM7hAkHYRjkNb5w6Pxk",
            TokenId::Sbr => "Saber2gLauYim4Mvftnrasomsv6NvAuncvMEZwcLpD1",
            TokenId::Sol => "So11111111111111111111111111111111111111112",
            TokenId::Usdc => "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
        };
        Pubkey::from_str(mint).unwrap()
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Ordered token pair. Token A is the primary (traded) asset, token B the
/// quote asset; "buy" spends B for A, "sell" spends A for B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    pub token_a: TokenId,
    pub token_b: TokenId,
}

impl TokenPair {
    pub fn new(token_a: TokenId, token_b: TokenId) -> Self {
        Self { token_a, token_b }
    }

    /// Canonical display form, e.g. "BTC/USDC".
    pub fn label(&self) -> String {
        format!("{}/{}", self.token_a.symbol(), self.token_b.symbol())
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token_a.symbol(), self.token_b.symbol())
    }
}
