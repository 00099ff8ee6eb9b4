//! Market domain - pool configuration and constant-product pricing

pub mod curve;
pub mod quote;
pub mod registry;
pub mod token;

pub use curve::{AmmMarket, FeeSchedule, Venue};
pub use quote::{PairQuotes, QuoteProvider, ReserveSnapshot, Side, SwapQuote};
pub use registry::MarketRegistry;
pub use token::{TokenId, TokenPair};
