//! Polling evaluation loop
//!
//! Each cycle fetches fresh reserve snapshots for every market of a pair
//! concurrently, quotes both directions, and compares every buy quote
//! against every sell quote from the other venues. Failing candidates are
//! logged and skipped; nothing aborts the loop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::arbitrage::{ArbitrageCandidate, ArbitrageEvaluator};
use crate::domain::market::{AmmMarket, MarketRegistry, PairQuotes, QuoteProvider, TokenPair};
use crate::infrastructure::blockchain::{ReserveFetcher, TradeExecutor};

#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub poll_interval: Duration,
    pub slippage_bps: u64,
    /// Fixed trade probe in base units of the quote token; zero lets each
    /// pool size its own probe from depth and tolerance.
    pub input_trade_amount: u64,
}

pub struct ArbitrageMonitor {
    registry: MarketRegistry,
    evaluator: ArbitrageEvaluator,
    fetcher: Arc<dyn ReserveFetcher>,
    executor: Arc<dyn TradeExecutor>,
    settings: MonitorSettings,
}

impl ArbitrageMonitor {
    pub fn new(
        registry: MarketRegistry,
        evaluator: ArbitrageEvaluator,
        fetcher: Arc<dyn ReserveFetcher>,
        executor: Arc<dyn TradeExecutor>,
        settings: MonitorSettings,
    ) -> Self {
        Self {
            registry,
            evaluator,
            fetcher,
            executor,
            settings,
        }
    }

    /// Poll forever at the configured interval.
    pub async fn run(&self) -> Result<()> {
        let mut interval = tokio::time::interval(self.settings.poll_interval);
        loop {
            interval.tick().await;
            self.cycle().await;
        }
    }

    /// One evaluation cycle: scan every pair and hand the profitable
    /// candidates to the executor. Returns how many were executed.
    pub async fn cycle(&self) -> usize {
        let started = Instant::now();
        let candidates = self.scan_once().await;
        let mut executed = 0;

        for candidate in &candidates {
            match self.executor.execute(candidate).await {
                Ok(()) => executed += 1,
                Err(e) => warn!("execution failed for {}: {}", candidate.plan.pair, e),
            }
        }

        debug!(
            "cycle finished in {:?}: {} candidates, {} executed",
            started.elapsed(),
            candidates.len(),
            executed
        );
        executed
    }

    /// Scan every registered pair once without executing.
    pub async fn scan_once(&self) -> Vec<ArbitrageCandidate> {
        let mut candidates = Vec::new();
        for pair in self.registry.pairs() {
            candidates.extend(self.scan_pair(pair).await);
        }
        candidates
    }

    async fn scan_pair(&self, pair: TokenPair) -> Vec<ArbitrageCandidate> {
        let markets = self.registry.markets_for(pair);
        let quotes: Vec<PairQuotes> = join_all(markets.iter().map(|m| self.quote_market(m)))
            .await
            .into_iter()
            .flatten()
            .collect();

        let mut found = Vec::new();
        for buy_quotes in &quotes {
            for sell_quotes in &quotes {
                let buy = &buy_quotes.buy;
                let sell = &sell_quotes.sell;
                // Round-tripping a single pool is pure fee loss.
                if buy.venue == sell.venue && buy.market == sell.market {
                    continue;
                }

                if let Some(candidate) = self.evaluator.evaluate(buy, sell) {
                    info!(
                        "edge on {}: buy {} ({}) -> sell {} ({}), ratio {}",
                        pair,
                        buy.venue,
                        buy.rate,
                        sell.venue,
                        sell.rate,
                        candidate.plan.round_trip_ratio,
                    );
                    found.push(candidate);
                } else {
                    debug!(
                        "no edge on {}: buy {} ({}) -> sell {} ({})",
                        pair, buy.venue, buy.rate, sell.venue, sell.rate,
                    );
                }
            }
        }
        found
    }

    async fn quote_market(&self, market: &AmmMarket) -> Option<PairQuotes> {
        let reserves = match self.fetcher.fetch_buy_side(market).await {
            Ok(reserves) => reserves,
            Err(e) => {
                warn!(
                    "reserve fetch failed for {} on {}: {}",
                    market.name(),
                    market.venue(),
                    e
                );
                return None;
            }
        };

        match market.quote_both_sides(
            &reserves,
            self.settings.input_trade_amount,
            self.settings.slippage_bps,
        ) {
            Ok(quotes) => Some(quotes),
            Err(e) => {
                warn!(
                    "quote failed for {} on {}: {}",
                    market.name(),
                    market.venue(),
                    e
                );
                None
            }
        }
    }
}
