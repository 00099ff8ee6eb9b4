// src/app.rs
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::application::{ArbitrageMonitor, MonitorSettings};
use crate::config::Config;
use crate::domain::arbitrage::ArbitrageEvaluator;
use crate::domain::market::MarketRegistry;
use crate::infrastructure::blockchain::{RpcReserveFetcher, SimulatedExecutor};

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub rpc_url: String,
    pub amount_in: u64,
    pub slippage_bps: u64,
    pub min_edge_bps: u64,
    pub margin_bps: u64,
    pub poll_interval: Duration,
    pub once: bool,
}

impl AppCfg {
    pub fn from_config(cfg: Config, once: bool) -> Self {
        Self {
            rpc_url: cfg.rpc.url,
            amount_in: cfg.trade.amount_in.unwrap_or(0),
            slippage_bps: cfg.trade.slippage_bps,
            min_edge_bps: cfg.trade.min_edge_bps,
            margin_bps: cfg.trade.margin_bps,
            poll_interval: Duration::from_millis(cfg.monitor.poll_interval_ms),
            once,
        }
    }
}

pub async fn run(app_cfg: AppCfg) -> Result<()> {
    info!("starting cross-DEX arbitrage engine");
    info!(
        "slippage {} bps, min edge {} bps, margin {} bps",
        app_cfg.slippage_bps, app_cfg.min_edge_bps, app_cfg.margin_bps
    );

    let registry = MarketRegistry::mainnet()?;
    for market in registry.markets() {
        info!("watching {} on {}", market.name(), market.venue());
    }

    let evaluator = ArbitrageEvaluator::new(app_cfg.min_edge_bps, app_cfg.margin_bps);
    let fetcher = Arc::new(RpcReserveFetcher::new(app_cfg.rpc_url.clone()));
    let executor = Arc::new(SimulatedExecutor);

    let monitor = ArbitrageMonitor::new(
        registry,
        evaluator,
        fetcher,
        executor,
        MonitorSettings {
            poll_interval: app_cfg.poll_interval,
            slippage_bps: app_cfg.slippage_bps,
            input_trade_amount: app_cfg.amount_in,
        },
    );

    if app_cfg.once {
        let executed = monitor.cycle().await;
        info!("single scan complete: {} executable candidates", executed);
        return Ok(());
    }

    monitor.run().await
}
