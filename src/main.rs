use anyhow::Result;
use clap::Parser;

use poolarb::app::{self, AppCfg};
use poolarb::config::Config;

#[derive(Parser, Debug)]
#[command(version, about = "Cross-DEX AMM arbitrage bot for Solana constant-product pools")]
struct Args {
    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    /// RPC endpoint URL
    #[arg(long)]
    rpc_url: Option<String>,

    /// Trade probe in base units of the quote token (default: sized per pool)
    #[arg(long)]
    amount_in: Option<u64>,

    /// Slippage tolerance in basis points
    #[arg(long)]
    slippage_bps: Option<u64>,

    /// Required round-trip edge in basis points
    #[arg(long)]
    min_edge_bps: Option<u64>,

    /// Sizing safety margin in basis points
    #[arg(long)]
    margin_bps: Option<u64>,

    /// Poll interval in milliseconds
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// Run a single evaluation cycle and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut cfg = if let Some(config_path) = &args.config {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    // CLI args override the config file.
    if let Some(rpc_url) = args.rpc_url {
        cfg.rpc.url = rpc_url;
    }
    if args.amount_in.is_some() {
        cfg.trade.amount_in = args.amount_in;
    }
    if let Some(slippage_bps) = args.slippage_bps {
        cfg.trade.slippage_bps = slippage_bps;
    }
    if let Some(min_edge_bps) = args.min_edge_bps {
        cfg.trade.min_edge_bps = min_edge_bps;
    }
    if let Some(margin_bps) = args.margin_bps {
        cfg.trade.margin_bps = margin_bps;
    }
    if let Some(poll_interval_ms) = args.poll_interval_ms {
        cfg.monitor.poll_interval_ms = poll_interval_ms;
    }

    app::run(AppCfg::from_config(cfg, args.once)).await
}
