use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Clone, Deserialize)]
pub struct RpcCfg {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TradeCfg {
    /// Trade probe in base units of the quote token. Unset lets every
    /// pool size its own probe from depth and slippage tolerance.
    pub amount_in: Option<u64>,
    /// Slippage tolerance, basis points out of 10_000.
    pub slippage_bps: u64,
    /// Required round-trip edge over break-even, basis points.
    pub min_edge_bps: u64,
    /// Safety margin applied to converting rates during sizing, basis points.
    pub margin_bps: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitorCfg {
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub rpc: RpcCfg,
    pub trade: TradeCfg,
    pub monitor: MonitorCfg,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())?;
        let cfg: Self = toml::from_str(&s).context("parse Config.toml")?;
        Ok(cfg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc: RpcCfg {
                url: "https://api.mainnet-beta.solana.com".to_string(),
            },
            trade: TradeCfg {
                amount_in: None,
                slippage_bps: 10,
                min_edge_bps: 10,
                margin_bps: 5,
            },
            monitor: MonitorCfg {
                poll_interval_ms: 1000,
            },
        }
    }
}
