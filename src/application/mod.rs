//! Application layer - the evaluation loop

pub mod monitor;

pub use monitor::{ArbitrageMonitor, MonitorSettings};
