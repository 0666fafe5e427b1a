//! Background dashboard refresh and regime-change alerts

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::core::http::AppState;
use crate::dashboard::DashboardReport;
use crate::models::regime::{Momentum, Oscillator};

/// Configuration for the refresh runtime
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub refresh_interval_seconds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            refresh_interval_seconds: 300,
        }
    }
}

/// A regime that differs between two consecutive reports
#[derive(Debug, Clone, PartialEq)]
pub enum RegimeChange {
    Momentum {
        symbol: String,
        from: Momentum,
        to: Momentum,
    },
    Oscillator {
        symbol: String,
        from: Oscillator,
        to: Oscillator,
    },
}

/// Compare overlay regimes of two reports.
///
/// Symbols without a snapshot in either report are skipped.
pub fn detect_regime_changes(
    previous: &DashboardReport,
    current: &DashboardReport,
) -> Vec<RegimeChange> {
    let mut changes = Vec::new();

    for row in &current.overlay {
        let Some(now) = row.reading.value() else {
            continue;
        };
        let Some(before) = previous
            .overlay_row(&row.instrument.symbol)
            .and_then(|r| r.reading.value())
        else {
            continue;
        };

        if before.momentum.label != now.momentum.label {
            changes.push(RegimeChange::Momentum {
                symbol: now.symbol.clone(),
                from: before.momentum.label,
                to: now.momentum.label,
            });
        }
        if before.oscillator.label != now.oscillator.label {
            changes.push(RegimeChange::Oscillator {
                symbol: now.symbol.clone(),
                from: before.oscillator.label,
                to: now.oscillator.label,
            });
        }
    }

    changes
}

/// Rebuilds the dashboard report on a fixed interval
pub struct DashboardRuntime {
    config: RuntimeConfig,
    state: AppState,
}

impl DashboardRuntime {
    pub fn new(config: RuntimeConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Start the refresh loop. The first refresh runs immediately.
    pub fn start(self) -> JoinHandle<()> {
        let period = Duration::from_secs(self.config.refresh_interval_seconds.max(1));
        let state = self.state;

        info!(
            interval = period.as_secs(),
            "DashboardRuntime: refreshing every {}s",
            period.as_secs()
        );

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let previous = state.latest_report.read().await.clone();
                let report = state.refresh_report().await;

                let pending = report
                    .overlay
                    .iter()
                    .filter(|row| row.reading.value().is_none())
                    .count();
                info!(
                    overlay = report.overlay.len(),
                    pending = pending,
                    ranked = report.leaderboard.entries.len(),
                    "DashboardRuntime: report refreshed"
                );

                if let Some(previous) = previous {
                    for change in detect_regime_changes(&previous, &report) {
                        match change {
                            RegimeChange::Momentum { symbol, from, to } => warn!(
                                symbol = %symbol,
                                from = %from,
                                to = %to,
                                "momentum regime changed"
                            ),
                            RegimeChange::Oscillator { symbol, from, to } => warn!(
                                symbol = %symbol,
                                from = %from,
                                to = %to,
                                "oscillator regime changed"
                            ),
                        }
                    }
                }
            }
        })
    }
}
