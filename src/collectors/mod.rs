//! Metrics Collectors
//!
//! Per-category collectors and the orchestration of one collection cycle.
//! Each collector runs one inventory fetch against a session, normalizes the
//! records, and hands them to the scrape's [`ScrapeMetrics`].
//!
//! # Error Handling
//!
//! Individual fetch failures are non-fatal: they log a warning and return
//! `CollectionStatus::Failed`, which leaves that fetch's metric families
//! unregistered for the cycle. A failed login skips the whole controller.
//! Nothing that happens at runtime aborts the cycle or the process.

use crate::config::{ClientConfig, Config, ControllerConfig};
use crate::error::Result;
use crate::metrics::ScrapeMetrics;
use crate::smartzone::Session;
use tracing::{info, warn};

/// Status of one collector's run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    /// Records were fetched and assembled into metric families
    Success,
    /// The fetch failed; its families are omitted for this cycle (already logged)
    Failed,
}

/// Result type for collector functions. `Err` is reserved for internal
/// faults (metric registration); fetch failures are `Ok(Failed)`.
pub type CollectionResult = Result<CollectionStatus>;

pub mod access_point;
pub mod controller_node;
pub mod ssid;

pub use access_point::collect_access_point_metrics;
pub use controller_node::collect_controller_node_metrics;
pub use ssid::collect_ssid_metrics;

/// Run one full collection cycle across every configured controller and
/// return the rendered exposition text.
///
/// Controllers are processed independently: a login failure skips that
/// controller and moves on to the next.
pub async fn collect_cycle(config: &Config) -> Result<String> {
    let mut metrics = ScrapeMetrics::new();

    for controller in &config.controllers {
        collect_controller(&config.client, controller, &mut metrics).await?;
    }

    metrics.render()
}

/// Collect all three inventory categories from one controller.
///
/// The session is closed regardless of fetch outcomes.
async fn collect_controller(
    client_cfg: &ClientConfig,
    controller: &ControllerConfig,
    metrics: &mut ScrapeMetrics,
) -> Result<()> {
    let session = match Session::open(client_cfg, controller).await {
        Ok(session) => session,
        Err(e) => {
            warn!(controller = %controller.hostname, "skipping controller, login failed: {}", e);
            return Ok(());
        }
    };

    info!(controller = %controller.hostname, "collecting inventory");
    let result = run_collectors(&session, metrics).await;
    session.close().await;
    result
}

async fn run_collectors(session: &Session, metrics: &mut ScrapeMetrics) -> Result<()> {
    collect_access_point_metrics(session, metrics).await?;
    collect_ssid_metrics(session, metrics).await?;
    collect_controller_node_metrics(session, metrics).await?;
    Ok(())
}
