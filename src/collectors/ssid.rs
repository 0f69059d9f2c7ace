//! SSID Metrics Collector
//!
//! Emits `client_count` (label: ssid) from the per-SSID client totals
//! aggregated during the WLAN fetch.

use super::{CollectionResult, CollectionStatus};
use crate::metrics::ScrapeMetrics;
use crate::smartzone::inventory;
use crate::smartzone::Session;
use tracing::{info, warn};

pub async fn collect_ssid_metrics(
    session: &Session,
    metrics: &mut ScrapeMetrics,
) -> CollectionResult {
    match inventory::fetch_ssid_aggregates(session).await {
        Ok(totals) => {
            metrics.record_ssid_clients(&totals)?;
            info!(
                controller = %session.hostname(),
                ssids = totals.len(),
                "updated SSID client metrics"
            );
            Ok(CollectionStatus::Success)
        }
        Err(e) => {
            warn!(controller = %session.hostname(), "failed to query WLANs: {}", e);
            Ok(CollectionStatus::Failed)
        }
    }
}
