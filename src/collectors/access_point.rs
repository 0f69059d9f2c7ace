//! Access Point Metrics Collector
//!
//! Fetches all AP records for one controller, normalizes them, and emits
//! the `ap_*` gauge families.
//!
//! # Metrics Produced
//! - `ap_tx` / `ap_rx` - Transmit and receive throughput
//! - `ap_num_clients_5G` / `ap_num_clients_2G` - Associated clients per band
//! - `ap_noise_5G` / `ap_noise_2G` - Noise floor per band
//! - `ap_airtime_5G` / `ap_airtime_2G` - Airtime utilization per band
//! - `ap_latency_5G` / `ap_latency_2G` - Latency per band
//! - `ap_retries_5G` / `ap_retries_2G` - Retries per band
//! - `ap_capacity_5G` / `ap_capacity_2G` - Capacity per band
//! - `ap_status` - Derived up/down state
//!
//! All labeled with: ap, apMac, apGroup, apZone

use super::{CollectionResult, CollectionStatus};
use crate::metrics::ScrapeMetrics;
use crate::normalize::normalize_access_point;
use crate::smartzone::inventory;
use crate::smartzone::types::AccessPointRecord;
use crate::smartzone::Session;
use tracing::{info, warn};

pub async fn collect_access_point_metrics(
    session: &Session,
    metrics: &mut ScrapeMetrics,
) -> CollectionResult {
    match inventory::fetch_access_points(session).await {
        Ok(raw) => {
            let records: Vec<AccessPointRecord> =
                raw.into_iter().map(normalize_access_point).collect();
            metrics.record_access_points(&records)?;
            info!(
                controller = %session.hostname(),
                count = records.len(),
                "updated access point metrics"
            );
            Ok(CollectionStatus::Success)
        }
        Err(e) => {
            warn!(controller = %session.hostname(), "failed to query access points: {}", e);
            Ok(CollectionStatus::Failed)
        }
    }
}
