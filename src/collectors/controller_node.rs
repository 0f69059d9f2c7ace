//! Controller Node Metrics Collector
//!
//! Emits cluster-node health for one controller.
//!
//! # Metrics Produced
//! - `node_uptime_seconds` - Node uptime (counter)
//! - `node_cpu_percent` - CPU usage percentage
//! - `node_disk` - Free disk space
//! - `node_memory_percent` - Memory usage percentage
//!
//! All labeled with: node

use super::{CollectionResult, CollectionStatus};
use crate::metrics::ScrapeMetrics;
use crate::smartzone::inventory;
use crate::smartzone::Session;
use tracing::{info, warn};

pub async fn collect_controller_node_metrics(
    session: &Session,
    metrics: &mut ScrapeMetrics,
) -> CollectionResult {
    match inventory::fetch_controller_nodes(session).await {
        Ok(nodes) => {
            metrics.record_controller_nodes(&nodes)?;
            info!(
                controller = %session.hostname(),
                nodes = nodes.len(),
                "updated controller node metrics"
            );
            Ok(CollectionStatus::Success)
        }
        Err(e) => {
            warn!(controller = %session.hostname(), "failed to query controller nodes: {}", e);
            Ok(CollectionStatus::Failed)
        }
    }
}
