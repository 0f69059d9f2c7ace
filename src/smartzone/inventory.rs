//! Inventory Fetches
//!
//! The three independent read operations performed against one session:
//! access points, per-SSID client aggregates, and cluster node health.
//! Each is independently fallible so that, for example, a WLAN-query outage
//! does not suppress AP or node metrics.
//!
//! A non-success HTTP status maps to [`ExporterError::Fetch`]; the caller
//! omits the corresponding metric families and moves on.

use crate::error::{ExporterError, Result};
use crate::smartzone::session::Session;
use crate::smartzone::types::{
    ControllerNodeRecord, NodeStatistics, QueryList, RawAccessPoint, RawControllerNode, RawWlan,
    SystemSettings,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Fallback result-set cap when the system-limits endpoint reports nothing.
pub const DEFAULT_AP_LIMIT: u64 = 1000;

/// Result-set cap for one AP query: the sum of per-domain AP number limits,
/// or [`DEFAULT_AP_LIMIT`] when that sum is zero.
pub fn ap_query_limit(settings: &SystemSettings) -> u64 {
    let sum: u64 = settings
        .ap_number_limit_settings_of_domain
        .iter()
        .map(|entry| entry.number_limit)
        .sum();
    if sum > 0 {
        sum
    } else {
        DEFAULT_AP_LIMIT
    }
}

/// Fold WLAN entries into per-SSID client totals. Entries sharing an ssid
/// name are summed, never overwritten.
pub fn aggregate_ssids<I>(entries: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = RawWlan>,
{
    let mut totals = BTreeMap::new();
    for wlan in entries {
        *totals.entry(wlan.ssid).or_insert(0) += wlan.clients;
    }
    totals
}

/// Fetch all access points for one controller.
///
/// First sizes the result-set cap from the system-limits endpoint, then
/// issues one wildcard query with that cap as the page limit.
pub async fn fetch_access_points(session: &Session) -> Result<Vec<RawAccessPoint>> {
    let limit = match session.client().get("/system").await {
        Ok(response) if response.status().is_success() => {
            match response.json::<SystemSettings>().await {
                Ok(settings) => ap_query_limit(&settings),
                Err(e) => {
                    debug!("unusable system-limits response, using default cap: {}", e);
                    DEFAULT_AP_LIMIT
                }
            }
        }
        _ => {
            debug!("system-limits endpoint unavailable, using default cap");
            DEFAULT_AP_LIMIT
        }
    };

    let body = serde_json::json!({ "attributes": ["*"], "limit": limit });
    let response = session.client().post("/query/ap", &body).await?;
    if !response.status().is_success() {
        return Err(ExporterError::Fetch {
            endpoint: "/query/ap".to_string(),
            status: response.status().as_u16(),
        });
    }

    let page: QueryList<RawAccessPoint> = response.json().await?;
    Ok(page.list)
}

/// Fetch per-SSID client totals across all WLAN entries.
pub async fn fetch_ssid_aggregates(session: &Session) -> Result<BTreeMap<String, u64>> {
    let body = serde_json::json!({ "attributes": ["*"], "limit": 100 });
    let response = session.client().post("/query/wlan", &body).await?;
    if !response.status().is_success() {
        return Err(ExporterError::Fetch {
            endpoint: "/query/wlan".to_string(),
            status: response.status().as_u16(),
        });
    }

    let page: QueryList<RawWlan> = response.json().await?;
    Ok(aggregate_ssids(page.list))
}

/// Fetch cluster nodes and merge each with its latest statistics sample.
///
/// A failed or empty statistics call drops only that node, consistent with
/// the partial-failure handling everywhere else.
pub async fn fetch_controller_nodes(session: &Session) -> Result<Vec<ControllerNodeRecord>> {
    let response = session.client().get("/controller").await?;
    if !response.status().is_success() {
        return Err(ExporterError::Fetch {
            endpoint: "/controller".to_string(),
            status: response.status().as_u16(),
        });
    }

    let page: QueryList<RawControllerNode> = response.json().await?;
    let mut nodes = Vec::with_capacity(page.list.len());

    for node in page.list {
        let path = format!("/controller/{}/statistics?size=1", node.id);
        let sample = match session.client().get(&path).await {
            Ok(response) if response.status().is_success() => {
                match response.json::<Vec<NodeStatistics>>().await {
                    Ok(samples) if !samples.is_empty() => samples.into_iter().next(),
                    Ok(_) => None,
                    Err(e) => {
                        warn!(node = %node.host_name, "unusable statistics sample: {}", e);
                        None
                    }
                }
            }
            Ok(response) => {
                warn!(
                    node = %node.host_name,
                    status = %response.status(),
                    "statistics call failed"
                );
                None
            }
            Err(e) => {
                warn!(node = %node.host_name, "statistics call failed: {}", e);
                None
            }
        };

        let Some(stats) = sample else {
            warn!(node = %node.host_name, "dropping node without statistics");
            continue;
        };

        nodes.push(ControllerNodeRecord {
            hostname: node.host_name,
            uptime_seconds: node.uptime_in_sec,
            cpu_percent: stats.cpu.and_then(|c| c.percent).unwrap_or(f64::NAN),
            disk_free: stats.disk.and_then(|d| d.free).unwrap_or(f64::NAN),
            memory_percent: stats.memory.and_then(|m| m.percent).unwrap_or(f64::NAN),
        });
    }

    Ok(nodes)
}
