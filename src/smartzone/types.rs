//! SmartZone API Type Definitions
//!
//! Rust struct definitions for the SmartZone public-API responses consumed by
//! the exporter, plus the normalized record types the collectors work with.
//!
//! # Design Notes
//!
//! - **Optional Fields**: Most raw fields are `Option<T>` because the
//!   controller may omit them or return null depending on AP model and
//!   firmware. The normalizer decides what missing data means.
//! - **Serde Defaults**: `#[serde(default)]` is used extensively so a sparse
//!   response never fails deserialization.
//!
//! # API Endpoints Covered
//!
//! - `POST /serviceTicket` → [`LoginResponse`]
//! - `GET /system` → [`SystemSettings`]
//! - `POST /query/ap` → [`QueryList`]`<`[`RawAccessPoint`]`>`
//! - `POST /query/wlan` → [`QueryList`]`<`[`RawWlan`]`>`
//! - `GET /controller` → [`QueryList`]`<`[`RawControllerNode`]`>`
//! - `GET /controller/{id}/statistics?size=1` → `Vec<`[`NodeStatistics`]`>`

use serde::Deserialize;

/// Response to the service-ticket login call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub service_ticket: Option<String>,
}

/// Envelope shared by the query endpoints and the controller listing.
#[derive(Debug, Deserialize)]
pub struct QueryList<T> {
    #[serde(default)]
    pub list: Vec<T>,
}

/// System settings from `GET /system`, used for the AP result-set cap.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    #[serde(default)]
    pub ap_number_limit_settings_of_domain: Vec<ApNumberLimit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApNumberLimit {
    #[serde(default)]
    pub number_limit: u64,
}

/// One access point as returned by `POST /query/ap` with a wildcard
/// attribute selector. Only the fields the exporter emits are modeled.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct RawAccessPoint {
    #[serde(default, rename = "deviceName")]
    pub device_name: Option<String>,
    #[serde(default, rename = "apMac")]
    pub ap_mac: Option<String>,
    #[serde(default, rename = "apGroupName")]
    pub ap_group_name: Option<String>,
    #[serde(default, rename = "zoneName")]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tx: Option<f64>,
    #[serde(default)]
    pub rx: Option<f64>,
    #[serde(default, rename = "numClients5G")]
    pub num_clients_5g: Option<f64>,
    #[serde(default, rename = "numClients24G")]
    pub num_clients_24g: Option<f64>,
    #[serde(default, rename = "noise5G")]
    pub noise_5g: Option<f64>,
    #[serde(default, rename = "noise24G")]
    pub noise_24g: Option<f64>,
    #[serde(default, rename = "airtime5G")]
    pub airtime_5g: Option<f64>,
    #[serde(default, rename = "airtime24G")]
    pub airtime_24g: Option<f64>,
    #[serde(default, rename = "latency5G")]
    pub latency_5g: Option<f64>,
    #[serde(default, rename = "latency24G")]
    pub latency_24g: Option<f64>,
    #[serde(default, rename = "retry5G")]
    pub retry_5g: Option<f64>,
    #[serde(default, rename = "retry24G")]
    pub retry_24g: Option<f64>,
    #[serde(default, rename = "capacity5G")]
    pub capacity_5g: Option<f64>,
    #[serde(default, rename = "capacity24G")]
    pub capacity_24g: Option<f64>,
}

/// One WLAN entry from `POST /query/wlan`. Many entries may share the same
/// ssid; their client counts are summed during the fetch.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct RawWlan {
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub clients: u64,
}

/// Cluster node entry from `GET /controller`.
#[derive(Debug, Default, Deserialize)]
pub struct RawControllerNode {
    pub id: String,
    #[serde(default, rename = "hostName")]
    pub host_name: String,
    #[serde(default, rename = "uptimeInSec")]
    pub uptime_in_sec: u64,
}

/// Latest statistics sample for one cluster node.
#[derive(Debug, Default, Deserialize)]
pub struct NodeStatistics {
    #[serde(default)]
    pub cpu: Option<CpuStat>,
    #[serde(default)]
    pub disk: Option<DiskStat>,
    #[serde(default)]
    pub memory: Option<MemoryStat>,
}

#[derive(Debug, Deserialize)]
pub struct CpuStat {
    #[serde(default)]
    pub percent: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct DiskStat {
    #[serde(default)]
    pub free: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct MemoryStat {
    #[serde(default)]
    pub percent: Option<f64>,
}

/// Normalized access-point snapshot, ready for metric assembly.
///
/// Label fields are never empty after normalization; numeric fields use NaN
/// to mark values the controller did not report.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessPointRecord {
    pub device_name: String,
    pub ap_mac: String,
    pub ap_group_name: String,
    pub zone_name: String,
    /// Derived up/down state: 0 for missing/empty/"Offline" status, else 1.
    pub up: f64,
    pub tx: f64,
    pub rx: f64,
    pub num_clients_5g: f64,
    pub num_clients_24g: f64,
    pub noise_5g: f64,
    pub noise_24g: f64,
    pub airtime_5g: f64,
    pub airtime_24g: f64,
    pub latency_5g: f64,
    pub latency_24g: f64,
    pub retry_5g: f64,
    pub retry_24g: f64,
    pub capacity_5g: f64,
    pub capacity_24g: f64,
}

/// Merged view of one cluster node: identity and uptime from the node
/// listing, resource usage from its latest statistics sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerNodeRecord {
    pub hostname: String,
    pub uptime_seconds: u64,
    pub cpu_percent: f64,
    pub disk_free: f64,
    pub memory_percent: f64,
}
