//! Record Normalization
//!
//! Pure functions that turn raw API records into well-defined snapshots.
//! Missing label fields become sentinel strings so emitted labels are never
//! empty; missing numeric fields become NaN rather than zero, because zero
//! would read as a real measurement.

use crate::smartzone::types::{AccessPointRecord, RawAccessPoint};

/// Sentinel device name for APs that report none.
pub const UNKNOWN_DEVICE: &str = "unknown";

/// Sentinel MAC for APs that report none.
pub const ZERO_MAC: &str = "00:00:00:00:00:00";

/// Derived up/down state: 0 when the raw status is absent, empty, or
/// exactly "Offline"; 1 for any other reported status.
pub fn status_value(status: Option<&str>) -> f64 {
    match status {
        None | Some("") | Some("Offline") => 0.0,
        Some(_) => 1.0,
    }
}

fn non_empty_or(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => sentinel.to_string(),
    }
}

fn numeric(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NAN)
}

/// Normalize one raw access point into an emission-ready record.
pub fn normalize_access_point(raw: RawAccessPoint) -> AccessPointRecord {
    AccessPointRecord {
        up: status_value(raw.status.as_deref()),
        device_name: non_empty_or(raw.device_name, UNKNOWN_DEVICE),
        ap_mac: non_empty_or(raw.ap_mac, ZERO_MAC),
        ap_group_name: raw.ap_group_name.unwrap_or_default(),
        zone_name: raw.zone_name.unwrap_or_default(),
        tx: numeric(raw.tx),
        rx: numeric(raw.rx),
        num_clients_5g: numeric(raw.num_clients_5g),
        num_clients_24g: numeric(raw.num_clients_24g),
        noise_5g: numeric(raw.noise_5g),
        noise_24g: numeric(raw.noise_24g),
        airtime_5g: numeric(raw.airtime_5g),
        airtime_24g: numeric(raw.airtime_24g),
        latency_5g: numeric(raw.latency_5g),
        latency_24g: numeric(raw.latency_24g),
        retry_5g: numeric(raw.retry_5g),
        retry_24g: numeric(raw.retry_24g),
        capacity_5g: numeric(raw.capacity_5g),
        capacity_24g: numeric(raw.capacity_24g),
    }
}
