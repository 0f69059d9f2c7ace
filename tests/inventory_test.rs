//! Inventory aggregation tests
//!
//! Tests for the pure pieces of the fetch layer: the AP result-set cap and
//! per-SSID client aggregation.

use smartzone_exporter::smartzone::inventory::{aggregate_ssids, ap_query_limit, DEFAULT_AP_LIMIT};
use smartzone_exporter::smartzone::types::{RawWlan, SystemSettings};

fn settings_from(json: &str) -> SystemSettings {
    serde_json::from_str(json).expect("Failed to parse settings")
}

#[test]
fn test_ap_limit_sums_domain_entries() {
    // Given: Two domains with AP number limits
    let settings = settings_from(
        r#"{"apNumberLimitSettingsOfDomain": [{"numberLimit": 300}, {"numberLimit": 200}]}"#,
    );

    // Then: The query cap is their sum
    assert_eq!(ap_query_limit(&settings), 500);
}

#[test]
fn test_ap_limit_defaults_when_sum_is_zero() {
    // Given: Domains that all report a zero limit
    let settings = settings_from(
        r#"{"apNumberLimitSettingsOfDomain": [{"numberLimit": 0}, {"numberLimit": 0}]}"#,
    );

    // Then: The cap falls back to the default
    assert_eq!(ap_query_limit(&settings), DEFAULT_AP_LIMIT);
    assert_eq!(DEFAULT_AP_LIMIT, 1000);
}

#[test]
fn test_ap_limit_defaults_when_endpoint_yields_nothing() {
    let settings = settings_from("{}");
    assert_eq!(ap_query_limit(&settings), DEFAULT_AP_LIMIT);
}

#[test]
fn test_ssid_collisions_are_summed_not_overwritten() {
    // Given: Three WLAN entries, two sharing an ssid
    let entries = vec![
        RawWlan { ssid: "A".to_string(), clients: 3 },
        RawWlan { ssid: "A".to_string(), clients: 2 },
        RawWlan { ssid: "B".to_string(), clients: 1 },
    ];

    // When: Aggregating
    let totals = aggregate_ssids(entries);

    // Then: Counts are summed by key
    assert_eq!(totals.get("A"), Some(&5));
    assert_eq!(totals.get("B"), Some(&1));
    assert_eq!(totals.len(), 2);
}

#[test]
fn test_ssid_aggregation_of_empty_listing() {
    let totals = aggregate_ssids(Vec::new());
    assert!(totals.is_empty());
}
