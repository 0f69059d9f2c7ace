//! Property-based tests using proptest
//!
//! Tests that verify properties hold for arbitrary inputs.

use proptest::prelude::*;
use smartzone_exporter::metrics::ScrapeMetrics;
use smartzone_exporter::normalize::normalize_access_point;
use smartzone_exporter::smartzone::inventory::aggregate_ssids;
use smartzone_exporter::smartzone::types::{RawAccessPoint, RawWlan};

proptest! {
    #[test]
    fn test_normalized_labels_are_never_empty(
        device_name in proptest::option::of("\\PC*"),
        ap_mac in proptest::option::of("\\PC*"),
    ) {
        // Given: An AP with an arbitrary (possibly missing or empty) identity
        let raw = RawAccessPoint {
            device_name,
            ap_mac,
            ..Default::default()
        };

        // When: Normalizing
        let record = normalize_access_point(raw);

        // Then: Emitted label values are never empty strings
        prop_assert!(!record.device_name.is_empty());
        prop_assert!(!record.ap_mac.is_empty());
    }

    #[test]
    fn test_ssid_aggregation_preserves_total_clients(
        entries in proptest::collection::vec(
            ("[a-z]{1,4}", 0u64..10_000).prop_map(|(ssid, clients)| RawWlan { ssid, clients }),
            0..50,
        )
    ) {
        // Given: An arbitrary WLAN listing
        let expected: u64 = entries.iter().map(|e| e.clients).sum();

        // When: Aggregating by ssid
        let totals = aggregate_ssids(entries);

        // Then: No clients are lost or double-counted
        let summed: u64 = totals.values().sum();
        prop_assert_eq!(summed, expected);
    }

    #[test]
    fn test_ssid_aggregation_is_order_independent(
        mut entries in proptest::collection::vec(
            ("[a-z]{1,3}", 0u64..1_000).prop_map(|(ssid, clients)| RawWlan { ssid, clients }),
            0..30,
        )
    ) {
        // Given: The same listing in two different orders
        let forward = aggregate_ssids(entries.clone());
        entries.reverse();
        let backward = aggregate_ssids(entries);

        // Then: The aggregates agree
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn test_any_status_string_derives_a_boolean_state(status in proptest::option::of("\\PC*")) {
        // Given: An arbitrary raw status
        let raw = RawAccessPoint { status, ..Default::default() };

        // When: Normalizing
        let record = normalize_access_point(raw);

        // Then: The derived state is exactly 0 or 1
        prop_assert!(record.up == 0.0 || record.up == 1.0);
    }

    #[test]
    fn test_any_ssid_name_renders_without_panic(ssid in "\\PC*", clients in 0u64..100_000) {
        // Given: A scrape with an arbitrary ssid label value
        let mut metrics = ScrapeMetrics::new();
        let mut totals = std::collections::BTreeMap::new();
        totals.insert(ssid, clients);

        // When: Recording and rendering
        metrics.record_ssid_clients(&totals).expect("Failed to record");
        let result = metrics.render();

        // Then: Rendering should not panic
        prop_assert!(result.is_ok());
    }
}
