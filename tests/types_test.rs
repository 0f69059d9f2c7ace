//! API type deserialization tests
//!
//! Tests that verify the SmartZone response shapes parse as expected,
//! including sparse and null-heavy payloads.

use smartzone_exporter::smartzone::types::{
    LoginResponse, NodeStatistics, QueryList, RawAccessPoint, RawControllerNode, RawWlan,
    SystemSettings,
};

#[test]
fn test_login_response_with_ticket() {
    let json = r#"{"serviceTicket": "ST-12345", "controllerVersion": "6.1.0"}"#;
    let login: LoginResponse = serde_json::from_str(json).expect("Failed to parse login");
    assert_eq!(login.service_ticket.as_deref(), Some("ST-12345"));
}

#[test]
fn test_login_response_without_ticket() {
    // A login body with no ticket must parse; the session layer rejects it
    let login: LoginResponse = serde_json::from_str("{}").expect("Failed to parse login");
    assert!(login.service_ticket.is_none());
}

#[test]
fn test_system_settings_parses_domain_limits() {
    let json = r#"{
        "apNumberLimitSettingsOfDomain": [
            {"domainName": "corp", "numberLimit": 300},
            {"domainName": "guest", "numberLimit": 200}
        ]
    }"#;
    let settings: SystemSettings = serde_json::from_str(json).expect("Failed to parse settings");
    assert_eq!(settings.ap_number_limit_settings_of_domain.len(), 2);
    assert_eq!(settings.ap_number_limit_settings_of_domain[0].number_limit, 300);
}

#[test]
fn test_system_settings_without_limits_key() {
    let settings: SystemSettings = serde_json::from_str("{}").expect("Failed to parse settings");
    assert!(settings.ap_number_limit_settings_of_domain.is_empty());
}

#[test]
fn test_query_list_defaults_to_empty() {
    let page: QueryList<RawWlan> =
        serde_json::from_str(r#"{"totalCount": 0}"#).expect("Failed to parse page");
    assert!(page.list.is_empty());
}

#[test]
fn test_access_point_parses_camel_case_band_fields() {
    let json = r#"{
        "deviceName": "lobby-ap",
        "apMac": "AA:BB:CC:DD:EE:FF",
        "apGroupName": "default",
        "zoneName": "HQ",
        "status": "Online",
        "tx": 1024,
        "rx": 2048,
        "numClients5G": 7,
        "numClients24G": 3,
        "noise5G": -92,
        "noise24G": -88,
        "airtime5G": 11,
        "airtime24G": 24,
        "latency5G": 2,
        "latency24G": 5,
        "retry5G": 100,
        "retry24G": 220,
        "capacity5G": 95,
        "capacity24G": 80
    }"#;
    let ap: RawAccessPoint = serde_json::from_str(json).expect("Failed to parse AP");
    assert_eq!(ap.device_name.as_deref(), Some("lobby-ap"));
    assert_eq!(ap.num_clients_5g, Some(7.0));
    assert_eq!(ap.num_clients_24g, Some(3.0));
    assert_eq!(ap.noise_5g, Some(-92.0));
    assert_eq!(ap.capacity_24g, Some(80.0));
}

#[test]
fn test_access_point_with_nulls_and_missing_fields() {
    // Controllers null out fields for APs that have never reported
    let json = r#"{"deviceName": null, "apMac": null, "status": null, "tx": null}"#;
    let ap: RawAccessPoint = serde_json::from_str(json).expect("Failed to parse AP");
    assert!(ap.device_name.is_none());
    assert!(ap.ap_mac.is_none());
    assert!(ap.status.is_none());
    assert!(ap.tx.is_none());
    assert!(ap.rx.is_none());
}

#[test]
fn test_controller_node_parses_listing_fields() {
    let json = r#"{"id": "node-uuid-1", "hostName": "vsz-node-1", "uptimeInSec": 86400}"#;
    let node: RawControllerNode = serde_json::from_str(json).expect("Failed to parse node");
    assert_eq!(node.id, "node-uuid-1");
    assert_eq!(node.host_name, "vsz-node-1");
    assert_eq!(node.uptime_in_sec, 86400);
}

#[test]
fn test_node_statistics_nested_sample() {
    let json = r#"[{
        "cpu": {"percent": 12.5},
        "disk": {"free": 1000000000, "total": 2000000000},
        "memory": {"percent": 40.0}
    }]"#;
    let samples: Vec<NodeStatistics> = serde_json::from_str(json).expect("Failed to parse stats");
    assert_eq!(samples.len(), 1);
    let stats = &samples[0];
    assert_eq!(stats.cpu.as_ref().and_then(|c| c.percent), Some(12.5));
    assert_eq!(stats.disk.as_ref().and_then(|d| d.free), Some(1e9));
    assert_eq!(stats.memory.as_ref().and_then(|m| m.percent), Some(40.0));
}

#[test]
fn test_node_statistics_with_missing_sections() {
    let samples: Vec<NodeStatistics> =
        serde_json::from_str(r#"[{}]"#).expect("Failed to parse stats");
    assert!(samples[0].cpu.is_none());
    assert!(samples[0].disk.is_none());
    assert!(samples[0].memory.is_none());
}
