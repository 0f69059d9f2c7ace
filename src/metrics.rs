//! Metric Family Assembly
//!
//! Maps normalized records into named, labeled Prometheus metric families.
//!
//! Unlike a long-lived registry, a [`ScrapeMetrics`] lives for exactly one
//! scrape: every collection cycle builds a fresh registry, fills it, renders
//! it, and drops it. That keeps the collector stateless and gives operators
//! a clear signal: a family group is registered only once its source fetch
//! has succeeded at least once in the cycle, so families from a failed fetch
//! are omitted entirely rather than emitted empty.
//!
//! # Family Schema
//!
//! - AP families (labels ap, apMac, apGroup, apZone): `ap_tx`, `ap_rx`,
//!   `ap_num_clients_5G`/`_2G`, `ap_noise_5G`/`_2G`, `ap_airtime_5G`/`_2G`,
//!   `ap_latency_5G`/`_2G`, `ap_retries_5G`/`_2G`, `ap_capacity_5G`/`_2G`,
//!   `ap_status` - all gauges.
//! - Node families (label node): `node_uptime_seconds` (counter),
//!   `node_cpu_percent`, `node_disk`, `node_memory_percent` (gauges).
//! - SSID family (label ssid): `client_count` (gauge).

use crate::error::Result;
use crate::smartzone::types::{AccessPointRecord, ControllerNodeRecord};
use prometheus::{CounterVec, Encoder, GaugeVec, Opts, Registry, TextEncoder};
use std::collections::BTreeMap;

const AP_LABELS: &[&str] = &["ap", "apMac", "apGroup", "apZone"];
const NODE_LABELS: &[&str] = &["node"];
const SSID_LABELS: &[&str] = &["ssid"];

/// All per-access-point gauge families, registered as a group.
struct ApFamilies {
    tx: GaugeVec,
    rx: GaugeVec,
    num_clients_5g: GaugeVec,
    num_clients_2g: GaugeVec,
    noise_5g: GaugeVec,
    noise_2g: GaugeVec,
    airtime_5g: GaugeVec,
    airtime_2g: GaugeVec,
    latency_5g: GaugeVec,
    latency_2g: GaugeVec,
    retries_5g: GaugeVec,
    retries_2g: GaugeVec,
    capacity_5g: GaugeVec,
    capacity_2g: GaugeVec,
    status: GaugeVec,
}

/// All per-node families, registered as a group.
struct NodeFamilies {
    uptime_seconds: CounterVec,
    cpu_percent: GaugeVec,
    disk: GaugeVec,
    memory_percent: GaugeVec,
}

fn ap_gauge(registry: &Registry, name: &str, help: &str) -> Result<GaugeVec> {
    let gauge = GaugeVec::new(Opts::new(name, help), AP_LABELS)?;
    registry.register(Box::new(gauge.clone()))?;
    Ok(gauge)
}

impl ApFamilies {
    fn register(registry: &Registry) -> Result<Self> {
        Ok(Self {
            tx: ap_gauge(registry, "ap_tx", "AP transmitted bytes")?,
            rx: ap_gauge(registry, "ap_rx", "AP received bytes")?,
            num_clients_5g: ap_gauge(registry, "ap_num_clients_5G", "AP client count on 5GHz")?,
            num_clients_2g: ap_gauge(registry, "ap_num_clients_2G", "AP client count on 2.4GHz")?,
            noise_5g: ap_gauge(registry, "ap_noise_5G", "AP noise floor on 5GHz")?,
            noise_2g: ap_gauge(registry, "ap_noise_2G", "AP noise floor on 2.4GHz")?,
            airtime_5g: ap_gauge(registry, "ap_airtime_5G", "AP airtime utilization on 5GHz")?,
            airtime_2g: ap_gauge(registry, "ap_airtime_2G", "AP airtime utilization on 2.4GHz")?,
            latency_5g: ap_gauge(registry, "ap_latency_5G", "AP latency on 5GHz")?,
            latency_2g: ap_gauge(registry, "ap_latency_2G", "AP latency on 2.4GHz")?,
            retries_5g: ap_gauge(registry, "ap_retries_5G", "AP retry count on 5GHz")?,
            retries_2g: ap_gauge(registry, "ap_retries_2G", "AP retry count on 2.4GHz")?,
            capacity_5g: ap_gauge(registry, "ap_capacity_5G", "AP capacity on 5GHz")?,
            capacity_2g: ap_gauge(registry, "ap_capacity_2G", "AP capacity on 2.4GHz")?,
            status: ap_gauge(registry, "ap_status", "AP status (1=up, 0=down)")?,
        })
    }
}

impl NodeFamilies {
    fn register(registry: &Registry) -> Result<Self> {
        let uptime_seconds = CounterVec::new(
            Opts::new("node_uptime_seconds", "Controller node uptime in seconds"),
            NODE_LABELS,
        )?;
        let cpu_percent = GaugeVec::new(
            Opts::new("node_cpu_percent", "Controller node CPU usage percentage"),
            NODE_LABELS,
        )?;
        let disk = GaugeVec::new(
            Opts::new("node_disk", "Controller node free disk space"),
            NODE_LABELS,
        )?;
        let memory_percent = GaugeVec::new(
            Opts::new("node_memory_percent", "Controller node memory usage percentage"),
            NODE_LABELS,
        )?;

        registry.register(Box::new(uptime_seconds.clone()))?;
        registry.register(Box::new(cpu_percent.clone()))?;
        registry.register(Box::new(disk.clone()))?;
        registry.register(Box::new(memory_percent.clone()))?;

        Ok(Self {
            uptime_seconds,
            cpu_percent,
            disk,
            memory_percent,
        })
    }
}

/// Metric families assembled over one collection cycle.
pub struct ScrapeMetrics {
    registry: Registry,
    ap: Option<ApFamilies>,
    node: Option<NodeFamilies>,
    ssid: Option<GaugeVec>,
}

impl ScrapeMetrics {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            ap: None,
            node: None,
            ssid: None,
        }
    }

    fn ap_families(&mut self) -> Result<&ApFamilies> {
        let families = match self.ap.take() {
            Some(families) => families,
            None => ApFamilies::register(&self.registry)?,
        };
        Ok(self.ap.insert(families))
    }

    fn node_families(&mut self) -> Result<&NodeFamilies> {
        let families = match self.node.take() {
            Some(families) => families,
            None => NodeFamilies::register(&self.registry)?,
        };
        Ok(self.node.insert(families))
    }

    fn ssid_family(&mut self) -> Result<&GaugeVec> {
        let family = match self.ssid.take() {
            Some(family) => family,
            None => {
                let family = GaugeVec::new(
                    Opts::new("client_count", "Number of clients per SSID"),
                    SSID_LABELS,
                )?;
                self.registry.register(Box::new(family.clone()))?;
                family
            }
        };
        Ok(self.ssid.insert(family))
    }

    /// Add samples for a successful AP fetch. Registers the `ap_*` family
    /// group on first use.
    pub fn record_access_points(&mut self, records: &[AccessPointRecord]) -> Result<()> {
        let families = self.ap_families()?;
        for ap in records {
            let labels = [
                ap.device_name.as_str(),
                ap.ap_mac.as_str(),
                ap.ap_group_name.as_str(),
                ap.zone_name.as_str(),
            ];
            families.tx.with_label_values(&labels).set(ap.tx);
            families.rx.with_label_values(&labels).set(ap.rx);
            families
                .num_clients_5g
                .with_label_values(&labels)
                .set(ap.num_clients_5g);
            families
                .num_clients_2g
                .with_label_values(&labels)
                .set(ap.num_clients_24g);
            families.noise_5g.with_label_values(&labels).set(ap.noise_5g);
            families.noise_2g.with_label_values(&labels).set(ap.noise_24g);
            families
                .airtime_5g
                .with_label_values(&labels)
                .set(ap.airtime_5g);
            families
                .airtime_2g
                .with_label_values(&labels)
                .set(ap.airtime_24g);
            families
                .latency_5g
                .with_label_values(&labels)
                .set(ap.latency_5g);
            families
                .latency_2g
                .with_label_values(&labels)
                .set(ap.latency_24g);
            families.retries_5g.with_label_values(&labels).set(ap.retry_5g);
            families.retries_2g.with_label_values(&labels).set(ap.retry_24g);
            families
                .capacity_5g
                .with_label_values(&labels)
                .set(ap.capacity_5g);
            families
                .capacity_2g
                .with_label_values(&labels)
                .set(ap.capacity_24g);
            families.status.with_label_values(&labels).set(ap.up);
        }
        Ok(())
    }

    /// Add samples for a successful controller-node fetch.
    pub fn record_controller_nodes(&mut self, records: &[ControllerNodeRecord]) -> Result<()> {
        let families = self.node_families()?;
        for node in records {
            let labels = [node.hostname.as_str()];
            // Fresh counters start at zero, so one inc_by per scrape sets
            // the absolute uptime.
            families
                .uptime_seconds
                .with_label_values(&labels)
                .inc_by(node.uptime_seconds as f64);
            families
                .cpu_percent
                .with_label_values(&labels)
                .set(node.cpu_percent);
            families.disk.with_label_values(&labels).set(node.disk_free);
            families
                .memory_percent
                .with_label_values(&labels)
                .set(node.memory_percent);
        }
        Ok(())
    }

    /// Add samples for a successful SSID fetch.
    pub fn record_ssid_clients(&mut self, totals: &BTreeMap<String, u64>) -> Result<()> {
        let family = self.ssid_family()?;
        for (ssid, clients) in totals {
            family
                .with_label_values(&[ssid.as_str()])
                .set(*clients as f64);
        }
        Ok(())
    }

    /// Render the assembled families in Prometheus text format.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| crate::error::ExporterError::Api(format!("non-UTF8 exposition: {}", e)))
    }
}

impl Default for ScrapeMetrics {
    fn default() -> Self {
        Self::new()
    }
}
