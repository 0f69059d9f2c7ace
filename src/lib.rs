//! Ruckus SmartZone Prometheus Exporter
//!
//! A Prometheus metrics exporter for Ruckus SmartZone / Virtual SmartZone
//! wireless controllers.
//!
//! # Overview
//!
//! The exporter polls one or more controllers over the SmartZone public REST
//! API, normalizes access-point inventory, per-SSID client aggregates, and
//! cluster-node health into stable metric families, and exposes them on a
//! pull-based `/metrics` endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐       HTTPS         ┌──────────────┐
//! │  SmartZone  │ ◄─────────────────► │   Exporter   │
//! │ controllers │   REST public API   │              │
//! └─────────────┘   (service ticket)  │  ┌────────┐  │      HTTP      ┌────────────┐
//!                                     │  │Session │  │ ◄────────────► │ Prometheus │
//!                                     │  └────────┘  │   /metrics     └────────────┘
//!                                     │  ┌────────┐  │
//!                                     │  │Metrics │  │
//!                                     │  └────────┘  │
//!                                     └──────────────┘
//! ```
//!
//! Every scrape runs the same stateless pipeline per controller:
//! login → fetch (APs, WLANs, cluster nodes) → normalize → assemble → logout.
//! Nothing is cached between scrapes.
//!
//! # Modules
//!
//! - [`smartzone`] - REST client, session lifecycle, inventory fetches
//! - [`normalize`] - Sentinel substitution and status derivation
//! - [`metrics`] - Per-scrape metric family assembly
//! - [`collectors`] - Per-category collectors and cycle orchestration
//! - [`server`] - HTTP server
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use smartzone_exporter::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/Default.toml")?;
//!     config.validate()?;
//!     server::start(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Failure Model
//!
//! - A failed login skips that controller for the cycle
//! - A failed fetch omits only its metric families
//! - Missing record fields become sentinels ("unknown", zero MAC, NaN)
//! - Only startup configuration errors are fatal

pub mod collectors;
pub mod config;
pub mod error;
pub mod metrics;
pub mod normalize;
pub mod server;
pub mod smartzone;
