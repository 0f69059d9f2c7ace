use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub controllers: Vec<ControllerConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings shared by every controller client.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Bound per-request timeout so an unreachable controller cannot
    /// stall a scrape indefinitely.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Controllers speak HTTPS in practice; plain HTTP exists for local
    /// fixtures and lab setups.
    #[serde(default = "default_use_tls")]
    pub use_tls: bool,
    /// Certificate verification is on unless explicitly disabled for
    /// controllers running self-signed management certificates.
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ControllerConfig {
    pub hostname: String,
    #[serde(default = "default_controller_port")]
    pub port: u16,
    pub username: String,
    pub password: SecretString,
}

fn default_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9118
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_use_tls() -> bool {
    true
}

fn default_verify_tls() -> bool {
    true
}

fn default_api_version() -> String {
    "v9_1".to_string()
}

fn default_controller_port() -> u16 {
    8443
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            port: default_port(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            use_tls: default_use_tls(),
            verify_tls: default_verify_tls(),
            api_version: default_api_version(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SMARTZONE_EXPORTER").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Startup validation. A broken controller list is fatal before the
    /// listener starts; runtime failures never are.
    pub fn validate(&self) -> Result<()> {
        if self.controllers.is_empty() {
            bail!("no controllers configured");
        }
        for controller in &self.controllers {
            if controller.hostname.is_empty() {
                bail!("controller entry with empty hostname");
            }
            if controller.username.is_empty() || controller.password.expose_secret().is_empty() {
                bail!(
                    "controller {} is missing credentials",
                    controller.hostname
                );
            }
        }
        Ok(())
    }
}
