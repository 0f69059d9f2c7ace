//! SmartZone REST API Client
//!
//! Thin transport wrapper around the SmartZone public API. One client is
//! bound to one controller for the duration of one scrape; it knows how to
//! log in for a service ticket, issue reads and queries carrying that
//! ticket, and log out again. Everything above this layer works with parsed
//! response bodies and never sees URLs or tickets.
//!
//! # TLS
//!
//! Controllers commonly run self-signed management certificates.
//! Verification stays on by default; `client.verify_tls = false` opts into
//! accepting invalid certificates for a trusted management network.

use crate::config::{ClientConfig, ControllerConfig};
use crate::error::{ExporterError, Result};
use crate::smartzone::types::LoginResponse;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::debug;

/// Client for one SmartZone controller's public REST API.
pub struct SmartZoneClient {
    http: reqwest::Client,
    base_url: String,
    service_ticket: Option<String>,
}

impl SmartZoneClient {
    /// Build a client bound to `https://{hostname}:{port}` (or plain HTTP
    /// when TLS is disabled) under the configured public-API version.
    pub fn new(client_cfg: &ClientConfig, controller: &ControllerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(client_cfg.timeout_seconds))
            .danger_accept_invalid_certs(!client_cfg.verify_tls)
            .cookie_store(true)
            .build()?;

        let scheme = if client_cfg.use_tls { "https" } else { "http" };
        let base_url = format!(
            "{}://{}:{}/wsg/api/public/{}",
            scheme, controller.hostname, controller.port, client_cfg.api_version
        );

        Ok(Self {
            http,
            base_url,
            service_ticket: None,
        })
    }

    /// Log in and store the returned service ticket for subsequent calls.
    pub async fn connect(&mut self, username: &str, password: &SecretString) -> Result<()> {
        let body = serde_json::json!({
            "username": username,
            "password": password.expose_secret(),
        });

        let response = self
            .http
            .post(format!("{}/serviceTicket", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExporterError::Auth(format!(
                "login rejected with status {}",
                response.status()
            )));
        }

        let login: LoginResponse = response.json().await?;
        self.service_ticket = login.service_ticket;
        Ok(())
    }

    /// The service ticket from the last successful login, if any.
    pub fn service_ticket(&self) -> Option<&str> {
        self.service_ticket.as_deref()
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path);
        debug!("GET {}", path);
        Ok(self.http.get(url).send().await?)
    }

    pub async fn post(&self, path: &str, body: &serde_json::Value) -> Result<reqwest::Response> {
        let url = self.url(path);
        debug!("POST {}", path);
        Ok(self.http.post(url).json(body).send().await?)
    }

    /// Release the service ticket. Logical failure here never aborts a
    /// scrape; callers treat it as best-effort cleanup.
    pub async fn disconnect(&mut self) -> Result<()> {
        if let Some(ticket) = self.service_ticket.take() {
            let url = format!(
                "{}/serviceTicket?serviceTicket={}",
                self.base_url, ticket
            );
            let response = self.http.delete(url).send().await?;
            if !response.status().is_success() {
                return Err(ExporterError::Api(format!(
                    "logout returned status {}",
                    response.status()
                )));
            }
        }
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        match &self.service_ticket {
            Some(ticket) => {
                let sep = if path.contains('?') { '&' } else { '?' };
                format!("{}{}{}serviceTicket={}", self.base_url, path, sep, ticket)
            }
            None => format!("{}{}", self.base_url, path),
        }
    }
}
