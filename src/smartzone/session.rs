//! Controller Session Lifecycle
//!
//! A [`Session`] is the authenticated handle for one controller during one
//! scrape. It exists only between a successful login and the matching
//! best-effort logout; nothing about it survives across scrapes.

use crate::config::{ClientConfig, ControllerConfig};
use crate::error::{ExporterError, Result};
use crate::smartzone::client::SmartZoneClient;
use tracing::debug;

/// An authenticated session against one SmartZone controller.
pub struct Session {
    client: SmartZoneClient,
    hostname: String,
}

impl Session {
    /// Open a session: build a client for the controller and log in.
    ///
    /// A login response without a service ticket counts as an
    /// authentication failure even when the HTTP call itself succeeded.
    pub async fn open(client_cfg: &ClientConfig, controller: &ControllerConfig) -> Result<Self> {
        let mut client = SmartZoneClient::new(client_cfg, controller)?;
        client.connect(&controller.username, &controller.password).await?;

        if client.service_ticket().is_none() {
            return Err(ExporterError::Auth(
                "login response carried no service ticket".to_string(),
            ));
        }

        Ok(Self {
            client,
            hostname: controller.hostname.clone(),
        })
    }

    /// Best-effort logout. Failures are logged and swallowed; a stale
    /// ticket on the controller side is not worth failing a scrape over.
    pub async fn close(mut self) {
        if let Err(e) = self.client.disconnect().await {
            debug!(controller = %self.hostname, "logout failed: {}", e);
        }
    }

    pub(crate) fn client(&self) -> &SmartZoneClient {
        &self.client
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }
}
