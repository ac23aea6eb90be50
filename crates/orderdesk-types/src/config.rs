//! Configuration for an order registry.

use serde::{Deserialize, Serialize};

use crate::{OrderdeskError, Result, constants};

/// Formatting parameters for a registry's notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Key under which each admin's chat display name is stored. Callers use
    /// it to build the `owners` map handed to `register`.
    pub display_name_key: String,
    /// Host and path that delegation links point at, without a scheme
    /// (e.g. `"ro.example.com:8080/delegate"`).
    pub link_host: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            display_name_key: constants::DEFAULT_DISPLAY_NAME_KEY.to_string(),
            link_host: constants::DEFAULT_LINK_HOST.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Parse and validate a JSON config document. Missing fields take their
    /// defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(raw)
            .map_err(|e| OrderdeskError::Configuration(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    /// `Configuration` if `link_host` is empty or carries a URL scheme, or if
    /// `display_name_key` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.link_host.is_empty() {
            return Err(OrderdeskError::Configuration(
                "link_host must not be empty".to_string(),
            ));
        }
        if self.link_host.contains("://") {
            return Err(OrderdeskError::Configuration(format!(
                "link_host must not include a scheme: {}",
                self.link_host
            )));
        }
        if self.display_name_key.is_empty() {
            return Err(OrderdeskError::Configuration(
                "display_name_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
