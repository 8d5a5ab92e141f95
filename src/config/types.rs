use serde::{Deserialize, Serialize};

use crate::controller::ControlId;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub elements: ElementIds,
    #[serde(default)]
    pub ui: UiConfig,
}

/// HTTP host settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP host (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// How many ports above `bind_addr` to try when it is busy (default: 100).
    #[serde(default = "default_port_fallback")]
    pub port_fallback: u16,
}

/// Stable identifiers of the display surface and the three controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementIds {
    #[serde(default = "default_display_id")]
    pub display: String,
    #[serde(default = "default_increment_id")]
    pub increment: String,
    #[serde(default = "default_decrement_id")]
    pub decrement: String,
    #[serde(default = "default_reset_id")]
    pub reset: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_port_fallback() -> u16 {
    100
}

fn default_display_id() -> String {
    "count".to_string()
}

fn default_increment_id() -> String {
    ControlId::Increment.default_element_id().to_string()
}

fn default_decrement_id() -> String {
    ControlId::Decrement.default_element_id().to_string()
}

fn default_reset_id() -> String {
    ControlId::Reset.default_element_id().to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl ElementIds {
    /// Element id of a control.
    pub fn control(&self, control: ControlId) -> &str {
        match control {
            ControlId::Increment => &self.increment,
            ControlId::Decrement => &self.decrement,
            ControlId::Reset => &self.reset,
        }
    }

    /// Every control paired with its element id, in on-screen order.
    pub fn controls(&self) -> [(ControlId, &str); 3] {
        ControlId::ALL.map(|c| (c, self.control(c)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port_fallback: default_port_fallback(),
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            display: default_display_id(),
            increment: default_increment_id(),
            decrement: default_decrement_id(),
            reset: default_reset_id(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
