//! Bridge configuration

use serde::{Deserialize, Serialize};

/// Where and how the bridge exposes itself
///
/// `framed` is decided once at start-up by the host (is this page inside
/// another page's frame?) and never re-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Channel scope shared with the parent page
    pub scope: String,
    /// Origin accepted by the channel; origin checks belong to the channel
    pub origin: String,
    /// Class of the `<select>` that lists the choices
    pub selector_class: String,
    pub framed: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            scope: "JSInput".to_string(),
            origin: "*".to_string(),
            selector_class: "choices".to_string(),
            framed: false,
        }
    }
}

impl BridgeConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn framed(mut self, framed: bool) -> Self {
        self.framed = framed;
        self
    }
}
