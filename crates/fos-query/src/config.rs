//! Page configuration

use fos_html::ParserConfig;
use serde::{Deserialize, Serialize};

/// Settings shared by every verb run against a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Attribute that marks an element hidden for the visibility verbs
    pub hidden_attribute: String,
    /// Options for markup parsed by `from_html`, `set_html` and `create_element`
    pub markup: ParserConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hidden_attribute: "hidden".to_string(),
            markup: ParserConfig::default(),
        }
    }
}

impl Config {
    pub fn with_hidden_attribute(mut self, name: &str) -> Self {
        self.hidden_attribute = name.to_string();
        self
    }
}
