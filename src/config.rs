//! Editor Configuration
//!
//! Display settings for totals and component labels. Every field has a
//! default, so a partial JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Prefix for money values
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Fraction digits for money values
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// How many characters of a reference id a component label shows
    #[serde(default = "default_id_preview_len")]
    pub id_preview_len: usize,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_decimals() -> usize {
    2
}

fn default_id_preview_len() -> usize {
    8
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            decimals: default_decimals(),
            id_preview_len: default_id_preview_len(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
