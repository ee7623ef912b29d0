//! # Console configuration: `academy.toml`
//!
//! Defines the TOML file the web binary embeds at build time
//! (filename: [`AcademyConfig::filename`] = `"academy.toml"`). It tells the
//! console where the backend lives and tunes the few timings the pages use.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [ui]
//! delete_confirm_secs = 3     # window for the second delete click
//! redirect_delay_ms = 1500    # pause on the success banner before navigating
//! recent_students = 5         # rows in the dashboard's recent list
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AcademyConfig`] | Top-level config. Builder helper (`with_base_url`), TOML (de)serialisation, and the canonical filename. |
//! | [`ApiConfig`] | Backend section, the REST base URL. |
//! | [`UiConfig`] | Page timings and list sizes. |
//!
//! Every field has a default so a missing or empty file equals
//! [`AcademyConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `academy.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademyConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Page behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Seconds a delete button stays armed after the first click.
    #[serde(default = "default_delete_confirm_secs")]
    pub delete_confirm_secs: u32,
    /// Milliseconds the success banner shows before navigating away.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u32,
    /// How many people the dashboard lists as recent.
    #[serde(default = "default_recent_students")]
    pub recent_students: usize,
}

fn default_delete_confirm_secs() -> u32 {
    3
}

fn default_redirect_delay_ms() -> u32 {
    1500
}

fn default_recent_students() -> usize {
    5
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            delete_confirm_secs: default_delete_confirm_secs(),
            redirect_delay_ms: default_redirect_delay_ms(),
            recent_students: default_recent_students(),
        }
    }
}

impl AcademyConfig {
    /// Builder method to point at another backend. Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "academy.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        let base_url = config.api.base_url.clone();
        Ok(config.with_base_url(&base_url))
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
