//! Terminal preview settings.

use serde::{Deserialize, Serialize};

use lulu_widget_protocol::FormFactor;

/// Settings for `lulu-widget preview`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Form factor shown first.
    #[serde(default)]
    pub form_factor: FormFactor,

    /// Whether the preview re-reads the store on the adaptive refresh
    /// schedule. When off, the store is only read on demand.
    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,
}

fn default_auto_refresh() -> bool {
    true
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            form_factor: FormFactor::default(),
            auto_refresh: default_auto_refresh(),
        }
    }
}
