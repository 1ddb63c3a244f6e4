//! Shared settings for the Inferno rules
//!
//! Mirrors the `settings.inferno` block of a lint configuration. Every rule
//! receives the same immutable bag for the whole session.

use serde::{Deserialize, Serialize};

/// Pragma settings consulted by the component and fragment heuristics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Namespace the runtime is imported as (`Inferno.Fragment`, `Inferno.render`)
    pub pragma: String,

    /// Name of the fragment component
    pub fragment: String,

    /// Name of the class factory (`createClass`)
    pub create_class: String,

    /// Module the runtime is imported from
    pub module: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pragma: "Inferno".to_string(),
            fragment: "Fragment".to_string(),
            create_class: "createClass".to_string(),
            module: "inferno".to_string(),
        }
    }
}

impl Settings {
    pub fn with_pragma(mut self, pragma: impl Into<String>) -> Self {
        self.pragma = pragma.into();
        self
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = fragment.into();
        self
    }

    /// `Pragma.Fragment`, as written in long-form fragments
    pub fn fragment_member(&self) -> String {
        format!("{}.{}", self.pragma, self.fragment)
    }
}
