//! Lint configuration
//!
//! Accepts the ESLint-shaped document hosts already have:
//!
//! ```json
//! {
//!   "settings": { "inferno": { "pragma": "Inferno" } },
//!   "rules": {
//!     "inferno/jsx-fragments": ["error", "element"],
//!     "inferno/sort-comp": 1
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use common::Settings;

use crate::diagnostic::DiagnosticSeverity;
use crate::error::Result;
use crate::registry::{strip_plugin_prefix, RuleRegistry};

/// Configured severity of a rule (`0`/`1`/`2` or `off`/`warn`/`error`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum RuleSeverity {
    Off,
    Warn,
    Error,
}

impl RuleSeverity {
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Warn => 1,
            Self::Error => 2,
        }
    }

    /// Severity of the diagnostics produced, `None` when the rule is off
    pub fn diagnostic_severity(self) -> Option<DiagnosticSeverity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(DiagnosticSeverity::Warning),
            Self::Error => Some(DiagnosticSeverity::Error),
        }
    }
}

impl TryFrom<Value> for RuleSeverity {
    type Error = String;

    fn try_from(value: Value) -> std::result::Result<Self, String> {
        match &value {
            Value::Number(n) => match n.as_u64() {
                Some(0) => Ok(RuleSeverity::Off),
                Some(1) => Ok(RuleSeverity::Warn),
                Some(2) => Ok(RuleSeverity::Error),
                _ => Err(format!("invalid severity {}", n)),
            },
            Value::String(s) => match s.as_str() {
                "off" => Ok(RuleSeverity::Off),
                "warn" => Ok(RuleSeverity::Warn),
                "error" => Ok(RuleSeverity::Error),
                _ => Err(format!("invalid severity \"{}\"", s)),
            },
            other => Err(format!("invalid severity {}", other)),
        }
    }
}

impl Serialize for RuleSeverity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// One entry of the `rules` block: a severity, optionally followed by options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct RuleEntry {
    pub severity: RuleSeverity,
    pub options: Vec<Value>,
}

impl RuleEntry {
    pub fn new(severity: RuleSeverity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: Vec<Value>) -> Self {
        self.options = options;
        self
    }
}

impl TryFrom<Value> for RuleEntry {
    type Error = String;

    fn try_from(value: Value) -> std::result::Result<Self, String> {
        match value {
            Value::Array(mut items) => {
                if items.is_empty() {
                    return Err("empty rule entry".to_string());
                }
                let severity = RuleSeverity::try_from(items.remove(0))?;
                Ok(Self {
                    severity,
                    options: items,
                })
            }
            other => Ok(Self::new(RuleSeverity::try_from(other)?)),
        }
    }
}

/// The `settings` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsBlock {
    pub inferno: Settings,
}

/// A full lint configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    pub settings: SettingsBlock,
    /// Rule entries keyed by id, with or without the `inferno/` prefix
    pub rules: IndexMap<String, RuleEntry>,
}

impl LintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configuration built from a preset map
    pub fn from_preset(preset: IndexMap<String, RuleSeverity>) -> Self {
        Self {
            settings: SettingsBlock::default(),
            rules: preset
                .into_iter()
                .map(|(name, severity)| (name, RuleEntry::new(severity)))
                .collect(),
        }
    }

    pub fn recommended() -> Self {
        Self::from_preset(RuleRegistry::builtin().recommended_config())
    }

    pub fn all() -> Self {
        Self::from_preset(RuleRegistry::builtin().all_config())
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings.inferno = settings;
        self
    }

    pub fn with_rule(mut self, name: &str, severity: RuleSeverity, options: Vec<Value>) -> Self {
        self.rules.insert(
            strip_plugin_prefix(name).to_string(),
            RuleEntry::new(severity).with_options(options),
        );
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings.inferno
    }

    /// Entries with the `inferno/` prefix removed, later duplicates winning
    pub fn rule_entries(&self) -> IndexMap<&str, &RuleEntry> {
        let mut entries = IndexMap::new();
        for (name, entry) in &self.rules {
            entries.insert(strip_plugin_prefix(name), entry);
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_document() {
        let config = LintConfig::from_json(
            r#"{
                "settings": { "inferno": { "pragma": "Act" } },
                "rules": {
                    "inferno/jsx-fragments": ["error", "element"],
                    "sort-comp": 1,
                    "inferno/no-is-mounted": "off"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.settings().pragma, "Act");
        assert_eq!(config.settings().fragment, "Fragment");

        let entries = config.rule_entries();
        let fragments = entries["jsx-fragments"];
        assert_eq!(fragments.severity, RuleSeverity::Error);
        assert_eq!(fragments.options, vec![json!("element")]);
        assert_eq!(entries["sort-comp"].severity, RuleSeverity::Warn);
        assert_eq!(entries["no-is-mounted"].severity, RuleSeverity::Off);
    }

    #[test]
    fn test_invalid_severity() {
        assert!(LintConfig::from_json(r#"{"rules": {"sort-comp": 3}}"#).is_err());
        assert!(LintConfig::from_json(r#"{"rules": {"sort-comp": []}}"#).is_err());
        assert!(LintConfig::from_json(r#"{"rules": {"sort-comp": "loud"}}"#).is_err());
    }

    #[test]
    fn test_severity_serializes_as_number() {
        let preset = RuleRegistry::builtin().recommended_config();
        let json = serde_json::to_value(&preset).unwrap();
        assert_eq!(json["inferno/no-is-mounted"], json!(2));
    }

    #[test]
    fn test_presets() {
        let recommended = LintConfig::recommended();
        assert!(recommended.rules.contains_key("inferno/no-render-return-value"));
        let all = LintConfig::all();
        assert!(all.rules.len() > recommended.rules.len());
    }
}
