//! Static property placement
//!
//! Each well-known static property of a component class is declared in one
//! of three ways. The expected way comes from a per-property override or the
//! global default, and a mismatch is reported with the message of the
//! expected way.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use common::STATIC_PROPERTIES;

/// How a static property is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum PropertyPlacement {
    /// `static displayName = "Hello";`
    #[default]
    #[serde(rename = "static public field")]
    StaticPublicField,
    /// `static get displayName() { return "Hello"; }`
    #[serde(rename = "static getter")]
    StaticGetter,
    /// `Hello.displayName = "Hello";`
    #[serde(rename = "property assignment")]
    PropertyAssignment,
}

impl PropertyPlacement {
    pub const OPTION_VALUES: &'static [&'static str] =
        &["static public field", "static getter", "property assignment"];

    /// Message id reported when this placement was expected
    pub fn message_id(self) -> &'static str {
        match self {
            Self::StaticPublicField => "notStaticClassProp",
            Self::StaticGetter => "notGetterClassFunc",
            Self::PropertyAssignment => "declareOutsideClass",
        }
    }
}

/// Expected placement per property name
#[derive(Debug, Clone, Default)]
pub struct PlacementConfig {
    pub default: PropertyPlacement,
    pub overrides: FxHashMap<String, PropertyPlacement>,
}

impl PlacementConfig {
    pub fn new(default: PropertyPlacement) -> Self {
        Self {
            default,
            overrides: FxHashMap::default(),
        }
    }

    pub fn with_override(mut self, name: &str, placement: PropertyPlacement) -> Self {
        self.overrides.insert(name.to_string(), placement);
        self
    }

    /// Expected placement, `None` for names that are not checked
    pub fn expected(&self, name: &str) -> Option<PropertyPlacement> {
        if !STATIC_PROPERTIES.contains(name) {
            return None;
        }
        Some(self.overrides.get(name).copied().unwrap_or(self.default))
    }

    /// Message id for a declaration placed as `observed`, if it is misplaced
    pub fn check(&self, name: &str, observed: PropertyPlacement) -> Option<&'static str> {
        let expected = self.expected(name)?;
        (expected != observed).then(|| expected.message_id())
    }
}
