//! Rule registry and presets
//!
//! The builtin registry is assembled once per process and never mutated
//! afterwards. Dispatch order follows registration order.

use std::sync::OnceLock;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{error, trace, warn};

use crate::config::RuleSeverity;
use crate::error::{LintError, Result};
use crate::rule::{NodeType, RuleDescriptor};
use crate::{rules, PLUGIN_NAME};

/// All registered rules, plus a node-type dispatch table
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: IndexMap<&'static str, RuleDescriptor>,
    dispatch: FxHashMap<NodeType, Vec<usize>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry holding every builtin rule
    pub fn builtin() -> &'static RuleRegistry {
        static BUILTIN: OnceLock<RuleRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut registry = RuleRegistry::new();
            for descriptor in rules::descriptors() {
                if let Err(err) = registry.register(descriptor) {
                    error!(%err, "skipping builtin rule");
                }
            }
            registry
        })
    }

    /// Add a rule; ids must be unique
    pub fn register(&mut self, descriptor: RuleDescriptor) -> Result<()> {
        if self.rules.contains_key(descriptor.name) {
            return Err(LintError::DuplicateRule(descriptor.name.to_string()));
        }
        let index = self.rules.len();
        for node_type in descriptor.node_types {
            trace!(rule = descriptor.name, ?node_type, "registering handler");
            self.dispatch.entry(*node_type).or_default().push(index);
        }
        self.rules.insert(descriptor.name, descriptor);
        Ok(())
    }

    /// Look a rule up by name, with or without the `inferno/` prefix
    pub fn get(&self, name: &str) -> Option<&RuleDescriptor> {
        self.rules.get(strip_plugin_prefix(name))
    }

    /// Position of a rule in registration order
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.rules.get_index_of(strip_plugin_prefix(name))
    }

    /// Rules subscribed to `node_type`, in registration order
    pub fn handlers_for(&self, node_type: NodeType) -> impl Iterator<Item = &RuleDescriptor> + '_ {
        self.dispatch
            .get(&node_type)
            .into_iter()
            .flatten()
            .filter_map(|index| self.rules.get_index(*index).map(|(_, d)| d))
    }

    /// Raw map of every rule
    pub fn rules(&self) -> &IndexMap<&'static str, RuleDescriptor> {
        &self.rules
    }

    /// Raw map of the deprecated rules only
    pub fn deprecated_rules(&self) -> IndexMap<&'static str, RuleDescriptor> {
        self.rules
            .iter()
            .filter(|(_, d)| d.deprecated)
            .map(|(name, d)| (*name, *d))
            .collect()
    }

    /// Curated preset of safe defaults
    pub fn recommended_config(&self) -> IndexMap<String, RuleSeverity> {
        self.rules
            .values()
            .filter(|d| d.recommended && !d.deprecated)
            .map(|d| (d.id(), RuleSeverity::Error))
            .collect()
    }

    /// Every active rule at error severity
    pub fn all_config(&self) -> IndexMap<String, RuleSeverity> {
        filter_active(self.rules.values())
    }
}

/// Drop deprecated rules and map every remaining id to error severity
pub fn filter_active<'r>(
    rules: impl IntoIterator<Item = &'r RuleDescriptor>,
) -> IndexMap<String, RuleSeverity> {
    rules
        .into_iter()
        .filter(|d| !d.deprecated)
        .map(|d| (d.id(), RuleSeverity::Error))
        .collect()
}

pub(crate) fn strip_plugin_prefix(name: &str) -> &str {
    name.strip_prefix(PLUGIN_NAME)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(name)
}

/// One-time notices for deprecated rules
///
/// Owned by the host; a rule is announced the first time it is activated
/// through a given instance.
#[derive(Debug, Default)]
pub struct DeprecationNotices {
    warned: FxHashSet<&'static str>,
    notices: Vec<String>,
}

impl DeprecationNotices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record activation of a rule; returns the notice if this is the first one
    pub fn notify(&mut self, descriptor: &RuleDescriptor) -> Option<&str> {
        if !descriptor.deprecated || !self.warned.insert(descriptor.name) {
            return None;
        }
        let mut notice = format!("The {} rule is deprecated.", descriptor.id());
        if !descriptor.deprecation_hint.is_empty() {
            notice.push(' ');
            notice.push_str(descriptor.deprecation_hint);
        }
        warn!(rule = descriptor.name, "{}", notice);
        self.notices.push(notice);
        self.notices.last().map(String::as_str)
    }

    pub fn has_warned(&self, name: &str) -> bool {
        self.warned.contains(strip_plugin_prefix(name))
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}
