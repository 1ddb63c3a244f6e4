//! Inferno-specific lint rules
//!
//! This crate provides lint rules for Inferno components ported from
//! eslint-plugin-inferno, together with the engine that runs them:
//! 1. A rule contract and a process-wide registry with presets
//! 2. A single-pass traversal dispatching nodes to subscribed rules
//! 3. Diagnostics with composable, non-overlapping fixes
//!
//! ```ignore
//! let config = LintConfig::recommended();
//! let linter = Linter::new(&config);
//! let result = linter.run(source_text, source_type, &semantic, &program);
//! ```

pub mod config;
pub mod error;
pub mod fixer;
pub mod ordering;
pub mod placement;
pub mod registry;
pub mod resolver;
pub mod rule;
pub mod rules;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;

pub use config::{LintConfig, RuleEntry, RuleSeverity};
pub use context::{LintContext, Report, RuleContext};
pub use diagnostic::{interpolate, Diagnostic, DiagnosticSeverity, Fix};
pub use error::{LintError, Result};
pub use registry::{filter_active, DeprecationNotices, RuleRegistry};
pub use resolver::{Binding, ImportBinding, ImportedName, ScopeResolver};
pub use rule::{NodeType, OptionShape, Rule, RuleDescriptor, RuleHandler};
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, Linter};

/// Prefix of rule ids in configuration files
pub const PLUGIN_NAME: &str = "inferno";

/// Rule category for Inferno rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Rules that detect code that is likely to be incorrect
    Correctness,
    /// Rules that suggest improvements
    Pedantic,
    /// Rules that encourage best practices
    Style,
    /// Rules that may have false positives (experimental)
    Nursery,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// Part of the curated `recommended` preset
    const RECOMMENDED: bool = false;
    const FIXABLE: bool = false;
    const DEPRECATED: bool = false;
    /// Appended to the one-time deprecation notice
    const DEPRECATION_HINT: &'static str = "";
    /// Message templates keyed by message id
    const MESSAGES: &'static [(&'static str, &'static str)];
    /// Positional option shapes
    const SCHEMA: &'static [rule::OptionShape] = &[];
    /// Node types the rule's handler is called for
    const NODE_TYPES: &'static [rule::NodeType];
    /// Whether the handler needs the end-of-program event
    const RUNS_ON_EXIT: bool = false;

    /// URL to documentation
    fn docs_url() -> String {
        docs_url(Self::NAME)
    }
}

pub(crate) fn docs_url(name: &str) -> String {
    format!(
        "https://github.com/infernojs/eslint-plugin-inferno/tree/master/docs/rules/{}.md",
        name
    )
}
