//! Inferno Lint
//!
//! Lint rules for Inferno JSX and component code, running on OXC.
//! This is a port of eslint-plugin-inferno.
//!
//! ## Usage
//!
//! ```rust
//! use inferno_lint::{lint_source, LintConfig};
//! use oxc_span::SourceType;
//!
//! let source = r#"<div a="1" a="2" />"#;
//! let result = lint_source(source, SourceType::jsx(), &LintConfig::recommended()).unwrap();
//! assert_eq!(result.diagnostics.len(), 1);
//! ```

pub use common::Settings;
pub use inferno_linter::{
    Diagnostic, DiagnosticSeverity, Fix, LintConfig, LintError, LintResult, Linter, Result,
    RuleRegistry, RuleSeverity,
};

#[cfg(feature = "napi")]
use napi_derive::napi;

use inferno_linter::fixer::apply_fixes;
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use tracing::debug;

/// Upper bound on fix-and-relint passes
pub const MAX_FIX_PASSES: usize = 10;

/// Diagnostic exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsDiagnostic {
    /// Rule name without the plugin prefix
    pub rule: String,
    pub message_id: Option<String>,
    pub message: String,
    /// "error" or "warning"
    pub severity: String,
    pub start: u32,
    pub end: u32,
    pub fix: Option<JsFix>,
}

/// Fix exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsFix {
    pub start: u32,
    pub end: u32,
    pub replacement: String,
}

/// Lint result exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsLintResult {
    pub diagnostics: Vec<JsDiagnostic>,
    /// Deprecation notices for activated rules
    pub notices: Vec<String>,
}

/// Lint JSX source code
///
/// `config` is an ESLint-shaped JSON document (`{"settings": {"inferno": ...},
/// "rules": {...}}`); the recommended preset is used when it is omitted.
#[cfg(feature = "napi")]
#[napi]
pub fn lint_jsx(
    source: String,
    config: Option<String>,
    filename: Option<String>,
) -> napi::Result<JsLintResult> {
    let config = match config {
        Some(json) => LintConfig::from_json(&json),
        None => Ok(LintConfig::recommended()),
    }
    .map_err(|err| napi::Error::from_reason(err.to_string()))?;
    let source_type = filename
        .as_deref()
        .and_then(|name| SourceType::from_path(name).ok())
        .unwrap_or(SourceType::jsx());

    let result = lint_source(&source, source_type, &config)
        .map_err(|err| napi::Error::from_reason(err.to_string()))?;

    let diagnostics = result
        .diagnostics
        .into_iter()
        .map(|d| JsDiagnostic {
            severity: match d.severity {
                DiagnosticSeverity::Error => "error".to_string(),
                _ => "warning".to_string(),
            },
            rule: d.rule,
            message_id: d.message_id,
            message: d.message,
            start: d.start,
            end: d.end,
            fix: d.fix.map(|fix| JsFix {
                start: fix.start,
                end: fix.end,
                replacement: fix.replacement,
            }),
        })
        .collect();

    Ok(JsLintResult {
        diagnostics,
        notices: result.notices,
    })
}

/// Lint a source file with the given configuration
///
/// Configuration errors do not fail the call: the affected rules are
/// skipped and the remaining rules run.
pub fn lint_source(source: &str, source_type: SourceType, config: &LintConfig) -> Result<LintResult> {
    let linter = Linter::new(config);
    for err in linter.errors() {
        debug!(%err, "rule not activated");
    }
    run_session(&linter, source, source_type)
}

fn run_session(linter: &Linter, source: &str, source_type: SourceType) -> Result<LintResult> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        let messages: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
        return Err(LintError::Parse(messages.join("; ")));
    }

    let semantic_ret = SemanticBuilder::new()
        .with_excess_capacity(0.0)
        .build(&ret.program);

    Ok(linter.run(source, source_type, &semantic_ret.semantic, &ret.program))
}

/// Output of [`fix_source`]
#[derive(Debug)]
pub struct FixOutcome {
    /// Source after all passes
    pub output: String,
    /// Number of passes that changed the source
    pub passes: usize,
    /// Total fixes applied
    pub applied: usize,
    /// Diagnostics of the final source
    pub diagnostics: Vec<Diagnostic>,
}

/// Apply fixes and re-lint until nothing changes, at most [`MAX_FIX_PASSES`] times
///
/// Every pass is a fresh session over the re-parsed output of the previous one.
pub fn fix_source(source: &str, source_type: SourceType, config: &LintConfig) -> Result<FixOutcome> {
    let linter = Linter::new(config);
    let mut output = source.to_string();
    let mut passes = 0;
    let mut applied = 0;

    loop {
        let result = run_session(&linter, &output, source_type)?;
        if passes == MAX_FIX_PASSES {
            debug!(passes, "fix pass limit reached");
            return Ok(FixOutcome {
                output,
                passes,
                applied,
                diagnostics: result.diagnostics,
            });
        }

        let fixed = apply_fixes(&output, &result.diagnostics);
        if !fixed.is_changed() {
            return Ok(FixOutcome {
                output,
                passes,
                applied,
                diagnostics: result.diagnostics,
            });
        }

        passes += 1;
        applied += fixed.applied;
        debug!(pass = passes, applied = fixed.applied, deferred = fixed.deferred, "applied fixes");
        output = fixed.output;
    }
}
