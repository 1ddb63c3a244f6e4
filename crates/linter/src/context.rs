//! Lint context for rule execution

use indexmap::IndexMap;
use oxc_ast::AstKind;
use oxc_semantic::{ScopeId, Semantic};
use oxc_span::{SourceType, Span};
use tracing::debug;

use common::Settings;

use crate::diagnostic::{interpolate, Diagnostic, DiagnosticSeverity, Fix};
use crate::fixer::is_applicable;
use crate::resolver::{Binding, ScopeResolver};
use crate::rule::RuleDescriptor;

/// Per-file session state shared by every rule
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Source type (JS/TS/JSX etc)
    source_type: SourceType,
    /// Pragma settings
    settings: Settings,
    /// Scope lookups with a per-session cache
    resolver: ScopeResolver<'a>,
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(
        source_text: &'a str,
        source_type: SourceType,
        settings: Settings,
        resolver: ScopeResolver<'a>,
    ) -> Self {
        Self {
            source_text,
            source_type,
            settings,
            resolver,
            diagnostics: Vec::new(),
        }
    }

    /// Get the source text
    pub fn source_text(&self) -> &'a str {
        self.source_text
    }

    /// Get the source type
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn resolver(&self) -> &ScopeResolver<'a> {
        &self.resolver
    }

    /// Get semantic analysis
    pub fn semantic(&self) -> &'a Semantic<'a> {
        self.resolver.semantic()
    }

    /// Report a diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get a slice of source text for a span
    pub fn span_text(&self, span: Span) -> &'a str {
        self.source_text
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }

    /// Consume the context and return all diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Get reference to diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// A report under construction
#[derive(Debug, Clone)]
pub struct Report {
    span: Span,
    message_id: &'static str,
    data: IndexMap<String, String>,
    fix: Option<Fix>,
    help: Option<String>,
}

impl Report {
    pub fn new(message_id: &'static str, span: Span) -> Self {
        Self {
            span,
            message_id,
            data: IndexMap::new(),
            fix: None,
            help: None,
        }
    }

    pub fn with_data(mut self, key: &str, value: impl Into<String>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn with_fix(mut self, fix: Option<Fix>) -> Self {
        self.fix = fix;
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// The view of the session handed to one rule for one event
pub struct RuleContext<'a, 's> {
    session: &'s mut LintContext<'a>,
    rule: &'s RuleDescriptor,
    severity: DiagnosticSeverity,
    ancestors: &'s [AstKind<'a>],
    scope_id: ScopeId,
}

impl<'a, 's> RuleContext<'a, 's> {
    pub fn new(
        session: &'s mut LintContext<'a>,
        rule: &'s RuleDescriptor,
        severity: DiagnosticSeverity,
        ancestors: &'s [AstKind<'a>],
        scope_id: ScopeId,
    ) -> Self {
        Self {
            session,
            rule,
            severity,
            ancestors,
            scope_id,
        }
    }

    pub fn source_text(&self) -> &'a str {
        self.session.source_text()
    }

    pub fn span_text(&self, span: Span) -> &'a str {
        self.session.span_text(span)
    }

    pub fn settings(&self) -> &Settings {
        self.session.settings()
    }

    /// The node enclosing the current one
    pub fn parent(&self) -> Option<AstKind<'a>> {
        self.ancestors.last().copied()
    }

    /// Enclosing nodes, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = AstKind<'a>> + '_ {
        self.ancestors.iter().rev().copied()
    }

    /// Innermost scope at the current node
    pub fn scope_id(&self) -> ScopeId {
        self.scope_id
    }

    /// Resolve a name visible at the current node
    pub fn resolve(&self, name: &str) -> Option<Binding<'a>> {
        self.session.resolver().resolve(name, self.scope_id)
    }

    /// Resolve a name from a previously recorded scope
    pub fn resolve_in(&self, name: &str, scope_id: ScopeId) -> Option<Binding<'a>> {
        self.session.resolver().resolve(name, scope_id)
    }

    pub fn resolver(&self) -> &ScopeResolver<'a> {
        self.session.resolver()
    }

    /// Render the message template and append the diagnostic to the session
    pub fn report(&mut self, report: Report) {
        let template = self.rule.message(report.message_id).unwrap_or(report.message_id);
        let message = interpolate(template, &report.data);

        let mut diagnostic = Diagnostic::new(self.rule.name, report.span, message)
            .with_severity(self.severity)
            .with_message_id(report.message_id)
            .with_data(report.data);
        if let Some(help) = report.help {
            diagnostic = diagnostic.with_help(help);
        }
        if let Some(fix) = report.fix {
            if is_applicable(self.session.source_text(), &fix) {
                diagnostic = diagnostic.with_fix(fix);
            } else {
                debug!(rule = self.rule.name, start = fix.start, end = fix.end, "dropping fix");
            }
        }
        self.session.report(diagnostic);
    }
}
