//! Unified visitor running all enabled rules in a single AST pass
//!
//! `Linter` holds the configured rules and is reusable across files.
//! `LintRunner` is one file-analysis session: it walks the program once,
//! hands every node to the rules subscribed to its type and finishes with
//! the end-of-program event.

use std::cell::Cell;

use oxc_ast::ast::Program;
use oxc_ast::AstKind;
use oxc_ast_visit::Visit;
use oxc_semantic::{ScopeId, Semantic};
use oxc_span::SourceType;
use oxc_syntax::scope::ScopeFlags;
use rustc_hash::FxHashMap;
use tracing::debug;

use common::Settings;

use crate::config::LintConfig;
use crate::context::{LintContext, RuleContext};
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::error::LintError;
use crate::registry::{DeprecationNotices, RuleRegistry};
use crate::resolver::ScopeResolver;
use crate::rule::{NodeType, Rule, RuleDescriptor, RuleHandler};

/// A rule activated by configuration
struct ConfiguredRule {
    descriptor: RuleDescriptor,
    severity: DiagnosticSeverity,
    rule: Box<dyn Rule>,
}

/// Configured set of rules, reusable across files
pub struct Linter {
    settings: Settings,
    rules: Vec<ConfiguredRule>,
    errors: Vec<LintError>,
    notices: Vec<String>,
}

impl Linter {
    pub fn new(config: &LintConfig) -> Self {
        let mut notices = DeprecationNotices::new();
        Self::with_notices(config, &mut notices)
    }

    /// Configure against the builtin registry, announcing deprecated rules through `notices`
    pub fn with_notices(config: &LintConfig, notices: &mut DeprecationNotices) -> Self {
        Self::from_registry(RuleRegistry::builtin(), config, notices)
    }

    pub fn from_registry(
        registry: &RuleRegistry,
        config: &LintConfig,
        notices: &mut DeprecationNotices,
    ) -> Self {
        let mut rules = Vec::new();
        let mut errors = Vec::new();
        let mut session_notices = Vec::new();

        for (name, entry) in config.rule_entries() {
            let Some(descriptor) = registry.get(name) else {
                errors.push(LintError::UnknownRule(name.to_string()));
                continue;
            };
            let Some(severity) = entry.severity.diagnostic_severity() else {
                continue;
            };
            match descriptor.configure(&entry.options) {
                Ok(rule) => {
                    if let Some(notice) = notices.notify(descriptor) {
                        session_notices.push(notice.to_string());
                    }
                    rules.push(ConfiguredRule {
                        descriptor: *descriptor,
                        severity,
                        rule,
                    });
                }
                Err(err) => errors.push(err),
            }
        }
        rules.sort_by_key(|r| registry.index_of(r.descriptor.name));

        Self {
            settings: config.settings().clone(),
            rules,
            errors,
            notices: session_notices,
        }
    }

    /// Configuration errors; the affected rules are not active
    pub fn errors(&self) -> &[LintError] {
        &self.errors
    }

    /// Deprecation notices emitted while configuring
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Names of the active rules, in dispatch order
    pub fn active_rules(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.descriptor.name)
    }

    /// Run one file-analysis session
    pub fn run<'a>(
        &self,
        source_text: &'a str,
        source_type: SourceType,
        semantic: &'a Semantic<'a>,
        program: &Program<'a>,
    ) -> LintResult {
        let resolver = ScopeResolver::new(semantic, program);
        let ctx = LintContext::new(source_text, source_type, self.settings.clone(), resolver);
        let runner = LintRunner::new(ctx, self.start_handlers());
        let mut result = runner.run(program);
        result.notices = self.notices.clone();
        result
    }

    fn start_handlers<'a>(&self) -> Vec<ActiveHandler<'a, '_>> {
        self.rules
            .iter()
            .map(|configured| ActiveHandler {
                descriptor: &configured.descriptor,
                severity: configured.severity,
                handler: configured.rule.start(&self.settings),
            })
            .collect()
    }
}

/// A rule's per-file handler
pub struct ActiveHandler<'a, 'r> {
    descriptor: &'r RuleDescriptor,
    severity: DiagnosticSeverity,
    handler: Box<dyn RuleHandler<'a> + 'a>,
}

/// One file-analysis session
pub struct LintRunner<'a, 'r> {
    ctx: LintContext<'a>,
    handlers: Vec<ActiveHandler<'a, 'r>>,
    dispatch: FxHashMap<NodeType, Vec<usize>>,
    ancestors: Vec<AstKind<'a>>,
    scopes: Vec<ScopeId>,
}

impl<'a, 'r> LintRunner<'a, 'r> {
    pub fn new(ctx: LintContext<'a>, handlers: Vec<ActiveHandler<'a, 'r>>) -> Self {
        let mut dispatch: FxHashMap<NodeType, Vec<usize>> = FxHashMap::default();
        for (index, active) in handlers.iter().enumerate() {
            for node_type in active.descriptor.node_types {
                dispatch.entry(*node_type).or_default().push(index);
            }
        }
        let root = ctx.resolver().root_scope();
        Self {
            ctx,
            handlers,
            dispatch,
            ancestors: Vec::new(),
            scopes: vec![root],
        }
    }

    fn current_scope(&self) -> ScopeId {
        self.scopes
            .last()
            .copied()
            .unwrap_or_else(|| self.ctx.resolver().root_scope())
    }

    /// Walk the program and collect the diagnostics of every handler
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        debug!(rules = self.handlers.len(), "starting lint session");
        self.visit_program(program);

        let root = self.ctx.resolver().root_scope();
        for active in self.handlers.iter_mut().filter(|a| a.descriptor.runs_on_exit) {
            let mut rule_ctx =
                RuleContext::new(&mut self.ctx, active.descriptor, active.severity, &[], root);
            active.handler.exit_program(&mut rule_ctx);
        }

        let mut diagnostics = self.ctx.into_diagnostics();
        diagnostics.sort_by_key(|d| (d.start, d.end));
        debug!(count = diagnostics.len(), "finished lint session");
        LintResult {
            diagnostics,
            notices: Vec::new(),
        }
    }

    fn dispatch(&mut self, node_type: NodeType, kind: AstKind<'a>) {
        let Some(indices) = self.dispatch.get(&node_type) else {
            return;
        };
        let scope_id = self.scopes.last().copied().unwrap_or_else(|| self.ctx.resolver().root_scope());
        for &index in indices {
            let active = &mut self.handlers[index];
            let mut rule_ctx = RuleContext::new(
                &mut self.ctx,
                active.descriptor,
                active.severity,
                &self.ancestors,
                scope_id,
            );
            active.handler.enter(kind, &mut rule_ctx);
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a, '_> {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        if let Some(node_type) = NodeType::of(&kind) {
            self.dispatch(node_type, kind);
        }
        self.ancestors.push(kind);
    }

    fn leave_node(&mut self, _kind: AstKind<'a>) {
        self.ancestors.pop();
    }

    fn enter_scope(&mut self, _flags: ScopeFlags, scope_id: &Cell<Option<ScopeId>>) {
        let scope = scope_id.get().unwrap_or_else(|| self.current_scope());
        self.scopes.push(scope);
    }

    fn leave_scope(&mut self) {
        self.scopes.pop();
    }
}

/// Result of running the linter
#[derive(Debug, Default)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Deprecation notices for rules activated by the configuration
    pub notices: Vec<String>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count()
    }

    pub fn fixable_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.fix.is_some()).count()
    }

    /// Diagnostics produced by one rule
    pub fn by_rule<'s>(&'s self, rule: &'s str) -> impl Iterator<Item = &'s Diagnostic> + 's {
        self.diagnostics.iter().filter(move |d| d.rule == rule)
    }
}

/// Convenience function to lint a program with the recommended configuration
pub fn lint<'a>(
    source_text: &'a str,
    semantic: &'a Semantic<'a>,
    program: &Program<'a>,
) -> LintResult {
    let config = LintConfig::recommended();
    Linter::new(&config).run(source_text, SourceType::jsx(), semantic, program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    semantic: &'a Semantic<'a>,
    program: &Program<'a>,
    config: &LintConfig,
) -> LintResult {
    Linter::new(config).run(source_text, source_type, semantic, program)
}
