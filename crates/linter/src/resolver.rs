//! Scope and binding resolution
//!
//! Local-file only: names are looked up through the scope chain built by
//! `oxc_semantic`, and import bindings are described from the file's own
//! import statements without following them.

use std::cell::RefCell;

use oxc_ast::ast::{
    Class, Expression, Function, ImportDeclarationSpecifier, Program, Statement,
    VariableDeclarator,
};
use oxc_ast::AstKind;
use oxc_semantic::{ScopeId, Semantic, SymbolId};
use rustc_hash::FxHashMap;

/// Name imported by an import specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportedName<'a> {
    /// `import { Fragment as F } from '...'`
    Named(&'a str),
    /// `import Inferno from '...'`
    Default,
    /// `import * as Inferno from '...'`
    Namespace,
}

/// A local name bound by an import statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportBinding<'a> {
    pub source: &'a str,
    pub imported: ImportedName<'a>,
    pub local: &'a str,
}

impl ImportBinding<'_> {
    /// Check if this binds member `name` of module `source`
    pub fn is_member_of(&self, source: &str, name: &str) -> bool {
        self.source == source && self.imported == ImportedName::Named(name)
    }
}

/// Declaration a name resolves to
#[derive(Debug, Clone, Copy)]
pub enum Binding<'a> {
    Variable {
        declarator: &'a VariableDeclarator<'a>,
        init: Option<&'a Expression<'a>>,
    },
    Import(ImportBinding<'a>),
    Class(&'a Class<'a>),
    Function(&'a Function<'a>),
    Parameter,
    Other,
}

impl<'a> Binding<'a> {
    /// Initializer of a variable binding
    pub fn init(&self) -> Option<&'a Expression<'a>> {
        match *self {
            Self::Variable { init, .. } => init,
            _ => None,
        }
    }

    /// The class a binding names, directly or through `const X = class ...`
    pub fn class(&self) -> Option<&'a Class<'a>> {
        match *self {
            Self::Class(class) => Some(class),
            Self::Variable {
                init: Some(init), ..
            } => match init.without_parentheses() {
                Expression::ClassExpression(class) => Some(&**class),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Per-session resolver with a lazily filled lookup cache
pub struct ScopeResolver<'a> {
    semantic: &'a Semantic<'a>,
    imports: FxHashMap<&'a str, ImportBinding<'a>>,
    cache: RefCell<FxHashMap<(ScopeId, String), Option<SymbolId>>>,
}

impl<'a> ScopeResolver<'a> {
    pub fn new(semantic: &'a Semantic<'a>, program: &Program<'a>) -> Self {
        let mut resolver = Self {
            semantic,
            imports: FxHashMap::default(),
            cache: RefCell::new(FxHashMap::default()),
        };
        resolver.collect_imports(program);
        resolver
    }

    fn collect_imports(&mut self, program: &Program<'a>) {
        for stmt in &program.body {
            let Statement::ImportDeclaration(import) = stmt else {
                continue;
            };
            let Some(specifiers) = &import.specifiers else {
                continue;
            };
            let source = import.source.value.as_str();
            for specifier in specifiers {
                let (imported, local) = match specifier {
                    ImportDeclarationSpecifier::ImportSpecifier(spec) => (
                        ImportedName::Named(spec.imported.name().as_str()),
                        spec.local.name.as_str(),
                    ),
                    ImportDeclarationSpecifier::ImportDefaultSpecifier(spec) => {
                        (ImportedName::Default, spec.local.name.as_str())
                    }
                    ImportDeclarationSpecifier::ImportNamespaceSpecifier(spec) => {
                        (ImportedName::Namespace, spec.local.name.as_str())
                    }
                };
                self.imports.insert(
                    local,
                    ImportBinding {
                        source,
                        imported,
                        local,
                    },
                );
            }
        }
    }

    pub fn semantic(&self) -> &'a Semantic<'a> {
        self.semantic
    }

    pub fn root_scope(&self) -> ScopeId {
        self.semantic.scoping().root_scope_id()
    }

    /// Import bindings of the file, keyed by local name
    pub fn imports(&self) -> impl Iterator<Item = &ImportBinding<'a>> {
        self.imports.values()
    }

    /// Nearest symbol named `name` visible from `scope`
    pub fn find_symbol(&self, name: &str, scope: ScopeId) -> Option<SymbolId> {
        let key = (scope, name.to_string());
        if let Some(hit) = self.cache.borrow().get(&key) {
            return *hit;
        }
        let symbol = self.semantic.scoping().find_binding(scope, name);
        self.cache.borrow_mut().insert(key, symbol);
        symbol
    }

    /// Resolve `name` from `scope` to its declaration, `None` when unknown
    pub fn resolve(&self, name: &str, scope: ScopeId) -> Option<Binding<'a>> {
        let symbol = self.find_symbol(name, scope)?;
        let node_id = self.semantic.scoping().symbol_declaration(symbol);
        let binding = match self.semantic.nodes().get_node(node_id).kind() {
            AstKind::VariableDeclarator(declarator) => Binding::Variable {
                declarator,
                init: declarator.init.as_ref(),
            },
            AstKind::ImportSpecifier(_)
            | AstKind::ImportDefaultSpecifier(_)
            | AstKind::ImportNamespaceSpecifier(_) => match self.imports.get(name) {
                Some(import) => Binding::Import(*import),
                None => Binding::Other,
            },
            AstKind::Class(class) => Binding::Class(class),
            AstKind::Function(function) => Binding::Function(function),
            AstKind::FormalParameter(_) => Binding::Parameter,
            _ => Binding::Other,
        };
        Some(binding)
    }
}
