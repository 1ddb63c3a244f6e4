//! Rule contract
//!
//! A rule is described statically through [`RuleMeta`], configured once per
//! linter through [`Rule::from_options`], and instantiated once per file as a
//! [`RuleHandler`] that receives the node types it subscribed to.

use std::fmt;

use oxc_ast::AstKind;
use serde_json::Value;

use common::Settings;

use crate::context::RuleContext;
use crate::error::{LintError, Result};
use crate::{RuleCategory, RuleMeta, PLUGIN_NAME};

/// Node tags a rule can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Program,
    ImportDeclaration,
    VariableDeclarator,
    Class,
    MethodDefinition,
    PropertyDefinition,
    Function,
    ArrowFunction,
    CallExpression,
    AssignmentExpression,
    ObjectExpression,
    ObjectProperty,
    JsxElement,
    JsxOpeningElement,
    JsxClosingElement,
    JsxFragment,
}

impl NodeType {
    pub fn of(kind: &AstKind) -> Option<Self> {
        let node_type = match kind {
            AstKind::Program(_) => Self::Program,
            AstKind::ImportDeclaration(_) => Self::ImportDeclaration,
            AstKind::VariableDeclarator(_) => Self::VariableDeclarator,
            AstKind::Class(_) => Self::Class,
            AstKind::MethodDefinition(_) => Self::MethodDefinition,
            AstKind::PropertyDefinition(_) => Self::PropertyDefinition,
            AstKind::Function(_) => Self::Function,
            AstKind::ArrowFunctionExpression(_) => Self::ArrowFunction,
            AstKind::CallExpression(_) => Self::CallExpression,
            AstKind::AssignmentExpression(_) => Self::AssignmentExpression,
            AstKind::ObjectExpression(_) => Self::ObjectExpression,
            AstKind::ObjectProperty(_) => Self::ObjectProperty,
            AstKind::JSXElement(_) => Self::JsxElement,
            AstKind::JSXOpeningElement(_) => Self::JsxOpeningElement,
            AstKind::JSXClosingElement(_) => Self::JsxClosingElement,
            AstKind::JSXFragment(_) => Self::JsxFragment,
            _ => return None,
        };
        Some(node_type)
    }
}

/// Accepted shape of one positional rule option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionShape {
    /// One of the listed strings
    Enum(&'static [&'static str]),
    /// An object; when the key list is non-empty, only those keys are allowed
    Object(&'static [&'static str]),
}

impl OptionShape {
    fn check(&self, value: &Value) -> std::result::Result<(), String> {
        match (self, value) {
            (Self::Enum(allowed), Value::String(s)) if allowed.contains(&s.as_str()) => Ok(()),
            (Self::Enum(allowed), other) => {
                Err(format!("expected one of {:?}, found {}", allowed, other))
            }
            (Self::Object(keys), Value::Object(map)) => {
                match map.keys().find(|k| !keys.is_empty() && !keys.contains(&k.as_str())) {
                    Some(unknown) => Err(format!("unexpected property `{}`", unknown)),
                    None => Ok(()),
                }
            }
            (Self::Object(_), other) => Err(format!("expected an object, found {}", other)),
        }
    }
}

/// Validate positional options against a rule's schema
pub fn validate_options(rule: &str, schema: &[OptionShape], options: &[Value]) -> Result<()> {
    if options.len() > schema.len() {
        return Err(LintError::invalid_options(
            rule,
            format!("expected at most {} option(s), found {}", schema.len(), options.len()),
        ));
    }
    for (shape, value) in schema.iter().zip(options) {
        shape
            .check(value)
            .map_err(|reason| LintError::invalid_options(rule, reason))?;
    }
    Ok(())
}

/// Deserialize one positional option, falling back to the default when absent
pub fn option_at<T>(rule: &str, options: &[Value], index: usize) -> Result<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    match options.get(index) {
        Some(value) => T::deserialize(value).map_err(|err| LintError::invalid_options(rule, err)),
        None => Ok(T::default()),
    }
}

/// A configured rule
pub trait Rule {
    /// Build the rule from its (already schema-checked) options
    fn from_options(options: &[Value]) -> Result<Self>
    where
        Self: Sized;

    /// Create the per-file handler
    fn start<'a>(&self, settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a>;
}

/// Per-file rule state receiving traversal events
pub trait RuleHandler<'a> {
    /// Called when entering a node of a subscribed type
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>);

    /// Called once after the whole program has been visited
    fn exit_program(&mut self, _ctx: &mut RuleContext<'a, '_>) {}
}

fn configure<R: Rule + 'static>(options: &[Value]) -> Result<Box<dyn Rule>> {
    Ok(Box::new(R::from_options(options)?))
}

/// Static description of a rule, as registered
#[derive(Clone, Copy)]
pub struct RuleDescriptor {
    pub name: &'static str,
    pub category: RuleCategory,
    pub recommended: bool,
    pub fixable: bool,
    pub deprecated: bool,
    pub deprecation_hint: &'static str,
    pub messages: &'static [(&'static str, &'static str)],
    pub schema: &'static [OptionShape],
    pub node_types: &'static [NodeType],
    pub runs_on_exit: bool,
    configure: fn(&[Value]) -> Result<Box<dyn Rule>>,
}

impl RuleDescriptor {
    pub fn of<R: Rule + RuleMeta + 'static>() -> Self {
        Self {
            name: R::NAME,
            category: R::CATEGORY,
            recommended: R::RECOMMENDED,
            fixable: R::FIXABLE,
            deprecated: R::DEPRECATED,
            deprecation_hint: R::DEPRECATION_HINT,
            messages: R::MESSAGES,
            schema: R::SCHEMA,
            node_types: R::NODE_TYPES,
            runs_on_exit: R::RUNS_ON_EXIT,
            configure: configure::<R>,
        }
    }

    /// Prefixed id used in configuration files (`inferno/<name>`)
    pub fn id(&self) -> String {
        format!("{}/{}", PLUGIN_NAME, self.name)
    }

    pub fn docs_url(&self) -> String {
        crate::docs_url(self.name)
    }

    /// Message template for an id
    pub fn message(&self, message_id: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(id, _)| *id == message_id)
            .map(|(_, template)| *template)
    }

    /// Validate options and build the configured rule
    pub fn configure(&self, options: &[Value]) -> Result<Box<dyn Rule>> {
        validate_options(self.name, self.schema, options)?;
        (self.configure)(options)
    }
}

impl fmt::Debug for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("recommended", &self.recommended)
            .field("fixable", &self.fixable)
            .field("deprecated", &self.deprecated)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: &[OptionShape] = &[
        OptionShape::Enum(&["always", "never"]),
        OptionShape::Object(&["ignoreCase"]),
    ];

    #[test]
    fn test_validate_accepts_matching_options() {
        assert!(validate_options("r", SCHEMA, &[]).is_ok());
        assert!(validate_options("r", SCHEMA, &[json!("never"), json!({"ignoreCase": true})]).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_enum() {
        let err = validate_options("r", SCHEMA, &[json!("sometimes")]).unwrap_err();
        assert!(matches!(err, LintError::InvalidOptions { ref rule, .. } if rule == "r"));
    }

    #[test]
    fn test_validate_rejects_unknown_key_and_extra_options() {
        assert!(validate_options("r", SCHEMA, &[json!("always"), json!({"other": 1})]).is_err());
        assert!(validate_options("r", SCHEMA, &[json!("always"), json!({}), json!(1)]).is_err());
    }

    #[test]
    fn test_option_at_default() {
        let value: String = option_at("r", &[], 0).unwrap();
        assert_eq!(value, "");
    }
}
