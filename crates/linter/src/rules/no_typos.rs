//! inferno/no-typos
//!
//! Catch casing typos in component static properties, lifecycle methods and
//! `prop-types` validators.

use oxc_ast::ast::{
    AssignmentTarget, CallExpression, ClassElement, Expression, IdentifierName, ObjectPropertyKind,
    PropertyKey,
};
use oxc_ast::AstKind;
use oxc_span::{GetSpan, Span};
use serde_json::Value;

use common::{
    create_class_object, is_component_class, property_key_name, returns_jsx, static_member,
    Settings, LIFECYCLE_METHODS, PROP_TYPES, STATIC_LIFECYCLE_METHODS, TYPO_CHECKED_PROPERTIES,
};

use crate::error::Result;
use crate::resolver::{Binding, ImportedName};
use crate::rule::{NodeType, Rule, RuleHandler};
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

const PROP_TYPES_PACKAGE: &str = "prop-types";

/// Properties whose value is a prop-types declaration object
const VALIDATED_PROPERTIES: &[&str] = &["propTypes", "contextTypes", "childContextTypes"];

/// no-typos rule
#[derive(Debug, Clone, Default)]
pub struct NoTypos;

impl RuleMeta for NoTypos {
    const NAME: &'static str = "no-typos";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
    const MESSAGES: &'static [(&'static str, &'static str)] = &[
        ("typoStaticClassProp", "Typo in static class property declaration"),
        (
            "typoLifecycleMethod",
            "Typo in component lifecycle method declaration: {{actual}} should be {{expected}}",
        ),
        ("staticLifecycleMethod", "Lifecycle method should be static: {{method}}"),
        ("typoPropType", "Typo in declared prop type: {{name}}"),
        ("typoPropTypeChain", "Typo in prop type chain qualifier: {{name}}"),
    ];
    const NODE_TYPES: &'static [NodeType] = &[
        NodeType::Class,
        NodeType::CallExpression,
        NodeType::AssignmentExpression,
    ];
}

impl Rule for NoTypos {
    fn from_options(_options: &[Value]) -> Result<Self> {
        Ok(Self)
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(Self)
    }
}

impl<'a> RuleHandler<'a> for NoTypos {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        match kind {
            AstKind::Class(class) => {
                if !is_component_class(class, ctx.settings()) {
                    return;
                }
                for element in &class.body.body {
                    match element {
                        ClassElement::MethodDefinition(method) => {
                            check_lifecycle_method(&method.key, method.r#static, method.span, ctx);
                        }
                        ClassElement::PropertyDefinition(prop) if prop.r#static => {
                            let Some(name) = property_key_name(&prop.key) else {
                                continue;
                            };
                            check_static_property(&name, prop.key.span(), prop.value.as_ref(), ctx);
                        }
                        _ => {}
                    }
                }
            }
            AstKind::CallExpression(call) => {
                let Some(object) = create_class_object(call, ctx.settings()) else {
                    return;
                };
                for prop in &object.properties {
                    if let ObjectPropertyKind::ObjectProperty(prop) = prop {
                        check_lifecycle_method(&prop.key, false, prop.span, ctx);
                    }
                }
            }
            AstKind::AssignmentExpression(assign) => {
                let AssignmentTarget::StaticMemberExpression(member) = &assign.left else {
                    return;
                };
                let Expression::Identifier(object) = &member.object else {
                    return;
                };
                let property = member.property.name.as_str();
                if !TYPO_CHECKED_PROPERTIES
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(property))
                {
                    return;
                }
                let is_component = ctx
                    .resolve(&object.name)
                    .is_some_and(|binding| is_component_binding(&binding, ctx.settings()));
                if is_component {
                    check_static_property(property, member.property.span, Some(&assign.right), ctx);
                }
            }
            _ => {}
        }
    }
}

/// A class component, or a function that returns JSX
fn is_component_binding(binding: &Binding, settings: &Settings) -> bool {
    if let Some(class) = binding.class() {
        return is_component_class(class, settings);
    }
    match binding {
        Binding::Function(func) => func.body.as_ref().is_some_and(|body| returns_jsx(body, false)),
        Binding::Variable { init: Some(init), .. } => match init.without_parentheses() {
            Expression::ArrowFunctionExpression(arrow) => returns_jsx(&arrow.body, arrow.expression),
            Expression::FunctionExpression(func) => {
                func.body.as_ref().is_some_and(|body| returns_jsx(body, false))
            }
            _ => false,
        },
        _ => false,
    }
}

fn check_static_property(name: &str, span: Span, value: Option<&Expression>, ctx: &mut RuleContext) {
    if VALIDATED_PROPERTIES.contains(&name) {
        if let Some(value) = value {
            check_prop_object(value, ctx);
        }
    }
    let misspelled = TYPO_CHECKED_PROPERTIES
        .iter()
        .any(|expected| expected.eq_ignore_ascii_case(name) && *expected != name);
    if misspelled {
        ctx.report(Report::new("typoStaticClassProp", span));
    }
}

fn check_lifecycle_method(key: &PropertyKey, is_static: bool, span: Span, ctx: &mut RuleContext) {
    let Some(name) = property_key_name(key) else {
        return;
    };
    for method in STATIC_LIFECYCLE_METHODS {
        if !is_static && method.eq_ignore_ascii_case(&name) {
            ctx.report(Report::new("staticLifecycleMethod", span).with_data("method", name.as_ref()));
        }
    }
    for method in LIFECYCLE_METHODS {
        if method.eq_ignore_ascii_case(&name) && *method != name {
            ctx.report(
                Report::new("typoLifecycleMethod", span)
                    .with_data("actual", name.as_ref())
                    .with_data("expected", *method),
            );
        }
    }
}

/// `PropTypes` from `prop-types`, or `Pragma.PropTypes` / `{ PropTypes }` from the runtime
fn is_prop_types_package(expr: &Expression, ctx: &RuleContext) -> bool {
    let settings = ctx.settings();
    match expr.without_parentheses() {
        Expression::Identifier(id) => match ctx.resolve(&id.name) {
            Some(Binding::Import(import)) => {
                (import.source == PROP_TYPES_PACKAGE
                    && matches!(import.imported, ImportedName::Default | ImportedName::Namespace))
                    || import.is_member_of(&settings.module, "PropTypes")
            }
            _ => false,
        },
        expr => static_member(expr).is_some_and(|(object, property)| {
            property == "PropTypes" && is_runtime_namespace(object, ctx)
        }),
    }
}

fn is_runtime_namespace(name: &str, ctx: &RuleContext) -> bool {
    match ctx.resolve(name) {
        Some(Binding::Import(import)) => {
            import.source == ctx.settings().module
                && matches!(import.imported, ImportedName::Default | ImportedName::Namespace)
        }
        None => name == ctx.settings().pragma,
        _ => false,
    }
}

fn check_prop_object(expr: &Expression, ctx: &mut RuleContext) {
    let Expression::ObjectExpression(object) = expr.without_parentheses() else {
        return;
    };
    for prop in &object.properties {
        if let ObjectPropertyKind::ObjectProperty(prop) = prop {
            check_prop(&prop.value, ctx);
        }
    }
}

fn check_prop(expr: &Expression, ctx: &mut RuleContext) {
    match expr.without_parentheses() {
        Expression::StaticMemberExpression(member) => match member.object.without_parentheses() {
            // PropTypes.string.isRequired
            Expression::StaticMemberExpression(inner) if is_prop_types_package(&inner.object, ctx) => {
                check_prop_type(&inner.property, ctx);
                check_qualifier(&member.property, ctx);
            }
            // PropTypes.string
            object if is_prop_types_package(object, ctx) => {
                if member.property.name != "isRequired" {
                    check_prop_type(&member.property, ctx);
                }
            }
            // PropTypes.shape({...}).isRequired
            Expression::CallExpression(call) => {
                check_qualifier(&member.property, ctx);
                check_validator_call(call, ctx);
            }
            _ => {}
        },
        Expression::CallExpression(call) => check_validator_call(call, ctx),
        _ => {}
    }
}

fn check_validator_call(call: &CallExpression, ctx: &mut RuleContext) {
    let Expression::StaticMemberExpression(callee) = call.callee.without_parentheses() else {
        return;
    };
    let first = call.arguments.first().and_then(|arg| arg.as_expression());
    match callee.property.name.as_str() {
        "shape" => {
            if let Some(shape) = first {
                check_prop_object(shape, ctx);
            }
        }
        "oneOfType" => {
            if let Some(Expression::ArrayExpression(array)) = first {
                for element in &array.elements {
                    if let Some(element) = element.as_expression() {
                        check_prop(element, ctx);
                    }
                }
            }
        }
        _ => {}
    }
}

fn check_prop_type(name: &IdentifierName, ctx: &mut RuleContext) {
    if !PROP_TYPES.contains(name.name.as_str()) {
        ctx.report(Report::new("typoPropType", name.span).with_data("name", name.name.as_str()));
    }
}

fn check_qualifier(name: &IdentifierName, ctx: &mut RuleContext) {
    if name.name != "isRequired" {
        ctx.report(Report::new("typoPropTypeChain", name.span).with_data("name", name.name.as_str()));
    }
}
