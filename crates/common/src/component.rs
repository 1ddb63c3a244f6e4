//! Component detection
//!
//! Best-effort static shape matching: ES6 classes and `createClass({...})`
//! factories. No type inference.

use std::borrow::Cow;

use oxc_ast::ast::{
    Argument, CallExpression, Class, ClassElement, Expression, FunctionBody, MethodDefinition,
    ObjectExpression, PropertyKey, Statement,
};

use crate::check::static_member;
use crate::constants::COMPONENT_SUPERCLASSES;
use crate::options::Settings;

/// Check if a class is a component class
///
/// A class counts when it extends `Component`/`PureComponent` (bare or
/// pragma-qualified), or when it extends anything and declares `render`.
pub fn is_component_class(class: &Class, settings: &Settings) -> bool {
    let Some(super_class) = &class.super_class else {
        return false;
    };
    let extends_component = match super_class.without_parentheses() {
        Expression::Identifier(id) => COMPONENT_SUPERCLASSES.contains(id.name.as_str()),
        expr => static_member(expr).is_some_and(|(object, property)| {
            object == settings.pragma && COMPONENT_SUPERCLASSES.contains(property)
        }),
    };
    extends_component || render_method(class).is_some()
}

/// The instance `render` method of a class, if any
pub fn render_method<'b, 'a>(class: &'b Class<'a>) -> Option<&'b MethodDefinition<'a>> {
    class.body.body.iter().find_map(|element| match element {
        ClassElement::MethodDefinition(method)
            if !method.r#static && property_key_name(&method.key).as_deref() == Some("render") =>
        {
            Some(&**method)
        }
        _ => None,
    })
}

/// Check if a call is `createClass({...})` or `Pragma.createClass({...})` and return the spec object
pub fn create_class_object<'b, 'a>(
    call: &'b CallExpression<'a>,
    settings: &Settings,
) -> Option<&'b ObjectExpression<'a>> {
    let is_factory = match call.callee.without_parentheses() {
        Expression::Identifier(id) => id.name == settings.create_class,
        callee => static_member(callee).is_some_and(|(object, property)| {
            object == settings.pragma && property == settings.create_class
        }),
    };
    if !is_factory {
        return None;
    }
    match call.arguments.first() {
        Some(Argument::ObjectExpression(object)) => Some(&**object),
        _ => None,
    }
}

/// Statically known name of a property key (`foo`, `'foo'`, `#foo`)
pub fn property_key_name<'b>(key: &'b PropertyKey<'_>) -> Option<Cow<'b, str>> {
    match key {
        PropertyKey::PrivateIdentifier(id) => Some(Cow::Owned(format!("#{}", id.name))),
        _ => key.static_name(),
    }
}

/// Check if a function body can return JSX
///
/// Looks at `return` statements reachable without entering nested functions,
/// and at the expression of an arrow's concise body.
pub fn returns_jsx(body: &FunctionBody, concise: bool) -> bool {
    if concise {
        return match body.statements.first() {
            Some(Statement::ExpressionStatement(stmt)) => is_jsx_value(&stmt.expression),
            _ => false,
        };
    }
    body.statements.iter().any(statement_returns_jsx)
}

fn statement_returns_jsx(stmt: &Statement) -> bool {
    match stmt {
        Statement::ReturnStatement(ret) => ret.argument.as_ref().is_some_and(is_jsx_value),
        Statement::BlockStatement(block) => block.body.iter().any(statement_returns_jsx),
        Statement::IfStatement(stmt) => {
            statement_returns_jsx(&stmt.consequent)
                || stmt.alternate.as_ref().is_some_and(statement_returns_jsx)
        }
        _ => false,
    }
}

fn is_jsx_value(expr: &Expression) -> bool {
    match expr.without_parentheses() {
        Expression::JSXElement(_) | Expression::JSXFragment(_) => true,
        Expression::ConditionalExpression(cond) => {
            is_jsx_value(&cond.consequent) || is_jsx_value(&cond.alternate)
        }
        Expression::LogicalExpression(logical) => is_jsx_value(&logical.right),
        _ => false,
    }
}
