//! Utility functions for Inferno linting rules
//!
//! Unlike the pure predicates in `common`, some of these consult the current
//! scope through the rule context.

use std::borrow::Cow;

use oxc_ast::ast::{
    BindingPattern, CallExpression, Expression, JSXAttribute, JSXAttributeItem, JSXAttributeName,
    JSXChild, JSXElementName, JSXOpeningElement, ObjectExpression, ObjectPropertyKind,
    ObjectProperty,
};

use common::{element_type, is_pragma_member, is_require_of, property_key_name, Settings};

use crate::context::RuleContext;
use crate::resolver::{Binding, ImportedName};

/// Name of a JSX attribute (`type`, `xlink:href`)
pub fn attribute_name(attr: &JSXAttribute) -> String {
    match &attr.name {
        JSXAttributeName::Identifier(ident) => ident.name.to_string(),
        JSXAttributeName::NamespacedName(ns) => format!("{}:{}", ns.namespace.name, ns.name.name),
    }
}

/// Get an attribute by name from a JSX opening element
pub fn get_attribute<'b, 'a>(
    element: &'b JSXOpeningElement<'a>,
    name: &str,
) -> Option<&'b JSXAttribute<'a>> {
    element.attributes.iter().find_map(|attr| match attr {
        JSXAttributeItem::Attribute(jsx_attr) => match &jsx_attr.name {
            JSXAttributeName::Identifier(ident) if ident.name == name => Some(&**jsx_attr),
            _ => None,
        },
        JSXAttributeItem::SpreadAttribute(_) => None,
    })
}

/// Check if children is empty or only whitespace with newlines
pub fn children_is_empty_or_multiline_whitespace(children: &[JSXChild]) -> bool {
    match children {
        [] => true,
        [JSXChild::Text(text)] => {
            text.value.contains('\n') && text.value.chars().all(char::is_whitespace)
        }
        _ => false,
    }
}

/// Find a non-computed property by key name in an object literal
pub fn find_property<'b, 'a>(
    object: &'b ObjectExpression<'a>,
    name: &str,
) -> Option<&'b ObjectProperty<'a>> {
    object.properties.iter().find_map(|prop| match prop {
        ObjectPropertyKind::ObjectProperty(prop)
            if !prop.computed && property_key_name(&prop.key).as_deref() == Some(name) =>
        {
            Some(&**prop)
        }
        _ => None,
    })
}

/// `Pragma.Fragment` spelled as a JSX member name
fn is_pragma_fragment_name(name: &JSXElementName, settings: &Settings) -> bool {
    matches!(name, JSXElementName::MemberExpression(_))
        && element_type(name) == settings.fragment_member()
}

/// Check if a local name is bound to the configured fragment
///
/// Accepted bindings: an import of `Fragment` from the pragma module,
/// `const F = Pragma.Fragment`, and `const { Fragment } = Pragma` (or
/// `= require('<module>')`). Unresolved names are not fragments.
pub fn refers_to_fragment(name: &str, ctx: &RuleContext) -> bool {
    let settings = ctx.settings();
    match ctx.resolve(name) {
        Some(Binding::Import(import)) => {
            import.source == settings.module
                && import.imported == ImportedName::Named(settings.fragment.as_str())
        }
        Some(Binding::Variable { declarator, init: Some(init) }) => {
            if is_pragma_member(init, settings, &settings.fragment) {
                return true;
            }
            let from_pragma = matches!(
                init.without_parentheses(),
                Expression::Identifier(id) if id.name == settings.pragma
            ) || is_require_of(init, &settings.module);
            from_pragma
                && destructured_key(&declarator.id, name).is_some_and(|key| key == settings.fragment)
        }
        _ => false,
    }
}

/// Key bound to `local` in an object pattern (`{ Fragment: F }`, `{ 'Fragment': F = X }`)
fn destructured_key<'p>(pattern: &'p BindingPattern, local: &str) -> Option<Cow<'p, str>> {
    let BindingPattern::ObjectPattern(object) = pattern else {
        return None;
    };
    object.properties.iter().find_map(|prop| {
        let target = match &prop.value {
            BindingPattern::AssignmentPattern(assign) => &assign.left,
            value => value,
        };
        match target {
            BindingPattern::BindingIdentifier(id) if id.name == local => property_key_name(&prop.key),
            _ => None,
        }
    })
}

/// Check if an element name refers to the configured fragment
pub fn is_fragment_name(name: &JSXElementName, ctx: &RuleContext) -> bool {
    match name {
        JSXElementName::MemberExpression(_) => is_pragma_fragment_name(name, ctx.settings()),
        JSXElementName::IdentifierReference(ident) => refers_to_fragment(&ident.name, ctx),
        JSXElementName::Identifier(ident) => refers_to_fragment(&ident.name, ctx),
        _ => false,
    }
}

/// Check if an opening element is a long-form fragment
pub fn is_fragment_element(opening: &JSXOpeningElement, ctx: &RuleContext) -> bool {
    is_fragment_name(&opening.name, ctx)
}

/// `Pragma.createElement(...)`, or a local `createElement` taken from the pragma
pub fn is_create_element_call(call: &CallExpression, ctx: &RuleContext) -> bool {
    let settings = ctx.settings();
    match call.callee.without_parentheses() {
        Expression::Identifier(id) if id.name == "createElement" => match ctx.resolve(&id.name) {
            Some(Binding::Import(import)) => import.is_member_of(&settings.module, "createElement"),
            Some(Binding::Variable { init: Some(init), .. }) => matches!(
                init.without_parentheses(),
                Expression::Identifier(object) if object.name == settings.pragma
            ),
            _ => false,
        },
        callee => is_pragma_member(callee, settings, "createElement"),
    }
}
