//! Check functions for JSX and expression nodes
//!
//! Everything here is a pure function of the node (plus the pragma settings
//! where noted). Unrecognized shapes answer `false`/`None`.

use oxc_ast::ast::{
    Argument, CallExpression, Expression, JSXElement, JSXElementName, JSXMemberExpression,
    JSXMemberExpressionObject, JSXOpeningElement,
};

use crate::options::Settings;

/// Check if a tag name is a DOM primitive (`div`, `button`, `my-element`)
pub fn is_dom_tag(tag: &str) -> bool {
    tag.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}

/// Check if an opening element renders a DOM primitive rather than a user component
pub fn is_dom_component(opening: &JSXOpeningElement) -> bool {
    match &opening.name {
        JSXElementName::Identifier(id) => is_dom_tag(&id.name),
        JSXElementName::IdentifierReference(id) => is_dom_tag(&id.name),
        JSXElementName::NamespacedName(ns) => is_dom_tag(&ns.namespace.name),
        JSXElementName::MemberExpression(_) | JSXElementName::ThisExpression(_) => false,
    }
}

/// Get the tag name from a JSX element
pub fn get_tag_name(element: &JSXElement) -> String {
    element_type(&element.opening_element.name)
}

/// Get the source spelling of a JSX element name (`div`, `Foo.Bar`, `svg:path`)
pub fn element_type(name: &JSXElementName) -> String {
    match name {
        JSXElementName::Identifier(id) => id.name.to_string(),
        JSXElementName::IdentifierReference(id) => id.name.to_string(),
        JSXElementName::NamespacedName(ns) => {
            format!("{}:{}", ns.namespace.name, ns.name.name)
        }
        JSXElementName::MemberExpression(member) => get_member_expression_name(member),
        JSXElementName::ThisExpression(_) => "this".to_string(),
    }
}

/// Get the name from a JSX member expression (e.g., Foo.Bar.Baz)
fn get_member_expression_name(member: &JSXMemberExpression) -> String {
    let object = match &member.object {
        JSXMemberExpressionObject::IdentifierReference(id) => id.name.to_string(),
        JSXMemberExpressionObject::MemberExpression(m) => get_member_expression_name(m),
        JSXMemberExpressionObject::ThisExpression(_) => "this".to_string(),
    };
    format!("{}.{}", object, member.property.name)
}

/// Split `object.property` where the object is a plain identifier
pub fn static_member<'b>(expr: &'b Expression<'_>) -> Option<(&'b str, &'b str)> {
    match expr.without_parentheses() {
        Expression::StaticMemberExpression(member) => match &member.object {
            Expression::Identifier(object) => {
                Some((object.name.as_str(), member.property.name.as_str()))
            }
            _ => None,
        },
        _ => None,
    }
}

/// `Pragma.<member>` for the configured pragma
pub fn is_pragma_member(expr: &Expression, settings: &Settings, member: &str) -> bool {
    static_member(expr).is_some_and(|(object, property)| {
        object == settings.pragma && property == member
    })
}

/// `this.<method>(...)`
pub fn is_this_member_call(call: &CallExpression, method: &str) -> bool {
    match call.callee.without_parentheses() {
        Expression::StaticMemberExpression(member) => {
            matches!(member.object, Expression::ThisExpression(_)) && member.property.name == method
        }
        _ => false,
    }
}

/// `require('<module>')`
pub fn is_require_of(expr: &Expression, module: &str) -> bool {
    let Expression::CallExpression(call) = expr.without_parentheses() else {
        return false;
    };
    let Expression::Identifier(callee) = &call.callee else {
        return false;
    };
    if callee.name != "require" || call.arguments.len() != 1 {
        return false;
    }
    matches!(
        &call.arguments[0],
        Argument::StringLiteral(source) if source.value == module
    )
}

/// Statically known string value: a string literal or a template without substitutions
pub fn static_string<'b>(expr: &'b Expression<'_>) -> Option<&'b str> {
    match expr.without_parentheses() {
        Expression::StringLiteral(lit) => Some(lit.value.as_str()),
        Expression::TemplateLiteral(tpl) if tpl.expressions.is_empty() => {
            tpl.quasis.first().map(|q| q.value.raw.as_str())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_ast::ast::Statement;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn with_expression(source: &str, check: impl FnOnce(&Expression)) {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::jsx()).parse();
        assert!(ret.errors.is_empty(), "should parse: {source}");
        match &ret.program.body[0] {
            Statement::ExpressionStatement(stmt) => check(&stmt.expression),
            _ => panic!("expected an expression statement"),
        }
    }

    #[test]
    fn test_dom_component() {
        with_expression("<div />", |expr| {
            let Expression::JSXElement(el) = expr else { panic!() };
            assert!(is_dom_component(&el.opening_element));
        });
        with_expression("<Foo.Bar />", |expr| {
            let Expression::JSXElement(el) = expr else { panic!() };
            assert!(!is_dom_component(&el.opening_element));
            assert_eq!(get_tag_name(el), "Foo.Bar");
        });
    }

    #[test]
    fn test_pragma_member() {
        let settings = Settings::default();
        with_expression("Inferno.render", |expr| {
            assert!(is_pragma_member(expr, &settings, "render"));
            assert!(!is_pragma_member(expr, &settings, "Fragment"));
        });
        with_expression("React.render", |expr| {
            assert!(!is_pragma_member(expr, &settings, "render"));
        });
    }

    #[test]
    fn test_this_member_call() {
        with_expression("this.isMounted()", |expr| {
            let Expression::CallExpression(call) = expr else { panic!() };
            assert!(is_this_member_call(call, "isMounted"));
            assert!(!is_this_member_call(call, "setState"));
        });
    }

    #[test]
    fn test_require_of() {
        with_expression("require('inferno')", |expr| assert!(is_require_of(expr, "inferno")));
        with_expression("require('react')", |expr| assert!(!is_require_of(expr, "inferno")));
    }

    #[test]
    fn test_static_string() {
        with_expression("`submit`", |expr| assert_eq!(static_string(expr), Some("submit")));
        with_expression("'reset'", |expr| assert_eq!(static_string(expr), Some("reset")));
        with_expression("`${a}`", |expr| assert_eq!(static_string(expr), None));
    }
}
