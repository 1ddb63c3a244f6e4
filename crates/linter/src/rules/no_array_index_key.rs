//! inferno/no-array-index-key
//!
//! Disallow the index parameter of an array iteration callback in `key`,
//! whether written as a JSX attribute or in `createElement`/`cloneElement`
//! props.

use oxc_ast::ast::{
    BindingPattern, CallExpression, Expression, JSXAttributeItem, JSXAttributeValue,
    ObjectPropertyKind, StaticMemberExpression,
};
use oxc_ast::AstKind;
use oxc_span::GetSpan;
use serde_json::Value;

use common::{property_key_name, Settings};

use crate::error::Result;
use crate::rule::{NodeType, Rule, RuleHandler};
use crate::utils::attribute_name;
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

/// Iteration methods and the position of the index in their callback
const INDEX_PARAM_POSITIONS: &[(&str, usize)] = &[
    ("every", 1),
    ("filter", 1),
    ("find", 1),
    ("findIndex", 1),
    ("forEach", 1),
    ("map", 1),
    ("reduce", 2),
    ("reduceRight", 2),
    ("some", 1),
];

/// no-array-index-key rule
#[derive(Debug, Clone, Default)]
pub struct NoArrayIndexKey;

impl RuleMeta for NoArrayIndexKey {
    const NAME: &'static str = "no-array-index-key";
    const CATEGORY: RuleCategory = RuleCategory::Pedantic;
    const MESSAGES: &'static [(&'static str, &'static str)] =
        &[("noArrayIndex", "Do not use Array index in keys")];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::JsxOpeningElement, NodeType::CallExpression];
}

impl Rule for NoArrayIndexKey {
    fn from_options(_options: &[Value]) -> Result<Self> {
        Ok(Self)
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(Self)
    }
}

impl<'a> RuleHandler<'a> for NoArrayIndexKey {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        match kind {
            AstKind::JSXOpeningElement(opening) => {
                for attr in &opening.attributes {
                    let JSXAttributeItem::Attribute(attr) = attr else {
                        continue;
                    };
                    if attribute_name(attr) != "key" {
                        continue;
                    }
                    if let Some(JSXAttributeValue::ExpressionContainer(container)) = &attr.value {
                        if let Some(expr) = container.expression.as_expression() {
                            check_key_value(expr, ctx);
                        }
                    }
                }
            }
            AstKind::CallExpression(call) => {
                let Expression::StaticMemberExpression(callee) = call.callee.without_parentheses() else {
                    return;
                };
                if !matches!(callee.property.name.as_str(), "createElement" | "cloneElement") {
                    return;
                }
                let Some(Expression::ObjectExpression(props)) =
                    call.arguments.get(1).and_then(|arg| arg.as_expression())
                else {
                    return;
                };
                for prop in &props.properties {
                    let ObjectPropertyKind::ObjectProperty(prop) = prop else {
                        continue;
                    };
                    if !prop.computed && property_key_name(&prop.key).as_deref() == Some("key") {
                        check_key_value(&prop.value, ctx);
                    }
                }
            }
            _ => {}
        }
    }
}

fn check_key_value(expr: &Expression, ctx: &mut RuleContext) {
    let expr = expr.without_parentheses();
    let identifiers = match expr {
        Expression::Identifier(id) => vec![id.name.as_str()],
        Expression::TemplateLiteral(template) => template
            .expressions
            .iter()
            .filter_map(|e| match e.without_parentheses() {
                Expression::Identifier(id) => Some(id.name.as_str()),
                _ => None,
            })
            .collect(),
        Expression::BinaryExpression(_) => {
            let mut names = Vec::new();
            collect_binary_operands(expr, &mut names);
            names
        }
        _ => return,
    };
    for name in identifiers {
        if is_array_index(name, ctx) {
            ctx.report(Report::new("noArrayIndex", expr.span()));
        }
    }
}

/// Identifiers at the leaves of a `+` chain (`'foo-' + i + '-bar'`)
fn collect_binary_operands<'b>(expr: &'b Expression, names: &mut Vec<&'b str>) {
    match expr.without_parentheses() {
        Expression::Identifier(id) => names.push(id.name.as_str()),
        Expression::BinaryExpression(binary) => {
            collect_binary_operands(&binary.left, names);
            collect_binary_operands(&binary.right, names);
        }
        _ => {}
    }
}

/// Check if `name` is the index parameter of an enclosing iteration callback
fn is_array_index(name: &str, ctx: &RuleContext) -> bool {
    let settings = ctx.settings();
    ctx.ancestors().any(|ancestor| match ancestor {
        AstKind::CallExpression(call) => index_param_name(call, settings) == Some(name),
        _ => false,
    })
}

/// Name of the index parameter when `call` is an iteration with an inline callback
fn index_param_name<'b>(call: &'b CallExpression, settings: &Settings) -> Option<&'b str> {
    let Expression::StaticMemberExpression(callee) = call.callee.without_parentheses() else {
        return None;
    };
    let method = callee.property.name.as_str();
    let position = INDEX_PARAM_POSITIONS
        .iter()
        .find_map(|(name, position)| (*name == method).then_some(*position))?;
    let callback = if is_children_call(callee, settings) {
        call.arguments.get(1)
    } else {
        call.arguments.first()
    }?;
    let params = match callback.as_expression()?.without_parentheses() {
        Expression::ArrowFunctionExpression(arrow) => &arrow.params,
        Expression::FunctionExpression(func) => &func.params,
        _ => return None,
    };
    match &params.items.get(position)?.pattern {
        BindingPattern::BindingIdentifier(id) => Some(id.name.as_str()),
        _ => None,
    }
}

/// `Children.map(children, fn)` and `Pragma.Children.forEach(children, fn)`
fn is_children_call(callee: &StaticMemberExpression, settings: &Settings) -> bool {
    if !matches!(callee.property.name.as_str(), "map" | "forEach") {
        return false;
    }
    match callee.object.without_parentheses() {
        Expression::Identifier(object) => object.name == "Children",
        Expression::StaticMemberExpression(object) => matches!(
            &object.object,
            Expression::Identifier(pragma) if pragma.name == settings.pragma
        ),
        _ => false,
    }
}
