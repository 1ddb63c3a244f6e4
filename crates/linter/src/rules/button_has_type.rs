//! inferno/button-has-type
//!
//! Forbid `button` elements without an explicit, valid `type` attribute.

use oxc_ast::ast::{Argument, Expression, JSXAttributeValue, JSXExpression};
use oxc_ast::AstKind;
use oxc_span::{GetSpan, Span};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use common::{get_tag_name, static_string, Settings, BUTTON_TYPES};

use crate::error::Result;
use crate::rule::{option_at, NodeType, OptionShape, Rule, RuleHandler};
use crate::utils::{find_property, get_attribute, is_create_element_call};
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

fn allowed() -> bool {
    true
}

/// Which `type` values are allowed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonHasTypeConfig {
    #[serde(default = "allowed")]
    pub button: bool,
    #[serde(default = "allowed")]
    pub submit: bool,
    #[serde(default = "allowed")]
    pub reset: bool,
}

impl Default for ButtonHasTypeConfig {
    fn default() -> Self {
        Self {
            button: true,
            submit: true,
            reset: true,
        }
    }
}

impl ButtonHasTypeConfig {
    fn allows(&self, value: &str) -> bool {
        match value {
            "button" => self.button,
            "submit" => self.submit,
            "reset" => self.reset,
            _ => false,
        }
    }
}

/// button-has-type rule
#[derive(Debug, Clone, Default)]
pub struct ButtonHasType {
    pub config: ButtonHasTypeConfig,
}

impl RuleMeta for ButtonHasType {
    const NAME: &'static str = "button-has-type";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
    const MESSAGES: &'static [(&'static str, &'static str)] = &[
        ("missingType", "Missing an explicit type attribute for button"),
        (
            "complexType",
            "The button type attribute must be specified by a static string or a trivial ternary expression",
        ),
        ("invalidValue", "\"{{value}}\" is an invalid value for button type attribute"),
        ("forbiddenValue", "\"{{value}}\" is an invalid value for button type attribute"),
    ];
    const SCHEMA: &'static [OptionShape] = &[OptionShape::Object(&["button", "submit", "reset"])];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::JsxElement, NodeType::CallExpression];
}

impl Rule for ButtonHasType {
    fn from_options(options: &[Value]) -> Result<Self> {
        Ok(Self {
            config: option_at(Self::NAME, options, 0)?,
        })
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(self.clone())
    }
}

impl ButtonHasType {
    fn check_value(&self, span: Span, value: &str, ctx: &mut RuleContext) {
        let message_id = if !BUTTON_TYPES.contains(value) {
            "invalidValue"
        } else if !self.config.allows(value) {
            "forbiddenValue"
        } else {
            return;
        };
        ctx.report(Report::new(message_id, span).with_data("value", value));
    }

    /// Literal values are checked, ternaries branch by branch, anything else is too complex
    fn check_expression(&self, span: Span, expr: &Expression, ctx: &mut RuleContext) {
        if let Some(value) = static_string(expr) {
            self.check_value(span, value, ctx);
            return;
        }
        match expr.without_parentheses() {
            Expression::ConditionalExpression(cond) => {
                self.check_expression(span, &cond.consequent, ctx);
                self.check_expression(span, &cond.alternate, ctx);
            }
            Expression::BooleanLiteral(_)
            | Expression::NumericLiteral(_)
            | Expression::NullLiteral(_) => {
                let value = ctx.span_text(expr.without_parentheses().span());
                self.check_value(span, value, ctx);
            }
            other => ctx.report(Report::new("complexType", other.span())),
        }
    }
}

impl<'a> RuleHandler<'a> for ButtonHasType {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        match kind {
            AstKind::JSXElement(element) => {
                if get_tag_name(element) != "button" {
                    return;
                }
                let Some(type_attr) = get_attribute(&element.opening_element, "type") else {
                    ctx.report(Report::new("missingType", element.span));
                    return;
                };
                match &type_attr.value {
                    None => self.check_value(element.span, "true", ctx),
                    Some(JSXAttributeValue::StringLiteral(lit)) => {
                        self.check_value(element.span, lit.value.as_str(), ctx);
                    }
                    Some(JSXAttributeValue::ExpressionContainer(container)) => {
                        match &container.expression {
                            JSXExpression::EmptyExpression(empty) => {
                                ctx.report(Report::new("complexType", empty.span));
                            }
                            expr => {
                                if let Some(expr) = expr.as_expression() {
                                    self.check_expression(element.span, expr, ctx);
                                }
                            }
                        }
                    }
                    Some(other) => ctx.report(Report::new("complexType", other.span())),
                }
            }
            AstKind::CallExpression(call) => {
                if !is_create_element_call(call, ctx) {
                    return;
                }
                let is_button = matches!(
                    call.arguments.first(),
                    Some(Argument::StringLiteral(tag)) if tag.value == "button"
                );
                if !is_button {
                    return;
                }
                let Some(Argument::ObjectExpression(props)) = call.arguments.get(1) else {
                    ctx.report(Report::new("missingType", call.span));
                    return;
                };
                match find_property(props, "type") {
                    Some(prop) => self.check_expression(call.span, &prop.value, ctx),
                    None => ctx.report(Report::new("missingType", call.span)),
                }
            }
            _ => {}
        }
    }
}
