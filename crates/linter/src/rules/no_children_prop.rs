//! inferno/no-children-prop
//!
//! Disallow passing children as props.

use oxc_ast::ast::{Argument, JSXAttributeItem};
use oxc_ast::AstKind;
use serde_json::Value;

use common::Settings;

use crate::error::Result;
use crate::rule::{NodeType, Rule, RuleHandler};
use crate::utils::{attribute_name, find_property, is_create_element_call};
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

/// no-children-prop rule
#[derive(Debug, Clone, Default)]
pub struct NoChildrenProp;

impl RuleMeta for NoChildrenProp {
    const NAME: &'static str = "no-children-prop";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
    const RECOMMENDED: bool = true;
    const MESSAGES: &'static [(&'static str, &'static str)] = &[
        (
            "nestChildren",
            "Do not pass children as props. Instead, nest children between the opening and closing tags.",
        ),
        (
            "passChildrenAsArgs",
            "Do not pass children as props. Instead, pass them as additional arguments to {{pragma}}.createElement.",
        ),
    ];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::JsxOpeningElement, NodeType::CallExpression];
}

impl Rule for NoChildrenProp {
    fn from_options(_options: &[Value]) -> Result<Self> {
        Ok(Self)
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(Self)
    }
}

impl<'a> RuleHandler<'a> for NoChildrenProp {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        match kind {
            AstKind::JSXOpeningElement(opening) => {
                for attr in &opening.attributes {
                    if let JSXAttributeItem::Attribute(jsx_attr) = attr {
                        if attribute_name(jsx_attr) == "children" {
                            ctx.report(Report::new("nestChildren", jsx_attr.span));
                        }
                    }
                }
            }
            AstKind::CallExpression(call) => {
                if !is_create_element_call(call, ctx) {
                    return;
                }
                let Some(Argument::ObjectExpression(props)) = call.arguments.get(1) else {
                    return;
                };
                if find_property(props, "children").is_some() {
                    let pragma = ctx.settings().pragma.clone();
                    ctx.report(Report::new("passChildrenAsArgs", call.span).with_data("pragma", pragma));
                }
            }
            _ => {}
        }
    }
}
