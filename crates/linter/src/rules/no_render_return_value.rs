//! inferno/no-render-return-value
//!
//! Disallow using the return value of `Inferno.render`.

use oxc_ast::AstKind;
use oxc_span::GetSpan;
use serde_json::Value;

use common::{is_pragma_member, Settings};

use crate::error::Result;
use crate::rule::{NodeType, Rule, RuleHandler};
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

/// no-render-return-value rule
#[derive(Debug, Clone, Default)]
pub struct NoRenderReturnValue;

impl RuleMeta for NoRenderReturnValue {
    const NAME: &'static str = "no-render-return-value";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
    const RECOMMENDED: bool = true;
    const MESSAGES: &'static [(&'static str, &'static str)] =
        &[("noReturnValue", "Do not depend on the return value from {{node}}.render")];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::CallExpression];
}

impl Rule for NoRenderReturnValue {
    fn from_options(_options: &[Value]) -> Result<Self> {
        Ok(Self)
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(Self)
    }
}

/// Check if the value of the current expression is consumed by its parent
fn is_value_used<'a>(mut ancestors: impl Iterator<Item = AstKind<'a>>) -> bool {
    let parent = ancestors.find(|kind| !matches!(kind, AstKind::ParenthesizedExpression(_)));
    match parent {
        Some(
            AstKind::VariableDeclarator(_)
            | AstKind::ObjectProperty(_)
            | AstKind::ReturnStatement(_)
            | AstKind::AssignmentExpression(_),
        ) => true,
        // `() => Inferno.render(...)`
        Some(AstKind::ExpressionStatement(_)) => matches!(
            (ancestors.next(), ancestors.next()),
            (Some(AstKind::FunctionBody(_)), Some(AstKind::ArrowFunctionExpression(arrow))) if arrow.expression
        ),
        _ => false,
    }
}

impl<'a> RuleHandler<'a> for NoRenderReturnValue {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        let AstKind::CallExpression(call) = kind else {
            return;
        };
        if !is_pragma_member(&call.callee, ctx.settings(), "render") {
            return;
        }
        if is_value_used(ctx.ancestors()) {
            let pragma = ctx.settings().pragma.clone();
            ctx.report(Report::new("noReturnValue", call.callee.span()).with_data("node", pragma));
        }
    }
}
