//! inferno/no-is-mounted
//!
//! Disallow usage of `isMounted`.

use oxc_ast::AstKind;
use oxc_span::GetSpan;
use serde_json::Value;

use common::{is_this_member_call, Settings};

use crate::error::Result;
use crate::rule::{NodeType, Rule, RuleHandler};
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

/// no-is-mounted rule
#[derive(Debug, Clone, Default)]
pub struct NoIsMounted;

impl RuleMeta for NoIsMounted {
    const NAME: &'static str = "no-is-mounted";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
    const RECOMMENDED: bool = true;
    const MESSAGES: &'static [(&'static str, &'static str)] = &[("noIsMounted", "Do not use isMounted")];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::CallExpression];
}

impl Rule for NoIsMounted {
    fn from_options(_options: &[Value]) -> Result<Self> {
        Ok(Self)
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(Self)
    }
}

impl<'a> RuleHandler<'a> for NoIsMounted {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        let AstKind::CallExpression(call) = kind else {
            return;
        };
        if !is_this_member_call(call, "isMounted") {
            return;
        }
        let in_member = ctx
            .ancestors()
            .any(|a| matches!(a, AstKind::MethodDefinition(_) | AstKind::ObjectProperty(_)));
        if in_member {
            ctx.report(Report::new("noIsMounted", call.callee.span()));
        }
    }
}
