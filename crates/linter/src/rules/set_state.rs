//! Shared check for the `no-*-set-state` rules
//!
//! Reports `this.setState(...)` inside a named lifecycle member. By default
//! only calls in the member's own function body count; nested callbacks are
//! allowed unless `disallow-in-func` is set.

use oxc_ast::AstKind;
use oxc_span::GetSpan;
use serde::{Deserialize, Serialize};

use common::{is_this_member_call, property_key_name};

use crate::rule::{NodeType, OptionShape, RuleHandler};
use crate::{Report, RuleContext};

pub(crate) const MESSAGES: &[(&str, &str)] = &[("noSetState", "Do not use setState in {{name}}")];
pub(crate) const SCHEMA: &[OptionShape] = &[OptionShape::Enum(&["disallow-in-func"])];
pub(crate) const NODE_TYPES: &[NodeType] = &[NodeType::CallExpression];

/// Whether nested functions inside the lifecycle member are checked too
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SetStateMode {
    #[default]
    AllowInFunc,
    DisallowInFunc,
}

/// Per-file handler shared by the three rules
pub(crate) struct SetStateInMethod {
    method: &'static str,
    mode: SetStateMode,
}

impl SetStateInMethod {
    pub(crate) fn new(method: &'static str, mode: SetStateMode) -> Self {
        Self { method, mode }
    }
}

impl<'a> RuleHandler<'a> for SetStateInMethod {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        let AstKind::CallExpression(call) = kind else {
            return;
        };
        if !is_this_member_call(call, "setState") {
            return;
        }

        let mut depth = 0;
        let mut reported = None;
        for ancestor in ctx.ancestors() {
            let key = match ancestor {
                AstKind::Function(_) | AstKind::ArrowFunctionExpression(_) => {
                    depth += 1;
                    continue;
                }
                AstKind::MethodDefinition(method) => &method.key,
                AstKind::PropertyDefinition(prop) => &prop.key,
                AstKind::ObjectProperty(prop) => &prop.key,
                _ => continue,
            };
            if property_key_name(key).as_deref() != Some(self.method) {
                continue;
            }
            if self.mode == SetStateMode::AllowInFunc && depth > 1 {
                continue;
            }
            reported = Some(call.callee.span());
            break;
        }

        if let Some(span) = reported {
            ctx.report(Report::new("noSetState", span).with_data("name", self.method));
        }
    }
}
