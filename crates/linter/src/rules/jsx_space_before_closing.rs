//! inferno/jsx-space-before-closing
//!
//! Validate spacing before closing bracket in JSX.
//! Deprecated in favor of `jsx-tag-spacing` with `beforeSelfClosing`.

use oxc_ast::AstKind;
use oxc_span::Span;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use common::Settings;

use crate::diagnostic::Fix;
use crate::error::Result;
use crate::rule::{option_at, NodeType, OptionShape, Rule, RuleHandler};
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

/// Whether a space is required before `/>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingOption {
    #[default]
    Always,
    Never,
}

/// jsx-space-before-closing rule
#[derive(Debug, Clone, Default)]
pub struct JsxSpaceBeforeClosing {
    pub option: SpacingOption,
}

impl RuleMeta for JsxSpaceBeforeClosing {
    const NAME: &'static str = "jsx-space-before-closing";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const FIXABLE: bool = true;
    const DEPRECATED: bool = true;
    const DEPRECATION_HINT: &'static str =
        "Please use the inferno/jsx-tag-spacing rule with the \"beforeSelfClosing\" option instead.";
    const MESSAGES: &'static [(&'static str, &'static str)] = &[
        ("noSpaceBeforeClose", "A space is forbidden before closing bracket"),
        ("needSpaceBeforeClose", "A space is required before closing bracket"),
    ];
    const SCHEMA: &'static [OptionShape] = &[OptionShape::Enum(&["always", "never"])];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::JsxElement];
}

impl Rule for JsxSpaceBeforeClosing {
    fn from_options(options: &[Value]) -> Result<Self> {
        Ok(Self {
            option: option_at(Self::NAME, options, 0)?,
        })
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(self.clone())
    }
}

/// Offsets of the whitespace run before `/>` in a self-closing opening tag
///
/// Returns `(gap_start, slash)`; `None` when the tag does not end in `/>` or
/// the gap spans lines.
fn gap_before_slash(tag: &str, tag_start: u32) -> Option<(u32, u32)> {
    let before = tag.strip_suffix("/>")?;
    let token_end = before.trim_end().len();
    if before[token_end..].contains('\n') {
        return None;
    }
    Some((tag_start + token_end as u32, tag_start + before.len() as u32))
}

impl<'a> RuleHandler<'a> for JsxSpaceBeforeClosing {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        let AstKind::JSXElement(element) = kind else {
            return;
        };
        if element.closing_element.is_some() {
            return;
        }
        let opening = &element.opening_element;
        let Some((gap_start, slash)) = gap_before_slash(ctx.span_text(opening.span), opening.span.start)
        else {
            return;
        };

        let at = Span::new(slash, slash + 1);
        match (self.option, gap_start == slash) {
            (SpacingOption::Always, true) => {
                let fix = Fix::new(Span::new(slash, slash), " ").with_message("Add space");
                ctx.report(Report::new("needSpaceBeforeClose", at).with_fix(Some(fix)));
            }
            (SpacingOption::Never, false) => {
                let fix = Fix::new(Span::new(gap_start, slash), "").with_message("Remove space");
                ctx.report(Report::new("noSpaceBeforeClose", at).with_fix(Some(fix)));
            }
            _ => {}
        }
    }
}
