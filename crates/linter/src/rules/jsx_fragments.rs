//! inferno/jsx-fragments
//!
//! Enforce shorthand or standard form for fragments.
//!
//! In `syntax` mode `<Inferno.Fragment>...</Inferno.Fragment>` (or an alias
//! of the fragment binding) is rewritten to `<>...</>`; in `element` mode the
//! shorthand is rewritten to the pragma form. Long-form fragments carrying
//! attributes are reported without a fix since `<>` has no attribute slot.

use oxc_ast::ast::{JSXElement, JSXFragment};
use oxc_ast::AstKind;
use oxc_span::Span;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use common::Settings;

use crate::error::Result;
use crate::fixer::{compose_fix, Edit};
use crate::rule::{option_at, NodeType, OptionShape, Rule, RuleHandler};
use crate::utils::is_fragment_element;
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

const OPEN_SHORT: &str = "<>";
const CLOSE_SHORT: &str = "</>";

/// Preferred fragment spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentMode {
    /// `<>...</>`
    #[default]
    Syntax,
    /// `<Inferno.Fragment>...</Inferno.Fragment>`
    Element,
}

/// jsx-fragments rule
#[derive(Debug, Clone, Default)]
pub struct JsxFragments {
    pub mode: FragmentMode,
}

impl RuleMeta for JsxFragments {
    const NAME: &'static str = "jsx-fragments";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const FIXABLE: bool = true;
    const MESSAGES: &'static [(&'static str, &'static str)] = &[
        ("preferPragma", "Prefer {{pragma}}.{{fragment}} over fragment shorthand"),
        ("preferFragment", "Prefer fragment shorthand over {{pragma}}.{{fragment}}"),
    ];
    const SCHEMA: &'static [OptionShape] = &[OptionShape::Enum(&["syntax", "element"])];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::JsxElement, NodeType::JsxFragment];
}

impl JsxFragments {
    pub fn new(mode: FragmentMode) -> Self {
        Self { mode }
    }
}

impl Rule for JsxFragments {
    fn from_options(options: &[Value]) -> Result<Self> {
        Ok(Self::new(option_at(Self::NAME, options, 0)?))
    }

    fn start<'a>(&self, settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        let long = settings.fragment_member();
        Box::new(FragmentsHandler {
            mode: self.mode,
            open_long: format!("<{}>", long),
            close_long: format!("</{}>", long),
        })
    }
}

struct FragmentsHandler {
    mode: FragmentMode,
    open_long: String,
    close_long: String,
}

impl FragmentsHandler {
    fn build_report(&self, message_id: &'static str, span: Span, ctx: &RuleContext) -> Report {
        let settings = ctx.settings();
        Report::new(message_id, span)
            .with_data("pragma", settings.pragma.as_str())
            .with_data("fragment", settings.fragment.as_str())
    }

    fn check_shorthand(&self, fragment: &JSXFragment, ctx: &mut RuleContext) {
        let edits = [
            Edit::replace(fragment.opening_fragment.span, self.open_long.as_str()),
            Edit::replace(fragment.closing_fragment.span, self.close_long.as_str()),
        ];
        let fix = compose_fix(ctx.source_text(), fragment.span, &edits)
            .map(|fix| fix.with_message("Use the pragma fragment"));
        let report = self.build_report("preferPragma", fragment.span, ctx).with_fix(fix);
        ctx.report(report);
    }

    fn check_long_form(&self, element: &JSXElement, ctx: &mut RuleContext) {
        if !is_fragment_element(&element.opening_element, ctx) {
            return;
        }

        let fix = if element.opening_element.attributes.is_empty() {
            let edits = match &element.closing_element {
                Some(closing) => vec![
                    Edit::replace(element.opening_element.span, OPEN_SHORT),
                    Edit::replace(closing.span, CLOSE_SHORT),
                ],
                None => vec![Edit::replace(
                    element.opening_element.span,
                    format!("{}{}", OPEN_SHORT, CLOSE_SHORT),
                )],
            };
            compose_fix(ctx.source_text(), element.span, &edits)
                .map(|fix| fix.with_message("Use fragment shorthand"))
        } else {
            None
        };
        let report = self.build_report("preferFragment", element.span, ctx).with_fix(fix);
        ctx.report(report);
    }
}

impl<'a> RuleHandler<'a> for FragmentsHandler {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        match (kind, self.mode) {
            (AstKind::JSXFragment(fragment), FragmentMode::Element) => {
                self.check_shorthand(fragment, ctx);
            }
            (AstKind::JSXElement(element), FragmentMode::Syntax) => {
                self.check_long_form(element, ctx);
            }
            _ => {}
        }
    }
}
