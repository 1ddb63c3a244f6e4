//! inferno/self-closing-comp
//!
//! Disallow extra closing tags for components without children.

use oxc_ast::ast::{JSXElement, JSXElementName};
use oxc_ast::AstKind;
use oxc_span::Span;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use common::{is_dom_component, Settings};

use crate::diagnostic::Fix;
use crate::error::Result;
use crate::rule::{option_at, NodeType, OptionShape, Rule, RuleHandler};
use crate::utils::children_is_empty_or_multiline_whitespace;
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

fn enabled() -> bool {
    true
}

/// Configuration for self-closing-comp
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfClosingCompConfig {
    /// Whether user components should be self-closing when empty
    #[serde(default = "enabled")]
    pub component: bool,
    /// Whether native HTML elements should be self-closing when empty
    #[serde(default = "enabled")]
    pub html: bool,
}

impl Default for SelfClosingCompConfig {
    fn default() -> Self {
        Self {
            component: true,
            html: true,
        }
    }
}

/// self-closing-comp rule
#[derive(Debug, Clone, Default)]
pub struct SelfClosingComp {
    pub config: SelfClosingCompConfig,
}

impl RuleMeta for SelfClosingComp {
    const NAME: &'static str = "self-closing-comp";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const FIXABLE: bool = true;
    const MESSAGES: &'static [(&'static str, &'static str)] =
        &[("notSelfClosing", "Empty components are self-closing")];
    const SCHEMA: &'static [OptionShape] = &[OptionShape::Object(&["component", "html"])];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::JsxElement];
}

impl SelfClosingComp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SelfClosingCompConfig) -> Self {
        Self { config }
    }

    /// Check if an empty element should be written self-closing
    fn should_be_self_closing(&self, element: &JSXElement) -> bool {
        let opening = &element.opening_element;
        if is_dom_component(opening) {
            return self.config.html;
        }
        let is_component = matches!(
            opening.name,
            JSXElementName::IdentifierReference(_) | JSXElementName::MemberExpression(_)
        );
        is_component && self.config.component
    }
}

impl Rule for SelfClosingComp {
    fn from_options(options: &[Value]) -> Result<Self> {
        Ok(Self::with_config(option_at(Self::NAME, options, 0)?))
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(self.clone())
    }
}

impl<'a> RuleHandler<'a> for SelfClosingComp {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        let AstKind::JSXElement(element) = kind else {
            return;
        };
        let Some(closing) = &element.closing_element else {
            return;
        };
        if !children_is_empty_or_multiline_whitespace(&element.children)
            || !self.should_be_self_closing(element)
        {
            return;
        }

        // `>` of the opening tag through the end of the closing tag
        let opening = &element.opening_element;
        let fix = Fix::new(Span::new(opening.span.end - 1, closing.span.end), " />")
            .with_message("Make self-closing");
        ctx.report(Report::new("notSelfClosing", opening.span).with_fix(Some(fix)));
    }
}
