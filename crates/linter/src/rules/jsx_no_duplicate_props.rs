//! inferno/jsx-no-duplicate-props
//!
//! Disallow passing the same prop twice in JSX.

use oxc_ast::ast::{JSXAttributeItem, JSXAttributeName};
use oxc_ast::AstKind;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use common::Settings;

use crate::error::Result;
use crate::rule::{option_at, NodeType, OptionShape, Rule, RuleHandler};
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

/// Configuration for jsx-no-duplicate-props
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxNoDuplicatePropsConfig {
    /// Consider two prop names differing only by case to be the same
    #[serde(default)]
    pub ignore_case: bool,
}

/// jsx-no-duplicate-props rule
#[derive(Debug, Clone, Default)]
pub struct JsxNoDuplicateProps {
    pub config: JsxNoDuplicatePropsConfig,
}

impl RuleMeta for JsxNoDuplicateProps {
    const NAME: &'static str = "jsx-no-duplicate-props";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
    const RECOMMENDED: bool = true;
    const MESSAGES: &'static [(&'static str, &'static str)] =
        &[("noDuplicateProps", "No duplicate props allowed")];
    const SCHEMA: &'static [OptionShape] = &[OptionShape::Object(&["ignoreCase"])];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::JsxOpeningElement];
}

impl JsxNoDuplicateProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsxNoDuplicatePropsConfig) -> Self {
        Self { config }
    }
}

impl Rule for JsxNoDuplicateProps {
    fn from_options(options: &[Value]) -> Result<Self> {
        Ok(Self::with_config(option_at(Self::NAME, options, 0)?))
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(self.clone())
    }
}

impl<'a> RuleHandler<'a> for JsxNoDuplicateProps {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        let AstKind::JSXOpeningElement(opening) = kind else {
            return;
        };

        let mut seen: FxHashSet<String> = FxHashSet::default();
        for attr in &opening.attributes {
            let JSXAttributeItem::Attribute(jsx_attr) = attr else {
                continue;
            };
            // Namespaced names (`xlink:href`) are not compared
            let JSXAttributeName::Identifier(ident) = &jsx_attr.name else {
                continue;
            };

            let name = if self.config.ignore_case {
                ident.name.to_lowercase()
            } else {
                ident.name.to_string()
            };
            if !seen.insert(name) {
                ctx.report(Report::new("noDuplicateProps", jsx_attr.span));
            }
        }
    }
}
