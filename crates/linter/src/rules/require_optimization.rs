//! inferno/require-optimization
//!
//! Require components to declare `shouldComponentUpdate`, or to opt into an
//! equivalent: extending `PureComponent`, the `PureRenderMixin` mixin, or a
//! pure-render decorator.

use oxc_ast::ast::{
    Class, ClassElement, Decorator, Expression, ObjectExpression, ObjectPropertyKind,
};
use oxc_ast::AstKind;
use serde::Deserialize;
use serde_json::Value;

use common::{create_class_object, is_component_class, property_key_name, static_member, Settings};

use crate::error::Result;
use crate::rule::{option_at, NodeType, OptionShape, Rule, RuleHandler};
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

const SHOULD_COMPONENT_UPDATE: &str = "shouldComponentUpdate";
const PURE_RENDER_MIXIN: &str = "PureRenderMixin";
/// `@infernoMixin.decorate(PureRenderMixin)`
const MIXIN_DECORATOR: (&str, &str) = ("infernoMixin", "decorate");

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequireOptimizationConfig {
    /// Decorators that make a component pure
    pub allow_decorators: Vec<String>,
}

/// require-optimization rule
#[derive(Debug, Clone, Default)]
pub struct RequireOptimization {
    pub config: RequireOptimizationConfig,
}

impl RuleMeta for RequireOptimization {
    const NAME: &'static str = "require-optimization";
    const CATEGORY: RuleCategory = RuleCategory::Pedantic;
    const MESSAGES: &'static [(&'static str, &'static str)] = &[(
        "noShouldComponentUpdate",
        "Component is not optimized. Please add a shouldComponentUpdate method.",
    )];
    const SCHEMA: &'static [OptionShape] = &[OptionShape::Object(&["allowDecorators"])];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::Class, NodeType::CallExpression];
}

impl Rule for RequireOptimization {
    fn from_options(options: &[Value]) -> Result<Self> {
        Ok(Self {
            config: option_at(Self::NAME, options, 0)?,
        })
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(self.clone())
    }
}

impl<'a> RuleHandler<'a> for RequireOptimization {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        match kind {
            AstKind::Class(class) => {
                let settings = ctx.settings();
                if !is_component_class(class, settings) || self.class_is_optimized(class, settings) {
                    return;
                }
                ctx.report(Report::new("noShouldComponentUpdate", class.span));
            }
            AstKind::CallExpression(call) => {
                let Some(object) = create_class_object(call, ctx.settings()) else {
                    return;
                };
                if !object_is_optimized(object) {
                    ctx.report(Report::new("noShouldComponentUpdate", call.span));
                }
            }
            _ => {}
        }
    }
}

impl RequireOptimization {
    fn class_is_optimized(&self, class: &Class, settings: &Settings) -> bool {
        extends_pure_component(class, settings)
            || class.decorators.iter().any(|d| self.is_pure_decorator(d))
            || class.body.body.iter().any(|element| {
                let key = match element {
                    ClassElement::MethodDefinition(method) => &method.key,
                    ClassElement::PropertyDefinition(prop) => &prop.key,
                    _ => return false,
                };
                property_key_name(key).as_deref() == Some(SHOULD_COMPONENT_UPDATE)
            })
    }

    fn is_pure_decorator(&self, decorator: &Decorator) -> bool {
        match decorator.expression.without_parentheses() {
            Expression::Identifier(id) => self.config.allow_decorators.iter().any(|d| id.name == *d),
            Expression::CallExpression(call) => {
                let (object, property) = MIXIN_DECORATOR;
                static_member(&call.callee) == Some((object, property))
                    && call.arguments.iter().any(|arg| {
                        matches!(arg.as_expression(), Some(Expression::Identifier(id)) if id.name == PURE_RENDER_MIXIN)
                    })
            }
            _ => false,
        }
    }
}

fn extends_pure_component(class: &Class, settings: &Settings) -> bool {
    match class.super_class.as_ref().map(Expression::without_parentheses) {
        Some(Expression::Identifier(id)) => id.name == "PureComponent",
        Some(expr) => static_member(expr)
            .is_some_and(|(object, property)| object == settings.pragma && property == "PureComponent"),
        None => false,
    }
}

/// `shouldComponentUpdate` declared, or `mixins: [PureRenderMixin]`
fn object_is_optimized(object: &ObjectExpression) -> bool {
    object.properties.iter().any(|prop| {
        let ObjectPropertyKind::ObjectProperty(prop) = prop else {
            return false;
        };
        match property_key_name(&prop.key).as_deref() {
            Some(SHOULD_COMPONENT_UPDATE) => true,
            Some("mixins") => match prop.value.without_parentheses() {
                Expression::ArrayExpression(mixins) => mixins.elements.iter().any(|mixin| {
                    matches!(mixin.as_expression(), Some(Expression::Identifier(id)) if id.name == PURE_RENDER_MIXIN)
                }),
                _ => false,
            },
            _ => false,
        }
    })
}
