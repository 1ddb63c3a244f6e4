//! inferno/static-property-placement
//!
//! Enforce where component static properties are declared: as static class
//! fields, static getters, or assignments after the class.

use oxc_ast::ast::{AssignmentTarget, ClassElement, Expression, MethodDefinitionKind};
use oxc_ast::AstKind;
use oxc_semantic::ScopeId;
use oxc_span::Span;
use rustc_hash::FxHashMap;
use serde_json::Value;

use common::{is_component_class, property_key_name, Settings, STATIC_PROPERTIES};

use crate::error::Result;
use crate::placement::{PlacementConfig, PropertyPlacement};
use crate::rule::{option_at, NodeType, OptionShape, Rule, RuleHandler};
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

const PROPERTY_NAMES: &[&str] = &[
    "childContextTypes",
    "contextTypes",
    "contextType",
    "defaultProps",
    "displayName",
    "propTypes",
];

/// static-property-placement rule
#[derive(Debug, Clone, Default)]
pub struct StaticPropertyPlacement {
    pub config: PlacementConfig,
}

impl RuleMeta for StaticPropertyPlacement {
    const NAME: &'static str = "static-property-placement";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const MESSAGES: &'static [(&'static str, &'static str)] = &[
        ("notStaticClassProp", "'{{name}}' should be declared as a static class property."),
        ("notGetterClassFunc", "'{{name}}' should be declared as a static getter class function."),
        ("declareOutsideClass", "'{{name}}' should be declared outside the class body."),
    ];
    const SCHEMA: &'static [OptionShape] = &[
        OptionShape::Enum(PropertyPlacement::OPTION_VALUES),
        OptionShape::Object(PROPERTY_NAMES),
    ];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::Class, NodeType::AssignmentExpression];
    const RUNS_ON_EXIT: bool = true;
}

impl Rule for StaticPropertyPlacement {
    fn from_options(options: &[Value]) -> Result<Self> {
        let default: PropertyPlacement = option_at(Self::NAME, options, 0)?;
        let overrides: FxHashMap<String, PropertyPlacement> = option_at(Self::NAME, options, 1)?;
        Ok(Self {
            config: PlacementConfig { default, overrides },
        })
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(PlacementHandler {
            config: self.config.clone(),
            declarations: Vec::new(),
            assignments: Vec::new(),
        })
    }
}

/// `Object.property = ...` outside any class body, resolved at the end of the file
struct PendingAssignment<'a> {
    object: &'a str,
    property: &'a str,
    span: Span,
    scope_id: ScopeId,
}

struct Declaration {
    name: String,
    span: Span,
    placement: PropertyPlacement,
}

struct PlacementHandler<'a> {
    config: PlacementConfig,
    declarations: Vec<Declaration>,
    assignments: Vec<PendingAssignment<'a>>,
}

impl<'a> RuleHandler<'a> for PlacementHandler<'a> {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        match kind {
            AstKind::Class(class) => {
                if !is_component_class(class, ctx.settings()) {
                    return;
                }
                for element in &class.body.body {
                    let (key, span, placement) = match element {
                        ClassElement::PropertyDefinition(prop) if prop.r#static => {
                            (&prop.key, prop.span, PropertyPlacement::StaticPublicField)
                        }
                        ClassElement::MethodDefinition(method)
                            if method.r#static && method.kind == MethodDefinitionKind::Get =>
                        {
                            (&method.key, method.span, PropertyPlacement::StaticGetter)
                        }
                        _ => continue,
                    };
                    let Some(name) = property_key_name(key) else {
                        continue;
                    };
                    if STATIC_PROPERTIES.contains(name.as_ref()) {
                        self.declarations.push(Declaration {
                            name: name.into_owned(),
                            span,
                            placement,
                        });
                    }
                }
            }
            AstKind::AssignmentExpression(assign) => {
                let AssignmentTarget::StaticMemberExpression(member) = &assign.left else {
                    return;
                };
                let Expression::Identifier(object) = &member.object else {
                    return;
                };
                if !STATIC_PROPERTIES.contains(member.property.name.as_str()) {
                    return;
                }
                // Reassignments from inside a class body are not declarations
                if ctx.ancestors().any(|a| matches!(a, AstKind::Class(_))) {
                    return;
                }
                self.assignments.push(PendingAssignment {
                    object: object.name.as_str(),
                    property: member.property.name.as_str(),
                    span: member.span,
                    scope_id: ctx.scope_id(),
                });
            }
            _ => {}
        }
    }

    fn exit_program(&mut self, ctx: &mut RuleContext<'a, '_>) {
        for assignment in &self.assignments {
            let class = ctx
                .resolve_in(assignment.object, assignment.scope_id)
                .and_then(|binding| binding.class());
            if class.is_some_and(|class| is_component_class(class, ctx.settings())) {
                self.declarations.push(Declaration {
                    name: assignment.property.to_string(),
                    span: assignment.span,
                    placement: PropertyPlacement::PropertyAssignment,
                });
            }
        }

        self.declarations.sort_by_key(|d| d.span.start);
        for declaration in &self.declarations {
            if let Some(message_id) = self.config.check(&declaration.name, declaration.placement) {
                ctx.report(Report::new(message_id, declaration.span).with_data("name", declaration.name.as_str()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options() {
        let rule = StaticPropertyPlacement::from_options(&[
            json!("property assignment"),
            json!({"displayName": "static getter"}),
        ])
        .unwrap();
        assert_eq!(rule.config.default, PropertyPlacement::PropertyAssignment);
        assert_eq!(rule.config.expected("displayName"), Some(PropertyPlacement::StaticGetter));
        assert_eq!(rule.config.expected("propTypes"), Some(PropertyPlacement::PropertyAssignment));
    }

    #[test]
    fn test_default_options() {
        let rule = StaticPropertyPlacement::from_options(&[]).unwrap();
        assert_eq!(rule.config.default, PropertyPlacement::StaticPublicField);
        assert!(rule.config.overrides.is_empty());
    }
}
