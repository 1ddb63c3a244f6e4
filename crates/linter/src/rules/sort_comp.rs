//! inferno/sort-comp
//!
//! Enforce component methods order.
//!
//! Members of every component (ES6 class or `createClass` object) are
//! collected during the walk; the order check runs once the file is done.

use oxc_ast::ast::{
    Class, ClassElement, Expression, MethodDefinitionKind, ObjectExpression, ObjectPropertyKind,
    PropertyKind,
};
use oxc_ast::AstKind;
use serde_json::Value;

use common::{create_class_object, is_component_class, property_key_name, Settings};

use crate::error::{LintError, Result};
use crate::ordering::{check_order, Member, OrderOptions, OrderSpec};
use crate::rule::{option_at, NodeType, OptionShape, Rule, RuleHandler};
use crate::{Report, RuleCategory, RuleContext, RuleMeta};

/// sort-comp rule
#[derive(Debug, Clone, Default)]
pub struct SortComp {
    pub order: OrderSpec,
}

impl RuleMeta for SortComp {
    const NAME: &'static str = "sort-comp";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const MESSAGES: &'static [(&'static str, &'static str)] =
        &[("unsortedProps", "{{propA}} should be placed {{position}} {{propB}}")];
    const SCHEMA: &'static [OptionShape] = &[OptionShape::Object(&["order", "groups"])];
    const NODE_TYPES: &'static [NodeType] = &[NodeType::Class, NodeType::CallExpression];
    const RUNS_ON_EXIT: bool = true;
}

impl Rule for SortComp {
    fn from_options(options: &[Value]) -> Result<Self> {
        let options: OrderOptions = option_at(Self::NAME, options, 0)?;
        let order =
            OrderSpec::new(&options).map_err(|reason| LintError::invalid_options(Self::NAME, reason))?;
        Ok(Self { order })
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(SortCompHandler {
            order: self.order.clone(),
            components: Vec::new(),
        })
    }
}

fn is_function_like(expr: &Expression) -> bool {
    matches!(
        expr.without_parentheses(),
        Expression::FunctionExpression(_) | Expression::ArrowFunctionExpression(_)
    )
}

fn class_members(class: &Class) -> Vec<Member> {
    let mut members = Vec::new();
    for element in &class.body.body {
        match element {
            ClassElement::MethodDefinition(method) => {
                let name = property_key_name(&method.key).unwrap_or_default().into_owned();
                members.push(Member {
                    name,
                    span: method.span,
                    getter: method.kind == MethodDefinitionKind::Get,
                    setter: method.kind == MethodDefinitionKind::Set,
                    static_method: method.r#static,
                    ..Member::default()
                });
            }
            ClassElement::PropertyDefinition(prop) => {
                let name = property_key_name(&prop.key).unwrap_or_default().into_owned();
                let holds_function = prop.value.as_ref().is_some_and(is_function_like);
                members.push(Member {
                    name,
                    span: prop.span,
                    type_annotation: prop.type_annotation.is_some() && prop.value.is_none(),
                    static_variable: prop.r#static && !holds_function,
                    static_method: prop.r#static && holds_function,
                    instance_variable: !prop.r#static && !holds_function,
                    instance_method: !prop.r#static && holds_function,
                    ..Member::default()
                });
            }
            _ => {}
        }
    }
    members
}

fn object_members(object: &ObjectExpression) -> Vec<Member> {
    object
        .properties
        .iter()
        .filter_map(|prop| match prop {
            ObjectPropertyKind::ObjectProperty(prop) => Some(Member {
                name: property_key_name(&prop.key).unwrap_or_default().into_owned(),
                span: prop.span,
                getter: prop.kind == PropertyKind::Get,
                setter: prop.kind == PropertyKind::Set,
                ..Member::default()
            }),
            ObjectPropertyKind::SpreadProperty(_) => None,
        })
        .collect()
}

struct SortCompHandler {
    order: OrderSpec,
    components: Vec<Vec<Member>>,
}

impl<'a> RuleHandler<'a> for SortCompHandler {
    fn enter(&mut self, kind: AstKind<'a>, ctx: &mut RuleContext<'a, '_>) {
        let members = match kind {
            AstKind::Class(class) if is_component_class(class, ctx.settings()) => class_members(class),
            AstKind::CallExpression(call) => match create_class_object(call, ctx.settings()) {
                Some(object) => object_members(object),
                None => return,
            },
            _ => return,
        };
        self.components.push(members);
    }

    fn exit_program(&mut self, ctx: &mut RuleContext<'a, '_>) {
        for members in &self.components {
            for violation in check_order(&self.order, members) {
                let member = &members[violation.member];
                let reference = &members[violation.reference];
                ctx.report(
                    Report::new("unsortedProps", member.span)
                        .with_data("propA", member.display_name())
                        .with_data("propB", reference.display_name())
                        .with_data("position", violation.placement.as_str()),
                );
            }
        }
    }
}
