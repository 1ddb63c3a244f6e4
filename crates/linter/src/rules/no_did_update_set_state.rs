//! inferno/no-did-update-set-state
//!
//! Disallow `this.setState` in `componentDidUpdate`.

use serde_json::Value;

use common::Settings;

use crate::error::Result;
use crate::rule::{option_at, NodeType, OptionShape, Rule, RuleHandler};
use crate::rules::set_state::{self, SetStateInMethod, SetStateMode};
use crate::{RuleCategory, RuleMeta};

/// no-did-update-set-state rule
#[derive(Debug, Clone, Default)]
pub struct NoDidUpdateSetState {
    pub mode: SetStateMode,
}

impl RuleMeta for NoDidUpdateSetState {
    const NAME: &'static str = "no-did-update-set-state";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
    const MESSAGES: &'static [(&'static str, &'static str)] = set_state::MESSAGES;
    const SCHEMA: &'static [OptionShape] = set_state::SCHEMA;
    const NODE_TYPES: &'static [NodeType] = set_state::NODE_TYPES;
}

impl Rule for NoDidUpdateSetState {
    fn from_options(options: &[Value]) -> Result<Self> {
        Ok(Self {
            mode: option_at(Self::NAME, options, 0)?,
        })
    }

    fn start<'a>(&self, _settings: &Settings) -> Box<dyn RuleHandler<'a> + 'a> {
        Box::new(SetStateInMethod::new("componentDidUpdate", self.mode))
    }
}
