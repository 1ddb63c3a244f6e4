//! Inferno lint rules
//!
//! Rules ported from eslint-plugin-inferno

pub mod button_has_type;
pub mod jsx_fragments;
pub mod jsx_no_duplicate_props;
pub mod jsx_space_before_closing;
pub mod no_array_index_key;
pub mod no_children_prop;
pub mod no_did_mount_set_state;
pub mod no_did_update_set_state;
pub mod no_is_mounted;
pub mod no_render_return_value;
pub mod no_typos;
pub mod no_will_update_set_state;
pub mod require_optimization;
pub mod self_closing_comp;
pub mod set_state;
pub mod sort_comp;
pub mod static_property_placement;

// Re-export rule structs
pub use button_has_type::ButtonHasType;
pub use jsx_fragments::JsxFragments;
pub use jsx_no_duplicate_props::JsxNoDuplicateProps;
pub use jsx_space_before_closing::JsxSpaceBeforeClosing;
pub use no_array_index_key::NoArrayIndexKey;
pub use no_children_prop::NoChildrenProp;
pub use no_did_mount_set_state::NoDidMountSetState;
pub use no_did_update_set_state::NoDidUpdateSetState;
pub use no_is_mounted::NoIsMounted;
pub use no_render_return_value::NoRenderReturnValue;
pub use no_typos::NoTypos;
pub use no_will_update_set_state::NoWillUpdateSetState;
pub use require_optimization::RequireOptimization;
pub use self_closing_comp::SelfClosingComp;
pub use sort_comp::SortComp;
pub use static_property_placement::StaticPropertyPlacement;

use crate::rule::RuleDescriptor;

/// Descriptors of every builtin rule, in registration order
pub fn descriptors() -> Vec<RuleDescriptor> {
    vec![
        RuleDescriptor::of::<ButtonHasType>(),
        RuleDescriptor::of::<JsxFragments>(),
        RuleDescriptor::of::<JsxNoDuplicateProps>(),
        RuleDescriptor::of::<JsxSpaceBeforeClosing>(),
        RuleDescriptor::of::<NoArrayIndexKey>(),
        RuleDescriptor::of::<NoChildrenProp>(),
        RuleDescriptor::of::<NoDidMountSetState>(),
        RuleDescriptor::of::<NoDidUpdateSetState>(),
        RuleDescriptor::of::<NoIsMounted>(),
        RuleDescriptor::of::<NoRenderReturnValue>(),
        RuleDescriptor::of::<NoTypos>(),
        RuleDescriptor::of::<NoWillUpdateSetState>(),
        RuleDescriptor::of::<RequireOptimization>(),
        RuleDescriptor::of::<SelfClosingComp>(),
        RuleDescriptor::of::<SortComp>(),
        RuleDescriptor::of::<StaticPropertyPlacement>(),
    ]
}
