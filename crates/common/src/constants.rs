//! Static tables shared by the Inferno rules

use phf::phf_set;

/// Superclasses that mark a class as a component on their own
pub static COMPONENT_SUPERCLASSES: phf::Set<&'static str> = phf_set! {
    "Component",
    "PureComponent",
};

/// Component properties that must be declared in a specific place
pub static STATIC_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "childContextTypes",
    "contextTypes",
    "contextType",
    "defaultProps",
    "displayName",
    "propTypes",
};

/// Values accepted for the `type` attribute of a `<button>`
pub static BUTTON_TYPES: phf::Set<&'static str> = phf_set! {
    "button",
    "submit",
    "reset",
};

/// Members of the built-in `lifecycle` ordering group, in their expected order
pub const LIFECYCLE_GROUP: &[&str] = &[
    "displayName",
    "propTypes",
    "contextTypes",
    "childContextTypes",
    "mixins",
    "statics",
    "defaultProps",
    "constructor",
    "getDefaultProps",
    "state",
    "getInitialState",
    "getChildContext",
    "getDerivedStateFromProps",
    "componentWillMount",
    "UNSAFE_componentWillMount",
    "componentDidMount",
    "componentWillReceiveProps",
    "UNSAFE_componentWillReceiveProps",
    "shouldComponentUpdate",
    "componentWillUpdate",
    "UNSAFE_componentWillUpdate",
    "getSnapshotBeforeUpdate",
    "componentDidUpdate",
    "componentDidCatch",
    "componentWillUnmount",
];

/// Static component properties checked for casing typos
pub const TYPO_CHECKED_PROPERTIES: &[&str] =
    &["propTypes", "contextTypes", "childContextTypes", "defaultProps"];

/// Lifecycle methods declared with `static`
pub const STATIC_LIFECYCLE_METHODS: &[&str] = &["getDerivedStateFromProps"];

/// Lifecycle method names checked for casing typos
pub const LIFECYCLE_METHODS: &[&str] = &[
    "getDerivedStateFromProps",
    "componentWillMount",
    "UNSAFE_componentWillMount",
    "componentDidMount",
    "componentWillReceiveProps",
    "UNSAFE_componentWillReceiveProps",
    "shouldComponentUpdate",
    "componentWillUpdate",
    "UNSAFE_componentWillUpdate",
    "getSnapshotBeforeUpdate",
    "componentDidUpdate",
    "componentDidCatch",
    "componentWillUnmount",
    "render",
];

/// Validators exported by the `prop-types` package
pub static PROP_TYPES: phf::Set<&'static str> = phf_set! {
    "any",
    "array",
    "arrayOf",
    "bigint",
    "bool",
    "checkPropTypes",
    "element",
    "elementType",
    "exact",
    "func",
    "instanceOf",
    "node",
    "number",
    "object",
    "objectOf",
    "oneOf",
    "oneOfType",
    "PropTypes",
    "resetWarningCache",
    "shape",
    "string",
    "symbol",
};
