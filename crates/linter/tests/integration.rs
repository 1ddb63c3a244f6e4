//! Integration tests for inferno-linter rules

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use serde_json::{json, Value};

use common::Settings;
use inferno_linter::fixer::apply_fixes;
use inferno_linter::{lint_with_config, Diagnostic, LintConfig, LintResult, RuleSeverity};

fn lint_source(source: &str, config: &LintConfig) -> LintResult {
    let allocator = Allocator::default();
    let source_type = SourceType::jsx();
    let ret = Parser::new(&allocator, source, source_type).parse();
    assert!(ret.errors.is_empty(), "should parse: {source}");
    let semantic_ret = SemanticBuilder::new()
        .with_excess_capacity(0.0)
        .build(&ret.program);
    lint_with_config(source, source_type, &semantic_ret.semantic, &ret.program, config)
}

fn rule(name: &str, options: Vec<Value>) -> LintConfig {
    LintConfig::new().with_rule(name, RuleSeverity::Error, options)
}

fn diagnostics(source: &str, config: &LintConfig) -> Vec<Diagnostic> {
    lint_source(source, config).diagnostics
}

fn message_ids(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics
        .iter()
        .filter_map(|d| d.message_id.as_deref())
        .collect()
}

fn fix(source: &str, config: &LintConfig) -> String {
    let result = lint_source(source, config);
    apply_fixes(source, &result.diagnostics).output
}

// ==================== jsx-fragments ====================

#[test]
fn test_fragments_recognizes_every_spelling() {
    let config = rule("jsx-fragments", vec![json!("syntax")]);
    let sources = [
        "<Inferno.Fragment><a /></Inferno.Fragment>;",
        "import { Fragment } from 'inferno'; <Fragment><a /></Fragment>;",
        "import { Fragment as F } from 'inferno'; <F><a /></F>;",
        "const F = Inferno.Fragment; <F><a /></F>;",
        "const { Fragment } = Inferno; <Fragment><a /></Fragment>;",
        "const { Fragment } = require('inferno'); <Fragment><a /></Fragment>;",
        "const { 'Fragment': F } = Inferno; <F><a /></F>;",
        "const { render, Fragment: F = null } = Inferno; <F><a /></F>;",
    ];
    for source in sources {
        let found = diagnostics(source, &config);
        assert_eq!(message_ids(&found), vec!["preferFragment"], "for {source}");
        assert_eq!(
            found[0].message,
            "Prefer fragment shorthand over Inferno.Fragment"
        );
    }
}

#[test]
fn test_fragments_ignores_other_components() {
    let config = rule("jsx-fragments", vec![json!("syntax")]);
    let sources = [
        "<Fragment><a /></Fragment>;",
        "import { Fragment } from 'other'; <Fragment><a /></Fragment>;",
        "const F = Other.Fragment; <F><a /></F>;",
        "const { 'render': F } = Inferno; <F><a /></F>;",
        "const { Fragment: { F } } = Inferno; <F><a /></F>;",
        "<Foo.Fragment><a /></Foo.Fragment>;",
        "<><a /></>;",
    ];
    for source in sources {
        assert!(diagnostics(source, &config).is_empty(), "for {source}");
    }
}

#[test]
fn test_fragments_round_trip() {
    let source = "<><a /></>;";

    let long = fix(source, &rule("jsx-fragments", vec![json!("element")]));
    insta::assert_snapshot!(long, @"<Inferno.Fragment><a /></Inferno.Fragment>;");

    let short = fix(&long, &rule("jsx-fragments", vec![json!("syntax")]));
    assert_eq!(short, source);
}

#[test]
fn test_fragments_element_mode_message() {
    let found = diagnostics("<><a /></>;", &rule("jsx-fragments", vec![json!("element")]));
    assert_eq!(message_ids(&found), vec!["preferPragma"]);
    assert_eq!(found[0].message, "Prefer Inferno.Fragment over fragment shorthand");
}

#[test]
fn test_fragments_with_attributes_are_not_fixed() {
    let source = r#"<Inferno.Fragment key="a"><a /></Inferno.Fragment>;"#;
    let found = diagnostics(source, &rule("jsx-fragments", vec![]));
    assert_eq!(found.len(), 1);
    assert!(found[0].fix.is_none());
}

#[test]
fn test_fragments_self_closing_long_form() {
    let output = fix("<Inferno.Fragment />;", &rule("jsx-fragments", vec![]));
    assert_eq!(output, "<></>;");
}

#[test]
fn test_fragments_custom_pragma() {
    let settings = Settings {
        pragma: "Foo".to_string(),
        ..Settings::default()
    };
    let config = rule("jsx-fragments", vec![json!("element")]).with_settings(settings.clone());
    let found = diagnostics("<><a /></>;", &config);
    assert_eq!(found[0].message, "Prefer Foo.Fragment over fragment shorthand");

    let config = rule("jsx-fragments", vec![]).with_settings(settings);
    let found = diagnostics("<Foo.Fragment><a /></Foo.Fragment>;", &config);
    assert_eq!(message_ids(&found), vec!["preferFragment"]);
    assert!(diagnostics("<Inferno.Fragment><a /></Inferno.Fragment>;", &config).is_empty());
}

// ==================== self-closing-comp ====================

#[test]
fn test_self_closing_comp_fix() {
    let config = rule("self-closing-comp", vec![]);
    assert_eq!(fix("<Foo></Foo>;", &config), "<Foo />;");
    assert_eq!(fix("<div>\n</div>;", &config), "<div />;");
}

#[test]
fn test_self_closing_comp_keeps_content() {
    let config = rule("self-closing-comp", vec![]);
    assert!(diagnostics("<div> </div>;", &config).is_empty());
    assert!(diagnostics("<Foo><a /></Foo>;", &config).is_empty());
    assert!(diagnostics("<Foo />;", &config).is_empty());
}

#[test]
fn test_self_closing_comp_html_disabled() {
    let config = rule("self-closing-comp", vec![json!({"html": false})]);
    assert!(diagnostics("<div></div>;", &config).is_empty());
    assert_eq!(diagnostics("<Foo></Foo>;", &config).len(), 1);
}

// ==================== jsx-space-before-closing ====================

#[test]
fn test_space_before_closing() {
    let always = rule("jsx-space-before-closing", vec![]);
    assert_eq!(fix("<a/>;", &always), "<a />;");
    assert!(diagnostics("<a />;", &always).is_empty());
    assert!(diagnostics("<a\n/>;", &always).is_empty());

    let never = rule("jsx-space-before-closing", vec![json!("never")]);
    assert_eq!(fix("<a   />;", &never), "<a/>;");
    assert!(diagnostics("<a\n/>;", &never).is_empty());
}

#[test]
fn test_deprecated_rule_notice() {
    let result = lint_source("<a />;", &rule("jsx-space-before-closing", vec![]));
    assert_eq!(result.notices.len(), 1);
    assert!(result.notices[0].contains("jsx-tag-spacing"));
}

// ==================== jsx-no-duplicate-props ====================

#[test]
fn test_no_duplicate_props() {
    let config = rule("jsx-no-duplicate-props", vec![]);
    let found = diagnostics(r#"<div a="1" b="2" a="3" />;"#, &config);
    assert_eq!(message_ids(&found), vec!["noDuplicateProps"]);
    assert!(diagnostics(r#"<div a="1" A="2" />;"#, &config).is_empty());

    let ignore_case = rule("jsx-no-duplicate-props", vec![json!({"ignoreCase": true})]);
    assert_eq!(diagnostics(r#"<div a="1" A="2" />;"#, &ignore_case).len(), 1);
}

// ==================== button-has-type ====================

#[test]
fn test_button_has_type() {
    let config = rule("button-has-type", vec![]);
    assert!(diagnostics(r#"<button type="button">x</button>;"#, &config).is_empty());
    assert_eq!(
        message_ids(&diagnostics("<button>x</button>;", &config)),
        vec!["missingType"]
    );

    let found = diagnostics(r#"<button type="foo" />;"#, &config);
    assert_eq!(message_ids(&found), vec!["invalidValue"]);
    assert_eq!(found[0].message, r#""foo" is an invalid value for button type attribute"#);

    assert_eq!(
        message_ids(&diagnostics("<button type={kind} />;", &config)),
        vec!["complexType"]
    );
}

#[test]
fn test_button_has_type_forbidden_branch() {
    let config = rule("button-has-type", vec![json!({"reset": false})]);
    let found = diagnostics(r#"<button type={cond ? "button" : "reset"} />;"#, &config);
    assert_eq!(message_ids(&found), vec!["forbiddenValue"]);
    assert_eq!(found[0].data["value"], "reset");
}

#[test]
fn test_button_has_type_create_element() {
    let config = rule("button-has-type", vec![]);
    assert!(diagnostics(r#"Inferno.createElement("button", {type: "submit"});"#, &config).is_empty());
    assert_eq!(
        message_ids(&diagnostics(r#"Inferno.createElement("button");"#, &config)),
        vec!["missingType"]
    );
    assert!(diagnostics(r#"Inferno.createElement("span");"#, &config).is_empty());
}

// ==================== no-children-prop ====================

#[test]
fn test_no_children_prop() {
    let config = rule("no-children-prop", vec![]);
    assert_eq!(
        message_ids(&diagnostics(r#"<div children="x" />;"#, &config)),
        vec!["nestChildren"]
    );

    let found = diagnostics(r#"Inferno.createElement("div", {children: "x"});"#, &config);
    assert_eq!(message_ids(&found), vec!["passChildrenAsArgs"]);
    assert!(found[0].message.contains("Inferno.createElement"));

    assert!(diagnostics(r#"document.createElement("div", {children: 1});"#, &config).is_empty());
    assert!(diagnostics("<div>x</div>;", &config).is_empty());
}

#[test]
fn test_create_element_import_must_come_from_pragma_module() {
    let config = rule("no-children-prop", vec![]);
    let imported = r#"import { createElement } from 'inferno'; createElement("div", {children: 1});"#;
    assert_eq!(
        message_ids(&diagnostics(imported, &config)),
        vec!["passChildrenAsArgs"]
    );

    let foreign = r#"import { createElement } from 'other'; createElement("div", {children: 1});"#;
    assert!(diagnostics(foreign, &config).is_empty());

    let button = rule("button-has-type", vec![]);
    assert!(diagnostics(r#"import { createElement } from 'dom-lib'; createElement("button");"#, &button).is_empty());
}

// ==================== set-state rules ====================

#[test]
fn test_no_did_mount_set_state() {
    let config = rule("no-did-mount-set-state", vec![]);
    let source = "class A extends Component { componentDidMount() { this.setState({}); } }";
    let found = diagnostics(source, &config);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].message, "Do not use setState in componentDidMount");
}

#[test]
fn test_set_state_in_nested_function() {
    let source = "class A extends Component { componentDidMount() { fetch().then(() => this.setState({})); } }";
    assert!(diagnostics(source, &rule("no-did-mount-set-state", vec![])).is_empty());
    assert_eq!(
        diagnostics(source, &rule("no-did-mount-set-state", vec![json!("disallow-in-func")])).len(),
        1
    );
}

#[test]
fn test_no_did_update_and_will_update_set_state() {
    let source = "class A extends Component { componentDidUpdate() { this.setState({}); } }";
    assert_eq!(diagnostics(source, &rule("no-did-update-set-state", vec![])).len(), 1);
    assert!(diagnostics(source, &rule("no-will-update-set-state", vec![])).is_empty());

    let source = "createClass({ componentWillUpdate: function() { this.setState({}); } });";
    let found = diagnostics(source, &rule("no-will-update-set-state", vec![]));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].data["name"], "componentWillUpdate");
}

// ==================== no-is-mounted ====================

#[test]
fn test_no_is_mounted() {
    let config = rule("no-is-mounted", vec![]);
    let source = "class A extends Component { foo() { if (this.isMounted()) {} } }";
    assert_eq!(message_ids(&diagnostics(source, &config)), vec!["noIsMounted"]);
    assert!(diagnostics("this.isMounted();", &config).is_empty());
}

// ==================== no-render-return-value ====================

#[test]
fn test_no_render_return_value() {
    let config = rule("no-render-return-value", vec![]);
    let found = diagnostics("const app = Inferno.render(<App />, root);", &config);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].message, "Do not depend on the return value from Inferno.render");

    assert!(diagnostics("Inferno.render(<App />, root);", &config).is_empty());
    assert_eq!(
        diagnostics("const f = () => Inferno.render(<App />, root);", &config).len(),
        1
    );
    assert_eq!(
        diagnostics("function f() { return Inferno.render(<App />, root); }", &config).len(),
        1
    );
}

// ==================== sort-comp ====================

#[test]
fn test_sort_comp_default_order() {
    let config = rule("sort-comp", vec![]);
    let source = "class A extends Component { render() { return null; } componentDidMount() {} }";
    let found = diagnostics(source, &config);
    assert_eq!(message_ids(&found), vec!["unsortedProps"]);
    assert_eq!(found[0].message, "render should be placed after componentDidMount");

    let sorted = "class A extends Component { static foo() {} componentDidMount() {} handleClick() {} render() { return null; } }";
    assert!(diagnostics(sorted, &config).is_empty());
}

#[test]
fn test_sort_comp_named_groups() {
    let config = rule(
        "sort-comp",
        vec![json!({
            "order": ["A", "B", "C"],
            "groups": {"A": ["a1"], "B": ["b1"], "C": ["c1"]}
        })],
    );
    let source = "class Foo extends Component { b1() {} a1() {} c1() {} }";
    let found = diagnostics(source, &config);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].message, "b1 should be placed after a1");
}

#[test]
fn test_sort_comp_create_class() {
    let config = rule("sort-comp", vec![]);
    let source = "var Hello = createClass({ render: function() {}, displayName: 'Hello' });";
    let found = diagnostics(source, &config);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].message, "render should be placed after displayName");

    assert!(diagnostics("const o = { render() {}, componentDidMount() {} };", &config).is_empty());
}

#[test]
fn test_sort_comp_lookahead_group() {
    let config = rule(
        "sort-comp",
        vec![json!({
            "order": [
                "static-methods",
                "lifecycle",
                "/^on.+$/",
                "/^(get|set)(?!(InitialState$|DefaultProps$|ChildContext$)).+$/",
                "everything-else",
                "/^render.+$/",
                "render"
            ]
        })],
    );
    let source = r#"
export default class View extends Inferno.Component {
  componentDidMountOk() {}
  getB() {}
  componentWillMount() {}
  getA() {}
  render() {}
}
"#;
    let found = diagnostics(source, &config);
    assert_eq!(message_ids(&found), vec!["unsortedProps"]);
    assert_eq!(found[0].message, "componentDidMountOk should be placed after getA");

    let sorted = r#"
class View extends Inferno.Component {
  componentWillMount() {}
  getA() {}
  getInitialStateOk() {}
  render() {}
}
"#;
    assert!(diagnostics(sorted, &config).is_empty());
}

#[test]
fn test_sort_comp_invalid_options_skip_rule() {
    let config = rule("sort-comp", vec![json!({"order": ["/(x/"]})]);
    let source = "class A extends Component { render() { return null; } componentDidMount() {} }";
    assert!(diagnostics(source, &config).is_empty());
}

// ==================== static-property-placement ====================

#[test]
fn test_static_property_placement_static_getter() {
    let config = rule("static-property-placement", vec![json!("static getter")]);
    let source = r#"class Hello extends Base { render() {} } Hello.displayName = "Hi";"#;
    let found = diagnostics(source, &config);
    assert_eq!(message_ids(&found), vec!["notGetterClassFunc"]);
    assert_eq!(found[0].data["name"], "displayName");
}

#[test]
fn test_static_property_placement_per_component() {
    let source = r#"
class A extends Inferno.Component { static displayName = "A"; }
class B extends Inferno.Component { render() { return null; } }
B.displayName = "B";
"#;
    let found = diagnostics(source, &rule("static-property-placement", vec![]));
    assert_eq!(message_ids(&found), vec!["notStaticClassProp"]);
    assert_eq!(&source[found[0].start as usize..found[0].end as usize], "B.displayName");

    let found = diagnostics(
        source,
        &rule("static-property-placement", vec![json!("property assignment")]),
    );
    assert_eq!(message_ids(&found), vec!["declareOutsideClass"]);
    assert!(source[found[0].start as usize..].starts_with("static displayName"));
}

#[test]
fn test_static_property_placement_resolves_declarations() {
    let config = rule("static-property-placement", vec![]);
    let source = r#"
class A extends Component { render() { return null; } }
function f() { class A {} A.displayName = "x"; }
"#;
    assert!(diagnostics(source, &config).is_empty());

    let source = "const Other = () => <div />; Other.propTypes = {};";
    assert!(diagnostics(source, &config).is_empty());

    let source = "class A extends Component { componentDidMount() { A.displayName = 'x'; } }";
    assert!(diagnostics(source, &config).is_empty());
}

#[test]
fn test_static_property_placement_overrides() {
    let config = rule(
        "static-property-placement",
        vec![json!("static public field"), json!({"propTypes": "property assignment"})],
    );
    let source = r#"
class A extends Component {
  static displayName = "A";
  render() { return null; }
}
A.propTypes = {};
A.defaultProps = {};
"#;
    let found = diagnostics(source, &config);
    assert_eq!(message_ids(&found), vec!["notStaticClassProp"]);
    assert_eq!(found[0].data["name"], "defaultProps");
}

// ==================== no-typos ====================

#[test]
fn test_no_typos_static_properties() {
    let config = rule("no-typos", vec![]);
    let invalid = [
        "class First extends Inferno.Component { static PropTypes = {}; }",
        "class First extends Inferno.Component { static defaultprops = {}; }",
        "class First extends Inferno.Component {} First.ChildContextTypes = {};",
        "First.DefaultProps = {}; class First extends Inferno.Component {}",
        "function MyComponent() { return (<div>{this.props.myProp}</div>); } MyComponent.DefaultProps = {};",
        "const MyComponent = () => <div />; MyComponent.contexttypes = {};",
    ];
    for source in invalid {
        let found = diagnostics(source, &config);
        assert_eq!(message_ids(&found), vec!["typoStaticClassProp"], "for {source}");
        assert_eq!(found[0].message, "Typo in static class property declaration");
    }

    let valid = [
        "class First extends Inferno.Component { static propTypes = {}; static defaultProps = {}; }",
        "class First extends Inferno.Component { PropTypes = {}; }",
        "class First { static PropTypes = {}; }",
        "class First {} First.PropTypes = {};",
        "function MyRandomFunction() {} MyRandomFunction.PropTypes = {};",
        "class First extends Inferno.Component {} First.prototype.PropTypes = {};",
        "class First extends Inferno.Component {} First.propTypes = {};",
    ];
    for source in valid {
        assert!(diagnostics(source, &config).is_empty(), "for {source}");
    }
}

#[test]
fn test_no_typos_lifecycle_methods() {
    let config = rule("no-typos", vec![]);
    let source = r#"
class Hello extends Inferno.Component {
  ComponentWillMount() {}
  componentdidupdate() {}
  "my-method"() {}
  Render() { return <div />; }
}
"#;
    let found = diagnostics(source, &config);
    let messages: Vec<&str> = found.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Typo in component lifecycle method declaration: ComponentWillMount should be componentWillMount",
            "Typo in component lifecycle method declaration: componentdidupdate should be componentDidUpdate",
            "Typo in component lifecycle method declaration: Render should be render",
        ]
    );

    let not_a_component = "class Hello { componentwillmount() {} render() { return <div />; } }";
    assert!(diagnostics(not_a_component, &config).is_empty());
}

#[test]
fn test_no_typos_static_lifecycle() {
    let config = rule("no-typos", vec![]);
    let source = "class Hello extends Inferno.Component { getDerivedStateFromProps() {} static GetDerivedStateFromProps() {} }";
    let found = diagnostics(source, &config);
    assert_eq!(message_ids(&found), vec!["staticLifecycleMethod", "typoLifecycleMethod"]);
    assert_eq!(found[0].message, "Lifecycle method should be static: getDerivedStateFromProps");

    let both = "class Hello extends Inferno.Component { getderivedstatefromprops() {} }";
    let diags = diagnostics(both, &config);
    let mut ids = message_ids(&diags);
    ids.sort_unstable();
    assert_eq!(ids, vec!["staticLifecycleMethod", "typoLifecycleMethod"]);

    let fine = "class Hello extends Inferno.Component { static getDerivedStateFromProps() {} }";
    assert!(diagnostics(fine, &config).is_empty());
}

#[test]
fn test_no_typos_create_class() {
    let config = rule("no-typos", vec![]);
    let source = r#"
import { createClass } from 'inferno-create-class';
const Hello = createClass({
  proptypes: {},
  ComponentDidMount: function () {},
  render() { return <div />; },
});
"#;
    let found = diagnostics(source, &config);
    assert_eq!(message_ids(&found), vec!["typoLifecycleMethod"]);
    assert!(found[0].message.contains("ComponentDidMount should be componentDidMount"));
}

#[test]
fn test_no_typos_prop_types() {
    let config = rule("no-typos", vec![]);
    let source = r#"
import PropTypes from "prop-types";
class Foo extends Inferno.Component {}
Foo.propTypes = {
  a: PropTypes.strin,
  b: PropTypes.string.isrequired,
  c: PropTypes.shape({ d: PropTypes.numbr }).isRequired,
  e: PropTypes.oneOfType([PropTypes.bool, PropTypes.fnc]),
};
"#;
    let found = diagnostics(source, &config);
    let messages: Vec<&str> = found.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Typo in declared prop type: strin",
            "Typo in prop type chain qualifier: isrequired",
            "Typo in declared prop type: numbr",
            "Typo in declared prop type: fnc",
        ]
    );

    let valid = r#"
import CustomInferno from "inferno";
class Foo extends CustomInferno.Component {
  static propTypes = {
    a: CustomInferno.PropTypes.string.isRequired,
    b: CustomInferno.PropTypes.shape({ c: CustomInferno.PropTypes.number }),
  };
  render() { return <div />; }
}
"#;
    assert!(diagnostics(valid, &config).is_empty());

    // Without a prop-types binding nothing is known about `PropTypes`
    let unbound = "class Foo extends Inferno.Component { static propTypes = { a: PropTypes.strin }; }";
    assert!(diagnostics(unbound, &config).is_empty());
}

// ==================== no-array-index-key ====================

#[test]
fn test_no_array_index_key_invalid() {
    let config = rule("no-array-index-key", vec![]);
    let sources = [
        "foo.map((bar, i) => <Foo key={i} />);",
        "foo.map((bar, i) => <Foo key={`foo-${i}`} />);",
        "foo.map((bar, i) => <Foo key={'foo-' + i} />);",
        "foo.map((bar, i) => <Foo key={'foo-' + i + '-bar'} />);",
        "foo.map(function (bar, i) { return <Foo key={i} />; });",
        "foo.reduce((a, b, i) => a.concat(<Foo key={i} />), []);",
        "foo?.map((child, i) => <Foo key={i} />);",
        "foo.map((bar, i) => Inferno.createElement('Foo', { key: i }));",
        "foo.map((baz, i) => Inferno.cloneElement(someChild, { ...someChild.props, key: i }));",
        "foo.forEach((bar, i) => { baz.push(Inferno.createElement('Foo', { key: i })); });",
        "foo.findIndex((bar, i) => { baz.push(Inferno.createElement('Foo', { key: i })); });",
        "Children.map(this.props.children, (child, index) => Inferno.cloneElement(child, { key: index }));",
        "Inferno.Children.forEach(this.props.children, (child, index) => { return Inferno.cloneElement(child, { key: index }); });",
    ];
    for source in sources {
        let found = diagnostics(source, &config);
        assert_eq!(message_ids(&found), vec!["noArrayIndex"], "for {source}");
        assert_eq!(found[0].message, "Do not use Array index in keys");
    }
}

#[test]
fn test_no_array_index_key_valid() {
    let config = rule("no-array-index-key", vec![]);
    let sources = [
        r#"<Foo key="foo" />;"#,
        "<Foo key={i} />;",
        "foo.bar((baz, i) => <Foo key={i} />);",
        "foo.map((baz) => <Foo key={baz.id} />);",
        "foo.map((item, i) => <Foo key={item.id} index={i} />);",
        "foo.reduce((a, b) => a.concat(<Foo key={b.id} />), []);",
        "foo.map((baz, i) => Inferno.cloneElement(someChild, { ...someChild.props }));",
        "Inferno.Children.map(this.props.children, (child, index, arr) => Inferno.cloneElement(child, { key: child.id }));",
    ];
    for source in sources {
        assert!(diagnostics(source, &config).is_empty(), "for {source}");
    }
}

// ==================== require-optimization ====================

#[test]
fn test_require_optimization_invalid() {
    let config = rule("require-optimization", vec![]);
    let sources = [
        "class YourComponent extends Inferno.Component {}",
        "class YourComponent extends Inferno.Component { handleClick() {} render() { return <div onClick={this.handleClick}>123</div>; } }",
        "class YourComponent extends Component {}",
        "createClass({});",
        "createClass({ mixins: [RandomMixin] });",
        "@infernoMixin.decorate(SomeOtherMixin) class DecoratedComponent extends Component {}",
    ];
    for source in sources {
        let found = diagnostics(source, &config);
        assert_eq!(message_ids(&found), vec!["noShouldComponentUpdate"], "for {source}");
        assert_eq!(
            found[0].message,
            "Component is not optimized. Please add a shouldComponentUpdate method."
        );
    }

    let custom = rule(
        "require-optimization",
        vec![json!({"allowDecorators": ["renderPure", "pureRender"]})],
    );
    let source = "@bar @pure @foo class DecoratedComponent extends Component {}";
    assert_eq!(message_ids(&diagnostics(source, &custom)), vec!["noShouldComponentUpdate"]);
}

#[test]
fn test_require_optimization_valid() {
    let config = rule("require-optimization", vec![]);
    let sources = [
        "class A {}",
        "class YourComponent extends Inferno.Component { shouldComponentUpdate() {} }",
        "class YourComponent extends Inferno.Component { shouldComponentUpdate = () => true; }",
        "@infernoMixin.decorate(PureRenderMixin) class DecoratedComponent extends Component {}",
        "createClass({ shouldComponentUpdate: function () {} });",
        "createClass({ mixins: [PureRenderMixin] });",
        "const FunctionalComponent = function (props) { return <div />; };",
        "class YourComponent extends Inferno.PureComponent {}",
        "class YourComponent extends PureComponent {}",
        "const obj = { prop: [,,,,,] };",
    ];
    for source in sources {
        assert!(diagnostics(source, &config).is_empty(), "for {source}");
    }

    let custom = rule(
        "require-optimization",
        vec![json!({"allowDecorators": ["renderPure", "pureRender"]})],
    );
    let source = "@pureRender class DecoratedComponent extends Component {}";
    assert!(diagnostics(source, &custom).is_empty());
}

// ==================== engine ====================

#[test]
fn test_diagnostics_sorted_by_position() {
    let config = rule("self-closing-comp", vec![]).with_rule(
        "jsx-no-duplicate-props",
        RuleSeverity::Warn,
        vec![],
    );
    let source = r#"<div><Foo></Foo><a b="1" b="2" /></div>;"#;
    let found = diagnostics(source, &config);
    let rules: Vec<&str> = found.iter().map(|d| d.rule.as_str()).collect();
    assert_eq!(rules, vec!["self-closing-comp", "jsx-no-duplicate-props"]);
    assert!(found.windows(2).all(|pair| pair[0].start <= pair[1].start));
}

#[test]
fn test_rules_turned_off_do_not_run() {
    let config = LintConfig::from_json(r#"{"rules": {"inferno/self-closing-comp": "off"}}"#).unwrap();
    assert!(diagnostics("<Foo></Foo>;", &config).is_empty());
}

#[test]
fn test_overlapping_fixes_deferred() {
    let config = rule("jsx-fragments", vec![]).with_rule("self-closing-comp", RuleSeverity::Error, vec![]);
    let source = "const x = <Inferno.Fragment><Foo></Foo></Inferno.Fragment>;";
    let result = lint_source(source, &config);
    let fixed = apply_fixes(source, &result.diagnostics);
    assert_eq!(fixed.output, "const x = <><Foo></Foo></>;");
    assert_eq!(fixed.applied, 1);
    assert_eq!(fixed.deferred, 1);

    assert_eq!(fix(&fixed.output, &config), "const x = <><Foo /></>;");
}
