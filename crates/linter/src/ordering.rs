//! Member ordering for component classes
//!
//! Members are assigned to a position of a flattened order: named groups are
//! expanded in place, every other entry is a literal member name, a kind
//! keyword (`getters`, `static-methods`, ...) or a `/pattern/flags` regex.
//! A member takes its first literal match, else its first keyword match,
//! else its first regex match, else the `everything-else` position (or an
//! implicit position after everything when `everything-else` is absent).

use std::collections::BTreeMap;

use fancy_regex::Regex;
use indexmap::IndexMap;
use oxc_span::Span;
use serde::Deserialize;

use common::LIFECYCLE_GROUP;

const EVERYTHING_ELSE: &str = "everything-else";
const CATCH_ALL: usize = usize::MAX;

/// Shape-based member groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Getters,
    Setters,
    TypeAnnotations,
    StaticVariables,
    StaticMethods,
    InstanceVariables,
    InstanceMethods,
}

impl MemberKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword {
            "getters" => Self::Getters,
            "setters" => Self::Setters,
            "type-annotations" => Self::TypeAnnotations,
            "static-variables" => Self::StaticVariables,
            "static-methods" => Self::StaticMethods,
            "instance-variables" => Self::InstanceVariables,
            "instance-methods" => Self::InstanceMethods,
            _ => return None,
        };
        Some(kind)
    }

    fn matches(self, member: &Member) -> bool {
        match self {
            Self::Getters => member.getter,
            Self::Setters => member.setter,
            Self::TypeAnnotations => member.type_annotation,
            Self::StaticVariables => member.static_variable,
            Self::StaticMethods => member.static_method,
            Self::InstanceVariables => member.instance_variable,
            Self::InstanceMethods => member.instance_method,
        }
    }
}

/// One position of the flattened order
#[derive(Debug, Clone)]
pub enum GroupMatcher {
    Literal(String),
    Kind(MemberKind),
    Pattern(Regex),
    EverythingElse,
}

impl GroupMatcher {
    fn parse(entry: &str) -> Result<Self, String> {
        if entry == EVERYTHING_ELSE {
            return Ok(Self::EverythingElse);
        }
        if let Some(kind) = MemberKind::from_keyword(entry) {
            return Ok(Self::Kind(kind));
        }
        if let Some((pattern, flags)) = split_regex_literal(entry) {
            return compile_regex(pattern, flags).map(Self::Pattern);
        }
        Ok(Self::Literal(entry.to_string()))
    }
}

/// `/pattern/flags` → (pattern, flags)
fn split_regex_literal(entry: &str) -> Option<(&str, &str)> {
    let body = entry.strip_prefix('/')?;
    let close = body.rfind('/')?;
    let flags = &body[close + 1..];
    if flags.chars().all(|c| "gimsuy".contains(c)) {
        Some((&body[..close], flags))
    } else {
        None
    }
}

fn compile_regex(pattern: &str, flags: &str) -> Result<Regex, String> {
    let inline: String = flags.chars().filter(|c| matches!(c, 'i' | 'm' | 's')).collect();
    let source = if inline.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{}){}", inline, pattern)
    };
    Regex::new(&source).map_err(|err| format!("invalid group pattern `/{}/{}`: {}", pattern, flags, err))
}

/// User options: `{ order: [...], groups: { name: [...] } }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOptions {
    #[serde(default)]
    pub order: Option<Vec<String>>,
    #[serde(default)]
    pub groups: IndexMap<String, Vec<String>>,
}

/// Flattened order with compiled matchers
#[derive(Debug, Clone)]
pub struct OrderSpec {
    matchers: Vec<GroupMatcher>,
}

impl Default for OrderSpec {
    fn default() -> Self {
        // The default order only uses keywords and lifecycle names, so it always compiles.
        Self::new(&OrderOptions::default()).unwrap_or(Self { matchers: Vec::new() })
    }
}

impl OrderSpec {
    /// Merge user groups over the defaults and expand group names in the order
    pub fn new(options: &OrderOptions) -> Result<Self, String> {
        let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
        groups.insert(
            "lifecycle".to_string(),
            LIFECYCLE_GROUP.iter().map(|s| s.to_string()).collect(),
        );
        for (name, members) in &options.groups {
            groups.insert(name.clone(), members.clone());
        }

        let default_order: Vec<String> = ["static-methods", "lifecycle", EVERYTHING_ELSE, "render"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let order = options.order.as_ref().unwrap_or(&default_order);

        let mut matchers = Vec::new();
        for entry in order {
            match groups.get(entry) {
                Some(members) => {
                    for member in members {
                        matchers.push(GroupMatcher::parse(member)?);
                    }
                }
                None => matchers.push(GroupMatcher::parse(entry)?),
            }
        }
        Ok(Self { matchers })
    }

    pub fn matchers(&self) -> &[GroupMatcher] {
        &self.matchers
    }

    /// Position of a member in the flattened order.
    ///
    /// A member holds exactly one position even when several entries match
    /// it: literal names win over kind keywords, which win over patterns,
    /// and within each tier the earliest entry is taken. Later entries that
    /// also match are ignored, so a member is never compared against two
    /// slots at once.
    pub fn position_of(&self, member: &Member) -> usize {
        let literal = self.matchers.iter().position(|m| {
            matches!(m, GroupMatcher::Literal(name) if *name == member.name)
        });
        let kind = || {
            self.matchers
                .iter()
                .position(|m| matches!(m, GroupMatcher::Kind(kind) if kind.matches(member)))
        };
        let pattern = || {
            self.matchers.iter().position(|m| {
                matches!(m, GroupMatcher::Pattern(re) if re.is_match(&member.name).unwrap_or(false))
            })
        };
        let everything_else = || {
            self.matchers
                .iter()
                .position(|m| matches!(m, GroupMatcher::EverythingElse))
        };
        literal
            .or_else(kind)
            .or_else(pattern)
            .or_else(everything_else)
            .unwrap_or(CATCH_ALL)
    }
}

/// A class member or object property, as seen by the ordering check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub span: Span,
    pub getter: bool,
    pub setter: bool,
    pub type_annotation: bool,
    pub static_variable: bool,
    pub static_method: bool,
    pub instance_variable: bool,
    pub instance_method: bool,
}

impl Member {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Name used in messages
    pub fn display_name(&self) -> &str {
        if self.getter {
            "getter functions"
        } else if self.setter {
            "setter functions"
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

/// A misplaced member, relative to its closest conflicting reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Index of the misplaced member
    pub member: usize,
    /// Index of the member it should be placed relative to
    pub reference: usize,
    pub placement: Placement,
}

struct PendingError {
    member: usize,
    score: usize,
    distance: usize,
    reference: Option<(usize, usize)>,
}

/// Find misplaced members
///
/// Every ordered pair is compared; conflicts are accumulated per position
/// with a score, keeping the closest conflicting reference. Of two positions
/// pointing at each other only the higher-scored one is reported.
pub fn check_order(spec: &OrderSpec, members: &[Member]) -> Vec<Violation> {
    let positions: Vec<usize> = members.iter().map(|m| spec.position_of(m)).collect();
    let mut errors: BTreeMap<usize, PendingError> = BTreeMap::new();

    for a in 0..members.len() {
        for b in 0..members.len() {
            let (pos_a, pos_b) = (positions[a], positions[b]);
            let correct = pos_a == pos_b
                || (pos_a < pos_b && a < b)
                || (pos_a > pos_b && a > b);
            if correct {
                continue;
            }

            let error = errors.entry(pos_a).or_insert(PendingError {
                member: a,
                score: 0,
                distance: usize::MAX,
                reference: None,
            });
            error.score += 1;
            if members[error.member].name != members[a].name {
                continue;
            }
            let distance = pos_a.abs_diff(pos_b);
            if distance > error.distance {
                continue;
            }
            error.distance = distance;
            error.reference = Some((b, pos_b));
        }
    }

    let keys: Vec<usize> = errors.keys().copied().collect();
    for key in keys {
        let Some((score, target)) = errors
            .get(&key)
            .and_then(|e| e.reference.map(|(_, pos)| (e.score, pos)))
        else {
            continue;
        };
        let Some(other_score) = errors.get(&target).map(|e| e.score) else {
            continue;
        };
        if score > other_score {
            errors.remove(&target);
        } else {
            errors.remove(&key);
        }
    }

    errors
        .into_iter()
        .filter_map(|(pos_a, error)| {
            let (reference, pos_b) = error.reference?;
            Some(Violation {
                member: error.member,
                reference,
                placement: if pos_a > pos_b {
                    Placement::After
                } else {
                    Placement::Before
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(json: &str) -> OrderSpec {
        let options: OrderOptions = serde_json::from_str(json).unwrap();
        OrderSpec::new(&options).unwrap()
    }

    fn members(names: &[&str]) -> Vec<Member> {
        names.iter().map(|n| Member::named(n)).collect()
    }

    #[test]
    fn test_single_violation_for_swapped_pair() {
        let spec = spec(
            r#"{"order": ["A", "B", "C"], "groups": {"A": ["a1"], "B": ["b1"], "C": ["c1"]}}"#,
        );
        let members = members(&["b1", "a1", "c1"]);
        let violations = check_order(&spec, &members);
        assert_eq!(
            violations,
            vec![Violation {
                member: 0,
                reference: 1,
                placement: Placement::After
            }]
        );
    }

    #[test]
    fn test_default_order_render_last() {
        let spec = OrderSpec::default();
        let violations = check_order(&spec, &members(&["render", "componentDidMount"]));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].member, 0);
        assert_eq!(violations[0].reference, 1);
        assert_eq!(violations[0].placement, Placement::After);
    }

    #[test]
    fn test_default_order_accepts_sorted_members() {
        let spec = OrderSpec::default();
        let members = members(&["displayName", "constructor", "componentDidMount", "onClick", "render"]);
        assert!(check_order(&spec, &members).is_empty());
    }

    #[test]
    fn test_literal_beats_pattern() {
        let spec = spec(r#"{"order": ["/^on.+$/", "render", "onClick"]}"#);
        assert_eq!(spec.position_of(&Member::named("onClick")), 2);
        assert_eq!(spec.position_of(&Member::named("onChange")), 0);
    }

    #[test]
    fn test_pattern_flags() {
        let spec = spec(r#"{"order": ["/^ON/i", "everything-else"]}"#);
        assert_eq!(spec.position_of(&Member::named("onClick")), 0);
        assert_eq!(spec.position_of(&Member::named("render")), 1);
    }

    #[test]
    fn test_unmatched_without_everything_else() {
        let spec = spec(r#"{"order": ["render"]}"#);
        assert_eq!(spec.position_of(&Member::named("foo")), CATCH_ALL);
        assert!(check_order(&spec, &members(&["render", "foo"])).is_empty());
        assert_eq!(check_order(&spec, &members(&["foo", "render"])).len(), 1);
    }

    #[test]
    fn test_kind_groups() {
        let spec = spec(r#"{"order": ["getters", "render"]}"#);
        let getter = Member {
            getter: true,
            ..Member::named("value")
        };
        assert_eq!(getter.display_name(), "getter functions");
        let violations = check_order(&spec, &[Member::named("render"), getter]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].member, 0);
        assert_eq!(violations[0].reference, 1);
        assert_eq!(violations[0].placement, Placement::After);
    }

    #[test]
    fn test_invalid_pattern() {
        let options: OrderOptions = serde_json::from_str(r#"{"order": ["/(x/"]}"#).unwrap();
        assert!(OrderSpec::new(&options).is_err());
    }

    #[test]
    fn test_lookaround_patterns() {
        let ahead = spec(
            r#"{"order": ["/^(get|set)(?!(InitialState$|DefaultProps$|ChildContext$)).+$/", "everything-else"]}"#,
        );
        assert_eq!(ahead.position_of(&Member::named("getA")), 0);
        assert_eq!(ahead.position_of(&Member::named("getInitialState")), 1);
        let behind = spec(r#"{"order": ["/(?<=handle)Click$/", "everything-else"]}"#);
        assert_eq!(behind.position_of(&Member::named("handleClick")), 0);
        assert_eq!(behind.position_of(&Member::named("onClick")), 1);
    }

    #[test]
    fn test_member_matching_several_entries_takes_one_position() {
        let spec = spec(r#"{"order": ["/^on/", "/Click$/", "getters", "everything-else"]}"#);
        // Two patterns match: the earlier one wins.
        assert_eq!(spec.position_of(&Member::named("onClick")), 0);
        // A kind keyword outranks an earlier pattern.
        let getter = Member {
            getter: true,
            ..Member::named("onValue")
        };
        assert_eq!(spec.position_of(&getter), 2);
        // One position means one comparison slot: no self-contradicting report.
        let members = vec![Member::named("onClick"), Member::named("handleClick")];
        assert!(check_order(&spec, &members).is_empty());
    }
}
