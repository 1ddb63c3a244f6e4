//! Fix composition and application
//!
//! Fixes are byte-range replacements over one immutable snapshot of the
//! source. A rule that must touch several disjoint ranges of a node composes
//! them into a single [`Fix`] covering the whole node.

use oxc_span::Span;
use tracing::debug;

use crate::diagnostic::{Diagnostic, Fix};

/// One sub-edit of a composed fix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Span,
    pub text: String,
}

impl Edit {
    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }

    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        Self::replace(Span::new(at, at), text)
    }

    pub fn remove(span: Span) -> Self {
        Self::replace(span, "")
    }
}

fn is_valid_range(source: &str, span: Span) -> bool {
    span.start <= span.end
        && (span.end as usize) <= source.len()
        && source.is_char_boundary(span.start as usize)
        && source.is_char_boundary(span.end as usize)
}

/// Check that a fix can be applied to `source` without splitting a character
pub fn is_applicable(source: &str, fix: &Fix) -> bool {
    is_valid_range(source, fix.span())
}

/// Coalesce `edits` into one replacement of `target`
///
/// The edits are spliced into a copy of the full source in descending offset
/// order, then the target range (shifted by the net length change) is sliced
/// back out. Returns `None` when an edit falls outside `target` or two edits
/// overlap.
pub fn compose_fix(source: &str, target: Span, edits: &[Edit]) -> Option<Fix> {
    if !is_valid_range(source, target) {
        debug!(?target, "fix target outside of source");
        return None;
    }

    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by_key(|edit| (edit.span.start, edit.span.end));

    for edit in &ordered {
        if !is_valid_range(source, edit.span)
            || edit.span.start < target.start
            || edit.span.end > target.end
        {
            debug!(edit = ?edit.span, ?target, "edit outside of fix target");
            return None;
        }
    }
    if ordered
        .windows(2)
        .any(|pair| pair[0].span.end > pair[1].span.start)
    {
        debug!(?target, "overlapping edits in composed fix");
        return None;
    }

    let mut text = source.to_string();
    let mut delta: isize = 0;
    for edit in ordered.iter().rev() {
        text.replace_range(edit.span.start as usize..edit.span.end as usize, &edit.text);
        delta += edit.text.len() as isize - edit.span.size() as isize;
    }

    let end = (target.end as isize + delta) as usize;
    let replacement = text.get(target.start as usize..end)?;
    Some(Fix::new(target, replacement))
}

/// Output of one fix pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSource {
    pub output: String,
    /// Number of fixes applied in this pass
    pub applied: usize,
    /// Fixes skipped because they overlap an applied one
    pub deferred: usize,
}

impl FixedSource {
    pub fn is_changed(&self) -> bool {
        self.applied > 0
    }
}

/// Apply every non-conflicting fix in one left-to-right sweep
///
/// A fix that starts at or before the end of the previously applied fix is
/// left for the next pass.
pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> FixedSource {
    let mut fixes: Vec<&Fix> = diagnostics.iter().filter_map(|d| d.fix.as_ref()).collect();
    fixes.sort_by_key(|fix| (fix.start, fix.end));

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0usize;
    let mut last_end: Option<u32> = None;
    let mut applied = 0;
    let mut deferred = 0;

    for fix in fixes {
        if !is_applicable(source, fix) {
            debug!(start = fix.start, end = fix.end, "dropping fix with invalid range");
            continue;
        }
        if last_end.is_some_and(|end| end >= fix.start) {
            deferred += 1;
            continue;
        }
        output.push_str(&source[cursor..fix.start as usize]);
        output.push_str(&fix.replacement);
        cursor = fix.end as usize;
        last_end = Some(fix.end);
        applied += 1;
    }
    output.push_str(&source[cursor..]);

    if deferred > 0 {
        debug!(applied, deferred, "deferred conflicting fixes to the next pass");
    }

    FixedSource {
        output,
        applied,
        deferred,
    }
}
