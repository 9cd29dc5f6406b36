//! figcode Style Translators
//!
//! Translates a single node's visual properties into target-framework
//! attribute fragments: Flutter widget properties and Tailwind utility
//! classes.
//!
//! ```text
//! VisualNode → translate_node() → NodeFragments { size, flow, shadow… }
//! ```
//!
//! Every translator is a pure function of the borrowed node; the external
//! driver walks the tree, calls the translators per node, and concatenates
//! the fragments. Each fragment ends with its own separator so concatenation
//! needs no glue.

pub mod flutter;
pub mod scale;
pub mod tailwind;

use std::collections::HashMap;
use std::hash::Hash;

use figcode_node::VisualNode;

pub use scale::{ScalePolicy, ScaleTable, UnmappedValueError};

/// The target framework for a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Flutter,
    Tailwind,
}

/// The per-node output bundle.
///
/// Fragments that do not apply (e.g. `elevation` for Tailwind, `flow` for a
/// childless node) are empty strings, never errors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeFragments {
    pub size: String,
    pub flow: String,
    pub box_shadow: String,
    pub elevation: String,
    pub shadow_color: String,
}

/// Raised when an aggregation is asked for on an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot pick the most frequent value of an empty sequence")]
pub struct EmptyInputError;

/// Translation error for one node.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodegenError {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
    #[error(transparent)]
    UnmappedValue(#[from] UnmappedValueError),
}

/// Translate one node into its fragments for the given target.
///
/// The recursive document walk belongs to the caller; this only looks at the
/// node itself (and, for flow and size elision, the immediate children the
/// host already resolved onto it).
pub fn translate_node(
    node: &VisualNode,
    target: Target,
) -> Result<NodeFragments, CodegenError> {
    match target {
        Target::Tailwind => {
            let table = tailwind::width_height_scale();
            let flow = match node.as_container() {
                Some(frame) if !frame.children.is_empty() => {
                    tailwind::row_column_props(frame, table)?
                }
                _ => String::new(),
            };
            Ok(NodeFragments {
                size: tailwind::container_size_props(node, table)?,
                flow,
                ..NodeFragments::default()
            })
        }
        Target::Flutter => {
            let flow = match node.as_container() {
                Some(frame) if !frame.children.is_empty() => {
                    flutter::row_column_props(frame)?
                }
                _ => String::new(),
            };
            let (elevation, shadow_color) = flutter::elevation_and_shadow_color(node);
            Ok(NodeFragments {
                size: flutter::size_props(node),
                flow,
                box_shadow: flutter::box_shadow(node),
                elevation,
                shadow_color,
            })
        }
    }
}

/// Return the most frequent value in a sequence.
///
/// Ties go to the value encountered first, so output is deterministic for a
/// given input order. The caller guards against empty sequences (childless
/// containers) or handles the error.
pub fn most_frequent<T: Eq + Hash>(values: &[T]) -> Result<&T, EmptyInputError> {
    if values.is_empty() {
        return Err(EmptyInputError);
    }

    let mut counts: HashMap<&T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // Scan in input order with a strict comparison so the first value among
    // the maximum-count group wins.
    let mut winner = &values[0];
    let mut winner_count = 0;
    for value in values {
        let count = counts[value];
        if count > winner_count {
            winner = value;
            winner_count = count;
        }
    }

    Ok(winner)
}

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    // The integer path only holds where i64 can represent the value; the
    // cast saturates beyond that.
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
