//! Pixel-to-scale unit mapping.
//!
//! Target frameworks with discrete size scales (Tailwind) cannot express an
//! arbitrary pixel value; a `ScaleTable` quantizes raw pixels onto the
//! framework's breakpoints. The table is passed explicitly into every
//! translator call so multiple target scales can coexist and be tested
//! independently.

/// How a [`ScaleTable`] resolves a pixel value against its breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalePolicy {
    /// Breakpoint with the smallest absolute distance; the lower breakpoint
    /// wins ties.
    #[default]
    Nearest,
    /// Greatest breakpoint not exceeding the value, clamped to the smallest
    /// breakpoint for values below the whole table.
    NearestBelow,
    /// Breakpoint must match the value; anything else is an error.
    Exact,
}

/// Raised when a pixel value has no representable token under the table's
/// policy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("no scale token for {value}px")]
pub struct UnmappedValueError {
    pub value: f64,
}

/// An ordered mapping from pixel breakpoints to discrete scale tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTable {
    entries: Vec<(f64, String)>,
    policy: ScalePolicy,
}

const EXACT_EPSILON: f64 = 1e-9;

impl ScaleTable {
    /// Build a table from breakpoint/token pairs. Entries are sorted by
    /// breakpoint so lookups can rely on monotonic order.
    pub fn new<S: Into<String>>(
        entries: impl IntoIterator<Item = (f64, S)>,
        policy: ScalePolicy,
    ) -> Self {
        let mut entries: Vec<(f64, String)> = entries
            .into_iter()
            .map(|(px, token)| (px, token.into()))
            .collect();
        entries.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { entries, policy }
    }

    /// Map a pixel value to its scale token under the table's policy.
    ///
    /// Stable: equal inputs always yield equal outputs. An empty table maps
    /// nothing.
    pub fn map_px(&self, px: f64) -> Result<&str, UnmappedValueError> {
        match self.policy {
            ScalePolicy::Exact => self
                .entries
                .iter()
                .find(|(breakpoint, _)| (breakpoint - px).abs() < EXACT_EPSILON)
                .map(|(_, token)| token.as_str())
                .ok_or(UnmappedValueError { value: px }),
            ScalePolicy::NearestBelow => {
                let smallest = self
                    .entries
                    .first()
                    .ok_or(UnmappedValueError { value: px })?;
                Ok(self
                    .entries
                    .iter()
                    .rev()
                    .find(|(breakpoint, _)| *breakpoint <= px)
                    .map(|(_, token)| token.as_str())
                    .unwrap_or(smallest.1.as_str()))
            }
            ScalePolicy::Nearest => {
                let mut best: Option<(f64, &str)> = None;
                for (breakpoint, token) in &self.entries {
                    let distance = (px - breakpoint).abs();
                    // Strict comparison: on a tie the lower breakpoint,
                    // encountered first in sorted order, is kept.
                    match best {
                        Some((best_distance, _)) if distance >= best_distance => {}
                        _ => best = Some((distance, token.as_str())),
                    }
                }
                best.map(|(_, token)| token)
                    .ok_or(UnmappedValueError { value: px })
            }
        }
    }

    pub fn policy(&self) -> ScalePolicy {
        self.policy
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
