//! The four urn kinds and their constraint predicates.
//!
//! Every kind is the base odometer sequence filtered by a combination
//! of two constraints:
//!
//! ```text
//!                        │ repetition allowed │ repetition forbidden
//! ───────────────────────┼────────────────────┼─────────────────────
//!   order matters        │ no filter          │ duplicate-free
//!   order does not matter│ weakly increasing  │ strictly increasing
//! ```
//!
//! The fourth kind is the intersection of the other two constraints,
//! expressed here as a composed predicate rather than the diamond
//! inheritance of classical textbook implementations.

use serde::{Deserialize, Serialize};

/// One of the four classical urn models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrnKind {
    /// Order matters, repetition allowed: all base-n tuples.
    OrderedWithRepetition,

    /// Order matters, repetition forbidden: duplicate-free tuples.
    OrderedWithoutRepetition,

    /// Order does not matter, repetition allowed: weakly increasing
    /// tuples.
    UnorderedWithRepetition,

    /// Order does not matter, repetition forbidden: strictly
    /// increasing tuples.
    UnorderedWithoutRepetition,
}

impl UrnKind {
    /// Select a kind from the two configuration flags.
    pub fn from_flags(order_matters: bool, repetition_allowed: bool) -> Self {
        match (order_matters, repetition_allowed) {
            (true, true) => Self::OrderedWithRepetition,
            (true, false) => Self::OrderedWithoutRepetition,
            (false, true) => Self::UnorderedWithRepetition,
            (false, false) => Self::UnorderedWithoutRepetition,
        }
    }

    pub fn order_matters(&self) -> bool {
        matches!(
            self,
            Self::OrderedWithRepetition | Self::OrderedWithoutRepetition
        )
    }

    pub fn repetition_allowed(&self) -> bool {
        matches!(
            self,
            Self::OrderedWithRepetition | Self::UnorderedWithRepetition
        )
    }

    /// The kind's membership predicate over slot indices.
    ///
    /// Shape (length, digit range) is checked by the model, not here.
    pub fn accepts(&self, draw: &[u32]) -> bool {
        match self {
            Self::OrderedWithRepetition => true,
            Self::OrderedWithoutRepetition => !has_duplicate(draw),
            Self::UnorderedWithRepetition => !descends_somewhere(draw),
            Self::UnorderedWithoutRepetition => !has_duplicate(draw) && !descends_somewhere(draw),
        }
    }
}

impl std::fmt::Display for UrnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::OrderedWithRepetition => "ordered urn with repetition",
            Self::OrderedWithoutRepetition => "ordered urn without repetition",
            Self::UnorderedWithRepetition => "unordered urn with repetition",
            Self::UnorderedWithoutRepetition => "unordered urn without repetition",
        };
        write!(f, "{text}")
    }
}

/// Whether any two positions of the draw hold the same slot index.
pub fn has_duplicate(draw: &[u32]) -> bool {
    for (i, a) in draw.iter().enumerate() {
        if draw[i + 1..].contains(a) {
            return true;
        }
    }
    false
}

/// Whether some position holds a larger slot index than its right
/// neighbor, i.e. the draw is not weakly increasing.
pub fn descends_somewhere(draw: &[u32]) -> bool {
    draw.windows(2).any(|pair| pair[0] > pair[1])
}
