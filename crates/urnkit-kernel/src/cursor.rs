//! The draw cursor and the lazy draw sequence.
//!
//! A [`DrawCursor`] owns nothing but an ordinal and a reference to its
//! immutable model. Dereferencing recomputes the draw from the ordinal
//! every time; there is no buffer to invalidate, so cursors are
//! copy-cheap and restartable. Out-of-range dereference raises
//! [`UrnError::OutOfRange`] (the raising policy of the two historical
//! behaviors; see DESIGN.md).
//!
//! [`Draws`] is the same sequence as a standard double-ended Rust
//! iterator; reverse traversal is `.rev()`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::UrnError;
use crate::model::Urn;
use crate::odometer::Draw;

/// Classification of a cursor's ordinal against `[0, count())`.
///
/// Purely derived from the ordinal; carries no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    BeforeFirst,
    InRange,
    AfterLast,
}

fn classify(ordinal: i64, count: u64) -> Position {
    if ordinal < 0 {
        Position::BeforeFirst
    } else if ordinal as u64 >= count {
        Position::AfterLast
    } else {
        Position::InRange
    }
}

/// A random-access, bidirectional cursor over a model's draws.
#[derive(Debug, Clone, Copy)]
pub struct DrawCursor<'a> {
    urn: &'a Urn,
    ordinal: i64,
    position: Position,
}

impl<'a> DrawCursor<'a> {
    pub fn new(urn: &'a Urn, ordinal: i64) -> Self {
        Self {
            urn,
            ordinal,
            position: classify(ordinal, urn.count()),
        }
    }

    pub fn ordinal(&self) -> i64 {
        self.ordinal
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn n(&self) -> u32 {
        self.urn.n()
    }

    pub fn k(&self) -> u32 {
        self.urn.k()
    }

    pub fn count(&self) -> u64 {
        self.urn.count()
    }

    /// The draw at the cursor's ordinal.
    pub fn draw(&self) -> Result<Draw, UrnError> {
        self.urn.unrank(self.ordinal)
    }

    /// Move one draw forward.
    pub fn advance(&mut self) {
        self.offset_by(1);
    }

    /// Move one draw backward.
    pub fn retreat(&mut self) {
        self.offset_by(-1);
    }

    /// Move by a signed number of draws.
    pub fn offset_by(&mut self, delta: i64) {
        self.ordinal += delta;
        self.position = classify(self.ordinal, self.urn.count());
    }

    /// A copy of the cursor moved by a signed number of draws.
    pub fn offset(mut self, delta: i64) -> Self {
        self.offset_by(delta);
        self
    }

    /// Ordinal distance from `other` to `self`.
    pub fn distance(&self, other: &Self) -> i64 {
        self.ordinal - other.ordinal
    }

    /// The draw `index` positions past the cursor; equivalent to
    /// `self.offset(index).draw()`.
    pub fn at(&self, index: i64) -> Result<Draw, UrnError> {
        self.offset(index).draw()
    }
}

// Cursor identity is the ordinal alone; the model reference does not
// participate in comparisons.
impl PartialEq for DrawCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal
    }
}

impl Eq for DrawCursor<'_> {}

impl PartialOrd for DrawCursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DrawCursor<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl Urn {
    /// Cursor at ordinal 0.
    pub fn begin(&self) -> DrawCursor<'_> {
        DrawCursor::new(self, 0)
    }

    /// Cursor one past the last draw.
    pub fn end(&self) -> DrawCursor<'_> {
        DrawCursor::new(self, self.count() as i64)
    }

    /// Cursor at an arbitrary ordinal, in range or not.
    pub fn cursor_at(&self, ordinal: i64) -> DrawCursor<'_> {
        DrawCursor::new(self, ordinal)
    }

    /// The lazy sequence of all draws in canonical order.
    pub fn iter(&self) -> Draws<'_> {
        Draws {
            urn: self,
            front: 0,
            back: self.count(),
        }
    }
}

impl<'a> IntoIterator for &'a Urn {
    type Item = Draw;
    type IntoIter = Draws<'a>;

    fn into_iter(self) -> Draws<'a> {
        self.iter()
    }
}

/// Double-ended iterator over `[0, count())`, unranking on demand.
#[derive(Debug, Clone)]
pub struct Draws<'a> {
    urn: &'a Urn,
    front: u64,
    back: u64,
}

impl Iterator for Draws<'_> {
    type Item = Draw;

    fn next(&mut self) -> Option<Draw> {
        if self.front >= self.back {
            return None;
        }
        let draw = self.urn.unrank_unchecked(self.front);
        self.front += 1;
        Some(draw)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back - self.front) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Draws<'_> {
    fn next_back(&mut self) -> Option<Draw> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.urn.unrank_unchecked(self.back))
    }
}

impl ExactSizeIterator for Draws<'_> {}

impl std::iter::FusedIterator for Draws<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::UrnKind;

    fn base_urn() -> Urn {
        Urn::new(2, 2, UrnKind::OrderedWithRepetition).unwrap()
    }

    #[test]
    fn position_tracks_the_ordinal() {
        let urn = base_urn();
        let mut cursor = urn.begin();
        assert_eq!(cursor.position(), Position::InRange);
        cursor.retreat();
        assert_eq!(cursor.position(), Position::BeforeFirst);
        cursor.offset_by(5);
        assert_eq!(cursor.position(), Position::AfterLast);
        cursor.offset_by(-1);
        assert_eq!(cursor.position(), Position::InRange);
    }

    #[test]
    fn dereference_raises_out_of_range() {
        let urn = base_urn();
        assert_eq!(urn.begin().draw().unwrap(), vec![0, 0]);
        assert!(matches!(
            urn.end().draw(),
            Err(UrnError::OutOfRange { .. })
        ));
        assert!(matches!(
            urn.cursor_at(-1).draw(),
            Err(UrnError::OutOfRange { .. })
        ));
    }

    #[test]
    fn comparisons_use_the_ordinal_alone() {
        let urn = base_urn();
        let other = base_urn();
        assert_eq!(urn.begin(), other.begin());
        assert!(urn.begin() < urn.end());
        assert!(urn.begin() <= urn.cursor_at(0));
        assert_eq!(urn.end().distance(&urn.begin()), urn.count() as i64);
    }

    #[test]
    fn indexed_access_matches_offset_dereference() {
        let urn = base_urn();
        let begin = urn.begin();
        for i in 0..urn.count() as i64 {
            assert_eq!(begin.at(i).unwrap(), begin.offset(i).draw().unwrap());
            assert_eq!(begin.at(i).unwrap(), urn.unrank(i).unwrap());
        }
    }

    #[test]
    fn forward_iteration_in_canonical_order() {
        let urn = base_urn();
        let draws: Vec<_> = urn.iter().collect();
        assert_eq!(
            draws,
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
        );
        assert_eq!(urn.iter().len(), 4);
    }

    #[test]
    fn reverse_is_forward_reversed() {
        let urn = Urn::new(3, 2, UrnKind::UnorderedWithRepetition).unwrap();
        let mut forward: Vec<_> = urn.iter().collect();
        let reversed: Vec<_> = urn.iter().rev().collect();
        forward.reverse();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn meeting_in_the_middle_fuses() {
        let urn = base_urn();
        let mut draws = urn.iter();
        assert_eq!(draws.next(), Some(vec![0, 0]));
        assert_eq!(draws.next_back(), Some(vec![1, 1]));
        assert_eq!(draws.next_back(), Some(vec![1, 0]));
        assert_eq!(draws.next(), Some(vec![0, 1]));
        assert_eq!(draws.next(), None);
        assert_eq!(draws.next_back(), None);
    }

    #[test]
    fn empty_model_has_empty_sequence() {
        let urn = Urn::new(3, 0, UrnKind::OrderedWithRepetition).unwrap();
        assert_eq!(urn.begin(), urn.end());
        assert_eq!(urn.iter().count(), 0);
    }
}
