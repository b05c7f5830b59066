//! Element projection: slot indices to a caller-supplied vocabulary.
//!
//! An [`ElementUrn`] is a pure lookup-table collaborator of the
//! engine: it consumes index draws from an inner [`Urn`] and
//! translates them through an ordered vocabulary of length n. The
//! inverse mapping runs a linear search over the vocabulary; with
//! duplicate vocabulary entries the first occurrence wins.

use crate::error::UrnError;
use crate::kind::UrnKind;
use crate::model::Urn;
use crate::odometer::Draw;

/// An urn whose draws are expressed in a caller vocabulary instead of
/// slot indices.
#[derive(Debug, Clone)]
pub struct ElementUrn<T> {
    urn: Urn,
    elements: Vec<T>,
}

impl<T: Clone + PartialEq> ElementUrn<T> {
    /// Build a model over `elements`, with `n = elements.len()`.
    pub fn new(k: u32, elements: Vec<T>, kind: UrnKind) -> Result<Self, UrnError> {
        let urn = Urn::new(elements.len() as u32, k, kind)?;
        Ok(Self { urn, elements })
    }

    /// The underlying index-space model.
    pub fn urn(&self) -> &Urn {
        &self.urn
    }

    pub fn n(&self) -> u32 {
        self.urn.n()
    }

    pub fn k(&self) -> u32 {
        self.urn.k()
    }

    pub fn kind(&self) -> UrnKind {
        self.urn.kind()
    }

    pub fn count(&self) -> u64 {
        self.urn.count()
    }

    /// Translate an index draw into elements by direct lookup.
    pub fn to_elements(&self, draw: &[u32]) -> Result<Vec<T>, UrnError> {
        draw.iter()
            .map(|&index| {
                self.elements
                    .get(index as usize)
                    .cloned()
                    .ok_or_else(|| UrnError::invalid_draw("slot index out of range"))
            })
            .collect()
    }

    /// Translate an element draw back into indices by linear search.
    pub fn to_indices(&self, draw: &[T]) -> Result<Draw, UrnError> {
        draw.iter()
            .map(|element| {
                self.elements
                    .iter()
                    .position(|candidate| candidate == element)
                    .map(|index| index as u32)
                    .ok_or_else(|| UrnError::invalid_draw("element not in the vocabulary"))
            })
            .collect()
    }

    /// The element draw at `ordinal`.
    pub fn draw(&self, ordinal: i64) -> Result<Vec<T>, UrnError> {
        self.to_elements(&self.urn.unrank(ordinal)?)
    }

    pub fn first_draw(&self) -> Result<Vec<T>, UrnError> {
        self.to_elements(&self.urn.first_draw()?)
    }

    pub fn last_draw(&self) -> Result<Vec<T>, UrnError> {
        self.to_elements(&self.urn.last_draw()?)
    }

    /// The next element draw in the canonical order.
    pub fn successor(&self, draw: &[T]) -> Result<Vec<T>, UrnError> {
        self.to_elements(&self.urn.successor(&self.to_indices(draw)?)?)
    }

    /// The previous element draw in the canonical order.
    pub fn predecessor(&self, draw: &[T]) -> Result<Vec<T>, UrnError> {
        self.to_elements(&self.urn.predecessor(&self.to_indices(draw)?)?)
    }

    /// Whether an element draw is a member of the urn.
    pub fn is_accepted(&self, draw: &[T]) -> bool {
        self.to_indices(draw)
            .map(|indices| self.urn.is_accepted(&indices))
            .unwrap_or(false)
    }

    /// The lazy element sequence in canonical order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Vec<T>> + ExactSizeIterator + '_ {
        self.urn
            .iter()
            .map(|draw| draw.iter().map(|&i| self.elements[i as usize].clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> ElementUrn<char> {
        ElementUrn::new(2, vec!['a', 'b', 'c'], UrnKind::UnorderedWithRepetition).unwrap()
    }

    #[test]
    fn projection_follows_the_index_sequence() {
        let urn = letters();
        let draws: Vec<String> = urn.iter().map(|d| d.into_iter().collect()).collect();
        assert_eq!(draws, vec!["aa", "ab", "ac", "bb", "bc", "cc"]);
    }

    #[test]
    fn inverse_mapping_by_linear_search() {
        let urn = letters();
        assert_eq!(urn.to_indices(&['b', 'c']).unwrap(), vec![1, 2]);
        assert!(matches!(
            urn.to_indices(&['b', 'z']),
            Err(UrnError::InvalidDraw { .. })
        ));
    }

    #[test]
    fn stepping_in_element_space() {
        let urn = letters();
        assert_eq!(urn.successor(&['a', 'c']).unwrap(), vec!['b', 'b']);
        assert_eq!(urn.predecessor(&['b', 'b']).unwrap(), vec!['a', 'c']);
        assert_eq!(urn.first_draw().unwrap(), vec!['a', 'a']);
        assert_eq!(urn.last_draw().unwrap(), vec!['c', 'c']);
    }

    #[test]
    fn membership_in_element_space() {
        let urn = letters();
        assert!(urn.is_accepted(&['a', 'c']));
        assert!(!urn.is_accepted(&['c', 'a'])); // descending
        assert!(!urn.is_accepted(&['a', 'z'])); // unknown element
    }

    #[test]
    fn validation_applies_to_the_vocabulary_size() {
        let err = ElementUrn::new(3, vec!['x', 'y'], UrnKind::OrderedWithoutRepetition)
            .unwrap_err();
        assert!(matches!(err, UrnError::InvalidConfiguration { .. }));
    }
}
