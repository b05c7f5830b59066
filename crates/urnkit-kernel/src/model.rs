//! The ranking engine: one parameterized model over the four kinds.
//!
//! An [`Urn`] is created once with `(n, k, kind)` and is immutable
//! thereafter. The count is derived, never stored; draws and ordinals
//! are transient values produced per call.
//!
//! The canonical order of every kind is the base odometer order
//! restricted to the kind's accepted subset. Unranking for the two
//! unordered kinds is defined by filtered enumeration over the base
//! space and therefore costs up to O(n^k); sequential callers should
//! step with [`Urn::successor`] or [`Urn::iter`](crate::cursor)
//! instead of re-unranking.

use serde::Serialize;

use crate::counting;
use crate::error::UrnError;
use crate::kind::UrnKind;
use crate::odometer::{self, Draw};

/// An immutable urn model: `n` labeled slots, draws of size `k`,
/// filtered by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Urn {
    n: u32,
    k: u32,
    kind: UrnKind,
}

impl Urn {
    /// Build a model, enforcing the kind's construction rule.
    ///
    /// The rules are kind-specific and deliberately not uniform:
    /// the unordered-with-repetition kind rejects `n == 0` even for
    /// `k == 0`, which is stricter than the base rule.
    pub fn new(n: u32, k: u32, kind: UrnKind) -> Result<Self, UrnError> {
        let invalid = |reason: &str| UrnError::InvalidConfiguration {
            kind,
            reason: reason.to_string(),
        };
        match kind {
            UrnKind::OrderedWithRepetition => {
                if n == 0 && k > 0 {
                    return Err(invalid("n == 0 and k > 0"));
                }
            }
            UrnKind::OrderedWithoutRepetition => {
                if k > n {
                    return Err(invalid("k > n"));
                }
            }
            UrnKind::UnorderedWithRepetition => {
                if n == 0 {
                    return Err(invalid("n == 0"));
                }
            }
            UrnKind::UnorderedWithoutRepetition => {
                if k > n {
                    return Err(invalid("k > n"));
                }
                if n == 0 {
                    return Err(invalid("n == 0"));
                }
            }
        }
        Ok(Self { n, k, kind })
    }

    /// Build a model from the two configuration flags.
    pub fn from_flags(
        n: u32,
        k: u32,
        order_matters: bool,
        repetition_allowed: bool,
    ) -> Result<Self, UrnError> {
        Self::new(n, k, UrnKind::from_flags(order_matters, repetition_allowed))
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn k(&self) -> u32 {
        self.k
    }

    pub fn kind(&self) -> UrnKind {
        self.kind
    }

    /// Total number of draws.
    ///
    /// A model with `k == 0` reports 0 draws. This engine's convention
    /// diverges from the mathematical value of 1 for the empty draw
    /// and is preserved for behavioral compatibility.
    pub fn count(&self) -> u64 {
        if self.k == 0 {
            return 0;
        }
        match self.kind {
            UrnKind::OrderedWithRepetition => counting::power(self.n, self.k),
            UrnKind::OrderedWithoutRepetition => counting::falling_factorial(self.n, self.k),
            UrnKind::UnorderedWithRepetition => counting::multiset(self.n, self.k),
            UrnKind::UnorderedWithoutRepetition => counting::binomial(self.n, self.k),
        }
    }

    /// The draw at `ordinal` in the kind's canonical order.
    pub fn unrank(&self, ordinal: i64) -> Result<Draw, UrnError> {
        let count = self.count();
        if ordinal < 0 || ordinal as u64 >= count {
            return Err(UrnError::OutOfRange { ordinal, count });
        }
        Ok(self.unrank_unchecked(ordinal as u64))
    }

    /// `unrank(0)`.
    pub fn first_draw(&self) -> Result<Draw, UrnError> {
        self.unrank(0)
    }

    /// `unrank(count() − 1)`.
    pub fn last_draw(&self) -> Result<Draw, UrnError> {
        self.unrank(self.count() as i64 - 1)
    }

    /// Whether `draw` is a member of this urn: correct shape, digits
    /// in `[0, n)`, and accepted by the kind's predicate.
    pub fn is_accepted(&self, draw: &[u32]) -> bool {
        odometer::in_domain(self.n, self.k, draw) && self.kind.accepts(draw)
    }

    /// The next draw after `draw` in the kind's canonical order.
    ///
    /// For the base kind this is one odometer increment, failing with
    /// [`UrnError::OverflowAtEnd`] on the maximal tuple. For the
    /// derived kinds the base step is repeated until an accepted tuple
    /// appears; a non-member input or the terminal accepted draw fails
    /// with [`UrnError::InvalidDraw`].
    pub fn successor(&self, draw: &[u32]) -> Result<Draw, UrnError> {
        self.checked_member(draw)?;
        let mut next = draw.to_vec();
        if self.kind == UrnKind::OrderedWithRepetition {
            odometer::step_up(self.n, &mut next)?;
            return Ok(next);
        }
        loop {
            if odometer::step_up(self.n, &mut next).is_err() {
                return Err(UrnError::invalid_draw(format!(
                    "already the last draw of this {}",
                    self.kind
                )));
            }
            if self.kind.accepts(&next) {
                return Ok(next);
            }
        }
    }

    /// The draw before `draw` in the kind's canonical order; the
    /// mirror image of [`Urn::successor`].
    pub fn predecessor(&self, draw: &[u32]) -> Result<Draw, UrnError> {
        self.checked_member(draw)?;
        let mut previous = draw.to_vec();
        if self.kind == UrnKind::OrderedWithRepetition {
            odometer::step_down(self.n, &mut previous)?;
            return Ok(previous);
        }
        loop {
            if odometer::step_down(self.n, &mut previous).is_err() {
                return Err(UrnError::invalid_draw(format!(
                    "already the first draw of this {}",
                    self.kind
                )));
            }
            if self.kind.accepts(&previous) {
                return Ok(previous);
            }
        }
    }

    fn checked_member(&self, draw: &[u32]) -> Result<(), UrnError> {
        if !odometer::in_domain(self.n, self.k, draw) {
            return Err(UrnError::invalid_draw(
                "wrong length or slot index out of range",
            ));
        }
        if !self.kind.accepts(draw) {
            return Err(UrnError::invalid_draw(format!(
                "not a member of the {}",
                self.kind
            )));
        }
        Ok(())
    }

    /// Unrank an ordinal already known to lie in `[0, count())`.
    pub(crate) fn unrank_unchecked(&self, ordinal: u64) -> Draw {
        match self.kind {
            UrnKind::OrderedWithRepetition => odometer::unrank_base(self.n, self.k, ordinal),
            UrnKind::OrderedWithoutRepetition => self.unrank_sequential(ordinal),
            UrnKind::UnorderedWithRepetition | UrnKind::UnorderedWithoutRepetition => {
                self.unrank_filtered(ordinal)
            }
        }
    }

    /// Lehmer-code unranking: pick from a shrinking label pool,
    /// dividing the remaining ordinal by the variation count of the
    /// positions still to fill.
    fn unrank_sequential(&self, ordinal: u64) -> Draw {
        let mut pool: Vec<u32> = (0..self.n).collect();
        let mut result = Vec::with_capacity(self.k as usize);
        let mut variations = counting::falling_factorial(self.n, self.k);
        let mut rest = ordinal;
        for position in 0..self.k {
            variations /= (self.n - position) as u64;
            let index = (rest / variations) as usize;
            result.push(pool.remove(index));
            rest -= index as u64 * variations;
        }
        result
    }

    /// Reference unranking for the unordered kinds: walk the base
    /// odometer in order and return the ordinal-th accepted tuple.
    /// Costs up to O(n^k).
    fn unrank_filtered(&self, ordinal: u64) -> Draw {
        let mut draw = vec![0u32; self.k as usize];
        let mut accepted = 0u64;
        loop {
            if self.kind.accepts(&draw) {
                if accepted == ordinal {
                    return draw;
                }
                accepted += 1;
            }
            if odometer::step_up(self.n, &mut draw).is_err() {
                // ordinal was range-checked against count()
                unreachable!("base space exhausted before the requested acceptance");
            }
        }
    }
}
