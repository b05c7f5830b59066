//! # Urnkit Kernel
//!
//! Lazy enumeration of the four classical urn models: for `(n, k)`
//! and a kind, the engine counts the draws, unranks an arbitrary
//! ordinal, steps between adjacent draws, and exposes the whole
//! sequence as a random-access cursor — all without materializing the
//! draw space.
//!
//! ## Architecture
//!
//! ```text
//! odometer          ← base-n tuples, rightmost-fastest order
//!     │
//! UrnKind           ← the four (order × repetition) constraint filters
//!     │
//! Urn               ← count / unrank / successor / predecessor
//!     │
//! DrawCursor, Draws ← ordinal-only cursor and double-ended iterator
//!     │
//! ElementUrn<T>     ← projection onto a caller vocabulary
//! ```
//!
//! Canonical order for every kind is the base odometer order
//! restricted to the kind's accepted subset. Unranking the two
//! unordered kinds follows the reference filtered-enumeration
//! semantics and costs up to O(n^k); sequential traversal is O(1)
//! amortized per step.

pub mod counting;
pub mod cursor;
pub mod error;
pub mod kind;
pub mod model;
pub mod odometer;
pub mod projection;

pub use cursor::{DrawCursor, Draws, Position};
pub use error::UrnError;
pub use kind::UrnKind;
pub use model::Urn;
pub use odometer::Draw;
pub use projection::ElementUrn;
