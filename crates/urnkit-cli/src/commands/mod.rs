pub mod back;
pub mod contains;
pub mod count;
pub mod list;
pub mod next;
pub mod unrank;
