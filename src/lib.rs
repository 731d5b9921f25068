//! A singly-linked list that keeps itself sorted.
//!
//! A [`SortedList`] is created with a fixed [`Order`] and holds values of a
//! single [`Kind`] (integer or text), locked by the first value added. Every
//! insertion walks the chain to its place, so the list can be read in order
//! at any time through [`SortedList::iter`] or [`SortedList::to_vec`].
//!
//! The list performs no synchronization; wrap it in a lock to share it.

mod error;
mod linkedlist;
mod sorted_list;
mod value;

pub use error::ListError;
pub use sorted_list::{Iter, Order, ParseOrderError, SortedList};
pub use value::{IntoValue, Kind, Value};
