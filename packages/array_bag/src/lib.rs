#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A multiset ("bag") container backed by one contiguous, growable buffer.
//!
//! This crate provides [`ArrayBag`], an unordered collection that may contain any number of
//! equal items. It supports adding items, removing items by value, membership tests,
//! frequency counts, removing a random item and exporting the contents as a `Vec`.
//!
//! # Key Features
//!
//! - **Unbounded growth**: The bag starts with room for 10 items (configurable via
//!   [`ArrayBag::builder()`]) and doubles its capacity whenever it is full, so adding an
//!   item always succeeds.
//! - **O(1) removal**: Once the item is found, the last item in the bag is moved into its
//!   slot instead of shifting the tail. Removal therefore reorders the bag.
//! - **Capacity is never released**: Removal and [`ArrayBag::clear()`] keep the buffer for
//!   future insertions.
//! - **Random extraction**: [`ArrayBag::grab()`] removes a uniformly drawn item, with
//!   [`ArrayBag::grab_with()`] accepting any [`rand::Rng`] for reproducible draws.
//!
//! # Example
//!
//! ```rust
//! use array_bag::ArrayBag;
//!
//! let mut bag = ArrayBag::new();
//!
//! bag.add(1);
//! bag.add(2);
//! bag.add(2);
//!
//! assert_eq!(bag.len(), 3);
//! assert_eq!(bag.frequency_of(&2), 2);
//! assert!(bag.contains(&1));
//! assert!(!bag.contains(&3));
//!
//! bag.remove(&2);
//! assert_eq!(bag.frequency_of(&2), 1);
//!
//! bag.clear();
//! assert!(bag.is_empty());
//! ```
//!
//! # Diagnostics
//!
//! The bag reports buffer growth and unsuccessful removals as `tracing` debug events and
//! grabbing from an empty bag as a warning. Whether anything listens to these events has no
//! effect on the behavior of the bag.

mod bag;
mod builder;
mod error;
mod search;

pub use bag::ArrayBag;
pub use builder::*;
pub use error::Error;
pub(crate) use error::Result;
