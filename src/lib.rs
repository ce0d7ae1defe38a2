//! Binary-search-tree set with a selectable traversal order.
//!
//! This crate provides [`TrioSet`], an ordered set backed by an unbalanced
//! binary search tree whose iteration order is chosen *at the type level*
//! from three alternatives:
//!
//! - [`InOrder`] - left subtree, node, right subtree (sorted order, the default)
//! - [`PreOrder`] - node, left subtree, right subtree
//! - [`PostOrder`] - left subtree, right subtree, node
//!
//! Iteration is bidirectional under every order, and [`Cursor`]s can walk the
//! tree one position at a time in either direction, including across the
//! one-past-the-end sentinel.
//!
//! # Example
//!
//! ```
//! use trio_tree::{PreOrder, TrioSet};
//!
//! let sorted: TrioSet<i32> = [3, 1, 2].into();
//! assert_eq!(sorted.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! // The same keys, walked root-first instead.
//! let layered: TrioSet<i32, PreOrder> = [3, 1, 2].into();
//! assert_eq!(layered.iter().copied().collect::<Vec<_>>(), [3, 1, 2]);
//! ```
//!
//! # Characteristics
//!
//! - **`no_std` compatible** - only requires `alloc`.
//! - **No self-balancing** - the tree keeps the shape the insertion sequence
//!   gives it, so worst-case operations are O(n) on degenerate (sorted-input)
//!   trees. Use `BTreeSet` when balanced guarantees matter.
//! - **Custom comparators** - ordering is supplied by a [`compare::Compare`]
//!   instance fixed at construction, defaulting to the natural order.
//! - **Index-arena storage** - nodes live in a slot arena and link to each
//!   other (parent, left, right) by index, so cloning and dropping a tree
//!   never recurse.
//!
//! `TrioSet` is not internally synchronized; wrap it in a lock to share it
//! across threads.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// `Traversal` is sealed by a crate-private supertrait.
#![allow(private_bounds)]

extern crate alloc;

mod order;
mod raw;

pub mod trio_set;

pub use order::{InOrder, PostOrder, PreOrder, Traversal};
pub use trio_set::{Cursor, IntoIter, Iter, TrioSet};
