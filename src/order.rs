//! Traversal order markers.
//!
//! A [`TrioSet`](crate::TrioSet) names one of these zero-sized types as its
//! `O` parameter; iterators and cursors inherit it. The order is part of the
//! container's type - walking the same keys in another order means building a
//! set of a different type, there is no runtime switch.

/// A traversal order over the tree.
///
/// Sealed: implemented only by [`InOrder`], [`PreOrder`] and [`PostOrder`].
pub trait Traversal: crate::raw::traverse::Traverse {}

/// Left subtree, node, right subtree: keys in ascending order.
///
/// This is the default order and the only one whose sequence is independent
/// of tree shape.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InOrder;

/// Node, left subtree, right subtree: parents before their children.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PreOrder;

/// Left subtree, right subtree, node: children before their parents.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PostOrder;

impl Traversal for InOrder {}
impl Traversal for PreOrder {}
impl Traversal for PostOrder {}
