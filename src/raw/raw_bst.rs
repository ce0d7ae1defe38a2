use alloc::vec::Vec;
use core::cmp::Ordering::{Equal, Greater, Less};

use compare::Compare;
use smallvec::SmallVec;

use super::arena::{Arena, Handle};
use super::node::{Link, Node};
use super::traverse::{Traverse, leftmost};

/// The unbalanced binary search tree backing `TrioSet`.
///
/// Owns every node through the arena; the ordering comparator is supplied by
/// the caller on each operation, so one raw tree type serves every
/// `Compare` instantiation. The tree never rebalances: shape is entirely
/// determined by the insertion and removal sequence.
#[derive(Clone)]
pub(crate) struct RawBst<K> {
    nodes: Arena<Node<K>>,
    root: Link,
}

impl<K> RawBst<K> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) const fn root(&self) -> Link {
        self.root
    }

    pub(crate) const fn nodes(&self) -> &Arena<Node<K>> {
        &self.nodes
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K> {
        self.nodes.get(handle)
    }

    /// Handle-tolerant lookup for positions held across mutations.
    pub(crate) fn try_node(&self, handle: Handle) -> Option<&Node<K>> {
        self.nodes.try_get(handle)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Inserts `key`, returning its node and whether it was newly added.
    ///
    /// A duplicate key is a no-op reporting the existing node and `false`;
    /// nothing is allocated in that case.
    pub(crate) fn insert<C>(&mut self, key: K, cmp: &C) -> (Handle, bool)
    where
        C: Compare<K>,
    {
        let Some(root) = self.root else {
            let handle = self.nodes.alloc(Node::new(key));
            self.root = Some(handle);
            return (handle, true);
        };

        let mut current = root;
        loop {
            match cmp.compare(&key, &self.nodes.get(current).key) {
                Less => match self.nodes.get(current).left {
                    Some(left) => current = left,
                    None => {
                        let handle = self.link_new(key, current);
                        self.nodes.get_mut(current).left = Some(handle);
                        return (handle, true);
                    }
                },
                Greater => match self.nodes.get(current).right {
                    Some(right) => current = right,
                    None => {
                        let handle = self.link_new(key, current);
                        self.nodes.get_mut(current).right = Some(handle);
                        return (handle, true);
                    }
                },
                Equal => return (current, false),
            }
        }
    }

    fn link_new(&mut self, key: K, parent: Handle) -> Handle {
        let mut node = Node::new(key);
        node.parent = Some(parent);
        self.nodes.alloc(node)
    }

    pub(crate) fn find<Q, C>(&self, key: &Q, cmp: &C) -> Link
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match cmp.compare(key, &node.key) {
                Less => node.left,
                Greater => node.right,
                Equal => return Some(handle),
            };
        }
        None
    }

    /// The node holding the smallest key that is not less than `key`.
    pub(crate) fn lower_bound<Q, C>(&self, key: &Q, cmp: &C) -> Link
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let mut current = self.root;
        let mut bound = None;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if cmp.compares_le(key, &node.key) {
                bound = Some(handle);
                current = node.left;
            } else {
                current = node.right;
            }
        }
        bound
    }

    /// The node holding the smallest key that is greater than `key`.
    pub(crate) fn upper_bound<Q, C>(&self, key: &Q, cmp: &C) -> Link
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let mut current = self.root;
        let mut bound = None;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if cmp.compares_lt(key, &node.key) {
                bound = Some(handle);
                current = node.left;
            } else {
                current = node.right;
            }
        }
        bound
    }

    /// Structurally removes `target`, returning its key and the node that now
    /// occupies the vacated slot (the sentinel when a leaf was removed).
    ///
    /// A node with two children is not unlinked itself: the in-order
    /// successor's key is promoted into it and the successor node - which by
    /// construction has no left child - is physically detached instead. The
    /// returned key is always the one `target` held on entry.
    pub(crate) fn detach(&mut self, target: Handle) -> (K, Link) {
        let (left, right) = {
            let node = self.nodes.get(target);
            (node.left, node.right)
        };

        if let (Some(_), Some(right)) = (left, right) {
            let successor = leftmost(&self.nodes, right);
            self.unlink(successor);
            let promoted = self.nodes.take(successor).key;
            let key = core::mem::replace(&mut self.nodes.get_mut(target).key, promoted);
            (key, Some(target))
        } else {
            let child = left.or(right);
            self.unlink(target);
            (self.nodes.take(target).key, child)
        }
    }

    /// Splices a node with at most one child out of the link structure.
    fn unlink(&mut self, target: Handle) {
        let node = self.nodes.get(target);
        debug_assert!(node.left.is_none() || node.right.is_none());
        let child = node.left.or(node.right);
        let parent = node.parent;

        match parent {
            Some(parent) => {
                let slot = self.nodes.get_mut(parent);
                if slot.left == Some(target) {
                    slot.left = child;
                } else {
                    slot.right = child;
                }
            }
            None => self.root = child,
        }
        if let Some(child) = child {
            self.nodes.get_mut(child).parent = parent;
        }
    }

    /// Empties the tree, yielding every key in `O`'s traversal order.
    pub(crate) fn drain_ordered<O: Traverse>(&mut self) -> Vec<K> {
        let mut handles: SmallVec<[Handle; 32]> = SmallVec::new();
        let mut cursor = O::next(&self.nodes, self.root, None);
        while let Some(handle) = cursor {
            handles.push(handle);
            cursor = O::next(&self.nodes, self.root, Some(handle));
        }

        let keys = handles.into_iter().map(|handle| self.nodes.take(handle).key).collect();
        self.clear();
        keys
    }
}
