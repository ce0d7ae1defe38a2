//! Order-polymorphic stepping over the node graph.
//!
//! Each traversal order contributes a `next`/`prev` pair, total at the
//! sentinel position (`current == None`): stepping forward from the sentinel
//! lands on the order's first position, stepping backward on its last.
//! The ancestor walks are the delicate part; every branch here is pinned by
//! the fixture tests at the bottom of the file.

use crate::order::{InOrder, PostOrder, PreOrder};

use super::arena::{Arena, Handle};
use super::node::{Link, Node};

/// Stepping interface implemented by the public order markers.
///
/// Crate-private supertrait of [`crate::Traversal`], which is what seals the
/// marker set: external types cannot supply an implementation.
pub(crate) trait Traverse {
    /// One step forward from `current`, or to the order's first position when
    /// `current` is the sentinel. Returns the sentinel past the last position.
    fn next<K>(nodes: &Arena<Node<K>>, root: Link, current: Link) -> Link;

    /// One step backward from `current`, or to the order's last position when
    /// `current` is the sentinel.
    fn prev<K>(nodes: &Arena<Node<K>>, root: Link, current: Link) -> Link;
}

/// Descends to the leftmost node of `from`'s subtree.
pub(crate) fn leftmost<K>(nodes: &Arena<Node<K>>, mut from: Handle) -> Handle {
    while let Some(left) = nodes.get(from).left {
        from = left;
    }
    from
}

/// Descends to the rightmost node of `from`'s subtree.
fn rightmost<K>(nodes: &Arena<Node<K>>, mut from: Handle) -> Handle {
    while let Some(right) = nodes.get(from).right {
        from = right;
    }
    from
}

/// Descends to the last pre-order node of `from`'s subtree: keep taking the
/// right child, falling back to the left, until a leaf.
fn pre_order_last<K>(nodes: &Arena<Node<K>>, mut from: Handle) -> Handle {
    loop {
        let node = nodes.get(from);
        if let Some(right) = node.right {
            from = right;
        } else if let Some(left) = node.left {
            from = left;
        } else {
            return from;
        }
    }
}

/// Descends to the first post-order node of `from`'s subtree: keep taking the
/// left child, falling back to the right, until a leaf.
fn post_order_first<K>(nodes: &Arena<Node<K>>, mut from: Handle) -> Handle {
    loop {
        let node = nodes.get(from);
        if let Some(left) = node.left {
            from = left;
        } else if let Some(right) = node.right {
            from = right;
        } else {
            return from;
        }
    }
}

impl Traverse for InOrder {
    fn next<K>(nodes: &Arena<Node<K>>, root: Link, current: Link) -> Link {
        let Some(mut here) = current else {
            return root.map(|r| leftmost(nodes, r));
        };

        if let Some(right) = nodes.get(here).right {
            return Some(leftmost(nodes, right));
        }
        // Climb out of exhausted right subtrees, then step to the parent.
        loop {
            let parent = nodes.get(here).parent;
            match parent {
                Some(p) if nodes.get(p).right == Some(here) => here = p,
                _ => return parent,
            }
        }
    }

    fn prev<K>(nodes: &Arena<Node<K>>, root: Link, current: Link) -> Link {
        let Some(mut here) = current else {
            return root.map(|r| rightmost(nodes, r));
        };

        if let Some(left) = nodes.get(here).left {
            return Some(rightmost(nodes, left));
        }
        loop {
            let parent = nodes.get(here).parent;
            match parent {
                Some(p) if nodes.get(p).left == Some(here) => here = p,
                _ => return parent,
            }
        }
    }
}

impl Traverse for PreOrder {
    fn next<K>(nodes: &Arena<Node<K>>, root: Link, current: Link) -> Link {
        let Some(mut here) = current else {
            return root;
        };

        let node = nodes.get(here);
        if node.left.is_some() {
            return node.left;
        }
        if node.right.is_some() {
            return node.right;
        }
        // Climb until an ancestor was entered through its left child and has
        // a right subtree still to visit.
        loop {
            let Some(parent) = nodes.get(here).parent else {
                return None;
            };
            match nodes.get(parent).right {
                Some(right) if right != here => return Some(right),
                _ => here = parent,
            }
        }
    }

    fn prev<K>(nodes: &Arena<Node<K>>, root: Link, current: Link) -> Link {
        let Some(here) = current else {
            return root.map(|r| pre_order_last(nodes, r));
        };

        // The root is the first pre-order position.
        let parent = nodes.get(here).parent?;
        match nodes.get(parent).left {
            // Right sibling of a left subtree: its predecessor is the last
            // pre-order node of that subtree.
            Some(left) if left != here => Some(pre_order_last(nodes, left)),
            _ => Some(parent),
        }
    }
}

impl Traverse for PostOrder {
    fn next<K>(nodes: &Arena<Node<K>>, root: Link, current: Link) -> Link {
        let Some(here) = current else {
            return root.map(|r| post_order_first(nodes, r));
        };

        // The root is the last post-order position.
        let parent = nodes.get(here).parent?;
        match nodes.get(parent).right {
            Some(right) if right != here => Some(post_order_first(nodes, right)),
            _ => Some(parent),
        }
    }

    fn prev<K>(nodes: &Arena<Node<K>>, root: Link, current: Link) -> Link {
        let Some(here) = current else {
            return root;
        };

        let node = nodes.get(here);
        if node.right.is_some() {
            return node.right;
        }
        if node.left.is_some() {
            return node.left;
        }
        // Leaf: climb to the nearest ancestor holding a left subtree to step
        // into, skipping the parent when we are its left child.
        let mut ancestor = node.parent?;
        if nodes.get(ancestor).left == Some(here) {
            ancestor = nodes.get(ancestor).parent?;
        }
        loop {
            let above = nodes.get(ancestor);
            if above.left.is_some() {
                return above.left;
            }
            ancestor = above.parent?;
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::raw::RawBst;

    /// The shared fixture: a tree of three full levels plus a few leaves.
    ///
    /// ```text
    ///              50
    ///        30          70
    ///     23    35          80
    ///   11  25 31 42      73  85
    /// ```
    fn fixture() -> RawBst<i32> {
        let mut tree = RawBst::new();
        for key in [50, 30, 70, 23, 35, 80, 11, 25, 31, 42, 73, 85] {
            tree.insert(key, &compare::natural());
        }
        tree
    }

    fn forward<O: Traverse>(tree: &RawBst<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut cursor = None;
        loop {
            cursor = O::next(tree.nodes(), tree.root(), cursor);
            match cursor {
                Some(h) => out.push(tree.nodes().get(h).key),
                None => return out,
            }
        }
    }

    fn backward<O: Traverse>(tree: &RawBst<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut cursor = None;
        for _ in 0..tree.nodes().len() {
            cursor = O::prev(tree.nodes(), tree.root(), cursor);
            match cursor {
                Some(h) => out.push(tree.nodes().get(h).key),
                None => break,
            }
        }
        out
    }

    #[test]
    fn in_order_forward() {
        assert_eq!(forward::<InOrder>(&fixture()), [11, 23, 25, 30, 31, 35, 42, 50, 70, 73, 80, 85]);
    }

    #[test]
    fn in_order_backward() {
        assert_eq!(backward::<InOrder>(&fixture()), [85, 80, 73, 70, 50, 42, 35, 31, 30, 25, 23, 11]);
    }

    #[test]
    fn in_order_backward_past_first_is_sentinel() {
        let tree = fixture();
        let first = InOrder::next(tree.nodes(), tree.root(), None);
        assert_eq!(InOrder::prev(tree.nodes(), tree.root(), first), None);
    }

    #[test]
    fn pre_order_forward() {
        assert_eq!(forward::<PreOrder>(&fixture()), [50, 30, 23, 11, 25, 35, 31, 42, 70, 80, 73, 85]);
    }

    #[test]
    fn pre_order_backward() {
        assert_eq!(backward::<PreOrder>(&fixture()), [85, 73, 80, 70, 42, 31, 35, 25, 11, 23, 30, 50]);
    }

    #[test]
    fn pre_order_last_position_sits_behind_a_left_child() {
        // The rightmost node (10) holds a left child, so the pre-order last
        // position is that child, not the rightmost node itself.
        let mut tree = RawBst::new();
        for key in [5, 10, 7] {
            tree.insert(key, &compare::natural());
        }
        assert_eq!(forward::<PreOrder>(&tree), [5, 10, 7]);
        assert_eq!(backward::<PreOrder>(&tree), [7, 10, 5]);
    }

    #[test]
    fn pre_order_backward_past_first_is_sentinel() {
        let tree = fixture();
        assert_eq!(PreOrder::prev(tree.nodes(), tree.root(), tree.root()), None);
    }

    #[test]
    fn post_order_forward() {
        assert_eq!(forward::<PostOrder>(&fixture()), [11, 25, 23, 31, 42, 35, 30, 73, 85, 80, 70, 50]);
    }

    #[test]
    fn post_order_backward() {
        assert_eq!(backward::<PostOrder>(&fixture()), [50, 70, 80, 85, 73, 30, 35, 42, 31, 23, 25, 11]);
    }

    #[test]
    fn post_order_starts_down_a_right_spine() {
        // A root with only a right child: post-order is `3 2`, and the first
        // position must descend through the right link.
        let mut tree = RawBst::new();
        tree.insert(2, &compare::natural());
        tree.insert(3, &compare::natural());
        assert_eq!(forward::<PostOrder>(&tree), [3, 2]);
    }

    #[test]
    fn empty_tree_steps_to_sentinel() {
        let tree: RawBst<i32> = RawBst::new();
        assert_eq!(InOrder::next(tree.nodes(), tree.root(), None), None);
        assert_eq!(PreOrder::prev(tree.nodes(), tree.root(), None), None);
        assert_eq!(PostOrder::next(tree.nodes(), tree.root(), None), None);
    }

    #[test]
    fn single_node_round_trip() {
        let mut tree = RawBst::new();
        tree.insert(42, &compare::natural());
        let root = tree.root();

        assert_eq!(InOrder::next(tree.nodes(), tree.root(), None), root);
        assert_eq!(InOrder::next(tree.nodes(), tree.root(), root), None);
        assert_eq!(PostOrder::prev(tree.nodes(), tree.root(), None), root);
        assert_eq!(PostOrder::prev(tree.nodes(), tree.root(), root), None);
        assert_eq!(PreOrder::next(tree.nodes(), tree.root(), root), None);
        assert_eq!(PreOrder::prev(tree.nodes(), tree.root(), root), None);
    }
}
