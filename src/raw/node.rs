use super::arena::Handle;

/// A possibly-absent reference to a node slot.
pub(crate) type Link = Option<Handle>;

/// The storage unit of the tree: a key and three links.
///
/// Children are reached through the owning arena; `parent` is a non-owning
/// back index used only for traversal and structural relinking. For every
/// allocated node `n`, `left(n).parent == n` and `right(n).parent == n`, and
/// exactly one node per tree (the root) has no parent.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<K> Node<K> {
    pub(crate) const fn new(key: K) -> Self {
        Self {
            key,
            parent: None,
            left: None,
            right: None,
        }
    }
}
