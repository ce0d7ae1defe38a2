//! An ordered set walked in a type-selected traversal order.

use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicU64, Ordering};

use compare::{Compare, Natural, natural};
use smallvec::SmallVec;

use crate::order::{InOrder, Traversal};
use crate::raw::{Link, RawBst};

/// Mints the identity token carried by every set and stamped into its
/// cursors. Node handles are per-arena indices, so two sets can hand out
/// identical-looking handles; the token is what tells their cursors apart.
fn next_set_id() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

/// An ordered set based on an unbalanced binary search tree.
///
/// `O` selects the traversal order ([`InOrder`] by default, or
/// [`PreOrder`](crate::PreOrder) / [`PostOrder`](crate::PostOrder)) used by
/// [`iter`](TrioSet::iter), [`Cursor`] navigation and the owning iterator.
/// `C` supplies the ordering as a [`compare::Compare`] instance, fixed at
/// construction and defaulting to the natural order of `T`.
///
/// The tree performs no balancing: every operation is O(height), which
/// degenerates to O(n) when keys arrive in sorted order. Cloning is a deep
/// copy; the clone preserves the exact tree shape and has an independent
/// lifetime.
///
/// It is a logic error for an item to be modified in such a way that its
/// ordering relative to any other item changes while it is in the set. The
/// behavior resulting from such a logic error is not specified, but will not
/// result in undefined behavior.
///
/// # Cursor invalidation
///
/// Every [`Cursor`] taken from the set is invalidated by any structural
/// mutation (`insert`, `remove`, `extract`, `clear`, `merge`), with one
/// exception: the cursor *returned by* [`remove_at`](TrioSet::remove_at)
/// addresses the node that structurally replaced the removed slot and is
/// valid afterwards. Using an invalidated cursor is safe: every entry point
/// first checks that the cursor was minted by this set and still addresses a
/// live position under the current root, and treats anything else as
/// not-found. A cursor from a different set (including a clone of this one)
/// never resolves: dereference yields `None`, navigation the sentinel, and
/// removal a no-op.
///
/// # Examples
///
/// ```
/// use trio_tree::TrioSet;
///
/// let mut books: TrioSet<&str> = TrioSet::new();
///
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
///
/// assert!(books.contains(&"The Odyssey"));
/// books.remove(&"The Odyssey");
/// assert!(!books.contains(&"The Odyssey"));
///
/// for book in &books {
///     println!("{book}");
/// }
/// ```
pub struct TrioSet<T, O = InOrder, C = Natural<T>> {
    tree: RawBst<T>,
    cmp: C,
    id: u64,
    _order: PhantomData<O>,
}

/// A position inside a [`TrioSet`]: either a node or the sentinel.
///
/// The sentinel is the one-past-either-end position: stepping forward from it
/// reaches the traversal's first element, stepping backward its last. A
/// cursor records the tree root it was created under (so that sentinel steps
/// can re-enter the tree) and the identity of the set that minted it (so
/// that a cursor handed to a different set resolves to nothing). Equality,
/// however, compares only the addressed node, so every sentinel cursor of a
/// set compares equal regardless of when it was taken.
///
/// Cursors are plain tokens - `Copy`, detached from the set's borrow - and
/// are navigated and dereferenced through the set that produced them
/// ([`next_cursor`](TrioSet::next_cursor), [`prev_cursor`](TrioSet::prev_cursor),
/// [`value_at`](TrioSet::value_at)). See the type-level notes on `TrioSet`
/// for what a mutation does to outstanding cursors.
///
/// # Examples
///
/// ```
/// use trio_tree::TrioSet;
///
/// let set: TrioSet<i32> = [1, 2, 3].into();
///
/// let mut cursor = set.find(&2);
/// assert_eq!(set.value_at(cursor), Some(&2));
///
/// cursor = set.next_cursor(cursor);
/// assert_eq!(set.value_at(cursor), Some(&3));
///
/// cursor = set.next_cursor(cursor);
/// assert_eq!(cursor, set.end_cursor());
/// assert_eq!(set.value_at(cursor), None);
/// ```
#[derive(Debug)]
pub struct Cursor<O = InOrder> {
    current: Link,
    root: Link,
    set: u64,
    _order: PhantomData<O>,
}

// Unconditional: the order marker is phantom, so copying never touches an `O`.
impl<O> Clone for Cursor<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for Cursor<O> {}

impl<O> PartialEq for Cursor<O> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<O> Eq for Cursor<O> {}

impl<T: Ord, O: Traversal> TrioSet<T, O> {
    /// Creates an empty set ordered by the natural order of `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trio_tree::TrioSet;
    ///
    /// let set: TrioSet<i32> = TrioSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_cmp(natural())
    }

    /// Creates an empty set with node storage for at least `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: RawBst::with_capacity(capacity),
            cmp: natural(),
            id: next_set_id(),
            _order: PhantomData,
        }
    }
}

impl<T, O: Traversal, C: Compare<T>> TrioSet<T, O, C> {
    /// Creates an empty set ordered by the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use trio_tree::{InOrder, TrioSet};
    ///
    /// let mut set: TrioSet<i32, InOrder, _> = TrioSet::with_cmp(natural().rev());
    /// set.extend([1, 2, 3]);
    ///
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    #[must_use]
    pub fn with_cmp(cmp: C) -> Self {
        Self {
            tree: RawBst::new(),
            cmp,
            id: next_set_id(),
            _order: PhantomData,
        }
    }

    /// Returns a reference to the set's comparator.
    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Returns `true` if the set contains no keys. O(1).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of keys in the set.
    ///
    /// The count is not cached: it is derived by walking the tree, so this is
    /// O(n). Prefer [`is_empty`](TrioSet::is_empty) for the emptiness check.
    #[must_use]
    pub fn len(&self) -> usize {
        self.in_order().count()
    }

    /// Returns the number of node slots reserved by the backing arena.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    /// Removes every key from the set.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Adds a key to the set.
    ///
    /// Returns whether the key was newly inserted; inserting a key that is
    /// already present leaves the set untouched and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trio_tree::TrioSet;
    ///
    /// let mut set: TrioSet<i32> = TrioSet::new();
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (_, inserted) = self.tree.insert(value, &self.cmp);
        inserted
    }

    /// Removes a key from the set, returning whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use trio_tree::TrioSet;
    ///
    /// let mut set: TrioSet<i32> = [2].into();
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        match self.tree.find(value, &self.cmp) {
            Some(target) => {
                self.tree.detach(target);
                true
            }
            None => false,
        }
    }

    /// Removes the key at `cursor`, returning a cursor to the node that
    /// structurally replaced the removed slot (the sentinel when a leaf was
    /// removed and nothing took its place).
    ///
    /// The cursor is resolved back to a key lookup first, so a cursor whose
    /// node was already removed is treated as not-found: nothing is removed
    /// and the sentinel is returned. Passing the sentinel or a cursor minted
    /// by a different set is likewise a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use trio_tree::TrioSet;
    ///
    /// let mut set: TrioSet<i32> = [1, 3, 6, 9].into();
    ///
    /// let next = set.remove_at(set.find(&3));
    /// assert_eq!(set.value_at(next), Some(&6));
    /// assert!(!set.contains(&3));
    /// ```
    pub fn remove_at(&mut self, cursor: Cursor<O>) -> Cursor<O> {
        match self.locate(cursor) {
            Some(target) => {
                let (_, replacement) = self.tree.detach(target);
                self.cursor_at(replacement)
            }
            None => self.end_cursor(),
        }
    }

    /// Removes every key in the cursor range `[from, to)`, walking the set's
    /// traversal order, and returns a cursor to `to`'s key (the sentinel when
    /// `to` was the sentinel or is no longer present).
    ///
    /// The walk stops at `to` or at the sentinel, whichever comes first, so a
    /// `to` that is not ahead of `from` erases through the end of the
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use trio_tree::TrioSet;
    ///
    /// let mut set: TrioSet<i32> = [1, 3, 6, 9, 10].into();
    ///
    /// let after = set.remove_range(set.find(&3), set.find(&10));
    /// assert_eq!(set.value_at(after), Some(&10));
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 10]);
    /// ```
    pub fn remove_range(&mut self, from: Cursor<O>, to: Cursor<O>) -> Cursor<O>
    where
        T: Clone,
    {
        let anchor = self.value_at(to).cloned();

        let mut doomed: SmallVec<[T; 16]> = SmallVec::new();
        let mut cursor = from;
        while cursor != to {
            let Some(value) = self.value_at(cursor) else {
                break;
            };
            doomed.push(value.clone());
            cursor = self.next_cursor(cursor);
        }
        for value in &doomed {
            self.remove(value);
        }

        match anchor {
            Some(value) => self.find(&value),
            None => self.end_cursor(),
        }
    }

    /// Removes a key from the set and returns it, or `None` if it was absent.
    ///
    /// Absence is reported explicitly; a stored key that happens to equal a
    /// default value is extracted like any other.
    ///
    /// # Examples
    ///
    /// ```
    /// use trio_tree::TrioSet;
    ///
    /// let mut set: TrioSet<i32> = [0, 6].into();
    /// assert_eq!(set.extract(&6), Some(6));
    /// assert_eq!(set.extract(&6), None);
    /// assert_eq!(set.extract(&0), Some(0));
    /// ```
    pub fn extract<Q>(&mut self, value: &Q) -> Option<T>
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        let target = self.tree.find(value, &self.cmp)?;
        Some(self.tree.detach(target).0)
    }

    /// Removes the key at `cursor` and returns it; invalid cursors (see
    /// [`remove_at`](TrioSet::remove_at)) yield `None`.
    pub fn extract_at(&mut self, cursor: Cursor<O>) -> Option<T> {
        let target = self.locate(cursor)?;
        Some(self.tree.detach(target).0)
    }

    /// Moves every key of `other` into `self`, leaving `other` empty.
    ///
    /// Keys already present are skipped (and dropped from `other`).
    ///
    /// # Examples
    ///
    /// ```
    /// use trio_tree::TrioSet;
    ///
    /// let mut set: TrioSet<i32> = [1, 3, 6].into();
    /// let mut other: TrioSet<i32> = [1, 4, 6].into();
    ///
    /// set.merge(&mut other);
    ///
    /// assert!(other.is_empty());
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 6]);
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        for key in other.tree.drain_ordered::<InOrder>() {
            self.tree.insert(key, &self.cmp);
        }
    }

    /// Returns a reference to the stored key equal to `value`, if any.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        self.tree.find(value, &self.cmp).map(|handle| &self.tree.node(handle).key)
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trio_tree::TrioSet;
    ///
    /// let set: TrioSet<i32> = [1, 2, 3].into();
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&4));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        self.tree.find(value, &self.cmp).is_some()
    }

    /// Returns how many keys equal to `value` the set holds: 0 or 1, since
    /// keys are unique.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        usize::from(self.contains(value))
    }

    /// Returns a cursor to the stored key equal to `value`, or the sentinel.
    pub fn find<Q>(&self, value: &Q) -> Cursor<O>
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        self.cursor_at(self.tree.find(value, &self.cmp))
    }

    /// Returns a cursor to the smallest key that is not less than `value`,
    /// or the sentinel when every key is smaller.
    ///
    /// # Examples
    ///
    /// ```
    /// use trio_tree::TrioSet;
    ///
    /// let set: TrioSet<i32> = [1, 3, 6, 9].into();
    /// assert_eq!(set.value_at(set.lower_bound(&5)), Some(&6));
    /// assert_eq!(set.value_at(set.lower_bound(&10)), None);
    /// ```
    pub fn lower_bound<Q>(&self, value: &Q) -> Cursor<O>
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        self.cursor_at(self.tree.lower_bound(value, &self.cmp))
    }

    /// Returns a cursor to the smallest key strictly greater than `value`,
    /// or the sentinel when no key is greater.
    pub fn upper_bound<Q>(&self, value: &Q) -> Cursor<O>
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        self.cursor_at(self.tree.upper_bound(value, &self.cmp))
    }

    /// Returns the `[lower_bound, upper_bound)` cursor pair for `value`: a
    /// range holding exactly the key equal to `value`, or an empty range
    /// positioned where it would be inserted.
    pub fn equal_range<Q>(&self, value: &Q) -> (Cursor<O>, Cursor<O>)
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        (self.lower_bound(value), self.upper_bound(value))
    }

    /// Returns the first key of the traversal, or `None` on an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use trio_tree::{PreOrder, TrioSet};
    ///
    /// let sorted: TrioSet<i32> = [3, 1, 2].into();
    /// assert_eq!(sorted.first(), Some(&1));
    ///
    /// let layered: TrioSet<i32, PreOrder> = [3, 1, 2].into();
    /// assert_eq!(layered.first(), Some(&3));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.value_at(self.first_cursor())
    }

    /// Returns the last key of the traversal, or `None` on an empty set.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.value_at(self.prev_cursor(self.end_cursor()))
    }

    /// Returns the sentinel cursor.
    #[must_use]
    pub fn end_cursor(&self) -> Cursor<O> {
        self.cursor_at(None)
    }

    /// Returns a cursor to the first position of the traversal (the sentinel
    /// on an empty set).
    #[must_use]
    pub fn first_cursor(&self) -> Cursor<O> {
        self.next_cursor(self.end_cursor())
    }

    /// Steps `cursor` forward by one position of the traversal order.
    ///
    /// Stepping forward from the sentinel reaches the traversal's first
    /// position; stepping forward from the last position reaches the
    /// sentinel. A foreign or invalidated cursor steps to the sentinel.
    #[must_use]
    pub fn next_cursor(&self, cursor: Cursor<O>) -> Cursor<O> {
        match self.admit(cursor) {
            Some(cursor) => self.cursor_at(O::next(self.tree.nodes(), cursor.root, cursor.current)),
            None => self.end_cursor(),
        }
    }

    /// Steps `cursor` backward by one position of the traversal order.
    ///
    /// Stepping backward from the sentinel reaches the traversal's last
    /// position. A foreign or invalidated cursor steps to the sentinel.
    #[must_use]
    pub fn prev_cursor(&self, cursor: Cursor<O>) -> Cursor<O> {
        match self.admit(cursor) {
            Some(cursor) => self.cursor_at(O::prev(self.tree.nodes(), cursor.root, cursor.current)),
            None => self.end_cursor(),
        }
    }

    /// Returns the key addressed by `cursor`, or `None` for the sentinel and
    /// for foreign or invalidated cursors.
    #[must_use]
    pub fn value_at(&self, cursor: Cursor<O>) -> Option<&T> {
        let cursor = self.admit(cursor)?;
        cursor.current.map(|handle| &self.tree.node(handle).key)
    }

    /// Returns an iterator over the set in its traversal order.
    ///
    /// The iterator is double-ended; iterating from the back yields the exact
    /// mirror of the forward sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use trio_tree::{PostOrder, TrioSet};
    ///
    /// let set: TrioSet<i32, PostOrder> = [2, 1, 3].into();
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 2]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, O> {
        Iter::new(&self.tree)
    }

    fn in_order(&self) -> Iter<'_, T, InOrder> {
        Iter::new(&self.tree)
    }

    const fn cursor_at(&self, current: Link) -> Cursor<O> {
        Cursor {
            current,
            root: self.tree.root(),
            set: self.id,
            _order: PhantomData,
        }
    }

    /// Admits a caller-supplied cursor for use against this set: it must have
    /// been minted here, under the current root, and still address a live
    /// slot (or the sentinel). Everything else is indistinguishable from the
    /// sentinel to the callers.
    fn admit(&self, cursor: Cursor<O>) -> Option<Cursor<O>> {
        if cursor.set != self.id || cursor.root != self.tree.root() {
            return None;
        }
        match cursor.current {
            Some(handle) if self.tree.try_node(handle).is_none() => None,
            _ => Some(cursor),
        }
    }

    /// Resolves an admitted cursor to a node of this tree, relocating it
    /// through a key lookup; the sentinel and anything stale resolve to
    /// `None`.
    fn locate(&self, cursor: Cursor<O>) -> Link {
        let cursor = self.admit(cursor)?;
        let node = self.tree.node(cursor.current?);
        self.tree.find(&node.key, &self.cmp)
    }
}

impl<T: Ord, O: Traversal> Default for TrioSet<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, O, C: Clone> Clone for TrioSet<T, O, C> {
    /// Deep copy with a fresh identity: cursors minted by the source do not
    /// resolve against the clone.
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
            cmp: self.cmp.clone(),
            id: next_set_id(),
            _order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O: Traversal, C: Compare<T>> fmt::Debug for TrioSet<T, O, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two sets are equal iff their in-order key sequences are identical,
/// regardless of tree shape and of the traversal order parameter's effect on
/// iteration.
impl<T: PartialEq, O: Traversal, C: Compare<T>> PartialEq for TrioSet<T, O, C> {
    fn eq(&self, other: &Self) -> bool {
        self.in_order().eq(other.in_order())
    }
}

impl<T: Eq, O: Traversal, C: Compare<T>> Eq for TrioSet<T, O, C> {}

impl<T: Hash, O: Traversal, C: Compare<T>> Hash for TrioSet<T, O, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0usize;
        for key in self.in_order() {
            key.hash(state);
            count += 1;
        }
        state.write_usize(count);
    }
}

impl<T, O: Traversal, C: Compare<T>> Extend<T> for TrioSet<T, O, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Copy, O: Traversal, C: Compare<T>> Extend<&'a T> for TrioSet<T, O, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, O: Traversal, C: Compare<T> + Default> FromIterator<T> for TrioSet<T, O, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::with_cmp(C::default());
        set.extend(iter);
        set
    }
}

impl<T, O: Traversal, C: Compare<T> + Default, const N: usize> From<[T; N]> for TrioSet<T, O, C> {
    /// Builds a set by inserting the keys in array order; the resulting tree
    /// shape (and so the pre-/post-order sequences) follows that order.
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// An iterator over a [`TrioSet`] in its traversal order.
///
/// Created by [`TrioSet::iter`]. Double-ended and fused.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T, O = InOrder> {
    tree: &'a RawBst<T>,
    front: Link,
    back: Link,
    exhausted: bool,
    _order: PhantomData<O>,
}

impl<'a, T, O: Traversal> Iter<'a, T, O> {
    fn new(tree: &'a RawBst<T>) -> Self {
        Self {
            tree,
            front: O::next(tree.nodes(), tree.root(), None),
            back: O::prev(tree.nodes(), tree.root(), None),
            exhausted: tree.is_empty(),
            _order: PhantomData,
        }
    }
}

impl<T, O> Clone for Iter<'_, T, O> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            exhausted: self.exhausted,
            _order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O: Traversal> fmt::Debug for Iter<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T, O: Traversal> Iterator for Iter<'a, T, O> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.exhausted {
            return None;
        }
        let handle = self.front?;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = O::next(self.tree.nodes(), self.tree.root(), self.front);
        }
        Some(&self.tree.node(handle).key)
    }
}

impl<T, O: Traversal> DoubleEndedIterator for Iter<'_, T, O> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let handle = self.back?;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = O::prev(self.tree.nodes(), self.tree.root(), self.back);
        }
        Some(&self.tree.node(handle).key)
    }
}

impl<T, O: Traversal> FusedIterator for Iter<'_, T, O> {}

impl<'a, T, O: Traversal, C: Compare<T>> IntoIterator for &'a TrioSet<T, O, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, O>;

    fn into_iter(self) -> Iter<'a, T, O> {
        self.iter()
    }
}

/// An owning iterator over a [`TrioSet`] in its traversal order.
///
/// Created by [`IntoIterator::into_iter`]; the keys are detached from the
/// tree up front, in traversal order.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T, O: Traversal, C: Compare<T>> IntoIterator for TrioSet<T, O, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let keys: Vec<T> = self.tree.drain_ordered::<O>();
        IntoIter {
            inner: keys.into_iter(),
        }
    }
}
