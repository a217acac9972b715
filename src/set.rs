//! An ordered set stored in an index arena.
//!
//! The tree is not self-balancing. Operations cost `O(height)`, which is
//! `O(lg N)` for shuffled input and `O(N)` once elements arrive in sorted
//! order. Insertion and deletion are a handful of link reassignments on
//! the arena; nothing is rebuilt or rotated.
//!
//! # Examples
//!
//! ```
//! use treeset::TreeSet;
//!
//! let mut set = TreeSet::new();
//!
//! assert!(set.insert(2));
//! assert!(set.insert(1));
//! assert!(set.insert(3));
//!
//! // Comparator-equal duplicates are rejected.
//! assert!(!set.insert(2));
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.iter().collect::<Vec<_>>(), [&1, &2, &3]);
//!
//! assert!(set.remove(&2));
//! assert!(!set.contains(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use compare::{natural, Compare, Natural};

use crate::arena::{Arena, Node, NodeId};

/// An ordered set of unique elements backed by an unbalanced Binary Search
/// Tree.
///
/// Order is defined by the comparator `C`, which defaults to the element
/// type's natural order. Elements that the comparator considers equal are
/// treated as the same element: at most one of them is ever stored.
///
/// The behavior of this set is unspecified (though memory-safe) if an
/// element's ordering relative to any other element changes while it is in
/// the set, or if the comparator is not a total order.
#[derive(Clone)]
pub struct TreeSet<T, C = Natural<T>>
where
    C: Compare<T>,
{
    arena: Arena<T>,
    root: Option<NodeId>,
    cmp: C,
}

impl<T> TreeSet<T>
where
    T: Ord,
{
    /// Creates an empty set ordered by the natural order of its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self {
        Self::with_cmp(natural())
    }
}

impl<T> Default for TreeSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> TreeSet<T, C>
where
    C: Compare<T>,
{
    /// Creates an empty set ordered by the given comparator.
    ///
    /// Any closure taking two element references works as a comparator:
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::with_cmp(|a: &i32, b: &i32| b.cmp(a));
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// // Reversed comparator, reversed traversal.
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            cmp,
        }
    }

    /// Returns a reference to the set's comparator.
    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the stored element that compares equal to `pattern`, if any.
    ///
    /// Under the natural order this adds little over [`contains`], but a
    /// comparator that inspects only part of an element can use it to
    /// retrieve the stored whole:
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut books = TreeSet::with_cmp(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
    /// books.insert((1, "Dune"));
    ///
    /// assert_eq!(books.get(&(1, "")), Some(&(1, "Dune")));
    /// assert_eq!(books.get(&(2, "")), None);
    /// ```
    ///
    /// [`contains`]: TreeSet::contains
    pub fn get(&self, pattern: &T) -> Option<&T> {
        self.node(pattern).map(|id| &self.arena[id].value)
    }

    /// Checks if the set contains an element that compares equal to
    /// `pattern`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// assert!(!set.contains(&1));
    ///
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, pattern: &T) -> bool {
        self.node(pattern).is_some()
    }

    /// Returns the least element of the set, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// assert_eq!(set.first(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> {
        let root = self.root?;
        Some(&self.arena[self.least_from(root)].value)
    }

    /// Returns the greatest element of the set, or `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// assert_eq!(set.last(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    pub fn last(&self) -> Option<&T> {
        let root = self.root?;
        Some(&self.arena[self.greatest_from(root)].value)
    }

    /// Inserts an element, returning `true` if the set did not already
    /// contain a comparator-equal element. When it did, the set is left
    /// untouched and the new element is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    ///
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let at = match self.locate(&value) {
            Some(at) => at,
            None => {
                self.root = Some(self.arena.insert(Node::new(value)));
                return true;
            }
        };

        let order = self.cmp.compare(&value, &self.arena[at].value);
        if let Ordering::Equal = order {
            return false;
        }

        let id = self.arena.insert(Node::with_parent(value, at));
        let parent = &mut self.arena[at];
        match order {
            Ordering::Greater => parent.right = Some(id),
            _ => parent.left = Some(id),
        }

        if cfg!(debug_assertions) {
            let parent = &self.arena[at];
            if let Some(left) = parent.left {
                assert!(self.cmp.compares_lt(&self.arena[left].value, &parent.value));
            }
            if let Some(right) = parent.right {
                assert!(self.cmp.compares_gt(&self.arena[right].value, &parent.value));
            }
        }
        true
    }

    /// Removes the element that compares equal to `pattern`, returning
    /// `true` if one was present. An absent pattern is a normal outcome,
    /// not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert!(set.remove(&1));
    /// assert!(!set.contains(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn remove(&mut self, pattern: &T) -> bool {
        match self.node(pattern) {
            Some(id) => {
                self.remove_node(id);
                true
            }
            None => false,
        }
    }

    /// Returns an iterator over the set's elements in ascending comparator
    /// order.
    ///
    /// The iterator is lazy and walks the tree as it goes; each call to
    /// `iter` starts an independent traversal of the set's current state.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    ///
    /// // A fresh call starts over from the least element.
    /// assert_eq!(set.iter().next(), Some(&1));
    /// ```
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            next: self.root.map(|root| self.least_from(root)),
            yielded: 0,
            set: self,
        }
    }

    /// Walks from the root towards `pattern` and returns either the node
    /// whose value compares equal to it or, if there is none, the last node
    /// visited before falling off the tree (the would-be parent of an
    /// insertion at `pattern`). `None` only for an empty tree.
    ///
    /// This single traversal serves lookup, containment, and
    /// insertion-parent discovery.
    fn locate(&self, pattern: &T) -> Option<NodeId> {
        let mut current = self.root?;
        loop {
            let node = &self.arena[current];
            let next = match self.cmp.compare(pattern, &node.value) {
                Ordering::Equal => return Some(current),
                Ordering::Greater => node.right,
                Ordering::Less => node.left,
            };
            current = match next {
                Some(child) => child,
                None => return Some(current),
            };
        }
    }

    /// The node whose value compares equal to `pattern`, if one exists.
    fn node(&self, pattern: &T) -> Option<NodeId> {
        let id = self.locate(pattern)?;
        match self.cmp.compare(pattern, &self.arena[id].value) {
            Ordering::Equal => Some(id),
            _ => None,
        }
    }

    /// The leftmost node reachable from `id`.
    fn least_from(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(left) = self.arena[current].left {
            current = left;
        }
        current
    }

    /// The rightmost node reachable from `id`.
    fn greatest_from(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(right) = self.arena[current].right {
            current = right;
        }
        current
    }

    /// The in-order successor of `id`: the leftmost node of its right
    /// subtree when there is one, otherwise the first ancestor whose value
    /// compares greater than `id`'s.
    fn successor(&self, id: NodeId) -> Option<NodeId> {
        match self.arena[id].right {
            Some(right) => Some(self.least_from(right)),
            None => self.first_greater_ancestor(id),
        }
    }

    fn first_greater_ancestor(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        while let Some(parent) = self.arena[current].parent {
            if self
                .cmp
                .compares_gt(&self.arena[parent].value, &self.arena[current].value)
            {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Unlinks `id` from the tree and frees its arena slot. The node
    /// promoted into its place depends on the child configuration:
    ///
    /// - no children: the parent's child slot is simply cleared;
    /// - one child: that child takes the removed node's position;
    /// - two children: the left child takes the removed node's position and
    ///   the right subtree is spliced onto the rightmost node of the
    ///   promoted subtree. That node holds the in-order predecessor of the
    ///   removed value, so everything in the right subtree still compares
    ///   greater than its new parent.
    ///
    /// When the removed node is the root the promoted node becomes the new
    /// root, with no parent to rewire.
    fn remove_node(&mut self, id: NodeId) {
        let (parent, left, right) = {
            let node = &self.arena[id];
            (node.parent, node.left, node.right)
        };

        let promoted = match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let splice = self.greatest_from(left);
                self.arena[splice].right = Some(right);
                self.arena[right].parent = Some(splice);
                Some(left)
            }
        };

        if let Some(promoted) = promoted {
            self.arena[promoted].parent = parent;
        }
        match parent {
            None => self.root = promoted,
            Some(parent) => {
                let parent = &mut self.arena[parent];
                if parent.left == Some(id) {
                    parent.left = promoted;
                } else {
                    parent.right = promoted;
                }
            }
        }

        self.arena.remove(id);
    }
}

impl<T, C> fmt::Debug for TreeSet<T, C>
where
    T: fmt::Debug,
    C: Compare<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A lazy in-order iterator over a [`TreeSet`], yielding references to its
/// elements in ascending comparator order. Created by [`TreeSet::iter`].
pub struct Iter<'a, T, C>
where
    C: Compare<T>,
{
    set: &'a TreeSet<T, C>,
    next: Option<NodeId>,
    yielded: usize,
}

impl<'a, T, C> Iterator for Iter<'a, T, C>
where
    C: Compare<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.set.successor(id);
        self.yielded += 1;
        Some(&self.set.arena[id].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.len() - self.yielded;
        (remaining, Some(remaining))
    }
}

impl<'a, T, C> ExactSizeIterator for Iter<'a, T, C> where C: Compare<T> {}

impl<'a, T, C> FusedIterator for Iter<'a, T, C> where C: Compare<T> {}

impl<'a, T, C> IntoIterator for &'a TreeSet<T, C>
where
    C: Compare<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
