//! This crate exposes an ordered set backed by a plain Binary Search Tree
//! (BST), deliberately without any self-balancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. Searching for values in the
//! tree takes `O(height)` (where `height` is defined as the longest path
//! from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree.
//!
//! Because [`TreeSet`] performs no rebalancing, `height` is `O(lg N)` only
//! on lucky (e.g. shuffled) input: inserting elements in sorted order
//! degenerates the tree into a linked list and every operation into `O(N)`.
//!
//! ## Storage
//!
//! Nodes live in an index arena rather than in per-node heap allocations.
//! Every child and parent link is a plain index with no ownership
//! semantics, which keeps the parent back-pointers (used for in-order
//! iteration and deletion repair) entirely in safe code, and makes dropping
//! a large tree a flat `Vec` drop rather than a deep recursion.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod set;

#[cfg(test)]
mod test;

pub use crate::set::TreeSet;
