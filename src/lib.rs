//! This crate exposes an unbalanced Binary Search Tree (BST) along with the
//! scratch containers it uses to walk itself without recursing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the number of
//! `Node`s on the longest path from the root `Node` to a leaf `Node`). The
//! [`Tree`] here never rebalances, so inserting keys in sorted order builds a
//! single chain whose height is the number of keys. Everything that has to
//! visit the whole tree (walking it, dropping it) therefore keeps an explicit
//! [`Stack`][stack::Stack] or [`Queue`][queue::Queue] instead of recursing.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod queue;
pub mod scratch;
pub mod stack;
pub mod tree;

pub use scratch::{Capacity, ScratchError};
pub use tree::Tree;
