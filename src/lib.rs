//! An unbalanced Binary Search Tree (BST) that keeps duplicate values, along with a handful
//! of classic recursive algorithms over it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores
//! a value and will sometimes have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less than or equal to
//!    its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than its own
//!    value.
//!
//! > Note that the first rule says "or equal". Inserting a value that is already present
//! > stores it again, to the left of the existing one.
//!
//! Searching for a value takes `O(height)`. Nothing here keeps the height down, so inserting
//! values in sorted order produces a tree with one node per level.
//!
//! On top of insertion and lookup, [`Tree`] answers structural questions
//! ([`size`][Tree::size], [`max_depth`][Tree::max_depth], [`min_value`][Tree::min_value]),
//! produces depth-first [traversals][Order], and can be transformed in place
//! ([`mirror`][Tree::mirror], [`double_tree`][Tree::double_tree]). [`count_trees`] counts how
//! many differently shaped BSTs can hold a number of keys.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{count_trees, Tree};
//!
//! let mut tree = Tree::build_123(1, 2, 3);
//!
//! assert!(tree.contains(&2));
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.max_depth(), 2);
//! assert_eq!(tree.min_value(), Ok(&1));
//! assert!(tree.same_tree(&tree));
//! assert_eq!(tree.postorder(), vec![&1, &3, &2]);
//!
//! tree.double_tree();
//! assert_eq!(tree.inorder(), vec![&1, &1, &2, &2, &3, &3]);
//!
//! assert_eq!(count_trees(4), 14);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod count;
pub mod error;
pub mod traversal;
pub mod tree;

mod transform;


pub use count::{checked_count_trees, count_trees};
pub use error::EmptyTreeError;
pub use traversal::Order;
pub use tree::Tree;
