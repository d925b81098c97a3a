//! An unbalanced Binary Search Tree that keeps duplicates. Every node exclusively owns its
//! children, so the whole structure is a plain `Option<Box<_>>` chain with no sharing and no
//! parent pointers.
//!
//! Equal values always go to the _left_: for every node, everything in its left subtree is less
//! than or equal to it and everything in its right subtree is strictly greater.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert!(tree.min_value().is_err());
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert!(tree.contains(&1));
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.max_depth(), 2);
//! assert_eq!(tree.min_value(), Ok(&1));
//!
//! // Duplicates are stored, not rejected.
//! tree.insert(2);
//! assert_eq!(tree.size(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::EmptyTreeError;

/// An owned, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree. This can be used for inserting values, checking whether a value is
/// present and asking structural questions about the tree (size, depth, shape). No balancing is
/// done so inserting values in sorted order degenerates the tree into a list.
///
/// `insert`, `contains`, `min_value`, `max_value`, `Clone` and `Drop` use loops or a heap
/// allocated stack and handle trees of any depth. Everything else (`size`, `max_depth`,
/// `same_tree`, the traversals, `mirror`, `double_tree` and `Debug`) recurses once per level,
/// so a degenerate tree with hundreds of thousands of nodes can overflow the thread's stack.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

/// A `Node` stores one value and owns up to two children.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `data`.
    pub(crate) fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn size(&self) -> usize {
        1 + self.left().map_or(0, Self::size) + self.right().map_or(0, Self::size)
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a depth of 1.
    fn max_depth(&self) -> usize {
        let left_depth = self.left().map_or(0, Self::max_depth);
        let right_depth = self.right().map_or(0, Self::max_depth);
        left_depth.max(right_depth) + 1
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // The derived drop glue recurses once per level, which overflows the stack on a degenerate
    // tree. Detach children onto a heap stack instead so each `Node` is dropped childless.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    // Same concern as `drop`: rebuild bottom-up from a heap stack. `built` receives each
    // subtree's left clone then its right clone, and a node pops both once they are done.
    fn clone(&self) -> Self {
        let mut pending: Vec<(Option<&Node<T>>, bool)> = vec![(self.root(), false)];
        let mut built: Vec<Link<T>> = Vec::new();
        while let Some((node, children_built)) = pending.pop() {
            match node {
                None => built.push(None),
                Some(node) if children_built => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        data: node.data.clone(),
                        left,
                        right,
                    })));
                }
                Some(node) => {
                    pending.push((Some(node), true));
                    pending.push((node.right(), false));
                    pending.push((node.left(), false));
                }
            }
        }
        Self {
            root: built.pop().flatten(),
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl<T> PartialEq for Tree<T>
where
    T: Ord,
{
    /// Two trees are equal when they are the [`same_tree`][Tree::same_tree].
    fn eq(&self, other: &Self) -> bool {
        self.same_tree(other)
    }
}

impl<T> Eq for Tree<T> where T: Ord {}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts every value in iteration order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a three node tree from values given in ascending order. The middle value is
    /// inserted first, then `low`, then `high`, so `mid` ends up at the root with `low` as its
    /// left child and `high` as its right child.
    ///
    /// The ordering of the arguments is not checked. Passing them unsorted still produces a
    /// valid BST, just not the one described above.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree = Tree::build_123(1, 2, 3);
    ///
    /// assert_eq!(tree.inorder(), vec![&1, &2, &3]);
    /// assert_eq!(tree.preorder(), vec![&2, &1, &3]);
    /// ```
    pub fn build_123(low: T, mid: T, high: T) -> Self
    where
        T: Ord,
    {
        let mut tree = Self::new();
        tree.insert(mid);
        tree.insert(low);
        tree.insert(high);
        tree
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value into the tree. A value equal to one already in the tree is
    /// stored again, in the left subtree of the existing node.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(tree.inorder(), vec![&1, &1]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut depth = 1;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value <= node.data {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        log::trace!("Tree::insert placing new node at depth {}", depth);
        *slot = Some(Node::new_boxed(value));
    }

    /// Returns `true` if a value equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree = Tree::build_123(1, 2, 3);
    ///
    /// assert!(tree.contains(&2));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.data) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Counts the nodes in the tree. This walks the whole tree every time it is called.
    pub fn size(&self) -> usize {
        self.root().map_or(0, Node::size)
    }

    /// Returns the number of nodes on the longest root-to-leaf path. An empty tree has a depth
    /// of 0 and a single node has a depth of 1.
    pub fn max_depth(&self) -> usize {
        self.root().map_or(0, Node::max_depth)
    }

    /// Returns the smallest value in the tree by following left children from the root.
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{EmptyTreeError, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min_value(), Err(EmptyTreeError));
    ///
    /// tree.insert(5);
    /// tree.insert(3);
    /// assert_eq!(tree.min_value(), Ok(&3));
    /// ```
    pub fn min_value(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root().ok_or(EmptyTreeError)?;
        while let Some(left) = node.left() {
            node = left;
        }
        Ok(&node.data)
    }

    /// Returns the largest value in the tree by following right children from the root.
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] if the tree is empty.
    pub fn max_value(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root().ok_or(EmptyTreeError)?;
        while let Some(right) = node.right() {
            node = right;
        }
        Ok(&node.data)
    }

    /// Returns `true` if both trees have the same shape and hold equal values at every
    /// position. Holding the same values in a different shape is not enough.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let balanced = Tree::build_123(1, 2, 3);
    /// let list: Tree<_> = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert!(balanced.same_tree(&balanced));
    /// assert!(!balanced.same_tree(&list));
    /// ```
    pub fn same_tree(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        same_subtree(self.root(), other.root())
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

/// Walks two subtrees in parallel, bailing out at the first difference.
fn same_subtree<T>(a: Option<&Node<T>>, b: Option<&Node<T>>) -> bool
where
    T: Ord,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.data.cmp(&b.data) == Ordering::Equal
                && same_subtree(a.left(), b.left())
                && same_subtree(a.right(), b.right())
        }
        _ => false,
    }
}
