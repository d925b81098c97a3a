//! In-place structural transforms of a [`Tree`].

use std::mem;

use crate::tree::{Node, Tree};

impl<T> Tree<T> {
    /// Changes the tree into its mirror image by swapping the children of every node.
    ///
    /// ```text
    ///        4                4
    ///       / \              / \
    ///      2   5    ->      5   2
    ///     / \                  / \
    ///    1   3                3   1
    /// ```
    ///
    /// A mirrored tree is ordered in reverse, so [`insert`][Tree::insert] and
    /// [`contains`][Tree::contains] only behave as expected once it has been mirrored back.
    /// Mirroring twice restores the original tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::build_123(1, 2, 3);
    ///
    /// tree.mirror();
    /// assert_eq!(tree.inorder(), vec![&3, &2, &1]);
    ///
    /// tree.mirror();
    /// assert_eq!(tree, Tree::build_123(1, 2, 3));
    /// ```
    pub fn mirror(&mut self) {
        log::debug!("Tree::mirror");
        if let Some(root) = self.root.as_deref_mut() {
            root.mirror();
        }
    }

    /// Inserts a copy of every node as that node's new left child. The original left subtree
    /// hangs off the left of the copy and the right subtree is left alone, so the tree doubles
    /// in size and stays ordered.
    ///
    /// ```text
    ///      2                2
    ///     / \              / \
    ///    1   3    ->      2   3
    ///                    /   /
    ///                   1   3
    ///                  /
    ///                 1
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::build_123(1, 2, 3);
    /// tree.double_tree();
    ///
    /// assert_eq!(tree.size(), 6);
    /// assert_eq!(tree.inorder(), vec![&1, &1, &2, &2, &3, &3]);
    /// ```
    pub fn double_tree(&mut self)
    where
        T: Clone,
    {
        log::debug!("Tree::double_tree");
        if let Some(root) = self.root.as_deref_mut() {
            root.double();
        }
    }
}

impl<T> Node<T> {
    fn mirror(&mut self) {
        if let Some(left) = self.left.as_deref_mut() {
            left.mirror();
        }
        if let Some(right) = self.right.as_deref_mut() {
            right.mirror();
        }
        mem::swap(&mut self.left, &mut self.right);
    }

    // Children first, otherwise the fresh copy would be doubled again on the way down.
    fn double(&mut self)
    where
        T: Clone,
    {
        if let Some(left) = self.left.as_deref_mut() {
            left.double();
        }
        if let Some(right) = self.right.as_deref_mut() {
            right.double();
        }

        let mut copy = Node::new_boxed(self.data.clone());
        copy.left = self.left.take();
        self.left = Some(copy);
    }
}
