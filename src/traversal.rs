//! Depth-first traversals of a [`Tree`]. Each traversal collects references to the stored
//! values in visiting order, leaving the tree untouched.

use crate::tree::{Node, Tree};

/// The order in which a depth-first traversal visits a node relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree. For an unmirrored tree this yields the
    /// values in ascending order.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

impl<T> Tree<T> {
    /// Collects the values of the tree visited in the given [`Order`].
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Order, Tree};
    ///
    /// let tree = Tree::build_123(1, 2, 3);
    ///
    /// assert_eq!(tree.traverse(Order::Pre), vec![&2, &1, &3]);
    /// assert_eq!(tree.traverse(Order::In), vec![&1, &2, &3]);
    /// assert_eq!(tree.traverse(Order::Post), vec![&1, &3, &2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::new();
        if let Some(root) = self.root() {
            root.visit(order, &mut values);
        }
        values
    }

    /// Left, node, right. See [`Order::In`].
    pub fn inorder(&self) -> Vec<&T> {
        self.traverse(Order::In)
    }

    /// Left, right, node. See [`Order::Post`].
    pub fn postorder(&self) -> Vec<&T> {
        self.traverse(Order::Post)
    }

    /// Node, left, right. See [`Order::Pre`].
    pub fn preorder(&self) -> Vec<&T> {
        self.traverse(Order::Pre)
    }
}

impl<T> Node<T> {
    fn visit<'a>(&'a self, order: Order, values: &mut Vec<&'a T>) {
        if order == Order::Pre {
            values.push(&self.data);
        }
        if let Some(left) = self.left() {
            left.visit(order, values);
        }
        if order == Order::In {
            values.push(&self.data);
        }
        if let Some(right) = self.right() {
            right.visit(order, values);
        }
        if order == Order::Post {
            values.push(&self.data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_visits_nothing() {
        let tree = Tree::<i32>::new();

        assert!(tree.inorder().is_empty());
        assert!(tree.postorder().is_empty());
        assert!(tree.preorder().is_empty());
    }

    #[test]
    fn orders_on_a_deeper_tree() {
        //        4
        //       / \
        //      2   5
        //     / \
        //    1   3
        let tree: Tree<_> = vec![4, 2, 5, 1, 3].into_iter().collect();

        assert_eq!(tree.inorder(), vec![&1, &2, &3, &4, &5]);
        assert_eq!(tree.preorder(), vec![&4, &2, &1, &3, &5]);
        assert_eq!(tree.postorder(), vec![&1, &3, &2, &5, &4]);
    }

    #[test]
    fn inorder_keeps_duplicates() {
        let tree: Tree<_> = vec![2, 1, 2, 3, 1].into_iter().collect();

        assert_eq!(tree.inorder(), vec![&1, &1, &2, &2, &3]);
    }

    #[test]
    fn traversal_is_restartable() {
        let tree = Tree::build_123('a', 'b', 'c');

        assert_eq!(tree.postorder(), tree.postorder());
        assert_eq!(tree.inorder(), vec![&'a', &'b', &'c']);
    }

    quickcheck::quickcheck! {
        fn inorder_is_sorted_input(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();
            let mut sorted = xs;
            sorted.sort();

            tree.inorder() == sorted.iter().collect::<Vec<_>>()
        }
    }
}
