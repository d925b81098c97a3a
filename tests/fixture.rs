//! The three node tree built from `1, 2, 3`, put through every operation in turn.

use plain_bst::{count_trees, EmptyTreeError, Order, Tree};

fn init_tree() -> Tree<i32> {
    Tree::build_123(1, 2, 3)
}

#[test]
fn lookup() {
    assert!(init_tree().contains(&2));
}

#[test]
fn size() {
    assert_eq!(init_tree().size(), 3);
}

#[test]
fn max_depth() {
    assert_eq!(init_tree().max_depth(), 2);
}

#[test]
fn min_value() {
    assert_eq!(init_tree().min_value(), Ok(&1));
}

#[test]
fn min_value_of_empty_tree() {
    assert_eq!(Tree::<i32>::new().min_value(), Err(EmptyTreeError));
}

#[test]
fn same_tree() {
    let tree = init_tree();
    assert!(tree.same_tree(&tree));
    assert!(Tree::<i32>::new().same_tree(&Tree::new()));
}

#[test]
fn count_trees_of_four() {
    assert_eq!(count_trees(4), 14);
}

#[test]
fn traversals() {
    let tree = init_tree();

    assert_eq!(tree.inorder(), vec![&1, &2, &3]);
    assert_eq!(tree.postorder(), vec![&1, &3, &2]);
    assert_eq!(tree.traverse(Order::Pre), vec![&2, &1, &3]);
}

#[test]
fn full_sequence() {
    let mut tree = init_tree();

    tree.mirror();
    assert_eq!(tree.inorder(), vec![&3, &2, &1]);

    tree.mirror();
    assert_eq!(tree.inorder(), vec![&1, &2, &3]);

    tree.double_tree();
    assert_eq!(tree.inorder(), vec![&1, &1, &2, &2, &3, &3]);
    assert_eq!(tree.size(), 6);
}
