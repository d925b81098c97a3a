use std::collections::HashSet;

use plain_bst::{count_trees, Tree};

/// Builds a tree by inserting every value in order.
fn build(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn size_counts_every_insert(xs: Vec<i8>) -> bool {
        build(&xs).size() == xs.len()
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }

    fn min_and_max_are_contained(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        match (tree.min_value(), tree.max_value()) {
            (Ok(min), Ok(max)) => {
                tree.contains(min)
                    && tree.contains(max)
                    && Some(min) == xs.iter().min()
                    && Some(max) == xs.iter().max()
            }
            (Err(_), Err(_)) => xs.is_empty(),
            _ => false,
        }
    }

    fn same_tree_is_reflexive(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        tree.same_tree(&tree) && tree == tree.clone()
    }

    fn same_values_in_different_order(xs: Vec<i8>) -> bool {
        let mut reversed = xs.clone();
        reversed.reverse();
        let tree = build(&xs);
        let other = build(&reversed);

        // Same values always give the same inorder, only the shape may differ.
        tree.inorder() == other.inorder()
            && (tree.same_tree(&other) == (tree.preorder() == other.preorder()))
    }

    fn mirror_twice_is_identity(xs: Vec<i8>) -> bool {
        let original = build(&xs);
        let mut tree = build(&xs);
        tree.mirror();
        tree.mirror();

        tree.same_tree(&original)
    }

    fn mirror_reverses_inorder(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let mut expected = tree.inorder().into_iter().copied().collect::<Vec<_>>();
        expected.reverse();
        tree.mirror();

        tree.inorder().into_iter().copied().collect::<Vec<_>>() == expected
            && tree.size() == xs.len()
    }

    fn double_tree_doubles_size(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        tree.double_tree();

        tree.size() == 2 * xs.len()
    }

    fn double_tree_repeats_each_value(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        tree.double_tree();

        let mut expected: Vec<i8> = xs.iter().flat_map(|x| vec![*x, *x]).collect();
        expected.sort();
        tree.inorder().into_iter().copied().collect::<Vec<_>>() == expected
    }

    fn count_trees_recurrence(n: u8) -> bool {
        let n = usize::from(n % 30);
        let expected: u128 = if n <= 1 {
            1
        } else {
            (1..=n).map(|r| count_trees(r - 1) * count_trees(n - r)).sum()
        };

        count_trees(n) == expected
    }
}
