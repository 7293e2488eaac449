use std::collections::HashSet;

use unbalanced_bst::Tree;

quickcheck::quickcheck! {
    fn similar_to_itself(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        tree.is_similar(&tree)
    }
}

quickcheck::quickcheck! {
    fn similar_regardless_of_insert_order(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let reversed: Tree<_> = xs.iter().rev().copied().collect();

        tree.is_similar(&reversed) && reversed.is_similar(&tree)
    }
}

quickcheck::quickcheck! {
    fn similar_is_symmetric(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let other: Tree<_> = ys.into_iter().collect();

        tree.is_similar(&other) == other.is_similar(&tree)
    }
}

quickcheck::quickcheck! {
    fn similar_iff_same_keys(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let other: Tree<_> = ys.iter().copied().collect();
        let xs: HashSet<_> = xs.into_iter().collect();
        let ys: HashSet<_> = ys.into_iter().collect();

        tree.is_similar(&other) == (xs == ys)
    }
}

quickcheck::quickcheck! {
    fn identical_key_iff_shared_key(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let other: Tree<_> = ys.iter().copied().collect();
        let xs: HashSet<_> = xs.into_iter().collect();
        let ys: HashSet<_> = ys.into_iter().collect();

        tree.is_identical_key(&other) == !xs.is_disjoint(&ys)
    }
}

#[test]
fn identical_key_needs_both_trees() {
    let tree: Tree<_> = [1, 2, 3].into_iter().collect();
    let empty = Tree::new();

    assert!(!tree.is_identical_key(&empty));
    assert!(!empty.is_identical_key(&tree));
    assert!(!empty.is_identical_key(&Tree::new()));
}

#[test]
fn empty_trees_are_similar() {
    let tree = Tree::<u8>::new();

    assert!(tree.is_similar(&Tree::new()));
    assert!(!tree.is_similar(&[1].into_iter().collect()));
}

#[test]
fn disjoint_trees_share_nothing() {
    let evens: Tree<_> = (0..20).step_by(2).collect();
    let odds: Tree<_> = (1..20).step_by(2).collect();

    assert!(!evens.is_identical_key(&odds));
    assert!(!evens.is_similar(&odds));
}
