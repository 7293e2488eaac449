use unbalanced_bst::Tree;

fn inorder(tree: &Tree<i32>) -> Vec<i32> {
    let mut keys = Vec::new();
    tree.inorder_walk(|key| keys.push(*key));
    keys
}

fn iterative_inorder(tree: &Tree<i32>) -> Vec<i32> {
    let mut keys = Vec::new();
    tree.iterative_inorder_walk(|key| keys.push(*key));
    keys
}

fn by_levels(tree: &Tree<i32>) -> Vec<i32> {
    let mut keys = Vec::new();
    tree.walk_by_levels(|key| keys.push(*key));
    keys
}

fn filled_tree() -> Tree<i32> {
    let mut tree = Tree::new();
    assert_eq!(tree.count(), 0);

    for key in [5, 7, 10, 3, 4, 6, 11] {
        assert!(tree.insert(key));
    }
    tree
}

#[test]
fn filling() {
    let tree = filled_tree();

    assert_eq!(tree.count(), 7);
    assert_eq!(tree.height(), 4);
    assert_eq!(inorder(&tree), [3, 4, 5, 6, 7, 10, 11]);
    assert_eq!(tree.to_string(), "5(3()(4))(7(6)(10()(11)))");

    assert!(!tree.iterative_search(&13));
    assert!(tree.iterative_search(&7));
}

#[test]
fn deleting() {
    let mut tree = filled_tree();

    // Two children: 6 is the successor.
    assert!(tree.delete_key(&5));
    assert_eq!(tree.count(), 6);
    assert!(!tree.iterative_search(&5));
    assert!(tree.iterative_search(&6));
    assert_eq!(inorder(&tree), [3, 4, 6, 7, 10, 11]);

    // One child.
    assert!(tree.delete_key(&7));
    assert_eq!(tree.count(), 5);
    assert_eq!(inorder(&tree), [3, 4, 6, 10, 11]);

    // Leaf.
    assert!(tree.delete_key(&11));
    assert_eq!(tree.count(), 4);
    assert_eq!(tree.to_string(), "6(3()(4))(10)");
    assert_eq!(tree.height(), 3);

    assert_eq!(inorder(&tree), [3, 4, 6, 10]);
    assert_eq!(iterative_inorder(&tree), [3, 4, 6, 10]);
    assert_eq!(by_levels(&tree), [6, 3, 10, 4]);
}

#[test]
fn comparing() {
    let mut tree = filled_tree();
    for key in [5, 7, 11] {
        assert!(tree.delete_key(&key));
    }

    let mut tree1 = Tree::new();
    for key in [3, 4, 6, 10] {
        tree1.insert(key);
    }

    // Same keys, different shapes.
    assert_ne!(tree.to_string(), tree1.to_string());
    assert!(tree.is_similar(&tree1));
    assert!(tree.is_identical_key(&tree1));

    assert!(tree1.insert(9));
    assert!(!tree.is_similar(&tree1));
    assert!(!tree1.is_similar(&tree));
    assert!(tree.is_identical_key(&tree1));
}

#[test]
fn moving() {
    let mut tree = filled_tree();
    let moved = std::mem::take(&mut tree);

    assert!(tree.is_empty());
    assert_eq!(moved.count(), 7);
    assert!(tree.insert(1));
    assert!(!moved.iterative_search(&1));
}
