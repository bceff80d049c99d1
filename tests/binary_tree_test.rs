//! Level-order insertion into BinaryTree

use std::ptr;

use rstest::rstest;

use treekit::util::testing::init_test_setup;
use treekit::{BNode, BinaryTree, Tree, TreeNode};

fn same<T>(a: Option<&BNode<T>>, b: Option<&BNode<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => ptr::eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Node `i` of the level-order listing must have its children at `2i + 1`
/// and `2i + 2`, as in an array-backed complete binary tree.
fn assert_complete_shape<T>(tree: &BinaryTree<T>, n: usize) {
    let nodes = tree.node_list();
    assert_eq!(nodes.len(), n);
    for (i, node) in nodes.iter().enumerate() {
        assert!(
            same(node.left(), nodes.get(2 * i + 1).copied()),
            "left child of node {i} misplaced"
        );
        assert!(
            same(node.right(), nodes.get(2 * i + 2).copied()),
            "right child of node {i} misplaced"
        );
    }
}

// ============================================================
// Shape
// ============================================================

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(6)]
#[case(7)]
#[case(8)]
#[case(20)]
#[case(63)]
fn given_n_values_when_inserted_then_complete_tree_shape(#[case] n: usize) {
    init_test_setup();
    let tree: BinaryTree<usize> = (0..n).collect();

    assert_complete_shape(&tree, n);
    let expected: Vec<usize> = (0..n).collect();
    assert_eq!(tree.data_list(), expected.iter().collect::<Vec<_>>());
}

#[rstest]
#[case(vec![5, 4, 3, 2, 1])]
#[case(vec![7, 7, 7, 7, 7, 7])]
#[case(vec![-1, 100, -50, 0])]
fn given_any_values_when_inserted_then_shape_ignores_values(#[case] values: Vec<i32>) {
    let n = values.len();
    let tree = BinaryTree::from_values(values.clone());

    assert_complete_shape(&tree, n);
    assert_eq!(tree.data_list(), values.iter().collect::<Vec<_>>());
}

#[rstest]
#[case(1, 0)]
#[case(2, 1)]
#[case(3, 1)]
#[case(4, 2)]
#[case(7, 2)]
#[case(8, 3)]
fn given_n_values_when_inserted_then_height_is_floor_log2(
    #[case] n: usize,
    #[case] height: usize,
) {
    let tree: BinaryTree<usize> = (0..n).collect();
    assert_eq!(tree.height(), Some(height));
}

#[test]
fn given_empty_tree_when_insert_then_root_without_children() {
    let mut tree = BinaryTree::new();
    let inserted = tree.insert(BNode::new("only")).unwrap();
    assert!(inserted.is_leaf());

    let root = tree.root_node().unwrap();
    assert_eq!(*root.value(), "only");
    assert_eq!(root.child_count(), 0);
    assert_eq!(tree.len(), 1);
}

#[test]
fn given_insert_when_placed_then_returned_node_is_in_tree() {
    let mut tree = BinaryTree::from_value(1);
    let inserted: *const BNode<i32> = tree.insert_value(2).unwrap();

    let root = tree.root_node().unwrap();
    assert!(ptr::eq(root.left().unwrap(), inserted));
}

#[test]
fn given_subtree_when_inserted_then_whole_subtree_attached() {
    let mut tree = BinaryTree::from_values([1, 2, 3]);
    tree.insert(BNode::with_values(4, 40, 41));

    // 4 lands left of 2; its own children come along
    assert_eq!(tree.data_list(), vec![&1, &2, &3, &4, &40, &41]);
    tree.insert_value(5);
    let two = tree.root_node().and_then(BNode::left).unwrap();
    assert_eq!(two.right().map(|n| *n.value()), Some(5));
}

#[test]
fn given_hand_built_tree_when_insert_then_first_hole_in_level_order() {
    //        1
    //      /   \
    //     2     3
    //    / \     \
    //   4   5     7
    let mut root = BNode::new(1);
    {
        let two = root.set_left_value(2);
        two.set_left_value(4);
        two.set_right_value(5);
    }
    root.set_right_value(3).set_right_value(7);
    let mut tree = Tree::from_node(root);

    tree.insert_value(6);
    let three = tree.root_node().and_then(BNode::right).unwrap();
    assert_eq!(three.left().map(|n| *n.value()), Some(6));

    tree.insert_value(8);
    let four = tree
        .root_node()
        .and_then(BNode::left)
        .and_then(BNode::left)
        .unwrap();
    assert_eq!(four.left().map(|n| *n.value()), Some(8));
}

// ============================================================
// Levels
// ============================================================

#[test]
fn given_tree_when_level_of_each_node_then_bfs_depth() {
    let tree: BinaryTree<usize> = (0..15).collect();
    let root = tree.root_node().unwrap();

    for (i, node) in tree.node_list().into_iter().enumerate() {
        let expected = (i + 1).ilog2() as usize;
        assert_eq!(node.level_of(root), Some(expected), "node {i}");
    }
    assert_eq!(root.level_of(root), Some(0));
}

#[test]
fn given_equal_value_elsewhere_when_level_of_then_identity_not_value() {
    let tree: BinaryTree<i32> = [1, 1, 1].into_iter().collect();
    let root = tree.root_node().unwrap();
    let stranger = BNode::new(1);

    assert_eq!(stranger.level_of(root), None);
    assert_eq!(root.right().unwrap().level_of(root), Some(1));
    // the search starts wherever it is told to
    assert_eq!(root.level_of(root.left().unwrap()), None);
}
