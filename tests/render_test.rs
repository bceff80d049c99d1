//! String, level-order and visual renderings

use rstest::{fixture, rstest};

use treekit::util::testing::init_test_setup;
use treekit::{BNode, BinaryTree, MultiTree, Node, RenderSettings, ToTermTree, Tree, TreeError};

//        150
//       /   \
//     10     20
//       \   /
//       33 999
#[fixture]
fn fixture_node() -> BNode<i32> {
    init_test_setup();
    let mut node = BNode::new(150);
    node.set_left_value(10).set_right_value(33);
    node.set_right_value(20).set_left_value(999);
    node
}

//          2
//        /   \
//     105     105
//     / \     /
//   101 101 10101
#[fixture]
fn sample_tree() -> BinaryTree<i32> {
    init_test_setup();
    let mut tree = BinaryTree::from_value(2);
    tree.extend([105, 105, 101, 101, 10101]);
    tree
}

// ============================================================
// In-order-like string
// ============================================================

#[rstest]
fn given_fixture_node_when_to_string_then_matches_literal(fixture_node: BNode<i32>) {
    assert_eq!(fixture_node.to_string(), "10 33 150 999 20");
}

#[rstest]
fn given_tree_when_to_string_then_delegates_to_root(fixture_node: BNode<i32>) {
    let tree = Tree::from_node(fixture_node);
    assert_eq!(tree.to_string(), "10 33 150 999 20");
    assert_eq!(tree.try_to_string().unwrap(), "10 33 150 999 20");
}

#[rstest]
fn given_sample_tree_when_to_string_then_in_order(sample_tree: BinaryTree<i32>) {
    assert_eq!(sample_tree.to_string(), "101 105 101 2 10101 105");
}

#[test]
fn given_empty_tree_when_to_string_then_empty_or_error() {
    let tree: BinaryTree<i32> = BinaryTree::new();
    assert_eq!(tree.to_string(), "");
    assert_eq!(tree.try_to_string(), Err(TreeError::EmptyTree));
}

// ============================================================
// Level order
// ============================================================

#[rstest]
fn given_fixture_when_level_order_then_placeholders_for_empty_slots(fixture_node: BNode<i32>) {
    let tree = Tree::from_node(fixture_node);
    let lines = tree.level_order_lines(&RenderSettings::default());
    assert_eq!(
        lines,
        vec!["[0] 150", "[1] 10 20", "[2] - 33 999 -", "[3] - - - -"]
    );
}

#[rstest]
fn given_sample_tree_when_level_order_then_one_line_per_level(sample_tree: BinaryTree<i32>) {
    let lines = sample_tree.level_order_lines(&RenderSettings::default());
    assert_eq!(
        lines,
        vec![
            "[0] 2",
            "[1] 105 105",
            "[2] 101 101 10101 -",
            "[3] - - - - - -",
        ]
    );
}

#[test]
fn given_empty_tree_when_level_order_then_notice() {
    let tree: BinaryTree<i32> = BinaryTree::new();
    assert_eq!(
        tree.level_order_lines(&RenderSettings::default()),
        vec!["tree empty"]
    );
}

#[rstest]
fn given_custom_placeholder_when_level_order_then_used(fixture_node: BNode<i32>) {
    let settings = RenderSettings {
        placeholder: "_".into(),
        ..RenderSettings::default()
    };
    let lines = Tree::from_node(fixture_node).level_order_lines(&settings);
    assert_eq!(lines[2], "[2] _ 33 999 _");
}

#[test]
fn given_multiway_leaves_when_level_order_then_no_trailing_level() {
    let tree: MultiTree<char> = Tree::from_node(Node::with_children(
        'a',
        vec![Some(Node::new('b')), None, Some(Node::new('c'))],
    ));
    assert_eq!(
        tree.level_order_lines(&RenderSettings::default()),
        vec!["[0] a", "[1] b - c"]
    );
}

// ============================================================
// Visual
// ============================================================

#[rstest]
fn given_sample_tree_when_visual_ignoring_absent_then_present_nodes_only(
    sample_tree: BinaryTree<i32>,
) {
    let settings = RenderSettings::default().ignoring_absent(true);
    let expected = "\
2
|---105
|   |---101
|   \\---101
\\---105
    \\---10101
";
    assert_eq!(sample_tree.render_visual(&settings), expected);
}

#[rstest]
fn given_sample_tree_when_visual_with_absent_then_null_markers(sample_tree: BinaryTree<i32>) {
    let expected = "\
2
|---105
|   |---101
|   |   |---NULL
|   |   \\---NULL
|   \\---101
|       |---NULL
|       \\---NULL
\\---105
    |---10101
    |   |---NULL
    |   \\---NULL
    \\---NULL
";
    assert_eq!(sample_tree.render_visual(&RenderSettings::default()), expected);
}

#[rstest]
#[case(false, "7\n|---NULL\n\\---8\n")]
#[case(true, "7\n\\---8\n")]
fn given_single_right_child_when_visual_then_slot_position_kept(
    #[case] ignore_absent: bool,
    #[case] expected: &str,
) {
    let mut node = BNode::new(7);
    node.set_right_value(8);
    let tree = Tree::from_node(node);
    let settings = RenderSettings::default().ignoring_absent(ignore_absent);
    assert_eq!(tree.render_visual(&settings), expected);
}

#[test]
fn given_empty_tree_when_visual_then_absent_marker() {
    let tree: BinaryTree<i32> = BinaryTree::new();
    let settings = RenderSettings {
        absent_marker: "<none>".into(),
        ..RenderSettings::default()
    };
    assert_eq!(tree.render_visual(&settings), "<none>\n");
}

// ============================================================
// termtree
// ============================================================

#[rstest]
fn given_sample_tree_when_term_tree_then_all_present_nodes(sample_tree: BinaryTree<i32>) {
    let rendered = sample_tree.to_term_tree().to_string();
    assert_eq!(rendered.lines().count(), 6);
    assert!(rendered.starts_with("2\n"));
    assert!(rendered.contains("10101"));
    assert!(!rendered.contains("NULL"));
}

#[test]
fn given_empty_tree_when_term_tree_then_notice() {
    let tree: BinaryTree<i32> = BinaryTree::new();
    assert_eq!(tree.to_term_tree().to_string().trim_end(), "tree empty");
}
