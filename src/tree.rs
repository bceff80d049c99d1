use std::fmt;

use termtree::Tree as TermTree;
use tracing::{debug, instrument};

use crate::config::RenderSettings;
use crate::errors::{TreeError, TreeResult};
use crate::node::Node;
use crate::render;
use crate::tree_queue::Levels;
use crate::tree_traits::{node_term_tree, ToTermTree, TreeNode};

/// Owner of at most one root node.
///
/// Dropping the tree drops the root, and with it every node of the tree.
/// `N` is the node kind, e.g. [`Node`] or [`BNode`](crate::bnode::BNode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<N> {
    root: Option<N>,
}

/// Tree of multi-way [`Node`]s.
pub type MultiTree<T> = Tree<Node<T>>;

impl<N> Default for Tree<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<N> for Tree<N> {
    fn from(root: N) -> Self {
        Self::from_node(root)
    }
}

impl<N> Tree<N> {
    pub const fn new() -> Self {
        Self { root: None }
    }

    pub const fn from_node(root: N) -> Self {
        Self { root: Some(root) }
    }

    pub fn root_node(&self) -> Option<&N> {
        self.root.as_ref()
    }

    pub fn root_node_mut(&mut self) -> Option<&mut N> {
        self.root.as_mut()
    }

    /// Installs `root`, dropping the previous root and its subtree first.
    pub fn set_root(&mut self, root: N) -> &mut N {
        drop(self.root.take());
        self.root.insert(root)
    }

    /// Detaches the root, leaving the tree empty.
    pub fn take_root(&mut self) -> Option<N> {
        self.root.take()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<N: TreeNode> Tree<N> {
    /// Wraps `value` into a fresh root leaf.
    pub fn from_value(value: N::Value) -> Self {
        Self::from_node(N::leaf(value))
    }

    /// Level-order walk, one `Vec` per level with empty slots kept.
    pub fn levels(&self) -> Levels<'_, N> {
        Levels::new(self.root.as_ref())
    }

    /// All nodes, level by level and left to right within a level.
    /// Empty slots are not listed.
    #[instrument(level = "trace", skip(self))]
    pub fn node_list(&self) -> Vec<&N> {
        self.levels().flatten().flatten().collect()
    }

    /// Values in [`Tree::node_list`] order.
    pub fn data_list(&self) -> Vec<&N::Value> {
        self.node_list().into_iter().map(TreeNode::value).collect()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.levels().flatten().flatten().count()
    }

    /// Height of the root, `None` for an empty tree.
    pub fn height(&self) -> Option<usize> {
        self.root.as_ref().map(TreeNode::height_below)
    }
}

impl<N> Tree<N>
where
    N: TreeNode,
    N::Value: fmt::Display,
{
    pub fn level_order_lines(&self, settings: &RenderSettings) -> Vec<String> {
        render::level_order_lines(self.root.as_ref(), settings)
    }

    pub fn print_level_order(&self) {
        for line in self.level_order_lines(&RenderSettings::default()) {
            println!("{line}");
        }
    }

    pub fn render_visual(&self, settings: &RenderSettings) -> String {
        render::render_visual(self.root.as_ref(), settings)
    }

    pub fn print_visual(&self, ignore_absent: bool) {
        let settings = RenderSettings::default().ignoring_absent(ignore_absent);
        print!("{}", self.render_visual(&settings));
    }
}

impl<N: fmt::Display> Tree<N> {
    /// Like `to_string`, but an empty tree is an error instead of `""`.
    pub fn try_to_string(&self) -> TreeResult<String> {
        self.root
            .as_ref()
            .map(ToString::to_string)
            .ok_or(TreeError::EmptyTree)
    }

    pub fn print_tree(&self) {
        println!("{self}");
    }
}

/// Delegates to the root; an empty tree writes nothing.
impl<N: fmt::Display> fmt::Display for Tree<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => fmt::Display::fmt(root, f),
            None => Ok(()),
        }
    }
}

impl<N> ToTermTree for Tree<N>
where
    N: TreeNode,
    N::Value: fmt::Display,
{
    fn to_term_tree(&self) -> TermTree<String> {
        match &self.root {
            Some(root) => node_term_tree(root),
            None => {
                debug!("rendering empty tree");
                TermTree::new(RenderSettings::default().empty_notice)
            }
        }
    }
}
