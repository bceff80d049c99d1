use std::fmt;

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::tree_traits::{node_term_tree, ToTermTree, TreeNode};

/// Multi-way tree node: a value plus a growable run of child slots.
///
/// Every occupied slot is owned by this node alone. Dropping the node drops
/// its whole subtree, each descendant exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    children: Vec<Option<Box<Node<T>>>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Creates a node owning the given slot sequence; `None` entries become
    /// empty slots.
    pub fn with_children(value: T, children: Vec<Option<Node<T>>>) -> Self {
        Self {
            value,
            children: children.into_iter().map(|c| c.map(Box::new)).collect(),
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Slot count, empty slots included.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Appends a new slot holding `child`.
    pub fn add_child(&mut self, child: Node<T>) {
        self.push_slot(Some(child));
    }

    pub fn push_slot(&mut self, child: Option<Node<T>>) {
        self.children.push(child.map(Box::new));
    }

    /// Drops every current child, then installs `children` as the new slot
    /// sequence.
    #[instrument(level = "trace", skip_all)]
    pub fn set_children(&mut self, children: Vec<Option<Node<T>>>) {
        self.children.clear();
        self.children
            .extend(children.into_iter().map(|c| c.map(Box::new)));
    }

    /// Drops the child at `index` (if any) and removes the slot itself.
    ///
    /// Later slots shift down by one.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child_at(&mut self, index: usize) -> TreeResult<()> {
        let len = self.children.len();
        if index >= len {
            return Err(TreeError::OutOfRange { index, len });
        }
        drop(self.children.remove(index));
        Ok(())
    }

    /// Removes the last slot and hands its child back to the caller.
    ///
    /// Returns `None` without touching anything if there are no slots; a last
    /// slot that was empty is removed and also yields `None`.
    pub fn pop_last_child(&mut self) -> Option<Node<T>> {
        self.children.pop().flatten().map(|child| *child)
    }
}

impl<T> TreeNode for Node<T> {
    type Value = T;

    fn leaf(value: T) -> Self {
        Self::new(value)
    }

    fn value(&self) -> &T {
        &self.value
    }

    fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    fn slots(&self) -> &[Option<Box<Self>>] {
        &self.children
    }

    fn slots_mut(&mut self) -> &mut [Option<Box<Self>>] {
        &mut self.children
    }
}

/// A plain multi-way node has no textual form of its own.
impl<T> fmt::Display for Node<T> {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl<T: fmt::Display> ToTermTree for Node<T> {
    fn to_term_tree(&self) -> TermTree<String> {
        node_term_tree(self)
    }
}
