use std::fmt::Display;
use std::ptr;

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::tree_queue::Levels;

/// Capability shared by every node kind that can hang in a [`Tree`](crate::tree::Tree).
///
/// A node owns an ordered run of slots. Each slot is either empty or holds an
/// exclusively owned child, so "slot exists but is empty" and "slot does not
/// exist" are distinct: the first is `Some(None)` from [`TreeNode::child_at`],
/// the second an [`TreeError::OutOfRange`].
///
/// Implementors only expose their value and slot storage; traversal and slot
/// mutation come with the trait.
pub trait TreeNode: Sized {
    type Value;

    /// Creates a node without any occupied slot.
    fn leaf(value: Self::Value) -> Self;

    fn value(&self) -> &Self::Value;

    fn value_mut(&mut self) -> &mut Self::Value;

    fn slots(&self) -> &[Option<Box<Self>>];

    fn slots_mut(&mut self) -> &mut [Option<Box<Self>>];

    fn set_value(&mut self, value: Self::Value) {
        *self.value_mut() = value;
    }

    /// Number of slots, empty ones included.
    fn slot_count(&self) -> usize {
        self.slots().len()
    }

    fn child_at(&self, index: usize) -> TreeResult<Option<&Self>> {
        let len = self.slot_count();
        self.slots()
            .get(index)
            .map(|slot| slot.as_deref())
            .ok_or(TreeError::OutOfRange { index, len })
    }

    fn child_at_mut(&mut self, index: usize) -> TreeResult<Option<&mut Self>> {
        let len = self.slot_count();
        self.slots_mut()
            .get_mut(index)
            .map(|slot| slot.as_deref_mut())
            .ok_or(TreeError::OutOfRange { index, len })
    }

    /// Replaces the occupant of slot `index`.
    ///
    /// The previous occupant and its whole subtree are dropped before `child`
    /// is installed.
    #[instrument(level = "trace", skip(self, child))]
    fn set_child_at(&mut self, index: usize, child: Option<Self>) -> TreeResult<()> {
        let len = self.slot_count();
        let slot = self
            .slots_mut()
            .get_mut(index)
            .ok_or(TreeError::OutOfRange { index, len })?;
        drop(slot.take());
        *slot = child.map(Box::new);
        Ok(())
    }

    /// Detaches the child of slot `index`, leaving the slot empty.
    fn take_child_at(&mut self, index: usize) -> TreeResult<Option<Self>> {
        let len = self.slot_count();
        let slot = self
            .slots_mut()
            .get_mut(index)
            .ok_or(TreeError::OutOfRange { index, len })?;
        Ok(slot.take().map(|child| *child))
    }

    /// Snapshot of the slot sequence, empty slots included.
    fn children(&self) -> Vec<Option<&Self>> {
        self.slots().iter().map(|slot| slot.as_deref()).collect()
    }

    /// Occupied slots only, in slot order.
    fn valid_children(&self) -> Vec<&Self> {
        self.slots().iter().filter_map(|slot| slot.as_deref()).collect()
    }

    /// Depth at which this very node (by address, not by value) is first
    /// reached in a level-order walk from `root`.
    ///
    /// `root` does not have to be an ancestor of `self` in any particular
    /// tree; `None` means `self` is not reachable from `root`.
    #[instrument(level = "trace", skip_all)]
    fn level_of(&self, root: &Self) -> Option<usize> {
        Levels::new(Some(root))
            .position(|level| level.iter().flatten().any(|node| ptr::eq(*node, self)))
    }

    /// Longest path from this node down to a reachable leaf; 0 for a leaf.
    fn height_below(&self) -> usize {
        self.valid_children()
            .into_iter()
            .map(|child| 1 + child.height_below())
            .max()
            .unwrap_or(0)
    }
}

/*
Conversion into `termtree::Tree` for display.
Empty slots are skipped: termtree has no notion of a positional hole.
 */
pub trait ToTermTree {
    fn to_term_tree(&self) -> TermTree<String>;
}

pub(crate) fn node_term_tree<N>(node: &N) -> TermTree<String>
where
    N: TreeNode,
    N::Value: Display,
{
    let leaves: Vec<_> = node
        .valid_children()
        .into_iter()
        .map(node_term_tree)
        .collect();

    TermTree::new(node.value().to_string()).with_leaves(leaves)
}
