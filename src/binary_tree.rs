use std::collections::VecDeque;

use tracing::{debug, instrument, warn};

use crate::bnode::BNode;
use crate::tree::Tree;
use crate::tree_traits::TreeNode;

/// Binary tree filled in level order.
///
/// Not a search tree: where a node lands depends only on how many nodes were
/// inserted before it, never on its value.
pub type BinaryTree<T> = Tree<BNode<T>>;

impl<T> Tree<BNode<T>> {
    /// Attaches `node` at the first free slot in level order.
    ///
    /// Levels are scanned top down, each one left to right. The first node
    /// with an empty left slot takes `node` on the left; failing that, the
    /// first with an empty right slot takes it on the right. An empty tree
    /// gets `node` as its root.
    ///
    /// Returns the installed node. `None` means no free slot was found, which
    /// a finite tree cannot produce; `node` is dropped in that case.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, node: BNode<T>) -> Option<&mut BNode<T>> {
        if self.is_empty() {
            debug!("empty tree, node becomes root");
            return Some(self.set_root(node));
        }

        let root = self.root_node_mut()?;
        let mut queue: VecDeque<&mut BNode<T>> = VecDeque::from([root]);
        let mut depth = 0usize;

        while !queue.is_empty() {
            let mut remaining = queue.len();
            while remaining > 0 {
                let Some(current) = queue.pop_front() else {
                    break;
                };
                remaining -= 1;

                if let Some(side) = current.first_empty_side() {
                    debug!(depth = depth + 1, %side, "placing node");
                    return Some(current.set_child(side, node));
                }

                queue.extend(
                    current
                        .slots_mut()
                        .iter_mut()
                        .filter_map(|slot| slot.as_deref_mut()),
                );
            }
            depth += 1;
        }

        warn!(depth, "no free slot found, dropping node");
        None
    }

    /// Wraps `value` into a fresh leaf and inserts it, see [`Tree::insert`].
    pub fn insert_value(&mut self, value: T) -> Option<&mut BNode<T>> {
        self.insert(BNode::new(value))
    }

    /// Inserts `values` one after another into an empty tree.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for Tree<BNode<T>> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_value(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<BNode<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
