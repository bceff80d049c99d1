use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree_traits::TreeNode;

/// Level-order walk that yields one whole level per step.
///
/// Every visited node contributes its full slot sequence to the next level,
/// empty slots included, so a level keeps its positional holes. Empty slots
/// have nothing below them. The walk ends once a level has no entries at all.
pub struct Levels<'a, N> {
    queue: VecDeque<Option<&'a N>>,
}

impl<'a, N: TreeNode> Levels<'a, N> {
    pub fn new(root: Option<&'a N>) -> Self {
        let mut queue = VecDeque::new();
        if let Some(root) = root {
            queue.push_back(Some(root));
        }
        Self { queue }
    }
}

impl<'a, N: TreeNode> Iterator for Levels<'a, N> {
    type Item = Vec<Option<&'a N>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }

        // everything queued right now belongs to the current level
        let mut remaining = self.queue.len();
        let mut level = Vec::with_capacity(remaining);
        while remaining > 0 {
            let Some(entry) = self.queue.pop_front() else {
                break;
            };
            if let Some(node) = entry {
                self.queue
                    .extend(node.slots().iter().map(|slot| slot.as_deref()));
            }
            level.push(entry);
            remaining -= 1;
        }

        Some(level)
    }
}

impl<N: TreeNode> FusedIterator for Levels<'_, N> {}
