use std::fmt;

use termtree::Tree as TermTree;

use crate::tree_traits::{node_term_tree, ToTermTree, TreeNode};

/// Which of the two slots of a [`BNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Binary tree node.
///
/// Always has exactly two slots, left (0) and right (1); either, both or
/// neither may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BNode<T> {
    value: T,
    children: [Option<Box<BNode<T>>>; 2],
}

impl<T> BNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: [None, None],
        }
    }

    pub fn with_children(value: T, left: Option<BNode<T>>, right: Option<BNode<T>>) -> Self {
        Self {
            value,
            children: [left.map(Box::new), right.map(Box::new)],
        }
    }

    /// Wraps `left` and `right` into fresh leaves below `value`.
    pub fn with_values(value: T, left: T, right: T) -> Self {
        Self::with_children(value, Some(Self::new(left)), Some(Self::new(right)))
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn child(&self, side: Side) -> Option<&BNode<T>> {
        self.children[side.index()].as_deref()
    }

    pub fn child_mut(&mut self, side: Side) -> Option<&mut BNode<T>> {
        self.children[side.index()].as_deref_mut()
    }

    pub fn left(&self) -> Option<&BNode<T>> {
        self.child(Side::Left)
    }

    pub fn right(&self) -> Option<&BNode<T>> {
        self.child(Side::Right)
    }

    pub fn left_mut(&mut self) -> Option<&mut BNode<T>> {
        self.child_mut(Side::Left)
    }

    pub fn right_mut(&mut self) -> Option<&mut BNode<T>> {
        self.child_mut(Side::Right)
    }

    /// Drops the current occupant of `side`, installs `node` and returns it.
    pub fn set_child(&mut self, side: Side, node: BNode<T>) -> &mut BNode<T> {
        let slot = &mut self.children[side.index()];
        drop(slot.take());
        slot.insert(Box::new(node))
    }

    pub fn set_left(&mut self, node: BNode<T>) -> &mut BNode<T> {
        self.set_child(Side::Left, node)
    }

    pub fn set_right(&mut self, node: BNode<T>) -> &mut BNode<T> {
        self.set_child(Side::Right, node)
    }

    pub fn set_left_value(&mut self, value: T) -> &mut BNode<T> {
        self.set_left(Self::new(value))
    }

    pub fn set_right_value(&mut self, value: T) -> &mut BNode<T> {
        self.set_right(Self::new(value))
    }

    pub fn take_child(&mut self, side: Side) -> Option<BNode<T>> {
        self.children[side.index()].take().map(|child| *child)
    }

    pub fn take_left(&mut self) -> Option<BNode<T>> {
        self.take_child(Side::Left)
    }

    pub fn take_right(&mut self) -> Option<BNode<T>> {
        self.take_child(Side::Right)
    }

    pub fn has_left(&self) -> bool {
        self.children[0].is_some()
    }

    pub fn has_right(&self) -> bool {
        self.children[1].is_some()
    }

    pub fn has_both(&self) -> bool {
        self.has_left() && self.has_right()
    }

    pub fn has_any(&self) -> bool {
        self.has_left() || self.has_right()
    }

    pub fn is_leaf(&self) -> bool {
        !self.has_any()
    }

    /// Left if it is empty, else right if it is empty.
    pub fn first_empty_side(&self) -> Option<Side> {
        if !self.has_left() {
            Some(Side::Left)
        } else if !self.has_right() {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Number of occupied slots: 0, 1 or 2.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<T> TreeNode for BNode<T> {
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

/// In-order-like rendering: `"<left> <value> <right>"`, where an empty side
/// contributes neither its string nor its separator.
impl<T: fmt::Display> fmt::Display for BNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(left) = self.left() {
            write!(f, "{left} ")?;
        }
        write!(f, "{}", self.value)?;
        if let Some(right) = self.right() {
            write!(f, " {right}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> ToTermTree for BNode<T> {
    fn to_term_tree(&self) -> TermTree<String> {
        node_term_tree(self)
    }
}
