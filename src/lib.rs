//! Generic in-memory trees.
//!
//! Two node kinds share the [`TreeNode`] capability: the multi-way [`Node`]
//! and the two-slot [`BNode`]. A [`Tree`] owns at most one root of either
//! kind; [`BinaryTree`] adds level-order insertion on top of `Tree<BNode<T>>`.
//!
//! ```
//! use treekit::{BinaryTree, RenderSettings};
//!
//! let tree: BinaryTree<i32> = [2, 105, 105, 101].into_iter().collect();
//! assert_eq!(tree.to_string(), "101 105 2 105");
//! assert_eq!(
//!     tree.level_order_lines(&RenderSettings::default())[1],
//!     "[1] 105 105"
//! );
//! ```

pub mod binary_tree;
pub mod bnode;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod node;
pub mod render;
pub mod tree;
pub mod tree_queue;
pub mod tree_traits;
pub mod util;

pub use binary_tree::BinaryTree;
pub use bnode::{BNode, Side};
pub use config::{RenderSettings, Settings};
pub use errors::{SettingsError, TreeError, TreeResult};
pub use node::Node;
pub use tree::{MultiTree, Tree};
pub use tree_queue::Levels;
pub use tree_traits::{ToTermTree, TreeNode};
