//! Linked binary tree with generation-checked positions.
//!
//! [`LinkedBinaryTree`] owns its nodes in an arena; callers navigate and
//! mutate through [`Position`] handles. A position that outlived its node,
//! or that belongs to another tree, is reported as
//! [`TreeError::InvalidPosition`] instead of dangling.

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{LinkedBinaryTree, Position, PositionFault, Side, Slot, TreeError, TreeId, TreeResult};
pub use tree_traits::TreeDisplay;
