//! Domain layer: the binary tree, its positions and errors
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod arena;
pub mod error;
mod leaves;
pub mod position;

pub use arena::LinkedBinaryTree;
pub use error::{PositionFault, TreeError, TreeResult};
pub use position::{Position, Side, Slot, TreeId};
