//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

use crate::domain::position::{Side, Slot};

/// Why a position could not be resolved to a live node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFault {
    /// The position refers to no node.
    Null,
    /// The position was issued by another tree (or by this tree before its
    /// storage was cleared or taken).
    Foreign,
    /// The node the position referred to has been erased.
    Stale,
}

impl fmt::Display for PositionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionFault::Null => write!(f, "null position"),
            PositionFault::Foreign => write!(f, "position belongs to another tree"),
            PositionFault::Stale => write!(f, "node has been erased"),
        }
    }
}

/// Errors raised by tree operations.
///
/// A rejected operation never mutates the tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("{0} already exists")]
    AlreadyExists(Slot),

    #[error("invalid position: {0}")]
    InvalidPosition(PositionFault),

    #[error("cannot erase a node with two children")]
    TooManyChildren,

    #[error("target node is not a leaf: {0} child present")]
    NotLeaf(Side),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
