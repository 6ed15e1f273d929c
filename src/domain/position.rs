//! Node handles and slot names.

use std::fmt;

use generational_arena::Index;
use uuid::Uuid;

/// Identity of one tree's node storage.
///
/// Assigned when storage is created, so a clone gets a new one and
/// `take` hands the old one over together with the nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(Uuid);

impl TreeId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TreeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Any place a node can be created in: the root slot or a child slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Root,
    Child(Side),
}

impl From<Side> for Slot {
    fn from(side: Side) -> Self {
        Slot::Child(side)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Root => write!(f, "root"),
            Slot::Child(side) => write!(f, "{} child", side),
        }
    }
}

/// Non-owning handle to a node of one particular tree.
///
/// A position never keeps its node alive. It names the owning tree and a
/// generation-tagged arena slot; once the node is erased, or the storage is
/// cleared or taken, every operation given this position reports
/// [`TreeError::InvalidPosition`](crate::domain::TreeError::InvalidPosition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    handle: Option<(TreeId, Index)>,
}

impl Position {
    /// The position that refers to no node.
    pub const fn null() -> Self {
        Self { handle: None }
    }

    pub(crate) fn new(tree: TreeId, idx: Index) -> Self {
        Self {
            handle: Some((tree, idx)),
        }
    }

    pub fn is_null(&self) -> bool {
        self.handle.is_none()
    }

    pub(crate) fn handle(&self) -> Option<(TreeId, Index)> {
        self.handle
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.handle {
            None => write!(f, "null"),
            Some((_, idx)) => {
                let (slot, generation) = idx.into_raw_parts();
                write!(f, "#{}@{}", slot, generation)
            }
        }
    }
}
