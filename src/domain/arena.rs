use std::mem;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};

use crate::domain::error::{PositionFault, TreeError, TreeResult};
use crate::domain::position::{Position, Side, Slot, TreeId};

/// Tree node in the arena-based binary tree.
#[derive(Debug, Clone)]
pub(crate) struct TreeNode<E> {
    /// Element owned by this node
    pub(crate) data: E,
    /// Index of parent node in the arena, None for the root. Navigation only.
    pub(crate) parent: Option<Index>,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
}

impl<E> TreeNode<E> {
    fn new(data: E, parent: Option<Index>) -> Self {
        Self {
            data,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-based binary tree with position handles.
///
/// Nodes live in a generational arena owned by the tree. Child links own
/// their subtree in the sense that every arena slot is reachable from the
/// root exactly once; the parent link is a plain index used for navigation.
/// All mutation goes through [`Position`]s, which are checked against the
/// tree identity and the slot generation before use.
#[derive(Debug)]
pub struct LinkedBinaryTree<E> {
    /// Identity stamped into every position this storage hands out
    id: TreeId,
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode<E>>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl<E> Default for LinkedBinaryTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> LinkedBinaryTree<E> {
    pub fn new() -> Self {
        Self {
            id: TreeId::new(),
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    /// Number of live nodes. Every live arena slot is reachable from the root.
    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn empty(&self) -> bool {
        self.root.is_none()
    }

    /// Position of the root, or the null position for an empty tree.
    pub fn root(&self) -> Position {
        self.root
            .map(|idx| self.position(idx))
            .unwrap_or_else(Position::null)
    }

    /// Whether `p` names a live node of this tree.
    pub fn contains(&self, p: Position) -> bool {
        self.resolve(p).is_ok()
    }

    /// Snapshot of all node positions in preorder (node, left, right).
    #[instrument(level = "trace", skip(self))]
    pub fn positions(&self) -> Vec<Position> {
        let mut out = Vec::with_capacity(self.size());
        let mut stack: Vec<Index> = self.root.into_iter().collect();
        while let Some(idx) = stack.pop() {
            let node = &self.arena[idx];
            out.push(self.position(idx));
            // Right first so left is visited first
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }

    // ---------------------------------------------------------------
    // navigation
    // ---------------------------------------------------------------

    pub fn element(&self, p: Position) -> TreeResult<&E> {
        let idx = self.resolve(p)?;
        Ok(&self.arena[idx].data)
    }

    pub fn element_mut(&mut self, p: Position) -> TreeResult<&mut E> {
        let idx = self.resolve(p)?;
        Ok(&mut self.arena[idx].data)
    }

    /// Parent of `p`; null for the root.
    pub fn parent(&self, p: Position) -> TreeResult<Position> {
        let idx = self.resolve(p)?;
        Ok(self.position_opt(self.arena[idx].parent))
    }

    /// Left child of `p`; null when absent.
    pub fn left(&self, p: Position) -> TreeResult<Position> {
        self.child(p, Side::Left)
    }

    /// Right child of `p`; null when absent.
    pub fn right(&self, p: Position) -> TreeResult<Position> {
        self.child(p, Side::Right)
    }

    pub fn child(&self, p: Position, side: Side) -> TreeResult<Position> {
        let idx = self.resolve(p)?;
        Ok(self.position_opt(self.arena[idx].child(side)))
    }

    /// Present children of `p`, left before right.
    pub fn children(&self, p: Position) -> TreeResult<Vec<Position>> {
        let idx = self.resolve(p)?;
        let node = &self.arena[idx];
        Ok(node
            .left
            .into_iter()
            .chain(node.right)
            .map(|c| self.position(c))
            .collect())
    }

    pub fn num_children(&self, p: Position) -> TreeResult<usize> {
        let idx = self.resolve(p)?;
        let node = &self.arena[idx];
        Ok(usize::from(node.left.is_some()) + usize::from(node.right.is_some()))
    }

    pub fn is_root(&self, p: Position) -> TreeResult<bool> {
        let idx = self.resolve(p)?;
        Ok(self.arena[idx].parent.is_none())
    }

    /// Whether `p` is a leaf.
    pub fn is_external(&self, p: Position) -> TreeResult<bool> {
        let idx = self.resolve(p)?;
        Ok(self.arena[idx].is_leaf())
    }

    // ---------------------------------------------------------------
    // mutation
    // ---------------------------------------------------------------

    #[instrument(level = "debug", skip(self, data), fields(tree = %self.id))]
    pub fn add_root(&mut self, data: E) -> TreeResult<Position> {
        if self.root.is_some() {
            debug!("add_root rejected: root present");
            return Err(TreeError::AlreadyExists(Slot::Root));
        }
        let idx = self.arena.insert(TreeNode::new(data, None));
        self.root = Some(idx);
        Ok(self.position(idx))
    }

    pub fn add_left(&mut self, p: Position, data: E) -> TreeResult<Position> {
        self.add_child(p, Side::Left, data)
    }

    pub fn add_right(&mut self, p: Position, data: E) -> TreeResult<Position> {
        self.add_child(p, Side::Right, data)
    }

    /// Creates a new leaf in the `side` slot of `p`.
    #[instrument(level = "debug", skip(self, data), fields(tree = %self.id))]
    pub fn add_child(&mut self, p: Position, side: Side, data: E) -> TreeResult<Position> {
        let parent = self.resolve(p)?;
        if self.arena[parent].child(side).is_some() {
            debug!(%side, "add_child rejected: slot occupied");
            return Err(TreeError::AlreadyExists(Slot::Child(side)));
        }
        let idx = self.arena.insert(TreeNode::new(data, Some(parent)));
        *self.arena[parent].child_mut(side) = Some(idx);
        Ok(self.position(idx))
    }

    /// Removes the node at `p` and returns its element.
    ///
    /// The node may have at most one child; that child takes the node's
    /// place under its former parent (or becomes the root). `p` is invalid
    /// afterwards.
    #[instrument(level = "debug", skip(self), fields(tree = %self.id))]
    pub fn erase(&mut self, p: Position) -> TreeResult<E> {
        let idx = self.resolve(p)?;
        let node = &self.arena[idx];
        if node.left.is_some() && node.right.is_some() {
            debug!("erase rejected: two children");
            return Err(TreeError::TooManyChildren);
        }
        let node = self
            .arena
            .remove(idx)
            .ok_or(TreeError::InvalidPosition(PositionFault::Stale))?;
        let child = node.left.or(node.right);
        if let Some(c) = child {
            self.arena[c].parent = node.parent;
        }
        match node.parent {
            None => self.root = child,
            Some(par) => {
                let parent = &mut self.arena[par];
                if parent.left == Some(idx) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            }
        }
        Ok(node.data)
    }

    /// Splices `left` and `right` under the leaf at `p`.
    ///
    /// Each non-empty source becomes the corresponding subtree of `p` and is
    /// left empty. Everything is checked before anything moves, so on error
    /// the target and both sources are unchanged. Positions previously taken
    /// from the sources do not follow their nodes.
    #[instrument(level = "debug", skip(self, left, right), fields(tree = %self.id))]
    pub fn attach(&mut self, p: Position, left: &mut Self, right: &mut Self) -> TreeResult<()> {
        if left.id == self.id || right.id == self.id {
            return Err(TreeError::InvalidArgument("source tree is the target tree"));
        }
        if left.id == right.id {
            return Err(TreeError::InvalidArgument("left and right sources are the same tree"));
        }
        let target = self.resolve(p)?;
        let node = &self.arena[target];
        if node.left.is_some() {
            return Err(TreeError::NotLeaf(Side::Left));
        }
        if node.right.is_some() {
            return Err(TreeError::NotLeaf(Side::Right));
        }

        let before = self.size();
        for (source, side) in [(left, Side::Left), (right, Side::Right)] {
            if let Some(src_root) = source.root {
                let storage = source.reset();
                self.transplant(storage, src_root, target, side);
            }
        }
        debug!(absorbed = self.size() - before, size = self.size(), "attach done");
        Ok(())
    }

    /// Destroys all nodes. Every outstanding position becomes invalid.
    #[instrument(level = "debug", skip(self), fields(tree = %self.id))]
    pub fn clear(&mut self) {
        drop(self.reset());
    }

    /// Moves the whole tree out, leaving `self` empty.
    ///
    /// Positions taken before the call stay valid against the returned tree
    /// and are rejected by `self`.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    // ---------------------------------------------------------------
    // derived queries
    // ---------------------------------------------------------------

    /// Number of levels; 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.arena[idx];
            for child in node.left.into_iter().chain(node.right) {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }

    /// Number of leaves (external nodes).
    pub fn leaf_count(&self) -> usize {
        self.arena.iter().filter(|(_, node)| node.is_leaf()).count()
    }

    // ---------------------------------------------------------------
    // internals
    // ---------------------------------------------------------------

    pub(crate) fn root_index(&self) -> Option<Index> {
        self.root
    }

    /// Node at an index reachable from the root.
    pub(crate) fn node(&self, idx: Index) -> &TreeNode<E> {
        &self.arena[idx]
    }

    fn position(&self, idx: Index) -> Position {
        Position::new(self.id, idx)
    }

    fn position_opt(&self, idx: Option<Index>) -> Position {
        idx.map(|i| self.position(i)).unwrap_or_else(Position::null)
    }

    #[instrument(level = "trace", skip(self))]
    fn resolve(&self, p: Position) -> TreeResult<Index> {
        let fault = match p.handle() {
            None => PositionFault::Null,
            Some((id, _)) if id != self.id => PositionFault::Foreign,
            Some((_, idx)) if self.arena.contains(idx) => return Ok(idx),
            Some(_) => PositionFault::Stale,
        };
        trace!(%fault, "position rejected");
        Err(TreeError::InvalidPosition(fault))
    }

    /// Empties the tree under a fresh identity and returns the old storage.
    ///
    /// A new arena restarts its generations, so the identity has to change
    /// with it or old positions could alias new nodes.
    fn reset(&mut self) -> Arena<TreeNode<E>> {
        self.root = None;
        self.id = TreeId::new();
        mem::replace(&mut self.arena, Arena::new())
    }

    /// Moves the subtree rooted at `root` out of `storage` into the `side`
    /// slot of `parent`.
    fn transplant(&mut self, mut storage: Arena<TreeNode<E>>, root: Index, parent: Index, side: Side) {
        self.arena.reserve(storage.len());
        let mut stack = vec![(root, parent, side)];
        while let Some((src, parent, side)) = stack.pop() {
            let Some(node) = storage.remove(src) else {
                continue;
            };
            let idx = self.arena.insert(TreeNode::new(node.data, Some(parent)));
            *self.arena[parent].child_mut(side) = Some(idx);
            if let Some(r) = node.right {
                stack.push((r, idx, Side::Right));
            }
            if let Some(l) = node.left {
                stack.push((l, idx, Side::Left));
            }
        }
    }
}

impl<E: Clone> Clone for LinkedBinaryTree<E> {
    /// Deep copy under a fresh identity; positions of `self` are foreign to
    /// the copy.
    fn clone(&self) -> Self {
        let mut copy = Self {
            id: TreeId::new(),
            arena: Arena::with_capacity(self.size().max(1)),
            root: None,
        };
        if let Some(root) = self.root {
            let new_root = copy.arena.insert(TreeNode::new(self.arena[root].data.clone(), None));
            copy.root = Some(new_root);
            let mut stack = vec![(root, new_root)];
            while let Some((src, dst)) = stack.pop() {
                for side in [Side::Left, Side::Right] {
                    if let Some(child) = self.arena[src].child(side) {
                        let data = self.arena[child].data.clone();
                        let new_child = copy.arena.insert(TreeNode::new(data, Some(dst)));
                        *copy.arena[dst].child_mut(side) = Some(new_child);
                        stack.push((child, new_child));
                    }
                }
            }
        }
        copy
    }
}
