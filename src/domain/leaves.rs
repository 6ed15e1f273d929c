/*
Left-leaf counting, two ways.

A left leaf is a leaf sitting in its parent's left slot. The root has no
parent, so it never counts, even when it is a leaf.

Both walks carry the "is left child" flag down from the parent:
- depth-first: explicit stack of (node, is_left), so tree height never
  touches the call stack
- breadth-first: VecDeque of (node, is_left), seeded with (root, false)

They must agree on every tree; the tests cross-check them.
 */
use std::collections::VecDeque;

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::LinkedBinaryTree;

impl<E> LinkedBinaryTree<E> {
    /// Counts leaves that are left children, depth-first.
    #[instrument(level = "debug", skip(self))]
    pub fn count_left_leaves(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<(Index, bool)> = self.root_index().map(|r| (r, false)).into_iter().collect();

        while let Some((idx, is_left)) = stack.pop() {
            let node = self.node(idx);
            if node.is_leaf() {
                count += usize::from(is_left);
                continue;
            }
            if let Some(r) = node.right {
                stack.push((r, false));
            }
            if let Some(l) = node.left {
                stack.push((l, true));
            }
        }
        count
    }

    /// Counts leaves that are left children, level by level.
    #[instrument(level = "debug", skip(self))]
    pub fn count_left_leaves_bfs(&self) -> usize {
        let Some(root) = self.root_index() else {
            return 0;
        };
        let mut count = 0;
        let mut queue = VecDeque::new();
        queue.push_back((root, false));

        while let Some((idx, is_left)) = queue.pop_front() {
            let node = self.node(idx);
            if node.is_leaf() && is_left {
                count += 1;
            }
            if let Some(l) = node.left {
                queue.push_back((l, true));
            }
            if let Some(r) = node.right {
                queue.push_back((r, false));
            }
        }
        count
    }
}
