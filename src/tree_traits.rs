/*
Rendering for the terminal.

Built on termtree: every node becomes a termtree::Tree<String>, children are
labelled with their slot so a lone right child is not mistaken for a left one.
 */
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{LinkedBinaryTree, Position};

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<E: Display> TreeDisplay for LinkedBinaryTree<E> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree<E: Display>(tree: &LinkedBinaryTree<E>, p: Position, label: String) -> Tree<String> {
            let mut node = Tree::new(label);
            for (tag, child) in [("L", tree.left(p)), ("R", tree.right(p))] {
                if let Ok(child) = child {
                    if let Ok(elem) = tree.element(child) {
                        node.push(build_tree(tree, child, format!("{}: {}", tag, elem)));
                    }
                }
            }
            node
        }

        match self.element(self.root()) {
            Ok(elem) => build_tree(self, self.root(), elem.to_string()),
            Err(_) => Tree::new("Empty tree".to_string()),
        }
    }
}
