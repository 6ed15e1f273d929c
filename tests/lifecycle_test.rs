//! Tests for ownership transfer: attach, clone, move and take

use bintree::util::testing;
use bintree::{LinkedBinaryTree, Position, PositionFault, Side, TreeError};
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn preorder<E: Clone>(tree: &LinkedBinaryTree<E>) -> Vec<E> {
    tree.positions()
        .into_iter()
        .map(|p| tree.element(p).unwrap().clone())
        .collect()
}

/// root with a left and a right leaf
fn cherry(root: i32, left: i32, right: i32) -> LinkedBinaryTree<i32> {
    let mut tree = LinkedBinaryTree::new();
    let r = tree.add_root(root).unwrap();
    tree.add_left(r, left).unwrap();
    tree.add_right(r, right).unwrap();
    tree
}

// ============================================================
// Attach
// ============================================================

#[rstest]
fn given_two_sources_when_attaching_then_sizes_add_and_sources_empty() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(0).unwrap();
    let leaf = tree.add_left(root, 1).unwrap();
    let mut left = cherry(10, 11, 12);
    let mut right = LinkedBinaryTree::new();
    right.add_root(20).unwrap();

    tree.attach(leaf, &mut left, &mut right).unwrap();

    assert_eq!(tree.size(), 2 + 3 + 1);
    assert!(left.empty() && right.empty());
    assert_eq!(left.size(), 0);
    assert!(left.root().is_null());
    assert_eq!(preorder(&tree), vec![0, 1, 10, 11, 12, 20]);
    let spliced = tree.left(leaf).unwrap();
    assert_eq!(tree.parent(spliced), Ok(leaf));
    assert_eq!(tree.element(tree.right(leaf).unwrap()), Ok(&20));
}

#[rstest]
fn given_empty_sources_when_attaching_then_target_is_unchanged() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(0).unwrap();
    let mut left = LinkedBinaryTree::new();
    let mut right = cherry(1, 2, 3);

    tree.attach(root, &mut left, &mut right).unwrap();

    assert!(tree.left(root).unwrap().is_null());
    assert_eq!(preorder(&tree), vec![0, 1, 2, 3]);
}

#[rstest]
#[case::left_occupied(Side::Left)]
#[case::right_occupied(Side::Right)]
fn given_non_leaf_target_when_attaching_then_not_leaf_and_nothing_moves(#[case] side: Side) {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(0).unwrap();
    tree.add_child(root, side, 1).unwrap();
    let mut left = cherry(10, 11, 12);
    let mut right = cherry(20, 21, 22);

    assert_eq!(
        tree.attach(root, &mut left, &mut right),
        Err(TreeError::NotLeaf(side))
    );
    assert_eq!(tree.size(), 2);
    assert_eq!(left.size(), 3);
    assert_eq!(right.size(), 3);
}

#[rstest]
fn given_invalid_target_when_attaching_then_sources_are_untouched() {
    let mut tree: LinkedBinaryTree<i32> = LinkedBinaryTree::new();
    let mut left = cherry(1, 2, 3);
    let mut right = cherry(4, 5, 6);

    assert_eq!(
        tree.attach(Position::null(), &mut left, &mut right),
        Err(TreeError::InvalidPosition(PositionFault::Null))
    );
    let foreign = left.root();
    assert_eq!(
        tree.attach(foreign, &mut left, &mut right),
        Err(TreeError::InvalidPosition(PositionFault::Foreign))
    );
    assert_eq!(preorder(&left), vec![1, 2, 3]);
    assert_eq!(preorder(&right), vec![4, 5, 6]);
}

#[rstest]
fn given_source_positions_when_attached_then_they_no_longer_resolve() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(0).unwrap();
    let mut left = cherry(1, 2, 3);
    let old = left.root();
    let mut right = LinkedBinaryTree::new();

    tree.attach(root, &mut left, &mut right).unwrap();

    assert!(!left.contains(old));
    assert!(!tree.contains(old));
    // the emptied source is reusable and does not resurrect old positions
    let fresh = left.add_root(9).unwrap();
    assert_ne!(fresh, old);
    assert_eq!(
        left.element(old),
        Err(TreeError::InvalidPosition(PositionFault::Foreign))
    );
}

#[rstest]
fn given_spliced_trees_when_building_bottom_up_then_shape_is_complete() {
    let mut leaves: Vec<LinkedBinaryTree<i32>> = (0..4)
        .map(|i| {
            let mut t = LinkedBinaryTree::new();
            t.add_root(i).unwrap();
            t
        })
        .collect();
    let mut level: Vec<LinkedBinaryTree<i32>> = Vec::new();
    for pair in leaves.chunks_mut(2) {
        let (l, r) = pair.split_at_mut(1);
        let mut parent = LinkedBinaryTree::new();
        let p = parent.add_root(100).unwrap();
        parent.attach(p, &mut l[0], &mut r[0]).unwrap();
        level.push(parent);
    }
    let mut top = LinkedBinaryTree::new();
    let t = top.add_root(200).unwrap();
    let (l, r) = level.split_at_mut(1);
    top.attach(t, &mut l[0], &mut r[0]).unwrap();

    assert_eq!(top.size(), 7);
    assert_eq!(top.depth(), 3);
    assert_eq!(top.leaf_count(), 4);
    assert_eq!(preorder(&top), vec![200, 100, 0, 1, 100, 2, 3]);
    assert!(leaves.iter().all(LinkedBinaryTree::empty));
}

// ============================================================
// Clone
// ============================================================

#[rstest]
fn given_tree_when_cloned_then_copy_is_equal_but_independent() {
    let original = cherry(1, 2, 3);
    let mut copy = original.clone();

    assert_eq!(copy.size(), original.size());
    assert_eq!(preorder(&copy), preorder(&original));
    assert!(!copy.contains(original.root()));
    assert!(!original.contains(copy.root()));

    let copy_root = copy.root();
    *copy.element_mut(copy_root).unwrap() = 99;
    let right = copy.right(copy_root).unwrap();
    copy.erase(right).unwrap();

    assert_eq!(preorder(&original), vec![1, 2, 3]);
    assert_eq!(preorder(&copy), vec![99, 2]);
}

#[rstest]
fn given_tree_when_clone_from_then_target_is_replaced() {
    let source = cherry(1, 2, 3);
    let mut target = cherry(7, 8, 9);
    let old_root = target.root();

    target.clone_from(&source);

    assert_eq!(preorder(&target), vec![1, 2, 3]);
    assert!(!target.contains(old_root));
}

#[rstest]
fn given_empty_tree_when_cloned_then_copy_is_empty() {
    let original: LinkedBinaryTree<String> = LinkedBinaryTree::new();
    let copy = original.clone();
    assert!(copy.empty());
    assert_ne!(copy.id(), original.id());
}

// ============================================================
// Move / take
// ============================================================

#[rstest]
fn given_tree_when_moved_then_positions_follow_the_nodes() {
    let tree = cherry(1, 2, 3);
    let root = tree.root();

    let moved = tree;

    assert_eq!(moved.size(), 3);
    assert_eq!(moved.element(root), Ok(&1));
}

#[rstest]
fn given_tree_when_taken_then_source_is_empty_and_rejects_old_positions() {
    let mut source = cherry(1, 2, 3);
    let root = source.root();

    let dest = source.take();

    assert_eq!(source.size(), 0);
    assert!(source.empty());
    assert_eq!(dest.size(), 3);
    assert_eq!(dest.element(root), Ok(&1));
    assert_eq!(
        source.element(root),
        Err(TreeError::InvalidPosition(PositionFault::Foreign))
    );
}

#[rstest]
fn given_tree_when_reassigned_then_old_nodes_are_dropped() {
    use std::rc::Rc;

    let marker = Rc::new(());
    let mut tree = LinkedBinaryTree::new();
    let r = tree.add_root(Rc::clone(&marker)).unwrap();
    tree.add_left(r, Rc::clone(&marker)).unwrap();
    assert_eq!(Rc::strong_count(&marker), 3);

    tree = LinkedBinaryTree::new();
    assert!(tree.empty());
    assert_eq!(Rc::strong_count(&marker), 1);
}

#[rstest]
fn given_cleared_tree_then_all_elements_are_dropped_once() {
    use std::rc::Rc;

    let marker = Rc::new(());
    let mut tree = LinkedBinaryTree::new();
    let r = tree.add_root(Rc::clone(&marker)).unwrap();
    tree.add_left(r, Rc::clone(&marker)).unwrap();
    tree.add_right(r, Rc::clone(&marker)).unwrap();
    let copy = tree.clone();
    assert_eq!(Rc::strong_count(&marker), 7);

    tree.clear();
    assert_eq!(Rc::strong_count(&marker), 4);
    drop(copy);
    assert_eq!(Rc::strong_count(&marker), 1);
}
