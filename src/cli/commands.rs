use std::io::Write;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::domain::{LinkedBinaryTree, TreeResult};
use crate::tree_traits::TreeDisplay;

pub fn execute_command(cli: &Cli, out: &mut impl Write) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo) => _demo(out),
        Some(Commands::Complete { depth, quiet }) => _complete(*depth, *quiet, out),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, out);
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument(skip(out))]
fn _demo(out: &mut impl Write) -> CliResult<()> {
    let mut tree = LinkedBinaryTree::new();
    let a = tree.add_root("A".to_string())?;
    let b = tree.add_left(a, "B".to_string())?;
    let c = tree.add_right(a, "C".to_string())?;
    tree.add_left(b, "D".to_string())?;

    report(&tree, out)?;

    let erased = tree.erase(c)?;
    debug!(%erased, "erased right leaf");
    writeln!(out, "\nerase {}", erased)?;
    report(&tree, out)?;
    Ok(())
}

#[instrument(skip(out))]
fn _complete(depth: u32, quiet: bool, out: &mut impl Write) -> CliResult<()> {
    let mut next = 0;
    let tree = complete_tree(depth, &mut next)?;
    if !quiet {
        writeln!(out, "{}", tree.to_tree_string())?;
    }
    writeln!(out, "size: {}", tree.size())?;
    writeln!(out, "depth: {}", tree.depth())?;
    write_left_leaves(&tree, out)?;
    Ok(())
}

/// Complete tree of `depth` levels, built bottom-up with `attach`.
/// Elements are numbered in preorder starting at `next`.
pub fn complete_tree(depth: u32, next: &mut usize) -> TreeResult<LinkedBinaryTree<usize>> {
    let mut tree = LinkedBinaryTree::new();
    if depth == 0 {
        return Ok(tree);
    }
    let root = tree.add_root(*next)?;
    *next += 1;
    if depth > 1 {
        let mut left = complete_tree(depth - 1, next)?;
        let mut right = complete_tree(depth - 1, next)?;
        tree.attach(root, &mut left, &mut right)?;
    }
    Ok(tree)
}

fn report(tree: &LinkedBinaryTree<String>, out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "{}", tree.to_tree_string())?;
    let preorder = tree
        .positions()
        .into_iter()
        .map(|p| tree.element(p).map(String::as_str))
        .collect::<TreeResult<Vec<_>>>()?;
    writeln!(out, "preorder: {}", preorder.join(" "))?;
    writeln!(out, "size: {}", tree.size())?;
    write_left_leaves(tree, out)
}

fn write_left_leaves<E>(tree: &LinkedBinaryTree<E>, out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "left leaves (dfs): {}", tree.count_left_leaves())?;
    writeln!(out, "left leaves (bfs): {}", tree.count_left_leaves_bfs())?;
    Ok(())
}
