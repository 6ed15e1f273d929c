//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Linked binary tree playground: build, splice and inspect trees
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the four-node sample tree, inspect it, then erase its right leaf
    Demo,

    /// Build a complete binary tree by splicing subtrees together
    Complete {
        /// Number of levels
        #[arg(value_parser = clap::value_parser!(u32).range(1..=20))]
        depth: u32,

        /// Skip the rendered tree, print only the figures
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
