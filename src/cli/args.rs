//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Assembly tree inspector: load scene snapshots and print their node hierarchy
#[derive(Parser, Debug)]
#[command(name = "asmtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print indented assembly outline
    Print {
        /// Model snapshot file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Deepest level to print (root is 0)
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Show hierarchy as tree with branch glyphs
    Tree {
        /// Model snapshot file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List leaf node names
    Leaves {
        /// Model snapshot file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show node statistics
    Stats {
        /// Model snapshot file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print every snapshot under a directory
    Scan {
        /// Directory to search (default: cwd)
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
