//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

/// Build binary trees by level-order insertion and draw them
#[derive(Parser, Debug)]
#[command(name = "treekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Render settings file (TOML), layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert values in level order into an empty binary tree and render it
    Build {
        /// Values, inserted in the given order
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Visual)]
        format: OutputFormat,

        /// Leave empty slots out of the visual drawing
        #[arg(long)]
        ignore_absent: bool,
    },

    /// Render the built-in sample trees
    Demo,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show the global config file location
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Directory-style ASCII drawing
    Visual,
    /// One line per level, empty slots as placeholders
    LevelOrder,
    /// In-order-like value string
    Inorder,
    /// Box-drawing rendering via termtree
    Termtree,
    /// Every format above
    All,
}

impl OutputFormat {
    pub const fn label(self) -> &'static str {
        match self {
            OutputFormat::Visual => "visual",
            OutputFormat::LevelOrder => "level order",
            OutputFormat::Inorder => "in order",
            OutputFormat::Termtree => "termtree",
            OutputFormat::All => "all",
        }
    }
}
