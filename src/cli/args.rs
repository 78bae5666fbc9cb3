//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Catalog of classic design patterns with runnable demonstrations
#[derive(Parser, Debug)]
#[command(name = "patternbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Local config file (default: ./.patterns.toml when present)
    #[arg(long, global = true, value_hint = ValueHint::FilePath, env = "PATTERNBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List patterns, grouped by category
    List {
        /// Only this category (behavioural, creational, structural)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Run pattern demonstrations
    Run {
        /// Pattern names (see `list`)
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        names: Vec<String>,
        /// Run every pattern in the catalog
        #[arg(short, long)]
        all: bool,
    },

    /// Describe a pattern
    Show {
        /// Pattern name
        name: String,
    },

    /// Show the composite demo hierarchy as a tree
    Tree,

    /// Evaluate an arithmetic expression with the interpreter
    Eval {
        /// Expression using integers, + and - and parentheses
        expression: String,
    },

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
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Write a config template
    Init {
        /// Write the global config instead of ./.patterns.toml
        #[arg(short, long)]
        global: bool,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
