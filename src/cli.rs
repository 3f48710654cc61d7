use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "gib - fetch .gitignore boilerplates",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Cache directory for the boilerplate clone
    #[arg(short, long)]
    pub cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all available boilerplates
    List,
    /// Print one or more boilerplates to standard output
    Dump {
        /// Boilerplate names, matched by file name (e.g. Rust, Vim)
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Find boilerplates whose name contains a string
    Search {
        /// Case-insensitive substring to match
        term: String,
    },
    /// Print the cache directory path
    Root,
    /// Pull the latest boilerplates into the cache
    Update,
}
