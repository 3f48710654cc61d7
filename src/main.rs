use anyhow::Result;
use clap::Parser;
use std::env;
use std::path::PathBuf;

use gib::app::App;
use gib::cli::{Cli, Commands};
use gib::ui::{self, print_success};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cache_dir = cli
        .cache_dir
        .or_else(env_cache_dir)
        .unwrap_or_else(default_cache_dir);

    let app = App::new(cache_dir);

    match cli.command {
        Commands::List => {
            let names = app.list_boilerplates()?;
            ui::print_columns(&names, ui::terminal_width())?;
        }
        Commands::Dump { names } => {
            for name in &names {
                app.dump(name)?;
            }
        }
        Commands::Search { term } => {
            let matches = app.search(&term)?;
            ui::print_columns(&matches, ui::terminal_width())?;
        }
        Commands::Root => {
            println!("{}", app.cache_dir().display());
        }
        Commands::Update => {
            app.update()?;
            print_success("Boilerplate cache updated")?;
        }
    }

    Ok(())
}

fn env_cache_dir() -> Option<PathBuf> {
    env::var_os("GIBO_BOILERPLATES")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn default_cache_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gitignore-boilerplates")
}
