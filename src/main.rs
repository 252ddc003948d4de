use std::path::PathBuf;

use clap::{Parser, Subcommand};
use regex::Regex;

use satchel::fs::{FileTreeProcessor, HeaderRemover, LineFilter, TrailingSpaceRemover};

#[derive(Parser)]
#[command(name = "satchel")]
#[command(version, about = "File-tree batch utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Remove a leading header from every matching file
    Rmheader {
        /// Regex selecting the file paths to process
        #[arg(long)]
        pattern: String,

        /// Regex matching the header to strip from the start of each file
        #[arg(long)]
        header: String,

        /// Root directory of the tree to process
        root: PathBuf,
    },

    /// Remove trailing whitespace from every line of matching files
    Rmspaces {
        /// Regex selecting the file paths to process
        #[arg(long)]
        pattern: String,

        /// Root directory of the tree to process
        root: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Rmheader {
            pattern,
            header,
            root,
        } => {
            let mut action = HeaderRemover::new(Regex::new(&header)?);
            FileTreeProcessor::new(Regex::new(&pattern)?).apply_to(root, &mut action)?;
        }
        Command::Rmspaces { pattern, root } => {
            let mut action = LineFilter::new(TrailingSpaceRemover);
            FileTreeProcessor::new(Regex::new(&pattern)?).apply_to(root, &mut action)?;
        }
    }

    Ok(())
}
