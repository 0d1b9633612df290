use crate::error::{NoParentErr, Result};
use crate::search::Strategy;
use clap::{Parser, Subcommand, ValueEnum};
use snafu::prelude::*;
use std::path::{Path, PathBuf};

/// Count the fewest words between one word and a later occurrence of another.
#[derive(Clone, Debug, Parser)]
#[command(version)]
pub struct Args {
    /// The directory to use as the working directory when resolving the input and the
    /// config file
    #[clap(long)]
    cwd: Option<String>,

    /// The path (relative to the current working directory) where a wordgap.toml
    /// config file is located
    #[clap(long, default_value = "wordgap.toml")]
    pub config_path: String,

    /// The text file to search. Overrides the input set in the config file.
    #[clap(short, long)]
    pub input: Option<String>,

    /// Override the search strategy from the config file
    #[clap(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Record every end word, even those before the first start word
    #[clap(long, default_value_t = false)]
    pub no_skip_early_ends: bool,

    #[clap(short, long, value_enum, default_value_t = Reporter::Ansi)]
    pub reporter: Reporter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Print the distance between two words
    Query {
        start: String,
        end: String,
    },
    /// Run every case listed in the config file and compare against the expected distances
    Check,
    /// Dump the token stream of the input, one token per line
    Tokens,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Reporter {
    Ansi,
    Json,
}

impl Args {
    pub fn cwd(&self) -> PathBuf {
        self.cwd
            .as_ref()
            .map(|c| Path::new(c.as_str()).to_path_buf())
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn config_path(&self) -> PathBuf {
        self.cwd().join(self.config_path.as_str())
    }

    pub fn config_dir(&self) -> Result<PathBuf> {
        let path = self.config_path();

        path.as_path()
            .parent()
            .map(|path| path.to_path_buf())
            .context(NoParentErr { path })
    }
}
