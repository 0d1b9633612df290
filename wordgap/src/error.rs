use snafu::prelude::*;
use std::{io, path::PathBuf};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), context(suffix(Err)))]
pub enum Error {
    #[snafu(display("Unable to read {}: {source}", path.display()))]
    Io { path: PathBuf, source: io::Error },

    #[snafu(display("{source}"))]
    Search { source: wordgap::finder::Error },

    #[snafu(display("Unable to parse the config file: {source}"))]
    ConfigRead { source: toml::de::Error },

    #[snafu(display("Unable to serialize the report: {source}"))]
    Serialize { source: serde_json::Error },

    #[snafu(display("{} has no parent directory", path.display()))]
    NoParent { path: PathBuf },

    #[snafu(display("{failed} of {total} cases failed"))]
    CasesFailed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
