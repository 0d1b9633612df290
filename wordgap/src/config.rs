use crate::args::Args;
use crate::error::{ConfigReadErr, Error, IoErr, Result};
use crate::finder::DistanceFinder;
use crate::search::Strategy;
use serde::Deserialize;
use snafu::prelude::*;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::read_to_string;
use toml::from_str;

pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let s = read_to_string(path.as_ref()).await.context(IoErr {
        path: path.as_ref(),
    })?;
    from_str(s.as_str()).context(ConfigReadErr {})
}

/// Like [`from_path`], but a config file that doesn't exist is not an error.
pub async fn from_path_or_default<P: AsRef<Path>>(path: P) -> Result<Config> {
    match from_path(path.as_ref()).await {
        Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.as_ref().display());
            Ok(Config::default())
        }
        result => result,
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    global: GlobalConfig,
    #[serde(default, rename = "case")]
    cases: Vec<CaseConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    input: String,
    strategy: Strategy,
    skip_early_ends: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            input: "test-input.txt".to_string(),
            strategy: Strategy::default(),
            skip_early_ends: true,
        }
    }
}

/// A query and the distance it should produce. A missing `expect` means no
/// pair should be found.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CaseConfig {
    pub start: String,
    pub end: String,
    pub expect: Option<usize>,
}

impl Config {
    /// Merge the file with the command line. Flags win; an input taken from the
    /// file is relative to the file's directory.
    pub fn resolve(&self, args: &Args) -> Result<ResolvedConfig<'_>> {
        let input = match &args.input {
            Some(input) => args.cwd().join(input),
            None => args.config_dir()?.join(self.global.input.as_str()),
        };

        Ok(ResolvedConfig {
            input,
            strategy: args.strategy.unwrap_or(self.global.strategy),
            skip_early_ends: self.global.skip_early_ends && !args.no_skip_early_ends,
            cases: self.cases.as_slice(),
        })
    }
}

pub struct ResolvedConfig<'a> {
    pub input: PathBuf,
    pub strategy: Strategy,
    pub skip_early_ends: bool,
    pub cases: &'a [CaseConfig],
}

impl ResolvedConfig<'_> {
    pub fn finder(&self) -> DistanceFinder {
        DistanceFinder::new(self.strategy).skip_early_ends(self.skip_early_ends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    const CONFIG: &str = r#"
[global]
input = "fixtures/test-input.txt"
strategy = "pruned"

[[case]]
start = "motivation"
end = "development"
expect = 2

[[case]]
start = "blah"
end = "bleh"
"#;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["wordgap", "--cwd", "/work"];
        argv.extend_from_slice(extra);
        argv.push("check");
        Args::parse_from(argv)
    }

    #[test]
    fn parses_globals_and_cases() {
        let config: Config = from_str(CONFIG).unwrap();

        assert_eq!(config.global.strategy, Strategy::Pruned);
        assert!(config.global.skip_early_ends);
        assert_eq!(
            config.cases.as_slice(),
            &[
                CaseConfig {
                    start: "motivation".to_string(),
                    end: "development".to_string(),
                    expect: Some(2),
                },
                CaseConfig {
                    start: "blah".to_string(),
                    end: "bleh".to_string(),
                    expect: None,
                },
            ]
        );
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = from_str("").unwrap();

        assert_eq!(config.global.input, "test-input.txt");
        assert_eq!(config.global.strategy, Strategy::Sweep);
        assert!(config.cases.is_empty());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let result = from_str::<Config>("[global]\nstrategy = \"fastest\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn flags_override_the_file() {
        let config: Config = from_str(CONFIG).unwrap();

        let resolved = config.resolve(&args(&[])).unwrap();
        assert_eq!(resolved.input, PathBuf::from("/work/fixtures/test-input.txt"));
        assert_eq!(resolved.strategy, Strategy::Pruned);
        assert!(resolved.skip_early_ends);
        assert_eq!(resolved.cases.len(), 2);

        let resolved = config
            .resolve(&args(&["-i", "other.txt", "-s", "naive", "--no-skip-early-ends"]))
            .unwrap();
        assert_eq!(resolved.input, PathBuf::from("/work/other.txt"));
        assert_eq!(resolved.strategy, Strategy::Naive);
        assert!(!resolved.skip_early_ends);
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_defaults() {
        let config = from_path_or_default("/does/not/exist/wordgap.toml")
            .await
            .unwrap();

        assert!(config.cases.is_empty());
    }
}
