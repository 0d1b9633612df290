use crate::positions::Recorder;
use crate::search::Strategy;
use futures::TryStreamExt;
use snafu::ResultExt;
use std::path::Path;
use word_stream::{open, tokenize};

mod error;

pub use error::{Error, Result};
use error::IoErr;

/// Finds the fewest words between a start word and a later end word.
#[derive(Clone, Copy, Debug)]
pub struct DistanceFinder {
    strategy: Strategy,
    skip_early_ends: bool,
}

impl Default for DistanceFinder {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl DistanceFinder {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            skip_early_ends: true,
        }
    }

    pub fn skip_early_ends(mut self, skip: bool) -> Self {
        self.skip_early_ends = skip;
        self
    }

    fn recorder(&self, start: &str, end: &str) -> Option<Recorder> {
        let recorder = Recorder::new(start, end).skip_early_ends(self.skip_early_ends);

        if recorder.is_searchable() {
            Some(recorder)
        } else {
            log::warn!("'{start}' or '{end}' has no letters or digits, nothing can match it");
            None
        }
    }

    pub fn shortest_distance<I, S>(&self, lines: I, start: &str, end: &str) -> Option<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut recorder = self.recorder(start, end)?;
        tokenize(lines).for_each(|token| recorder.record(&token));

        self.strategy.search(&recorder.finish())
    }

    /// Streams the file instead of reading it whole. A missing or unreadable
    /// file is an error; finding nothing is not.
    pub async fn shortest_distance_in_file<P: AsRef<Path>>(
        &self,
        path: P,
        start: &str,
        end: &str,
    ) -> Result<Option<usize>> {
        let path = path.as_ref();
        let Some(mut recorder) = self.recorder(start, end) else {
            return Ok(None);
        };

        log::debug!("Searching {} with {:?}", path.display(), self.strategy);

        let mut tokens = Box::pin(open(path).await.context(IoErr { path })?);
        while let Some(token) = tokens.try_next().await.context(IoErr { path })? {
            recorder.record(&token);
        }

        Ok(self.strategy.search(&recorder.finish()))
    }
}

/// Fewest words between `start` and a later `end` in `lines`, or `None` when
/// no such pair exists.
pub fn shortest_distance<I, S>(lines: I, start: &str, end: &str) -> Option<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DistanceFinder::default().shortest_distance(lines, start, end)
}
