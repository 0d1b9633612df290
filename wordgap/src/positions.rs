use word_stream::{fold, Token};

/// Where the start and end words occur, each list in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Positions {
    pub starts: Vec<usize>,
    pub ends: Vec<usize>,
}

pub struct Recorder {
    start: String,
    end: String,
    skip_early_ends: bool,
    positions: Positions,
}

impl Recorder {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: fold(start),
            end: fold(end),
            skip_early_ends: false,
            positions: Positions::default(),
        }
    }

    /// Don't record end words that come before the first start word. They can
    /// never be the later half of a pair.
    pub fn skip_early_ends(mut self, skip: bool) -> Self {
        self.skip_early_ends = skip;
        self
    }

    pub fn is_searchable(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }

    pub fn record(&mut self, token: &Token) {
        let Positions { starts, ends } = &mut self.positions;

        // Start goes first so a repeated word can close a pair with itself
        if token.word == self.start {
            starts.push(token.index);
        }

        if token.word == self.end && !(self.skip_early_ends && starts.is_empty()) {
            ends.push(token.index);
        }
    }

    pub fn finish(self) -> Positions {
        log::debug!(
            "Recorded {} '{}' and {} '{}'",
            self.positions.starts.len(),
            self.start,
            self.positions.ends.len(),
            self.end
        );

        self.positions
    }
}

pub fn record<I>(tokens: I, start: &str, end: &str, skip_early_ends: bool) -> Positions
where
    I: IntoIterator<Item = Token>,
{
    let mut recorder = Recorder::new(start, end).skip_early_ends(skip_early_ends);
    tokens
        .into_iter()
        .for_each(|token| recorder.record(&token));
    recorder.finish()
}
