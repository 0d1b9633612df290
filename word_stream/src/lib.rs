use caseless::default_case_fold_str;
use futures::{stream, Stream, StreamExt, TryStreamExt};
use std::{io, io::Result, path::Path};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;

/// A folded word and its position in the document.
///
/// `index` counts every whitespace-delimited chunk, including chunks made up
/// only of punctuation. Those never become tokens themselves, but they still
/// take up a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub index: usize,
    pub word: String,
}

/// Strip surrounding punctuation from a chunk and apply Unicode default case
/// folding, so `STRASSE` and `straße` fold to the same word.
pub fn fold(chunk: &str) -> String {
    default_case_fold_str(chunk.trim_matches(|c: char| !c.is_alphanumeric()))
}

fn words(line: &str) -> Vec<String> {
    line.split_whitespace().map(fold).collect()
}

fn token((index, word): (usize, String)) -> Option<Token> {
    if word.is_empty() {
        None
    } else {
        Some(Token { index, word })
    }
}

/// Lazily tokenize lines that are already in memory.
pub fn tokenize<I, S>(lines: I) -> impl Iterator<Item = Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .flat_map(|line| words(line.as_ref()))
        .enumerate()
        .filter_map(token)
}

/// Tokenize a reader one line at a time.
pub fn tokens<R: AsyncBufRead>(reader: R) -> impl Stream<Item = Result<Token>> {
    LinesStream::new(reader.lines())
        .map_ok(|line| stream::iter(words(&line).into_iter().map(Ok::<_, io::Error>)))
        .try_flatten()
        .enumerate()
        .filter_map(|(index, word)| async move { word.map(|word| token((index, word))).transpose() })
}

pub async fn open<P: AsRef<Path>>(path: P) -> Result<impl Stream<Item = Result<Token>>> {
    let file = File::open(path).await?;
    Ok(tokens(BufReader::new(file)))
}
