use super::{load_config, reporter};
use crate::args::Args;
use crate::error::{IoErr, Result};
use crate::ui::Message;
use futures::TryStreamExt;
use snafu::ResultExt;
use word_stream::open;

/// Dump every token of the input with its index.
pub async fn tokens(args: &Args) -> Result<()> {
    let config = load_config(args).await?;
    let config = config.resolve(args)?;
    let path = config.input.as_path();
    let mut reporter = reporter(args);

    let mut tokens = Box::pin(open(path).await.context(IoErr { path })?);
    while let Some(token) = tokens.try_next().await.context(IoErr { path })? {
        reporter.on_message(Message::Token(token))?;
    }

    reporter.on_message(Message::Finished(None))
}
