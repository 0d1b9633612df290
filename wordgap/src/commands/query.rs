use super::{load_config, reporter};
use crate::args::Args;
use crate::error::{Result, SearchErr};
use snafu::ResultExt;
use crate::ui::{Message, Report, Summary};
use std::time::Instant;

/// Print the distance between `start` and a later `end` in the input.
pub async fn query(args: &Args, start: &str, end: &str) -> Result<()> {
    let config = load_config(args).await?;
    let config = config.resolve(args)?;
    let mut reporter = reporter(args);
    let mut summary = Summary::new(config.strategy, Instant::now());

    let distance = config
        .finder()
        .shortest_distance_in_file(&config.input, start, end)
        .await
        .context(SearchErr)?;

    let report = Report::query(start, end, distance);
    summary.add(&report);
    reporter.on_message(Message::Report(report))?;

    summary.mark_ended();
    reporter.on_message(Message::Finished(Some(summary)))
}
