use super::{load_config, reporter};
use crate::args::Args;
use crate::error::{CasesFailedErr, Result, SearchErr};
use crate::ui::{Message, Report, Summary};
use snafu::prelude::*;
use std::time::Instant;

/// Run every configured case against the input. Each case re-reads the input
/// from the start.
pub async fn check(args: &Args) -> Result<()> {
    let config = load_config(args).await?;
    let config = config.resolve(args)?;
    let finder = config.finder();
    let mut reporter = reporter(args);
    let mut summary = Summary::new(config.strategy, Instant::now());

    if config.cases.is_empty() {
        log::warn!("No cases configured in {}", args.config_path().display());
    }

    for case in config.cases {
        let distance = finder
            .shortest_distance_in_file(&config.input, &case.start, &case.end)
            .await
            .context(SearchErr)?;
        let report = Report::case(case, distance);

        summary.add(&report);
        reporter.on_message(Message::Report(report))?;
    }

    summary.mark_ended();
    let failed = summary.failures();
    let total = summary.total();
    reporter.on_message(Message::Finished(Some(summary)))?;

    ensure!(failed == 0, CasesFailedErr { failed, total });
    Ok(())
}
