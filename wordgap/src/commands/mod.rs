mod check;
mod query;
mod tokens;

pub use check::check;
pub use query::query;
pub use tokens::tokens;

use crate::args::{Args, Reporter as ReporterKind};
use crate::config::{self, Config};
use crate::error::Result;
use crate::ui::{AnsiReporter, JsonReporter, Reporter};

async fn load_config(args: &Args) -> Result<Config> {
    config::from_path_or_default(args.config_path()).await
}

fn reporter(args: &Args) -> Box<dyn Reporter> {
    match args.reporter {
        ReporterKind::Ansi => Box::new(AnsiReporter),
        ReporterKind::Json => Box::new(JsonReporter::new()),
    }
}
