use crate::config::CaseConfig;
use crate::error::{Result, SerializeErr};
use crate::search::Strategy;
use nu_ansi_term::Color::{Blue, Green, Red, Yellow};
use serde::Serialize;
use snafu::prelude::*;
use std::time::{Duration, Instant};
use word_stream::Token;

#[derive(Serialize)]
pub struct Summary {
    strategy: Strategy,
    total_passes: usize,
    total_fails: usize,
    #[serde(skip_serializing)]
    start_time: Instant,
    #[serde(skip_serializing)]
    end_time: Option<Instant>,
}

impl Summary {
    pub fn new(strategy: Strategy, start_time: Instant) -> Self {
        Self {
            strategy,
            total_passes: 0,
            total_fails: 0,
            start_time,
            end_time: None,
        }
    }

    pub fn add(&mut self, report: &Report) {
        match report.expected {
            Some(_) if report.ok() => self.total_passes += 1,
            Some(_) => self.total_fails += 1,
            None => {}
        }
    }

    pub fn mark_ended(&mut self) {
        self.end_time = Some(Instant::now());
    }

    pub fn total(&self) -> usize {
        self.total_passes + self.total_fails
    }

    pub fn failures(&self) -> usize {
        self.total_fails
    }
}

/// The outcome of one query. `expected` is set when the query came from a
/// configured case.
#[derive(Debug, Serialize)]
pub struct Report {
    pub start: String,
    pub end: String,
    pub distance: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Option<usize>>,
}

impl Report {
    pub fn query<S: Into<String>>(start: S, end: S, distance: Option<usize>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            distance,
            expected: None,
        }
    }

    pub fn case(case: &CaseConfig, distance: Option<usize>) -> Self {
        Self {
            start: case.start.clone(),
            end: case.end.clone(),
            distance,
            expected: Some(case.expect),
        }
    }

    pub fn ok(&self) -> bool {
        self.expected.map_or(true, |expected| expected == self.distance)
    }
}

/// `Finished` carries a summary only when a search ran.
pub enum Message {
    Finished(Option<Summary>),
    Report(Report),
    Token(Token),
}

pub trait Reporter {
    fn on_message(&mut self, message: Message) -> Result<()>;
}

pub struct AnsiReporter;

impl Reporter for AnsiReporter {
    fn on_message(&mut self, message: Message) -> Result<()> {
        match message {
            Message::Report(report) => print_report(&report),
            Message::Token(token) => println!("{:>6}  {}", token.index, token.word),
            Message::Finished(Some(summary)) if summary.total() > 0 => {
                println!();
                print_summary(&summary);
            }
            Message::Finished(_) => {}
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonToken<'a> {
    index: usize,
    word: &'a str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    reports: &'a [Report],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tokens: Vec<JsonToken<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a Summary>,
}

#[derive(Default)]
pub struct JsonReporter {
    reports: Vec<Report>,
    tokens: Vec<Token>,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn render(&self, summary: Option<&Summary>) -> Result<String> {
        let report = JsonReport {
            reports: &self.reports,
            tokens: self
                .tokens
                .iter()
                .map(|t| JsonToken {
                    index: t.index,
                    word: t.word.as_str(),
                })
                .collect(),
            summary,
        };

        serde_json::to_string(&report).context(SerializeErr {})
    }
}

impl Reporter for JsonReporter {
    fn on_message(&mut self, message: Message) -> Result<()> {
        match message {
            Message::Report(report) => self.reports.push(report),
            Message::Token(token) => self.tokens.push(token),
            Message::Finished(summary) => {
                let serialized = self.render(summary.as_ref())?;
                println!("{serialized}");
            }
        }

        Ok(())
    }
}

fn format_distance(distance: Option<usize>) -> String {
    match distance {
        Some(d) => d.to_string(),
        None => "none".to_string(),
    }
}

fn query_text(report: &Report) -> String {
    format!("{} → {}", report.start, report.end)
}

fn passed_line(report: &Report) -> String {
    format!("✓ {}: {}", query_text(report), format_distance(report.distance))
}

fn print_report(report: &Report) {
    let query = query_text(report);

    match report.expected {
        None => match report.distance {
            Some(distance) => println!("{}: {}", query, Green.paint(distance.to_string())),
            None => println!("{}: {}", query, Yellow.paint("none")),
        },
        Some(_) if report.ok() => {
            println!("{}", Green.paint(passed_line(report)));
        }
        Some(expected) => {
            println!("{}", Red.paint(format!("❌ {}", query)));
            println!("   ├─ expected {}", format_distance(expected));
            println!("   └─ found {}", format_distance(report.distance));
        }
    }
}

fn print_summary(summary: &Summary) {
    let end_time = summary.end_time.unwrap_or_else(Instant::now);
    let duration = format_duration(&end_time.duration_since(summary.start_time));

    println!("Passed   Failed");
    println!(
        "{}   {}",
        Green.paint(format!("{:6}", summary.total_passes)),
        Red.paint(format!("{:6}", summary.total_fails)),
    );
    println!();
    println!(
        "Checked {} cases with {:?} in {}",
        summary.total(),
        summary.strategy,
        Blue.paint(duration)
    );
}

fn format_duration(duration: &Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        let millis = duration.as_millis();
        format!("{}.{:03}s", millis / 1000, millis % 1000)
    }
}
