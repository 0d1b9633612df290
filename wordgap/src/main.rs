mod args;
mod commands;
mod config;
mod error;
mod ui;

use args::{Args, Command};
use clap::Parser;
use commands::{check, query, tokens};
use std::process::exit;
use wordgap::{finder, search};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let result = match &args.command {
        Command::Query { start, end } => query(&args, start, end).await,
        Command::Check => check(&args).await,
        Command::Tokens => tokens(&args).await,
    };

    if let Err(err) = result {
        eprintln!("{err}");
        exit(1);
    }
}
