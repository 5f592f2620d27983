use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

mod activity;
use activity::display_activity;

mod config;
use config::Opts;

mod github;
use github::{Event, FetchError, GitHubClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_max_level(opts.log_level())
        .with_writer(io::stderr)
        .init();

    match run(opts).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(opts: Opts) -> anyhow::Result<ExitCode> {
    let username = match opts.username() {
        Some(username) => username,
        None => {
            println!("Please provide a github username.");
            return Ok(ExitCode::FAILURE);
        }
    };

    if !opts.ignored.is_empty() {
        debug!("ignoring extra arguments: {:?}", opts.ignored);
    }

    let events = match fetch_activity(&opts, username).await {
        Ok(events) => events,
        Err(e) => {
            debug!("fetch failed: {:?}", e);
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    display_activity(&events, &mut out).context("couldn't write activity to stdout")?;
    out.flush().context("couldn't flush stdout")?;

    Ok(ExitCode::SUCCESS)
}

async fn fetch_activity(opts: &Opts, username: &str) -> Result<Vec<Event>, FetchError> {
    let client = GitHubClient::new(opts.api_url.clone())?;
    client.user_events(username).await
}
