//! fbrowse: a line-oriented file browser shell.
//!
//! Reads commands from stdin, drives `fbrowse-core` through its command
//! table and prints the resulting listings and messages.

mod app;
mod background;
mod render;

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use fbrowse_core::{Config, Session};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::{App, Outcome};

/// Browse, search and manage files from a line shell
#[derive(Parser, Debug)]
#[command(name = "fbrowse", version, about, long_about = None)]
struct Args {
    /// Directory to start in (default: config start_dir, then the working directory)
    start_dir: Option<PathBuf>,

    /// Path to config file (default: ~/.config/fbrowse/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the log (default: fbrowse.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level instead of info
    #[arg(short, long)]
    verbose: bool,

    /// Run paste on a background task and print progress
    #[arg(long)]
    background_paste: bool,
}

fn default_config_path() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".config")
        .join("fbrowse")
        .join("config.toml")
}

/// Logs go to a file so they never interleave with the shell's output.
fn init_logging(path: PathBuf, verbose: bool) -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("fbrowse.log"));
    init_logging(log_file, args.verbose)?;

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config = Config::load_or_default(Some(&config_path))
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    let start_dir = match args.start_dir.clone().or_else(|| config.general.start_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to get current directory")?,
    };
    let session = Session::new(config, start_dir)?;
    tracing::info!("starting in {}", session.current_dir().display());
    let mut app = App::new(session, args.background_paste);

    print_lines(&app.startup());
    run(&mut app).await
}

async fn run(app: &mut App) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", app.prompt());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match app.handle_line(&line) {
            Outcome::Print(output) => print_lines(&output),
            Outcome::Paste { job, target } => {
                match background::run_paste(job, target, |l| println!("{l}")).await {
                    Ok(report) => print_lines(&app.finish_paste(report)),
                    Err(e) => println!("error: paste: {e}"),
                }
            }
            Outcome::Quit => break,
        }
    }

    tracing::info!("fbrowse exiting");
    Ok(())
}
