use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tally::calculator::copy_to_clipboard;
use tally::repl::{Session, run_session};
use tally::{CalcResult, Config, Evaluator, ZeroDivision};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Four-operator calculator", long_about = None)]
struct Cli {
    /// Formulas to evaluate. Starts an interactive session when omitted.
    expressions: Vec<String>,

    /// Configuration file to use instead of the default location.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What a division by zero evaluates to.
    #[arg(long, value_enum)]
    zero_division: Option<ZeroDivision>,

    /// Print each result as a JSON line.
    #[arg(long)]
    json: bool,

    /// Copy the last successful result to the clipboard.
    #[arg(long)]
    copy: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(zero_division) = cli.zero_division {
        config.zero_division = zero_division;
    }
    info!(?config, "configuration loaded");

    if cli.expressions.is_empty() {
        let mut session = Session::new(&config);
        run_session(&mut session, io::stdin().lock(), io::stdout().lock())
            .context("Interactive session failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    evaluate_all(&cli, &config)
}

fn evaluate_all(cli: &Cli, config: &Config) -> Result<ExitCode> {
    let evaluator = Evaluator::new(config.zero_division);
    let mut stdout = io::stdout().lock();
    let mut failed = false;
    let mut last_success = None;

    for expression in &cli.expressions {
        let outcome = evaluator.evaluate_expression(expression);
        let result = CalcResult::from_evaluation(expression, outcome, &config.display);

        if cli.json {
            serde_json::to_writer(&mut stdout, &result).context("Failed to write result")?;
            writeln!(stdout)?;
        } else if result.is_success() {
            writeln!(stdout, "{}", result.display())?;
        } else {
            writeln!(stdout, "error: {}", result.display())?;
        }

        match result.clipboard() {
            Some(clipboard) => last_success = Some(clipboard.to_string()),
            None => failed = true,
        }
    }

    if cli.copy {
        match last_success {
            Some(text) => copy_to_clipboard(&text).context("Failed to copy result")?,
            None => anyhow::bail!("No successful result to copy"),
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
