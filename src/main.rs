//! `license-guess`: locate license files and identify the license they contain.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load policy config ([`load_config`]).
//! 3. For each target, locate the license file and classify it ([`scan::scan_path`]).
//! 4. Render the requested report ([`report`]).
//! 5. Exit `0` (clean) or `1` (at least one [`PolicyVerdict::Error`]).

mod cli;

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use cli::{Cli, ReportFormat};
use license_guess::config::load_config;
use license_guess::models::PolicyVerdict;
use license_guess::{report, scan};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("resolving current directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    let findings = if cli.stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading license text from stdin")?;
        vec![scan::scan_text(&config, "<stdin>", &text)]
    } else {
        cli.targets
            .iter()
            .map(|target| scan::scan_path(&config, target))
            .collect()
    };

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&findings, cli.verbose, cli.quiet)?,
        ReportFormat::Json => report::json::render(&findings)?,
    }

    let has_errors = findings.iter().any(|f| f.verdict == PolicyVerdict::Error);
    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}
