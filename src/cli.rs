use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-guess",
    about = "Find a project's license file and identify the license it contains",
    long_about = "Find a project's license file and identify the license it contains.\n\n\
        Licenses are identified by fixed phrases only. The pass/warn/error verdict \
        is a label you assign per license identifier in the policy file; no license \
        compatibility or legal judgement is made.",
    version
)]
pub struct Cli {
    /// Project directories or license files to identify
    #[arg(default_value = ".")]
    pub targets: Vec<PathBuf>,

    /// Identify license text read from standard input instead of targets
    #[arg(long)]
    pub stdin: bool,

    /// Policy config file mapping license identifiers to pass/warn/error labels; no
    /// compatibility check is made [default: ./.license-guess/config.toml, fallback
    /// ~/.config/license-guess/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show all targets (not just warnings/errors)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
