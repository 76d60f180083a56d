use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Finding, FindingStatus, PolicyVerdict};

/// Render a colored terminal report.
pub fn render(findings: &[Finding], verbose: bool, quiet: bool) -> Result<()> {
    let total = findings.len();
    let pass_count = count(findings, PolicyVerdict::Pass);
    let warn_count = count(findings, PolicyVerdict::Warn);
    let error_count = count(findings, PolicyVerdict::Error);

    if quiet {
        println!(
            "Total: {}  Pass: {}  Warn: {}  Error: {}",
            total,
            pass_count.to_string().green(),
            warn_count.to_string().yellow(),
            error_count.to_string().red(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}\n",
        "license-guess".bold(),
        env!("CARGO_PKG_VERSION")
    );

    println!("{}\n", summary_table(findings));

    if error_count > 0 {
        println!(" {} Targets requiring attention:\n", "[ERROR]".red().bold());
        render_table(findings, PolicyVerdict::Error);
        println!();
    }

    if warn_count > 0 {
        println!(" {} Targets with warnings:\n", "[WARN]".yellow().bold());
        render_table(findings, PolicyVerdict::Warn);
        println!();
    }

    if verbose && pass_count > 0 {
        println!(" {} All passing targets:\n", "[PASS]".green().bold());
        render_table(findings, PolicyVerdict::Pass);
        println!();
    }

    Ok(())
}

/// Totals per verdict with the most common licenses in each.
fn summary_table(findings: &[Finding]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("SUMMARY").add_attribute(Attribute::Bold),
            Cell::new(findings.len()).set_alignment(CellAlignment::Right),
            Cell::new("Licenses"),
        ]);

    for (verdict, label, color) in [
        (PolicyVerdict::Pass, "✓ Pass", Color::Green),
        (PolicyVerdict::Warn, "⚠ Warn", Color::Yellow),
        (PolicyVerdict::Error, "✗ Error", Color::Red),
    ] {
        table.add_row(vec![
            Cell::new(label).fg(color),
            Cell::new(count(findings, verdict)).set_alignment(CellAlignment::Right),
            Cell::new(summarize_licenses(findings, verdict)),
        ]);
    }

    table
}

fn count(findings: &[Finding], verdict: PolicyVerdict) -> usize {
    findings.iter().filter(|f| f.verdict == verdict).count()
}

fn render_table(findings: &[Finding], verdict_filter: PolicyVerdict) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Target").add_attribute(Attribute::Bold),
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Verdict").add_attribute(Attribute::Bold),
        ]);

    for finding in findings.iter().filter(|f| f.verdict == verdict_filter) {
        let file = finding
            .file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "-".to_string());

        let (verdict_str, verdict_color) = match finding.verdict {
            PolicyVerdict::Pass => ("✓ pass", Color::Green),
            PolicyVerdict::Warn => ("⚠ warn", Color::Yellow),
            PolicyVerdict::Error => ("✗ error", Color::Red),
        };

        let status = match &finding.error {
            Some(message)
                if matches!(
                    finding.status,
                    FindingStatus::IoError | FindingStatus::MultipleLicenses
                ) =>
            {
                message.clone()
            }
            _ => finding.status.to_string(),
        };

        let license_color = if finding.recognized {
            Color::Green
        } else {
            Color::DarkGrey
        };

        table.add_row(vec![
            Cell::new(&finding.target),
            Cell::new(file),
            Cell::new(&finding.license).fg(license_color),
            Cell::new(status),
            Cell::new(verdict_str)
                .fg(verdict_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

/// Up to three most frequent licenses among findings with `verdict`, e.g. `[MIT (4), ISC (1)]`.
fn summarize_licenses(findings: &[Finding], verdict: PolicyVerdict) -> String {
    let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for finding in findings.iter().filter(|f| f.verdict == verdict) {
        *counts.entry(finding.license.as_str()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let summary: Vec<String> = pairs
        .iter()
        .take(3)
        .map(|(lic, cnt)| format!("{} ({})", lic, cnt))
        .collect();

    if summary.is_empty() {
        String::new()
    } else {
        format!("[{}]", summary.join(", "))
    }
}
