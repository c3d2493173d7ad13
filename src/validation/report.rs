use serde_json::Value;
use std::io::{self, Write};

use crate::types::{CardExt, CheckResult, Issue, Severity, ValidationReport, ValidatorError};

/// Skills listed in the summary before truncating
const MAX_LISTED_SKILLS: usize = 5;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn severity_icon(severity: &Severity) -> &'static str {
    match severity {
        Severity::Error => "❌",
        Severity::Warning => "⚠️ ",
        Severity::Info => "ℹ️ ",
    }
}

fn write_issue<W: Write>(out: &mut W, issue: &Issue) -> io::Result<()> {
    writeln!(out, "{} {}", severity_icon(&issue.severity), issue.message)
}

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🔍 Validating Agent Card...")?;
    writeln!(out, "{}", rule())
}

pub fn write_fetch_failure<W: Write>(out: &mut W, err: &ValidatorError) -> io::Result<()> {
    writeln!(out, "❌ {}", err)
}

/// Diagnostics first, then the success line when the check passed.
///
/// Info-level findings are only shown when `verbose` is set.
pub fn write_check<W: Write>(out: &mut W, result: &CheckResult, verbose: bool) -> io::Result<()> {
    for issue in &result.issues {
        if issue.severity == Severity::Info && !verbose {
            continue;
        }
        write_issue(out, issue)?;
    }

    if result.passed {
        writeln!(out, "✅ {}", result.message)?;
    }

    Ok(())
}

pub fn write_advisories<W: Write>(out: &mut W, advisories: &[Issue]) -> io::Result<()> {
    for issue in advisories {
        write_issue(out, issue)?;
    }
    Ok(())
}

/// Render a card field for display: strings raw, other values as JSON, absent as `N/A`
fn display_field(value: &Value, field: &str) -> String {
    match value.get(field) {
        None => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn write_summary<W: Write>(out: &mut W, card: &Value) -> io::Result<()> {
    let empty = Value::Object(Default::default());
    let capabilities = card.get("capabilities").unwrap_or(&empty);
    let capabilities = serde_json::to_string_pretty(capabilities).map_err(io::Error::from)?;
    let skills = card.skills();

    writeln!(out)?;
    writeln!(out, "📋 Agent Card Summary:")?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "Name: {}", display_field(card, "name"))?;
    writeln!(out, "Description: {}", display_field(card, "description"))?;
    writeln!(out, "Version: {}", display_field(card, "version"))?;
    writeln!(out, "URL: {}", display_field(card, "url"))?;
    writeln!(out, "Skills: {}", skills.len())?;
    writeln!(out, "Capabilities: {}", capabilities)?;

    if !skills.is_empty() {
        writeln!(out)?;
        writeln!(out, "Skills:")?;
        for skill in skills.iter().take(MAX_LISTED_SKILLS) {
            writeln!(
                out,
                "  - {}: {}",
                display_field(skill, "name"),
                display_field(skill, "description")
            )?;
        }
        if skills.len() > MAX_LISTED_SKILLS {
            writeln!(out, "  ... and {} more", skills.len() - MAX_LISTED_SKILLS)?;
        }
    }

    Ok(())
}

pub fn write_tally<W: Write>(out: &mut W, report: &ValidationReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(
        out,
        "Validation Results: {}/{} tests passed",
        report.passed(),
        report.total()
    )?;

    if report.all_passed() {
        writeln!(out, "🎉 All validation tests passed!")
    } else {
        writeln!(out, "❌ Some validation tests failed")
    }
}

/// Render a full report: every check, the card summary and the tally
pub fn write_report<W: Write>(
    out: &mut W,
    report: &ValidationReport,
    verbose: bool,
) -> io::Result<()> {
    for result in &report.checks {
        write_check(out, result, verbose)?;
    }
    if verbose {
        write_advisories(out, &report.advisories)?;
    }

    write_summary(out, &report.card)?;
    write_tally(out, report)
}
