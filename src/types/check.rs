use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The five checks, in execution order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    RequiredFields,
    Capabilities,
    Skills,
    UrlFormat,
    Schema,
}

impl Check {
    pub const ALL: [Check; 5] = [
        Check::RequiredFields,
        Check::Capabilities,
        Check::Skills,
        Check::UrlFormat,
        Check::Schema,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Check::RequiredFields => "required_fields",
            Check::Capabilities => "capabilities",
            Check::Skills => "skills",
            Check::UrlFormat => "url_format",
            Check::Schema => "schema",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

impl Issue {
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn info(code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Outcome of one check: pass flag, success line and structured diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: Check,
    pub passed: bool,
    pub message: String,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl CheckResult {
    /// Build a result whose pass flag follows from the absence of errors
    pub fn from_issues(check: Check, message: impl Into<String>, issues: Vec<Issue>) -> Self {
        let passed = !issues.iter().any(|i| i.severity == Severity::Error);
        Self {
            check,
            passed,
            message: message.into(),
            issues,
        }
    }
}

/// Results of one validation run over a fetched card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub card: Value,
    pub checks: Vec<CheckResult>,
    /// Informational findings that never affect the tally
    #[serde(default)]
    pub advisories: Vec<Issue>,
}

impl ValidationReport {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn total(&self) -> usize {
        self.checks.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}
