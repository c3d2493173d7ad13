use serde_json::Value;
use tracing::debug;

use crate::types::{
    kind_name, CardExt, Check, CheckResult, Issue, ValidationReport, RECOMMENDED_FIELDS,
    REQUIRED_CAPABILITIES, REQUIRED_FIELDS, REQUIRED_SKILL_FIELDS,
};

/// Run all checks in order, then collect advisories.
///
/// Every check runs regardless of earlier failures.
pub fn validate_card(card: Value) -> ValidationReport {
    let checks: Vec<CheckResult> = Check::ALL
        .iter()
        .map(|check| {
            let result = run_check(*check, &card);
            debug!(
                "Check {} {} ({} issues)",
                check,
                if result.passed { "passed" } else { "failed" },
                result.issues.len()
            );
            result
        })
        .collect();

    let advisories = check_recommended_fields(&card);

    ValidationReport {
        card,
        checks,
        advisories,
    }
}

pub fn run_check(check: Check, card: &Value) -> CheckResult {
    match check {
        Check::RequiredFields => check_required_fields(card),
        Check::Capabilities => check_capabilities(card),
        Check::Skills => check_skills(card),
        Check::UrlFormat => check_url_format(card),
        Check::Schema => check_schema(card),
    }
}

/// Required fields absent from the card, in table order
pub fn missing_required_fields(card: &Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .filter(|(field, _)| !card.has_field(field))
        .map(|(field, _)| *field)
        .collect()
}

pub fn check_required_fields(card: &Value) -> CheckResult {
    let missing = missing_required_fields(card);

    let mut issues = vec![];
    if !missing.is_empty() {
        issues.push(Issue::error(
            "MISSING_REQUIRED_FIELDS",
            format!("Missing required fields: {}", missing.join(", ")),
        ));
    }

    CheckResult::from_issues(Check::RequiredFields, "All required fields present", issues)
}

pub fn check_capabilities(card: &Value) -> CheckResult {
    let mut issues = vec![];

    match card.get("capabilities") {
        Some(Value::Object(capabilities)) => {
            for cap in REQUIRED_CAPABILITIES {
                if !capabilities.contains_key(*cap) {
                    issues.push(Issue::error(
                        "MISSING_CAPABILITY",
                        format!("Missing capability: {}", cap),
                    ));
                }
            }
        }
        Some(other) => issues.push(Issue::error(
            "INVALID_CAPABILITIES",
            format!("Capabilities should be an object, got {}", kind_name(other)),
        )),
        None => {
            for cap in REQUIRED_CAPABILITIES {
                issues.push(Issue::error(
                    "MISSING_CAPABILITY",
                    format!("Missing capability: {}", cap),
                ));
            }
        }
    }

    CheckResult::from_issues(Check::Capabilities, "Capabilities structure valid", issues)
}

pub fn check_skills(card: &Value) -> CheckResult {
    // An absent `skills` is reported by the field checks; here it reads as empty.
    let empty = Vec::new();
    let skills = match card.get("skills") {
        None => &empty,
        Some(Value::Array(skills)) => skills,
        Some(other) => {
            return CheckResult::from_issues(
                Check::Skills,
                "Skills validation passed",
                vec![Issue::error(
                    "SKILLS_NOT_ARRAY",
                    format!("Skills should be an array, got {}", kind_name(other)),
                )],
            );
        }
    };

    let mut issues = vec![];
    if skills.is_empty() {
        issues.push(Issue::warning("EMPTY_SKILLS", "Skills array is empty"));
    }

    for (i, skill) in skills.iter().enumerate() {
        let Some(skill) = skill.as_object() else {
            issues.push(Issue::error(
                "SKILL_NOT_OBJECT",
                format!("Skill {} is not an object", i),
            ));
            continue;
        };

        for field in REQUIRED_SKILL_FIELDS {
            if !skill.contains_key(*field) {
                issues.push(Issue::error(
                    "SKILL_MISSING_FIELD",
                    format!("Skill {} missing field: {}", i, field),
                ));
            }
        }
    }

    CheckResult::from_issues(
        Check::Skills,
        format!("Skills validation passed ({} skills)", skills.len()),
        issues,
    )
}

pub fn check_url_format(card: &Value) -> CheckResult {
    let url = match card.get("url") {
        None => "",
        Some(Value::String(s)) => s.as_str(),
        Some(other) => {
            return CheckResult::from_issues(
                Check::UrlFormat,
                "URL format valid",
                vec![Issue::error(
                    "INVALID_URL_FORMAT",
                    format!("Invalid URL format: {} ({})", other, kind_name(other)),
                )],
            );
        }
    };

    let mut issues = vec![];
    if !url.starts_with("http") {
        issues.push(Issue::error(
            "INVALID_URL_FORMAT",
            format!("Invalid URL format: {}", url),
        ));
    } else if let Err(e) = url::Url::parse(url) {
        issues.push(Issue::warning(
            "URL_NOT_ABSOLUTE",
            format!("URL does not parse as an absolute URL ({}): {}", e, url),
        ));
    }

    CheckResult::from_issues(Check::UrlFormat, format!("URL format valid: {}", url), issues)
}

pub fn check_schema(card: &Value) -> CheckResult {
    let mut issues = vec![];

    for (field, expected) in REQUIRED_FIELDS {
        match card.get(*field) {
            None => issues.push(Issue::error(
                "MISSING_FIELD",
                format!("Missing field: {}", field),
            )),
            Some(actual) if !expected.matches(actual) => issues.push(Issue::error(
                "TYPE_MISMATCH",
                format!(
                    "Field {} should be {}, got {}",
                    field,
                    expected.as_str(),
                    kind_name(actual)
                ),
            )),
            Some(_) => {}
        }
    }

    CheckResult::from_issues(Check::Schema, "JSON schema validation passed", issues)
}

/// Informational findings for absent optional fields
pub fn check_recommended_fields(card: &Value) -> Vec<Issue> {
    RECOMMENDED_FIELDS
        .iter()
        .filter(|field| !card.has_field(field))
        .map(|field| {
            Issue::info(
                &format!("MISSING_{}", field.to_uppercase()),
                format!("Recommended field '{}' is missing", field),
            )
        })
        .collect()
}
