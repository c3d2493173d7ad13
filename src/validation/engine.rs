use anyhow::Result;
use serde_json::Value;
use std::io::Write;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::types::{ValidationReport, ValidatorError};

use super::{checks, fetch, report};

/// Fetches one agent card and validates it. Built once per invocation.
pub struct CardValidator {
    config: Config,
    http_client: reqwest::Client,
}

impl CardValidator {
    pub fn new(config: Config) -> Result<Self, ValidatorError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub async fn fetch(&self) -> Result<Value, ValidatorError> {
        fetch::fetch_agent_card(&self.http_client, &self.config.card_url()).await
    }

    /// Fetch the card and run every check, without printing
    pub async fn validate(&self) -> Result<ValidationReport, ValidatorError> {
        let card = self.fetch().await?;
        Ok(checks::validate_card(card))
    }

    /// Validate and print the outcome to `out`. Returns true iff every check passed.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<bool> {
        report::write_header(out)?;

        let validation = match self.validate().await {
            Ok(validation) => validation,
            Err(e) => {
                warn!("Validation aborted: {}", e);
                report::write_fetch_failure(out, &e)?;
                return Ok(false);
            }
        };

        report::write_report(out, &validation, self.config.verbose)?;

        if let Ok(json) = serde_json::to_string(&validation.checks) {
            debug!("Check results: {}", json);
        }

        info!(
            "Validation of {} finished: {}/{} checks passed",
            self.config.card_url(),
            validation.passed(),
            validation.total()
        );

        Ok(validation.all_passed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn well_formed_card() -> Value {
        json!({
            "name": "OmniAgent",
            "description": "Multi-protocol AI agent",
            "version": "0.1.0",
            "url": "http://localhost:8080",
            "capabilities": {
                "streaming": false,
                "pushNotifications": false,
                "stateTransitionHistory": true
            },
            "skills": [{
                "id": "general_assistance",
                "name": "General Assistance",
                "description": "Helps with general questions",
                "tags": ["general", "chat"]
            }],
            "defaultInputModes": ["text/plain", "application/json"],
            "defaultOutputModes": ["text/plain", "application/json"]
        })
    }

    async fn serve(card: Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agent.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(card))
            .mount(&server)
            .await;
        server
    }

    async fn run_against(base_url: &str, verbose: bool) -> (bool, String) {
        let validator = CardValidator::new(Config::new(base_url, verbose)).unwrap();
        let mut out = Vec::new();
        let ok = validator.run(&mut out).await.unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_well_formed_card_passes() {
        let server = serve(well_formed_card()).await;

        let (ok, output) = run_against(&server.uri(), false).await;

        assert!(ok);
        assert!(output.contains("✅ All required fields present"));
        assert!(output.contains("✅ Capabilities structure valid"));
        assert!(output.contains("✅ Skills validation passed (1 skills)"));
        assert!(output.contains("✅ URL format valid: http://localhost:8080"));
        assert!(output.contains("✅ JSON schema validation passed"));
        assert!(output.contains("  - General Assistance: Helps with general questions"));
        assert!(output.contains("Validation Results: 5/5 tests passed"));
        assert!(output.contains("🎉 All validation tests passed!"));
        assert!(!output.contains("❌"));
    }

    #[tokio::test]
    async fn test_trailing_slash_on_base_url() {
        let server = serve(well_formed_card()).await;

        let (ok, _) = run_against(&format!("{}//", server.uri()), false).await;

        assert!(ok);
    }

    #[tokio::test]
    async fn test_unreachable_server_aborts_before_checks() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let (ok, output) = run_against(&format!("http://127.0.0.1:{}", port), false).await;

        assert!(!ok);
        assert!(output.contains("❌ Failed to fetch agent card:"));
        assert!(!output.contains("✅"));
        assert!(!output.contains("Agent Card Summary"));
        assert!(!output.contains("Validation Results"));
    }

    #[tokio::test]
    async fn test_invalid_json_aborts_before_checks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/agent.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"name\": "))
            .mount(&server)
            .await;

        let (ok, output) = run_against(&server.uri(), false).await;

        assert!(!ok);
        assert!(output.contains("❌ Invalid JSON in agent card:"));
        assert!(!output.contains("Validation Results"));
    }

    #[tokio::test]
    async fn test_missing_url_runs_every_check() {
        let mut card = well_formed_card();
        card.as_object_mut().unwrap().remove("url");
        let server = serve(card).await;

        let (ok, output) = run_against(&server.uri(), false).await;

        assert!(!ok);
        assert!(output.contains("❌ Missing required fields: url"));
        assert!(output.contains("✅ Capabilities structure valid"));
        assert!(output.contains("✅ Skills validation passed (1 skills)"));
        assert!(output.contains("❌ Invalid URL format: "));
        assert!(output.contains("❌ Missing field: url"));
        assert!(output.contains("URL: N/A"));
        assert!(output.contains("Validation Results: 2/5 tests passed"));
        assert!(output.contains("❌ Some validation tests failed"));
    }

    #[tokio::test]
    async fn test_verbose_shows_recommended_fields() {
        let server = serve(well_formed_card()).await;

        let (_, quiet) = run_against(&server.uri(), false).await;
        let (ok, verbose) = run_against(&server.uri(), true).await;

        assert!(ok);
        assert!(!quiet.contains("Recommended field"));
        assert!(verbose.contains("Recommended field 'documentationUrl' is missing"));
        assert!(verbose.contains("Validation Results: 5/5 tests passed"));
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let mut card = well_formed_card();
        card["version"] = json!(1.0);
        let server = serve(card).await;

        let first = run_against(&server.uri(), false).await;
        let second = run_against(&server.uri(), false).await;

        assert!(!first.0);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_validate_returns_structured_report() {
        let server = serve(well_formed_card()).await;
        let validator = CardValidator::new(Config::new(&server.uri(), false)).unwrap();

        let report = validator.validate().await.unwrap();

        assert!(report.all_passed());
        assert_eq!(report.card["name"], "OmniAgent");
        assert_eq!(report.advisories.len(), 2);
    }
}
