use clap::Parser;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Well-known path of the agent card, relative to the base URL
pub const AGENT_CARD_PATH: &str = "agent.json";

/// Request timeout for the card fetch (fixed)
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Validate an A2A agent card served at `{url}/agent.json`
#[derive(Debug, Parser)]
#[command(name = "validate-agent-card", version)]
pub struct Cli {
    /// Base URL of the A2A server
    #[arg(long, env = "AGENT_CARD_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Verbose output (debug logs and recommended-field findings)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Settings for one validation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL with trailing slashes removed
    pub base_url: String,
    pub verbose: bool,
    pub timeout: Duration,
}

impl Config {
    pub fn new(base_url: &str, verbose: bool) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            verbose,
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Full URL of the agent card document
    pub fn card_url(&self) -> String {
        format!("{}/{}", self.base_url, AGENT_CARD_PATH)
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(&cli.url, cli.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_stripped() {
        let config = Config::new("http://example.com:9000///", false);
        assert_eq!(config.base_url, "http://example.com:9000");
        assert_eq!(config.card_url(), "http://example.com:9000/agent.json");
    }

    #[test]
    fn test_timeout_is_fixed() {
        assert_eq!(Config::new(DEFAULT_BASE_URL, true).timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["validate-agent-card", "--url", "https://agent.example/", "-v"])
            .unwrap();
        let config = Config::from(cli);

        assert!(config.verbose);
        assert_eq!(config.card_url(), "https://agent.example/agent.json");
    }

    #[test]
    fn test_cli_long_verbose() {
        let cli = Cli::try_parse_from(["validate-agent-card", "--url", DEFAULT_BASE_URL, "--verbose"])
            .unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["validate-agent-card", "--retries", "3"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
