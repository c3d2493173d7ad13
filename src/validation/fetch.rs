use serde_json::Value;
use tracing::{debug, warn};

use crate::types::ValidatorError;

/// Fetch and parse the agent card at `card_url`.
///
/// Transport failures and non-2xx statuses map to [`ValidatorError::Network`],
/// a body that is not JSON maps to [`ValidatorError::Parse`].
pub async fn fetch_agent_card(
    client: &reqwest::Client,
    card_url: &str,
) -> Result<Value, ValidatorError> {
    debug!("Fetching agent card from {}", card_url);

    let response = client
        .get(card_url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            warn!("Request to {} failed: {}", card_url, e);
            ValidatorError::from(e)
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!("Agent card endpoint returned HTTP {}", status);
        return Err(ValidatorError::Network(format!(
            "HTTP {} for url ({})",
            status, card_url
        )));
    }

    let bytes = response.bytes().await?;
    let card: Value = serde_json::from_slice(&bytes)?;

    debug!("Fetched agent card ({} bytes)", bytes.len());

    Ok(card)
}
