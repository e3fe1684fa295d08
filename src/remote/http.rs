//! HTTP implementation of the ticket feed.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::{BoardSnapshot, DEFAULT_ENDPOINT, TicketSource};
use crate::error::{PlankError, Result};

/// Fetches the board snapshot with a plain GET, no auth.
///
/// Deliberately no client timeout, retry, or cancellation: an unresponsive
/// endpoint leaves the board in its initial empty state.
#[derive(Debug)]
pub struct HttpTicketSource {
    client: Client,
    endpoint: Url,
}

impl HttpTicketSource {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).map_err(|_| PlankError::InvalidUrl(endpoint.to_string()))?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TicketSource for HttpTicketSource {
    async fn load(&self) -> Result<BoardSnapshot> {
        debug!("fetching board snapshot from {}", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;
        let snapshot: BoardSnapshot = response.json().await?;
        debug!(
            tickets = snapshot.tickets.len(),
            users = snapshot.users.len(),
            "snapshot decoded"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_parses() {
        let source = HttpTicketSource::new().unwrap();
        assert_eq!(source.endpoint().as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let err = HttpTicketSource::with_endpoint("not a url").unwrap_err();
        assert!(matches!(err, PlankError::InvalidUrl(_)));
    }
}
