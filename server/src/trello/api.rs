//! Trello REST client.
//!
//! Thin HTTP wrapper for `POST /1/cards`. Pure parsing in `parse_card` and
//! `parse_error_message` for testability.

use std::fmt;
use std::time::Duration;

use client::net::types::TargetList;

use super::list_id;
use super::types::{CardBoard, CardId, TrelloError};
use crate::config::TrelloConfig;

// =============================================================================
// CLIENT
// =============================================================================

pub struct TrelloClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    token: String,
}

impl fmt::Debug for TrelloClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TrelloClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: TrelloConfig) -> Result<Self, TrelloError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| TrelloError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url, api_key: config.api_key, token: config.token })
    }

    fn cards_url(&self) -> String {
        format!("{}/1/cards", self.base_url)
    }
}

#[async_trait::async_trait]
impl CardBoard for TrelloClient {
    async fn create_card(&self, list: TargetList, name: &str, desc: &str) -> Result<CardId, TrelloError> {
        let body = CreateCardBody { id_list: list_id(list), name, desc };

        // Credentials ride in the query string; strip the URL from transport
        // errors before they reach a log line.
        let response = self
            .http
            .post(self.cards_url())
            .query(&[("key", self.api_key.as_str()), ("token", self.token.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| TrelloError::Request(e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TrelloError::Request(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(TrelloError::Rejected { status: status.as_u16(), message: parse_error_message(&text) });
        }

        parse_card(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCardBody<'a> {
    id_list: &'a str,
    name: &'a str,
    desc: &'a str,
}

#[derive(serde::Deserialize)]
struct CardResponse {
    id: String,
}

#[derive(serde::Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_card(json: &str) -> Result<CardId, TrelloError> {
    let card: CardResponse = serde_json::from_str(json).map_err(|e| TrelloError::Parse(e.to_string()))?;
    Ok(card.id)
}

fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.message)
        .filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
