//! Open Trivia DB client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::TriviaQuestion;

use super::QuizConfig;

const OPENTDB_URL: &str = "https://opentdb.com/api.php";
const FETCH_TIMEOUT: Duration = Duration::from_secs(8);

/// `response_code` the API sends when the lookup produced questions.
const RESPONSE_CODE_SUCCESS: u8 = 0;

/// Why a fetch produced no usable questions. Callers collapse every
/// variant into the fallback path; the distinction only reaches the log.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api answered with response code {0}")]
    ResponseCode(u8),

    #[error("api returned an empty result list")]
    NoResults,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<ApiQuestion>,
}

#[derive(Debug, Deserialize)]
struct ApiQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    difficulty: String,
}

impl ApiQuestion {
    fn into_question(self) -> TriviaQuestion {
        TriviaQuestion {
            text: decode_entities(&self.question),
            correct_answer: decode_entities(&self.correct_answer),
            incorrect_answers: self
                .incorrect_answers
                .iter()
                .map(|answer| decode_entities(answer))
                .collect(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// HTTP client for the trivia endpoint. The base URL is configurable so
/// tests can point it at a local mock server.
pub struct TriviaApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl TriviaApi {
    pub fn new() -> Self {
        Self::with_base_url(OPENTDB_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: FETCH_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// One GET against the trivia endpoint. Success requires an ok HTTP
    /// status, the success response code, and at least one result; the
    /// request is abandoned after the configured timeout.
    pub async fn fetch(&self, config: &QuizConfig) -> Result<Vec<TriviaQuestion>, FetchError> {
        tracing::debug!(url = %self.base_url, amount = config.amount, "requesting questions");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("amount", config.amount.to_string()),
                ("category", config.category.api_id().to_string()),
                ("difficulty", config.difficulty.as_str().to_string()),
                ("type", "multiple".to_string()),
            ])
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let body: ApiResponse = response.json().await?;

        if body.response_code != RESPONSE_CODE_SUCCESS {
            return Err(FetchError::ResponseCode(body.response_code));
        }
        if body.results.is_empty() {
            return Err(FetchError::NoResults);
        }

        Ok(body
            .results
            .into_iter()
            .map(ApiQuestion::into_question)
            .collect())
    }
}

impl Default for TriviaApi {
    fn default() -> Self {
        Self::new()
    }
}

/// API text fields arrive HTML-entity encoded.
fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
