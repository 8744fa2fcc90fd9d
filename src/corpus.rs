//! Client for the knowledge-base ("corpus") query service.
//!
//! A corpus is a named, hosted collection of documents searchable by free
//! text. Lore issues one query per tool invocation and passes the ranked
//! chunk payload back to the assistant verbatim; it never interprets the
//! chunks itself.

use serde_json::{json, Value};

use crate::error::ServiceError;

/// A configured client for one corpus.
///
/// Holds the corpus identifier and chunk limit so a tool invocation only
/// needs to supply the query text. No state is retained between queries.
pub struct CorpusClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    corpus_id: String,
    max_chunks: u32,
}

impl CorpusClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        corpus_id: impl Into<String>,
        max_chunks: u32,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            corpus_id: corpus_id.into(),
            max_chunks,
        }
    }

    /// The identifier of the corpus this client queries.
    pub fn corpus_id(&self) -> &str {
        &self.corpus_id
    }

    /// Runs one query against the corpus and returns the raw ranked-chunk
    /// payload.
    pub async fn query(&self, query: &str) -> Result<Value, ServiceError> {
        let url = format!(
            "{}/api/v1/corpora/{}:query",
            self.base_url, self.corpus_id
        );
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "query": query,
                "max_chunks": self.max_chunks,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(resp.json::<Value>().await?)
    }
}
