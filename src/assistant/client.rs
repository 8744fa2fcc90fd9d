//! HTTP implementation of [`AssistantApi`] over reqwest.
//!
//! Speaks the service's v2 REST endpoints. Every request carries the
//! bearer token and the beta opt-in header the assistants endpoints
//! require. Non-success responses are decoded into [`ServiceError::Api`]
//! with the service's own error message when one is present.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::types::{Assistant, MessageRole, Run, Thread, ThreadMessage, ToolOutput};
use super::{AssistantApi, CreateAssistant};
use crate::constants;
use crate::error::ServiceError;

/// A configured client for the hosted assistant service.
pub struct AssistantClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Envelope for list endpoints (`{"data": [...]}`).
#[derive(serde::Deserialize)]
struct ListEnvelope<T> {
    data: Vec<T>,
}

impl AssistantClient {
    /// Creates a client for the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and decodes the JSON response, mapping non-success
    /// statuses to [`ServiceError::Api`].
    async fn send<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ServiceError> {
        let resp = req
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", constants::ASSISTANTS_BETA_HEADER)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: extract_api_error(&body),
            });
        }
        Ok(resp.json::<T>().await?)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ServiceError> {
        self.send(self.http.post(self.url(path)).json(&body)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        self.send(self.http.get(self.url(path))).await
    }
}

/// Pulls the `error.message` field out of an API error body, falling back
/// to the raw body text.
fn extract_api_error(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}

#[async_trait::async_trait]
impl AssistantApi for AssistantClient {
    async fn create_assistant(&self, req: &CreateAssistant) -> Result<Assistant, ServiceError> {
        self.post(
            "/assistants",
            json!({
                "name": req.name,
                "instructions": req.instructions,
                "tools": req.tools,
                "model": req.model,
            }),
        )
        .await
    }

    async fn create_thread(&self) -> Result<Thread, ServiceError> {
        self.post("/threads", json!({})).await
    }

    async fn append_message(
        &self,
        thread_id: &str,
        role: MessageRole,
        text: &str,
    ) -> Result<ThreadMessage, ServiceError> {
        self.post(
            &format!("/threads/{thread_id}/messages"),
            json!({ "role": role, "content": text }),
        )
        .await
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run, ServiceError> {
        self.post(
            &format!("/threads/{thread_id}/runs"),
            json!({ "assistant_id": assistant_id }),
        )
        .await
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run, ServiceError> {
        self.get(&format!("/threads/{thread_id}/runs/{run_id}")).await
    }

    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        outputs: &[ToolOutput],
    ) -> Result<Run, ServiceError> {
        self.post(
            &format!("/threads/{thread_id}/runs/{run_id}/submit_tool_outputs"),
            json!({ "tool_outputs": outputs }),
        )
        .await
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>, ServiceError> {
        // Ascending order so the transcript reads oldest to newest.
        let envelope: ListEnvelope<ThreadMessage> = self
            .get(&format!("/threads/{thread_id}/messages?order=asc"))
            .await?;
        Ok(envelope.data)
    }
}
