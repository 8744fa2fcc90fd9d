use serde::Deserialize;
use serde_json::{json, Value};

use super::Tool;
use crate::corpus::CorpusClient;
use crate::error::ToolError;

/// The one built-in tool: queries the configured knowledge-base corpus.
///
/// Declared to the assistant at creation time; the model decides when to
/// call it. The raw ranked-chunk payload is serialized and returned as the
/// tool output so the model can read the chunks directly.
pub struct CorpusQueryTool {
    corpus: CorpusClient,
}

impl CorpusQueryTool {
    pub fn new(corpus: CorpusClient) -> Self {
        Self { corpus }
    }
}

#[derive(Deserialize)]
struct CorpusQueryInput {
    query: String,
}

#[async_trait::async_trait]
impl Tool for CorpusQueryTool {
    fn name(&self) -> &str {
        crate::constants::CORPUS_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Query a knowledge base for information relevant to the user's question."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The query to execute against the knowledge base"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, input: Value) -> Result<String, ToolError> {
        let input: CorpusQueryInput = serde_json::from_value(input)
            .map_err(|e| ToolError::MalformedArguments(e.to_string()))?;

        let result = self.corpus.query(&input.query).await?;
        Ok(result.to_string())
    }
}
