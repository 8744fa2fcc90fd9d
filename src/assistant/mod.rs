//! Client for the hosted assistant/run service.
//!
//! The service owns the conversation state: assistants, threads, messages,
//! and runs are created and mutated through its REST API and referenced by
//! opaque identifiers. [`AssistantApi`] is the seam the runner is written
//! against; [`AssistantClient`] is the production implementation over
//! reqwest.

mod client;
mod types;

pub use client::AssistantClient;
pub use types::{
    Assistant, FunctionCall, MessageContent, MessageRole, Run, RunLastError, RunStatus,
    SubmitToolOutputs, TextBlock, Thread, ThreadMessage, ToolCall, ToolDefinition, ToolOutput,
};
#[allow(unused_imports)]
pub use types::{FunctionSpec, RequiredAction};

use crate::error::ServiceError;

/// Parameters for registering a new assistant definition.
#[derive(Debug, Clone)]
pub struct CreateAssistant {
    pub name: String,
    pub instructions: String,
    pub tools: Vec<ToolDefinition>,
    pub model: String,
}

/// Operations the hosted assistant service exposes.
///
/// The runner depends on this trait rather than [`AssistantClient`]
/// directly so the polling state machine can be exercised against a
/// scripted fake in tests.
#[async_trait::async_trait]
pub trait AssistantApi: Send + Sync {
    /// Register an assistant definition (name, instructions, tools, model).
    async fn create_assistant(&self, req: &CreateAssistant) -> Result<Assistant, ServiceError>;

    /// Create an empty conversation thread.
    async fn create_thread(&self) -> Result<Thread, ServiceError>;

    /// Append a message to a thread.
    async fn append_message(
        &self,
        thread_id: &str,
        role: MessageRole,
        text: &str,
    ) -> Result<ThreadMessage, ServiceError>;

    /// Start a run of the given assistant against a thread.
    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run, ServiceError>;

    /// Fetch the current state of a run.
    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run, ServiceError>;

    /// Submit the outputs for every pending tool call of a run.
    ///
    /// The service requires the batch to cover all pending calls from the
    /// current `requires_action` snapshot; a partial batch leaves the run
    /// stuck.
    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        outputs: &[ToolOutput],
    ) -> Result<Run, ServiceError>;

    /// List a thread's messages, oldest first.
    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>, ServiceError>;
}
