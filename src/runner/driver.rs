//! One-shot conversation setup.
//!
//! Creates the assistant definition, the thread, the seed user message, and
//! the run, then hands off to the poller. Each step maps its service error
//! to the matching [`SetupError`] variant; setup failures are fatal and may
//! leave already-created objects behind on the service.

use crate::assistant::{AssistantApi, CreateAssistant, MessageRole};
use crate::error::{RunnerError, SetupError};
use crate::output::Renderer;
use crate::tools::ToolRegistry;

use super::{RunPoller, RunnerConfig};

/// Runs one question through the hosted assistant, start to finish.
pub struct ConversationDriver<'a> {
    api: &'a dyn AssistantApi,
    tools: &'a ToolRegistry,
    config: RunnerConfig,
}

impl<'a> ConversationDriver<'a> {
    pub fn new(api: &'a dyn AssistantApi, tools: &'a ToolRegistry, config: RunnerConfig) -> Self {
        Self { api, tools, config }
    }

    /// Creates the assistant, thread, seed message, and run, then polls the
    /// run to completion, emitting the final transcript via the renderer.
    pub async fn run(&self, question: &str, renderer: &mut dyn Renderer) -> Result<(), RunnerError> {
        let assistant = self
            .api
            .create_assistant(&CreateAssistant {
                name: self.config.assistant_name.clone(),
                instructions: self.config.instructions.clone(),
                tools: self.tools.definitions(),
                model: self.config.model.clone(),
            })
            .await
            .map_err(SetupError::AssistantCreation)?;
        renderer.debug(&format!("assistant created: {}", assistant.id));

        let thread = self
            .api
            .create_thread()
            .await
            .map_err(SetupError::ThreadCreation)?;
        renderer.debug(&format!("thread created: {}", thread.id));

        self.api
            .append_message(&thread.id, MessageRole::User, question)
            .await
            .map_err(SetupError::MessageAppend)?;

        let run = self
            .api
            .create_run(&thread.id, &assistant.id)
            .await
            .map_err(SetupError::RunCreation)?;
        renderer.debug(&format!("run created: {} ({})", run.id, run.status));

        let poller = RunPoller::new(
            self.api,
            self.tools,
            self.config.poll_interval,
            self.config.max_polls,
        );
        poller.drive(&thread.id, &run.id, renderer).await?;
        Ok(())
    }
}
