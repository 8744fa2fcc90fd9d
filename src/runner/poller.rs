//! The run polling state machine.
//!
//! One poll cycle is in flight at a time: fetch the run status, branch on
//! it, then sleep for the fixed interval before the next fetch. Tool calls
//! within a single `requires_action` snapshot fan out concurrently, but the
//! batch is only submitted once every call has produced an output.

use std::time::Duration;

use futures::future;
use serde_json::json;

use crate::assistant::{AssistantApi, RunStatus, ToolCall, ToolOutput};
use crate::error::PollError;
use crate::output::Renderer;
use crate::tools::ToolRegistry;

/// Drives one run to a terminal outcome by polling its status.
pub struct RunPoller<'a> {
    api: &'a dyn AssistantApi,
    tools: &'a ToolRegistry,
    interval: Duration,
    max_polls: u32,
}

impl<'a> RunPoller<'a> {
    pub fn new(
        api: &'a dyn AssistantApi,
        tools: &'a ToolRegistry,
        interval: Duration,
        max_polls: u32,
    ) -> Self {
        Self {
            api,
            tools,
            interval,
            max_polls,
        }
    }

    /// Polls the run until it completes, fails, or the attempt limit is
    /// exhausted.
    ///
    /// On `completed`, fetches the thread's messages once and emits each of
    /// them through the renderer in service order, then returns. On
    /// `requires_action`, answers every pending tool call and submits the
    /// full batch before polling again. Terminal failure statuses stop the
    /// loop with [`PollError::RunFailed`]; anything else is treated as
    /// transient and re-polled until `max_polls` is spent.
    pub async fn drive(
        &self,
        thread_id: &str,
        run_id: &str,
        renderer: &mut dyn Renderer,
    ) -> Result<(), PollError> {
        let mut attempts: u32 = 0;

        loop {
            if attempts >= self.max_polls {
                return Err(PollError::RunTimeout { attempts });
            }
            attempts += 1;

            let run = self.api.retrieve_run(thread_id, run_id).await?;
            renderer.debug(&format!("run status: {}", run.status));

            match run.status {
                RunStatus::Completed => {
                    let messages = self.api.list_messages(thread_id).await?;
                    for msg in &messages {
                        renderer.message(msg.role, &msg.text());
                    }
                    return Ok(());
                }
                RunStatus::RequiresAction => {
                    let outputs = self
                        .answer_tool_calls(run.pending_tool_calls(), renderer)
                        .await;
                    self.api
                        .submit_tool_outputs(thread_id, run_id, &outputs)
                        .await?;
                }
                status if status.is_terminal_failure() => {
                    let detail = run
                        .last_error
                        .map(|e| e.message)
                        .unwrap_or_else(|| "no error detail".to_string());
                    return Err(PollError::RunFailed { status, detail });
                }
                _ => {
                    renderer.status(&format!(
                        "assistant is still running, polling again in {}ms",
                        self.interval.as_millis()
                    ));
                }
            }

            tokio::time::sleep(self.interval).await;
        }
    }

    /// Invokes every pending tool call concurrently and collects one output
    /// per call.
    ///
    /// A failed invocation (unknown tool, malformed arguments, upstream
    /// failure) becomes an error-bearing output for its call id instead of
    /// aborting the batch, so the assistant can see what went wrong and the
    /// run can still make progress. The returned batch always covers every
    /// pending call.
    async fn answer_tool_calls(
        &self,
        calls: &[ToolCall],
        renderer: &mut dyn Renderer,
    ) -> Vec<ToolOutput> {
        for call in calls {
            renderer.debug(&format!(
                "tool call {}: {}({})",
                call.id, call.function.name, call.function.arguments
            ));
        }

        let invocations = calls.iter().map(|call| async move {
            self.tools
                .invoke(&call.function.name, &call.function.arguments)
                .await
        });
        let results = future::join_all(invocations).await;

        calls
            .iter()
            .zip(results)
            .map(|(call, result)| {
                let output = match result {
                    Ok(output) => output,
                    Err(err) => {
                        renderer.error(&format!(
                            "tool call {} ({}) failed: {err}",
                            call.id, call.function.name
                        ));
                        json!({ "error": err.to_string() }).to_string()
                    }
                };
                ToolOutput {
                    tool_call_id: call.id.clone(),
                    output,
                }
            })
            .collect()
    }
}
