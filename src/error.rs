//! Error types for lore.
//!
//! Each layer has its own enum so callers can match on what actually went
//! wrong: [`ServiceError`] for raw HTTP failures, [`ToolError`] for tool
//! invocation, [`SetupError`] for the one-shot conversation setup, and
//! [`PollError`] for the run polling loop. The CLI edge collapses these
//! into `anyhow` diagnostics.

use thiserror::Error;

use crate::assistant::RunStatus;

/// A failure talking to a hosted service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced a usable response (connection, TLS,
    /// timeout, or body decoding failure).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
}

/// A failure invoking a single tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested function name matches no registered tool.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The serialized arguments did not parse, or a required field
    /// was missing.
    #[error("malformed tool arguments: {0}")]
    MalformedArguments(String),

    /// The knowledge-base service call itself failed.
    #[error("knowledge base query failed: {0}")]
    UpstreamQueryFailure(#[from] ServiceError),
}

/// A failure during the one-shot conversation setup sequence.
///
/// Setup errors are fatal: the process aborts with a diagnostic rather
/// than retrying, and any service-side objects created by earlier steps
/// are left behind.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to create assistant: {0}")]
    AssistantCreation(#[source] ServiceError),

    #[error("failed to create thread: {0}")]
    ThreadCreation(#[source] ServiceError),

    #[error("failed to append message to thread: {0}")]
    MessageAppend(#[source] ServiceError),

    #[error("failed to create run: {0}")]
    RunCreation(#[source] ServiceError),
}

/// Any failure while driving a conversation end to end.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Poll(#[from] PollError),
}

/// A failure while polling a run to completion.
#[derive(Debug, Error)]
pub enum PollError {
    /// The run reached a terminal non-success status.
    #[error("run ended with status `{status}`: {detail}")]
    RunFailed { status: RunStatus, detail: String },

    /// The run was still not terminal after the configured number of polls.
    #[error("run did not complete after {attempts} polls")]
    RunTimeout { attempts: u32 },

    /// A poll-cycle service call (retrieve, submit, or list) failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}
