//! Centralized constants for lore.
//!
//! All magic numbers, default strings, and configuration constants live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "lore";

/// Default model identifier for the hosted assistant service.
pub const DEFAULT_MODEL: &str = "gpt-4.1";

/// Default assistant name registered with the service.
pub const DEFAULT_ASSISTANT_NAME: &str = "Lore Assistant";

/// Default system instructions sent at assistant creation.
pub const DEFAULT_INSTRUCTIONS: &str =
    "You are a helpful assistant who answers questions about a specific \
knowledge domain. You have access to a knowledge base that you can query \
for more information before answering. Prefer querying the knowledge base \
over guessing.";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "lore.toml";

// --- Assistant service ---

/// Base URL for the hosted assistant/run service.
pub const ASSISTANT_BASE_URL: &str = "https://api.openai.com/v1";

/// Beta header value required by the assistants endpoints.
pub const ASSISTANTS_BETA_HEADER: &str = "assistants=v2";

// --- Corpus service ---

/// Base URL for the knowledge-base query service.
pub const CORPUS_BASE_URL: &str = "https://api.fixie.ai";

/// Default corpus identifier. This is a public corpus that anyone can query.
pub const DEFAULT_CORPUS_ID: &str = "437594d6-ae69-4e54-abea-c58ab2be80ec";

/// Maximum number of result chunks a corpus query returns.
pub const CORPUS_MAX_CHUNKS: u32 = 5;

/// Name of the corpus query tool as declared to the assistant.
pub const CORPUS_TOOL_NAME: &str = "query_knowledge_base";

// --- Polling ---

/// Delay between run-status polls, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 3_000;

/// Maximum number of polls before the run is declared timed out.
pub const POLL_MAX_ATTEMPTS: u32 = 100;
