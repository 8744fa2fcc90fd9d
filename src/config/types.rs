//! Struct definitions and serde defaults for lore configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for lore, deserialized from `config.toml`.
///
/// Fields use serde defaults so lore can run with sensible defaults
/// when no config file exists.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Model identifier the assistant runs with (e.g. `"gpt-4.1"`).
    #[serde(default = "default_model")]
    pub model: String,
    /// Name registered with the assistant service.
    #[serde(default)]
    pub assistant_name: Option<String>,
    /// System instructions sent at assistant creation.
    #[serde(default)]
    pub instructions: Option<String>,
    /// Whether to print diagnostic output.
    #[serde(default)]
    pub debug: Option<bool>,
    /// Assistant/run service settings.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Knowledge-base corpus settings.
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Run polling settings.
    #[serde(default)]
    pub polling: PollingConfig,
}

/// Returns the default model identifier.
///
/// Used by serde's `#[serde(default)]` attribute during deserialization.
pub(super) fn default_model() -> String {
    crate::constants::DEFAULT_MODEL.to_string()
}

/// Connection details for the hosted assistant/run service.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ServiceConfig {
    /// API key for authentication. Can also be set via `OPENAI_API_KEY`.
    pub api_key: Option<String>,
    /// Custom base URL for the service's API.
    pub base_url: Option<String>,
}

/// Settings for the knowledge-base corpus.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CorpusConfig {
    /// API key for the corpus service. Can also be set via `FIXIE_API_KEY`.
    pub api_key: Option<String>,
    /// Custom base URL for the corpus service's API.
    pub base_url: Option<String>,
    /// Identifier of the corpus to query.
    pub corpus_id: Option<String>,
    /// Maximum number of result chunks per query.
    pub max_chunks: Option<u32>,
}

/// Settings for the run polling loop.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PollingConfig {
    /// Delay between run-status polls, in milliseconds.
    pub interval_ms: Option<u64>,
    /// Maximum number of polls before the run is declared timed out.
    pub max_polls: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            assistant_name: None,
            instructions: None,
            debug: None,
            service: ServiceConfig::default(),
            corpus: CorpusConfig::default(),
            polling: PollingConfig::default(),
        }
    }
}
