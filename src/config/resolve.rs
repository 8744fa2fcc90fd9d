//! Environment variable substitution, API key resolution, and defaulted
//! accessors.

use std::time::Duration;

use super::types::Config;
use crate::constants;

impl Config {
    /// Resolve {env:VAR_NAME} patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        self.model = Self::resolve_str(&self.model);
        if let Some(ref mut name) = self.assistant_name {
            *name = Self::resolve_str(name);
        }
        if let Some(ref mut instructions) = self.instructions {
            *instructions = Self::resolve_str(instructions);
        }
        for field in [&mut self.service.api_key, &mut self.service.base_url] {
            if let Some(value) = field {
                *value = Self::resolve_str(value);
            }
        }
        for field in [
            &mut self.corpus.api_key,
            &mut self.corpus.base_url,
            &mut self.corpus.corpus_id,
        ] {
            if let Some(value) = field {
                *value = Self::resolve_str(value);
            }
        }
    }

    /// Replace {env:VAR} with the environment variable value.
    fn resolve_str(s: &str) -> String {
        let mut result = s.to_string();
        while let Some(start) = result.find("{env:") {
            if let Some(end) = result[start..].find('}') {
                let var_name = &result[start + 5..start + end];
                let value = std::env::var(var_name).unwrap_or_default();
                result = format!(
                    "{}{}{}",
                    &result[..start],
                    value,
                    &result[start + end + 1..]
                );
            } else {
                break;
            }
        }
        result
    }

    /// Resolve the assistant-service API key: env var first, then config.
    pub fn resolve_service_api_key(&self) -> Option<String> {
        Self::env_or(
            "OPENAI_API_KEY",
            self.service.api_key.as_deref(),
        )
    }

    /// Resolve the corpus-service API key: env var first, then config.
    pub fn resolve_corpus_api_key(&self) -> Option<String> {
        Self::env_or("FIXIE_API_KEY", self.corpus.api_key.as_deref())
    }

    fn env_or(env_key: &str, fallback: Option<&str>) -> Option<String> {
        if let Ok(val) = std::env::var(env_key) {
            if !val.is_empty() {
                return Some(val);
            }
        }
        fallback.filter(|s| !s.is_empty()).map(String::from)
    }

    /// Assistant name, falling back to the built-in default.
    pub fn assistant_name(&self) -> &str {
        self.assistant_name
            .as_deref()
            .unwrap_or(constants::DEFAULT_ASSISTANT_NAME)
    }

    /// System instructions, falling back to the built-in default.
    pub fn instructions(&self) -> &str {
        self.instructions
            .as_deref()
            .unwrap_or(constants::DEFAULT_INSTRUCTIONS)
    }

    /// Whether diagnostic output is enabled.
    pub fn debug_enabled(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    /// Base URL of the assistant/run service.
    pub fn service_base_url(&self) -> &str {
        self.service
            .base_url
            .as_deref()
            .unwrap_or(constants::ASSISTANT_BASE_URL)
    }

    /// Base URL of the corpus service.
    pub fn corpus_base_url(&self) -> &str {
        self.corpus
            .base_url
            .as_deref()
            .unwrap_or(constants::CORPUS_BASE_URL)
    }

    /// Identifier of the corpus to query.
    pub fn corpus_id(&self) -> &str {
        self.corpus
            .corpus_id
            .as_deref()
            .unwrap_or(constants::DEFAULT_CORPUS_ID)
    }

    /// Maximum number of result chunks per corpus query.
    pub fn corpus_max_chunks(&self) -> u32 {
        self.corpus.max_chunks.unwrap_or(constants::CORPUS_MAX_CHUNKS)
    }

    /// Delay between run-status polls.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(
            self.polling
                .interval_ms
                .unwrap_or(constants::POLL_INTERVAL_MS),
        )
    }

    /// Maximum number of polls before the run times out.
    pub fn max_polls(&self) -> u32 {
        self.polling.max_polls.unwrap_or(constants::POLL_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_substitution_replaces_placeholder() {
        std::env::set_var("LORE_TEST_SUB_VAR", "resolved-value");
        let mut config = Config::default();
        config.instructions = Some("key is {env:LORE_TEST_SUB_VAR} here".to_string());
        config.resolve_substitutions();
        assert_eq!(
            config.instructions.as_deref(),
            Some("key is resolved-value here")
        );
    }

    #[test]
    fn missing_env_var_substitutes_empty() {
        let mut config = Config::default();
        config.corpus.corpus_id = Some("{env:LORE_TEST_DEFINITELY_UNSET}".to_string());
        config.resolve_substitutions();
        assert_eq!(config.corpus.corpus_id.as_deref(), Some(""));
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let config = Config::default();
        assert_eq!(config.assistant_name(), crate::constants::DEFAULT_ASSISTANT_NAME);
        assert_eq!(config.corpus_id(), crate::constants::DEFAULT_CORPUS_ID);
        assert_eq!(config.corpus_max_chunks(), crate::constants::CORPUS_MAX_CHUNKS);
        assert_eq!(config.poll_interval(), Duration::from_millis(3_000));
        assert_eq!(config.max_polls(), crate::constants::POLL_MAX_ATTEMPTS);
        assert!(!config.debug_enabled());
    }
}
