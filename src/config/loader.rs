//! File loading and merging for lore configuration.

use anyhow::{Context, Result};
use std::fs;

use super::types::{default_model, Config, CorpusConfig, PollingConfig};

impl Config {
    /// Loads the global config from `~/.config/lore/config.toml`.
    ///
    /// If no config file exists, creates one with sensible defaults
    /// (including `{env:VAR}` placeholders for API keys) and returns it.
    pub(super) fn load_global() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            let default_toml = format!(
                r#"model = "{}"

[service]
api_key = "{{env:OPENAI_API_KEY}}"

[corpus]
api_key = "{{env:FIXIE_API_KEY}}"
corpus_id = "{}"
"#,
                default_model(),
                crate::constants::DEFAULT_CORPUS_ID
            );
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &default_toml)
                .with_context(|| format!("Failed to write default config to {:?}", path))?;
            let config: Config = toml::from_str(&default_toml)
                .with_context(|| "Failed to parse default config".to_string())?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        Ok(config)
    }

    /// Look for lore.toml in current dir, then walk up to git root.
    pub(super) fn load_project() -> Result<Option<Config>> {
        let mut dir = std::env::current_dir()?;
        loop {
            let candidate = dir.join(crate::constants::PROJECT_CONFIG_FILENAME);
            if candidate.exists() {
                let contents = fs::read_to_string(&candidate)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(Some(config));
            }
            // Stop at git root or filesystem root
            if dir.join(".git").exists() || !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Merge project config over global config.
    /// Project values win when present.
    pub(super) fn merge(global: Config, project: Config) -> Config {
        Config {
            model: if project.model != default_model() {
                project.model
            } else {
                global.model
            },
            assistant_name: project.assistant_name.or(global.assistant_name),
            instructions: project.instructions.or(global.instructions),
            debug: project.debug.or(global.debug),
            service: super::types::ServiceConfig {
                api_key: project.service.api_key.or(global.service.api_key),
                base_url: project.service.base_url.or(global.service.base_url),
            },
            corpus: CorpusConfig {
                api_key: project.corpus.api_key.or(global.corpus.api_key),
                base_url: project.corpus.base_url.or(global.corpus.base_url),
                corpus_id: project.corpus.corpus_id.or(global.corpus.corpus_id),
                max_chunks: project.corpus.max_chunks.or(global.corpus.max_chunks),
            },
            polling: PollingConfig {
                interval_ms: project.polling.interval_ms.or(global.polling.interval_ms),
                max_polls: project.polling.max_polls.or(global.polling.max_polls),
            },
        }
    }
}
