//! Command-line interface definition and dispatch for lore.
//!
//! Uses [`clap`] for argument parsing with derive macros. Each subcommand is
//! routed to its handler: `ask` drives a full assistant conversation,
//! `search` queries the knowledge base directly, and `config` inspects the
//! TOML configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::assistant::AssistantClient;
use crate::config;
use crate::corpus::CorpusClient;
use crate::output::StdoutRenderer;
use crate::runner::{ConversationDriver, RunnerConfig};
use crate::tools::corpus_query::CorpusQueryTool;
use crate::tools::ToolRegistry;

/// Top-level CLI structure for lore.
///
/// Parsed from command-line arguments via [`clap::Parser`]. Contains a single
/// required subcommand that determines which action lore performs.
#[derive(Parser)]
#[command(
    name = "lore",
    about = "A terminal assistant that answers questions from a hosted knowledge base"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the lore CLI.
///
/// Each variant maps to a top-level action. The `///` doc comments on variants
/// double as `--help` text rendered by clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Ask the assistant a question
    Ask {
        /// The question to ask
        question: Vec<String>,
        /// Model to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,
        /// Corpus identifier to query (overrides config)
        #[arg(short, long)]
        corpus: Option<String>,
        /// Print diagnostic output while the run is polled
        #[arg(long)]
        debug: bool,
        /// Milliseconds between run-status polls
        #[arg(long)]
        poll_interval: Option<u64>,
        /// Maximum number of polls before giving up
        #[arg(long)]
        max_polls: Option<u32>,
    },
    /// Query the knowledge base directly, without the assistant
    Search {
        /// The query to run
        query: Vec<String>,
        /// Corpus identifier to query (overrides config)
        #[arg(short, long)]
        corpus: Option<String>,
        /// Maximum number of result chunks
        #[arg(long)]
        max_chunks: Option<u32>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands for the `config` command.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current config
    Show,
    /// Print the config file path
    Path,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ask {
            question,
            model,
            corpus,
            debug,
            poll_interval,
            max_polls,
        } => {
            let question = question.join(" ");
            if question.is_empty() {
                anyhow::bail!("No question provided. Usage: lore ask \"your question here\"");
            }

            let mut config = config::Config::load()?;
            if let Some(m) = model {
                config.model = m;
            }
            if let Some(c) = corpus {
                config.corpus.corpus_id = Some(c);
            }
            if debug {
                config.debug = Some(true);
            }
            if let Some(ms) = poll_interval {
                config.polling.interval_ms = Some(ms);
            }
            if let Some(n) = max_polls {
                config.polling.max_polls = Some(n);
            }

            let service_key = config.resolve_service_api_key().context(
                "No API key found for the assistant service. Set OPENAI_API_KEY or configure it in config.toml",
            )?;
            let corpus_key = config.resolve_corpus_api_key().context(
                "No API key found for the corpus service. Set FIXIE_API_KEY or configure it in config.toml",
            )?;

            println!(
                "{} [model: {}] [corpus: {}]",
                "lore".bold().cyan(),
                config.model.yellow(),
                config.corpus_id().yellow(),
            );
            println!();
            println!("{} {}", ">".green().bold(), question);

            let api = AssistantClient::new(config.service_base_url(), service_key);
            let corpus_client = CorpusClient::new(
                config.corpus_base_url(),
                corpus_key,
                config.corpus_id(),
                config.corpus_max_chunks(),
            );
            let mut tools = ToolRegistry::new();
            tools.register(Box::new(CorpusQueryTool::new(corpus_client)));

            let runner_config = RunnerConfig {
                assistant_name: config.assistant_name().to_string(),
                instructions: config.instructions().to_string(),
                model: config.model.clone(),
                poll_interval: config.poll_interval(),
                max_polls: config.max_polls(),
            };
            let driver = ConversationDriver::new(&api, &tools, runner_config);
            let mut renderer = StdoutRenderer::new(config.debug_enabled());

            tokio::select! {
                result = driver.run(&question, &mut renderer) => {
                    result?;
                }
                _ = tokio::signal::ctrl_c() => {
                    anyhow::bail!("interrupted");
                }
            }
            Ok(())
        }
        Commands::Search {
            query,
            corpus,
            max_chunks,
        } => {
            let query = query.join(" ");
            if query.is_empty() {
                anyhow::bail!("No query provided. Usage: lore search \"your query here\"");
            }

            let mut config = config::Config::load()?;
            if let Some(c) = corpus {
                config.corpus.corpus_id = Some(c);
            }
            if let Some(n) = max_chunks {
                config.corpus.max_chunks = Some(n);
            }

            let corpus_key = config.resolve_corpus_api_key().context(
                "No API key found for the corpus service. Set FIXIE_API_KEY or configure it in config.toml",
            )?;
            let client = CorpusClient::new(
                config.corpus_base_url(),
                corpus_key,
                config.corpus_id(),
                config.corpus_max_chunks(),
            );

            println!(
                "{} [corpus: {}]",
                "searching".bold().cyan(),
                client.corpus_id().yellow(),
            );
            let result = client.query(&query).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Commands::Config { action } => {
            let config = config::Config::load()?;
            match action {
                ConfigAction::Show => {
                    let path = config::Config::config_path()?;
                    println!("{} {}", "Config path:".bold(), path.display());
                    println!();
                    let toml_str = toml::to_string_pretty(&config)?;
                    println!("{}", toml_str);
                }
                ConfigAction::Path => {
                    println!("{}", config::Config::config_path()?.display());
                }
            }
            Ok(())
        }
    }
}
