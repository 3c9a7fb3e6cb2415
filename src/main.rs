use anyhow::Context;
use clap::Parser;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use trusted_researcher::config::Config;
use trusted_researcher::llm::{OllamaClient, Summarizer};
use trusted_researcher::report::FileSink;
use trusted_researcher::sources::{trusted_sources, SourceRegistry};
use trusted_researcher::Researcher;

#[derive(Parser)]
#[command(
    name = "trusted-researcher",
    about = "Aggregates trusted web sources into an analyzed research report"
)]
struct Cli {
    /// Research query
    #[arg(required_unless_present = "list_sources")]
    query: Option<String>,

    /// Categories to search: academic, general, tech
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = ["academic".to_string(), "general".to_string()]
    )]
    categories: Vec<String>,

    /// Maximum results requested per source within a category
    #[arg(long, default_value_t = 2)]
    max_per_category: usize,

    /// Directory for report and data files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Skip writing report files
    #[arg(long)]
    no_save: bool,

    /// Print the trusted source registry and exit
    #[arg(long)]
    list_sources: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trusted_researcher::utils::logger::init();
    let cli = Cli::parse();

    if cli.list_sources {
        for descriptor in trusted_sources() {
            println!(
                "{:<18} {:<15} {}",
                descriptor.name,
                descriptor.kind.to_string(),
                descriptor.description
            );
            println!("{:<18} {}", "", descriptor.endpoint);
        }
        return Ok(());
    }
    let Some(query) = cli.query else {
        anyhow::bail!("a research query is required");
    };

    let config = Config::from_env()?;

    let http = Client::builder()
        .timeout(Duration::from_secs(config.sources.request_timeout_secs))
        .user_agent(config.sources.user_agent.clone())
        .build()
        .context("failed to build HTTP client")?;

    let registry = SourceRegistry::new(http, &config.sources);
    let ollama = OllamaClient::new(&config.ollama).context("failed to build Ollama client")?;
    let summarizer = Summarizer::new(Arc::new(ollama)).with_models(config.ollama.models.clone());

    let mut researcher = Researcher::new(registry, summarizer);
    if !cli.no_save {
        let dir = cli
            .output_dir
            .unwrap_or_else(|| PathBuf::from(&config.output.dir));
        researcher = researcher.with_sink(Box::new(FileSink::new(dir)));
    }

    match researcher
        .conduct_research(&query, &cli.categories, cli.max_per_category)
        .await
    {
        Some(outcome) => {
            info!(sources = outcome.results.len(), "Research completed");
            println!("{}", outcome.report);
        }
        None => {
            println!("No suitable sources found for: {query}");
        }
    }

    Ok(())
}
