// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use pdf_search::{CardRenderer, Config, PdfServiceClient, SearchView};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "pdf_search")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Search and index healthcare compliance PDFs", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Overrides service.base_url from the configuration
    #[arg(long, value_name = "URL", env = "PDF_SEARCH_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trigger server-side indexing of the PDF corpus
    Index,

    /// Search the indexed PDFs
    Search {
        /// Search query text
        query: String,

        /// Print the raw response envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    pdf_search::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Index => cmd_index(&config).await,
        Commands::Search { query, json } => cmd_search(&config, query, json).await,
        Commands::Config => cmd_config(&config),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::resolve(&cli.config).context("Failed to load configuration")?;

    match &cli.base_url {
        Some(url) => config
            .with_base_url(url.clone())
            .context("Invalid --base-url"),
        None => Ok(config),
    }
}

async fn cmd_index(config: &Config) -> Result<ExitCode> {
    let client =
        PdfServiceClient::from_config(&config.service).context("Failed to create client")?;

    let mut view = SearchView::default();
    view.handle_index(&client).await;

    if let Some(status) = view.render_index_status() {
        println!("{}", status);
    }

    Ok(match view.index_outcome {
        Some(pdf_search::IndexOutcome::Succeeded) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

async fn cmd_search(config: &Config, query: String, json: bool) -> Result<ExitCode> {
    let client =
        PdfServiceClient::from_config(&config.service).context("Failed to create client")?;

    if json {
        let response = client.search_pdfs(&query).await;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(if response.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let renderer = CardRenderer::new(config.display.max_content_chars);
    let mut view = SearchView::new(query);
    view.handle_search(&client).await;

    println!("{}", view.render(&renderer));

    if !view.results.is_empty() {
        info!("Found {} result(s)", view.results.len());
    }

    Ok(if view.search_error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn cmd_config(config: &Config) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(ExitCode::SUCCESS)
}
