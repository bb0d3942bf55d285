//! Command-line interface for the market data tools

use agent_market::{MarketConfig, YahooFinanceClient, register_market_tools};
use agent_mcp::McpServer;
use agent_tools::ToolRegistry;
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// Name reported to MCP clients
const SERVER_NAME: &str = "market-data-tools";

#[derive(Parser, Debug)]
#[command(name = "market-tools", version)]
#[command(about = "Stock, crypto and market index tools for LLM runtimes", long_about = None)]
struct Cli {
    /// JSON configuration file; `MARKET_*` environment variables override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the MCP server on stdio
    Serve,
    /// List the available tools
    Tools,
    /// Invoke one tool and print its result as JSON
    Call {
        /// Tool name, e.g. get_stock_price
        name: String,
        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<MarketConfig> {
    let config = match path {
        Some(path) => MarketConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => MarketConfig::default(),
    };
    Ok(config.with_env()?)
}

fn build_registry(config: &MarketConfig) -> anyhow::Result<Arc<ToolRegistry>> {
    let client = YahooFinanceClient::new(config.clone())?;
    let registry = ToolRegistry::new();
    register_market_tools(&registry, Arc::new(client), config);
    Ok(Arc::new(registry))
}

fn tools_table(registry: &ToolRegistry) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tool", "Description"]);

    for definition in registry.definitions() {
        table.add_row(vec![
            definition.name,
            definition.description.unwrap_or_default(),
        ]);
    }
    table
}

async fn call(registry: &ToolRegistry, name: &str, args: &str) -> anyhow::Result<ExitCode> {
    let arguments: Value = serde_json::from_str(args).context("--args must be valid JSON")?;
    let tool = registry
        .get(name)
        .ok_or_else(|| agent_core::Error::ToolNotFound(name.to_string()))?;

    let output = tool.invoke(arguments).await;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(if output.is_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    agent_utils::init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let registry = build_registry(&config)?;

    match cli.command {
        Commands::Serve => {
            info!("Starting {SERVER_NAME}");
            McpServer::new(registry)
                .with_server_info(SERVER_NAME, env!("CARGO_PKG_VERSION"))
                .serve_stdio()
                .await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Tools => {
            println!("{}", tools_table(&registry));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Call { name, args } => call(&registry, &name, &args).await,
    }
}
