//! # Langflow MCP Server
//!
//! Serves the flow management tools over stdio for MCP clients.
//!
//! ## Usage
//!
//! ```bash
//! LANGFLOW_URL=http://localhost:7860 FLOW_ID=<flow id> API_KEY=<key> \
//! SUPABASE_URL=https://<project>.supabase.co SUPABASE_KEY=<key> \
//!     langflow-mcp --profile all
//! ```
//!
//! Variables are also read from a `.env` file in the working directory.
//! Logs go to stderr and are filtered with `RUST_LOG` (default `info`).

use clap::Parser;
use langflow_mcp::config::Config;
use langflow_mcp::flow_service::FlowService;
use langflow_mcp::langflow::LangflowClient;
use langflow_mcp::mcp_integration::{FlowMcpServer, ToolProfile};
use langflow_mcp::storage::InMemoryFlowStore;
use log::info;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "langflow-mcp")]
#[command(about = "MCP server exposing Langflow workflow management tools over stdio")]
#[command(version)]
struct Args {
    /// Tool set to expose (overrides MCP_TOOL_PROFILE)
    #[arg(long, value_enum)]
    profile: Option<ToolProfile>,

    /// Keep stored flows in memory instead of the Supabase table
    #[arg(long)]
    in_memory: bool,

    /// Print the tool definitions as JSON and exit
    #[arg(long)]
    list_tools: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .format_timestamp_secs()
        .init();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(profile) = args.profile {
        config = config.with_profile(profile);
    }
    info!(
        "Starting langflow-mcp {} with profile '{}'",
        env!("CARGO_PKG_VERSION"),
        config.profile
    );

    let mcp_server = if args.in_memory {
        let langflow = LangflowClient::new(
            config.langflow_url.clone(),
            config.flow_id.clone(),
            config.api_key.clone(),
        );
        let service = Arc::new(FlowService::new(InMemoryFlowStore::new(), langflow));
        FlowMcpServer::for_profile(service, config.profile)?
    } else {
        let service = Arc::new(FlowService::from_config(&config));
        FlowMcpServer::for_profile(service, config.profile)?
    };

    if args.list_tools {
        println!("{}", serde_json::to_string_pretty(&mcp_server.get_tools())?);
        return Ok(());
    }

    mcp_server.run_stdio().await
}
