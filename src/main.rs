mod application;
mod config;
mod domain;
mod infrastructure;

pub use application::{agent, tooling};
pub use domain::catalog;
pub use infrastructure::{model, server, upstream};

use agent::{AgentOptions, ChatAgent};
use clap::{Parser, ValueEnum};
use config::{AppConfig, ExecutorStrategy};
use model::GeminiClient;
use serde_json::json;
use std::error::Error;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tooling::{DirectExecutor, ProxyExecutor, ToolExecutor, commerce_declarations};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};
use upstream::{CatalogApi, HotelsApi};

#[derive(Parser, Debug)]
#[command(
    name = "searchlift-chat",
    version,
    about = "Conversational commerce assistant for the SearchLift360 platform"
)]
struct Cli {
    #[arg(long)]
    config: Option<String>,
    #[arg(long, value_enum, default_value_t = RunMode::Serve)]
    mode: RunMode,
    #[arg(long, default_value = "0.0.0.0:8001")]
    addr: SocketAddr,
    #[arg(long)]
    prompt_file: Option<String>,
    prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RunMode {
    Serve,
    Ask,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting searchlift-chat");
    let cli = Cli::parse();
    debug!(?cli.mode, config = ?cli.config, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration using default path or defaults");
    }

    let upstream_http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream.http_timeout_secs))
        .build()?;
    let catalog = CatalogApi::new(config.upstream.ecommerce_base_url.clone(), upstream_http.clone());
    let hotels = HotelsApi::new(config.upstream.hotel_base_url.clone(), upstream_http.clone());

    let executor: Arc<dyn ToolExecutor> = match config.agent.executor {
        ExecutorStrategy::Direct => {
            debug!("Using direct tool execution strategy");
            Arc::new(DirectExecutor::new(catalog.clone(), hotels.clone()))
        }
        ExecutorStrategy::Proxy => {
            debug!(base_url = config.agent.proxy_base_url.as_str(), "Using proxy tool execution strategy");
            Arc::new(ProxyExecutor::new(
                config.agent.proxy_base_url.clone(),
                upstream_http,
            ))
        }
    };

    let provider = GeminiClient::from_config(&config.provider);
    let mut options = AgentOptions::new(config.model.clone());
    options.max_tool_rounds = config.agent.max_tool_rounds;
    if let Some(system) = config.system_instruction.clone() {
        options.system_instruction = system;
    }
    let agent = ChatAgent::new(provider, executor, commerce_declarations(), options);

    info!(mode = ?cli.mode, "Running in selected mode");
    match cli.mode {
        RunMode::Serve => {
            info!(addr = %cli.addr, "Starting REST server");
            server::serve(agent, catalog, hotels, cli.addr).await?;
        }
        RunMode::Ask => {
            let prompt = load_prompt(&cli)?;
            info!("Dispatching single prompt from CLI mode");
            let outcome = agent.respond(prompt).await;
            let output = json!({
                "response": outcome.response,
                "tool_steps": outcome.steps,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    info!("searchlift-chat finished");
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn load_prompt(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let raw = if let Some(path) = &cli.prompt_file {
        info!(path = %path, "Loading prompt from file");
        fs::read_to_string(path)?
    } else {
        cli.prompt.join(" ")
    };

    let prompt = raw.trim().to_string();
    if prompt.is_empty() {
        return Err("prompt required via arguments or --prompt-file".into());
    }
    Ok(prompt)
}
