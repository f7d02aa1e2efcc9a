//! Greeting service entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use env_greeter::api::AppState;
use env_greeter::config::{bind_addr, Config, LogFormat};
use env_greeter::env::SystemEnv;
use env_greeter::greeting::resolve_environment;
use env_greeter::metrics;
use env_greeter::server;
use env_greeter::utils::shutdown_signal;

/// Single-route greeting service.
#[derive(Parser, Debug)]
#[command(name = "env-greeter")]
#[command(about = "Serves a greeting that reports the ENV deployment environment")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so RUST_LOG / LOG_FORMAT from .env apply
    let config = Config::load()?;

    init_logging(&config, args.verbose);

    for name in &config.skipped_vars {
        warn!("Ignoring environment variable {:?}: not valid unicode", name);
    }

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("env_greeter=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Text => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ENV GREETER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}", bind_addr());
    println!("  Environment: {}", resolve_environment(&SystemEnv));
    println!("  Log Level: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until SIGINT/SIGTERM.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    metrics::init_metrics();

    info!("Environment at startup: {}", resolve_environment(&SystemEnv));

    let listener = server::bind(bind_addr()).await?;
    server::serve(listener, AppState::new(), shutdown_signal()).await?;

    Ok(())
}
