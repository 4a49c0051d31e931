use bookholder::client::HttpClient;
use bookholder::commands;
use bookholder::config::ConfigStore;
use bookholder::tui;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "bookholder")]
#[command(version)]
#[command(
    about = "Bookkeeping terminal client",
    long_about = "Bookkeeping terminal client\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display current configuration and where each value comes from
    Config,
    /// GET a route on the configured server and print the response body
    Fetch {
        /// Path appended to http://{server}:{port}, e.g. /accounts
        route: String,
    },
}

fn init_logging(log_level: &str, log_file: &str) {
    let filter = match EnvFilter::try_new(log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Invalid log level '{}': {}, using info", log_level, e);
            EnvFilter::new(DEFAULT_LOG_LEVEL)
        }
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn load_config() -> ConfigStore {
    match ConfigStore::load() {
        Ok(store) => store,
        Err(e) => {
            let error_msg = format!("Failed to load configuration: {:#}", anyhow::Error::from(e));
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn create_client(store: &ConfigStore) -> HttpClient {
    match HttpClient::new(&store.snapshot()) {
        Ok(client) => client,
        Err(e) => {
            let error_msg = format!("Failed to create HTTP client: {:#}", anyhow::Error::from(e));
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.log_file != DEFAULT_LOG_FILE {
        init_logging(&cli.log_level, &cli.log_file);
    }

    let config = load_config();

    match cli.command {
        // If no subcommand, run TUI
        None => {
            if let Err(e) = tui::run(config).await {
                eprintln!("Error running TUI: {}", e);
                tracing::error!("TUI failed: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => commands::config::run(&config),
        Some(Commands::Fetch { route }) => {
            let client = create_client(&config);
            if let Err(e) = commands::fetch::run(&client, &route).await {
                eprintln!("Error: {:#}", e);
                tracing::error!("Command failed: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}
