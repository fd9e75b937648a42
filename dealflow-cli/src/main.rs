mod commands;
mod config;
mod error;
mod paths;

use std::fs;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dealflow_lib::CrmClient;
use dealflow_lib::auth::StaticTokenProvider;
use simplelog::Config as LogConfig;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use crate::commands::Command;
use crate::config::Config;
use crate::error::CliError;

/// Back-office client for the dealflow CRM.
#[derive(Debug, Parser)]
#[command(name = "dealflow", version, about)]
struct Cli {
    /// API base URL [env: DEALFLOW_API_URL]
    #[arg(long, global = true)]
    url: Option<String>,

    /// API access token [env: DEALFLOW_API_TOKEN]
    #[arg(long, global = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Config file (defaults to config.json in the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn flags(&self) -> Config {
        Config {
            api_url: self.url.clone(),
            api_token: self.token.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    match run(cli).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let config_file = cli.config.clone().or_else(paths::config_file);
    let settings = config::load(config_file.as_deref(), cli.flags())?;

    let client = CrmClient::builder()
        .url(settings.api_url)
        .token_provider(StaticTokenProvider::new(settings.api_token))
        .timeout(settings.timeout)
        .build()?;

    commands::run(&client, cli.command).await
}

/// Logs to `latest.log` in the cache dir, rotating the previous file.
fn init_logging(level: LevelFilter) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }

    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, LogConfig::default(), file);
        }
        Err(e) => eprintln!("Warning: cannot write log file {}: {}", path.display(), e),
    }
}
