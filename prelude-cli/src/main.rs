//! `prelude` command line.

mod commands;
mod report;
mod tracing_setup;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use prelude_core::PreludeConfig;

use commands::detect::DetectCommand;

#[derive(Parser, Debug)]
#[command(name = "prelude", author, version, about = "Prelude Detect command line")]
struct Cli {
    /// Path to config file [default: ~/.prelude/config.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Account handle
    #[arg(long, env = "PRELUDE_ACCOUNT_ID", global = true)]
    account: Option<String>,

    /// Account token
    #[arg(long, env = "PRELUDE_ACCOUNT_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// API base URL
    #[arg(long, env = "PRELUDE_API", global = true)]
    api: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Continuously test your endpoints
    #[command(subcommand)]
    Detect(DetectCommand),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    tracing_setup::init_tracing(&config.observability);
    tracing::debug!(base_url = %config.client.base_url, "prelude: config loaded");

    match cli.command {
        Command::Detect(cmd) => commands::detect::run(&config, cmd).await,
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<PreludeConfig> {
    let mut config = match &cli.config {
        Some(path) => PreludeConfig::from_file(path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => PreludeConfig::from_file(&path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => PreludeConfig::default(),
        },
    };

    if let Some(ref account) = cli.account {
        config.account.handle = Some(account.clone());
    }
    if let Some(ref token) = cli.token {
        config.account.token = Some(token.clone());
    }
    if let Some(ref api) = cli.api {
        config.client.base_url = api.clone();
    }
    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| Path::new(&home).join(".prelude").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config_file() {
        let cli = Cli::parse_from([
            "prelude",
            "--config",
            "/nonexistent/prelude.toml",
            "detect",
            "list-queue",
        ]);
        assert!(load_config(&cli).is_err());

        let cli = Cli::parse_from([
            "prelude",
            "--account",
            "acct",
            "--token",
            "tok",
            "--api",
            "http://localhost:9000",
            "detect",
            "list-queue",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.client.base_url, "http://localhost:9000");
        let creds = config.credentials().unwrap();
        assert_eq!(creds.account, "acct");
        assert_eq!(creds.token, "tok");
    }
}
