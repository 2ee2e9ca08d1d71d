//! `prelude detect ...` subcommands.

use std::io::{BufRead, Write};

use anyhow::bail;
use clap::Subcommand;
use prelude_core::models::{EnableTest, EndpointRegistration, RunCode};
use prelude_core::PreludeConfig;
use prelude_sdk::{DetectController, HttpClient, RequestOptions};
use serde::Serialize;

use crate::report;

#[derive(Subcommand, Debug)]
pub enum DetectCommand {
    /// Register a new endpoint
    CreateEndpoint {
        name: String,
        /// A comma-separated list of tags for this endpoint
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Add TEST to your queue
    EnableTest {
        test: String,
        /// Only enable for these tags (comma-separated)
        #[arg(long)]
        tags: Option<String>,
        /// debug, daily, weekly, monthly, or once
        #[arg(long, alias = "run_code", default_value_t = RunCode::Daily)]
        run_code: RunCode,
    },
    /// Remove TEST from your queue
    DisableTest {
        test: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List all tests in your active queue
    ListQueue,
    /// List all endpoint probes
    ListProbes {
        /// Days to look back
        #[arg(long)]
        days: Option<u32>,
    },
    /// View report for my account
    Activity {
        /// Days to look back
        #[arg(long)]
        days: Option<u32>,
    },
    /// Pull social statistics for TEST
    Stats {
        test: String,
        /// Days to look back
        #[arg(long)]
        days: Option<u32>,
    },
    /// Mark a result as observed
    Observe { row_id: String, value: String },
}

pub async fn run(config: &PreludeConfig, cmd: DetectCommand) -> anyhow::Result<()> {
    let detect = DetectController::new(HttpClient::from_config(config)?);

    match cmd {
        DetectCommand::CreateEndpoint { name, tags } => {
            let registration = EndpointRegistration::new(name).with_tags(split_tags(&tags));
            let token = detect
                .register_endpoint(&registration, RequestOptions::default())
                .await?;
            println!("Endpoint token: {token}");
        }
        DetectCommand::EnableTest {
            test,
            tags,
            run_code,
        } => {
            let tags = tags.as_deref().map(split_tags).unwrap_or_default();
            let enable = EnableTest::new(test.as_str(), run_code).with_tags(tags);
            detect.enable_test(&enable, RequestOptions::default()).await?;
            println!("Enabled {test} ({run_code})");
        }
        DetectCommand::DisableTest { test, yes } => {
            if !yes && !confirm("Are you sure?")? {
                bail!("aborted");
            }
            detect.disable_test(&test, RequestOptions::default()).await?;
            println!("Disabled {test}");
        }
        DetectCommand::ListQueue => print_json(&detect.print_queue(RequestOptions::default()).await?)?,
        DetectCommand::ListProbes { days } => {
            print_json(&detect.list_probes(days, RequestOptions::default()).await?)?
        }
        DetectCommand::Activity { days } => {
            let activity = detect.describe_activity(days, RequestOptions::default()).await?;
            print!("{}", report::render_activity(&activity));
        }
        DetectCommand::Stats { test, days } => {
            print_json(&detect.stats(&test, days, RequestOptions::default()).await?)?
        }
        DetectCommand::Observe { row_id, value } => {
            println!("{}", detect.observe(&row_id, &value, RequestOptions::default()).await?);
        }
    }
    Ok(())
}

/// Split a comma-separated list, dropping blank items.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N]: ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
