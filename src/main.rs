//! Delsla CLI - main entry point
//!
//! Deletes your Slack messages older than N days. Dry-run unless `--perform`.

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use delsla::config::{RunConfig, SlackConfig, DEFAULT_DAYS};
use delsla::{commands, SlackClient};

#[derive(Parser)]
#[command(name = "delsla")]
#[command(about = "Delsla is the tool for deleting slack messages", long_about = None)]
struct Cli {
    /// Verbose output (print messages even when deleting)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Perform the deletion (default is a dry run)
    #[arg(short, long, global = true, default_value_t = false)]
    perform: bool,

    /// Delete messages older than {days} days
    #[arg(short, long, global = true, default_value_t = DEFAULT_DAYS)]
    days: u32,

    /// Slack API token (fallback: SLACK_API_TOKEN)
    #[arg(long, global = true, env = "SLACK_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the version
    Version,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            verbose: self.verbose,
            perform: self.perform,
            days: self.days,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout is the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("delsla=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Version) = cli.command {
        commands::version::run();
        return Ok(());
    }

    let run_config = cli.run_config();
    if let Err(err) = execute(cli.token, run_config).await {
        error!("{:#}", err);
        std::process::exit(1);
    }

    Ok(())
}

async fn execute(token: Option<String>, run_config: RunConfig) -> anyhow::Result<()> {
    let client = SlackClient::new(SlackConfig::from_optional_token(token)?)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::delete::run(&client, &run_config, &mut out).await?;

    Ok(())
}
