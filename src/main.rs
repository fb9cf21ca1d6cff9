//! Telegram Notify CLI - main entry point
//!
//! Sends one message to the configured chat and exits.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use telegram_notify::{
    resolve_message, trim_message, BotSender, ConsoleSender, MessageInput, MessageSender, Notifier,
    NotifyConfig, Result,
};

#[derive(Parser)]
#[command(name = "telegram_notify")]
#[command(about = "Send a Telegram message to a fixed chat id", long_about = None)]
#[command(version)]
struct Cli {
    /// Message text
    #[arg(long)]
    text: Option<String>,

    /// Read message text from a UTF-8 file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Print the message instead of sending (no network access)
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    // Initialize logging; keep stdout clean for --dry-run output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("telegram_notify=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let input = MessageInput {
        text: cli.text,
        file: cli.file,
    };
    let raw = resolve_message(&input)?;
    let message = trim_message(&raw)?;

    // Dry-run picks the console sender and never touches credentials.
    let sender: Box<dyn MessageSender> = if cli.dry_run {
        Box::new(ConsoleSender::new())
    } else {
        let config = NotifyConfig::new();
        config.validate()?;
        Box::new(BotSender::new(&config)?)
    };

    Notifier::new(sender).notify(&message).await
}
