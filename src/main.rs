use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use replydraw::config::Config;
use replydraw::draw::run_draw;
use replydraw::message::DrawMessage;
use replydraw::replies::twitter::TwitterReplyFetcher;
use replydraw::replies::ReplyFetcher;
use replydraw::web;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "replydraw")]
#[command(about = "Pick a random winner from the replies to a tweet", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a config file (defaults to <config dir>/replydraw/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web form (default)
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Draw a winner once and print it
    Draw {
        /// URL of the tweet whose replies take part
        url: String,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("replydraw=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            web::serve(&config).await
        }
        Command::Draw { url, seed } => {
            let fetcher = TwitterReplyFetcher::new(
                &config.twitter,
                config.credentials.bearer_token.clone(),
            );
            draw_once(&fetcher, &url, seed).await
        }
    }
}

async fn draw_once(fetcher: &dyn ReplyFetcher, url: &str, seed: Option<u64>) -> Result<()> {
    match run_draw(fetcher, url, seed).await {
        Ok(result) => {
            println!("{}", DrawMessage::from(result));
            Ok(())
        }
        Err(e) => {
            error!("Reply lookup failed: {}", e);
            bail!("{}", DrawMessage::from(&e))
        }
    }
}
