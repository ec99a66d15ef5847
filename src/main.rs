use clap::{Parser, Subcommand};
use std::time::Duration;
mod error;
mod fetch;
mod log;
mod search;
mod utils;

use search::serper::{SerperClient, DEFAULT_ENDPOINT};

/// Search for images matching a text summary and download them
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the image API and download up to 10 results
    Fetch {
        /// Text used verbatim as the search query
        summary: String,

        /// Directory where images are saved
        #[arg(short, long, default_value = fetch::DEFAULT_OUTPUT_DIR)]
        path: String,

        /// Search API key
        #[arg(long, env = "SERPER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Image search endpoint
        #[arg(long, env = "SERPER_API_URL", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Per-request timeout in seconds (no timeout when unset)
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Hide the download progress bar
        #[arg(long, default_value_t = false)]
        no_progress: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log::init()?;
    let args = Args::parse();

    match args.command {
        Commands::Fetch {
            summary,
            path,
            api_key,
            endpoint,
            timeout,
            no_progress,
        } => {
            if api_key.is_none() {
                tracing::warn!("SERPER_API_KEY is not set, sending an unauthenticated request");
            }

            let client = SerperClient::new(endpoint, api_key, timeout.map(Duration::from_secs))?;
            let options = fetch::FetchOptions {
                output_dir: path,
                show_progress: !no_progress,
            };

            let report = fetch::fetch(&client, &summary, &options).await;
            println!("{}", report);
        }
    }

    Ok(())
}
