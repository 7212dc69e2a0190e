//! Placement portal CLI
//!
//! Shows job openings, notices and interview experiences from the portal
//! backend, and runs the admin message board. Logs go to stderr so stdout
//! carries only the rendered feed.

mod session;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use placement_core::{
    Capability, Collection, FeedRenderer, FeedView, HttpFeedSource, ImportanceClassifier,
    Normalizer, PortalConfig, SystemClock,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "placement")]
#[command(about = "Placement portal feeds and notice board", long_about = None)]
struct Args {
    /// Backend base URL (overrides PORTAL_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Role for this session: viewer or admin
    #[arg(long, global = true, default_value = "viewer")]
    role: Capability,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List job openings
    Jobs {
        /// Print the normalized feed as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the notice board
    Notices {
        #[arg(long)]
        json: bool,
    },
    /// List interview experiences
    Interviews {
        #[arg(long)]
        json: bool,
    },
    /// Compose messages interactively (admin only)
    Board,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = PortalConfig::from_env().context("Invalid portal configuration")?;
    if let Some(api_url) = &args.api_url {
        config = config.with_api_url(api_url);
    }

    let classifier = ImportanceClassifier::new(&config.important_keywords)
        .context("Invalid PORTAL_IMPORTANT_KEYWORDS")?;
    let renderer = FeedRenderer::new(args.role);
    info!(role = %args.role, api_url = %config.api_url, "Starting placement CLI");

    match args.command {
        Command::Jobs { json } => {
            show_feed(&config, classifier, renderer, Collection::Jobs, json).await
        }
        Command::Notices { json } => {
            show_feed(&config, classifier, renderer, Collection::Notices, json).await
        }
        Command::Interviews { json } => {
            show_feed(&config, classifier, renderer, Collection::Interviews, json).await
        }
        Command::Board => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            session::run_board(stdin, &mut stdout, renderer, classifier, &SystemClock).await
        }
    }
}

/// One view over one collection: load it, print it, tear it down
async fn show_feed(
    config: &PortalConfig,
    classifier: ImportanceClassifier,
    renderer: FeedRenderer,
    collection: Collection,
    json: bool,
) -> Result<()> {
    let source = HttpFeedSource::from_config(config).context("Failed to build HTTP client")?;
    let mut view = FeedView::new(
        Arc::new(source),
        Arc::new(SystemClock),
        collection,
        Normalizer::new(classifier),
    );

    let interrupted = tokio::select! {
        _ = view.refresh() => false,
        _ = tokio::signal::ctrl_c() => true,
    };
    if interrupted {
        info!(%collection, "Interrupted while loading");
        view.teardown();
        return Ok(());
    }

    if json {
        let body = serde_json::to_string_pretty(view.state()).context("Failed to encode feed")?;
        println!("{}", body);
    } else {
        print!("{}", renderer.render_feed(collection, view.state()));
    }

    view.teardown();
    Ok(())
}
