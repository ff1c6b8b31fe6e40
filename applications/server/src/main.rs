/// Tome server - single-audiobook streaming backend
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tome_chapters::ChapterExtractor;
use tome_server::{config::ServerConfig, create_router, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tome-server")]
#[command(about = "Tome audiobook streaming server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Extract and print the chapter list for an audio URL
    Chapters {
        /// Remote audio resource (e.g. an .m4b URL)
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tome_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::Chapters { url } => {
            print_chapters(&url).await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Tome server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Audio: {}", config.media.audio_url);

    let extractor = ChapterExtractor::new(Duration::from_secs(config.chapters.timeout_secs));
    let app_state = AppState::new(Arc::new(config.clone()), Arc::new(extractor));

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn print_chapters(url: &str) -> anyhow::Result<()> {
    let extractor = ChapterExtractor::default();
    let chapters = extractor.extract(url).await?;

    println!("Chapters:");
    for chapter in &chapters {
        println!(
            "  {}  {}",
            tome_core::format_time(chapter.start_seconds),
            chapter.title
        );
    }

    Ok(())
}
