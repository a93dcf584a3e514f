//! Gitbrief service entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gitbrief::adapters::github::GitHubClient;
use gitbrief::adapters::sqlite::{create_pool, Migrator, SqliteLookupCache};
use gitbrief::adapters::summary::HfSummaryClient;
use gitbrief::domain::ports::{LookupCache, NullLookupCache};
use gitbrief::infrastructure::config::{Config, ConfigLoader};
use gitbrief::server::{self, AppState};
use gitbrief::services::LookupService;

#[derive(Parser)]
#[command(name = "gitbrief", about = "Cached GitHub profile summaries over HTTP")]
struct Cli {
    /// Path to a YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen port override.
    #[arg(long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if config.summarizer.api_token.is_none() {
        warn!("summarizer token is not set; AI summaries will fall back to placeholder text");
    }

    let cache = build_cache(&config).await;
    let source = Arc::new(GitHubClient::new(config.github.clone())?);
    let summarizer = Arc::new(HfSummaryClient::new(config.summarizer.clone())?);

    let lookup = LookupService::new(source, summarizer, cache.clone())
        .with_ttl(chrono::Duration::hours(config.cache.ttl_hours))
        .with_summary_timeout(Duration::from_secs(config.cache.summary_timeout_secs));

    let state = Arc::new(AppState { lookup, cache });
    let app = server::router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Connect the cache store, degrading to the null cache when no URL is
/// configured or the store cannot be reached. Caching is optional; its
/// absence never prevents startup.
async fn build_cache(config: &Config) -> Arc<dyn LookupCache> {
    let Some(url) = &config.database.url else {
        info!("no database configured, running uncached");
        return Arc::new(NullLookupCache::new());
    };

    match connect_store(url, config.database.max_connections).await {
        Ok(cache) => {
            info!(url = %url, "lookup cache ready");
            Arc::new(cache)
        }
        Err(err) => {
            warn!(error = %err, "cache store unavailable, running uncached");
            Arc::new(NullLookupCache::new())
        }
    }
}

async fn connect_store(url: &str, max_connections: u32) -> anyhow::Result<SqliteLookupCache> {
    let pool = create_pool(url, max_connections).await?;
    Migrator::new(pool.clone()).run().await?;
    Ok(SqliteLookupCache::new(pool))
}
