use anyhow::Context;
use boothcast::{create_source, SiteConfig};
use boothcast_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let mut config = SiteConfig::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {:#}, using defaults", e);
        SiteConfig::default()
    });
    config.apply_overrides(|key| std::env::var(key).ok())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let source = create_source(&config.cms)
        .await
        .with_context(|| format!("Failed to create {} content source", config.cms.provider_name()))?;
    info!("Content source: {}", source.name());

    match config.forms.forward_url {
        Some(ref url) => info!("Forwarding form submissions to {}", url),
        None => info!("No form forward URL set; submissions are logged only"),
    }

    let app = build_router(AppState::new(source, config.forms.clone()));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
