use tracing_subscriber::EnvFilter;
use url_redirector::{config, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before touching the environment; missing file is fine.
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.print_summary();

    server::run(config).await
}
