use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use mergington_activities::shared::infrastructure::roster::in_memory::InMemoryRoster;
use mergington_activities::shell::{config::Config, http, seed, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let roster = Arc::new(InMemoryRoster::new(seed::load(config.seed_path.as_deref())?));
    let app = http::router(AppState::new(roster), &config.static_dir);

    let addr = config.addr();
    tracing::info!("Activities API: http://{}/ (docs at /docs, GraphQL at /gql)", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
