use std::sync::Arc;

use maitred_server::{app, bootstrap, AppState, Config};
use maitred_store::MemoryStore;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maitred_server=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;
    let options = config.auth_options();
    options.validate().map_err(anyhow::Error::msg)?;

    let state = AppState::new(Arc::new(MemoryStore::new()), options);
    bootstrap::seed_super_admin(&state, &config.admin_email, &config.admin_password).await?;

    let router = app::build_router(state);
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "maitred-server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
