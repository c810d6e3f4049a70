use anyhow::Context;
use user_service::{
    config::Config, observability::init_tracing, router::build_router, server::Server,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config).context("failed to initialize tracing")?;

    let state = AppState::new(config.clone());
    let app = build_router(state);

    Server::new(config)
        .serve(app)
        .await
        .context("server terminated with an error")?;

    Ok(())
}
