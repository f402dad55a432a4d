use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    retail_observability::init();

    let config = retail_api::config::Config::from_env()?;

    let services = Arc::new(retail_api::app::services::build_services(&config).await?);
    let app = retail_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
