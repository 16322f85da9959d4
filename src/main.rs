use anyhow::Context;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use supplier_registry::{
    api::create_router,
    auth::TokenService,
    config::Config,
    db::{create_pool, run_migrations, users},
    observability::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize tracing/logging
    init_tracing(&config.observability);

    tracing::info!("Starting supplier registry service");
    tracing::info!("Configuration loaded: {:?}", config.server);

    // Create database connection pool
    let db_pool = create_pool(&config.database).await?;

    // Run database migrations
    run_migrations(&db_pool).await?;

    // Seed the bootstrap admin account
    users::ensure_admin(&db_pool, &config.auth.admin_username, &config.auth.admin_password)
        .await
        .context("Failed to seed admin user")?;

    // Build the shared token service
    let token_service = Arc::new(TokenService::new(&config.auth)?);

    // Create router
    let app = create_router(db_pool, token_service);

    // Bind server
    let host: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server host '{}'", config.server.host))?;
    let addr = SocketAddr::new(host, config.server.port);
    tracing::info!("Listening on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Supplier registry is ready to accept requests");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
