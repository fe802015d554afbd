use anyhow::Context;
use product_catalog::app::products::{repository::seed_sample_products, MemoryProductRepository, ProductRepository};
use product_catalog::infrastructure::config::{load_config, Config, StoreBackend};
use product_catalog::infrastructure::logger::Logger;
use product_catalog::{router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config().context("failed to load configuration")?;
    config.validate()?;

    Logger::init(&config.logging)?;

    match source {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    let repository = build_repository(&config).await?;
    if config.store.seed_sample_data {
        seed_sample_products(repository.as_ref()).await?;
    }

    let state = AppState::new(repository, config.store.backend.as_str());
    let app = router(state, &config.http);

    let listener = TcpListener::bind((config.http.bind_address.as_str(), config.http.port))
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.http.bind_address, config.http.port
            )
        })?;
    let addr = listener.local_addr()?;

    info!("🚀 Product catalog running on http://{}", addr);
    info!("   store backend: {}", config.store.backend.as_str());

    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match config.store.backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryProductRepository::new())),
        #[cfg(feature = "database")]
        StoreBackend::Postgres => {
            use product_catalog::app::products::pg_repository::PgProductRepository;
            use product_catalog::infrastructure::database::DatabaseManager;

            let database = DatabaseManager::new(&config.store)
                .await
                .context("failed to connect to database")?;
            database.create_tables().await?;
            Ok(Arc::new(PgProductRepository::new(database.get_pool().clone())))
        }
        #[cfg(not(feature = "database"))]
        StoreBackend::Postgres => {
            anyhow::bail!("the postgres backend requires the `database` feature")
        }
    }
}
