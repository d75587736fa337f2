use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::sync::Arc;
use storefront::auth::AuthKeys;
use storefront::config::AppConfig;
use storefront::gateway::{self, AppState};
use storefront::lifecycle::{setup_tracing, OrderSystem};
use storefront::model::{ProductCreate, UserCreate};
use storefront::persistence::Snapshot;
use tokio::net::TcpListener;
use tracing::{info, info_span, warn, Instrument};

/// A buyer and a few products so a fresh instance can take orders right away.
async fn seed_demo(system: &OrderSystem, auth: &AuthKeys) -> Result<()> {
    let buyer = system
        .user_client
        .create_user(UserCreate::new("demo", "demo@example.com"))
        .await?;

    let catalogue = [
        ("Desk Lamp", "Adjustable LED desk lamp", "home", 2499, 12),
        ("Tea Kettle", "1.7 l stainless steel kettle", "kitchen", 3450, 5),
        ("Notebook", "A5 dotted notebook", "office", 650, 40),
    ];
    for (name, description, category, cents, stock) in catalogue {
        system
            .product_client
            .create_product(ProductCreate {
                name: name.into(),
                description: description.into(),
                category: category.into(),
                price: Decimal::new(cents, 2),
                stock,
                image_url: None,
                created_by: buyer,
            })
            .await?;
    }

    let token = auth.issue(buyer)?;
    info!(user_id = %buyer, %token, "Demo data seeded");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    setup_tracing(&config.log_level, config.use_json);

    let snapshot = match &config.data_file {
        Some(path) => Snapshot::load(path)?,
        None => Snapshot::default(),
    };
    let fresh = snapshot.is_empty();

    let system = OrderSystem::from_snapshot(&config.store, snapshot);
    let auth = AuthKeys::new(&config.auth.jwt_secret, config.auth.token_ttl_hours);

    if fresh {
        seed_demo(&system, &auth)
            .instrument(info_span!("demo_seed"))
            .await?;
    }

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "Storefront listening");

    let state = Arc::new(AppState::new(&system, auth));
    gateway::serve(listener, state, shutdown_signal()).await?;

    if let Some(path) = &config.data_file {
        system.snapshot().await?.save(path)?;
    }
    system.shutdown().await?;
    Ok(())
}
