use anyhow::Context;
use pizza_sms::config::Config;
use pizza_sms::domain::MenuCatalog;
use pizza_sms::lifecycle::{setup_tracing, OrderingSystem};
use pizza_sms::webhook;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the variables may come from the process environment.
    let _ = dotenvy::dotenv();
    setup_tracing();

    let config = Config::from_env()?;
    info!(
        bind_addr = %config.bind_addr,
        account_sid = %config.twilio.account_sid,
        actor_buffer = config.actor_buffer,
        "Configuration loaded"
    );

    let catalog = match &config.menu_file {
        Some(path) => MenuCatalog::load(path)
            .with_context(|| format!("loading menu from {}", path.display()))?,
        None => MenuCatalog::pizzeria(),
    };
    info!(items = catalog.len(), "Menu ready");

    let system = OrderingSystem::with_buffer(catalog, config.actor_buffer);
    webhook::serve(config.bind_addr, system.front_desk())
        .await
        .context("webhook server failed")?;

    system.shutdown().await?;
    Ok(())
}
