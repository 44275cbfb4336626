use anyhow::Context;
use technician_payments::api::{AppState, create_router};
use technician_payments::config::ServiceSettings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ServiceSettings::from_env().context("Failed to read service settings")?;
    let schedule = settings
        .load_schedule()
        .context("Failed to load rate schedule")?;

    tracing::info!(
        schedule = %schedule.name(),
        tiers = schedule.tiers().len(),
        source = %settings
            .rate_schedule_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        "Rate schedule loaded"
    );

    let app = create_router(AppState::new(schedule));
    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind_addr))?;

    tracing::info!(addr = %settings.bind_addr, "Technician payments service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
