use anyhow::Context;
use axisbind_replay::config::Config;
use axisbind_replay::replay;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    let report = replay::run(&config, shutdown)
        .await
        .context("invalid replay configuration")?;
    if report.rejected > 0 {
        tracing::warn!(rejected = report.rejected, "some samples were rejected");
    }
    Ok(())
}
