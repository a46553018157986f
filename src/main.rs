use anyhow::Result;
use kenyavax::{Config, Kenya};
use std::env;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(log_level.parse().unwrap_or(Level::INFO.into()))
    });
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) configure ────────────────────────────────────────────────
    let config = Config::from_env();
    info!(
        landing = %config.landing_url,
        output = %config.output_dir.display(),
        "config"
    );

    // ─── 3) fetch, parse, store ──────────────────────────────────────
    let source = Kenya::new(config)?;
    match source.to_csv().await {
        Ok(outcome) => {
            info!(?outcome, "all done");
            Ok(())
        }
        Err(e) => {
            error!("bulletin run failed: {:#}", e);
            Err(e)
        }
    }
}
