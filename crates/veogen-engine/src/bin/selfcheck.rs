use std::path::Path;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use veogen_engine::EngineConfig;
use veogen_provider::credential::API_KEY_VAR;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true))
        .with(EnvFilter::from_default_env())
        .init();

    let config = EngineConfig::from_env();

    println!(
        "veogen-selfcheck: starting with work_dir={}",
        config.work_dir
    );
    ensure_workdir(&config.work_dir).await?;
    ensure_env_present(&[API_KEY_VAR])?;

    println!(
        "veogen-selfcheck: poll interval={:?}, max_attempts={:?}",
        config.poll.interval, config.poll.max_attempts
    );
    println!("veogen-selfcheck: ok");
    Ok(())
}

async fn ensure_workdir<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}

fn ensure_env_present(vars: &[&str]) -> anyhow::Result<()> {
    for var in vars {
        if std::env::var(var).is_err() {
            return Err(anyhow::anyhow!("missing required env var {}", var));
        }
    }
    Ok(())
}
