use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use forum_mock::shell::{build_store, config::MockConfig};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = MockConfig::from_env().context("reading forum mock configuration")?;
    let store = build_store(&config);
    let snapshot = store.snapshot();

    tracing::info!(
        users = snapshot.users.len(),
        topics = snapshot.topics.len(),
        threads = snapshot.threads.len(),
        comments = snapshot.comments.len(),
        "forum mock store ready"
    );

    let json = serde_json::to_string_pretty(&snapshot).context("serializing store snapshot")?;
    println!("{json}");
    Ok(())
}
