//! Château Quest player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chateauquest_player=debug,view=info,map=info,audio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Château Quest player");

    let config = chateauquest_player::runner::config::ClientConfig::from_env();
    chateauquest_player::infrastructure::terminal::run(config).await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Château Quest player");

    if let Err(e) = chateauquest_player::infrastructure::dom::boot() {
        tracing::error!(error = %e, "Failed to bind to the game page");
    }
}
