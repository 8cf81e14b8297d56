//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::backend::MockBackend;
use crate::application::MiniApp;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::backend::ExchangeBackend;
use crate::port::outbound::bridge::PlatformBridge;

/// Build the exchange backend from configuration.
pub fn build_backend(config: &Config) -> Arc<dyn ExchangeBackend> {
    Arc::new(MockBackend::new(
        MockBackend::demo_profile(),
        config.wallet.balances.clone(),
    ))
}

/// Build a controller wired to the given bridge and the configured backend.
#[allow(clippy::result_large_err)]
pub fn build_mini_app(config: &Config, bridge: Arc<dyn PlatformBridge>) -> Result<MiniApp> {
    let backend = build_backend(config);
    build_mini_app_with(config, bridge, backend)
}

/// Build a controller with an explicit backend.
#[allow(clippy::result_large_err)]
pub fn build_mini_app_with(
    config: &Config,
    bridge: Arc<dyn PlatformBridge>,
    backend: Arc<dyn ExchangeBackend>,
) -> Result<MiniApp> {
    let settings = config.mini_app_settings()?;
    info!(
        pair = %settings.pair,
        rates = settings.rates.len(),
        bridge = bridge.name(),
        backend = backend.name(),
        "Mini-app wired"
    );
    Ok(MiniApp::new(settings, bridge, backend))
}
