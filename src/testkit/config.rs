//! Canonical test configurations.
//!
//! Single source of truth for the config and controller used across tests.

use std::sync::Arc;

use super::bridge::ScriptedBridge;
use crate::adapter::outbound::backend::MockBackend;
use crate::application::{MiniApp, MiniAppSettings};
use crate::infrastructure::config::settings::Config;
use crate::port::ExchangeBackend;

/// Built-in defaults: demo rates, BTC/USDT, 1000 slider balance.
pub fn config() -> Config {
    Config::default()
}

/// Session settings derived from [`config`].
pub fn settings() -> MiniAppSettings {
    config()
        .mini_app_settings()
        .expect("default config is valid")
}

/// A controller on the mock backend, plus a handle on its bridge.
pub fn mini_app(bridge: ScriptedBridge) -> (MiniApp, ScriptedBridge) {
    mini_app_with(bridge, Arc::new(MockBackend::default()))
}

/// A controller on an explicit backend, plus a handle on its bridge.
pub fn mini_app_with(
    bridge: ScriptedBridge,
    backend: Arc<dyn ExchangeBackend>,
) -> (MiniApp, ScriptedBridge) {
    let app = MiniApp::new(settings(), Arc::new(bridge.clone()), backend);
    (app, bridge)
}
