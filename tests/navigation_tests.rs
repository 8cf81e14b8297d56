use std::sync::Arc;

use bridge_exchange::application::{MORE_MESSAGE, PAY_MESSAGE};
use bridge_exchange::domain::{AssetFilter, ExchangeTab, Modal, Screen};
use bridge_exchange::port::{Action, PlatformEvent};
use bridge_exchange::testkit::backend::FailingBackend;
use bridge_exchange::testkit::bridge::{BridgeCall, ScriptedBridge};
use bridge_exchange::testkit::config::{mini_app, mini_app_with};

#[tokio::test]
async fn start_sets_up_host_and_loads_user() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.start().await;

    assert_eq!(
        bridge.calls(),
        vec![
            BridgeCall::Ready,
            BridgeCall::Expand,
            BridgeCall::HeaderColor("#1a0b2e".into()),
            BridgeCall::BackgroundColor("#1a0b2e".into()),
        ]
    );
    let frame = app.frame();
    assert_eq!(frame.screen, Screen::Home);
    assert_eq!(frame.badge.as_deref(), Some("Level 1"));
    assert_eq!(app.context().balances.len(), 3);
}

#[tokio::test]
async fn start_survives_backend_failure() {
    let (mut app, bridge) = mini_app_with(ScriptedBridge::new(), Arc::new(FailingBackend));

    app.start().await;

    assert!(app.context().user.is_none());
    assert!(bridge.alerts().is_empty());
    assert_eq!(app.frame().badge, None);
}

#[tokio::test]
async fn missing_host_reports_generic_error_and_still_starts() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new().failing_host_setup());

    app.start().await;

    assert_eq!(bridge.alerts(), vec!["An error occurred. Please try again."]);
    assert_eq!(app.context().view.screen, Screen::Home);
    assert!(app.context().user.is_some());
}

#[tokio::test]
async fn screens_switch_without_touching_modal() {
    let (mut app, _bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::ShowModal(Modal::Withdraw)).await;
    app.dispatch(Action::ShowScreen(Screen::Games)).await;

    let view = &app.context().view;
    assert_eq!(view.screen, Screen::Games);
    assert_eq!(view.modal, Some(Modal::Withdraw));
}

#[tokio::test]
async fn buy_shortcut_opens_deposit() {
    let (mut app, _bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::ShowModal(Modal::Withdraw)).await;
    app.dispatch(Action::ShowBuy).await;
    assert_eq!(app.context().view.modal, Some(Modal::Deposit));

    app.dispatch(Action::CloseModal(Modal::Withdraw)).await;
    assert_eq!(app.context().view.modal, Some(Modal::Deposit));
    app.dispatch(Action::CloseModal(Modal::Deposit)).await;
    assert_eq!(app.context().view.modal, None);
}

#[tokio::test]
async fn pay_more_and_services_alert() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::ShowPay).await;
    app.dispatch(Action::ShowMore).await;
    app.dispatch(Action::SelectService("netflix".into())).await;
    app.dispatch(Action::SelectService("hulu".into())).await;

    assert_eq!(
        bridge.alerts(),
        vec![
            PAY_MESSAGE.to_string(),
            MORE_MESSAGE.to_string(),
            "Selected: Netflix Subscriptions\nThis would open the service selection interface.".to_string(),
            "Unknown service: hulu".to_string(),
        ]
    );
}

#[tokio::test]
async fn tabs_and_filters() {
    let (mut app, _bridge) = mini_app(ScriptedBridge::new());
    app.start().await;

    app.dispatch(Action::ShowScreen(Screen::Exchange)).await;
    app.dispatch(Action::ShowTab(ExchangeTab::BuySell)).await;
    assert_eq!(app.context().view.exchange_tab, ExchangeTab::BuySell);

    app.dispatch(Action::ShowScreen(Screen::Assets)).await;
    assert_eq!(app.frame().balances.len(), 3);
    app.dispatch(Action::ToggleAssetType(AssetFilter::Fiat)).await;
    assert!(app.frame().balances.is_empty());
}

#[tokio::test]
async fn platform_events_change_nothing() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());
    let before = app.frame();

    app.dispatch(Action::Platform(PlatformEvent::ViewportChanged)).await;
    app.dispatch(Action::Platform(PlatformEvent::ThemeChanged)).await;

    assert_eq!(app.frame(), before);
    assert!(bridge.calls().is_empty());
}
