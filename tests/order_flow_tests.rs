use std::sync::Arc;

use bridge_exchange::adapter::outbound::backend::MockBackend;
use bridge_exchange::application::{MiniApp, ORDER_PLACED};
use bridge_exchange::domain::OrderSide;
use bridge_exchange::port::{Action, Confirmation};
use bridge_exchange::testkit::bridge::ScriptedBridge;
use bridge_exchange::testkit::config::{mini_app, settings};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn limit_order_confirmed_and_placed() {
    let bridge = ScriptedBridge::new().with_answers([Confirmation::Accepted]);
    let (mut app, bridge) = mini_app(bridge);

    app.dispatch(Action::SetOrderAmount("0.5".into())).await;
    app.dispatch(Action::SetOrderPrice("43000".into())).await;
    app.dispatch(Action::PlaceOrder).await;

    assert_eq!(
        bridge.confirms(),
        vec!["Place buy order: 0.5 BTC at 43000 USDT?"]
    );
    assert_eq!(bridge.last_alert().as_deref(), Some(ORDER_PLACED));
    let order = &app.context().order;
    assert!(order.amount.is_empty());
    assert!(order.price.is_empty());
}

#[tokio::test]
async fn market_sell_uses_market_wording() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetOrderSide(OrderSide::Sell)).await;
    app.dispatch(Action::SetOrderAmount("0.1".into())).await;
    app.dispatch(Action::PlaceOrder).await;

    assert_eq!(bridge.confirms(), vec!["Place sell market order: 0.1 BTC?"]);
}

#[tokio::test]
async fn declined_order_keeps_form() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetOrderAmount("0.1".into())).await;
    app.dispatch(Action::PlaceOrder).await;

    assert!(bridge.alerts().is_empty());
    assert_eq!(app.context().order.amount, "0.1");
}

#[tokio::test]
async fn empty_amount_alerts_without_confirm() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::PlaceOrder).await;

    assert_eq!(bridge.alerts(), vec!["Please enter amount"]);
    assert!(bridge.confirms().is_empty());
}

#[tokio::test]
async fn bad_price_alerts() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetOrderAmount("1".into())).await;
    app.dispatch(Action::SetOrderPrice("free".into())).await;
    app.dispatch(Action::PlaceOrder).await;

    assert_eq!(bridge.alerts(), vec!["Please enter a valid price"]);
}

#[tokio::test]
async fn slider_derives_amount_from_balance() {
    let (mut app, _bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetSliderPercent(dec!(50))).await;
    assert_eq!(app.context().order.amount, "500.00");

    app.dispatch(Action::SetSliderPercent(dec!(33.333))).await;
    assert_eq!(app.context().order.amount, "333.33");
}

#[tokio::test]
async fn slider_is_pinned_to_range() {
    let (mut app, _bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetSliderPercent(dec!(150))).await;
    assert_eq!(app.context().order.amount, "1000.00");
    assert_eq!(app.context().order.slider_percent, dec!(100));

    app.dispatch(Action::SetSliderPercent(dec!(-10))).await;
    assert_eq!(app.context().order.amount, "0.00");
}

#[tokio::test]
async fn slider_on_unscalable_balance_alerts_instead_of_panicking() {
    let mut settings = settings();
    settings.available_balance = Decimal::MAX;
    let bridge = ScriptedBridge::new();
    let mut app = MiniApp::new(
        settings,
        Arc::new(bridge.clone()),
        Arc::new(MockBackend::default()),
    );

    app.dispatch(Action::SetSliderPercent(dec!(100))).await;

    assert_eq!(bridge.alerts(), vec!["Please enter a valid amount"]);
    assert!(app.context().order.amount.is_empty());
    assert_eq!(app.context().order.slider_percent, Decimal::ZERO);
}
