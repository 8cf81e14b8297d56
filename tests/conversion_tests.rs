use bridge_exchange::application::EXCHANGE_EXECUTED;
use bridge_exchange::port::{Action, Confirmation};
use bridge_exchange::testkit::bridge::ScriptedBridge;
use bridge_exchange::testkit::config::mini_app;

#[tokio::test]
async fn send_amount_recalculates_receive() {
    let (mut app, _bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetSendAmount("1000".into())).await;

    let form = &app.context().exchange;
    assert_eq!(form.send_currency.as_str(), "USDT");
    assert_eq!(form.receive_currency.as_str(), "BTC");
    assert_eq!(form.receive_amount, "0.02300000");
}

#[tokio::test]
async fn currency_change_recalculates_receive() {
    let (mut app, _bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetSendAmount("1".into())).await;
    app.dispatch(Action::SetSendCurrency("btc".into())).await;
    app.dispatch(Action::SetReceiveCurrency("USDT".into())).await;

    assert_eq!(app.context().exchange.receive_amount, "43000.00000000");
}

#[tokio::test]
async fn blank_or_garbage_amount_counts_as_zero() {
    let (mut app, _bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetSendAmount("abc".into())).await;
    assert_eq!(app.context().exchange.receive_amount, "0.00000000");

    app.dispatch(Action::SetSendAmount(String::new())).await;
    assert_eq!(app.context().exchange.receive_amount, "0.00000000");
}

#[tokio::test]
async fn unknown_pair_leaves_receive_unchanged() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetSendAmount("2".into())).await;
    let before = app.context().exchange.receive_amount.clone();
    app.dispatch(Action::SetReceiveCurrency("USDT".into())).await;

    assert_eq!(app.context().exchange.receive_amount, before);
    assert!(bridge.alerts().is_empty());
}

#[tokio::test]
async fn execute_requires_both_amounts() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::ExecuteExchange).await;

    assert_eq!(bridge.last_alert().as_deref(), Some("Please enter amounts"));
    assert!(bridge.confirms().is_empty());
}

#[tokio::test]
async fn accepted_exchange_clears_amounts() {
    let bridge = ScriptedBridge::new().with_answers([Confirmation::Accepted]);
    let (mut app, bridge) = mini_app(bridge);

    app.dispatch(Action::SetSendCurrency("BTC".into())).await;
    app.dispatch(Action::SetReceiveCurrency("USDT".into())).await;
    app.dispatch(Action::SetSendAmount("1".into())).await;
    app.dispatch(Action::ExecuteExchange).await;

    assert_eq!(bridge.confirms(), vec!["Exchange 1 BTC for 43000.00000000 USDT?"]);
    assert_eq!(bridge.last_alert().as_deref(), Some(EXCHANGE_EXECUTED));
    let form = &app.context().exchange;
    assert!(form.send_amount.is_empty());
    assert!(form.receive_amount.is_empty());
    assert_eq!(form.send_currency.as_str(), "BTC");
}

#[tokio::test]
async fn declined_exchange_keeps_amounts() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetSendAmount("100".into())).await;
    app.dispatch(Action::ExecuteExchange).await;

    assert_eq!(bridge.confirms().len(), 1);
    assert!(bridge.alerts().is_empty());
    assert_eq!(app.context().exchange.send_amount, "100");
}

#[tokio::test]
async fn non_positive_send_amount_is_rejected() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetSendAmount("-5".into())).await;
    app.dispatch(Action::ExecuteExchange).await;

    assert_eq!(bridge.last_alert().as_deref(), Some("Please enter a valid amount"));
    assert!(bridge.confirms().is_empty());
}

#[tokio::test]
async fn oversized_send_amount_leaves_receive_and_rejects_swap() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetSendCurrency("BTC".into())).await;
    app.dispatch(Action::SetReceiveCurrency("USDT".into())).await;
    app.dispatch(Action::SetSendAmount("1".into())).await;
    app.dispatch(Action::SetSendAmount("79228162514264337593543950335".into()))
        .await;
    assert_eq!(app.context().exchange.receive_amount, "43000.00000000");

    // Fits a Decimal, but the product cannot keep eight fractional digits.
    app.dispatch(Action::SetSendAmount("100000000000000000000".into()))
        .await;
    assert_eq!(app.context().exchange.receive_amount, "43000.00000000");

    app.dispatch(Action::ExecuteExchange).await;
    assert_eq!(bridge.alerts(), vec!["Please enter a valid amount"]);
    assert!(bridge.confirms().is_empty());
}

#[tokio::test]
async fn unknown_pair_on_execute_names_the_pair() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::SetSendAmount("1".into())).await;
    app.dispatch(Action::SetReceiveCurrency("USDT".into())).await;
    app.dispatch(Action::ExecuteExchange).await;

    assert_eq!(
        bridge.alerts(),
        vec!["Conversion from USDT to USDT is not available"]
    );
}
