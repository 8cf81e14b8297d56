use std::sync::Arc;

use bridge_exchange::domain::Modal;
use bridge_exchange::port::Action;
use bridge_exchange::testkit::backend::FailingBackend;
use bridge_exchange::testkit::bridge::ScriptedBridge;
use bridge_exchange::testkit::config::{mini_app, mini_app_with};

#[tokio::test]
async fn deposit_alerts_and_closes_modal() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::ShowModal(Modal::Deposit)).await;
    app.dispatch(Action::SetDepositAsset("btc".into())).await;
    app.dispatch(Action::SetDepositAmount("0.25".into())).await;
    app.dispatch(Action::CreateDeposit).await;

    assert_eq!(
        bridge.last_alert().as_deref(),
        Some("Creating deposit: 0.25 BTC\nThis would create a CryptoPay invoice.")
    );
    assert_eq!(app.context().view.modal, None);
    assert!(app.context().deposit.amount.is_empty());
}

#[tokio::test]
async fn deposit_rejects_bad_amount_and_stays_open() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::ShowModal(Modal::Deposit)).await;
    app.dispatch(Action::SetDepositAmount("0".into())).await;
    app.dispatch(Action::CreateDeposit).await;

    assert_eq!(bridge.alerts(), vec!["Please enter a valid amount"]);
    assert!(app.context().view.is_open(Modal::Deposit));
}

#[tokio::test]
async fn withdrawal_checks_amount_before_address() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::CreateWithdraw).await;
    app.dispatch(Action::SetWithdrawAmount("10".into())).await;
    app.dispatch(Action::SetWithdrawAddress("   ".into())).await;
    app.dispatch(Action::CreateWithdraw).await;

    assert_eq!(
        bridge.alerts(),
        vec!["Please enter a valid amount", "Please enter withdrawal address"]
    );
}

#[tokio::test]
async fn withdrawal_alerts_and_clears_form() {
    let (mut app, bridge) = mini_app(ScriptedBridge::new());

    app.dispatch(Action::ShowModal(Modal::Withdraw)).await;
    app.dispatch(Action::SetWithdrawAmount("10".into())).await;
    app.dispatch(Action::SetWithdrawAddress("TXyz123".into())).await;
    app.dispatch(Action::CreateWithdraw).await;

    assert_eq!(
        bridge.last_alert().as_deref(),
        Some("Creating withdrawal: 10 USDT to TXyz123\nThis would create a withdrawal request.")
    );
    let ctx = app.context();
    assert_eq!(ctx.view.modal, None);
    assert!(ctx.withdraw.amount.is_empty());
    assert!(ctx.withdraw.address.is_empty());
}

#[tokio::test]
async fn backend_failure_alerts_flow_message() {
    let (mut app, bridge) = mini_app_with(ScriptedBridge::new(), Arc::new(FailingBackend));

    app.dispatch(Action::ShowModal(Modal::Deposit)).await;
    app.dispatch(Action::SetDepositAmount("5".into())).await;
    app.dispatch(Action::CreateDeposit).await;
    app.dispatch(Action::SetWithdrawAmount("5".into())).await;
    app.dispatch(Action::SetWithdrawAddress("addr".into())).await;
    app.dispatch(Action::CreateWithdraw).await;

    assert_eq!(
        bridge.alerts(),
        vec!["Error creating deposit", "Error creating withdrawal"]
    );
    assert!(app.context().view.is_open(Modal::Deposit));
}

#[tokio::test]
async fn failed_order_gets_generic_message() {
    let (mut app, bridge) = mini_app_with(ScriptedBridge::new(), Arc::new(FailingBackend));
    bridge.answer(bridge_exchange::port::Confirmation::Accepted);

    app.dispatch(Action::SetOrderAmount("1".into())).await;
    app.dispatch(Action::PlaceOrder).await;

    assert_eq!(
        bridge.last_alert().as_deref(),
        Some("An error occurred. Please try again.")
    );
    assert_eq!(app.context().order.amount, "1");
}
