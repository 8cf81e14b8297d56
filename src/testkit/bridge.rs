//! Recording [`PlatformBridge`] for tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{BridgeError, Result};
use crate::port::{Confirmation, PlatformBridge};

/// One call made against the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCall {
    Ready,
    Expand,
    HeaderColor(String),
    BackgroundColor(String),
    Alert(String),
    Confirm(String),
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<BridgeCall>,
    answers: VecDeque<Confirmation>,
}

/// A bridge that records every call and answers confirmations from a queue.
///
/// Confirmations past the end of the queue are `Declined`. Clones share
/// state, so a test keeps one handle and gives the other to the controller.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBridge {
    state: Arc<Mutex<State>>,
    fail_host_setup: bool,
}

impl ScriptedBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for upcoming confirmations.
    pub fn with_answers(self, answers: impl IntoIterator<Item = Confirmation>) -> Self {
        self.state.lock().answers.extend(answers);
        self
    }

    /// Make `ready` fail, as when the host script is missing.
    pub fn failing_host_setup(mut self) -> Self {
        self.fail_host_setup = true;
        self
    }

    /// Queue one more answer.
    pub fn answer(&self, answer: Confirmation) {
        self.state.lock().answers.push_back(answer);
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<BridgeCall> {
        self.state.lock().calls.clone()
    }

    /// Alert texts so far, in order.
    pub fn alerts(&self) -> Vec<String> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                BridgeCall::Alert(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Confirmation prompts so far, in order.
    pub fn confirms(&self) -> Vec<String> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                BridgeCall::Confirm(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent alert, if any.
    pub fn last_alert(&self) -> Option<String> {
        self.alerts().pop()
    }

    /// Forget recorded calls, keeping queued answers.
    pub fn clear(&self) {
        self.state.lock().calls.clear();
    }

    fn record(&self, call: BridgeCall) {
        self.state.lock().calls.push(call);
    }
}

#[async_trait]
impl PlatformBridge for ScriptedBridge {
    async fn ready(&self) -> Result<()> {
        if self.fail_host_setup {
            return Err(BridgeError::Unavailable("host script not loaded".into()).into());
        }
        self.record(BridgeCall::Ready);
        Ok(())
    }

    async fn expand(&self) -> Result<()> {
        self.record(BridgeCall::Expand);
        Ok(())
    }

    async fn set_header_color(&self, color: &str) -> Result<()> {
        self.record(BridgeCall::HeaderColor(color.to_string()));
        Ok(())
    }

    async fn set_background_color(&self, color: &str) -> Result<()> {
        self.record(BridgeCall::BackgroundColor(color.to_string()));
        Ok(())
    }

    async fn show_alert(&self, text: &str) -> Result<()> {
        self.record(BridgeCall::Alert(text.to_string()));
        Ok(())
    }

    async fn show_confirm(&self, text: &str) -> Result<Confirmation> {
        let mut state = self.state.lock();
        state.calls.push(BridgeCall::Confirm(text.to_string()));
        Ok(state.answers.pop_front().unwrap_or(Confirmation::Declined))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
