//! Channel-backed platform bridge for embedding hosts.
//!
//! Every bridge call becomes a [`HostRequest`] on an unbounded channel. The
//! host (a web view shim, a bot frontend, a test) drains the receiver and
//! answers confirmations through the attached oneshot responder.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::error::{BridgeError, Result};
use crate::port::{Confirmation, PlatformBridge};

/// A request for the host to act on.
#[derive(Debug)]
pub enum HostRequest {
    Ready,
    Expand,
    SetHeaderColor(String),
    SetBackgroundColor(String),
    Alert(String),
    Confirm {
        text: String,
        respond: oneshot::Sender<Confirmation>,
    },
}

/// Platform bridge that forwards calls to a host over a channel.
#[derive(Debug, Clone)]
pub struct ChannelBridge {
    sender: mpsc::UnboundedSender<HostRequest>,
}

impl ChannelBridge {
    /// Create a bridge and the receiver the host drains.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HostRequest>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    fn send(&self, request: HostRequest) -> Result<()> {
        self.sender.send(request).map_err(|_| {
            warn!("Host channel closed");
            BridgeError::Unavailable("host disconnected".into()).into()
        })
    }
}

#[async_trait]
impl PlatformBridge for ChannelBridge {
    async fn ready(&self) -> Result<()> {
        self.send(HostRequest::Ready)
    }

    async fn expand(&self) -> Result<()> {
        self.send(HostRequest::Expand)
    }

    async fn set_header_color(&self, color: &str) -> Result<()> {
        self.send(HostRequest::SetHeaderColor(color.to_string()))
    }

    async fn set_background_color(&self, color: &str) -> Result<()> {
        self.send(HostRequest::SetBackgroundColor(color.to_string()))
    }

    async fn show_alert(&self, text: &str) -> Result<()> {
        self.send(HostRequest::Alert(text.to_string()))
    }

    async fn show_confirm(&self, text: &str) -> Result<Confirmation> {
        let (respond, answer) = oneshot::channel();
        self.send(HostRequest::Confirm {
            text: text.to_string(),
            respond,
        })?;

        match answer.await {
            Ok(confirmation) => Ok(confirmation),
            Err(_) => {
                debug!("Confirmation responder dropped, treating as declined");
                Ok(Confirmation::Declined)
            }
        }
    }

    fn name(&self) -> &'static str {
        "channel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn confirm_round_trips_through_host() {
        let (bridge, mut host) = ChannelBridge::new();
        let host_task = tokio::spawn(async move {
            match host.recv().await {
                Some(HostRequest::Confirm { text, respond }) => {
                    assert_eq!(text, "Proceed?");
                    let _ = respond.send(Confirmation::Accepted);
                }
                other => panic!("unexpected request: {other:?}"),
            }
        });

        let answer = bridge.show_confirm("Proceed?").await.unwrap();
        assert_eq!(answer, Confirmation::Accepted);
        host_task.await.unwrap();
    }

    #[tokio::test]
    async fn dropped_responder_is_declined() {
        let (bridge, mut host) = ChannelBridge::new();
        let host_task = tokio::spawn(async move {
            // Receive and drop the request without answering.
            let _ = host.recv().await;
        });

        let answer = bridge.show_confirm("Proceed?").await.unwrap();
        assert_eq!(answer, Confirmation::Declined);
        host_task.await.unwrap();
    }

    #[tokio::test]
    async fn closed_host_is_a_bridge_error() {
        let (bridge, host) = ChannelBridge::new();
        drop(host);
        let err = bridge.show_alert("hello").await.unwrap_err();
        assert!(matches!(err, Error::Bridge(BridgeError::Unavailable(_))));
    }
}
