//! Login-boundary signalling over a channel
//!
//! The composition root owns the receiving half and decides what "go to the
//! login screen" means (invalidate the session, reset the store, prompt).

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, warn};
use workboard_core::LoginBoundary;

/// A request to return to the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginRedirect {
    pub requested_at: DateTime<Utc>,
}

/// [`LoginBoundary`] that forwards redirects to a receiver
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: mpsc::UnboundedSender<LoginRedirect>,
}

impl ChannelNavigator {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<LoginRedirect>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl LoginBoundary for ChannelNavigator {
    fn redirect_to_login(&self) {
        let redirect = LoginRedirect { requested_at: Utc::now() };
        if self.sender.send(redirect).is_err() {
            warn!("login redirect dropped: no receiver");
        } else {
            debug!("login redirect requested");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn each_redirect_is_delivered() {
        let (navigator, mut receiver) = ChannelNavigator::new();
        navigator.redirect_to_login();
        navigator.clone().redirect_to_login();

        assert!(receiver.recv().await.is_some());
        assert!(receiver.recv().await.is_some());
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn redirect_without_receiver_does_not_panic() {
        let (navigator, receiver) = ChannelNavigator::new();
        drop(receiver);
        navigator.redirect_to_login();
    }
}
