// SPDX-License-Identifier: GPL-3.0-only

//! Broadcast message channel connecting the dropdown controller with
//! external orchestrators.
//!
//! The channel is an explicit publish/subscribe object owned by whichever
//! party composes the dropdown and its popover. It is a live fan-out, not a
//! queue: every active subscriber sees every message published after it
//! subscribed, and nothing is replayed to late subscribers. Multiple
//! producers may publish on clones of the same channel; independent channel
//! instances never cross-talk.
//!
//! Sharing one channel between several dropdowns drives them in sync, which
//! is the supported way to orchestrate multiple instances externally.

use crate::app_settings::CHANNEL_CAPACITY;
use crate::message::DropdownMessage;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

/// Result type for channel operations.
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Errors that can occur when publishing on a message channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The message was dropped because no subscriber is listening.
    NoSubscribers,
}

impl std::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelError::NoSubscribers => {
                write!(f, "message dropped: no active channel subscribers")
            }
        }
    }
}

impl std::error::Error for ChannelError {}

/// A cloneable handle for publishing and subscribing to dropdown messages.
///
/// Cloning the handle shares the underlying channel; constructing a new one
/// creates an independent channel.
#[derive(Debug, Clone)]
pub struct MessageChannel {
    tx: broadcast::Sender<DropdownMessage>,
}

impl MessageChannel {
    /// Create a new, independent message channel with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    /// Create a new message channel with an explicit buffer capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a message to every active subscriber.
    ///
    /// Returns the number of subscribers the message was delivered to, or
    /// [`ChannelError::NoSubscribers`] if nobody is listening.
    pub fn publish(&self, message: DropdownMessage) -> ChannelResult<usize> {
        self.tx
            .send(message)
            .map_err(|_| ChannelError::NoSubscribers)
    }

    /// Subscribe to messages published from now on.
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    /// The number of currently active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for MessageChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// A live subscription to a [`MessageChannel`].
///
/// Dropping the subscription unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    rx: broadcast::Receiver<DropdownMessage>,
}

impl Subscription {
    /// Receive the next pending message without waiting.
    ///
    /// Returns `None` when no message is pending or all publishers are gone.
    /// If the subscriber lagged behind the channel capacity, the skipped
    /// messages are logged and the oldest retained message is returned.
    pub fn try_next(&mut self) -> Option<DropdownMessage> {
        loop {
            match self.rx.try_recv() {
                Ok(message) => return Some(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!("Message subscriber lagged; skipped {} messages", skipped);
                }
            }
        }
    }

    /// Wait for the next message.
    ///
    /// Returns `None` once every publishing handle has been dropped.
    pub async fn next(&mut self) -> Option<DropdownMessage> {
        loop {
            match self.rx.recv().await {
                Ok(message) => return Some(message),
                Err(RecvError::Closed) => return None,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Message subscriber lagged; skipped {} messages", skipped);
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: fan-out delivery to multiple subscribers
    ///
    /// Every active subscriber should receive every published message.
    #[test]
    fn test_fan_out_to_all_subscribers() {
        let channel = MessageChannel::new();
        let mut first = channel.subscribe();
        let mut second = channel.subscribe();

        let delivered = channel
            .publish(DropdownMessage::Open)
            .expect("publish should succeed with active subscribers");
        assert_eq!(delivered, 2, "Message should reach both subscribers");

        assert_eq!(first.try_next(), Some(DropdownMessage::Open));
        assert_eq!(second.try_next(), Some(DropdownMessage::Open));
    }

    /// Test: no replay for late subscribers
    ///
    /// A subscriber attached after a message was published must not see it.
    #[test]
    fn test_late_subscriber_sees_nothing() {
        let channel = MessageChannel::new();
        let mut early = channel.subscribe();

        channel
            .publish(DropdownMessage::Close)
            .expect("publish should succeed");

        let mut late = channel.subscribe();
        assert_eq!(
            late.try_next(),
            None,
            "Late subscriber should not receive earlier messages"
        );
        assert_eq!(early.try_next(), Some(DropdownMessage::Close));
    }

    /// Test: independent channels do not cross-talk
    #[test]
    fn test_independent_channels_do_not_cross_talk() {
        let first = MessageChannel::new();
        let second = MessageChannel::new();
        let mut first_sub = first.subscribe();
        let mut second_sub = second.subscribe();

        first
            .publish(DropdownMessage::Open)
            .expect("publish should succeed");

        assert_eq!(first_sub.try_next(), Some(DropdownMessage::Open));
        assert_eq!(
            second_sub.try_next(),
            None,
            "Unrelated channel should stay silent"
        );
    }

    /// Test: cloned handles share the same channel
    #[test]
    fn test_cloned_handles_share_channel() {
        let channel = MessageChannel::new();
        let publisher = channel.clone();
        let mut sub = channel.subscribe();

        publisher
            .publish(DropdownMessage::Reposition)
            .expect("publish through clone should succeed");
        assert_eq!(sub.try_next(), Some(DropdownMessage::Reposition));
    }

    /// Test: publishing without subscribers reports an error
    #[test]
    fn test_publish_without_subscribers() {
        let channel = MessageChannel::new();
        assert_eq!(
            channel.publish(DropdownMessage::Open),
            Err(ChannelError::NoSubscribers)
        );
        assert_eq!(channel.subscriber_count(), 0);
    }

    /// Test: lagged subscriber recovers and still sees the newest traffic
    #[test]
    fn test_lagged_subscriber_recovers() {
        crate::test_support::init_logging();
        let channel = MessageChannel::with_capacity(1);
        let mut sub = channel.subscribe();

        channel.publish(DropdownMessage::Open).unwrap();
        channel.publish(DropdownMessage::Reposition).unwrap();
        channel.publish(DropdownMessage::Close).unwrap();

        let mut drained = Vec::new();
        while let Some(message) = sub.try_next() {
            drained.push(message);
        }

        assert_eq!(
            drained.last(),
            Some(&DropdownMessage::Close),
            "The most recent message must survive the lag"
        );
    }

    /// Test: async receive delivers published messages in order
    #[tokio::test]
    async fn test_async_receive_in_order() {
        let channel = MessageChannel::new();
        let mut sub = channel.subscribe();

        channel.publish(DropdownMessage::Open).unwrap();
        channel.publish(DropdownMessage::FocusFirstItem).unwrap();

        assert_eq!(sub.next().await, Some(DropdownMessage::Open));
        assert_eq!(sub.next().await, Some(DropdownMessage::FocusFirstItem));
    }

    /// Test: subscription ends when all publishers are dropped
    #[tokio::test]
    async fn test_subscription_closes_when_publishers_drop() {
        let channel = MessageChannel::new();
        let mut sub = channel.subscribe();
        drop(channel);

        assert_eq!(
            sub.next().await,
            None,
            "Receive should end once every publisher is gone"
        );
    }

    #[test]
    fn test_channel_error_display() {
        assert_eq!(
            ChannelError::NoSubscribers.to_string(),
            "message dropped: no active channel subscribers"
        );
    }
}
