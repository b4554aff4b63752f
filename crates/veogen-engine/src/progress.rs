//! Progress reporting for generation runs.
//!
//! A run emits [`ProgressEvent`]s through a caller-supplied callback so the
//! workflow stays decoupled from the transport (UI callback, WebSocket,
//! logging). A bounded-channel pair is provided for callers that prefer
//! polling a stream of events.

use tokio::sync::mpsc;

use veogen_models::ProgressEvent;

/// A callback that discards all events.
pub fn noop() -> impl Fn(ProgressEvent) + Send + Sync {
    |_| {}
}

/// Adapt a channel sender into a progress callback.
///
/// Events are forwarded with `try_send`; if the receiver lags behind, events
/// are dropped rather than blocking the run.
pub fn forward(sender: ProgressSender) -> impl Fn(ProgressEvent) + Send + Sync {
    move |event| sender.send(event)
}

/// Sending half of a progress channel.
#[derive(Clone)]
pub struct ProgressSender {
    tx: mpsc::Sender<ProgressEvent>,
}

impl ProgressSender {
    /// Send a progress event (non-blocking).
    pub fn send(&self, event: ProgressEvent) {
        // Drop events if the channel is full
        let _ = self.tx.try_send(event);
    }
}

/// Receiving half of a progress channel.
pub struct ProgressReceiver {
    rx: mpsc::Receiver<ProgressEvent>,
}

impl ProgressReceiver {
    /// Receive the next progress event.
    pub async fn recv(&mut self) -> Option<ProgressEvent> {
        self.rx.recv().await
    }

    /// Try to receive a progress event without blocking.
    pub fn try_recv(&mut self) -> Option<ProgressEvent> {
        self.rx.try_recv().ok()
    }
}

/// Create a progress channel pair.
pub fn channel() -> (ProgressSender, ProgressReceiver) {
    let (tx, rx) = mpsc::channel(64);
    (ProgressSender { tx }, ProgressReceiver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_forwards_events_in_order() {
        let (sender, mut receiver) = channel();
        let callback = forward(sender);

        callback(ProgressEvent::SubmittingPrimary);
        callback(ProgressEvent::RenderingPrimary);
        callback(ProgressEvent::Complete);

        assert_eq!(
            receiver.recv().await.unwrap(),
            ProgressEvent::SubmittingPrimary
        );
        assert_eq!(
            receiver.recv().await.unwrap(),
            ProgressEvent::RenderingPrimary
        );
        assert_eq!(receiver.recv().await.unwrap(), ProgressEvent::Complete);
    }

    #[test]
    fn test_noop_never_panics() {
        let callback = noop();
        callback(ProgressEvent::Finalizing);
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (sender, receiver) = channel();
        drop(receiver);
        // Should not panic
        sender.send(ProgressEvent::Complete);
    }
}
