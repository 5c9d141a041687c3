//! Toast notifications.

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

#[cfg(feature = "async")]
impl Notifier for mpsc::UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        if let Err(_e) = self.send(notification) {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to deliver notification: {}", _e);
        }
    }
}

/// Drops the notification when the channel is full.
#[cfg(feature = "async")]
impl Notifier for mpsc::Sender<Notification> {
    fn notify(&self, notification: Notification) {
        if let Err(_e) = self.try_send(notification) {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to deliver notification: {}", _e);
        }
    }
}

#[cfg(all(test, feature = "async"))]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_sender_delivers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.notify(Notification::new("Hello", "World"));
        assert_eq!(rx.try_recv().ok(), Some(Notification::new("Hello", "World")));
    }

    #[test]
    fn test_bounded_sender_drops_when_full() {
        let (tx, mut rx) = mpsc::channel(1);
        tx.notify(Notification::new("first", ""));
        tx.notify(Notification::new("second", ""));
        assert_eq!(rx.try_recv().map(|n| n.title).ok(), Some("first".to_string()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_channel_is_ignored() {
        let (tx, rx) = mpsc::unbounded_channel::<Notification>();
        drop(rx);
        tx.notify(Notification::new("lost", ""));
    }
}
