//! Event channel from UI controls to Actors.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};

/// Sending half of an event stream consumed by one Actor.
///
/// Name relays after what happened at the source, e.g.
/// `add_shadow_button_pressed_relay` or `shadow_property_changed_relay`.
///
/// ```rust
/// let (delete_shadow_button_pressed_relay, mut stream) = relay::<LayerId>();
/// delete_shadow_button_pressed_relay.send(3);
/// // inside the owning Actor:
/// while let Some(id) = stream.next().await { /* ... */ }
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T = ()>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (Relay { sender }, receiver)
    }

    /// Sends an event; it is dropped when nobody listens anymore.
    pub fn send(&self, value: T) {
        let _ = self.sender.unbounded_send(value);
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn events_arrive_in_send_order() {
        let (shadow_deleted_relay, mut stream) = relay::<u32>();

        shadow_deleted_relay.send(3);
        shadow_deleted_relay.send(1);

        assert_eq!(stream.next().await, Some(3));
        assert_eq!(stream.next().await, Some(1));
    }

    #[tokio::test]
    async fn send_after_receiver_dropped_is_ignored() {
        let (copy_pressed_relay, stream) = relay::<()>();
        drop(stream);

        copy_pressed_relay.send(());
        copy_pressed_relay.clone().send(());
    }
}
