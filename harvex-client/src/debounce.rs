use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use futures::channel::mpsc;

#[cfg(not(target_arch = "wasm32"))]
type PendingDelivery = tokio::task::JoinHandle<()>;
#[cfg(target_arch = "wasm32")]
type PendingDelivery = gloo_timers::callback::Timeout;

/// One-shot delay slot. At most one value is armed at any time and the most
/// recently scheduled value wins; values that survive the delay appear on the
/// channel handed out by [`Debouncer::take_receiver`].
pub struct Debouncer<T> {
    delay: Duration,
    sender: mpsc::UnboundedSender<T>,
    receiver: Mutex<Option<mpsc::UnboundedReceiver<T>>>,
    pending: Mutex<Option<PendingDelivery>>,
}

impl<T> Debouncer<T> {

    pub fn new(delay: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded();
        Self {
            delay,
            sender,
            receiver: Mutex::new(Some(receiver)),
            pending: Mutex::new(None),
        }
    }

    /// Yields the delivery channel. Present until the first call.
    pub fn take_receiver(&self) -> Option<mpsc::UnboundedReceiver<T>> {
        self.receiver.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Drops the pending delivery, if any. A delivery that already fired is
    /// past cancellation and stays in the channel.
    pub fn cancel(&self) {
        let previous = self.pending.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(previous) = previous {
            discard(previous);
        }
    }

    fn arm(&self, delivery: PendingDelivery) {
        let previous = self.pending.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(delivery);
        if let Some(previous) = previous {
            discard(previous);
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        impl<T: 'static> Debouncer<T> {
            /// Cancels any previously scheduled value and arms `value` for
            /// delivery after the configured delay.
            pub fn schedule(&self, value: T) {
                let sender = self.sender.clone();
                let delay = self.delay.as_millis() as u32;
                let timeout = gloo_timers::callback::Timeout::new(delay, move || {
                    let _ = sender.unbounded_send(value);
                });
                self.arm(timeout);
            }
        }
    } else {
        impl<T: Send + 'static> Debouncer<T> {
            /// Cancels any previously scheduled value and arms `value` for
            /// delivery after the configured delay.
            pub fn schedule(&self, value: T) {
                let sender = self.sender.clone();
                let delay = self.delay;
                let task = tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = sender.unbounded_send(value);
                });
                self.arm(task);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn discard(pending: PendingDelivery) {
    pending.abort();
}

#[cfg(target_arch = "wasm32")]
fn discard(pending: PendingDelivery) {
    // Dropping a Timeout clears it browser-side.
    drop(pending);
}
