//! Debounce for search inputs
//!
//! Values pushed in quick succession collapse into the last one, which is
//! emitted once the input has been quiet for the configured period.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;

/// Producer side of a debounced value stream.
///
/// Dropping the debouncer flushes the pending value, if any, and then
/// closes the receiver.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the debounce task. Must be called inside a tokio runtime.
    pub fn new(quiet: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (input, mut pending) = mpsc::unbounded_channel::<T>();
        let (settled, output) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(first) = pending.recv().await {
                let mut latest = first;
                loop {
                    tokio::select! {
                        next = pending.recv() => match next {
                            Some(value) => {
                                trace!("debounce: superseded pending value");
                                latest = value;
                            }
                            None => {
                                let _ = settled.send(latest);
                                return;
                            }
                        },
                        _ = tokio::time::sleep(quiet) => {
                            if settled.send(latest).is_err() {
                                return;
                            }
                            break;
                        }
                    }
                }
            }
        });

        (Self { input }, output)
    }

    pub fn push(&self, value: T) {
        // The task only stops once the receiver is gone; nothing to notify then.
        let _ = self.input.send(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_emits_last_value_after_quiet_period() {
        let start = Instant::now();
        let (debouncer, mut settled) = Debouncer::new(Duration::from_millis(300));

        debouncer.push("r");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push("re");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push("reg");

        let value = settled.recv().await.expect("settled value");
        assert_eq!(value, "reg");
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert!(settled.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_emit_separately() {
        let (debouncer, mut settled) = Debouncer::new(Duration::from_millis(50));

        debouncer.push(1);
        assert_eq!(settled.recv().await, Some(1));

        debouncer.push(2);
        debouncer.push(3);
        assert_eq!(settled.recv().await, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_flushes_pending_value() {
        let (debouncer, mut settled) = Debouncer::new(Duration::from_secs(10));

        debouncer.push("pending");
        drop(debouncer);

        assert_eq!(settled.recv().await, Some("pending"));
        assert_eq!(settled.recv().await, None);
    }
}
