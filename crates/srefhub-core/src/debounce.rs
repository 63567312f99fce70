//! Trailing-edge debouncer.
//!
//! Keystrokes are pushed as they happen; the output channel only sees a
//! value once input has been quiet for the configured delay, and only the
//! latest value from each burst.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Quiet period before a search string is forwarded
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounces values pushed from the UI into a downstream receiver.
///
/// Must be created inside a tokio runtime. Dropping the debouncer stops the
/// background task and discards a burst that has not settled yet.
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the debounce task. Returns the debouncer and the receiver
    /// for settled values.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (input, input_rx) = mpsc::unbounded_channel();
        let (output, output_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(delay, input_rx, output));
        (Self { input, task }, output_rx)
    }

    /// Record a new value, restarting the quiet period.
    pub fn push(&self, value: T) {
        if self.input.send(value).is_err() {
            tracing::debug!("Debouncer task has stopped; value dropped");
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<T>(delay: Duration, mut input: mpsc::UnboundedReceiver<T>, output: mpsc::UnboundedSender<T>) {
    while let Some(mut latest) = input.recv().await {
        loop {
            tokio::select! {
                next = input.recv() => match next {
                    Some(value) => latest = value,
                    None => {
                        let _ = output.send(latest);
                        return;
                    }
                },
                _ = tokio::time::sleep(delay) => {
                    if output.send(latest).is_err() {
                        return;
                    }
                    break;
                }
            }
        }
    }
}
