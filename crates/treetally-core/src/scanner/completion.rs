/// One-shot completion signal between the crawler and the renderer.
///
/// Built on a `crossbeam_channel::bounded(1)` channel. The renderer waits on
/// it with a timeout instead of polling a flag, so completion wakes it at once.
/// Dropping the [`CompletionNotifier`] without calling `notify` (for example
/// when the crawler thread panics) also reads as completion.
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Sending half, owned by whoever finishes the crawl.
#[derive(Debug)]
pub struct CompletionNotifier {
    tx: Sender<()>,
}

/// Receiving half, owned by the renderer.
#[derive(Debug, Clone)]
pub struct CompletionListener {
    rx: Receiver<()>,
}

/// Create a connected notifier/listener pair.
pub fn completion_channel() -> (CompletionNotifier, CompletionListener) {
    let (tx, rx) = crossbeam_channel::bounded(1);
    (CompletionNotifier { tx }, CompletionListener { rx })
}

impl CompletionNotifier {
    /// Signal completion. Consumes the notifier so it can fire only once.
    pub fn notify(self) {
        // A listener that is already gone has nothing left to wake.
        let _ = self.tx.send(());
    }
}

impl CompletionListener {
    /// Block for up to `timeout`. Returns `true` once completion has been
    /// signalled (or the notifier was dropped), `false` on timeout.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
            Err(RecvTimeoutError::Timeout) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn wait_times_out_while_running() {
        let (_notifier, listener) = completion_channel();
        assert!(!listener.wait_timeout(Duration::from_millis(10)));
        assert!(!listener.wait_timeout(Duration::ZERO));
    }

    #[test]
    fn notify_wakes_waiter_before_timeout() {
        let (notifier, listener) = completion_channel();
        let start = Instant::now();
        std::thread::spawn(move || notifier.notify());
        assert!(listener.wait_timeout(Duration::from_secs(30)));
        assert!(start.elapsed() < Duration::from_secs(30));
    }

    #[test]
    fn dropped_notifier_counts_as_complete() {
        let (notifier, listener) = completion_channel();
        drop(notifier);
        assert!(listener.wait_timeout(Duration::ZERO));
    }

    /// After the one notification is consumed the sender is gone, so every
    /// later wait still reports completion.
    #[test]
    fn completion_is_sticky() {
        let (notifier, listener) = completion_channel();
        notifier.notify();
        assert!(listener.wait_timeout(Duration::from_millis(10)));
        assert!(listener.wait_timeout(Duration::from_millis(10)));
    }
}
