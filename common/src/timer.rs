//! Background tickers that only post messages to the UI loop.

use std::thread::JoinHandle;
use std::time::Duration;

/// Messages posted by the tickers. The UI loop applies them in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    ChromePoll,
}

/// Calls `post` every `interval` on a named thread until it returns false.
pub fn spawn_ticker<F>(
    name: &str,
    interval: Duration,
    mut post: F,
) -> std::io::Result<JoinHandle<()>>
where
    F: FnMut() -> bool + Send + 'static,
{
    std::thread::Builder::new()
        .name(name.into())
        .spawn(move || loop {
            std::thread::sleep(interval);
            if !post() {
                break;
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn posts_until_receiver_is_gone() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_ticker("test-ticker", Duration::from_millis(5), move || {
            tx.send(AppEvent::Tick).is_ok()
        })
        .unwrap();

        assert_eq!(rx.recv().unwrap(), AppEvent::Tick);
        assert_eq!(rx.recv().unwrap(), AppEvent::Tick);
        drop(rx);
        handle.join().unwrap();
    }

    #[test]
    fn stops_when_post_returns_false() {
        let mut count = 0;
        let (tx, rx) = mpsc::channel();
        let handle = spawn_ticker("test-ticker", Duration::from_millis(1), move || {
            count += 1;
            _ = tx.send(count);
            count < 3
        })
        .unwrap();
        handle.join().unwrap();
        assert_eq!(rx.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
