use crate::interaction::Tap;
use std::time::{Duration, Instant};

/// Turns raw clicks into exclusive single or double taps.
///
/// A click is held back for `window`. A second click inside that window
/// makes a double tap. Otherwise [`TapRecognizer::poll`] resolves it to a
/// single tap once the window has passed.
#[derive(Debug, Clone)]
pub struct TapRecognizer {
    window: Duration,
    pending: Option<Instant>,
}
impl TapRecognizer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Registers a click. Call [`TapRecognizer::poll`] first so an expired
    /// pending click is not mistaken for the first half of a double tap.
    pub fn click(&mut self, at: Instant) -> Option<Tap> {
        match self.pending.take() {
            Some(first) if at.saturating_duration_since(first) <= self.window => Some(Tap::Double),
            _ => {
                self.pending = Some(at);
                None
            }
        }
    }

    pub fn poll(&mut self, at: Instant) -> Option<Tap> {
        let first = self.pending?;
        if at.saturating_duration_since(first) > self.window {
            self.pending = None;
            Some(Tap::Single)
        } else {
            None
        }
    }

    /// When the pending click will resolve, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|first| first + self.window)
    }
}
