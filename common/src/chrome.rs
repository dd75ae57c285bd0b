//! Auto-hiding platform chrome.
//!
//! Revealed chrome stays up for [`CHROME_HIDE_DELAY`](crate::config::CHROME_HIDE_DELAY)
//! of inactivity, counted down in poll steps. Revealing it again re-arms the
//! countdown, toggling it while visible hides it at once.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeSignal {
    Reveal,
    Hide,
}

#[derive(Debug, Clone)]
pub struct ChromeController {
    visible: bool,
    remaining: Duration,
    delay: Duration,
}
impl ChromeController {
    /// Starts with the chrome hidden.
    pub fn new(delay: Duration) -> Self {
        Self {
            visible: false,
            remaining: Duration::ZERO,
            delay,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns a signal only if the chrome was hidden.
    pub fn reveal(&mut self) -> Option<ChromeSignal> {
        self.remaining = self.delay;
        if self.visible {
            return None;
        }
        self.visible = true;
        Some(ChromeSignal::Reveal)
    }

    /// Hides visible chrome, reveals hidden chrome.
    pub fn toggle(&mut self) -> Option<ChromeSignal> {
        if self.visible {
            self.hide()
        } else {
            self.reveal()
        }
    }

    /// Returns a signal only if the chrome was visible.
    pub fn hide(&mut self) -> Option<ChromeSignal> {
        self.remaining = Duration::ZERO;
        if !self.visible {
            return None;
        }
        self.visible = false;
        Some(ChromeSignal::Hide)
    }

    /// Advances the countdown by one poll step.
    pub fn poll(&mut self, step: Duration) -> Option<ChromeSignal> {
        if !self.visible {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(step);
        if self.remaining.is_zero() {
            self.hide()
        } else {
            None
        }
    }
}
