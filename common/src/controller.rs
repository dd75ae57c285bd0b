use crate::animation::Fade;
use crate::chrome::{ChromeController, ChromeSignal};
use crate::config;
use crate::input::TapRecognizer;
use crate::interaction::{InteractionState, Tap};
use crate::state::ClockState;
use crate::store::SettingsStore;
use crate::timer::AppEvent;
use crate::Platform;

use chrono::NaiveDateTime;
use std::time::Instant;

/// Owns every piece of clock state and routes events between them and the platform.
pub struct ClockController<P> {
    pub platform: P,
    pub state: ClockState,
    pub interaction: InteractionState,
    pub chrome: ChromeController,
    pub taps: TapRecognizer,
    pub fade: Fade,
    store: SettingsStore,
}
impl<P: Platform> ClockController<P> {
    /// Builds the controller, keeps the screen awake and restores saved settings, if any.
    pub fn new(platform: P, store: SettingsStore) -> Self {
        let mut controller = Self {
            platform,
            state: ClockState::default(),
            interaction: InteractionState::default(),
            chrome: ChromeController::new(config::CHROME_HIDE_DELAY),
            taps: TapRecognizer::new(config::DOUBLE_TAP_WINDOW),
            fade: Fade::hidden(config::PANEL_FADE_DURATION),
            store,
        };
        if let Err(err) = controller.platform.keep_screen_on() {
            log::warn!("Failed to keep the screen on: {err}");
        }
        controller.load_settings();
        controller
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn load_settings(&mut self) {
        match self.store.load() {
            Ok(settings) => {
                self.state.apply_settings(settings);
                log::info!("Loaded settings from {:?} : {settings:?}", self.store.path());
            }
            Err(err) if err.is_missing_file() => {
                log::info!("No settings at {:?}, using defaults", self.store.path())
            }
            Err(err) => log::warn!("Failed to load settings from {:?} : {err}", self.store.path()),
        }
    }

    pub fn save_settings(&mut self) {
        let settings = self.state.settings();
        match self.store.save(&settings) {
            Ok(()) => log::info!("Saved settings to {:?} : {settings:?}", self.store.path()),
            Err(err) => log::warn!("Failed to save settings to {:?} : {err}", self.store.path()),
        }
    }

    /// Applies a message posted by one of the tickers.
    pub fn handle_event(&mut self, event: AppEvent, now: NaiveDateTime, at: Instant) {
        match event {
            AppEvent::Tick => self.state.tick(&now),
            AppEvent::ChromePoll => {
                self.update(at);
                if let Some(signal) = self.chrome.poll(config::CHROME_POLL_INTERVAL) {
                    self.send_chrome(signal);
                }
            }
        }
    }

    /// Feeds a raw click on the clock face into the tap recognizer.
    pub fn on_click(&mut self, at: Instant) {
        self.update(at);
        if let Some(tap) = self.taps.click(at) {
            self.on_tap(tap, at);
        }
    }

    /// Resolves a pending click whose double-tap window has passed.
    pub fn update(&mut self, at: Instant) {
        if let Some(tap) = self.taps.poll(at) {
            self.on_tap(tap, at);
        }
    }

    pub fn on_tap(&mut self, tap: Tap, at: Instant) {
        let effects = self.interaction.on_tap(tap);

        let signal = if effects.toggle_chrome {
            self.chrome.toggle()
        } else if effects.reveal_chrome {
            self.chrome.reveal()
        } else {
            None
        };
        if let Some(signal) = signal {
            self.send_chrome(signal);
        }
        if effects.haptic {
            if let Err(err) = self.platform.perform_haptic_feedback() {
                log::debug!("Haptic feedback unavailable: {err}");
            }
        }
        if effects.save_settings {
            self.save_settings();
        }
        if let Some(direction) = effects.fade {
            self.fade.start(direction, at);
        }
    }

    /// The platform "back" gesture. Quits without saving.
    pub fn on_back(&mut self) {
        log::info!("Back pressed, quitting");
        self.platform.quit();
    }

    /// Opacity the options panel should be drawn with at `at`.
    pub fn panel_opacity(&self, at: Instant) -> f32 {
        self.fade.opacity(at)
    }

    /// True while something on screen changes without new input.
    pub fn is_animating(&self, at: Instant) -> bool {
        self.fade.is_running(at)
    }

    fn send_chrome(&mut self, signal: ChromeSignal) {
        log::debug!("Chrome: {signal:?}");
        self.platform
            .set_chrome_visible(matches!(signal, ChromeSignal::Reveal));
    }
}
