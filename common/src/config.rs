//! Timing and layout constants shared by every front end.

use std::time::Duration;

/// File name of the persisted settings, placed in the per-user local data directory.
pub const SETTINGS_FILE_NAME: &str = "DesktopClockSettings";

/// How often the displayed time is refreshed.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// How often the chrome auto-hide countdown is advanced.
pub const CHROME_POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Inactivity after which revealed chrome is hidden again.
pub const CHROME_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// Duration of the options panel fade in/out.
pub const PANEL_FADE_DURATION: Duration = Duration::from_millis(250);

/// Maximum gap between two clicks for them to count as a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

pub const TIME_FONT_SIZE_LANDSCAPE: f32 = 100.0;
pub const TIME_FONT_SIZE_PORTRAIT: f32 = 70.0;
pub const DATE_FONT_SIZE: f32 = 30.0;
pub const LABEL_FONT_SIZE: f32 = 15.0;

pub const OPTIONS_LABEL_WIDTH: f32 = 150.0;
pub const OPTIONS_VALUE_WIDTH: f32 = 200.0;
pub const OPTIONS_WIDTH: f32 = OPTIONS_LABEL_WIDTH + OPTIONS_VALUE_WIDTH;
pub const OPTIONS_HEIGHT: f32 = 150.0;
