pub mod animation;
pub mod app;
pub mod chrome;
pub mod clock;
pub mod color;
pub mod config;
pub mod controller;
pub mod gpu;
pub mod input;
pub mod interaction;
pub mod settings;
pub mod state;
pub mod store;
pub mod timer;
pub mod ui;

pub use app::App;
pub use controller::ClockController;
pub use settings::ClockSettings;
pub use store::SettingsStore;
pub use timer::AppEvent;

pub use chrono;
pub use egui;
pub use glam;
pub use log;
pub use wgpu;

/// What the clock needs from the system it runs on.
pub trait Platform {
    /// Shows or hides the system navigation chrome.
    fn set_chrome_visible(&mut self, visible: bool);
    /// Stops the display from sleeping while the clock runs. Best-effort.
    fn keep_screen_on(&mut self) -> std::io::Result<()>;
    /// Best-effort. Callers ignore the error beyond logging it.
    fn perform_haptic_feedback(&mut self) -> std::io::Result<()>;
    /// Terminates the process immediately, without saving.
    fn quit(&mut self);
    fn name() -> String;
}
