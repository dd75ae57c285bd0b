#![windows_subsystem = "windows"]

use clock::app::{App, AppInput};
use clock::glam::uvec2;
use clock::{config, egui, timer, wgpu};
use clock::{AppEvent, ClockController, Platform, SettingsStore};
use clock_common as clock;

use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{EventLoopBuilder, EventLoopProxy};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Fullscreen, Window, WindowBuilder};

/// On desktop the mouse cursor plays the part of the navigation chrome.
pub struct DesktopPlatform {
    window: Arc<Window>,
    // Released on drop, so it lives as long as the app.
    awake: Option<keepawake::KeepAwake>,
}
impl Platform for DesktopPlatform {
    fn set_chrome_visible(&mut self, visible: bool) {
        self.window.set_cursor_visible(visible);
    }

    fn keep_screen_on(&mut self) -> std::io::Result<()> {
        if self.awake.is_some() {
            return Ok(());
        }
        let awake = keepawake::Builder::default()
            .display(true)
            .idle(true)
            .reason("Clock is showing")
            .app_name("Desktop Clock")
            .app_reverse_domain("io.github.desktop-clock")
            .create()
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
        self.awake = Some(awake);
        Ok(())
    }

    fn perform_haptic_feedback(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "Haptic feedback not available on desktop",
        ))
    }

    fn quit(&mut self) {
        std::process::exit(0);
    }

    #[rustfmt::skip]
    fn name() -> String { "Desktop".into() }
}

fn settings_path() -> PathBuf {
    match directories::BaseDirs::new() {
        Some(dirs) => dirs.data_local_dir().join(config::SETTINGS_FILE_NAME),
        None => {
            log::warn!("No home directory found, keeping settings in the working directory");
            PathBuf::from(config::SETTINGS_FILE_NAME)
        }
    }
}

fn spawn_tickers(proxy: EventLoopProxy<AppEvent>) -> std::io::Result<()> {
    let tick = proxy.clone();
    timer::spawn_ticker("clock-tick", config::TICK_INTERVAL, move || {
        tick.send_event(AppEvent::Tick).is_ok()
    })?;
    timer::spawn_ticker("chrome-poll", config::CHROME_POLL_INTERVAL, move || {
        proxy.send_event(AppEvent::ChromePoll).is_ok()
    })?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Starting clock on {}", DesktopPlatform::name());

    let event_loop = EventLoopBuilder::<AppEvent>::with_user_event().build()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Desktop Clock")
            .with_fullscreen(Some(Fullscreen::Borderless(None)))
            .build(&event_loop)?,
    );
    window.set_cursor_visible(false);

    let platform = DesktopPlatform {
        window: window.clone(),
        awake: None,
    };
    let mut clock = ClockController::new(platform, SettingsStore::new(settings_path()));
    clock.state.subscribe({
        let window = window.clone();
        move |_| window.request_redraw()
    });
    clock.state.tick(&Local::now().naive_local());

    let egui_ctx = egui::Context::default();
    let input = egui_winit::State::new(
        egui_ctx.clone(),
        egui_ctx.viewport_id(),
        &*window,
        Some(window.scale_factor() as f32),
        None,
    );

    let mut state = State {
        app: App::new(clock, egui_ctx),
        input,
        window,
        wgpu: wgpu::Instance::default(),
    };

    spawn_tickers(event_loop.create_proxy())?;

    event_loop.run(move |event, event_loop| {
        let mut exit = false;
        on_event(&mut state, event, &mut exit);
        if exit {
            event_loop.exit();
        }
    })?;
    Ok(())
}

struct State {
    app: App<DesktopPlatform>,
    wgpu: wgpu::Instance,
    window: Arc<Window>,
    input: egui_winit::State,
}

fn on_event(state: &mut State, event: Event<AppEvent>, exit: &mut bool) {
    match event {
        Event::Resumed => {
            let size = state.window.inner_size();
            let size = uvec2(size.width, size.height);
            match state.wgpu.create_surface(state.window.clone()) {
                Ok(surface) => {
                    let rs =
                        pollster::block_on(state.app.renew_surface(&state.wgpu, surface, size));
                    if let Err(err) = rs {
                        log::error!("Failed to set up graphics: {err}");
                        *exit = true;
                    }
                }
                Err(err) => {
                    log::error!("Failed to create surface: {err}");
                    *exit = true;
                }
            }
            state.window.request_redraw();
        }
        Event::Suspended => {
            state.app.invalidate_surface();
            log::info!("Suspended");
        }
        Event::UserEvent(event) => {
            let at = Instant::now();
            state
                .app
                .clock
                .handle_event(event, Local::now().naive_local(), at);
            if state.app.clock.is_animating(at) {
                state.window.request_redraw();
            }
        }
        Event::WindowEvent { event, .. } => on_window_event(state, event, exit),
        _ => {}
    }
}

fn on_window_event(ctx: &mut State, event: WindowEvent, exit: &mut bool) {
    if ctx.input.on_window_event(&ctx.window, &event).repaint {
        ctx.window.request_redraw();
    }

    match event {
        WindowEvent::RedrawRequested => {
            let size = ctx.window.inner_size();
            let input = AppInput {
                egui_input: ctx.input.take_egui_input(&ctx.window),
                win_size: uvec2(size.width, size.height),
            };
            match ctx.app.draw_frame(input) {
                Ok(out) => {
                    ctx.input
                        .handle_platform_output(&ctx.window, out.platform_output);
                    if out.repaint_after == Duration::ZERO {
                        ctx.window.request_redraw();
                    }
                }
                Err(err) => log::warn!("Failed to draw frame: {err}"),
            }
        }
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    logical_key: Key::Named(NamedKey::Escape),
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } => ctx.app.clock.on_back(),
        WindowEvent::Resized(size) => {
            ctx.app.update_size(uvec2(size.width, size.height));
            ctx.window.request_redraw();
        }
        WindowEvent::CloseRequested => *exit = true,
        _ => {}
    }
}
