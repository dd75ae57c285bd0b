use super::{options_rect, Orientation};
use crate::config;
use crate::controller::ClockController;
use crate::state::ClockState;
use crate::Platform;

use egui::{Align2, Color32, FontId, Id, Margin, RichText, Sense, Ui};
use std::time::Instant;

/// Gap between the time and the date line.
const DATE_SPACING: f32 = 20.0;

/// Draws the whole clock screen and feeds clicks on the clock face back into `clock`.
pub fn clock_page<P: Platform>(ctx: &egui::Context, clock: &mut ClockController<P>, at: Instant) {
    let screen = ctx.screen_rect();
    let orientation = Orientation::from_size(screen.size());

    let face = egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::BLACK))
        .show(ctx, |ui| {
            let response = ui.interact(ui.max_rect(), Id::new("clock-face"), Sense::click());
            clock_face(ui, &clock.state, orientation);
            response
        })
        .inner;

    let opacity = clock.panel_opacity(at);
    if opacity > 0.0 {
        let rect = options_rect(screen);
        egui::Area::new(Id::new("options"))
            .fixed_pos(rect.min)
            .order(egui::Order::Foreground)
            .interactable(clock.interaction.options_visible())
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                options_frame().show(ui, |ui| {
                    ui.set_width(rect.width() - 40.0);
                    ui.set_min_height(rect.height() - 20.0);
                    options(ui, &mut clock.state);
                });
            });
    }

    if face.clicked() {
        clock.on_click(at);
    }
    clock.update(at);

    if clock.is_animating(at) {
        ctx.request_repaint();
    }
    if let Some(deadline) = clock.taps.deadline() {
        ctx.request_repaint_after(deadline.saturating_duration_since(at));
    }
}

fn clock_face(ui: &mut Ui, state: &ClockState, orientation: Orientation) {
    let painter = ui.painter();
    let center = ui.max_rect().center();
    let time_font = FontId::monospace(orientation.time_font_size());

    if !state.enable_date() {
        painter.text(
            center,
            Align2::CENTER_CENTER,
            state.time_string(),
            time_font,
            state.color().into(),
        );
        return;
    }

    let shift = (config::DATE_FONT_SIZE + DATE_SPACING) * 0.5;
    let time_rect = painter.text(
        center - egui::vec2(0.0, shift),
        Align2::CENTER_CENTER,
        state.time_string(),
        time_font,
        state.color().into(),
    );
    painter.text(
        egui::pos2(center.x, time_rect.bottom() + DATE_SPACING),
        Align2::CENTER_TOP,
        state.date_string(),
        FontId::proportional(config::DATE_FONT_SIZE),
        Color32::GRAY,
    );
}

fn options_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(Color32::from_white_alpha(25))
        .rounding(20.0)
        .inner_margin(Margin {
            left: 20.0,
            right: 20.0,
            top: 20.0,
            bottom: 0.0,
        })
}

fn options(ui: &mut Ui, state: &mut ClockState) {
    fn label(ui: &mut Ui, text: &str) {
        ui.label(
            RichText::new(text)
                .size(config::LABEL_FONT_SIZE)
                .color(Color32::LIGHT_GRAY)
                .strong(),
        );
    }
    // Values loaded from disk may lie outside 0..=1, so don't clamp what is shown.
    fn slider(ui: &mut Ui, value: f64) -> Option<f64> {
        let mut value = value;
        ui.add(
            egui::Slider::new(&mut value, 0.0..=1.0)
                .show_value(false)
                .clamp_to_range(false),
        )
        .changed()
        .then_some(value)
    }

    ui.spacing_mut().slider_width = config::OPTIONS_VALUE_WIDTH - 20.0;
    egui::Grid::new("options-grid")
        .num_columns(2)
        .min_col_width(config::OPTIONS_LABEL_WIDTH - 20.0)
        .spacing([0.0, 8.0])
        .show(ui, |ui| {
            label(ui, "Hue");
            if let Some(hue) = slider(ui, state.hue()) {
                state.set_hue(hue);
            }
            ui.end_row();

            label(ui, "Saturation");
            if let Some(saturation) = slider(ui, state.saturation()) {
                state.set_saturation(saturation);
            }
            ui.end_row();

            label(ui, "Brightness");
            if let Some(value) = slider(ui, state.value()) {
                state.set_value(value);
            }
            ui.end_row();

            label(ui, "Show date");
            let mut enable_date = state.enable_date();
            if ui.checkbox(&mut enable_date, "").changed() {
                state.set_enable_date(enable_date);
            }
            ui.end_row();
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::tests::MockPlatform;
    use crate::interaction::Tap;
    use crate::store::{tests::temp_path, SettingsStore};
    use crate::settings::ClockSettings;

    fn raw_input() -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            ..Default::default()
        }
    }

    fn controller() -> ClockController<MockPlatform> {
        ClockController::new(
            MockPlatform::default(),
            SettingsStore::new(temp_path("settings")),
        )
    }

    #[test]
    fn draws_without_input_and_keeps_state() {
        let ctx = egui::Context::default();
        let mut clock = controller();
        let at = Instant::now();

        for _ in 0..3 {
            _ = ctx.run(raw_input(), |ctx| clock_page(ctx, &mut clock, at));
        }
        assert!(!clock.interaction.options_visible());
        assert_eq!(clock.state.settings(), ClockSettings::default());
        assert!(clock.platform.chrome.is_empty());
    }

    #[test]
    fn open_panel_adds_shapes() {
        let at = Instant::now();
        let mid_fade = at + std::time::Duration::from_millis(125);

        let mut hidden = controller();
        let output = egui::Context::default()
            .run(raw_input(), |ctx| clock_page(ctx, &mut hidden, mid_fade));
        let hidden_shapes = output.shapes.len();

        let mut shown = controller();
        shown.on_tap(Tap::Double, at);
        let output = egui::Context::default()
            .run(raw_input(), |ctx| clock_page(ctx, &mut shown, mid_fade));

        assert!(shown.interaction.options_visible());
        assert!(output.shapes.len() > hidden_shapes);
    }
}
