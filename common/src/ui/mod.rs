pub mod pages;

use crate::config;
use egui::{pos2, vec2, Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}
impl Orientation {
    pub fn from_size(size: Vec2) -> Self {
        if size.x > size.y {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub fn time_font_size(self) -> f32 {
        match self {
            Self::Landscape => config::TIME_FONT_SIZE_LANDSCAPE,
            Self::Portrait => config::TIME_FONT_SIZE_PORTRAIT,
        }
    }
}

/// Places a `size` box inside `bounds` at proportional position `anchor`.
///
/// An anchor of `(0, 0)` puts it in the top left corner, `(1, 1)` in the
/// bottom right, and `(0.5, 0.5)` centers it.
pub fn place_proportional(bounds: Rect, anchor: Vec2, size: Vec2) -> Rect {
    let free = bounds.size() - size;
    let min = pos2(
        bounds.min.x + free.x * anchor.x,
        bounds.min.y + free.y * anchor.y,
    );
    Rect::from_min_size(min, size)
}

/// Where the options panel sits: horizontally centered, near the bottom.
pub fn options_rect(screen: Rect) -> Rect {
    place_proportional(
        screen,
        vec2(0.5, 0.9),
        vec2(config::OPTIONS_WIDTH, config::OPTIONS_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_from_size() {
        assert_eq!(Orientation::from_size(vec2(1920.0, 1080.0)), Orientation::Landscape);
        assert_eq!(Orientation::from_size(vec2(600.0, 600.0)), Orientation::Portrait);
        assert_eq!(Orientation::from_size(vec2(1080.0, 1920.0)), Orientation::Portrait);
    }

    #[test]
    fn font_sizes() {
        assert_eq!(Orientation::Landscape.time_font_size(), 100.0);
        assert_eq!(Orientation::Portrait.time_font_size(), 70.0);
    }

    #[test]
    fn options_panel_placement() {
        let screen = Rect::from_min_size(pos2(0.0, 0.0), vec2(1350.0, 1150.0));
        let rect = options_rect(screen);
        assert_eq!(rect.size(), vec2(350.0, 150.0));
        assert_eq!(rect.min, pos2(500.0, 900.0));
        assert!(screen.contains_rect(rect));
    }

    #[test]
    fn proportional_corners() {
        let bounds = Rect::from_min_size(pos2(10.0, 20.0), vec2(100.0, 100.0));
        let size = vec2(20.0, 10.0);
        assert_eq!(place_proportional(bounds, vec2(0.0, 0.0), size).min, pos2(10.0, 20.0));
        assert_eq!(place_proportional(bounds, vec2(1.0, 1.0), size).max, pos2(110.0, 120.0));
    }
}
