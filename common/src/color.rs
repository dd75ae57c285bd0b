/// An RGB color with channels in `[0, 1]` for in-range inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}
impl Rgb {
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}
impl From<Rgb> for egui::Color32 {
    fn from(c: Rgb) -> Self {
        fn channel(v: f64) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        egui::Color32::from_rgb(channel(c.r), channel(c.g), channel(c.b))
    }
}

/// Standard HSV to RGB conversion.
///
/// `hue` is a unit angle and wraps around, so `1.0` and `0.0` are both red.
/// `saturation` and `value` are used as given, without clamping.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let c = saturation * value;
    let h6 = hue.rem_euclid(1.0) * 6.0;
    let sector = h6.floor();
    let frac = h6 - sector;

    let x = if (sector as u32) % 2 == 0 {
        c * frac
    } else {
        c * (1.0 - frac)
    };
    let m = value - c;

    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Rgb::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-9 && (a.g - b.g).abs() < 1e-9 && (a.b - b.b).abs() < 1e-9
    }

    #[test]
    fn primaries() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::RED));
        assert!(close(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), Rgb::new(0.0, 1.0, 0.0)));
        assert!(close(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), Rgb::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn secondaries() {
        assert!(close(hsv_to_rgb(1.0 / 6.0, 1.0, 1.0), Rgb::new(1.0, 1.0, 0.0)));
        assert!(close(hsv_to_rgb(0.5, 1.0, 1.0), Rgb::new(0.0, 1.0, 1.0)));
        assert!(close(hsv_to_rgb(5.0 / 6.0, 1.0, 1.0), Rgb::new(1.0, 0.0, 1.0)));
    }

    #[test]
    fn hue_wraps() {
        assert!(close(hsv_to_rgb(1.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0)));
        assert!(close(hsv_to_rgb(1.25, 0.5, 0.8), hsv_to_rgb(0.25, 0.5, 0.8)));
        assert!(close(hsv_to_rgb(-0.75, 0.5, 0.8), hsv_to_rgb(0.25, 0.5, 0.8)));
    }

    #[test]
    fn zero_saturation_is_gray() {
        let c = hsv_to_rgb(0.42, 0.0, 0.6);
        assert!(close(c, Rgb::new(0.6, 0.6, 0.6)));
    }

    #[test]
    fn zero_value_is_black() {
        assert!(close(hsv_to_rgb(0.7, 1.0, 0.0), Rgb::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn deterministic_regardless_of_call_order() {
        let a = hsv_to_rgb(0.3, 0.4, 0.5);
        _ = hsv_to_rgb(0.9, 0.1, 0.2);
        let b = hsv_to_rgb(0.3, 0.4, 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_components_pass_through() {
        let c = hsv_to_rgb(0.0, 1.0, 2.0);
        assert_eq!(c.r, 2.0);
    }

    #[test]
    fn to_color32() {
        let c: egui::Color32 = Rgb::RED.into();
        assert_eq!(c, egui::Color32::from_rgb(255, 0, 0));
        let c: egui::Color32 = Rgb::new(2.0, -1.0, 0.5).into();
        assert_eq!(c, egui::Color32::from_rgb(255, 0, 128));
    }
}
