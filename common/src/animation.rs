use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}
impl FadeDirection {
    fn target(self) -> f32 {
        match self {
            Self::In => 1.0,
            Self::Out => 0.0,
        }
    }
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
pub fn cubic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = 2.0 * t - 2.0;
        0.5 * f * f * f + 1.0
    }
}

/// Opacity animation for the options panel.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    from: f32,
    to: f32,
    start: Option<Instant>,
    duration: Duration,
}
impl Fade {
    /// Fully transparent and at rest.
    pub fn hidden(duration: Duration) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            start: None,
            duration,
        }
    }

    /// Starts fading from whatever opacity is showing at `at`.
    pub fn start(&mut self, direction: FadeDirection, at: Instant) {
        self.from = self.opacity(at);
        self.to = direction.target();
        self.start = Some(at);
    }

    pub fn opacity(&self, at: Instant) -> f32 {
        let Some(start) = self.start else {
            return self.to;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let t = at.saturating_duration_since(start).as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * cubic_in_out(t)
    }

    pub fn is_running(&self, at: Instant) -> bool {
        self.start
            .is_some_and(|start| at.saturating_duration_since(start) < self.duration)
    }
}
