//! The observable clock state bound to the UI.
//!
//! Every setter notifies subscribers synchronously, before returning, with the
//! [`Property`] that changed. Changing an HSV component also recomputes the
//! display color and reports [`Property::Color`] first.

use crate::clock;
use crate::color::{hsv_to_rgb, Rgb};
use crate::settings::ClockSettings;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Hue,
    Saturation,
    Value,
    Color,
    EnableDate,
    TimeString,
    DateString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(Property)>;

#[derive(Default)]
struct Observers {
    next_id: u64,
    list: Vec<(SubscriptionId, Observer)>,
}
impl Observers {
    fn notify(&mut self, property: Property) {
        for (_, observer) in &mut self.list {
            observer(property);
        }
    }
}

pub struct ClockState {
    settings: ClockSettings,
    color: Rgb,
    time_string: String,
    date_string: String,
    observers: Observers,
}
impl Default for ClockState {
    fn default() -> Self {
        Self::new(ClockSettings::default())
    }
}
impl ClockState {
    pub fn new(settings: ClockSettings) -> Self {
        Self {
            color: hsv_to_rgb(settings.hue, settings.saturation, settings.value),
            settings,
            time_string: String::new(),
            date_string: String::new(),
            observers: Observers::default(),
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(Property) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.observers.next_id);
        self.observers.next_id += 1;
        self.observers.list.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len = self.observers.list.len();
        self.observers.list.retain(|(other, _)| *other != id);
        self.observers.list.len() != len
    }

    pub fn settings(&self) -> ClockSettings {
        self.settings
    }
    pub fn hue(&self) -> f64 {
        self.settings.hue
    }
    pub fn saturation(&self) -> f64 {
        self.settings.saturation
    }
    pub fn value(&self) -> f64 {
        self.settings.value
    }
    pub fn enable_date(&self) -> bool {
        self.settings.enable_date
    }
    pub fn color(&self) -> Rgb {
        self.color
    }
    pub fn time_string(&self) -> &str {
        &self.time_string
    }
    pub fn date_string(&self) -> &str {
        &self.date_string
    }

    pub fn set_hue(&mut self, hue: f64) {
        self.settings.hue = hue;
        self.recompute_color();
        self.observers.notify(Property::Hue);
    }

    pub fn set_saturation(&mut self, saturation: f64) {
        self.settings.saturation = saturation;
        self.recompute_color();
        self.observers.notify(Property::Saturation);
    }

    pub fn set_value(&mut self, value: f64) {
        self.settings.value = value;
        self.recompute_color();
        self.observers.notify(Property::Value);
    }

    pub fn set_enable_date(&mut self, enable_date: bool) {
        self.settings.enable_date = enable_date;
        self.observers.notify(Property::EnableDate);
    }

    /// Overwrites every persisted field, as after a load.
    pub fn apply_settings(&mut self, settings: ClockSettings) {
        self.set_hue(settings.hue);
        self.set_saturation(settings.saturation);
        self.set_value(settings.value);
        self.set_enable_date(settings.enable_date);
    }

    /// Refreshes the displayed strings from `now`.
    ///
    /// The date string is only reformatted while the date is enabled. When it
    /// is disabled the previous string is kept as is and simply not shown.
    pub fn tick(&mut self, now: &NaiveDateTime) {
        self.time_string = clock::format_time(now);
        self.observers.notify(Property::TimeString);

        if self.settings.enable_date {
            self.date_string = clock::format_date(now);
            self.observers.notify(Property::DateString);
        }
    }

    fn recompute_color(&mut self) {
        let ClockSettings {
            hue,
            saturation,
            value,
            ..
        } = self.settings;
        self.color = hsv_to_rgb(hue, saturation, value);
        self.observers.notify(Property::Color);
    }
}
