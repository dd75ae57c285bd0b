//! The two-state options panel machine driven by taps.

use crate::animation::FadeDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Hidden,
    Visible,
}

/// What the caller has to carry out after a tap was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    pub reveal_chrome: bool,
    /// Hide the chrome if it is up, otherwise reveal it.
    pub toggle_chrome: bool,
    pub haptic: bool,
    pub save_settings: bool,
    pub fade: Option<FadeDirection>,
}

#[derive(Debug, Default)]
pub struct InteractionState {
    panel: Panel,
}
impl InteractionState {
    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn options_visible(&self) -> bool {
        self.panel == Panel::Visible
    }

    pub fn on_tap(&mut self, tap: Tap) -> Effects {
        let (next, effects) = match (self.panel, tap) {
            (Panel::Hidden, Tap::Single) => (
                Panel::Hidden,
                Effects {
                    toggle_chrome: true,
                    haptic: true,
                    ..Default::default()
                },
            ),
            (Panel::Hidden, Tap::Double) => (
                Panel::Visible,
                Effects {
                    reveal_chrome: true,
                    fade: Some(FadeDirection::In),
                    ..Default::default()
                },
            ),
            (Panel::Visible, Tap::Single) => (
                Panel::Hidden,
                Effects {
                    save_settings: true,
                    fade: Some(FadeDirection::Out),
                    ..Default::default()
                },
            ),
            // Closes like a single tap, but also reveals the chrome.
            (Panel::Visible, Tap::Double) => (
                Panel::Hidden,
                Effects {
                    reveal_chrome: true,
                    save_settings: true,
                    fade: Some(FadeDirection::Out),
                    ..Default::default()
                },
            ),
        };
        log::debug!("{tap:?} tap: {:?} -> {next:?}", self.panel);
        self.panel = next;
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(taps: &[Tap]) -> (InteractionState, Vec<Effects>) {
        let mut state = InteractionState::default();
        let effects = taps.iter().map(|tap| state.on_tap(*tap)).collect();
        (state, effects)
    }

    #[test]
    fn starts_hidden() {
        let state = InteractionState::default();
        assert_eq!(state.panel(), Panel::Hidden);
        assert!(!state.options_visible());
    }

    #[test]
    fn single_tap_while_hidden_only_toggles_chrome() {
        let (state, effects) = run(&[Tap::Single]);
        assert_eq!(state.panel(), Panel::Hidden);
        assert_eq!(
            effects[0],
            Effects {
                reveal_chrome: false,
                toggle_chrome: true,
                haptic: true,
                save_settings: false,
                fade: None,
            }
        );
    }

    #[test]
    fn double_tap_opens() {
        let (state, effects) = run(&[Tap::Double]);
        assert!(state.options_visible());
        assert!(effects[0].reveal_chrome);
        assert!(!effects[0].toggle_chrome);
        assert!(!effects[0].save_settings);
        assert!(!effects[0].haptic);
        assert_eq!(effects[0].fade, Some(FadeDirection::In));
    }

    #[test]
    fn double_then_single_closes_with_one_save() {
        let (state, effects) = run(&[Tap::Double, Tap::Single]);
        assert_eq!(state.panel(), Panel::Hidden);
        assert_eq!(effects.iter().filter(|e| e.save_settings).count(), 1);
        assert!(!effects[1].reveal_chrome);
        assert!(!effects[1].toggle_chrome);
        assert_eq!(effects[1].fade, Some(FadeDirection::Out));
    }

    #[test]
    fn double_tap_while_visible_closes_saves_and_reveals() {
        let (state, effects) = run(&[Tap::Double, Tap::Double]);
        assert_eq!(state.panel(), Panel::Hidden);
        assert!(effects[1].save_settings);
        assert!(effects[1].reveal_chrome);
        assert_eq!(effects[1].fade, Some(FadeDirection::Out));
    }

    #[test]
    fn repeated_single_taps_never_open() {
        let (state, effects) = run(&[Tap::Single; 5]);
        assert_eq!(state.panel(), Panel::Hidden);
        assert!(effects.iter().all(|e| !e.save_settings && e.fade.is_none()));
    }
}
