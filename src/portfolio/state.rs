use super::section::{Section, SectionBounds};

/// Page-local UI state. Nothing here outlives a page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub dark_mode: bool,
    pub active_section: Section,
    pub menu_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            active_section: Section::About,
            menu_open: false,
        }
    }
}

impl ViewState {
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Class list for the outermost page container.
    pub fn theme_class(&self) -> &'static str {
        if self.dark_mode {
            "min-h-screen dark"
        } else {
            "min-h-screen"
        }
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }

    /// Recomputes the active section from fresh measurements. Returns whether
    /// it changed; when nothing straddles the threshold the previous value is
    /// kept.
    pub fn apply_scroll<F>(&mut self, measure: F) -> bool
    where
        F: Fn(Section) -> Option<SectionBounds>,
    {
        match Section::straddling(measure) {
            Some(section) if section != self.active_section => {
                self.active_section = section;
                true
            }
            _ => false,
        }
    }
}

/// Pointer state owned by a single project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardHover {
    hovered: bool,
}

impl CardHover {
    pub fn enter(&mut self) {
        self.hovered = true;
    }

    pub fn leave(&mut self) {
        self.hovered = false;
    }

    /// Whether the "View Project" action should be mounted.
    pub fn shows_action(&self) -> bool {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(section: Section, top: f64, bottom: f64) -> impl Fn(Section) -> Option<SectionBounds> {
        move |s: Section| (s == section).then(|| SectionBounds::new(top, bottom))
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert!(!state.dark_mode);
        assert!(!state.menu_open);
        // no mount-time measurement: About until the first scroll event
        assert_eq!(state.active_section, Section::About);
        assert_eq!(state.theme_class(), "min-h-screen");
    }

    #[test]
    fn test_dark_mode_parity() {
        let mut state = ViewState::default();
        let original = state.theme_class();
        for n in 1..=6 {
            state.toggle_dark_mode();
            if n % 2 == 0 {
                assert_eq!(state.theme_class(), original);
            } else {
                assert_eq!(state.theme_class(), "min-h-screen dark");
            }
        }
    }

    #[test]
    fn test_menu_open_close() {
        let mut state = ViewState::default();
        state.set_menu_open(true);
        assert!(state.menu_open);
        state.close_menu();
        assert!(!state.menu_open);
        // closing twice is harmless
        state.close_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_menu_and_theme_independent() {
        let mut state = ViewState::default();
        state.set_menu_open(true);
        state.toggle_dark_mode();
        state.close_menu();
        assert!(state.dark_mode);
        state.set_menu_open(true);
        state.toggle_dark_mode();
        assert!(state.menu_open);
    }

    #[test]
    fn test_apply_scroll_updates() {
        let mut state = ViewState::default();
        assert!(state.apply_scroll(only(Section::Projects, 20.0, 900.0)));
        assert_eq!(state.active_section, Section::Projects);
        assert!(state.is_active(Section::Projects));
        assert!(!state.is_active(Section::About));
    }

    #[test]
    fn test_apply_scroll_keeps_previous_without_match() {
        let mut state = ViewState::default();
        state.apply_scroll(only(Section::Contact, 0.0, 300.0));
        assert!(!state.apply_scroll(|_| None));
        assert_eq!(state.active_section, Section::Contact);
        assert!(!state.apply_scroll(only(Section::Hero, 200.0, 500.0)));
        assert_eq!(state.active_section, Section::Contact);
    }

    #[test]
    fn test_apply_scroll_same_section_reports_unchanged() {
        let mut state = ViewState::default();
        assert!(!state.apply_scroll(only(Section::About, 0.0, 300.0)));
        assert_eq!(state.active_section, Section::About);
    }

    #[test]
    fn test_card_hover() {
        let mut hover = CardHover::default();
        assert!(!hover.shows_action());
        hover.enter();
        assert!(hover.shows_action());
        hover.leave();
        assert!(!hover.shows_action());
    }
}
