//! Mobile menu state model. The DOM holds the visible state (an `active`
//! class on the toggle and the link container); these are the transition
//! rules the wiring follows.

/// Class set on both menu elements while the menu is expanded.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

impl MenuState {
    /// Toggle-button activation flips the state.
    pub fn toggled(self) -> MenuState {
        match self {
            MenuState::Collapsed => MenuState::Expanded,
            MenuState::Expanded => MenuState::Collapsed,
        }
    }

    /// Choosing a navigation link always collapses, never toggles.
    pub fn link_chosen(self) -> MenuState {
        MenuState::Collapsed
    }

    pub fn is_expanded(self) -> bool {
        self == MenuState::Expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_collapsed() {
        assert_eq!(MenuState::default(), MenuState::Collapsed);
    }

    #[test]
    fn toggle_flips_between_the_two_states() {
        assert_eq!(MenuState::Collapsed.toggled(), MenuState::Expanded);
        assert_eq!(MenuState::Expanded.toggled(), MenuState::Collapsed);
        assert_eq!(MenuState::Collapsed.toggled().toggled(), MenuState::Collapsed);
    }

    #[test]
    fn choosing_a_link_always_collapses() {
        assert_eq!(MenuState::Expanded.link_chosen(), MenuState::Collapsed);
        assert_eq!(MenuState::Collapsed.link_chosen(), MenuState::Collapsed);
    }

    #[test]
    fn only_the_expanded_state_reads_as_active() {
        assert!(MenuState::Expanded.is_expanded());
        assert!(!MenuState::Collapsed.is_expanded());
    }
}
