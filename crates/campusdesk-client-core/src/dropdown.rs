use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropdownState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownTransition {
    Opened,
    Closed,
    Unchanged(DropdownState),
}

impl DropdownState {
    /// Toggle-button click.
    pub fn toggle(&mut self) -> DropdownTransition {
        match self {
            Self::Hidden => {
                *self = Self::Visible;
                DropdownTransition::Opened
            }
            Self::Visible => {
                *self = Self::Hidden;
                DropdownTransition::Closed
            }
        }
    }

    /// Click outside the dropdown and its toggle.
    pub fn dismiss(&mut self) -> DropdownTransition {
        match self {
            Self::Visible => {
                *self = Self::Hidden;
                DropdownTransition::Closed
            }
            Self::Hidden => DropdownTransition::Unchanged(Self::Hidden),
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

impl DropdownTransition {
    /// Only the hidden to visible edge acknowledges notifications.
    #[must_use]
    pub fn should_acknowledge(self) -> bool {
        self == Self::Opened
    }

    #[must_use]
    pub fn resulting_state(self) -> DropdownState {
        match self {
            Self::Opened => DropdownState::Visible,
            Self::Closed => DropdownState::Hidden,
            Self::Unchanged(state) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_and_acknowledges_only_on_open() {
        let mut state = DropdownState::default();
        let opened = state.toggle();
        assert_eq!(opened, DropdownTransition::Opened);
        assert!(opened.should_acknowledge());
        assert!(state.is_visible());

        let closed = state.toggle();
        assert_eq!(closed, DropdownTransition::Closed);
        assert!(!closed.should_acknowledge());
        assert_eq!(state, DropdownState::Hidden);
    }

    #[test]
    fn dismiss_closes_without_acknowledging() {
        let mut state = DropdownState::Visible;
        let transition = state.dismiss();
        assert_eq!(transition, DropdownTransition::Closed);
        assert!(!transition.should_acknowledge());

        let again = state.dismiss();
        assert_eq!(again, DropdownTransition::Unchanged(DropdownState::Hidden));
        assert_eq!(again.resulting_state(), DropdownState::Hidden);
    }
}
