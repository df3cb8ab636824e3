//! Open/closed state for the custom select dropdown.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

/// Whether the option list is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Visible phase, combining open state with whether a value is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownPhase {
    Closed,
    OpenEmpty,
    OpenSelected,
}

impl DropdownPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::OpenEmpty => "open-empty",
            Self::OpenSelected => "open-selected",
        }
    }
}

impl DropdownState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Button click. Disabled controls never open.
    #[must_use]
    pub fn toggle(self, disabled: bool) -> Self {
        match self {
            _ if disabled => Self::Closed,
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// An option was chosen.
    #[must_use]
    pub fn select(self) -> Self {
        Self::Closed
    }

    /// A mousedown landed outside the control.
    #[must_use]
    pub fn dismiss(self) -> Self {
        Self::Closed
    }

    pub fn phase(self, value: &str) -> DropdownPhase {
        match self {
            Self::Closed => DropdownPhase::Closed,
            Self::Open if value.is_empty() => DropdownPhase::OpenEmpty,
            Self::Open => DropdownPhase::OpenSelected,
        }
    }
}
