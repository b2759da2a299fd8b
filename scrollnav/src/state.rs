/// Direction of one scroll sample relative to the previous one.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ScrollDirection {
    Up,
    Down,
    /// Same offset, or offsets that don't compare (NaN).
    Unchanged,
}

impl ScrollDirection {
    pub fn between(previous: f64, current: f64) -> Self {
        if current < previous {
            ScrollDirection::Up
        } else if current > previous {
            ScrollDirection::Down
        } else {
            ScrollDirection::Unchanged
        }
    }
}

/// Visual position of the navigation bar.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NavState {
    #[default]
    Visible,
    Hidden,
}

impl NavState {
    /// Only an upward scroll reveals the bar; unchanged offsets hide it too.
    pub fn after(direction: ScrollDirection) -> Self {
        match direction {
            ScrollDirection::Up => NavState::Visible,
            ScrollDirection::Down | ScrollDirection::Unchanged => NavState::Hidden,
        }
    }

    /// CSS value for the element's `top` property.
    pub fn top_style(self, hidden_offset: f64) -> String {
        match self {
            NavState::Visible => "0".to_string(),
            NavState::Hidden => format!("-{}px", hidden_offset),
        }
    }

    pub fn is_visible(self) -> bool {
        self == NavState::Visible
    }
}
