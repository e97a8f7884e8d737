//! Menu and scroll state driven by viewport events.
//!
//! Both states are recomputed per event; there is no continuous enforcement
//! between events, no hysteresis and no debounce.

/// Viewport width above which the collapsible menu is forced closed.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Vertical scroll offset above which the bar gains its shadow treatment.
pub const SCROLL_SHADOW_THRESHOLD_PX: f64 = 10.0;

/// Whether a viewport of the given width forces the mobile menu closed.
#[must_use]
pub fn collapses_menu(viewport_width: f64) -> bool {
    viewport_width > MOBILE_BREAKPOINT_PX
}

/// Open/closed state of the collapsible mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// The mobile panel is rendered.
    Open,
    /// The mobile panel does not exist in the rendered tree.
    #[default]
    Closed,
}

impl MenuState {
    /// Flip the state (menu button activation).
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// The state after a resize event at the given viewport width.
    ///
    /// A width beyond the breakpoint forces the menu closed; anything else
    /// leaves the state untouched (a resize never opens the menu).
    #[must_use]
    pub fn after_resize(self, viewport_width: f64) -> Self {
        if collapses_menu(viewport_width) {
            Self::Closed
        } else {
            self
        }
    }

    /// Whether the mobile panel is currently open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Whether the page is scrolled past the shadow threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// At (or within the threshold of) the top of the page.
    #[default]
    AtTop,
    /// Scrolled past the threshold; the bar shows its shadow/border.
    Scrolled,
}

impl ScrollState {
    /// Derive the state from a live vertical scroll offset.
    #[must_use]
    pub fn from_offset(offset_px: f64) -> Self {
        if offset_px > SCROLL_SHADOW_THRESHOLD_PX {
            Self::Scrolled
        } else {
            Self::AtTop
        }
    }

    /// Whether the shadow treatment applies.
    #[must_use]
    pub const fn is_scrolled(self) -> bool {
        matches!(self, Self::Scrolled)
    }
}
