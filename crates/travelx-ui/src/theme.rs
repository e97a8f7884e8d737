//! Theme configuration for TravelX.
//!
//! Two treatments driven by CSS custom properties: the light default (brand
//! gradient over white text) and a dark mode (translucent indigo with yellow
//! accents). The dark values are scoped under `.theme-dark` so the active
//! class on the bar selects the whole set at once.

/// Color palette for the navigation bar.
pub mod colors {
    /// Light (default) treatment.
    pub mod light {
        /// Bar background - the brand gradient, left to right.
        pub const BAR: &str = "linear-gradient(to right, #60a5fa, #22d3ee, #4ade80)";
        /// Mobile panel background - the same gradient, top to bottom.
        pub const PANEL: &str = "linear-gradient(to bottom, #60a5fa, #22d3ee, #4ade80)";
        /// Body text over the gradient.
        pub const TEXT: &str = "#ffffff";
        /// Brand heading.
        pub const BRAND: &str = "#ffffff";
        /// Brand heading on hover.
        pub const BRAND_HOVER: &str = "#fef08a";
        /// Navigation links.
        pub const LINK: &str = "#ffffff";
        /// Navigation links on hover.
        pub const LINK_HOVER: &str = "#fde047";
    }

    /// Dark treatment.
    pub mod dark {
        /// Bar background - translucent deep indigo.
        pub const BAR: &str = "rgba(49, 46, 129, 0.9)";
        /// Mobile panel background - slightly more opaque than the bar.
        pub const PANEL: &str = "rgba(49, 46, 129, 0.95)";
        /// Body text.
        pub const TEXT: &str = "#ffffff";
        /// Brand heading.
        pub const BRAND: &str = "#fde047";
        /// Brand heading on hover.
        pub const BRAND_HOVER: &str = "#facc15";
        /// Navigation links.
        pub const LINK: &str = "#fef08a";
        /// Navigation links on hover.
        pub const LINK_HOVER: &str = "#facc15";
    }

    /// Accents shared by both treatments.
    pub mod accent {
        /// Underline that grows under a hovered link.
        pub const UNDERLINE: &str = "#fde047";
    }

    /// Scroll treatment.
    pub mod shadow {
        /// Drop shadow once the page is scrolled past the threshold.
        pub const SCROLLED: &str =
            "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)";
        /// Bottom border paired with the scrolled shadow.
        pub const SCROLLED_BORDER: &str = "rgba(255, 255, 255, 0.2)";
    }
}

/// Typography configuration.
pub mod typography {
    /// Font family - system stack.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
}

/// Animation/transition configuration.
pub mod animation {
    /// One-shot entrance slide of the bar.
    pub const ENTRANCE: &str = "0.6s cubic-bezier(0, 0, 0.2, 1)";
    /// Theme color cross-fade.
    pub const THEME_FADE: &str = "0.5s cubic-bezier(0.4, 0, 0.2, 1)";
    /// Hover feedback.
    pub const HOVER: &str = "0.3s cubic-bezier(0.4, 0, 0.2, 1)";
}

/// Generate CSS custom properties for both theme treatments.
///
/// Emits a `:root` block carrying the light values and a `.theme-dark`
/// block overriding them, so toggling the class on the bar switches the
/// whole treatment.
#[must_use]
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Light treatment */
  --bar-background: {light_bar};
  --panel-background: {light_panel};
  --text-primary: {light_text};
  --brand-color: {light_brand};
  --brand-hover: {light_brand_hover};
  --link-color: {light_link};
  --link-hover: {light_link_hover};

  /* Shared */
  --underline-color: {underline};
  --scrolled-shadow: {scrolled_shadow};
  --scrolled-border: {scrolled_border};
  --font-family: {font_family};

  /* Transitions */
  --transition-entrance: {transition_entrance};
  --transition-theme-fade: {transition_theme_fade};
  --transition-hover: {transition_hover};
}}

.theme-dark {{
  --bar-background: {dark_bar};
  --panel-background: {dark_panel};
  --text-primary: {dark_text};
  --brand-color: {dark_brand};
  --brand-hover: {dark_brand_hover};
  --link-color: {dark_link};
  --link-hover: {dark_link_hover};
}}",
        light_bar = colors::light::BAR,
        light_panel = colors::light::PANEL,
        light_text = colors::light::TEXT,
        light_brand = colors::light::BRAND,
        light_brand_hover = colors::light::BRAND_HOVER,
        light_link = colors::light::LINK,
        light_link_hover = colors::light::LINK_HOVER,
        underline = colors::accent::UNDERLINE,
        scrolled_shadow = colors::shadow::SCROLLED,
        scrolled_border = colors::shadow::SCROLLED_BORDER,
        font_family = typography::FONT_FAMILY,
        transition_entrance = animation::ENTRANCE,
        transition_theme_fade = animation::THEME_FADE,
        transition_hover = animation::HOVER,
        dark_bar = colors::dark::BAR,
        dark_panel = colors::dark::PANEL,
        dark_text = colors::dark::TEXT,
        dark_brand = colors::dark::BRAND,
        dark_brand_hover = colors::dark::BRAND_HOVER,
        dark_link = colors::dark::LINK,
        dark_link_hover = colors::dark::LINK_HOVER,
    )
}
