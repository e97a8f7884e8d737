//! Main application shell.

use leptos::prelude::*;

use travelx_core::Theme;

use crate::components::Navbar;
use crate::theme::generate_css_variables;

/// Root component: owns the theme flag and hosts the navigation bar.
///
/// The theme is lifted state. `Navbar` reads it through the signal and flips
/// it through the callback; it never writes the flag itself, so this shell
/// stays the single source of truth.
#[component]

pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    let (theme, set_theme) = signal(Theme::default());

    let toggle_theme = Callback::new(move |()| {
        set_theme.update(|theme| *theme = theme.toggled());
    });

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <Navbar theme=theme on_toggle_theme=toggle_theme />
    }
}
