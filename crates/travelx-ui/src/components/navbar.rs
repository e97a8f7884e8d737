//! Site navigation bar.
//!
//! A fixed header with the TravelX brand, anchor links to the page sections,
//! a dark-mode toggle and a collapsible mobile menu. Menu and scroll state
//! live here; the theme flag is owned by the shell and arrives as a read-only
//! signal plus a toggle callback.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use travelx_core::{BRAND, MenuState, NAV_ITEMS, NavItem, ScrollState, Theme};

/// Delay before the entrance transition is released, in milliseconds.
///
/// The bar has to paint once in its offset state so the move to rest runs as
/// a transition instead of landing instantly.
const ENTRANCE_DELAY_MS: u32 = 30;

/// SVG path data for the bar's icons.
mod icons {
    /// Hamburger icon shown while the mobile menu is closed.
    pub const MENU: &str = "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z";
    /// X icon shown while the mobile menu is open.
    pub const CLOSE: &str = "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z";
    /// Sun icon shown while dark mode is active.
    pub const SUN: &str = "M6.76 4.84l-1.8-1.79-1.41 1.41 1.79 1.79 1.42-1.41zM4 10.5H1v2h3v-2zm9-9.95h-2V3.5h2V.55zm7.45 3.91l-1.41-1.41-1.79 1.79 1.41 1.41 1.79-1.79zm-3.21 13.7l1.79 1.8 1.41-1.41-1.8-1.79-1.4 1.4zM20 10.5v2h3v-2h-3zm-8-5c-3.31 0-6 2.69-6 6s2.69 6 6 6 6-2.69 6-6-2.69-6-6-6zm-1 16.95h2V19.5h-2v2.95zm-7.45-3.91l1.41 1.41 1.79-1.8-1.41-1.41-1.79 1.8z";
    /// Moon icon shown while light mode is active.
    pub const MOON: &str = "M9.37 5.51c-.18.64-.27 1.31-.27 1.99 0 4.08 3.32 7.4 7.4 7.4.68 0 1.35-.09 1.99-.27C17.45 17.19 14.93 19 12 19c-3.86 0-7-3.14-7-7 0-2.93 1.81-5.45 4.37-6.49M12 3c-4.97 0-9 4.03-9 9s4.03 9 9 9 9-4.03 9-9c0-.46-.04-.92-.1-1.36-.98 1.37-2.58 2.26-4.4 2.26-2.98 0-5.4-2.42-5.4-5.4 0-1.81.89-3.42 2.26-4.4-.44-.06-.9-.1-1.36-.1z";
}

/// Live viewport width, if a window is present.
fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Live vertical scroll offset, if a window is present.
fn scroll_offset() -> Option<f64> {
    web_sys::window().and_then(|window| window.scroll_y().ok())
}

/// The site navigation bar.
///
/// Registers window `resize` and `scroll` listeners on setup and removes
/// them on cleanup, so the subscriptions live exactly as long as this
/// component instance.
#[component]

pub fn Navbar(
    /// Current theme, owned by the shell.
    #[prop(into)]
    theme: Signal<Theme>,
    /// Flips the theme in the owning scope.
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let (scroll, set_scroll) = signal(ScrollState::default());
    let (entered, set_entered) = signal(false);

    // A resize past the breakpoint forces the mobile panel closed; narrower
    // resizes leave the state alone.
    let resize_handle = window_event_listener(ev::resize, move |_| {
        if let Some(width) = viewport_width() {
            set_menu.update(|menu| *menu = menu.after_resize(width));
        }
    });

    // The shadow treatment tracks the live offset on every scroll event.
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        if let Some(offset) = scroll_offset() {
            set_scroll.set(ScrollState::from_offset(offset));
        }
    });

    on_cleanup(move || {
        resize_handle.remove();
        scroll_handle.remove();
    });

    // Release the one-shot entrance transition shortly after mount.
    Effect::new(move || {
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ENTRANCE_DELAY_MS).await;
            set_entered.set(true);
        });
    });

    let toggle_menu = move |_| {
        set_menu.update(|menu| *menu = menu.toggled());
    };

    view! {
        <header
            class="navbar"
            class:theme-dark=move || theme.get().is_dark()
            class:theme-light=move || !theme.get().is_dark()
            class:navbar-scrolled=move || scroll.get().is_scrolled()
            class:navbar-entered=move || entered.get()
        >
            <div class="navbar-inner">
                <h1 class="navbar-brand">{BRAND}</h1>

                // Desktop link row with the inline theme toggle
                <nav class="navbar-links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| nav_link(*item, set_menu, "navbar-link"))
                        .collect_view()}
                    <ThemeToggle
                        theme=theme
                        on_toggle=on_toggle_theme
                        size="22"
                        class="navbar-theme-toggle"
                    />
                </nav>

                // Mobile menu button with hamburger/X swap
                <button
                    class="navbar-menu-toggle"
                    on:click=toggle_menu
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                >
                    <svg viewBox="0 0 24 24" width="28" height="28" fill="currentColor">
                        {move || if menu.get().is_open() {
                            view! { <path d=icons::CLOSE/> }.into_any()
                        } else {
                            view! { <path d=icons::MENU/> }.into_any()
                        }}
                    </svg>
                </button>
            </div>

            // Mobile panel: the subtree only exists while the menu is open
            {move || {
                menu.get().is_open().then(|| {
                    view! {
                        <nav class="navbar-panel">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| nav_link(*item, set_menu, "navbar-panel-link"))
                                .collect_view()}
                            <ThemeToggle
                                theme=theme
                                on_toggle=on_toggle_theme
                                size="24"
                                class="navbar-panel-theme-toggle"
                            />
                        </nav>
                    }
                })
            }}
        </header>
    }
}

/// A single anchor link. Activation dismisses the mobile panel and lets the
/// browser handle the fragment navigation natively.
fn nav_link(item: NavItem, set_menu: WriteSignal<MenuState>, class: &'static str) -> impl IntoView {
    view! {
        <a
            class=class
            href=item.href()
            on:click=move |_| set_menu.set(MenuState::Closed)
        >
            {item.label()}
            <span class="navbar-link-underline" aria-hidden="true"></span>
        </a>
    }
}

/// Theme toggle button: sun while dark (tap for light), moon while light.
#[component]
fn ThemeToggle(
    /// Current theme.
    #[prop(into)]
    theme: Signal<Theme>,
    /// Flips the theme in the owning scope.
    on_toggle: Callback<()>,
    /// Icon size in CSS pixels.
    size: &'static str,
    /// Placement class.
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            class=format!("theme-toggle {class}")
            on:click=move |_| on_toggle.run(())
            aria-label="Toggle dark mode"
        >
            <svg viewBox="0 0 24 24" width=size height=size fill="currentColor">
                {move || if theme.get().is_dark() {
                    view! { <path d=icons::SUN/> }.into_any()
                } else {
                    view! { <path d=icons::MOON/> }.into_any()
                }}
            </svg>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_paths_are_valid() {
        // Ensure all icons are non-empty path data
        assert!(icons::MENU.starts_with('M'));
        assert!(icons::CLOSE.starts_with('M'));
        assert!(icons::SUN.starts_with('M'));
        assert!(icons::MOON.starts_with('M'));
    }

    #[test]
    fn test_entrance_delay_is_short() {
        assert!(ENTRANCE_DELAY_MS < 100);
    }
}
