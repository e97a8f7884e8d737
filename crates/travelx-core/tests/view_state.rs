//! Scenario tests walking the bar's observable view-state contract.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use travelx_core::{
    MOBILE_BREAKPOINT_PX, MenuState, NAV_ITEMS, SCROLL_SHADOW_THRESHOLD_PX, ScrollState, Theme,
    collapses_menu, fragment_id,
};

#[test]
fn open_menu_survives_mobile_resizes_and_dies_on_desktop() {
    // User opens the menu on a phone, rotates (still narrow), then the
    // window is dragged wide: the panel must close exactly at that point.
    let mut menu = MenuState::default().toggled();
    assert!(menu.is_open());

    for width in [320.0, 414.0, 768.0] {
        menu = menu.after_resize(width);
        assert!(menu.is_open(), "resize to {width} must not close the menu");
    }

    menu = menu.after_resize(MOBILE_BREAKPOINT_PX + 1.0);
    assert!(!menu.is_open());

    // A later narrow resize never reopens it.
    menu = menu.after_resize(320.0);
    assert!(!menu.is_open());
}

#[test]
fn selecting_a_link_dismisses_the_open_panel() {
    // Open the panel, follow a link (forced close), reopen with the button.
    let mut menu = MenuState::Closed.toggled();
    assert!(menu.is_open());

    menu = MenuState::Closed;
    assert!(!menu.is_open());

    menu = menu.toggled();
    assert!(menu.is_open());
}

#[test]
fn scroll_state_tracks_the_live_offset_without_hysteresis() {
    let offsets = [0.0, 5.0, 10.0, 11.0, 200.0, 10.0, 3.0];
    let expected = [false, false, false, true, true, false, false];

    for (offset, scrolled) in offsets.iter().zip(expected) {
        assert_eq!(
            ScrollState::from_offset(*offset).is_scrolled(),
            scrolled,
            "offset {offset}"
        );
    }
    assert!((SCROLL_SHADOW_THRESHOLD_PX - 10.0).abs() < f64::EPSILON);
}

#[test]
fn every_nav_item_has_a_lowercase_fragment_without_whitespace() {
    for item in NAV_ITEMS {
        let fragment = item.fragment();
        assert!(!fragment.is_empty());
        assert!(fragment.chars().all(|c| !c.is_whitespace()));
        assert_eq!(fragment, fragment.to_lowercase());
        assert_eq!(item.href(), format!("#{fragment}"));
    }
    assert_eq!(fragment_id("About Us"), "aboutus");
}

#[test]
fn theme_round_trips_through_the_owner_callback() {
    // The bar never mutates the flag; it only asks the owner to flip it.
    // Model that as repeated toggles and check parity.
    let mut theme = Theme::default();
    for _ in 0..3 {
        theme = theme.toggled();
    }
    assert!(theme.is_dark());
    theme = theme.toggled();
    assert!(!theme.is_dark());
}

#[test]
fn breakpoint_is_strictly_greater_than() {
    assert!(!collapses_menu(MOBILE_BREAKPOINT_PX));
    assert!(collapses_menu(MOBILE_BREAKPOINT_PX + 0.5));
}
