//! TravelX Core Library
//!
//! This crate provides the framework-free view-state model for the TravelX
//! navigation bar:
//! - The fixed set of navigation items and their anchor fragments
//! - Menu and scroll state transitions driven by viewport events
//! - The light/dark theme flag
//!
//! Nothing here touches the DOM; the UI crate maps browser events onto these
//! transitions and renders the result.

pub mod nav;
pub mod theme;
pub mod viewport;

pub use nav::{BRAND, NAV_ITEMS, NavItem, fragment_id};
pub use theme::Theme;
pub use viewport::{
    MOBILE_BREAKPOINT_PX, MenuState, SCROLL_SHADOW_THRESHOLD_PX, ScrollState, collapses_menu,
};
