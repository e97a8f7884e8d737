//! TravelX UI - Leptos-based navigation bar.
//!
//! This crate provides the site header for TravelX: the fixed navigation bar
//! with its anchor links, dark-mode toggle and collapsible mobile menu, plus
//! the application shell that owns the theme flag.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod components;
pub mod theme;

pub use app::App;
pub use components::Navbar;
