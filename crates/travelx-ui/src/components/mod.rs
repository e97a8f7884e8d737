//! UI components for TravelX.

pub mod navbar;

pub use navbar::Navbar;
