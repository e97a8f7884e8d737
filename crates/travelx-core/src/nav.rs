//! Navigation items and anchor fragment derivation.
//!
//! The item set is fixed for the lifetime of the bar; each label maps
//! deterministically to the in-page anchor it links to.

/// Brand string shown in the bar's heading.
pub const BRAND: &str = "TravelX";

/// A single navigation entry: a visible label and its derived anchor target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    label: &'static str,
}

impl NavItem {
    /// Create an item from its visible label.
    #[must_use]
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }

    /// The visible label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.label
    }

    /// The fragment identifier derived from the label.
    #[must_use]
    pub fn fragment(self) -> String {
        fragment_id(self.label)
    }

    /// The anchor href, e.g. `#aboutus` for "About Us".
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.fragment())
    }
}

/// The fixed, ordered set of navigation items.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem::new("Destinations"),
    NavItem::new("Packages"),
    NavItem::new("About Us"),
    NavItem::new("Blog"),
    NavItem::new("Contact"),
];

/// Derive a fragment identifier from a label: lowercase, whitespace removed.
///
/// Total and deterministic for any input.
#[must_use]
pub fn fragment_id(label: &str) -> String {
    label.to_lowercase().split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id_strips_whitespace_and_lowercases() {
        assert_eq!(fragment_id("About Us"), "aboutus");
        assert_eq!(fragment_id("Destinations"), "destinations");
    }

    #[test]
    fn test_fragment_id_is_total() {
        assert_eq!(fragment_id(""), "");
        assert_eq!(fragment_id("  "), "");
        assert_eq!(fragment_id("A  B\tC"), "abc");
    }

    #[test]
    fn test_nav_items_order_and_hrefs() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|i| i.label()).collect();
        assert_eq!(
            labels,
            ["Destinations", "Packages", "About Us", "Blog", "Contact"]
        );
        assert_eq!(NAV_ITEMS[2].href(), "#aboutus");
    }

    #[test]
    fn test_brand() {
        assert_eq!(BRAND, "TravelX");
    }
}
