//! Navigation bar model.
//!
//! The bar is a fixed table of four items. Selecting an item forwards to the
//! view router; the bar keeps no state of its own.

use crate::models::{ActiveTab, Glyph};
use crate::router::ViewRouter;

/// One entry in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub tab: ActiveTab,
    pub label: &'static str,
    pub glyph: Glyph,
}

impl NavItem {
    const fn for_tab(tab: ActiveTab) -> Self {
        Self {
            tab,
            label: tab.label(),
            glyph: tab.glyph(),
        }
    }
}

/// Navigation items in display order
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem::for_tab(ActiveTab::Home),
    NavItem::for_tab(ActiveTab::Progress),
    NavItem::for_tab(ActiveTab::Coaching),
    NavItem::for_tab(ActiveTab::Profile),
];

/// Handle activation of a navigation item
pub fn on_select(router: &mut ViewRouter, tab: ActiveTab) {
    router.select(tab);
}

/// Which items render as active for the given tab
pub fn active_flags(active: ActiveTab) -> [bool; 4] {
    NAV_ITEMS.map(|item| item.tab == active)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_follow_tab_order() {
        for (i, item) in NAV_ITEMS.iter().enumerate() {
            assert_eq!(item.tab.index(), i);
        }
    }

    #[test]
    fn test_nav_item_labels_and_glyphs() {
        let table: Vec<(&str, Glyph)> = NAV_ITEMS.iter().map(|i| (i.label, i.glyph)).collect();
        assert_eq!(
            table,
            vec![
                ("Home", Glyph::Home),
                ("Progress", Glyph::Trophy),
                ("Coaching", Glyph::Message),
                ("Profile", Glyph::User),
            ]
        );
    }

    #[test]
    fn test_exactly_one_item_active() {
        for tab in ActiveTab::ALL {
            let flags = active_flags(tab);
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            assert!(flags[tab.index()]);
        }
    }

    #[test]
    fn test_on_select_updates_router() {
        let mut router = ViewRouter::new();
        on_select(&mut router, ActiveTab::Coaching);
        assert_eq!(router.active(), ActiveTab::Coaching);
        on_select(&mut router, ActiveTab::Coaching);
        assert_eq!(router.active(), ActiveTab::Coaching);
    }
}
