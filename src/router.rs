//! View routing: which static panel is on screen.
//!
//! The router owns the single `ActiveTab` selector. Panels are borrowed from
//! the content document on demand, so the router itself is plain data.

use tracing::{debug, trace};

use crate::models::{ActiveTab, CoachingContent, Content, HomeContent, ProfileContent, ProgressContent};

/// The static panel for one tab, borrowing its section of the content
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Panel<'a> {
    Home(&'a HomeContent),
    Progress(&'a ProgressContent),
    Coaching(&'a CoachingContent),
    Profile(&'a ProfileContent),
}

impl Panel<'_> {
    /// Tab this panel belongs to
    #[allow(dead_code)]
    pub fn tab(&self) -> ActiveTab {
        match self {
            Panel::Home(_) => ActiveTab::Home,
            Panel::Progress(_) => ActiveTab::Progress,
            Panel::Coaching(_) => ActiveTab::Coaching,
            Panel::Profile(_) => ActiveTab::Profile,
        }
    }
}

/// Owner of the active tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRouter {
    active: ActiveTab,
}

impl ViewRouter {
    /// New router showing the Home panel
    pub fn new() -> Self {
        Self {
            active: ActiveTab::Home,
        }
    }

    pub fn active(&self) -> ActiveTab {
        self.active
    }

    /// Replace the active tab. Reselecting the current tab changes nothing.
    pub fn select(&mut self, tab: ActiveTab) {
        if self.active == tab {
            trace!(tab = tab.label(), "tab reselected");
            return;
        }
        debug!(from = self.active.label(), to = tab.label(), "tab selected");
        self.active = tab;
    }

    /// Panel for the active tab
    pub fn current_panel<'a>(&self, content: &'a Content) -> Panel<'a> {
        match self.active {
            ActiveTab::Home => Panel::Home(&content.home),
            ActiveTab::Progress => Panel::Progress(&content.progress),
            ActiveTab::Coaching => Panel::Coaching(&content.coaching),
            ActiveTab::Profile => Panel::Profile(&content.profile),
        }
    }
}
