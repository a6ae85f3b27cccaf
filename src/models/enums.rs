//! Enums used throughout Pulse One
//!
//! This module contains the tab selector and the closed sets of glyph and
//! accent identifiers that content rows refer to.

use serde::Deserialize;

/// Which tab (and therefore which panel) is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveTab {
    #[default]
    Home,
    Progress,
    Coaching,
    Profile,
}

impl ActiveTab {
    /// All tabs in navigation bar order
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Home,
        ActiveTab::Progress,
        ActiveTab::Coaching,
        ActiveTab::Profile,
    ];

    /// Position of this tab in the navigation bar
    pub fn index(&self) -> usize {
        match self {
            ActiveTab::Home => 0,
            ActiveTab::Progress => 1,
            ActiveTab::Coaching => 2,
            ActiveTab::Profile => 3,
        }
    }

    /// Map a navigation position back to a tab.
    /// Anything out of range falls back to Home.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(ActiveTab::Home)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ActiveTab::Home => "Home",
            ActiveTab::Progress => "Progress",
            ActiveTab::Coaching => "Coaching",
            ActiveTab::Profile => "Profile",
        }
    }

    pub const fn glyph(&self) -> Glyph {
        match self {
            ActiveTab::Home => Glyph::Home,
            ActiveTab::Progress => Glyph::Trophy,
            ActiveTab::Coaching => Glyph::Message,
            ActiveTab::Profile => Glyph::User,
        }
    }

    /// Next tab to the right, wrapping around
    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len())
    }

    /// Previous tab to the left, wrapping around
    pub fn prev(&self) -> Self {
        Self::from_index((self.index() + Self::ALL.len() - 1) % Self::ALL.len())
    }
}

/// Named icon identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Activity,
    Bell,
    Chevron,
    Flame,
    HeartPulse,
    Home,
    Leaf,
    Message,
    Moon,
    Settings,
    Sparkles,
    Trophy,
    User,
}

impl Glyph {
    /// Stable identifier, matching the names used in content files
    #[allow(dead_code)]
    pub fn name(&self) -> &'static str {
        match self {
            Glyph::Activity => "activity",
            Glyph::Bell => "bell",
            Glyph::Chevron => "chevron",
            Glyph::Flame => "flame",
            Glyph::HeartPulse => "heart-pulse",
            Glyph::Home => "home",
            Glyph::Leaf => "leaf",
            Glyph::Message => "message",
            Glyph::Moon => "moon",
            Glyph::Settings => "settings",
            Glyph::Sparkles => "sparkles",
            Glyph::Trophy => "trophy",
            Glyph::User => "user",
        }
    }

    /// Single-cell terminal symbol. None of these are East Asian
    /// ambiguous width, so CJK-configured terminals keep them narrow.
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Activity => "∿",
            Glyph::Bell => "♫",
            Glyph::Chevron => "›",
            Glyph::Flame => "✹",
            Glyph::HeartPulse => "❤",
            Glyph::Home => "⌂",
            Glyph::Leaf => "❦",
            Glyph::Message => "✉",
            Glyph::Moon => "☾",
            Glyph::Settings => "☼",
            Glyph::Sparkles => "✧",
            Glyph::Trophy => "♛",
            Glyph::User => "☺",
        }
    }
}

/// Accent colour tag attached to content rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    Emerald,
    Cyan,
    Orange,
    Rose,
    Indigo,
    Purple,
    Sky,
    Pink,
    Violet,
    Lime,
}
