//! Theme module for pulse-one
//!
//! This module provides a centralized color palette and styling constants
//! for the dark "slate and cyan" phone-card look.

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::models::Accent;

// ============================================================================
// Background Colors - Slate Palette
// ============================================================================

/// Primary background color - slate 950 (#020617)
pub const BG_PRIMARY: Color = Color::Rgb(2, 6, 23);

/// Card background color - slate 900 (#0f172a)
pub const BG_SECONDARY: Color = Color::Rgb(15, 23, 42);

/// Hero card background color - slate 800 (#1e293b)
pub const BG_TERTIARY: Color = Color::Rgb(30, 41, 59);

/// Subtle border color - slate 700 (#334155)
pub const BORDER_SUBTLE: Color = Color::Rgb(51, 65, 85);

/// Rounded border set shared by all cards
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Accent Colors - Cyan Primary
// ============================================================================

/// Primary cyan accent color (#22d3ee)
pub const CYAN_PRIMARY: Color = Color::Rgb(34, 211, 238);

/// Pale cyan used for eyebrows and small caps (#a5f3fc)
pub const CYAN_PALE: Color = Color::Rgb(165, 243, 252);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#f8fafc)
pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252);

/// Secondary text color - slate 300 (#cbd5e1)
pub const TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225);

/// Muted text color - for labels, hints and inactive nav items (#94a3b8)
pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184);

// ============================================================================
// Navigation
// ============================================================================

/// Background of the active navigation item
pub const NAV_ACTIVE_BG: Color = TEXT_PRIMARY;

/// Foreground of the active navigation item
pub const NAV_ACTIVE_FG: Color = BG_SECONDARY;

/// Map a content accent tag to its terminal color
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Emerald => Color::Rgb(16, 185, 129),
        Accent::Cyan => CYAN_PRIMARY,
        Accent::Orange => Color::Rgb(251, 146, 60),
        Accent::Rose => Color::Rgb(244, 63, 94),
        Accent::Indigo => Color::Rgb(129, 140, 248),
        Accent::Purple => Color::Rgb(168, 85, 247),
        Accent::Sky => Color::Rgb(14, 165, 233),
        Accent::Pink => Color::Rgb(236, 72, 153),
        Accent::Violet => Color::Rgb(139, 92, 246),
        Accent::Lime => Color::Rgb(132, 204, 22),
    }
}
