//! Data models for Pulse One
//!
//! This module contains the core data structures:
//! - The tab selector and the glyph/accent tags
//! - The immutable content document every panel renders

pub mod content;
pub mod enums;

// Re-exports for convenient access
pub use content::{
    Badge, CoachingCard, CoachingContent, Content, Device, HomeContent, Metric,
    Preference, ProfileContent, ProgressContent, Reading, Stat, Streak, TimelineEntry,
};
pub use enums::{Accent, ActiveTab, Glyph};
