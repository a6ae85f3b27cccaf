//! UI module for pulse-one
//!
//! This module lays out the phone-width shell (brand header, active panel,
//! navigation bar) and dispatches the active panel to its renderer.

mod coaching;
mod helpers;
mod home;
mod nav;
mod profile;
mod progress;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::Glyph;
use crate::router::Panel;
use crate::theme::{BG_PRIMARY, TEXT_MUTED, TEXT_SECONDARY};

pub use coaching::render_coaching;
pub use helpers::tracked;
pub use home::render_home;
pub use nav::{hit_test, render_nav_bar};
pub use profile::render_profile;
pub use progress::render_progress;

/// Widest the shell grows, in cells
pub const MAX_SHELL_WIDTH: u16 = 56;

/// Regions of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub header: Rect,
    pub content: Rect,
    pub nav: Rect,
}

/// Centre a phone-width column in `area` and split it into header, panel
/// and navigation bar
pub fn shell_layout(area: Rect) -> ShellLayout {
    let width = area.width.min(MAX_SHELL_WIDTH);
    let x = area.x + (area.width - width) / 2;
    let column = Rect::new(x, area.y, width, area.height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Brand header
            Constraint::Min(0),    // Active panel
            Constraint::Length(3), // Navigation bar
        ])
        .split(column);

    ShellLayout {
        header: rows[0],
        content: rows[1],
        nav: rows[2],
    }
}

/// Draw one full frame
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let layout = shell_layout(area);
    render_header(layout.header, &app.content().brand, frame);

    match app.current_panel() {
        Panel::Home(home) => render_home(layout.content, home, frame),
        Panel::Progress(progress) => render_progress(layout.content, progress, frame),
        Panel::Coaching(coaching) => render_coaching(layout.content, coaching, frame),
        Panel::Profile(profile) => render_profile(layout.content, profile, frame),
    }

    render_nav_bar(layout.nav, app.router().active(), frame);
}

/// Brand on the left, notification and settings glyphs on the right
fn render_header(area: Rect, brand: &str, frame: &mut Frame) {
    let line = helpers::split_line(
        vec![Span::styled(tracked(brand), Style::default().fg(TEXT_MUTED))],
        vec![Span::styled(
            format!("{} {}", Glyph::Bell.symbol(), Glyph::Settings.symbol()),
            Style::default().fg(TEXT_SECONDARY),
        )],
        area.width as usize,
    );
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, Frame, Terminal};

    /// Draw with `render` into an off-screen buffer and return its text,
    /// one line per row
    pub fn render_to_text<F>(width: u16, height: u16, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(render).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
