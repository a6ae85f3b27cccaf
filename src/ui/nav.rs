//! Navigation bar rendering and pointer hit testing

use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::shell_layout;
use crate::models::ActiveTab;
use crate::nav::{active_flags, NAV_ITEMS};
use crate::theme::{BG_SECONDARY, BORDER_SUBTLE, NAV_ACTIVE_BG, NAV_ACTIVE_FG, ROUNDED_BORDERS, TEXT_MUTED};

/// Screen areas of the four nav items inside a bar drawn at `nav_area`
pub fn nav_item_areas(nav_area: Rect) -> [Rect; 4] {
    let inner = nav_area.inner(Margin::new(1, 1));
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);
    [cells[0], cells[1], cells[2], cells[3]]
}

/// Render the navigation bar with `active` highlighted
pub fn render_nav_bar(area: Rect, active: ActiveTab, frame: &mut Frame) {
    let bar = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    frame.render_widget(bar, area);

    let flags = active_flags(active);
    for ((item, cell), is_active) in NAV_ITEMS.iter().zip(nav_item_areas(area)).zip(flags) {
        let style = if is_active {
            Style::default()
                .fg(NAV_ACTIVE_FG)
                .bg(NAV_ACTIVE_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };

        let label = Paragraph::new(format!("{} {}", item.glyph.symbol(), item.label))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(label, cell);
    }
}

/// Nav item under the pointer, if any, for a frame of size `viewport`
pub fn hit_test(viewport: Rect, column: u16, row: u16) -> Option<ActiveTab> {
    let nav = shell_layout(viewport).nav;
    nav_item_areas(nav)
        .iter()
        .position(|cell| cell.contains(Position::new(column, row)))
        .map(ActiveTab::from_index)
}
