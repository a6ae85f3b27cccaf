//! UI helper functions shared by the panels

use std::rc::Rc;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding},
};

use crate::theme::{CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_PRIMARY};

/// Word-wrap text to at most `max_width` characters per line
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Uppercase and letter-space a label ("Daily Move" -> "D A I L Y   M O V E")
pub fn tracked(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay out spans flush left and flush right on a single line of `width` cells
pub fn split_line(left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let used: usize = left.iter().chain(right.iter()).map(|s| s.width()).sum();
    let gap = width.saturating_sub(used).max(1);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);
    Line::from(spans)
}

/// Wrapped paragraph text as styled lines
pub fn wrapped_lines(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

/// Rounded card with one cell of horizontal padding
pub fn card_block(border: Color, background: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(background))
        .padding(Padding::horizontal(1))
}

/// Usable text width inside a `card_block` drawn in `area`
pub fn card_inner_width(area: Rect) -> usize {
    area.width.saturating_sub(4) as usize
}

/// Height of a `card_block` holding `lines` rows of text
pub fn card_height(lines: usize) -> u16 {
    (lines as u16).saturating_add(2)
}

/// Section title with an optional inert action on the right
pub fn section_header(title: &str, action: Option<&str>, width: usize) -> Line<'static> {
    let left = vec![Span::styled(
        title.to_string(),
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )];
    let right = match action {
        Some(action) => vec![Span::styled(
            format!("{} ›", action),
            Style::default().fg(CYAN_PRIMARY),
        )],
        None => Vec::new(),
    };
    split_line(left, right, width)
}

/// Split `area` into rows of the given heights, top down. Rows keep their
/// full height until the area runs out; anything past the bottom edge is
/// cropped to zero height. The final row holds the leftover space.
pub fn stack(area: Rect, heights: &[u16]) -> Rc<[Rect]> {
    let bottom = area.bottom();
    let mut y = area.y;
    let mut rows: Vec<Rect> = heights
        .iter()
        .map(|h| {
            let height = (*h).min(bottom - y);
            let row = Rect::new(area.x, y, area.width, height);
            y += height;
            row
        })
        .collect();
    rows.push(Rect::new(area.x, y, area.width, bottom - y));
    rows.into()
}

/// Split `area` into `count` equal columns
pub fn columns(area: Rect, count: usize) -> Rc<[Rect]> {
    let count = count.max(1) as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello world", 0), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        assert_eq!(
            wrap_text("hello world foo bar", 10),
            vec!["hello", "world foo", "bar"]
        );
    }

    #[test]
    fn test_wrap_text_counts_characters_not_bytes() {
        // "·" is two bytes but one character
        assert_eq!(wrap_text("5 km · Urban", 12), vec!["5 km · Urban"]);
    }

    #[test]
    fn test_tracked_letter_spacing() {
        assert_eq!(tracked("Go Up"), "G O   U P");
    }

    #[test]
    fn test_split_line_fills_width() {
        let line = split_line(vec![Span::raw("left")], vec![Span::raw("right")], 20);
        assert_eq!(line.width(), 20);
        assert_eq!(line.to_string(), format!("left{}right", " ".repeat(11)));
    }

    #[test]
    fn test_split_line_keeps_a_gap_when_too_narrow() {
        let line = split_line(vec![Span::raw("left")], vec![Span::raw("right")], 4);
        assert_eq!(line.to_string(), "left right");
    }

    #[test]
    fn test_stack_heights() {
        let rows = stack(Rect::new(0, 0, 10, 20), &[3, 5]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].height, 3);
        assert_eq!(rows[1].y, 3);
        assert_eq!(rows[1].height, 5);
        assert_eq!(rows[2].height, 12);
    }

    #[test]
    fn test_stack_crops_from_the_bottom() {
        let rows = stack(Rect::new(2, 1, 10, 8), &[5, 4, 3]);
        assert_eq!(rows[0], Rect::new(2, 1, 10, 5));
        assert_eq!(rows[1], Rect::new(2, 6, 10, 3));
        assert_eq!(rows[2].height, 0);
        assert_eq!(rows[3].height, 0);
        assert_eq!(rows[3].y, 9);
    }

    #[test]
    fn test_card_height() {
        assert_eq!(card_height(3), 5);
    }
}
