//! Home panel: greeting hero, streak tiles and today's timeline

use ratatui::{prelude::*, widgets::Paragraph};

use super::helpers::{
    card_block, card_height, card_inner_width, columns, section_header, split_line, stack,
    tracked, wrapped_lines,
};
use crate::models::{Glyph, HomeContent, Reading, Streak, TimelineEntry};
use crate::theme::{
    accent_color, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PALE, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};

/// Rows inside a streak tile
const STREAK_HEIGHT: u16 = 4;
/// Rows inside a timeline card
const TIMELINE_ENTRY_HEIGHT: u16 = 4;

/// Render the Home panel into `area`
pub fn render_home(area: Rect, home: &HomeContent, frame: &mut Frame) {
    let hero = hero_lines(home, card_inner_width(area));
    let mut heights = vec![card_height(hero.len()), STREAK_HEIGHT, 1];
    heights.extend(home.timeline.iter().map(|_| TIMELINE_ENTRY_HEIGHT));
    let rows = stack(area, &heights);

    let hero_card = Paragraph::new(hero).block(card_block(BORDER_SUBTLE, BG_TERTIARY));
    frame.render_widget(hero_card, rows[0]);

    render_streaks(rows[1], &home.streaks, frame);

    let header = section_header(
        &home.timeline_title,
        Some(&home.timeline_action),
        rows[2].width as usize,
    );
    frame.render_widget(Paragraph::new(header), rows[2]);

    for (entry, row) in home.timeline.iter().zip(rows.iter().skip(3)) {
        render_timeline_entry(*row, entry, frame);
    }
}

/// Greeting, headline, tagline and the two hero readings
fn hero_lines(home: &HomeContent, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        split_line(
            vec![Span::styled(tracked(&home.greeting), Style::default().fg(CYAN_PALE))],
            vec![Span::styled(
                format!(" {} ", home.platform_badge),
                Style::default().fg(TEXT_PRIMARY).bg(BORDER_SUBTLE),
            )],
            width,
        ),
        Line::default(),
    ];
    lines.extend(wrapped_lines(
        &home.headline,
        width,
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    ));
    lines.extend(wrapped_lines(
        &home.tagline,
        width,
        Style::default().fg(TEXT_SECONDARY),
    ));
    lines.push(Line::default());
    lines.extend(reading_lines(&home.daily_move, &home.heart_rate, width));
    lines
}

/// Two readings side by side, separated by a thin rule
fn reading_lines(left: &Reading, right: &Reading, width: usize) -> [Line<'static>; 2] {
    let column = width.saturating_sub(3) / 2;
    let label_style = Style::default().fg(CYAN_PALE);
    let value_style = Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD);
    let rule = Span::styled(" │ ", Style::default().fg(BORDER_SUBTLE));

    let mut values = vec![
        Span::styled(format!("{:<column$}", left.value), value_style),
        rule.clone(),
        Span::styled(right.value.clone(), value_style),
    ];
    if let Some(note) = right.note.as_ref() {
        values.push(Span::styled(format!(" {}", note), Style::default().fg(TEXT_MUTED)));
    }

    [
        Line::from(vec![
            Span::styled(format!("{:<column$}", tracked(&left.label)), label_style),
            rule,
            Span::styled(tracked(&right.label), label_style),
        ]),
        Line::from(values),
    ]
}

fn render_streaks(area: Rect, streaks: &[Streak], frame: &mut Frame) {
    let tiles = columns(area, streaks.len());
    for (streak, tile) in streaks.iter().zip(tiles.iter()) {
        let color = accent_color(streak.accent);
        let content = vec![
            Line::from(Span::styled(streak.label.to_uppercase(), Style::default().fg(TEXT_MUTED))),
            Line::from(Span::styled(
                streak.value.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ];
        let paragraph = Paragraph::new(content).block(card_block(color, BG_SECONDARY));
        frame.render_widget(paragraph, *tile);
    }
}

fn render_timeline_entry(area: Rect, entry: &TimelineEntry, frame: &mut Frame) {
    let width = card_inner_width(area);
    let color = accent_color(entry.accent);

    let content = vec![
        split_line(
            vec![
                Span::styled(format!("{} ", entry.icon.symbol()), Style::default().fg(color)),
                Span::styled(format!("{}  ", entry.time), Style::default().fg(TEXT_MUTED)),
                Span::styled(
                    entry.title.clone(),
                    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
                ),
            ],
            vec![Span::styled(Glyph::Chevron.symbol(), Style::default().fg(TEXT_MUTED))],
            width,
        ),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(entry.meta.clone(), Style::default().fg(TEXT_SECONDARY)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(card_block(BORDER_SUBTLE, BG_SECONDARY));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Content;
    use crate::ui::test_support::render_to_text;

    #[test]
    fn test_home_shows_timeline_in_order() {
        let content = Content::embedded().unwrap();
        let text = render_to_text(56, 40, |frame| {
            render_home(frame.area(), &content.home, frame)
        });

        let run = text.find("Sunrise Run").unwrap();
        let fuel = text.find("Fuel Up").unwrap();
        let wind = text.find("Wind Down").unwrap();
        assert!(run < fuel && fuel < wind);
        assert!(text.contains("Mediterranean Bowl · 620 kcal"));
    }

    #[test]
    fn test_home_shows_hero_and_streaks() {
        let content = Content::embedded().unwrap();
        let text = render_to_text(56, 40, |frame| {
            render_home(frame.area(), &content.home, frame)
        });

        assert!(text.contains("G O O D   M O R N I N G"));
        assert!(text.contains("620 kcal"));
        assert!(text.contains("93 bpm"));
        assert!(text.contains("12 day"));
        assert!(text.contains("92%"));
        assert!(text.contains("View plan ›"));
    }

    #[test]
    fn test_reading_lines_align_columns() {
        let content = Content::embedded().unwrap();
        let [labels, values] = reading_lines(&content.home.daily_move, &content.home.heart_rate, 43);
        let labels = labels.to_string();
        let values = values.to_string();
        assert_eq!(labels.find('│'), values.find('│'));
    }
}
