//! Coaching panel: live feedback hero and coaching channels
//!
//! "Start Session" and "Drop in" are drawn as placeholders only; no input
//! reaches them.

use ratatui::{prelude::*, widgets::Paragraph};

use super::helpers::{
    card_block, card_height, card_inner_width, section_header, split_line, stack, tracked,
    wrapped_lines,
};
use crate::models::{CoachingCard, CoachingContent, Glyph};
use crate::theme::{
    accent_color, BG_PRIMARY, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PALE, CYAN_PRIMARY,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Render the Coaching panel into `area`
pub fn render_coaching(area: Rect, coaching: &CoachingContent, frame: &mut Frame) {
    let width = card_inner_width(area);
    let hero = hero_lines(coaching, width);
    let cards: Vec<Vec<Line<'static>>> = coaching
        .channels
        .iter()
        .map(|card| channel_lines(card, &coaching.channel_action, width))
        .collect();

    let mut heights = vec![card_height(hero.len()), 1];
    heights.extend(cards.iter().map(|lines| card_height(lines.len())));
    let rows = stack(area, &heights);

    let hero_card = Paragraph::new(hero).block(card_block(BORDER_SUBTLE, BG_TERTIARY));
    frame.render_widget(hero_card, rows[0]);

    let header = section_header(&coaching.channels_title, None, rows[1].width as usize);
    frame.render_widget(Paragraph::new(header), rows[1]);

    for ((card, lines), row) in coaching.channels.iter().zip(cards).zip(rows.iter().skip(2)) {
        let paragraph =
            Paragraph::new(lines).block(card_block(accent_color(card.accent), BG_SECONDARY));
        frame.render_widget(paragraph, *row);
    }
}

fn hero_lines(coaching: &CoachingContent, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        split_line(
            vec![Span::styled(tracked(&coaching.eyebrow), Style::default().fg(CYAN_PALE))],
            vec![Span::styled(
                format!(" {} ", coaching.badge),
                Style::default().fg(TEXT_PRIMARY).bg(BORDER_SUBTLE),
            )],
            width,
        ),
        Line::default(),
    ];
    lines.extend(wrapped_lines(
        &coaching.headline,
        width,
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    ));
    lines.extend(wrapped_lines(
        &coaching.tagline,
        width,
        Style::default().fg(TEXT_SECONDARY),
    ));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" {} {} ", coaching.session_action.to_uppercase(), Glyph::Chevron.symbol()),
        Style::default()
            .fg(BG_PRIMARY)
            .bg(CYAN_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

fn channel_lines(card: &CoachingCard, action: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", card.icon.symbol()), Style::default().fg(CYAN_PALE)),
        Span::styled(
            card.header.clone(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.extend(wrapped_lines(
        &card.subtitle,
        width,
        Style::default().fg(TEXT_SECONDARY),
    ));
    lines.push(Line::from(Span::styled(
        tracked(&card.coach),
        Style::default().fg(CYAN_PRIMARY),
    )));
    lines.push(Line::from(Span::styled(
        format!("{} {}", action.to_uppercase(), Glyph::Chevron.symbol()),
        Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Content;
    use crate::ui::test_support::render_to_text;

    #[test]
    fn test_coaching_shows_hero_and_session_action() {
        let content = Content::embedded().unwrap();
        let text = render_to_text(56, 40, |frame| {
            render_coaching(frame.area(), &content.coaching, frame)
        });

        assert!(text.contains("L I V E   F E E D B A C K"));
        assert!(text.contains("HD haptics"));
        assert!(text.contains("START SESSION ›"));
    }

    #[test]
    fn test_coaching_shows_each_channel() {
        let content = Content::embedded().unwrap();
        let text = render_to_text(56, 40, |frame| {
            render_coaching(frame.area(), &content.coaching, frame)
        });

        assert!(text.contains("Performance Blueprint"));
        assert!(text.contains("Recovery Studio"));
        assert!(text.contains("C O A C H   R I L E Y"));
        assert_eq!(text.matches("DROP IN ›").count(), 2);
    }

    #[test]
    fn test_channel_height_grows_with_subtitle() {
        let content = Content::embedded().unwrap();
        let card = &content.coaching.channels[0];
        let wide = channel_lines(card, "Drop in", 80);
        let narrow = channel_lines(card, "Drop in", 20);
        assert!(narrow.len() > wide.len());
    }
}
