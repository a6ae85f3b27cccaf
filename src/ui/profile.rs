//! Profile panel: member card, connected devices and platform preferences

use ratatui::{prelude::*, widgets::Paragraph};

use super::helpers::{
    card_block, card_height, card_inner_width, section_header, split_line, stack, tracked,
    wrap_text, wrapped_lines,
};
use crate::models::{Badge, Device, Preference, ProfileContent};
use crate::theme::{
    accent_color, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY, TEXT_PRIMARY,
    TEXT_SECONDARY,
};

const DEVICE_HEIGHT: u16 = 5;

/// Render the Profile panel into `area`
pub fn render_profile(area: Rect, profile: &ProfileContent, frame: &mut Frame) {
    let width = card_inner_width(area);
    let member = member_lines(profile, width);
    let preferences = preference_lines(&profile.preferences_title, &profile.preferences, width);

    let mut heights = vec![card_height(member.len()), 1];
    heights.extend(profile.devices.iter().map(|_| DEVICE_HEIGHT));
    heights.push(card_height(preferences.len()));
    let rows = stack(area, &heights);

    let member_card = Paragraph::new(member).block(card_block(BORDER_SUBTLE, BG_SECONDARY));
    frame.render_widget(member_card, rows[0]);

    let header = section_header(&profile.devices_title, None, rows[1].width as usize);
    frame.render_widget(Paragraph::new(header), rows[1]);

    for (device, row) in profile.devices.iter().zip(rows.iter().skip(2)) {
        render_device(*row, device, &profile.device_action, frame);
    }

    let preferences_row = rows[2 + profile.devices.len()];
    let preferences_card = Paragraph::new(preferences).block(card_block(CYAN_PRIMARY, BG_TERTIARY));
    frame.render_widget(preferences_card, preferences_row);
}

fn member_lines(profile: &ProfileContent, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        split_line(
            vec![Span::styled(tracked(&profile.tier), Style::default().fg(CYAN_PRIMARY))],
            vec![Span::styled(
                format!(" {} ", profile.avatar.symbol()),
                Style::default().fg(TEXT_PRIMARY).bg(CYAN_PRIMARY),
            )],
            width,
        ),
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(wrapped_lines(
        &profile.summary,
        width,
        Style::default().fg(TEXT_SECONDARY),
    ));
    lines.push(Line::default());
    lines.push(badge_line(&profile.badges));
    lines
}

fn badge_line(badges: &[Badge]) -> Line<'static> {
    let mut spans = Vec::with_capacity(badges.len() * 2);
    for (i, badge) in badges.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", badge.label),
            Style::default()
                .fg(accent_color(badge.accent))
                .bg(BG_TERTIARY)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn render_device(area: Rect, device: &Device, action: &str, frame: &mut Frame) {
    let width = card_inner_width(area);

    let content = vec![
        split_line(
            vec![Span::styled(
                device.name.clone(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            )],
            vec![Span::styled(
                format!(" {} ", action.to_uppercase()),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .bg(accent_color(device.accent))
                    .add_modifier(Modifier::BOLD),
            )],
            width,
        ),
        Line::from(Span::styled(device.platform.clone(), Style::default().fg(TEXT_SECONDARY))),
        Line::from(Span::styled(device.status.clone(), Style::default().fg(CYAN_PRIMARY))),
    ];

    let paragraph = Paragraph::new(content).block(card_block(BORDER_SUBTLE, BG_SECONDARY));
    frame.render_widget(paragraph, area);
}

/// Bulleted preferences with a hanging indent
fn preference_lines(title: &str, preferences: &[Preference], width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    ))];

    for preference in preferences {
        let bullet = Style::default().fg(accent_color(preference.accent));
        let text = Style::default().fg(TEXT_SECONDARY);
        for (i, row) in wrap_text(&preference.text, width.saturating_sub(2)).into_iter().enumerate() {
            let marker = if i == 0 { "✦ " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, bullet),
                Span::styled(row, text),
            ]));
        }
    }
    lines
}
