//! Progress panel: weekly readiness and focus areas

use ratatui::{prelude::*, widgets::Paragraph};

use super::helpers::{
    card_block, card_height, card_inner_width, columns, section_header, split_line, stack,
    tracked, wrapped_lines,
};
use crate::models::{Glyph, Metric, ProgressContent, Stat};
use crate::theme::{
    accent_color, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PALE, CYAN_PRIMARY, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

const STAT_HEIGHT: u16 = 4;
const METRIC_HEIGHT: u16 = 5;

/// Render the Progress panel into `area`
pub fn render_progress(area: Rect, progress: &ProgressContent, frame: &mut Frame) {
    let summary = readiness_lines(progress, card_inner_width(area));
    // The stat tiles sit inside the readiness card, below its text
    let readiness_height = card_height(summary.len()) + STAT_HEIGHT;

    let mut heights = vec![readiness_height, 1];
    heights.extend(progress.focus_areas.iter().map(|_| METRIC_HEIGHT));
    let rows = stack(area, &heights);

    let block = card_block(CYAN_PRIMARY, BG_TERTIARY);
    let inner = block.inner(rows[0]);
    frame.render_widget(block, rows[0]);

    let inner_rows = stack(inner, &[summary.len() as u16, STAT_HEIGHT]);
    frame.render_widget(Paragraph::new(summary), inner_rows[0]);
    render_weekly_stats(inner_rows[1], &progress.weekly_stats, frame);

    let header = section_header(&progress.focus_title, None, rows[1].width as usize);
    frame.render_widget(Paragraph::new(header), rows[1]);

    for (metric, row) in progress.focus_areas.iter().zip(rows.iter().skip(2)) {
        render_metric(*row, metric, frame);
    }
}

fn readiness_lines(progress: &ProgressContent, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        split_line(
            vec![Span::styled(
                tracked(&progress.readiness_label),
                Style::default().fg(CYAN_PALE),
            )],
            vec![Span::styled(
                progress.readiness_icon.symbol(),
                Style::default().fg(CYAN_PRIMARY),
            )],
            width,
        ),
        Line::from(Span::styled(
            progress.readiness_value.clone(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(wrapped_lines(
        &progress.readiness_summary,
        width,
        Style::default().fg(TEXT_SECONDARY),
    ));
    lines
}

fn render_weekly_stats(area: Rect, stats: &[Stat], frame: &mut Frame) {
    let tiles = columns(area, stats.len());
    for (stat, tile) in stats.iter().zip(tiles.iter()) {
        let content = vec![
            Line::from(Span::styled(
                stat.value.clone(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(stat.label.to_uppercase(), Style::default().fg(TEXT_MUTED))),
        ];
        let paragraph = Paragraph::new(content)
            .block(card_block(BORDER_SUBTLE, BG_SECONDARY))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, *tile);
    }
}

fn render_metric(area: Rect, metric: &Metric, frame: &mut Frame) {
    let width = card_inner_width(area);
    let color = accent_color(metric.accent);

    let content = vec![
        split_line(
            vec![
                Span::styled(format!("{} ", metric.icon.symbol()), Style::default().fg(color)),
                Span::styled(
                    metric.title.clone(),
                    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
                ),
            ],
            vec![Span::styled(Glyph::Chevron.symbol(), Style::default().fg(TEXT_MUTED))],
            width,
        ),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(metric.value.clone(), Style::default().fg(TEXT_SECONDARY)),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(metric.trend.clone(), Style::default().fg(CYAN_PRIMARY)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(card_block(BORDER_SUBTLE, BG_SECONDARY));
    frame.render_widget(paragraph, area);
}
