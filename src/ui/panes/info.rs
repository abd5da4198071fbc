//! Algorithm metadata pane

use crate::engine::catalog::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the info pane: complexities, stability, description, and the
/// highlight color legend.
pub fn render_info_pane(frame: &mut Frame, area: Rect, info: &AlgorithmInfo) {
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        Line::from(Span::styled(
            info.name,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Best:    ", label_style),
            Span::styled(info.time_complexity.best, value_style),
        ]),
        Line::from(vec![
            Span::styled("Average: ", label_style),
            Span::styled(info.time_complexity.average, value_style),
        ]),
        Line::from(vec![
            Span::styled("Worst:   ", label_style),
            Span::styled(info.time_complexity.worst, value_style),
        ]),
        Line::from(vec![
            Span::styled("Space:   ", label_style),
            Span::styled(info.space_complexity, value_style),
        ]),
        Line::from(vec![
            Span::styled("Stable:  ", label_style),
            if info.is_stable {
                Span::styled("yes", Style::default().fg(DEFAULT_THEME.success))
            } else {
                Span::styled("no", Style::default().fg(DEFAULT_THEME.error))
            },
        ]),
        Line::from(""),
    ];

    for (color, meaning) in [
        (DEFAULT_THEME.bar_comparing, "comparing"),
        (DEFAULT_THEME.bar_selected, "writing"),
        (DEFAULT_THEME.bar_pivot, "pivot"),
        (DEFAULT_THEME.bar_sorted, "sorted"),
    ] {
        lines.push(Line::from(vec![
            Span::styled("██ ", Style::default().fg(color)),
            Span::styled(meaning, label_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(info.description, value_style)));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
                .title(" Algorithm "),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
