//! Bar chart rendering for the current snapshot

use crate::trace::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

/// Highlight precedence: pivot > selected > comparing > sorted > default.
fn bar_color(snapshot: &Snapshot, index: usize) -> Color {
    if snapshot.pivot_indices.contains(&index) {
        DEFAULT_THEME.bar_pivot
    } else if snapshot.selected_indices.contains(&index) {
        DEFAULT_THEME.bar_selected
    } else if snapshot.comparing_indices.contains(&index) {
        DEFAULT_THEME.bar_comparing
    } else if snapshot.sorted_indices.contains(&index) {
        DEFAULT_THEME.bar_sorted
    } else {
        DEFAULT_THEME.bar_default
    }
}

/// Render the array of the given snapshot as a bar chart.
pub fn render_bars_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot, title: &str) {
    let n = snapshot.array.len();

    // Fit bars to the pane, leaving room for the border
    let inner_width = area.width.saturating_sub(2);
    let bar_width = if n == 0 {
        1
    } else {
        ((inner_width as usize / n).saturating_sub(1)).clamp(1, 6) as u16
    };
    let show_values = bar_width >= 3;

    let bars: Vec<Bar> = snapshot
        .array
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_color(snapshot, index);
            let mut bar = Bar::default()
                .value(value.max(0) as u64)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color));
            if !show_values {
                bar = bar.text_value(String::new());
            }
            bar
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
                .title(format!(" {} ", title)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    frame.render_widget(chart, area);
}
