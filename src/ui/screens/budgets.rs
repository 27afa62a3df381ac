use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

const BAR_WIDTH: usize = 20;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.budget_lines.is_empty() {
        render_empty(f, area);
        return;
    }

    let cursor = app.budget_cursor;
    let items: Vec<ListItem> = app
        .budget_lines
        .iter()
        .enumerate()
        .skip(cursor.scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, line)| {
            let ratio = line.ratio();
            let color = theme::usage_color(ratio);

            let style = if i == cursor.index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let remaining = if line.is_over() {
                format!("  {} over", format_amount(-line.remaining()))
            } else {
                format!("  {} left", format_amount(line.remaining()))
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<18}", truncate(&line.category, 17)), style),
                Span::styled(
                    format!(
                        "{:>11} / {:<11} ",
                        format_amount(line.spent),
                        format_amount(line.limit)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(progress_bar(ratio, BAR_WIDTH), Style::default().fg(color)),
                Span::styled(
                    format!(" {:>4.0}%", ratio * 100.0),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(remaining, theme::dim_style()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Budgets for {} ", app.view_month),
                theme::title_style(),
            )),
    );
    f.render_widget(list, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No budgets set", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Use :budget <category> <amount> to set a monthly spending limit",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Budgets ", theme::title_style())),
    );
    f.render_widget(msg, area);
}

/// The bar fills at 100%; overspend shows in the colour and percentage.
fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0)) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
