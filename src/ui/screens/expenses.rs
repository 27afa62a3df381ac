use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::{CategoryFilter, DATE_FORMAT};
use crate::report;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = list_title(app);

    if app.expenses.is_empty() {
        let hint = if !app.search_input.is_empty() {
            format!("No expenses matching '{}'", app.search_input)
        } else if app.filter != CategoryFilter::All {
            format!("No {} expenses", app.filter)
        } else {
            "No expenses yet".to_string()
        };
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(hint, theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add one, Esc to clear the search, :filter All to reset",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(title, theme::title_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["ID", "Date", "Name", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let cursor = app.expense_cursor;
    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(cursor.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, e)| {
            let style = if i == cursor.index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let category_style = if i == cursor.index {
                style
            } else {
                Style::default().fg(theme::category_color(e.category))
            };
            let amount_style = if i == cursor.index {
                style
            } else {
                theme::amount_style()
            };

            Row::new(vec![
                Cell::from(Span::styled(e.short_id(), theme::dim_style())),
                Cell::from(e.date.format(DATE_FORMAT).to_string()),
                Cell::from(truncate(&e.name, 40)),
                Cell::from(Span::styled(e.category.as_str(), category_style)),
                Cell::from(Span::styled(format_amount(e.amount), amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(15),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(title, theme::title_style())),
    );

    f.render_widget(table, area);
}

fn list_title(app: &App) -> String {
    let total = report::total(app.expenses.iter().map(|e| e.amount));
    let mut title = format!(" Expenses ({}) {} ", app.expenses.len(), format_amount(total));
    if app.filter != CategoryFilter::All {
        title.push_str(&format!("[{}] ", app.filter));
    }
    if !app.search_input.is_empty() {
        title.push_str(&format!("search: '{}' ", app.search_input));
    }
    title
}
