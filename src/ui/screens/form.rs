use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::form::{ExpenseForm, FormField};
use crate::ui::render::centered;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, form: &ExpenseForm) {
    let mut lines = vec![Line::from("")];
    for field in FormField::all() {
        let focused = *field == form.focus;
        let label_style = if focused {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        let value = match field {
            FormField::Category if focused => format!("◀ {} ▶", form.category),
            FormField::Category => form.category.to_string(),
            _ if focused => format!("{}▏", form.value_of(*field)),
            _ => form.value_of(*field).to_string(),
        };
        let value_style = match field {
            FormField::Category => Style::default().fg(theme::category_color(form.category)),
            _ if focused => theme::command_bar_style(),
            _ => theme::normal_style(),
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", field.label()), label_style),
            Span::styled(value, value_style),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "  Date is YYYY-MM-DD; leave empty for today",
        theme::dim_style(),
    )));

    let popup = centered(area, 56, lines.len() as u16 + 2);
    f.render_widget(Clear, popup);
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .title(Span::styled(
                form.title(),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(panel, popup);
}
