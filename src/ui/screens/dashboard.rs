use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Sparkline},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Summary cards
            Constraint::Min(8),    // Category chart + alerts
            Constraint::Length(3), // Monthly trend sparkline
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(chunks[1]);
    render_category_chart(f, middle[0], app);
    render_alerts(f, middle[1], app);

    render_trend_sparkline(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        &format!("Spent in {}", app.view_month),
        format_amount(app.month_total),
        theme::RED,
        format!("{} expenses", app.month_count),
    );

    let top = app
        .summary
        .iter()
        .max_by_key(|(_, amount)| *amount)
        .map(|(category, amount)| (category.as_str(), format_amount(*amount)));
    let (top_name, top_amount) = top.unwrap_or(("None", format_amount(Decimal::ZERO)));
    render_card(
        f,
        cards[1],
        "Top Category",
        top_name.to_string(),
        theme::ACCENT,
        top_amount,
    );

    let over = app.budget_lines.iter().filter(|l| l.is_over()).count();
    render_card(
        f,
        cards[2],
        "Budgets",
        format!("{over} over"),
        if over > 0 { theme::RED } else { theme::GREEN },
        format!("{} set", app.budget_lines.len()),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: Color,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Spending by Category ", theme::title_style()));

    if app.summary.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No expenses in {}", app.view_month),
                theme::dim_style(),
            )),
            Line::from(Span::styled("Press a to add one", theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    // bar heights in whole dollars
    let bars: Vec<Bar> = app
        .summary
        .iter()
        .map(|(category, amount)| {
            let color = theme::category_color(*category);
            Bar::default()
                .value(amount.round().to_u64().unwrap_or(0))
                .text_value(format!("${:.0}", amount.round()))
                .label(Line::from(truncate(category.as_str(), 10)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_alerts(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.alerts.is_empty() {
            theme::OVERLAY
        } else {
            theme::RED
        }))
        .title(Span::styled(" Over Budget ", theme::title_style()));

    if app.alerts.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "All budgets on track",
                Style::default().fg(theme::GREEN),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .alerts
        .iter()
        .map(|alert| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    truncate(&alert.category, width),
                    Style::default()
                        .fg(theme::RED)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "  {} of {}",
                        format_amount(alert.spent),
                        format_amount(alert.limit)
                    ),
                    theme::dim_style(),
                )),
            ])
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_trend_sparkline(f: &mut Frame, area: Rect, app: &App) {
    let data: Vec<u64> = app
        .trend
        .iter()
        .map(|(_, total)| total.round().to_u64().unwrap_or(0))
        .collect();

    let title = match (app.trend.first(), app.trend.last()) {
        (Some((first, _)), Some((last, _))) => format!(" Monthly Spending {first} to {last} "),
        _ => " Monthly Spending ".to_string(),
    };

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(title, theme::title_style())),
        )
        .data(&data)
        .style(Style::default().fg(theme::YELLOW));

    f.render_widget(sparkline, area);
}
