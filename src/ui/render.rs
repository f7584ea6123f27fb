use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use super::app::{App, Field};
use crate::models::transaction::{TransactionType, format_money};
use crate::storage::BlobStore;

pub fn draw<S: BlobStore>(f: &mut Frame, app: &App<S>) {
    let area = f.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_summary(f, app, chunks[0]);
    render_form(f, app, chunks[1]);
    render_transaction_list(f, app, chunks[2]);
    render_help_panel(f, chunks[3]);

    if let Some(message) = &app.alert {
        render_alert(f, message, area);
    }
}

pub fn render_summary<S: BlobStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let totals = app.ledger.totals();
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let text = vec![
        Line::from(Span::styled(
            format!("Total Balance: {}", format_money(totals.balance)),
            bold,
        )),
        Line::from(Span::styled(
            format!("Total Income: {}", format_money(totals.income)),
            bold.fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("Total Expenses: {}", format_money(totals.expense)),
            bold.fg(Color::Red),
        )),
    ];

    let summary = Paragraph::new(text).block(Block::default().title("Summary").borders(Borders::ALL));
    f.render_widget(summary, area);
}

pub fn render_form<S: BlobStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let draft = app.ledger.draft();

    let category = if draft.category.is_empty() {
        Span::styled("Select Category", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(draft.category.as_str())
    };
    let amount = if draft.amount.is_empty() {
        Span::styled("Enter Amount", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(draft.amount.as_str())
    };
    let transaction_type = Span::styled(
        draft.transaction_type.as_str(),
        Style::default().fg(draft.transaction_type.color()),
    );

    let text = vec![
        form_line("Type:       ", transaction_type, app.focus == Field::Type),
        form_line("Category:   ", category, app.focus == Field::Category),
        form_line("Amount:     ", amount, app.focus == Field::Amount),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ Add {} ]", draft.transaction_type),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    let form = Paragraph::new(text).block(
        Block::default()
            .title("New Transaction")
            .borders(Borders::ALL),
    );
    f.render_widget(form, area);
}

fn form_line<'a>(label: &'a str, value: Span<'a>, focused: bool) -> Line<'a> {
    let (marker, label_style) = if focused {
        ("➤ ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        ("  ", Style::default())
    };

    Line::from(vec![
        Span::styled(marker, label_style),
        Span::styled(label, label_style),
        value,
    ])
}

pub fn render_transaction_list<S: BlobStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let transactions = app.ledger.transactions();
    let items: Vec<ListItem> = transactions.iter().map(|t| t.to_list_item()).collect();

    let income_count = transactions
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Income)
        .count();
    let header = format!(
        "Transactions ({} total, {} income, {} expense)",
        transactions.len(),
        income_count,
        transactions.len() - income_count
    );

    let list = List::new(items)
        .block(Block::default().title(header).borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(list, area, &mut app.list_state.clone());
}

pub fn render_help_panel(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let text = vec![Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(" Field • "),
        Span::styled("←/→", key),
        Span::raw(" Choose • "),
        Span::styled("0-9 .", key),
        Span::raw(" Amount • "),
        Span::styled("Enter", key),
        Span::raw(" Add • "),
        Span::styled("↑/↓", key),
        Span::raw(" Scroll • "),
        Span::styled("q", key),
        Span::raw(" Quit"),
    ])];

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Help "),
        )
        .alignment(Alignment::Center);

    f.render_widget(help, area);
}

pub fn render_alert(f: &mut Frame, message: &str, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" OK"),
        ]),
    ];

    let alert = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Error")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );

    let popup_area = centered_rect(50, 30, area);
    f.render_widget(Clear, popup_area);
    f.render_widget(alert, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(layout[1])[1]
}
