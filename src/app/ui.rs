use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    app::form::{FormField, FormState, Mode},
    app::portfolio::Portfolio,
    models::Holding,
};

pub fn render(
    frame: &mut Frame,
    portfolio: &Portfolio,
    table_state: &mut TableState,
    form: &FormState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Portfolio Tracker")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_dashboard(frame, portfolio, chunks[1]);
    render_holdings(frame, portfolio, table_state, chunks[2]);
    render_footer(frame, form, chunks[3]);

    if form.is_open() {
        render_form(frame, form);
    }
}

fn render_dashboard(frame: &mut Frame, portfolio: &Portfolio, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    let metrics = portfolio.metrics();

    let total_value = Paragraph::new(format!("${:.2}", metrics.total_value()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().title("Total Value").borders(Borders::ALL));
    frame.render_widget(total_value, cards[0]);

    let gain_loss = *metrics.total_gain_loss();
    let gain_loss_color = if gain_loss >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    };
    let total_gain_loss = Paragraph::new(format!("${:.2}", gain_loss.abs()))
        .style(
            Style::default()
                .fg(gain_loss_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title("Total Gain/Loss")
                .borders(Borders::ALL),
        );
    frame.render_widget(total_gain_loss, cards[1]);

    let top = performer_text(metrics.top_performer().as_ref());
    let top_performer = Paragraph::new(top)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .title("Top Performer")
                .borders(Borders::ALL),
        );
    frame.render_widget(top_performer, cards[2]);

    let worst = performer_text(metrics.worst_performer().as_ref());
    let worst_performer = Paragraph::new(worst)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .title("Worst Performer")
                .borders(Borders::ALL),
        );
    frame.render_widget(worst_performer, cards[3]);

    let count = Paragraph::new(format!("{} holdings", portfolio.holdings().len()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title("Portfolio Size")
                .borders(Borders::ALL),
        );
    frame.render_widget(count, cards[4]);
}

fn performer_text(holding: Option<&Holding>) -> String {
    match holding {
        Some(holding) => format!("{} ({:.2}%)", holding.symbol(), return_percent(holding)),
        None => String::from("-"),
    }
}

fn return_percent(holding: &Holding) -> Decimal {
    holding.fractional_return() * dec!(100)
}

fn render_holdings(
    frame: &mut Frame,
    portfolio: &Portfolio,
    table_state: &mut TableState,
    area: Rect,
) {
    let holdings = portfolio.holdings();

    if holdings.is_empty() {
        let empty_message = Paragraph::new("No holdings to display. Press 'a' to add one.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = [
        "Symbol",
        "Quantity",
        "Buy Price",
        "Cur. Price",
        "Value",
        "G/L",
        "Return %",
        "Added",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let rows = holdings.iter().map(|holding| {
        let gain_loss = holding.gain_loss();
        let color_gain_loss = if gain_loss >= Decimal::ZERO {
            Color::Green
        } else {
            Color::Red
        };

        let cells = [
            Cell::from(holding.symbol().clone()),
            Cell::from(format!("{:.2}", holding.quantity())),
            Cell::from(format!("{:.2}", holding.buy_price())),
            Cell::from(format!("{:.2}", holding.current_price())),
            Cell::from(format!("{:.2}", holding.market_value())),
            Cell::from(format!("{:.2}", gain_loss.abs()))
                .style(Style::default().fg(color_gain_loss)),
            Cell::from(format!("{:.2}%", return_percent(holding)))
                .style(Style::default().fg(color_gain_loss)),
            Cell::from(holding.added_at().format("%Y-%m-%d").to_string()),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Holdings").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_footer(frame: &mut Frame, form: &FormState, area: Rect) {
    let hints = if form.is_open() {
        "Tab: next field | Enter: save | Esc: cancel"
    } else {
        "a: add | e: edit | d: delete | Up/Down: select | q: quit"
    };
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_form(frame: &mut Frame, form: &FormState) {
    let area = centered_rect(50, 11, frame.area());
    frame.render_widget(Clear, area);

    let title = match form.mode() {
        Mode::Editing(_) => "Edit Holding",
        _ => "Add Holding",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let fields = [FormField::Symbol, FormField::Quantity, FormField::BuyPrice];
    for (i, field) in fields.iter().enumerate() {
        let style = if form.active() == *field {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let line = Line::from(format!("{}: {}", field, form.buffer(*field))).style(style);
        frame.render_widget(Paragraph::new(line), inner[i]);
    }

    if let Some(error) = form.error() {
        let error_line = Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red));
        frame.render_widget(error_line, inner[3]);
    }
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Percentage(percent_x),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}
