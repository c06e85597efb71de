use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::components::{render_stat_cards, StatCard, TableCursor};
use super::{header_row, highlight_style};
use crate::data::DataSet;
use crate::format::{format_currency, format_naive_date, format_status};
use crate::models::{Invoice, InvoiceStatus};
use crate::stats::{find_client_name, find_project_name, invoice_totals};

// Represents the state of the invoice table screen
pub struct InvoicesState {
    cursor: TableCursor,
}

impl InvoicesState {
    pub fn new(data: &DataSet) -> Self {
        Self {
            cursor: TableCursor::new(data.invoices.len()),
        }
    }

    pub fn cursor_mut(&mut self) -> &mut TableCursor {
        &mut self.cursor
    }

    pub fn selected_invoice<'a>(&self, data: &'a DataSet) -> Option<&'a Invoice> {
        self.cursor.selected().and_then(|i| data.invoices.get(i))
    }
}

pub fn render_invoices<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    data: &DataSet,
    state: &mut InvoicesState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(45),
            Constraint::Percentage(55),
        ].as_ref())
        .split(area);

    let totals = invoice_totals(&data.invoices);
    let cards = [
        StatCard::new("Total facturé", format_currency(totals.total)),
        StatCard::new("Montant encaissé", format_currency(totals.paid)).color(Color::Green),
        StatCard::new("En attente", format_currency(totals.pending)).color(Color::Yellow),
    ];
    render_stat_cards(frame, chunks[0], &cards);

    let rows = data.invoices.iter().map(|invoice| {
        let due_style = if invoice.status == InvoiceStatus::Overdue {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(invoice.number.clone()),
            Cell::from(find_client_name(&data.clients, &invoice.client_id)),
            Cell::from(find_project_name(&data.projects, &invoice.project_id)),
            Cell::from(format_naive_date(Some(invoice.issue_date))),
            Cell::from(format_naive_date(Some(invoice.due_date))).style(due_style),
            Cell::from(format_currency(invoice.pre_tax_amount)),
            Cell::from(format_currency(invoice.total_amount)),
            Cell::from(format_status(invoice.status.code())),
        ])
    });

    let table = Table::new(rows)
        .header(header_row(&[
            "Numéro", "Client", "Projet", "Émission", "Échéance", "HT", "TTC", "Statut",
        ]))
        .block(Block::default().title("Gestion des factures").borders(Borders::ALL))
        .highlight_style(highlight_style())
        .widths(&[
            Constraint::Percentage(12),
            Constraint::Percentage(13),
            Constraint::Percentage(21),
            Constraint::Percentage(10),
            Constraint::Percentage(10),
            Constraint::Percentage(12),
            Constraint::Percentage(12),
            Constraint::Percentage(10),
        ]);

    frame.render_stateful_widget(table, chunks[1], state.cursor.state_mut());

    if let Some(invoice) = state.selected_invoice(data) {
        render_line_items(frame, chunks[2], invoice);
    }
}

// Line items of one invoice followed by the stored HT / TVA / TTC amounts
fn render_line_items<B: Backend>(frame: &mut Frame<B>, area: Rect, invoice: &Invoice) {
    let mut rows: Vec<Row> = invoice
        .line_items
        .iter()
        .map(|line| {
            Row::new(vec![
                Cell::from(line.description.clone()),
                Cell::from(line.quantity.to_string()),
                Cell::from(format_currency(line.unit_price)),
                Cell::from(format_currency(line.amount)),
            ])
        })
        .collect();

    let footer = [
        ("Total HT", invoice.pre_tax_amount, Style::default()),
        ("TVA (20%)", invoice.tax_amount, Style::default()),
        (
            "Total TTC",
            invoice.total_amount,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    rows.extend(footer.into_iter().map(|(label, amount, style)| {
        Row::new(vec![
            Cell::from(label),
            Cell::from(""),
            Cell::from(""),
            Cell::from(format_currency(amount)),
        ])
        .style(style)
    }));

    let title = format!("Détail des prestations | {}", invoice.number);
    let table = Table::new(rows)
        .header(header_row(&["Description", "Qté", "P.U.", "Montant"]))
        .block(Block::default().title(title).borders(Borders::ALL))
        .widths(&[
            Constraint::Percentage(50),
            Constraint::Percentage(10),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ]);

    frame.render_widget(table, area);
}
