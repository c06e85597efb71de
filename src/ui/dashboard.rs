use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::components::{render_stat_cards, StatCard, TableCursor};
use super::{header_row, highlight_style};
use crate::data::DataSet;
use crate::format::{format_currency, format_naive_date, format_percent, format_status};
use crate::stats::{budget_usage_rounded, dashboard_aggregates};

// Overview screen: headline figures plus the first few projects and invoices
pub struct DashboardState {
    recent_limit: usize,
    cursor: TableCursor,
}

impl DashboardState {
    pub fn new(data: &DataSet, recent_limit: usize) -> Self {
        Self {
            recent_limit,
            cursor: TableCursor::new(data.recent_projects(recent_limit).len()),
        }
    }

    pub fn cursor_mut(&mut self) -> &mut TableCursor {
        &mut self.cursor
    }
}

pub fn render_dashboard<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    data: &DataSet,
    state: &mut DashboardState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ].as_ref())
        .split(area);

    let stats = dashboard_aggregates(&data.clients, &data.projects, &data.invoices, &data.equipment);
    let cards = [
        StatCard::new("Projets totaux", stats.project_count.to_string()),
        StatCard::new("Projets en cours", stats.projects_in_progress.to_string()).color(Color::Cyan),
        StatCard::new("Clients", stats.client_count.to_string()),
        StatCard::new("Chiffre d'affaires", format_currency(stats.revenue)).color(Color::Green),
        StatCard::new("Factures en attente", stats.pending_invoices.to_string()).color(Color::Yellow),
        StatCard::new("Équipements disponibles", stats.available_equipment.to_string()),
    ];
    render_stat_cards(frame, chunks[0], &cards);

    let project_rows = data.recent_projects(state.recent_limit).iter().map(|project| {
        Row::new(vec![
            Cell::from(project.name.clone()),
            Cell::from(format_status(project.status.code())),
            Cell::from(format_currency(project.budget)),
            Cell::from(format_percent(budget_usage_rounded(project))),
        ])
    });

    let projects_table = Table::new(project_rows)
        .header(header_row(&["Projet", "Statut", "Budget", "Progression"]))
        .block(Block::default().title("Projets récents").borders(Borders::ALL))
        .highlight_style(highlight_style())
        .widths(&[
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
        ]);

    frame.render_stateful_widget(projects_table, chunks[1], state.cursor.state_mut());

    let invoice_rows = data.recent_invoices(state.recent_limit).iter().map(|invoice| {
        Row::new(vec![
            Cell::from(invoice.number.clone()),
            Cell::from(format_currency(invoice.total_amount)),
            Cell::from(format_naive_date(Some(invoice.due_date))),
            Cell::from(format_status(invoice.status.code())),
        ])
    });

    let invoices_table = Table::new(invoice_rows)
        .header(header_row(&["Numéro", "Montant TTC", "Échéance", "Statut"]))
        .block(Block::default().title("Factures récentes").borders(Borders::ALL))
        .widths(&[
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
        ]);

    frame.render_widget(invoices_table, chunks[2]);
}
