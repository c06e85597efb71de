use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::components::{render_stat_cards, StatCard, TableCursor};
use super::{header_row, highlight_style};
use crate::data::DataSet;
use crate::format::format_currency;
use crate::models::Client;
use crate::stats::client_statistics;

// Represents the state of the client table screen
pub struct ClientsState {
    cursor: TableCursor,
}

impl ClientsState {
    pub fn new(data: &DataSet) -> Self {
        Self {
            cursor: TableCursor::new(data.clients.len()),
        }
    }

    pub fn cursor_mut(&mut self) -> &mut TableCursor {
        &mut self.cursor
    }

    pub fn selected_client<'a>(&self, data: &'a DataSet) -> Option<&'a Client> {
        self.cursor.selected().and_then(|i| data.clients.get(i))
    }
}

pub fn render_clients<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    data: &DataSet,
    state: &mut ClientsState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)].as_ref())
        .split(area);

    let cards = [
        StatCard::new("Clients enregistrés", data.clients.len().to_string()),
        StatCard::new("Projets associés", data.projects.len().to_string()),
    ];
    render_stat_cards(frame, chunks[0], &cards);

    let rows = data.clients.iter().map(|client| {
        let stats = client_statistics(&data.projects, &data.invoices, &client.id);
        Row::new(vec![
            Cell::from(format!("[{}] {}", client.initials(), client.full_name())),
            Cell::from(client.email.clone()),
            Cell::from(client.phone.clone()),
            Cell::from(format!("{} ({})", client.city, client.postal_code)),
            Cell::from(stats.project_count.to_string()),
            Cell::from(format_currency(stats.total_invoiced)),
        ])
    });

    let title = match state.selected_client(data) {
        Some(client) => format!(
            "Gestion des clients | {}, {} {}",
            client.address, client.postal_code, client.city
        ),
        None => "Gestion des clients".to_string(),
    };

    let table = Table::new(rows)
        .header(header_row(&["Client", "Email", "Téléphone", "Ville", "Projets", "Total facturé"]))
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(highlight_style())
        .widths(&[
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
            Constraint::Percentage(8),
            Constraint::Percentage(17),
        ]);

    frame.render_stateful_widget(table, chunks[1], state.cursor.state_mut());
}
