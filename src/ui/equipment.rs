use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::components::{render_stat_cards, StatCard, TableCursor};
use super::{header_row, highlight_style};
use crate::data::DataSet;
use crate::format::{format_currency, format_naive_date};
use crate::models::EquipmentStatus;
use crate::stats::{available_equipment_count, equipment_categories, equipment_total_quantity, equipment_valuation};

// Represents the state of the equipment inventory screen
pub struct EquipmentState {
    cursor: TableCursor,
}

impl EquipmentState {
    pub fn new(data: &DataSet) -> Self {
        Self {
            cursor: TableCursor::new(data.equipment.len()),
        }
    }

    pub fn cursor_mut(&mut self) -> &mut TableCursor {
        &mut self.cursor
    }
}

fn status_color(status: EquipmentStatus) -> Color {
    match status {
        EquipmentStatus::Available => Color::Green,
        EquipmentStatus::InUse => Color::Cyan,
        EquipmentStatus::InMaintenance => Color::Yellow,
        EquipmentStatus::OutOfService => Color::Red,
    }
}

pub fn render_equipment<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    data: &DataSet,
    state: &mut EquipmentState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
        ].as_ref())
        .split(area);

    let available = available_equipment_count(&data.equipment);
    let cards = [
        StatCard::new("Types d'équipements", data.equipment.len().to_string()),
        StatCard::new("Quantité totale", equipment_total_quantity(&data.equipment).to_string()),
        StatCard::new("Disponibles", available.to_string()).color(Color::Green),
        StatCard::new("Valeur du parc", format_currency(equipment_valuation(&data.equipment))),
    ];
    render_stat_cards(frame, chunks[0], &cards);

    let categories: Vec<String> = equipment_categories(&data.equipment).into_iter().collect();
    let categories = Paragraph::new(categories.join(" | "))
        .block(Block::default().title("Catégories").borders(Borders::ALL));
    frame.render_widget(categories, chunks[1]);

    let rows = data.equipment.iter().map(|item| {
        Row::new(vec![
            Cell::from(item.name.clone()),
            Cell::from(item.category.clone()),
            Cell::from(item.quantity.to_string()),
            Cell::from(format_currency(item.purchase_price)),
            Cell::from(format_naive_date(Some(item.purchase_date))),
            Cell::from(item.status.label()).style(Style::default().fg(status_color(item.status))),
        ])
    });

    let table = Table::new(rows)
        .header(header_row(&[
            "Équipement", "Catégorie", "Quantité", "Prix d'achat", "Date d'achat", "Statut",
        ]))
        .block(Block::default().title("Gestion des équipements").borders(Borders::ALL))
        .highlight_style(highlight_style())
        .widths(&[
            Constraint::Percentage(22),
            Constraint::Percentage(20),
            Constraint::Percentage(10),
            Constraint::Percentage(16),
            Constraint::Percentage(14),
            Constraint::Percentage(18),
        ]);

    frame.render_stateful_widget(table, chunks[2], state.cursor.state_mut());
}
