use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::components::{render_stat_cards, StatCard, TableCursor};
use super::{header_row, highlight_style};
use crate::data::DataSet;
use crate::format::{format_currency, format_naive_date, format_percent, format_status};
use crate::models::Project;
use crate::stats::{
    budget_balance, budget_progress, budget_usage_rounded, find_client_name, project_status_counts,
    BudgetBalance,
};

// Represents the state of the project table screen
pub struct ProjectsState {
    cursor: TableCursor,
}

impl ProjectsState {
    pub fn new(data: &DataSet) -> Self {
        Self {
            cursor: TableCursor::new(data.projects.len()),
        }
    }

    pub fn cursor_mut(&mut self) -> &mut TableCursor {
        &mut self.cursor
    }

    pub fn selected_project<'a>(&self, data: &'a DataSet) -> Option<&'a Project> {
        self.cursor.selected().and_then(|i| data.projects.get(i))
    }
}

/// "Reste" or "Dépassement" with the absolute amount.
pub fn balance_label(project: &Project) -> String {
    match budget_balance(project) {
        BudgetBalance::Remaining(amount) => format!("Reste: {}", format_currency(amount)),
        BudgetBalance::Overrun(amount) => format!("Dépassement: {}", format_currency(amount)),
    }
}

pub fn render_projects<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    data: &DataSet,
    state: &mut ProjectsState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(5),
        ].as_ref())
        .split(area);

    let counts = project_status_counts(&data.projects);
    let cards = [
        StatCard::new("Total", counts.total.to_string()),
        StatCard::new("En attente", counts.pending.to_string()),
        StatCard::new("En cours", counts.in_progress.to_string()).color(Color::Cyan),
        StatCard::new("Terminés", counts.completed.to_string()).color(Color::Green),
    ];
    render_stat_cards(frame, chunks[0], &cards);

    let rows = data.projects.iter().map(|project| {
        let balance_style = if project.is_over_budget() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(project.name.clone()),
            Cell::from(find_client_name(&data.clients, &project.client_id)),
            Cell::from(format_status(project.status.code())),
            Cell::from(format_naive_date(Some(project.start_date))),
            Cell::from(format_naive_date(project.end_date)),
            Cell::from(format_currency(project.budget)),
            Cell::from(format_currency(project.expenses)),
            Cell::from(format_percent(budget_usage_rounded(project))),
            Cell::from(balance_label(project)).style(balance_style),
        ])
    });

    let table = Table::new(rows)
        .header(header_row(&[
            "Projet", "Client", "Statut", "Début", "Fin", "Budget", "Dépensé", "Avancement", "Solde",
        ]))
        .block(Block::default().title("Gestion des projets").borders(Borders::ALL))
        .highlight_style(highlight_style())
        .widths(&[
            Constraint::Percentage(18),
            Constraint::Percentage(12),
            Constraint::Percentage(9),
            Constraint::Percentage(9),
            Constraint::Percentage(9),
            Constraint::Percentage(11),
            Constraint::Percentage(11),
            Constraint::Percentage(6),
            Constraint::Percentage(15),
        ]);

    frame.render_stateful_widget(table, chunks[1], state.cursor.state_mut());

    if let Some(project) = state.selected_project(data) {
        let detail_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
            .split(chunks[2]);

        let details = Paragraph::new(format!("{}\n{}", project.description, project.address))
            .wrap(Wrap { trim: true })
            .block(Block::default().title(project.name.clone()).borders(Borders::ALL));
        frame.render_widget(details, detail_chunks[0]);

        // Bar stops at 100, the label keeps the real usage
        let gauge_color = if project.is_over_budget() { Color::Red } else { Color::Green };
        let gauge = Gauge::default()
            .block(Block::default().title("Budget consommé").borders(Borders::ALL))
            .gauge_style(Style::default().fg(gauge_color))
            .percent(budget_progress(project) as u16)
            .label(format_percent(budget_usage_rounded(project)));
        frame.render_widget(gauge, detail_chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_label_distinguishes_overrun() {
        let data = DataSet::demo().unwrap();
        let mut project = data.projects[0].clone();
        assert_eq!(balance_label(&project), format!("Reste: {}", format_currency(17000.0)));

        project.expenses = 50000.0;
        assert_eq!(balance_label(&project), format!("Dépassement: {}", format_currency(5000.0)));
    }
}
