pub mod clients;
pub mod components;
pub mod dashboard;
pub mod equipment;
pub mod invoices;
pub mod projects;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use tracing::{debug, info};
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Spans,
    widgets::{Block, Borders, Cell, Paragraph, Row, Tabs},
    Frame, Terminal,
};

use crate::data::DataSet;
use clients::{render_clients, ClientsState};
use dashboard::{render_dashboard, DashboardState};
use equipment::{render_equipment, EquipmentState};
use invoices::{render_invoices, InvoicesState};
use projects::{render_projects, ProjectsState};

// Represents the current view in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Clients,
    Projects,
    Invoices,
    Equipment,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Dashboard,
        Screen::Clients,
        Screen::Projects,
        Screen::Invoices,
        Screen::Equipment,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Dashboard => "Tableau de bord",
            Screen::Clients => "Clients",
            Screen::Projects => "Projets",
            Screen::Invoices => "Factures",
            Screen::Equipment => "Équipements",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Screen {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// `'1'` to `'5'` select a view directly.
    pub fn from_shortcut(c: char) -> Option<Screen> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

pub enum AppAction {
    Quit,
    Switch(Screen),
    Down,
    Up,
}

// Main application state
pub struct App<'a> {
    data: &'a DataSet,
    screen: Screen,
    dashboard_state: DashboardState,
    clients_state: ClientsState,
    projects_state: ProjectsState,
    invoices_state: InvoicesState,
    equipment_state: EquipmentState,
}

impl<'a> App<'a> {
    pub fn new(data: &'a DataSet, recent_limit: usize) -> Self {
        Self {
            data,
            screen: Screen::Dashboard,
            dashboard_state: DashboardState::new(data, recent_limit),
            clients_state: ClientsState::new(data),
            projects_state: ProjectsState::new(data),
            invoices_state: InvoicesState::new(data),
            equipment_state: EquipmentState::new(data),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Applies an action; returns `false` once the user asked to quit.
    pub fn apply(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::Quit => return false,
            AppAction::Switch(screen) => {
                if screen != self.screen {
                    debug!(from = ?self.screen, to = ?screen, "Switching screen");
                    self.screen = screen;
                }
            }
            AppAction::Down => self.cursor_mut().next(),
            AppAction::Up => self.cursor_mut().previous(),
        }
        true
    }

    fn cursor_mut(&mut self) -> &mut components::TableCursor {
        match self.screen {
            Screen::Dashboard => self.dashboard_state.cursor_mut(),
            Screen::Clients => self.clients_state.cursor_mut(),
            Screen::Projects => self.projects_state.cursor_mut(),
            Screen::Invoices => self.invoices_state.cursor_mut(),
            Screen::Equipment => self.equipment_state.cursor_mut(),
        }
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    info!(screen = ?app.screen(), "Starting terminal dashboard");
    loop {
        terminal.draw(|f| render_app(f, app))?;

        if let Some(action) = handle_input(app.screen())? {
            if !app.apply(action) {
                info!("Leaving terminal dashboard");
                return Ok(());
            }
        }
    }
}

pub fn handle_input(current: Screen) -> Result<Option<AppAction>> {
    if let Event::Key(key) = event::read()? {
        return Ok(action_for_key(current, key.code));
    }
    Ok(None)
}

fn action_for_key(current: Screen, code: KeyCode) -> Option<AppAction> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppAction::Quit),
        KeyCode::Tab => Some(AppAction::Switch(current.next())),
        KeyCode::Char(c) => Screen::from_shortcut(c).map(AppAction::Switch),
        KeyCode::Down => Some(AppAction::Down),
        KeyCode::Up => Some(AppAction::Up),
        _ => None,
    }
}

fn render_app<B: Backend>(frame: &mut Frame<B>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ].as_ref())
        .split(frame.size());

    render_tabs(frame, chunks[0], app.screen);

    let data = app.data;
    match app.screen {
        Screen::Dashboard => render_dashboard(frame, chunks[1], data, &mut app.dashboard_state),
        Screen::Clients => render_clients(frame, chunks[1], data, &mut app.clients_state),
        Screen::Projects => render_projects(frame, chunks[1], data, &mut app.projects_state),
        Screen::Invoices => render_invoices(frame, chunks[1], data, &mut app.invoices_state),
        Screen::Equipment => render_equipment(frame, chunks[1], data, &mut app.equipment_state),
    }

    let help = Paragraph::new("<1-5> Vue | <Tab> Vue suivante | <Up/Down> Sélection | <Q> Quitter")
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::White));
    frame.render_widget(help, chunks[2]);
}

fn render_tabs<B: Backend>(frame: &mut Frame<B>, area: Rect, current: Screen) {
    let titles: Vec<Spans> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| Spans::from(format!("{} {}", i + 1, screen.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .block(Block::default().title("Chantier ERP").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

pub(crate) fn header_row(titles: &[&'static str]) -> Row<'static> {
    let cells = titles
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    Row::new(cells).height(1).bottom_margin(1)
}

pub(crate) fn highlight_style() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_map_to_screens() {
        assert_eq!(Screen::from_shortcut('1'), Some(Screen::Dashboard));
        assert_eq!(Screen::from_shortcut('5'), Some(Screen::Equipment));
        assert_eq!(Screen::from_shortcut('0'), None);
        assert_eq!(Screen::from_shortcut('6'), None);
        assert_eq!(Screen::from_shortcut('x'), None);
    }

    #[test]
    fn tab_cycles_through_every_screen() {
        let mut screen = Screen::Dashboard;
        for _ in 0..Screen::ALL.len() {
            screen = screen.next();
        }
        assert_eq!(screen, Screen::Dashboard);
        assert_eq!(Screen::Invoices.next(), Screen::Equipment);
    }

    #[test]
    fn keys_translate_to_actions() {
        assert!(matches!(action_for_key(Screen::Clients, KeyCode::Esc), Some(AppAction::Quit)));
        assert!(matches!(
            action_for_key(Screen::Clients, KeyCode::Tab),
            Some(AppAction::Switch(Screen::Projects))
        ));
        assert!(matches!(
            action_for_key(Screen::Clients, KeyCode::Char('4')),
            Some(AppAction::Switch(Screen::Invoices))
        ));
        assert!(action_for_key(Screen::Clients, KeyCode::Char('n')).is_none());
    }

    #[test]
    fn app_switches_and_quits() {
        let data = DataSet::demo().unwrap();
        let mut app = App::new(&data, 5);

        assert!(app.apply(AppAction::Switch(Screen::Invoices)));
        assert_eq!(app.screen(), Screen::Invoices);
        assert!(app.apply(AppAction::Down));
        assert_eq!(app.invoices_state.selected_invoice(&data).map(|i| i.id.as_str()), Some("2"));
        assert!(!app.apply(AppAction::Quit));
    }
}
