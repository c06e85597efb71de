use tui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A headline figure with its caption.
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub color: Color,
}

impl StatCard {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            color: Color::White,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Lays the cards out side by side in equal columns.
pub fn render_stat_cards<B: Backend>(frame: &mut Frame<B>, area: Rect, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }

    let share = 100 / cards.len() as u16;
    let constraints: Vec<Constraint> = cards.iter().map(|_| Constraint::Percentage(share)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, column) in cards.iter().zip(columns) {
        let text = vec![
            Spans::from(Span::styled(
                card.value.clone(),
                Style::default().fg(card.color).add_modifier(Modifier::BOLD),
            )),
            Spans::from(Span::styled(card.label, Style::default().fg(Color::Gray))),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(paragraph, column);
    }
}
