use tui::widgets::TableState;

/// Row selection for a table of `len` rows, wrapping at both ends.
pub struct TableCursor {
    len: usize,
    state: TableState,
}

impl TableCursor {
    pub fn new(len: usize) -> Self {
        let mut state = TableState::default();
        if len > 0 {
            state.select(Some(0));
        }

        Self { len, state }
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }
}
