pub mod stat_card;
pub mod table_cursor;

pub use stat_card::{render_stat_cards, StatCard};
pub use table_cursor::TableCursor;
