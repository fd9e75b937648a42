//! Plain-text rendering of column sets for terminals

mod table;
mod width;

pub use table::TextTable;
pub use width::display_width;
pub use width::truncate_to_width;
