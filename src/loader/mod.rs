pub mod columns;
pub mod parse;
mod reader;

pub use columns::{resolve_column, ColumnBindings, LogicalField};
pub use parse::{parse_number, split_size, NumericError};
pub use reader::{load_menu, load_menu_from_reader, LoaderSettings, DEFAULT_RESTAURANT};
