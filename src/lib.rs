pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interface;
pub mod loader;
pub mod logging;
pub mod models;

pub use catalog::{Catalog, Selection, SharedCatalog};
pub use error::{MenuError, Result};
pub use models::{MenuItem, Nutrient, Totals};
