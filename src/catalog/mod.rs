pub mod index;
pub mod search;
pub mod select;
mod shared;
mod store;

pub use index::CatalogIndex;
pub use search::{search_rows, sort_by_nutrient, Query};
pub use select::{calculate_meal_totals, select, sum_totals, Selection};
pub use shared::SharedCatalog;
pub use store::Catalog;
