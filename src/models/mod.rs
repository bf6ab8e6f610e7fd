mod menu_item;
mod nutrient;
mod totals;

pub use menu_item::MenuItem;
pub use nutrient::Nutrient;
pub use totals::Totals;
