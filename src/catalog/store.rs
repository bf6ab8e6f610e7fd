use std::path::Path;

use tracing::info;

use crate::catalog::index::CatalogIndex;
use crate::catalog::search::{search_rows, sort_by_nutrient};
use crate::catalog::select::{calculate_meal_totals, select, Selection};
use crate::error::Result;
use crate::loader::LoaderSettings;
use crate::models::{MenuItem, Nutrient, Totals};

/// An immutable, indexed menu catalog.
///
/// Built once from a loaded item list; a new source means a new `Catalog`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
    index: CatalogIndex,
    has_ids: bool,
}

impl Catalog {
    pub fn build(items: Vec<MenuItem>) -> Self {
        let index = CatalogIndex::build(&items);
        let has_ids = items.iter().any(|i| i.item_id.is_some());
        Self {
            items,
            index,
            has_ids,
        }
    }

    /// Load a CSV source and index it. A missing file gives an empty catalog.
    pub fn load<P: AsRef<Path>>(path: P, settings: &LoaderSettings) -> Result<Self> {
        let items = crate::loader::load_menu(path, settings)?;
        let catalog = Self::build(items);
        info!(
            items = catalog.len(),
            restaurants = catalog.restaurants().len(),
            "catalog built"
        );
        Ok(catalog)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Item at a row position.
    pub fn get(&self, row: usize) -> Option<&MenuItem> {
        self.items.get(row)
    }

    /// Whether the source exposed item identifiers.
    pub fn has_ids(&self) -> bool {
        self.has_ids
    }

    /// Restaurant names in first-seen order.
    pub fn restaurants(&self) -> &[String] {
        self.index.restaurants()
    }

    /// Restaurant names sorted case-insensitively.
    pub fn restaurants_sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.restaurants().iter().map(String::as_str).collect();
        names.sort_by_key(|n| n.to_lowercase());
        names
    }

    pub fn categories(&self, restaurant: &str) -> Vec<&str> {
        self.index.categories(restaurant)
    }

    /// Categories whose name contains `query`, case-insensitively.
    pub fn filter_categories(&self, restaurant: &str, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.categories(restaurant)
            .into_iter()
            .filter(|c| needle.is_empty() || c.to_lowercase().contains(&needle))
            .collect()
    }

    fn rows<'a>(&'a self, rows: &'a [usize]) -> impl Iterator<Item = (usize, &'a MenuItem)> + 'a {
        rows.iter().map(move |&row| (row, &self.items[row]))
    }

    /// Items of one (restaurant, category) bucket in source order.
    pub fn items_in(&self, restaurant: &str, category: &str) -> Vec<(usize, &MenuItem)> {
        self.rows(self.index.bucket(restaurant, category)).collect()
    }

    /// All items of one restaurant in source order.
    pub fn menu(&self, restaurant: &str) -> Vec<(usize, &MenuItem)> {
        self.rows(self.index.restaurant_rows(restaurant)).collect()
    }

    /// A restaurant's menu ordered by one nutrient.
    pub fn sorted_menu(
        &self,
        restaurant: &str,
        nutrient: Nutrient,
        ascending: bool,
    ) -> Vec<(usize, &MenuItem)> {
        let mut menu = self.menu(restaurant);
        sort_by_nutrient(&mut menu, nutrient, ascending);
        menu
    }

    /// Search the whole catalog by id or name.
    pub fn search(&self, query: &str) -> Vec<(usize, &MenuItem)> {
        search_rows(self.items.iter().enumerate(), query, self.has_ids)
    }

    /// Search within one restaurant.
    pub fn search_in(&self, restaurant: &str, query: &str) -> Vec<(usize, &MenuItem)> {
        search_rows(
            self.rows(self.index.restaurant_rows(restaurant)),
            query,
            self.has_ids,
        )
    }

    pub fn select(&self, selection: &Selection) -> Vec<(usize, &MenuItem)> {
        select(&self.items, selection)
    }

    /// Meal totals over the whole catalog.
    pub fn totals(&self, selection: &Selection) -> Totals {
        calculate_meal_totals(&self.items, selection)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::build(vec![
            MenuItem {
                calories: Some(440.0),
                ..MenuItem::new("Chick-fil-A", "Entrees", "Chicken Sandwich")
            },
            MenuItem {
                calories: Some(320.0),
                ..MenuItem::new("Chick-fil-A", "Sides", "Waffle Fries")
            },
            MenuItem {
                calories: Some(250.0),
                ..MenuItem::new("burger barn", "Burgers", "Slider")
            },
            MenuItem {
                calories: None,
                ..MenuItem::new("Chick-fil-A", "Entrees", "Grilled Nuggets")
            },
        ])
    }

    #[test]
    fn test_restaurant_listings() {
        let catalog = sample_catalog();
        assert_eq!(catalog.restaurants(), &["Chick-fil-A", "burger barn"]);
        assert_eq!(catalog.restaurants_sorted(), vec!["burger barn", "Chick-fil-A"]);
    }

    #[test]
    fn test_items_in_and_menu() {
        let catalog = sample_catalog();
        let entrees: Vec<usize> = catalog
            .items_in("Chick-fil-A", "Entrees")
            .iter()
            .map(|(r, _)| *r)
            .collect();
        assert_eq!(entrees, vec![0, 3]);
        assert_eq!(catalog.menu("Chick-fil-A").len(), 3);
        assert!(catalog.items_in("Chick-fil-A", "Desserts").is_empty());
    }

    #[test]
    fn test_filter_categories() {
        let catalog = sample_catalog();
        assert_eq!(catalog.filter_categories("Chick-fil-A", "ENT"), vec!["Entrees"]);
        assert_eq!(catalog.filter_categories("Chick-fil-A", ""), vec!["Entrees", "Sides"]);
    }

    #[test]
    fn test_search_in_scopes_to_restaurant() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("i").len(), 4);
        assert_eq!(catalog.search_in("burger barn", "i").len(), 1);
        assert!(!catalog.has_ids());
    }

    #[test]
    fn test_sorted_menu() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog
            .sorted_menu("Chick-fil-A", Nutrient::Calories, true)
            .iter()
            .map(|(_, i)| i.item.as_str())
            .collect();
        assert_eq!(names, vec!["Waffle Fries", "Chicken Sandwich", "Grilled Nuggets"]);
    }

    #[test]
    fn test_totals_by_row() {
        let catalog = sample_catalog();
        let totals = catalog.totals(&Selection::Rows(vec![0, 1, 3]));
        assert_eq!(totals.calories, 760.0);
        assert_eq!(totals.items, 3);
    }
}
