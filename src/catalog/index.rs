use std::collections::HashMap;

use crate::models::MenuItem;

/// Per-restaurant grouping of row positions.
#[derive(Debug, Clone, Default)]
struct RestaurantGroup {
    /// Categories in first-seen order.
    categories: Vec<String>,
    buckets: HashMap<String, Vec<usize>>,
    /// Every row of this restaurant in source order.
    rows: Vec<usize>,
}

/// Restaurant -> category -> rows, built once over a loaded item list.
///
/// Rows are positions into the list the index was built from, so every item
/// lands in exactly one bucket and bucket order is source order.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    restaurants: Vec<String>,
    groups: HashMap<String, RestaurantGroup>,
}

impl CatalogIndex {
    pub fn build(items: &[MenuItem]) -> Self {
        let mut index = Self::default();
        for (row, item) in items.iter().enumerate() {
            if !index.groups.contains_key(&item.restaurant) {
                index.restaurants.push(item.restaurant.clone());
            }
            let group = index.groups.entry(item.restaurant.clone()).or_default();

            if !group.buckets.contains_key(&item.category) {
                group.categories.push(item.category.clone());
            }
            group
                .buckets
                .entry(item.category.clone())
                .or_default()
                .push(row);
            group.rows.push(row);
        }
        index
    }

    /// Restaurant names in first-seen order.
    pub fn restaurants(&self) -> &[String] {
        &self.restaurants
    }

    /// Categories of a restaurant, sorted case-insensitively.
    pub fn categories(&self, restaurant: &str) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .groups
            .get(restaurant)
            .map(|g| g.categories.iter().map(String::as_str).collect())
            .unwrap_or_default();
        categories.sort_by_key(|c| c.to_lowercase());
        categories
    }

    /// Rows of one bucket; empty when either key is unknown.
    pub fn bucket(&self, restaurant: &str, category: &str) -> &[usize] {
        self.groups
            .get(restaurant)
            .and_then(|g| g.buckets.get(category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every row of a restaurant in source order.
    pub fn restaurant_rows(&self, restaurant: &str) -> &[usize] {
        self.groups
            .get(restaurant)
            .map(|g| g.rows.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate `(restaurant, category, rows)` for every bucket.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &str, &[usize])> {
        self.restaurants.iter().flat_map(move |r| {
            let group = &self.groups[r];
            group
                .categories
                .iter()
                .map(move |c| (r.as_str(), c.as_str(), group.buckets[c].as_slice()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
