use std::collections::HashSet;

use tracing::warn;

use crate::models::{MenuItem, Totals};

/// What a caller picked for a meal.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Row positions; each listed row counts once per listing.
    Rows(Vec<usize>),
    /// Source identifiers; every row carrying a listed id counts once.
    Ids(Vec<u64>),
    /// Exact canonical names; every row with a listed name counts once,
    /// so same-named items in different categories or sizes all count.
    Names(Vec<String>),
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Rows(rows) => rows.is_empty(),
            Selection::Ids(ids) => ids.is_empty(),
            Selection::Names(names) => names.is_empty(),
        }
    }
}

/// Resolve a selection against an item list, returning `(row, item)` pairs.
pub fn select<'a>(items: &'a [MenuItem], selection: &Selection) -> Vec<(usize, &'a MenuItem)> {
    match selection {
        Selection::Rows(rows) => rows
            .iter()
            .filter_map(|&row| match items.get(row) {
                Some(item) => Some((row, item)),
                None => {
                    warn!(row, len = items.len(), "selected row out of range");
                    None
                }
            })
            .collect(),
        Selection::Ids(ids) => {
            let wanted: HashSet<u64> = ids.iter().copied().collect();
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.item_id.is_some_and(|id| wanted.contains(&id)))
                .collect()
        }
        Selection::Names(names) => {
            let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| wanted.contains(item.item.as_str()))
                .collect()
        }
    }
}

/// Sum every nutrient across items, counting absent values as zero.
pub fn sum_totals<'a, I>(items: I) -> Totals
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    items.into_iter().collect()
}

/// Totals for a meal selected out of `items`.
pub fn calculate_meal_totals(items: &[MenuItem], selection: &Selection) -> Totals {
    sum_totals(select(items, selection).into_iter().map(|(_, item)| item))
}
