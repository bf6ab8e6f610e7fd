use std::collections::HashMap;

use tracing::debug;

use crate::models::Nutrient;

/// A semantic attribute of a menu row, independent of how a vendor spells
/// its column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    Restaurant,
    Category,
    Item,
    ItemId,
    Size,
    Nutrient(Nutrient),
}

/// Used for the item name when no descriptive name column exists.
pub const ITEM_FALLBACK_ALIASES: &[&str] = &["item_id"];

impl LogicalField {
    /// Accepted header spellings, highest priority first. All lowercase.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            LogicalField::Restaurant => &["restaurant", "brand", "chain", "rest_name"],
            LogicalField::Category => &["category", "menu category", "group"],
            LogicalField::Item => &[
                "item_name",
                "item",
                "product",
                "description",
                "item description",
                "itemtitle",
                "title",
                "name",
            ],
            LogicalField::ItemId => &["item_id", "id"],
            LogicalField::Size => &[
                "size",
                "serving",
                "serving_size",
                "portion",
                "variant",
                "menu item size",
            ],
            LogicalField::Nutrient(n) => nutrient_aliases(n),
        }
    }
}

fn nutrient_aliases(nutrient: Nutrient) -> &'static [&'static str] {
    match nutrient {
        Nutrient::Calories => &["calories", "kcal", "calorie", "energy"],
        Nutrient::Protein => &["protein", "protein (g)", "proteins"],
        Nutrient::Carbs => &["carbs", "carbohydrates", "carbohydrate", "carbs (g)"],
        Nutrient::Fat => &["fat", "total fat", "fat (g)"],
        Nutrient::Fiber => &["fiber", "dietary fiber", "fiber (g)"],
        Nutrient::Sugar => &["sugar", "sugars", "sugar (g)"],
        Nutrient::SatFat => &[
            "saturated fat",
            "sat fat",
            "saturated_fat",
            "sat_fat",
            "saturated fat (g)",
        ],
        Nutrient::PolyFat => &[
            "polyunsaturated fat",
            "poly fat",
            "polyunsaturated_fat",
            "poly_fat",
        ],
        Nutrient::MonoFat => &[
            "monounsaturated fat",
            "mono fat",
            "monounsaturated_fat",
            "mono_fat",
        ],
        Nutrient::TransFat => &["trans fat", "trans_fat", "trans fat (g)"],
        Nutrient::Cholesterol => &["cholesterol"],
        Nutrient::Sodium => &["sodium"],
        Nutrient::Potassium => &["potassium"],
        Nutrient::VitaminA => &["vitamin a", "vit a", "vitamin_a"],
        Nutrient::VitaminC => &["vitamin c", "vit c", "vitamin_c"],
        Nutrient::Calcium => &["calcium"],
        Nutrient::Iron => &["iron"],
    }
}

/// Normalize a header for matching: strip a BOM, trim, lowercase.
pub fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Case-insensitive header lookup: normalized name -> column position.
///
/// When two headers normalize to the same name the last one is kept.
pub fn header_map<'a, I>(headers: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = HashMap::new();
    for (idx, header) in headers.into_iter().enumerate() {
        map.insert(normalize_header(header), idx);
    }
    map
}

/// Bind to the first alias present in the header map.
pub fn resolve_column(headers: &HashMap<String, usize>, aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.get(&alias.trim().to_lowercase()).copied())
}

/// Which source column each logical field reads from, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnBindings {
    pub restaurant: Option<usize>,
    pub category: Option<usize>,
    pub item: Option<usize>,
    pub item_id: Option<usize>,
    pub size: Option<usize>,
    pub nutrients: Vec<(Nutrient, usize)>,
}

impl ColumnBindings {
    /// Resolve every logical field against a header row.
    pub fn discover<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let map = header_map(headers);
        let resolve = |field: LogicalField| resolve_column(&map, field.aliases());

        let item = resolve(LogicalField::Item)
            .or_else(|| resolve_column(&map, ITEM_FALLBACK_ALIASES));

        let mut nutrients = Vec::new();
        for nutrient in Nutrient::ALL {
            match resolve(LogicalField::Nutrient(nutrient)) {
                Some(idx) => nutrients.push((nutrient, idx)),
                None => debug!(field = nutrient.key(), "no matching column"),
            }
        }

        let bindings = Self {
            restaurant: resolve(LogicalField::Restaurant),
            category: resolve(LogicalField::Category),
            item,
            item_id: resolve(LogicalField::ItemId),
            size: resolve(LogicalField::Size),
            nutrients,
        };

        if bindings.item.is_none() {
            debug!("no item name column; every row will be skipped");
        }
        bindings
    }

    /// Column bound to a nutrient, if any.
    pub fn nutrient(&self, nutrient: Nutrient) -> Option<usize> {
        self.nutrients
            .iter()
            .find(|(n, _)| *n == nutrient)
            .map(|(_, idx)| *idx)
    }
}
