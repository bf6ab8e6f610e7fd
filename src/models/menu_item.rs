use serde::{Deserialize, Serialize};

use crate::models::Nutrient;

/// One normalized row of a restaurant nutrition guide.
///
/// Numeric fields are `None` when the source had no column for them or the
/// cell could not be read as a number. Zero is a measured value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub restaurant: String,
    pub category: String,
    pub item: String,
    pub size: Option<String>,
    pub item_id: Option<u64>,

    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,

    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sat_fat: Option<f64>,
    pub poly_fat: Option<f64>,
    pub mono_fat: Option<f64>,
    pub trans_fat: Option<f64>,
    pub cholesterol: Option<f64>,
    pub sodium: Option<f64>,
    pub potassium: Option<f64>,
    pub vitamin_a: Option<f64>,
    pub vitamin_c: Option<f64>,
    pub calcium: Option<f64>,
    pub iron: Option<f64>,
}

impl MenuItem {
    pub fn new(restaurant: &str, category: &str, item: &str) -> Self {
        Self {
            restaurant: restaurant.to_string(),
            category: category.to_string(),
            item: item.to_string(),
            ..Default::default()
        }
    }

    /// Read a nutrient by enum instead of by field.
    pub fn nutrient(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
            Nutrient::SatFat => self.sat_fat,
            Nutrient::PolyFat => self.poly_fat,
            Nutrient::MonoFat => self.mono_fat,
            Nutrient::TransFat => self.trans_fat,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::Sodium => self.sodium,
            Nutrient::Potassium => self.potassium,
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
        }
    }

    pub(crate) fn nutrient_mut(&mut self, nutrient: Nutrient) -> &mut Option<f64> {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fat => &mut self.fat,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::SatFat => &mut self.sat_fat,
            Nutrient::PolyFat => &mut self.poly_fat,
            Nutrient::MonoFat => &mut self.mono_fat,
            Nutrient::TransFat => &mut self.trans_fat,
            Nutrient::Cholesterol => &mut self.cholesterol,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::Potassium => &mut self.potassium,
            Nutrient::VitaminA => &mut self.vitamin_a,
            Nutrient::VitaminC => &mut self.vitamin_c,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Iron => &mut self.iron,
        }
    }

    /// Name with the size appended, e.g. `Nuggets (8 ct)`.
    pub fn display_name(&self) -> String {
        match &self.size {
            Some(size) => format!("{} ({})", self.item, size),
            None => self.item.clone(),
        }
    }

    /// Compact one-line macro summary; absent values are left out.
    pub fn summary_line(&self) -> String {
        let mut parts = Vec::new();
        if let Some(cal) = self.calories {
            parts.push(format!("{:.0} cal", cal));
        }
        if let Some(p) = self.protein {
            parts.push(format!("{:.0}g protein", p));
        }
        if let Some(c) = self.carbs {
            parts.push(format!("{:.0}g carbs", c));
        }
        if let Some(f) = self.fat {
            parts.push(format!("{:.0}g fat", f));
        }
        parts.join(", ")
    }

    /// Canonical key for case-insensitive lookups.
    pub fn key(&self) -> String {
        self.item.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> MenuItem {
        MenuItem {
            size: Some("Large".to_string()),
            calories: Some(540.0),
            protein: Some(30.0),
            carbs: None,
            fat: Some(0.0),
            ..MenuItem::new("Acme", "Burgers", "Burger")
        }
    }

    #[test]
    fn test_nutrient_accessor_matches_fields() {
        let item = sample_item();
        assert_eq!(item.nutrient(Nutrient::Calories), Some(540.0));
        assert_eq!(item.nutrient(Nutrient::Carbs), None);
        assert_eq!(item.nutrient(Nutrient::Fat), Some(0.0));
        assert_eq!(item.nutrient(Nutrient::Iron), None);
    }

    #[test]
    fn test_nutrient_mut_writes_the_right_field() {
        let mut item = sample_item();
        *item.nutrient_mut(Nutrient::SatFat) = Some(4.5);
        assert_eq!(item.sat_fat, Some(4.5));
        assert_eq!(item.nutrient(Nutrient::SatFat), Some(4.5));
    }

    #[test]
    fn test_display_name_includes_size() {
        assert_eq!(sample_item().display_name(), "Burger (Large)");
        assert_eq!(MenuItem::new("Acme", "", "Fries").display_name(), "Fries");
    }

    #[test]
    fn test_summary_line_skips_absent() {
        assert_eq!(
            sample_item().summary_line(),
            "540 cal, 30g protein, 0g fat"
        );
    }
}
