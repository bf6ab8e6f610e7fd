use serde::{Deserialize, Serialize};

use crate::models::{MenuItem, Nutrient};

/// Summed nutrition for a meal. Absent item values contribute zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Number of rows that went into the sum.
    pub items: usize,

    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,

    pub fiber: f64,
    pub sugar: f64,
    pub sat_fat: f64,
    pub poly_fat: f64,
    pub mono_fat: f64,
    pub trans_fat: f64,
    pub cholesterol: f64,
    pub sodium: f64,
    pub potassium: f64,
    pub vitamin_a: f64,
    pub vitamin_c: f64,
    pub calcium: f64,
    pub iron: f64,
}

impl Totals {
    /// Add one serving of an item.
    pub fn add(&mut self, item: &MenuItem) {
        self.items += 1;
        for nutrient in Nutrient::ALL {
            *self.slot_mut(nutrient) += item.nutrient(nutrient).unwrap_or(0.0);
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
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

    fn slot_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
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

    /// The four headline totals as labelled pairs.
    pub fn summary(&self) -> [(&'static str, f64); 4] {
        [
            ("Total Calories", self.calories),
            ("Total Protein (g)", self.protein),
            ("Total Fat (g)", self.fat),
            ("Total Carbs (g)", self.carbs),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.items == 0
    }
}

impl<'a> FromIterator<&'a MenuItem> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a MenuItem>>(iter: I) -> Self {
        let mut totals = Totals::default();
        for item in iter {
            totals.add(item);
        }
        totals
    }
}
