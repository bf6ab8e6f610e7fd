use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Every numeric nutrition attribute a menu item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sugar,
    SatFat,
    PolyFat,
    MonoFat,
    TransFat,
    Cholesterol,
    Sodium,
    Potassium,
    VitaminA,
    VitaminC,
    Calcium,
    Iron,
}

impl Nutrient {
    /// All nutrients in display order (core macros first).
    pub const ALL: [Nutrient; 17] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Sugar,
        Nutrient::SatFat,
        Nutrient::PolyFat,
        Nutrient::MonoFat,
        Nutrient::TransFat,
        Nutrient::Cholesterol,
        Nutrient::Sodium,
        Nutrient::Potassium,
        Nutrient::VitaminA,
        Nutrient::VitaminC,
        Nutrient::Calcium,
        Nutrient::Iron,
    ];

    /// The four macros every caller shows.
    pub const CORE: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
    ];

    /// Field name used in serialized records.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
            Nutrient::Fiber => "fiber",
            Nutrient::Sugar => "sugar",
            Nutrient::SatFat => "sat_fat",
            Nutrient::PolyFat => "poly_fat",
            Nutrient::MonoFat => "mono_fat",
            Nutrient::TransFat => "trans_fat",
            Nutrient::Cholesterol => "cholesterol",
            Nutrient::Sodium => "sodium",
            Nutrient::Potassium => "potassium",
            Nutrient::VitaminA => "vitamin_a",
            Nutrient::VitaminC => "vitamin_c",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
            Nutrient::Fiber => "Fiber",
            Nutrient::Sugar => "Sugar",
            Nutrient::SatFat => "Saturated fat",
            Nutrient::PolyFat => "Polyunsaturated fat",
            Nutrient::MonoFat => "Monounsaturated fat",
            Nutrient::TransFat => "Trans fat",
            Nutrient::Cholesterol => "Cholesterol",
            Nutrient::Sodium => "Sodium",
            Nutrient::Potassium => "Potassium",
            Nutrient::VitaminA => "Vitamin A",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
        }
    }

    /// Display unit. Vitamins and minerals are reported as exported, usually mg or %DV.
    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            Nutrient::Cholesterol
            | Nutrient::Sodium
            | Nutrient::Potassium
            | Nutrient::VitaminA
            | Nutrient::VitaminC
            | Nutrient::Calcium
            | Nutrient::Iron => "mg",
            _ => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
