//! Nutrient records: the raw shape ingestion hands over and the resolved,
//! typed shape the scorer consumes.
//!
//! Defaults and range checks happen once, in `NutrientRecord::resolve`.
//! Past that point every value is finite and in range and every flag has a
//! definite value, so the scoring code never deals with absent data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Nutrient fields of a record, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Energy,
    Sugar,
    SaturatedFat,
    Salt,
    FruitVegPulses,
    Fibre,
    Protein,
}

impl Nutrient {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Sugar => "sugar",
            Self::SaturatedFat => "saturated fat",
            Self::Salt => "salt",
            Self::FruitVegPulses => "fruit/veg/pulses",
            Self::Fibre => "fibre",
            Self::Protein => "protein",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single record could not be scored. Never aborts a batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("missing required nutrient: {nutrient}")]
    MissingRequiredNutrient { nutrient: Nutrient },

    #[error("{nutrient} value {value} is out of range")]
    OutOfRangeValue { nutrient: Nutrient, value: f64 },
}

/// A record as delivered by ingestion: any value may be absent.
///
/// Energy in kJ, masses in g, fruit/veg/pulses in percent, all per 100 g
/// or 100 mL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNutrientRecord {
    pub name: Option<String>,
    pub energy: Option<f64>,
    pub sugar: Option<f64>,
    #[serde(alias = "saturatedFat")]
    pub saturated_fat: Option<f64>,
    pub salt: Option<f64>,
    #[serde(alias = "fruitVegPulsePercent")]
    pub fruit_veg_pulse_percent: Option<f64>,
    pub fibre: Option<f64>,
    pub protein: Option<f64>,
    #[serde(alias = "containsSweeteners")]
    pub contains_sweeteners: Option<bool>,
    #[serde(alias = "isRedMeat")]
    pub is_red_meat: Option<bool>,
    #[serde(alias = "isCheese")]
    pub is_cheese: Option<bool>,
    #[serde(alias = "isWater")]
    pub is_water: Option<bool>,
}

/// A fully resolved record. `is_red_meat` and `is_cheese` only affect the
/// General category; `contains_sweeteners` and `is_water` only Beverage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientRecord {
    pub energy: f64,
    pub sugar: f64,
    pub saturated_fat: f64,
    pub salt: f64,
    pub fruit_veg_pulse_percent: f64,
    pub fibre: f64,
    pub protein: f64,
    pub contains_sweeteners: bool,
    pub is_red_meat: bool,
    pub is_cheese: bool,
    pub is_water: bool,
}

impl NutrientRecord {
    /// Apply defaults and range checks to a raw record.
    ///
    /// Energy, sugar, saturated fat and salt are required. Fruit/veg/pulses,
    /// fibre and protein default to 0 and absent flags to `false`. Values
    /// must be finite and non-negative; the fruit percentage must also be at
    /// most 100. The first offending nutrient in field order is reported.
    pub fn resolve(raw: &RawNutrientRecord) -> Result<Self, RecordError> {
        Ok(Self {
            energy: required(Nutrient::Energy, raw.energy)?,
            sugar: required(Nutrient::Sugar, raw.sugar)?,
            saturated_fat: required(Nutrient::SaturatedFat, raw.saturated_fat)?,
            salt: required(Nutrient::Salt, raw.salt)?,
            fruit_veg_pulse_percent: percent(
                Nutrient::FruitVegPulses,
                raw.fruit_veg_pulse_percent,
            )?,
            fibre: optional(Nutrient::Fibre, raw.fibre)?,
            protein: optional(Nutrient::Protein, raw.protein)?,
            contains_sweeteners: raw.contains_sweeteners.unwrap_or(false),
            is_red_meat: raw.is_red_meat.unwrap_or(false),
            is_cheese: raw.is_cheese.unwrap_or(false),
            is_water: raw.is_water.unwrap_or(false),
        })
    }
}

fn required(nutrient: Nutrient, value: Option<f64>) -> Result<f64, RecordError> {
    let value = value.ok_or(RecordError::MissingRequiredNutrient { nutrient })?;
    in_range(nutrient, value, f64::INFINITY)
}

fn optional(nutrient: Nutrient, value: Option<f64>) -> Result<f64, RecordError> {
    in_range(nutrient, value.unwrap_or(0.0), f64::INFINITY)
}

fn percent(nutrient: Nutrient, value: Option<f64>) -> Result<f64, RecordError> {
    in_range(nutrient, value.unwrap_or(0.0), 100.0)
}

fn in_range(nutrient: Nutrient, value: f64, max: f64) -> Result<f64, RecordError> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(RecordError::OutOfRangeValue { nutrient, value })
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
