//! N/P aggregation and the final Nutri-Score of one record.
//!
//! Steps, in order:
//! 1. Beverage water override: score 0, grade A, nothing else computed.
//! 2. Component lookups against the category profile. Fat scores energy on
//!    `saturated_fat * 37` kJ instead of the declared energy. Sweetened
//!    beverages get a flat 4-point penalty.
//! 3. Red-meat cap: General red meat keeps at most 2 protein points.
//! 4. Totals: N = energy + sugar + saturated fat + salt + sweetener penalty,
//!    P = fruit + fibre + protein.
//! 5. Protein restriction: above the category threshold (General 11,
//!    Fat 7) only fruit and fibre are subtracted from N, unless the product
//!    is a General cheese. Beverages always subtract the full P.

use serde::Serialize;

use super::category::Category;
use super::grade::Grade;
use super::profile::CategoryProfile;
use super::record::NutrientRecord;
use super::table::TableInvariantViolation;

/// kJ per gram of fat, used to derive Fat-category energy.
pub const FAT_ENERGY_KJ_PER_GRAM: f64 = 37.0;
/// Flat N-points penalty for beverages with non-nutritive sweeteners.
pub const SWEETENER_PENALTY: i32 = 4;
/// Protein points ceiling for red meat in the General category.
pub const RED_MEAT_PROTEIN_CAP: i32 = 2;
/// N-points at or above which General products lose their protein credit.
pub const GENERAL_PROTEIN_THRESHOLD: i32 = 11;
/// N-points at or above which Fat products lose their protein credit.
pub const FAT_PROTEIN_THRESHOLD: i32 = 7;

/// Per-component points plus N/P totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComponentScoreSet {
    pub energy: i32,
    pub sugar: i32,
    pub saturated_fat: i32,
    pub salt: i32,
    pub sweetener_penalty: i32,
    pub fruit: i32,
    pub fibre: i32,
    pub protein: i32,
    pub n_total: i32,
    pub p_total: i32,
}

/// Outcome of scoring one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalResult {
    pub score: i32,
    pub grade: Grade,
    pub components: ComponentScoreSet,
}

/// Score one record against its category profile.
///
/// Only a malformed profile can make this fail; resolved records always
/// fall inside the tables.
pub fn score_record(
    record: &NutrientRecord,
    profile: &CategoryProfile,
) -> Result<FinalResult, TableInvariantViolation> {
    let category = profile.category();

    if category == Category::Beverage && record.is_water {
        return Ok(water_result());
    }

    let components = component_scores(record, profile)?;
    let score = if protein_excluded(category, components.n_total, record.is_cheese) {
        components.n_total - (components.fruit + components.fibre)
    } else {
        components.n_total - components.p_total
    };
    let grade = profile.grades().classify(score)?;

    Ok(FinalResult {
        score,
        grade,
        components,
    })
}

/// Fixed outcome for plain water in the Beverage category: score 0,
/// grade A, no component points.
pub fn water_result() -> FinalResult {
    FinalResult {
        score: 0,
        grade: Grade::A,
        components: ComponentScoreSet::default(),
    }
}

/// Look up all eight components and derive the totals.
pub fn component_scores(
    record: &NutrientRecord,
    profile: &CategoryProfile,
) -> Result<ComponentScoreSet, TableInvariantViolation> {
    let category = profile.category();

    let energy_kj = match category {
        Category::Fat => record.saturated_fat * FAT_ENERGY_KJ_PER_GRAM,
        Category::General | Category::Beverage => record.energy,
    };
    let energy = profile.energy().score(energy_kj)?;
    let sugar = profile.sugar().score(record.sugar)?;
    let saturated_fat = profile.saturated_fat().score(record.saturated_fat)?;
    let salt = profile.salt().score(record.salt)?;
    let sweetener_penalty = if category == Category::Beverage && record.contains_sweeteners {
        SWEETENER_PENALTY
    } else {
        0
    };

    let fruit = profile.fruit().score(record.fruit_veg_pulse_percent)?;
    let fibre = profile.fibre().score(record.fibre)?;
    let mut protein = profile.protein().score(record.protein)?;
    if category == Category::General && record.is_red_meat {
        protein = protein.min(RED_MEAT_PROTEIN_CAP);
    }

    Ok(ComponentScoreSet {
        energy,
        sugar,
        saturated_fat,
        salt,
        sweetener_penalty,
        fruit,
        fibre,
        protein,
        n_total: energy + sugar + saturated_fat + salt + sweetener_penalty,
        p_total: fruit + fibre + protein,
    })
}

/// Whether protein points are left out of the subtraction.
fn protein_excluded(category: Category, n_total: i32, is_cheese: bool) -> bool {
    match category {
        Category::Beverage => false,
        Category::Fat => n_total >= FAT_PROTEIN_THRESHOLD,
        Category::General => n_total >= GENERAL_PROTEIN_THRESHOLD && !is_cheese,
    }
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;
