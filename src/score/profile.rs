//! Category profiles: the seven component tables and the grade bands for
//! one product category.
//!
//! The canonical profiles are built once per process and shared read-only
//! by every scoring call. A profile set can also be loaded from TOML, in
//! which case every table goes through the same validation before the set
//! is handed out, so lookups never meet a malformed table.

use std::fs;
use std::iter;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::grade::{Grade, GradeBands};
use super::table::{ScoringTable, TableInvariantViolation};
use crate::error::Error;

const INF: f64 = f64::INFINITY;

// ─── Canonical thresholds (upper bounds; points count up from 0) ─────

const ENERGY_GENERAL: [f64; 10] = [
    335.0, 670.0, 1005.0, 1340.0, 1675.0, 2010.0, 2345.0, 2680.0, 3015.0, 3350.0,
];
const ENERGY_BEVERAGE: [f64; 10] = [
    30.0, 90.0, 150.0, 210.0, 240.0, 270.0, 300.0, 330.0, 360.0, 390.0,
];
/// Fat category energy is scored on `saturated_fat * 37` kJ.
const ENERGY_FAT: [f64; 10] = [
    120.0, 240.0, 360.0, 480.0, 600.0, 720.0, 840.0, 960.0, 1080.0, 1200.0,
];

const SUGAR_SOLID: [f64; 15] = [
    3.4, 6.8, 10.0, 14.0, 17.0, 20.0, 24.0, 27.0, 31.0, 34.0, 37.0, 41.0, 44.0, 48.0, 51.0,
];
const SUGAR_BEVERAGE: [f64; 10] = [0.5, 2.0, 3.5, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0];

const SAT_FAT_STANDARD: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
const SAT_FAT_FAT: [f64; 10] = [10.0, 16.0, 22.0, 28.0, 34.0, 40.0, 46.0, 52.0, 58.0, 64.0];

const SALT: [f64; 20] = [
    0.2, 0.4, 0.6, 0.8, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.4, 2.6, 2.8, 3.0, 3.2, 3.4, 3.6,
    3.8, 4.0,
];

// ─── Canonical favorable tables (irregular point steps) ──────────────

const FRUIT_SOLID: [(f64, i32); 4] = [(40.0, 0), (60.0, 2), (80.0, 5), (INF, 5)];
const FRUIT_BEVERAGE: [(f64, i32); 4] = [(40.0, 0), (60.0, 2), (80.0, 4), (INF, 6)];

const FIBRE: [(f64, i32); 6] = [
    (3.0, 0),
    (4.1, 2),
    (5.2, 3),
    (6.3, 4),
    (7.4, 5),
    (INF, 5),
];

const PROTEIN_SOLID: [(f64, i32); 9] = [
    (1.2, 0),
    (2.4, 1),
    (4.8, 2),
    (7.2, 3),
    (9.6, 4),
    (12.0, 5),
    (14.0, 6),
    (17.0, 7),
    (INF, 8),
];
const PROTEIN_BEVERAGE: [(f64, i32); 8] = [
    (1.2, 0),
    (1.5, 1),
    (1.8, 2),
    (2.1, 3),
    (2.4, 4),
    (2.7, 5),
    (3.0, 6),
    (INF, 7),
];

// ─── Canonical grade bands (inclusive upper score) ───────────────────

const GRADES_GENERAL: [(i32, Grade); 5] = [
    (0, Grade::A),
    (2, Grade::B),
    (10, Grade::C),
    (18, Grade::D),
    (i32::MAX, Grade::E),
];
const GRADES_BEVERAGE: [(i32, Grade); 5] = [
    (0, Grade::A),
    (2, Grade::B),
    (6, Grade::C),
    (9, Grade::D),
    (i32::MAX, Grade::E),
];
const GRADES_FAT: [(i32, Grade); 5] = [
    (-6, Grade::A),
    (2, Grade::B),
    (10, Grade::C),
    (18, Grade::D),
    (i32::MAX, Grade::E),
];

/// Per-category choice among the threshold arrays above. Salt and fibre
/// are shared by every category.
struct Thresholds {
    energy: &'static [f64],
    sugar: &'static [f64],
    saturated_fat: &'static [f64],
    fruit: &'static [(f64, i32)],
    protein: &'static [(f64, i32)],
    grades: &'static [(i32, Grade)],
}

const GENERAL: Thresholds = Thresholds {
    energy: &ENERGY_GENERAL,
    sugar: &SUGAR_SOLID,
    saturated_fat: &SAT_FAT_STANDARD,
    fruit: &FRUIT_SOLID,
    protein: &PROTEIN_SOLID,
    grades: &GRADES_GENERAL,
};

const FAT: Thresholds = Thresholds {
    energy: &ENERGY_FAT,
    sugar: &SUGAR_SOLID,
    saturated_fat: &SAT_FAT_FAT,
    fruit: &FRUIT_SOLID,
    protein: &PROTEIN_SOLID,
    grades: &GRADES_FAT,
};

const BEVERAGE: Thresholds = Thresholds {
    energy: &ENERGY_BEVERAGE,
    sugar: &SUGAR_BEVERAGE,
    saturated_fat: &SAT_FAT_STANDARD,
    fruit: &FRUIT_BEVERAGE,
    protein: &PROTEIN_BEVERAGE,
    grades: &GRADES_BEVERAGE,
};

static CANONICAL: LazyLock<Result<ProfileSet, TableInvariantViolation>> =
    LazyLock::new(build_canonical);

/// Scoring tables and grade bands for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProfile {
    category: Category,
    energy: ScoringTable,
    sugar: ScoringTable,
    saturated_fat: ScoringTable,
    salt: ScoringTable,
    fruit: ScoringTable,
    fibre: ScoringTable,
    protein: ScoringTable,
    grades: GradeBands,
}

impl CategoryProfile {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn energy(&self) -> &ScoringTable {
        &self.energy
    }

    pub fn sugar(&self) -> &ScoringTable {
        &self.sugar
    }

    pub fn saturated_fat(&self) -> &ScoringTable {
        &self.saturated_fat
    }

    pub fn salt(&self) -> &ScoringTable {
        &self.salt
    }

    pub fn fruit(&self) -> &ScoringTable {
        &self.fruit
    }

    pub fn fibre(&self) -> &ScoringTable {
        &self.fibre
    }

    pub fn protein(&self) -> &ScoringTable {
        &self.protein
    }

    pub fn grades(&self) -> &GradeBands {
        &self.grades
    }

    /// The seven component tables with display labels, N-side first.
    pub fn tables(&self) -> [(&'static str, &ScoringTable); 7] {
        [
            ("Energy", &self.energy),
            ("Sugar", &self.sugar),
            ("Saturated fat", &self.saturated_fat),
            ("Salt", &self.salt),
            ("Fruit/veg/pulses", &self.fruit),
            ("Fibre", &self.fibre),
            ("Protein", &self.protein),
        ]
    }
}

/// One profile per category.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSet {
    general: CategoryProfile,
    fat: CategoryProfile,
    beverage: CategoryProfile,
}

impl ProfileSet {
    /// The built-in profiles, constructed on first use and shared afterwards.
    pub fn canonical() -> Result<&'static ProfileSet, TableInvariantViolation> {
        CANONICAL.as_ref().map_err(Clone::clone)
    }

    pub fn get(&self, category: Category) -> &CategoryProfile {
        match category {
            Category::General => &self.general,
            Category::Fat => &self.fat,
            Category::Beverage => &self.beverage,
        }
    }

    /// Load a profile set from a TOML file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let set = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded scoring profiles");
        Ok(set)
    }

    /// Parse and validate a profile set from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        let file: ProfileSetFile = toml::from_str(text)?;
        Ok(Self {
            general: file.general.into_profile(Category::General)?,
            fat: file.fat.into_profile(Category::Fat)?,
            beverage: file.beverage.into_profile(Category::Beverage)?,
        })
    }

    /// Render the set in the same TOML layout `from_toml_str` reads.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let file = ProfileSetFile {
            general: ProfileFile::from_profile(&self.general),
            fat: ProfileFile::from_profile(&self.fat),
            beverage: ProfileFile::from_profile(&self.beverage),
        };
        toml::to_string(&file)
    }
}

fn table_name(category: Category, table: &str) -> String {
    format!("{category}/{table}")
}

/// Table whose points count up by one per bound, ending at `+inf`.
fn ladder(
    category: Category,
    table: &str,
    bounds: &[f64],
) -> Result<ScoringTable, TableInvariantViolation> {
    let steps: Vec<(f64, i32)> = bounds
        .iter()
        .zip(0..)
        .map(|(&upper, points)| (upper, points))
        .chain(iter::once((INF, bounds.len() as i32)))
        .collect();
    ScoringTable::from_steps(table_name(category, table), &steps)
}

fn canonical_profile(category: Category) -> Result<CategoryProfile, TableInvariantViolation> {
    let t = match category {
        Category::General => &GENERAL,
        Category::Fat => &FAT,
        Category::Beverage => &BEVERAGE,
    };
    Ok(CategoryProfile {
        category,
        energy: ladder(category, "energy", t.energy)?,
        sugar: ladder(category, "sugar", t.sugar)?,
        saturated_fat: ladder(category, "saturated_fat", t.saturated_fat)?,
        salt: ladder(category, "salt", &SALT)?,
        fruit: ScoringTable::from_steps(table_name(category, "fruit"), t.fruit)?,
        fibre: ScoringTable::from_steps(table_name(category, "fibre"), &FIBRE)?,
        protein: ScoringTable::from_steps(table_name(category, "protein"), t.protein)?,
        grades: GradeBands::from_steps(table_name(category, "grades"), t.grades)?,
    })
}

fn build_canonical() -> Result<ProfileSet, TableInvariantViolation> {
    let set = ProfileSet {
        general: canonical_profile(Category::General)?,
        fat: canonical_profile(Category::Fat)?,
        beverage: canonical_profile(Category::Beverage)?,
    };
    tracing::debug!("built canonical scoring profiles");
    Ok(set)
}

// ─── TOML layout ─────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileSetFile {
    general: ProfileFile,
    fat: ProfileFile,
    beverage: ProfileFile,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileFile {
    energy: Vec<StepFile>,
    sugar: Vec<StepFile>,
    saturated_fat: Vec<StepFile>,
    salt: Vec<StepFile>,
    fruit: Vec<StepFile>,
    fibre: Vec<StepFile>,
    protein: Vec<StepFile>,
    grades: Vec<BandFile>,
}

/// `upto` omitted means `+inf`.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StepFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    upto: Option<f64>,
    points: i32,
}

/// `upto` omitted means `i32::MAX`.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BandFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    upto: Option<i32>,
    grade: Grade,
}

impl ProfileFile {
    fn into_profile(self, category: Category) -> Result<CategoryProfile, TableInvariantViolation> {
        let table = |name: &str, steps: Vec<StepFile>| {
            let steps: Vec<(f64, i32)> = steps
                .iter()
                .map(|s| (s.upto.unwrap_or(INF), s.points))
                .collect();
            ScoringTable::from_steps(table_name(category, name), &steps)
        };
        let grades: Vec<(i32, Grade)> = self
            .grades
            .iter()
            .map(|b| (b.upto.unwrap_or(i32::MAX), b.grade))
            .collect();
        Ok(CategoryProfile {
            category,
            energy: table("energy", self.energy)?,
            sugar: table("sugar", self.sugar)?,
            saturated_fat: table("saturated_fat", self.saturated_fat)?,
            salt: table("salt", self.salt)?,
            fruit: table("fruit", self.fruit)?,
            fibre: table("fibre", self.fibre)?,
            protein: table("protein", self.protein)?,
            grades: GradeBands::from_steps(table_name(category, "grades"), &grades)?,
        })
    }

    fn from_profile(profile: &CategoryProfile) -> Self {
        let steps = |t: &ScoringTable| -> Vec<StepFile> {
            t.intervals()
                .iter()
                .map(|i| StepFile {
                    upto: i.upper.is_finite().then_some(i.upper),
                    points: i.points,
                })
                .collect()
        };
        Self {
            energy: steps(&profile.energy),
            sugar: steps(&profile.sugar),
            saturated_fat: steps(&profile.saturated_fat),
            salt: steps(&profile.salt),
            fruit: steps(&profile.fruit),
            fibre: steps(&profile.fibre),
            protein: steps(&profile.protein),
            grades: profile
                .grades
                .bands()
                .iter()
                .map(|b| BandFile {
                    upto: (b.upper != i32::MAX).then_some(b.upper),
                    grade: b.grade,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
