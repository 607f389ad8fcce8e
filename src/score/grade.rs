use std::fmt;

use serde::{Deserialize, Serialize};

use super::table::TableInvariantViolation;

/// Nutri-Score letter grade, best (A) to worst (E).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed score range `lower..=upper` mapped to a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeBand {
    pub lower: i32,
    pub upper: i32,
    pub grade: Grade,
}

/// Ordered, exhaustive grade bands over every `i32` score.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeBands {
    name: String,
    bands: Vec<GradeBand>,
}

impl GradeBands {
    pub fn new(
        name: impl Into<String>,
        bands: Vec<GradeBand>,
    ) -> Result<Self, TableInvariantViolation> {
        let name = name.into();
        validate(&name, &bands)?;
        Ok(Self { name, bands })
    }

    /// Build bands from ascending `(upper, grade)` steps; the first band
    /// starts at `i32::MIN`, each later one right after the previous upper.
    pub fn from_steps(
        name: impl Into<String>,
        steps: &[(i32, Grade)],
    ) -> Result<Self, TableInvariantViolation> {
        let name = name.into();
        let mut bands = Vec::with_capacity(steps.len());
        let mut lower = Some(i32::MIN);
        for &(upper, grade) in steps {
            let Some(start) = lower else {
                return Err(TableInvariantViolation::BandCoverage {
                    table: name,
                    detail: "band listed after one ending at i32::MAX".to_string(),
                });
            };
            bands.push(GradeBand {
                lower: start,
                upper,
                grade,
            });
            lower = upper.checked_add(1);
        }
        Self::new(name, bands)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }

    /// Grade of the first band with `lower <= score <= upper`.
    pub fn classify(&self, score: i32) -> Result<Grade, TableInvariantViolation> {
        self.bands
            .iter()
            .find(|b| b.lower <= score && score <= b.upper)
            .map(|b| b.grade)
            .ok_or_else(|| TableInvariantViolation::NoBand {
                table: self.name.clone(),
                score,
            })
    }
}

fn validate(table: &str, bands: &[GradeBand]) -> Result<(), TableInvariantViolation> {
    let coverage = |detail: String| TableInvariantViolation::BandCoverage {
        table: table.to_string(),
        detail,
    };
    let (first, last) = match (bands.first(), bands.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(coverage("no bands".to_string())),
    };
    if first.lower != i32::MIN {
        return Err(coverage(format!("first band starts at {}", first.lower)));
    }
    if last.upper != i32::MAX {
        return Err(coverage(format!("last band ends at {}", last.upper)));
    }
    for b in bands {
        if b.lower > b.upper {
            return Err(coverage(format!("band {}..={} is empty", b.lower, b.upper)));
        }
    }
    for pair in bands.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.upper.checked_add(1) != Some(next.lower) {
            return Err(coverage(format!(
                "band ending at {} is followed by one starting at {}",
                prev.upper, next.lower
            )));
        }
        if next.grade < prev.grade {
            return Err(TableInvariantViolation::BandOrder {
                table: table.to_string(),
                previous: prev.grade.to_string(),
                next: next.grade.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grade_test.rs"]
mod tests;
