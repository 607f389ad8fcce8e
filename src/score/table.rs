//! Point-valued interval tables and the component lookup over them.
//!
//! A `ScoringTable` partitions the whole real line into right-closed
//! intervals `(lower, upper]`: the first starts at `-inf`, the last ends at
//! `+inf`, each interval starts where the previous one ends, and points
//! never decrease as the bounds grow. `ScoringTable::new` refuses anything
//! else, so a lookup on a constructed table always finds exactly one
//! interval for a finite value.
//!
//! Points are also bounded to `0..=MAX_POINTS`, which keeps every N/P sum
//! and the final score well inside `i32`.

/// Largest point value a single interval may award.
pub const MAX_POINTS: i32 = 100;

/// A malformed scoring table or grade-band table.
///
/// Raised while profiles are built (so bad tables never reach scoring) and,
/// as `NoMatch` / `NoBand`, if a lookup ever falls through anyway. Both are
/// defects in the table definitions, never data problems.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableInvariantViolation {
    #[error("{table}: table has no intervals")]
    Empty { table: String },

    #[error("{table}: first interval must start at -inf, found {found}")]
    OpenStart { table: String, found: f64 },

    #[error("{table}: last interval must end at +inf, found {found}")]
    OpenEnd { table: String, found: f64 },

    #[error("{table}: interval ({lower}, {upper}] is empty")]
    EmptyInterval { table: String, lower: f64, upper: f64 },

    #[error("{table}: gap or overlap between bound {previous} and {next}")]
    Discontinuous {
        table: String,
        previous: f64,
        next: f64,
    },

    #[error("{table}: points decrease from {previous} to {next}")]
    NotMonotonic {
        table: String,
        previous: i32,
        next: i32,
    },

    #[error("{table}: points {points} outside 0..={max}", max = MAX_POINTS)]
    PointsOutOfRange { table: String, points: i32 },

    #[error("{table}: no interval matches value {value}")]
    NoMatch { table: String, value: f64 },

    #[error("{table}: grade bands must cover every integer score ({detail})")]
    BandCoverage { table: String, detail: String },

    #[error("{table}: grades out of order ({previous} listed before {next})")]
    BandOrder {
        table: String,
        previous: String,
        next: String,
    },

    #[error("{table}: no grade band covers score {score}")]
    NoBand { table: String, score: i32 },
}

/// One `(lower, upper] -> points` interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTable {
    name: String,
    intervals: Vec<Interval>,
}

impl ScoringTable {
    /// Build a table from explicit intervals, checking every invariant.
    pub fn new(
        name: impl Into<String>,
        intervals: Vec<Interval>,
    ) -> Result<Self, TableInvariantViolation> {
        let name = name.into();
        validate(&name, &intervals)?;
        Ok(Self { name, intervals })
    }

    /// Build a table from ascending `(upper, points)` steps. Each interval
    /// starts at the previous step's upper bound; the first at `-inf`.
    pub fn from_steps(
        name: impl Into<String>,
        steps: &[(f64, i32)],
    ) -> Result<Self, TableInvariantViolation> {
        let mut lower = f64::NEG_INFINITY;
        let intervals = steps
            .iter()
            .map(|&(upper, points)| {
                let interval = Interval {
                    lower,
                    upper,
                    points,
                };
                lower = upper;
                interval
            })
            .collect();
        Self::new(name, intervals)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Points of the first interval with `lower < value <= upper`.
    pub fn score(&self, value: f64) -> Result<i32, TableInvariantViolation> {
        self.intervals
            .iter()
            .find(|i| i.lower < value && value <= i.upper)
            .map(|i| i.points)
            .ok_or_else(|| TableInvariantViolation::NoMatch {
                table: self.name.clone(),
                value,
            })
    }

    /// Highest attainable points (the last interval's).
    pub fn max_points(&self) -> i32 {
        self.intervals.last().map_or(0, |i| i.points)
    }
}

fn validate(table: &str, intervals: &[Interval]) -> Result<(), TableInvariantViolation> {
    let (first, last) = match (intervals.first(), intervals.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => {
            return Err(TableInvariantViolation::Empty {
                table: table.to_string(),
            });
        }
    };
    if first.lower != f64::NEG_INFINITY {
        return Err(TableInvariantViolation::OpenStart {
            table: table.to_string(),
            found: first.lower,
        });
    }
    if last.upper != f64::INFINITY {
        return Err(TableInvariantViolation::OpenEnd {
            table: table.to_string(),
            found: last.upper,
        });
    }
    for i in intervals {
        if !(0..=MAX_POINTS).contains(&i.points) {
            return Err(TableInvariantViolation::PointsOutOfRange {
                table: table.to_string(),
                points: i.points,
            });
        }
        // NaN bounds fail this too
        if !(i.lower < i.upper) {
            return Err(TableInvariantViolation::EmptyInterval {
                table: table.to_string(),
                lower: i.lower,
                upper: i.upper,
            });
        }
    }
    for pair in intervals.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.upper != next.lower {
            return Err(TableInvariantViolation::Discontinuous {
                table: table.to_string(),
                previous: prev.upper,
                next: next.lower,
            });
        }
        if next.points < prev.points {
            return Err(TableInvariantViolation::NotMonotonic {
                table: table.to_string(),
                previous: prev.points,
                next: next.points,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
