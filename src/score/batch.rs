//! Independent per-record scoring over a whole input.
//!
//! Records share nothing but the read-only profile, so they are scored on
//! rayon's pool and collected back in input order. A record that fails to
//! resolve becomes an `Unscoreable` outcome next to the scored ones; only a
//! table invariant violation stops the batch. Beverage water rows skip
//! resolution entirely and always score 0 / A.

use rayon::prelude::*;
use serde::{Serialize, Serializer};

use super::aggregator::{FinalResult, score_record, water_result};
use super::category::Category;
use super::profile::{CategoryProfile, ProfileSet};
use super::record::{NutrientRecord, RawNutrientRecord, RecordError};
use super::table::TableInvariantViolation;

/// Result for one input record, tagged with its input position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecordOutcome {
    Scored {
        index: usize,
        name: Option<String>,
        result: FinalResult,
    },
    Unscoreable {
        index: usize,
        name: Option<String>,
        #[serde(serialize_with = "as_display")]
        error: RecordError,
    },
}

impl RecordOutcome {
    pub fn index(&self) -> usize {
        match self {
            Self::Scored { index, .. } | Self::Unscoreable { index, .. } => *index,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Scored { name, .. } | Self::Unscoreable { name, .. } => name.as_deref(),
        }
    }

    pub fn result(&self) -> Option<&FinalResult> {
        match self {
            Self::Scored { result, .. } => Some(result),
            Self::Unscoreable { .. } => None,
        }
    }
}

/// All outcomes of one batch, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub category: Category,
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchResult {
    pub fn scored(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result().is_some()).count()
    }

    pub fn unscoreable(&self) -> usize {
        self.outcomes.len() - self.scored()
    }
}

/// Score every record against the profile for `category`.
pub fn score_batch(
    records: &[RawNutrientRecord],
    category: Category,
    profiles: &ProfileSet,
) -> Result<BatchResult, TableInvariantViolation> {
    let profile = profiles.get(category);
    tracing::info!(records = records.len(), %category, "scoring batch");

    let outcomes = records
        .par_iter()
        .enumerate()
        .map(|(index, raw)| score_one(index, raw, profile))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| tracing::error!("aborting batch: {e}"))?;

    let batch = BatchResult { category, outcomes };
    tracing::info!(
        scored = batch.scored(),
        unscoreable = batch.unscoreable(),
        "batch finished"
    );
    Ok(batch)
}

fn score_one(
    index: usize,
    raw: &RawNutrientRecord,
    profile: &CategoryProfile,
) -> Result<RecordOutcome, TableInvariantViolation> {
    let name = raw.name.clone();
    // Water needs none of its nutrient values, so it is settled before
    // resolution can reject them.
    if profile.category() == Category::Beverage && raw.is_water == Some(true) {
        tracing::debug!(index, "water override");
        return Ok(RecordOutcome::Scored {
            index,
            name,
            result: water_result(),
        });
    }
    let record = match NutrientRecord::resolve(raw) {
        Ok(r) => r,
        Err(error) => {
            tracing::warn!(index, name = name.as_deref().unwrap_or(""), "unscoreable: {error}");
            return Ok(RecordOutcome::Unscoreable { index, name, error });
        }
    };
    let result = score_record(&record, profile)?;
    tracing::debug!(index, score = result.score, grade = %result.grade, "scored record");
    Ok(RecordOutcome::Scored {
        index,
        name,
        result,
    })
}

fn as_display<S: Serializer>(error: &RecordError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
