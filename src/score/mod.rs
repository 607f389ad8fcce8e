//! Nutri-Score computation.
//!
//! A record flows through four stages: `record` resolves the raw input into
//! typed values, `table` looks each nutrient up in the category's
//! `profile`, `aggregator` folds the component points into N/P totals and a
//! final score, and `grade` maps that score to a letter. `batch` runs the
//! pipeline over many records at once.

pub mod aggregator;
pub mod batch;
pub mod category;
pub mod grade;
pub mod profile;
pub mod record;
mod report;
pub mod table;

use std::borrow::Cow;
use std::path::Path;

use crate::error::Error;
use crate::{export, ingest};

pub use aggregator::{
    ComponentScoreSet, FinalResult, component_scores, score_record, water_result,
};
pub use batch::{BatchResult, RecordOutcome, score_batch};
pub use category::Category;
pub use grade::{Grade, GradeBand, GradeBands};
pub use profile::{CategoryProfile, ProfileSet};
pub use record::{Nutrient, NutrientRecord, RawNutrientRecord, RecordError};
pub use table::{Interval, ScoringTable, TableInvariantViolation};

/// Score every record in `input` and print the results.
///
/// The category and profiles are checked before the input is read, so a
/// configuration error never leaves partial output behind.
pub fn run(
    input: &Path,
    category: &str,
    profiles: Option<&Path>,
    json: bool,
    csv_out: Option<&Path>,
) -> Result<(), Error> {
    let category: Category = category.parse()?;
    let profiles = load_profiles(profiles)?;

    let records = ingest::read_records(input)?;
    let batch = score_batch(&records, category, &profiles)?;

    let target = input.to_str();
    if json {
        report::print_json(&batch, target)?;
    } else {
        report::print_report(&batch, target);
    }

    if let Some(out) = csv_out {
        export::write_csv_file(out, &records, &batch)?;
        tracing::info!(path = %out.display(), "wrote CSV export");
    }

    Ok(())
}

/// Score one product given directly instead of through an input file, and
/// print it the same way `run` prints a batch. Returns the one-record batch.
pub fn run_one(
    record: RawNutrientRecord,
    category: &str,
    profiles: Option<&Path>,
    json: bool,
) -> Result<BatchResult, Error> {
    let category: Category = category.parse()?;
    let profiles = load_profiles(profiles)?;

    let batch = score_batch(std::slice::from_ref(&record), category, &profiles)?;
    if json {
        report::print_json(&batch, None)?;
    } else {
        report::print_report(&batch, None);
    }
    Ok(batch)
}

/// Print the scoring tables and grade bands of one category, or the whole
/// profile set as TOML.
pub fn run_tables(category: &str, profiles: Option<&Path>, toml: bool) -> Result<(), Error> {
    let category: Category = category.parse()?;
    let profiles = load_profiles(profiles)?;

    if toml {
        print!("{}", profiles.to_toml_string()?);
    } else {
        report::print_tables(profiles.get(category));
    }
    Ok(())
}

fn load_profiles(path: Option<&Path>) -> Result<Cow<'static, ProfileSet>, Error> {
    match path {
        Some(p) => Ok(Cow::Owned(ProfileSet::load(p)?)),
        None => Ok(Cow::Borrowed(ProfileSet::canonical()?)),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
