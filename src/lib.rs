//! Nutri-Score calculation for food and beverage products.
//!
//! The scoring engine lives in [`score`]: category profiles of threshold
//! tables, record resolution, N/P aggregation with the category special
//! rules, and letter grading. [`ingest`] reads records from CSV, Excel or
//! JSON files and [`export`] writes scored batches back out as CSV.

pub mod error;
pub mod export;
pub mod ingest;
mod report_helpers;
pub mod score;

pub use error::Error;
pub use score::{
    BatchResult, Category, CategoryProfile, FinalResult, Grade, NutrientRecord, ProfileSet,
    RawNutrientRecord, score_batch, score_record,
};
