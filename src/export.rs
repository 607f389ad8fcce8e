//! CSV export of a scored batch, one row per input record.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Error;
use crate::score::{BatchResult, RawNutrientRecord, RecordOutcome};

const HEADER: [&str; 25] = [
    "Product Name",
    "Energy (kJ/100 g)",
    "Sugar (g/100 g)",
    "Saturates (g/100 g)",
    "Salt (g/100 g)",
    "Fruits, vegetables, and pulses (%)",
    "Fibre (g/100 g)",
    "Protein (g/100 g)",
    "Contains sweeteners",
    "Is Water",
    "Is red meat",
    "Is cheese",
    "Energy Score",
    "Sugar Score",
    "Saturates Score",
    "Salt Score",
    "Sweetener Penalty",
    "Fruit Score",
    "Fibre Score",
    "Protein Score",
    "N-points Total",
    "P-points Total",
    "Nutri-Score Points",
    "Nutri-Score Grade",
    "Error",
];

/// Write the batch as CSV. `records` must be the input the batch was
/// scored from; rows pair up by index.
pub fn write_csv<W: Write>(
    writer: W,
    records: &[RawNutrientRecord],
    batch: &BatchResult,
) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;

    for (raw, outcome) in records.iter().zip(&batch.outcomes) {
        let mut row: Vec<String> = vec![
            raw.name.clone().unwrap_or_default(),
            number(raw.energy),
            number(raw.sugar),
            number(raw.saturated_fat),
            number(raw.salt),
            number(raw.fruit_veg_pulse_percent),
            number(raw.fibre),
            number(raw.protein),
            flag(raw.contains_sweeteners),
            flag(raw.is_water),
            flag(raw.is_red_meat),
            flag(raw.is_cheese),
        ];
        match outcome {
            RecordOutcome::Scored { result, .. } => {
                let c = &result.components;
                row.extend(
                    [
                        c.energy,
                        c.sugar,
                        c.saturated_fat,
                        c.salt,
                        c.sweetener_penalty,
                        c.fruit,
                        c.fibre,
                        c.protein,
                        c.n_total,
                        c.p_total,
                        result.score,
                    ]
                    .map(|v| v.to_string()),
                );
                row.push(result.grade.to_string());
                row.push(String::new());
            }
            RecordOutcome::Unscoreable { error, .. } => {
                row.extend(std::iter::repeat_n(String::new(), 12));
                row.push(error.to_string());
            }
        }
        out.write_record(&row)?;
    }
    out.flush()?;
    Ok(())
}

/// Write the export to a file at `path`.
pub fn write_csv_file(
    path: &Path,
    records: &[RawNutrientRecord],
    batch: &BatchResult,
) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_csv(file, records, batch)?;
    Ok(())
}

fn number(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

/// Absent flags export as their resolved default.
fn flag(v: Option<bool>) -> String {
    v.unwrap_or(false).to_string()
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
