//! Reading raw nutrient records from CSV, spreadsheet or JSON files.
//!
//! CSV and spreadsheet headers are matched case-insensitively against the
//! column names of the Nutri-Score spreadsheet template ("Energy (kJ/100 g)",
//! "Is Water", ...) or the snake_case field names. Empty cells become absent
//! values. Numbers may use a decimal comma. A cell that does not parse is
//! kept as NaN so the record is flagged out of range instead of silently
//! dropped.

use std::fs::{self, File};
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use calamine::{Data, Range, Reader};

use crate::error::Error;
use crate::score::RawNutrientRecord;

/// Column a CSV or worksheet header maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Energy,
    Sugar,
    SaturatedFat,
    Salt,
    FruitVegPulses,
    Fibre,
    Protein,
    ContainsSweeteners,
    IsRedMeat,
    IsCheese,
    IsWater,
}

impl Column {
    fn from_header(header: &str) -> Option<Self> {
        let h = header.trim().to_lowercase();
        let column = match h.as_str() {
            "product name" | "product" | "name" => Self::Name,
            "energy (kj/100 g)" | "energy (kj/100 ml)" | "energy" => Self::Energy,
            "sugar (g/100 g)" | "sugar (g/100 ml)" | "sugars" | "sugar" => Self::Sugar,
            "saturates (g/100 g)" | "saturates (g/100 ml)" | "saturates" | "saturated_fat" => {
                Self::SaturatedFat
            }
            "salt (g/100 g)" | "salt (g/100 ml)" | "salt" => Self::Salt,
            "fruits, vegetables, and pulses (%)" | "fruit_veg_pulse_percent" => {
                Self::FruitVegPulses
            }
            "fibre (g/100 g)" | "fibre (g/100 ml)" | "fiber" | "fibre" => Self::Fibre,
            "protein (g/100 g)" | "protein (g/100 ml)" | "protein" => Self::Protein,
            "contains sweeteners" | "contains_sweeteners" => Self::ContainsSweeteners,
            "is red meat" | "is_red_meat" => Self::IsRedMeat,
            "is cheese" | "is_cheese" => Self::IsCheese,
            "is water" | "is_water" => Self::IsWater,
            _ => return None,
        };
        Some(column)
    }
}

/// Read records from a `.csv`, `.xlsx` / `.xls` or `.json` file.
pub fn read_records(path: &Path) -> Result<Vec<RawNutrientRecord>, Error> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let open = || File::open(path).map(BufReader::new).map_err(|e| Error::io(path, e));

    let records = match ext.as_str() {
        "csv" => parse_csv(open()?)?,
        "xlsx" | "xlsm" | "xls" => read_workbook(path)?,
        "json" => parse_json(open()?)?,
        _ => return Err(Error::UnsupportedFormat(path.display().to_string())),
    };
    tracing::info!(path = %path.display(), records = records.len(), "read input");
    Ok(records)
}

/// Parse CSV rows into raw records. Unknown columns are ignored.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawNutrientRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.headers()?.iter());
    let mut records = Vec::new();
    for row in csv_reader.records() {
        records.push(columns.record(row?.iter()));
    }
    Ok(records)
}

/// Read the first worksheet of an Excel workbook.
fn read_workbook(path: &Path) -> Result<Vec<RawNutrientRecord>, Error> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::NoWorksheet(path.display().to_string()))??;
    Ok(parse_sheet(&range))
}

/// Parse worksheet rows into raw records. The first row holds the headers;
/// rows with no content at all are skipped.
pub fn parse_sheet(range: &Range<Data>) -> Vec<RawNutrientRecord> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header.iter().map(cell_text).collect();
    let columns = ColumnMap::from_headers(header.iter().map(String::as_str));

    rows.filter(|row| row.iter().any(|c| !matches!(c, Data::Empty)))
        .map(|row| {
            let cells: Vec<String> = row.iter().map(cell_text).collect();
            columns.record(cells.iter().map(String::as_str))
        })
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

/// Column of each input position, resolved once from the header row.
struct ColumnMap(Vec<Option<Column>>);

impl ColumnMap {
    fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let columns: Vec<Option<Column>> = headers
            .into_iter()
            .map(|h| {
                let column = Column::from_header(h);
                if column.is_none() {
                    tracing::debug!(header = h, "ignoring unknown column");
                }
                column
            })
            .collect();
        for required in [Column::Energy, Column::Sugar, Column::SaturatedFat, Column::Salt] {
            if !columns.contains(&Some(required)) {
                tracing::warn!("input has no {required:?} column; every row will be unscoreable");
            }
        }
        Self(columns)
    }

    fn record<'a>(&self, cells: impl IntoIterator<Item = &'a str>) -> RawNutrientRecord {
        let mut record = RawNutrientRecord::default();
        for (column, cell) in self.0.iter().zip(cells) {
            if let Some(column) = column {
                apply_cell(&mut record, *column, cell);
            }
        }
        record
    }
}

/// Parse a JSON array of raw records (snake_case or camelCase keys).
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<RawNutrientRecord>, serde_json::Error> {
    serde_json::from_reader(reader)
}

fn apply_cell(record: &mut RawNutrientRecord, column: Column, cell: &str) {
    if cell.is_empty() {
        return;
    }
    match column {
        Column::Name => record.name = Some(cell.to_string()),
        Column::Energy => record.energy = Some(parse_number(cell)),
        Column::Sugar => record.sugar = Some(parse_number(cell)),
        Column::SaturatedFat => record.saturated_fat = Some(parse_number(cell)),
        Column::Salt => record.salt = Some(parse_number(cell)),
        Column::FruitVegPulses => record.fruit_veg_pulse_percent = Some(parse_number(cell)),
        Column::Fibre => record.fibre = Some(parse_number(cell)),
        Column::Protein => record.protein = Some(parse_number(cell)),
        Column::ContainsSweeteners => record.contains_sweeteners = parse_flag(cell),
        Column::IsRedMeat => record.is_red_meat = parse_flag(cell),
        Column::IsCheese => record.is_cheese = parse_flag(cell),
        Column::IsWater => record.is_water = parse_flag(cell),
    }
}

/// Parse a number, accepting a decimal comma. Unparseable text is NaN.
fn parse_number(cell: &str) -> f64 {
    let normalized = if cell.contains(',') && !cell.contains('.') {
        cell.replace(',', ".")
    } else {
        cell.to_string()
    };
    normalized.parse().unwrap_or_else(|_| {
        tracing::warn!(cell, "not a number");
        f64::NAN
    })
}

fn parse_flag(cell: &str) -> Option<bool> {
    match cell.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => {
            tracing::warn!(cell, "not a boolean, treating as absent");
            None
        }
    }
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod tests;
