use serde::Serialize;

use super::batch::{BatchResult, RecordOutcome};
use super::category::Category;
use super::profile::CategoryProfile;
use super::table::ScoringTable;
use crate::report_helpers::{fit_width, max_name_width, print_json_stdout, separator};

const NO_NAME: &str = "-";

/// Print a batch as a table: one row per scored record with its component
/// points, then the records that could not be scored and why.
pub fn print_report(batch: &BatchResult, target: Option<&str>) {
    let name_width = max_name_width(
        batch.outcomes.iter().map(|o| o.name().unwrap_or(NO_NAME)),
        7,
        30,
    );
    let separator = separator(name_width + 66);

    match target {
        Some(t) => println!("Nutri-Score: {} ({t})", batch.category.label()),
        None => println!("Nutri-Score: {}", batch.category.label()),
    }
    println!("{separator}");
    println!(
        " {:>4}  {}  {:>3} {:>3} {:>3} {:>3} {:>3}   {:>3} {:>3} {:>3}   {:>3} {:>3}   {:>5}  Grade",
        "#",
        fit_width("Product", name_width),
        "En",
        "Su",
        "SF",
        "Sa",
        "Sw",
        "Fr",
        "Fi",
        "Pr",
        "N",
        "P",
        "Score",
    );
    println!("{separator}");

    for outcome in &batch.outcomes {
        if let RecordOutcome::Scored {
            index,
            name,
            result,
        } = outcome
        {
            let c = &result.components;
            println!(
                " {:>4}  {}  {:>3} {:>3} {:>3} {:>3} {:>3}   {:>3} {:>3} {:>3}   {:>3} {:>3}   {:>5}  {}",
                index + 1,
                fit_width(name.as_deref().unwrap_or(NO_NAME), name_width),
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
                result.grade,
            );
        }
    }
    println!("{separator}");
    println!(
        " Scored: {}   Unscoreable: {}",
        batch.scored(),
        batch.unscoreable()
    );

    if batch.unscoreable() == 0 {
        return;
    }

    println!();
    println!(" Unscoreable Records");
    println!("{separator}");
    for outcome in &batch.outcomes {
        if let RecordOutcome::Unscoreable { index, name, error } = outcome {
            println!(
                " {:>4}  {}  {error}",
                index + 1,
                fit_width(name.as_deref().unwrap_or(NO_NAME), name_width),
            );
        }
    }
    println!("{separator}");
}

/// JSON-serializable view of a batch with its source and counts.
#[derive(Serialize)]
struct JsonBatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    category: Category,
    scored: usize,
    unscoreable: usize,
    outcomes: &'a [RecordOutcome],
}

/// Serialize the batch to pretty-printed JSON and print to stdout.
pub fn print_json(batch: &BatchResult, target: Option<&str>) -> serde_json::Result<()> {
    let json = JsonBatch {
        target,
        category: batch.category,
        scored: batch.scored(),
        unscoreable: batch.unscoreable(),
        outcomes: &batch.outcomes,
    };
    print_json_stdout(&json)
}

/// Print every scoring table and the grade bands of one profile.
pub fn print_tables(profile: &CategoryProfile) {
    let separator = separator(44);
    println!("Scoring Tables: {}", profile.category().label());

    for (label, table) in profile.tables() {
        println!("{separator}");
        println!(" {label:<32} max {:>3}", table.max_points());
        println!("{separator}");
        print_table_rows(table);
    }

    println!("{separator}");
    println!(" Grade bands");
    println!("{separator}");
    for band in profile.grades().bands() {
        println!(
            " {:>12} ..= {:<12} {}",
            bound_label(f64::from(band.lower)),
            bound_label(f64::from(band.upper)),
            band.grade
        );
    }
    println!("{separator}");
}

fn print_table_rows(table: &ScoringTable) {
    for i in table.intervals() {
        println!(
            " {:>12} < x <= {:<12} {:>3}",
            bound_label(i.lower),
            bound_label(i.upper),
            i.points
        );
    }
}

/// Infinite (and `i32` extreme) bounds print as `-inf` / `+inf`.
fn bound_label(v: f64) -> String {
    if v <= f64::from(i32::MIN) {
        "-inf".to_string()
    } else if v >= f64::from(i32::MAX) {
        "+inf".to_string()
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
