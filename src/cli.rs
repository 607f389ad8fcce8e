/// CLI argument definitions for the `nscore` command.
///
/// Defines the subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use nutriscore::RawNutrientRecord;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "nscore", version, about = "Nutri-Score calculator")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by commands that read a profile set.
#[derive(Args)]
pub struct ProfileArgs {
    /// Product category: general, fat, or beverage
    #[arg(short, long)]
    pub category: String,

    /// TOML file replacing the built-in scoring tables
    #[arg(long)]
    pub profiles: Option<PathBuf>,
}

/// Nutrient values of a single product typed on the command line.
/// Units are per 100 g (or 100 mL for beverages).
#[derive(Args)]
pub struct ProductArgs {
    /// Product name shown in the report
    #[arg(long)]
    pub name: Option<String>,

    /// Energy in kJ
    #[arg(long)]
    pub energy: Option<f64>,

    /// Sugar in g
    #[arg(long)]
    pub sugar: Option<f64>,

    /// Saturated fat in g
    #[arg(long)]
    pub saturated_fat: Option<f64>,

    /// Salt in g
    #[arg(long)]
    pub salt: Option<f64>,

    /// Fruits, vegetables and pulses in percent (default: 0)
    #[arg(long)]
    pub fruit: Option<f64>,

    /// Fibre in g (default: 0)
    #[arg(long)]
    pub fibre: Option<f64>,

    /// Protein in g (default: 0)
    #[arg(long)]
    pub protein: Option<f64>,

    /// Contains non-nutritive sweeteners (beverages)
    #[arg(long)]
    pub sweeteners: bool,

    /// Plain water without additions (beverages)
    #[arg(long)]
    pub water: bool,

    /// Red meat product (general)
    #[arg(long)]
    pub red_meat: bool,

    /// Cheese (general)
    #[arg(long)]
    pub cheese: bool,
}

impl ProductArgs {
    pub fn into_record(self) -> RawNutrientRecord {
        RawNutrientRecord {
            name: self.name,
            energy: self.energy,
            sugar: self.sugar,
            saturated_fat: self.saturated_fat,
            salt: self.salt,
            fruit_veg_pulse_percent: self.fruit,
            fibre: self.fibre,
            protein: self.protein,
            contains_sweeteners: Some(self.sweeteners),
            is_red_meat: Some(self.red_meat),
            is_cheese: Some(self.cheese),
            is_water: Some(self.water),
        }
    }
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Score every product in a CSV, Excel or JSON file
    #[command(long_about = "\
Score every product in a CSV, Excel (.xlsx/.xls) or JSON file.

Each record is scored against the tables of the chosen category:

  N points = energy + sugar + saturated fat + salt (+ sweetener penalty)
  P points = fruit/veg/pulses + fibre (+ protein, unless restricted)
  Score    = N - P

Special rules:
  Beverage  water scores 0 (A); sweeteners add 4 N points
  General   red meat caps protein at 2 points; cheese always counts protein
  Fat       energy is derived from saturated fat (37 kJ/g)

Protein is not counted once N reaches 11 (general) or 7 (fat).

Grades (general / fat / beverage):
  A  <= 0 / <= -6 / <= 0
  B  <= 2 / <= 2  / <= 2
  C  <= 10 / <= 10 / <= 6
  D  <= 18 / <= 18 / <= 9
  E  above

Records missing energy, sugar, saturated fat or salt, or carrying
negative values, are reported as unscoreable and do not stop the run.")]
    Score {
        /// Input file: .csv or .xlsx/.xls with template headers, or a .json array
        input: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Also write the scored rows to a CSV file
        #[arg(long, value_name = "OUT")]
        csv: Option<PathBuf>,
    },

    /// Score a single product entered on the command line
    #[command(long_about = "\
Score a single product entered on the command line.

Energy, sugar, saturated fat and salt are required unless --water is given
with the beverage category. Fruit/veg/pulses, fibre and protein default to 0.

Example:
  nscore one -c beverage --name Lemonade --energy 180 --sugar 10.6 \\
      --saturated-fat 0 --salt 0")]
    One {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        product: ProductArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the scoring tables and grade bands of a category
    Tables {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the whole profile set as TOML instead
        #[arg(long)]
        toml: bool,
    },
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
