use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Product category. Picks the profile every record of a batch is scored
/// against; it is chosen up front and never inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    General,
    Fat,
    Beverage,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::General, Category::Fat, Category::Beverage];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Fat => "fat",
            Self::Beverage => "beverage",
        }
    }

    /// Human-readable label used in report headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General food (incl. red meat and cheese)",
            Self::Fat => "Fats, oils, nuts and seeds",
            Self::Beverage => "Beverages",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "fat" | "fats" => Ok(Self::Fat),
            "beverage" | "beverages" | "drink" => Ok(Self::Beverage),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
