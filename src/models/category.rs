//! Expense categories
//!
//! The fixed set of categories offered when logging an expense. Stored
//! expenses keep the category as a plain string, so unknown values read
//! from disk are tolerated; only new input is checked against this set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExpenseCategory {
    #[default]
    #[serde(rename = "Food & Drinks")]
    FoodAndDrinks,
    Transportation,
    Shopping,
    Entertainment,
    Bills,
    Others,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 6] = [
        Self::FoodAndDrinks,
        Self::Transportation,
        Self::Shopping,
        Self::Entertainment,
        Self::Bills,
        Self::Others,
    ];

    /// The label stored on disk and shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDrinks => "Food & Drinks",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    /// Case-insensitive; also accepts "food" / "food-and-drinks" style shorthands
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        match normalized.as_str() {
            "fooddrinks" | "foodanddrinks" | "food" => Ok(Self::FoodAndDrinks),
            "transportation" | "transport" => Ok(Self::Transportation),
            "shopping" => Ok(Self::Shopping),
            "entertainment" => Ok(Self::Entertainment),
            "bills" => Ok(Self::Bills),
            "others" | "other" => Ok(Self::Others),
            _ => Err(s.to_string()),
        }
    }
}
