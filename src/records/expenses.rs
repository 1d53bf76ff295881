//! Recurring monthly expenses

use serde::{Deserialize, Serialize};

use super::cell::{self, Cell};
use super::Record;
use crate::format::format_amount;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// One expense category, charged monthly `quantity` times
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseRecord {
    #[serde(rename = "Expense Category", deserialize_with = "cell::text_or_empty")]
    pub category: String,

    #[serde(rename = "Per Month (₹)")]
    pub per_month: Cell,

    /// Head count or unit count; defaults to 1
    #[serde(rename = "QTY")]
    pub quantity: Cell,

    #[serde(rename = "Description", deserialize_with = "cell::text_or_empty")]
    pub description: String,

    /// Derived: per month × 12 × quantity
    #[serde(
        rename = "Yearly (₹)",
        skip_serializing_if = "Option::is_none",
        serialize_with = "cell::write_amount",
        deserialize_with = "cell::read_amount"
    )]
    pub yearly: Option<f64>,
}

impl ExpenseRecord {
    pub fn new(category: &str, per_month: impl Into<Cell>, quantity: impl Into<Cell>) -> Self {
        Self {
            category: category.to_string(),
            per_month: per_month.into(),
            quantity: quantity.into(),
            description: String::new(),
            yearly: None,
        }
    }

    pub fn monthly(&self) -> f64 {
        self.per_month.number_or(0.0)
    }

    pub fn units(&self) -> f64 {
        self.quantity.number_or(1.0)
    }

    /// Yearly cost computed from the raw cells, ignoring any stored value
    pub fn computed_yearly(&self) -> f64 {
        cell::finite_or_zero(self.monthly() * MONTHS_PER_YEAR * self.units())
    }
}

impl Record for ExpenseRecord {
    const TABLE: &'static str = "expenses";

    fn defaults() -> Vec<Self> {
        vec![
            Self::new("Infrastructure", 80000.0, 1.0),
            Self::new("Staff Salaries (Teaching)", 35000.0, 5.0),
            Self::new("Staff Salaries (Non-Teaching)", 12000.0, 2.0),
            Self::new("Library", 5000.0, 1.0),
            Self::new("Events", 4000.0, 1.0),
            Self::new("Marketing", 3000.0, 1.0),
            Self::new("Miscellaneous", 2000.0, 1.0),
        ]
    }

    fn headers() -> &'static [&'static str] {
        &["Expense Category", "Per Month (₹)", "QTY", "Description", "Yearly (₹)"]
    }

    fn display_row(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.per_month.to_string(),
            self.quantity.to_string(),
            self.description.clone(),
            format_amount(self.yearly),
        ]
    }
}
