//! Multi-year income and expense projection

use serde::{Deserialize, Serialize};

use super::cell::{self, Cell};
use super::Record;
use crate::format::format_amount;

const DEFAULT_PROJECTED_INCOME: [f64; 5] =
    [17_350_000.0, 18_000_000.0, 18_700_000.0, 19_450_000.0, 20_250_000.0];
const DEFAULT_PROJECTED_EXPENSES: [f64; 5] =
    [4_003_000.0, 4_200_000.0, 4_410_000.0, 4_620_000.0, 4_840_000.0];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionRecord {
    /// Period label, e.g. "Year 1"
    #[serde(rename = "Year", deserialize_with = "cell::text_or_empty")]
    pub year: String,

    #[serde(rename = "Projected Income (₹)")]
    pub projected_income: Cell,

    #[serde(rename = "Projected Expenses (₹)")]
    pub projected_expenses: Cell,

    /// Derived: projected income − projected expenses
    #[serde(
        rename = "Net Projected Balance (₹)",
        skip_serializing_if = "Option::is_none",
        serialize_with = "cell::write_amount",
        deserialize_with = "cell::read_amount"
    )]
    pub net_projected_balance: Option<f64>,
}

impl ProjectionRecord {
    pub fn new(
        year: &str,
        projected_income: impl Into<Cell>,
        projected_expenses: impl Into<Cell>,
    ) -> Self {
        Self {
            year: year.to_string(),
            projected_income: projected_income.into(),
            projected_expenses: projected_expenses.into(),
            net_projected_balance: None,
        }
    }

    pub fn income(&self) -> f64 {
        self.projected_income.number_or(0.0)
    }

    pub fn expenses(&self) -> f64 {
        self.projected_expenses.number_or(0.0)
    }

    pub fn computed_net(&self) -> f64 {
        cell::finite_or_zero(self.income() - self.expenses())
    }
}

impl Record for ProjectionRecord {
    const TABLE: &'static str = "projection";

    fn defaults() -> Vec<Self> {
        DEFAULT_PROJECTED_INCOME
            .iter()
            .zip(DEFAULT_PROJECTED_EXPENSES.iter())
            .enumerate()
            .map(|(i, (&income, &expenses))| {
                Self::new(&format!("Year {}", i + 1), income, expenses)
            })
            .collect()
    }

    fn headers() -> &'static [&'static str] {
        &["Year", "Projected Income (₹)", "Projected Expenses (₹)", "Net Projected Balance (₹)"]
    }

    /// All three amounts are currency; the raw inputs are shown coerced
    fn display_row(&self) -> Vec<String> {
        vec![
            self.year.clone(),
            format_amount(Some(self.income())),
            format_amount(Some(self.expenses())),
            format_amount(self.net_projected_balance),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_five_years() {
        let rows = ProjectionRecord::defaults();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].year, "Year 1");
        assert_eq!(rows[4].year, "Year 5");
        assert_eq!(rows[0].income(), 17_350_000.0);
        assert_eq!(rows[4].expenses(), 4_840_000.0);
    }

    #[test]
    fn test_numeric_year_label_reads_as_text() {
        let rows: Vec<ProjectionRecord> =
            serde_json::from_str(r#"[{"Year": 2026, "Projected Income (₹)": "100"}]"#).unwrap();
        assert_eq!(rows[0].year, "2026");
        assert_eq!(rows[0].computed_net(), 100.0);
    }
}
