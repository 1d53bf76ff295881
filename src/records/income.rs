//! Projected fee income per source

use serde::{Deserialize, Serialize};

use super::cell::{self, Cell};
use super::Record;
use crate::format::format_amount;

/// One income source, e.g. a year's intake of students
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeRecord {
    #[serde(rename = "Source", deserialize_with = "cell::text_or_empty")]
    pub source: String,

    #[serde(rename = "No. of Students")]
    pub student_count: Cell,

    #[serde(rename = "Fee per Student (₹)")]
    pub fee_per_student: Cell,

    #[serde(rename = "Notes", deserialize_with = "cell::text_or_empty")]
    pub notes: String,

    /// Derived: students × fee
    #[serde(
        rename = "Total (₹)",
        skip_serializing_if = "Option::is_none",
        serialize_with = "cell::write_amount",
        deserialize_with = "cell::read_amount"
    )]
    pub total: Option<f64>,
}

impl IncomeRecord {
    pub fn new(
        source: &str,
        student_count: impl Into<Cell>,
        fee_per_student: impl Into<Cell>,
        notes: &str,
    ) -> Self {
        Self {
            source: source.to_string(),
            student_count: student_count.into(),
            fee_per_student: fee_per_student.into(),
            notes: notes.to_string(),
            total: None,
        }
    }

    pub fn students(&self) -> f64 {
        self.student_count.number_or(0.0)
    }

    pub fn fee(&self) -> f64 {
        self.fee_per_student.number_or(0.0)
    }

    /// Total computed from the raw cells, ignoring any stored total
    pub fn computed_total(&self) -> f64 {
        cell::finite_or_zero(self.students() * self.fee())
    }
}

impl Record for IncomeRecord {
    const TABLE: &'static str = "income";

    fn defaults() -> Vec<Self> {
        vec![
            Self::new("1st Year PU", 200.0, 45000.0, "Science/Commerce"),
            Self::new("2nd Year PU", 180.0, 45000.0, ""),
            Self::new("Admission Fees", Cell::Empty, Cell::Empty, ""),
            Self::new("Misc Income", Cell::Empty, Cell::Empty, "Fine, Events, etc."),
        ]
    }

    fn headers() -> &'static [&'static str] {
        &["Source", "No. of Students", "Fee per Student (₹)", "Notes", "Total (₹)"]
    }

    fn display_row(&self) -> Vec<String> {
        vec![
            self.source.clone(),
            self.student_count.to_string(),
            self.fee_per_student.to_string(),
            self.notes.clone(),
            format_amount(self.total),
        ]
    }
}
