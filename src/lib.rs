//! College Finance - financial planning model for a PU college
//!
//! This library provides:
//! - Income, expense, fund distribution and multi-year projection tables
//! - Pure derivation of computed columns and headline totals
//! - A JSON file store with self-healing default content
//! - Indian-style currency formatting (₹12,34,567)
//! - CSV export of derived tables

pub mod error;
pub mod format;
pub mod records;
pub mod engine;
pub mod store;
pub mod workbook;
pub mod export;

// Re-export commonly used types
pub use error::{ExportError, StoreError};
pub use format::{format_amount, format_inr};
pub use records::{Cell, DistributionRecord, ExpenseRecord, IncomeRecord, ProjectionRecord, Record};
pub use engine::{derive_distribution, derive_expenses, derive_income, derive_projection, Totals};
pub use store::{RecordStore, DEFAULT_DATA_DIR};
pub use workbook::{Evaluation, Workbook};
