//! Table row types for income, expenses, fund distribution and projection

pub mod cell;
mod income;
mod expenses;
mod distribution;
mod projection;

pub use cell::Cell;
pub use income::IncomeRecord;
pub use expenses::{ExpenseRecord, MONTHS_PER_YEAR};
pub use distribution::DistributionRecord;
pub use projection::ProjectionRecord;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A row type backed by one persisted table
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Table name, also the stem of the persisted file
    const TABLE: &'static str;

    /// Built-in content used when the table has never been saved
    fn defaults() -> Vec<Self>;

    /// Column headers in display order
    fn headers() -> &'static [&'static str];

    /// Row rendered for display, with currency columns formatted
    fn display_row(&self) -> Vec<String>;
}
