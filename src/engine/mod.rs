//! Derivation of computed columns and aggregate totals
//!
//! Every function here is pure: it takes a table and returns a new one with
//! the numeric inputs coerced and the derived column filled in. Values stored
//! in derived columns are never read back; they are recomputed each time.

mod derive;
mod totals;

pub use derive::{derive_distribution, derive_expenses, derive_income, derive_projection};
pub use totals::{total_expenses, total_income, Totals};
