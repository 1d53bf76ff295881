//! The four tables of one planning session, and one evaluation cycle over them
//!
//! # Example
//! ```ignore
//! let store = RecordStore::open_default()?;
//! let mut workbook = Workbook::load(&store);
//! workbook.expenses.push(ExpenseRecord::new("Sports", 6000.0, 1.0));
//!
//! let evaluation = workbook.evaluate();
//! evaluation.save(&store)?;
//! println!("Net balance: {}", format_inr(evaluation.totals.net_balance));
//! ```

use log::info;

use crate::engine::{derive_distribution, derive_expenses, derive_income, derive_projection, Totals};
use crate::error::StoreError;
use crate::records::{DistributionRecord, ExpenseRecord, IncomeRecord, ProjectionRecord, Record};
use crate::store::RecordStore;

/// Income, expense, distribution and projection tables, raw or derived
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub income: Vec<IncomeRecord>,
    pub expenses: Vec<ExpenseRecord>,
    pub distribution: Vec<DistributionRecord>,
    pub projection: Vec<ProjectionRecord>,
}

impl Workbook {
    /// Built-in content for all four tables
    pub fn defaults() -> Self {
        Self {
            income: IncomeRecord::defaults(),
            expenses: ExpenseRecord::defaults(),
            distribution: DistributionRecord::defaults(),
            projection: ProjectionRecord::defaults(),
        }
    }

    /// Load every table from the store; missing or corrupt tables come back
    /// as (freshly persisted) defaults
    pub fn load(store: &RecordStore) -> Self {
        Self {
            income: store.load_table(),
            expenses: store.load_table(),
            distribution: store.load_table(),
            projection: store.load_table(),
        }
    }

    /// Overwrite every persisted table with the rows held here
    pub fn save(&self, store: &RecordStore) -> Result<(), StoreError> {
        store.save_table(&self.income)?;
        store.save_table(&self.expenses)?;
        store.save_table(&self.distribution)?;
        store.save_table(&self.projection)?;
        Ok(())
    }

    /// Derive all computed columns and the headline totals.
    ///
    /// Distribution amounts depend on the net balance of the income and
    /// expense tables, so those are derived first.
    pub fn evaluate(&self) -> Evaluation {
        let income = derive_income(&self.income);
        let expenses = derive_expenses(&self.expenses);
        let totals = Totals::from_tables(&income, &expenses);
        let distribution = derive_distribution(&self.distribution, totals.net_balance);
        let projection = derive_projection(&self.projection);

        Evaluation {
            tables: Workbook {
                income,
                expenses,
                distribution,
                projection,
            },
            totals,
        }
    }
}

/// Output of one evaluation cycle: derived tables plus totals
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub tables: Workbook,
    pub totals: Totals,
}

impl Evaluation {
    /// Persist the derived tables, so saved files reflect the last computed state
    pub fn save(&self, store: &RecordStore) -> Result<(), StoreError> {
        self.tables.save(store)?;
        info!(
            "Saved recalculated tables to {} (net balance {:.2})",
            store.root().display(),
            self.totals.net_balance
        );
        Ok(())
    }
}
