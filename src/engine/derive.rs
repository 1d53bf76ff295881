//! Per-table derivations

use crate::records::{Cell, DistributionRecord, ExpenseRecord, IncomeRecord, ProjectionRecord};

/// Coerce student counts and fees, then compute each row's total
pub fn derive_income(rows: &[IncomeRecord]) -> Vec<IncomeRecord> {
    rows.iter()
        .map(|row| {
            let students = row.students();
            let fee = row.fee();
            IncomeRecord {
                student_count: Cell::Number(students),
                fee_per_student: Cell::Number(fee),
                total: Some(row.computed_total()),
                ..row.clone()
            }
        })
        .collect()
}

/// Coerce monthly cost and quantity (default 1), then compute the yearly cost
pub fn derive_expenses(rows: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
    rows.iter()
        .map(|row| ExpenseRecord {
            per_month: Cell::Number(row.monthly()),
            quantity: Cell::Number(row.units()),
            yearly: Some(row.computed_yearly()),
            ..row.clone()
        })
        .collect()
}

/// Split `net_balance` across the distribution heads by percentage.
///
/// The net balance comes from the income and expense tables; callers
/// normally pass [`Totals::net_balance`](super::Totals).
pub fn derive_distribution(rows: &[DistributionRecord], net_balance: f64) -> Vec<DistributionRecord> {
    rows.iter()
        .map(|row| DistributionRecord {
            percentage: Cell::Number(row.share()),
            amount: Some(row.computed_amount(net_balance)),
            ..row.clone()
        })
        .collect()
}

/// Coerce projected income and expenses, then compute the net balance per year
pub fn derive_projection(rows: &[ProjectionRecord]) -> Vec<ProjectionRecord> {
    rows.iter()
        .map(|row| ProjectionRecord {
            projected_income: Cell::Number(row.income()),
            projected_expenses: Cell::Number(row.expenses()),
            net_projected_balance: Some(row.computed_net()),
            ..row.clone()
        })
        .collect()
}
