//! Aggregate totals for one evaluation cycle

use crate::records::{ExpenseRecord, IncomeRecord};

/// Sum of income totals, recomputed from the raw cells
pub fn total_income(rows: &[IncomeRecord]) -> f64 {
    sum_finite(rows.iter().map(IncomeRecord::computed_total))
}

/// Sum of yearly expenses, recomputed from the raw cells
pub fn total_expenses(rows: &[ExpenseRecord]) -> f64 {
    sum_finite(rows.iter().map(ExpenseRecord::computed_yearly))
}

/// Sum starting from +0.0 (`Iterator::sum` starts at -0.0); overflow counts as zero
fn sum_finite(values: impl Iterator<Item = f64>) -> f64 {
    let total = values.fold(0.0, |acc, value| acc + value);
    if total.is_finite() {
        total
    } else {
        0.0
    }
}

/// Headline figures shown above the tables
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses; the base for distribution percentages
    pub net_balance: f64,
}

impl Totals {
    pub fn from_tables(income: &[IncomeRecord], expenses: &[ExpenseRecord]) -> Self {
        let total_income = total_income(income);
        let total_expenses = total_expenses(expenses);
        Self {
            total_income,
            total_expenses,
            net_balance: sum_finite([total_income, -total_expenses].into_iter()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Record;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_tables() {
        let totals = Totals::from_tables(&IncomeRecord::defaults(), &ExpenseRecord::defaults());
        assert_relative_eq!(totals.total_income, 17_100_000.0);
        assert_relative_eq!(totals.total_expenses, 3_516_000.0);
        assert_relative_eq!(totals.net_balance, 13_584_000.0);
    }

    #[test]
    fn test_empty_tables_are_zero() {
        assert_eq!(Totals::from_tables(&[], &[]), Totals::default());
    }

    #[test]
    fn test_empty_tables_sum_to_positive_zero() {
        let totals = Totals::from_tables(&[], &[]);
        assert!(totals.total_income.is_sign_positive());
        assert!(totals.total_expenses.is_sign_positive());
        assert!(totals.net_balance.is_sign_positive());
    }

    #[test]
    fn test_overflowing_sum_counts_as_zero() {
        let expenses = vec![
            ExpenseRecord::new("Huge", 1e307, 10.0),
            ExpenseRecord::new("Huge again", 1e307, 10.0),
        ];
        assert_eq!(total_expenses(&expenses), 0.0);
    }

    #[test]
    fn test_net_balance_can_be_negative() {
        let income = vec![IncomeRecord::new("Fees", 1.0, 1000.0, "")];
        let expenses = vec![ExpenseRecord::new("Rent", 1000.0, 1.0)];
        let totals = Totals::from_tables(&income, &expenses);
        assert_relative_eq!(totals.net_balance, -11_000.0);
    }
}
