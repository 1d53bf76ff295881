//! Fund distribution heads, each a share of the net balance

use serde::{Deserialize, Serialize};

use super::cell::{self, Cell};
use super::Record;
use crate::format::format_amount;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionRecord {
    #[serde(rename = "Head", deserialize_with = "cell::text_or_empty")]
    pub head: String,

    /// Share of the net balance, in percent
    #[serde(rename = "Percentage")]
    pub percentage: Cell,

    #[serde(rename = "Description", deserialize_with = "cell::text_or_empty")]
    pub description: String,

    /// Derived: percentage / 100 × net balance
    #[serde(
        rename = "Amount (₹)",
        skip_serializing_if = "Option::is_none",
        serialize_with = "cell::write_amount",
        deserialize_with = "cell::read_amount"
    )]
    pub amount: Option<f64>,
}

impl DistributionRecord {
    pub fn new(head: &str, percentage: impl Into<Cell>, description: &str) -> Self {
        Self {
            head: head.to_string(),
            percentage: percentage.into(),
            description: description.to_string(),
            amount: None,
        }
    }

    pub fn share(&self) -> f64 {
        self.percentage.number_or(0.0)
    }

    pub fn computed_amount(&self, net_balance: f64) -> f64 {
        cell::finite_or_zero(self.share() / 100.0 * net_balance)
    }
}

impl Record for DistributionRecord {
    const TABLE: &'static str = "distribution";

    fn defaults() -> Vec<Self> {
        vec![
            Self::new("Management Royalty", 20.0, "Share to trust"),
            Self::new("Faculty Bonus", 10.0, "Incentives"),
            Self::new("Development Fund", 30.0, "Infrastructure"),
            Self::new("Reserve", 10.0, "Contingency"),
        ]
    }

    fn headers() -> &'static [&'static str] {
        &["Head", "Percentage", "Description", "Amount (₹)"]
    }

    fn display_row(&self) -> Vec<String> {
        vec![
            self.head.clone(),
            self.percentage.to_string(),
            self.description.clone(),
            format_amount(self.amount),
        ]
    }
}
