use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::target::Target;
use crate::transaction::Transaction;

/// Completed-transaction sums over the calendar windows of "now"
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    pub monthly_income: f64,
    pub monthly_expense: f64,
    pub yearly_income: f64,
    pub monthly_profit: f64,
}

impl FinancialSnapshot {
    pub fn new(monthly_income: f64, monthly_expense: f64, yearly_income: f64) -> Self {
        FinancialSnapshot {
            monthly_income,
            monthly_expense,
            yearly_income,
            monthly_profit: monthly_income - monthly_expense,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ClientCounts {
    pub total: i64,
    pub active: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ProjectCounts {
    pub total: i64,
    pub active: i64,
    pub completed: i64,
}

/// One month's completed-income sum; months without matching transactions
/// simply do not appear in the trend
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MonthlyTrendPoint {
    pub year: i32,
    pub month: i32,
    pub total: f64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub financial: FinancialSnapshot,
    pub clients: ClientCounts,
    pub projects: ProjectCounts,
    pub active_targets: Vec<Target>,
    pub recent_transactions: Vec<Transaction>,
    pub monthly_trend: Vec<MonthlyTrendPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profit_is_derived() {
        let snapshot = FinancialSnapshot::new(4000.0, 1500.0, 52000.0);
        assert_eq!(snapshot.monthly_profit, 2500.0);
    }
}
