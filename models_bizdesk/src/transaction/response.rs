use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Transaction, TransactionDetail};

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ListTransactionsResponse {
    pub transactions: Vec<Transaction>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct GetTransactionResponse {
    pub transaction: TransactionDetail,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TransactionMutatedResponse {
    pub message: String,
    pub transaction: TransactionDetail,
}

/// Completed-transaction totals over the requested window
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_profit: f64,
    /// Percentage of income kept, 0 when there is no income
    pub profit_margin: f64,
}

impl FinanceSummary {
    pub fn new(total_income: f64, total_expense: f64) -> Self {
        let net_profit = total_income - total_expense;
        let profit_margin = if total_income > 0.0 {
            (net_profit / total_income * 100.0 * 100.0).round() / 100.0
        } else {
            0.0
        };
        FinanceSummary {
            total_income,
            total_expense,
            net_profit,
            profit_margin,
        }
    }
}

/// A per-category rollup row; the group key keeps its `_id` wire name
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CategoryTotal {
    #[serde(rename = "_id")]
    pub category: String,
    pub total: f64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummaryResponse {
    pub summary: FinanceSummary,
    pub income_by_category: Vec<CategoryTotal>,
    pub expense_by_category: Vec<CategoryTotal>,
}
