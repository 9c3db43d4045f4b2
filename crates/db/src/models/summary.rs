//! Per-status aggregate model.

use claimdesk_core::types::StatusId;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `get_expense_summary` procedure: one per status,
/// recomputed on demand, never persisted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExpenseSummary {
    pub status_id: StatusId,
    pub status_name: String,
    pub total_count: i64,
    pub total_amount_minor: i64,
    pub total_amount: Decimal,
}
