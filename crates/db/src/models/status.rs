//! Expense status lookup model.

use claimdesk_core::types::StatusId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `get_expense_statuses` procedure.
///
/// The ordinals are stable workflow identifiers; see
/// [`claimdesk_core::workflow::ExpenseStatus`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExpenseStatusRow {
    pub id: StatusId,
    pub name: String,
}
