//! Read-only repository over the expense status lookup procedure.

use sqlx::PgPool;

use crate::models::status::ExpenseStatusRow;

const PROC_GET_STATUSES: &str = "get_expense_statuses";

/// Provides read access to the fixed status set.
pub struct StatusRepo;

impl StatusRepo {
    /// List the statuses in ordinal order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ExpenseStatusRow>, sqlx::Error> {
        let query = format!("SELECT * FROM {PROC_GET_STATUSES}()");
        sqlx::query_as::<_, ExpenseStatusRow>(&query)
            .fetch_all(pool)
            .await
    }
}
