//! Repository over the expense claim procedures.
//!
//! The workflow transitions (submit/approve/reject) and the Draft-only
//! update/delete are conditional updates inside the store: each procedure
//! checks the current status and applies the new one in a single statement,
//! so two concurrent calls on the same claim resolve to exactly one winner.
//! The returned count is the sole verdict -- 0 means "absent or wrong
//! state", and the two causes are not distinguished.

use claimdesk_core::pagination::PageParams;
use claimdesk_core::types::{DbId, StatusId};
use sqlx::PgPool;

use crate::models::expense::{CreateExpense, Expense, UpdateExpense};
use crate::models::summary::ExpenseSummary;

const PROC_GET_EXPENSES: &str = "get_expenses";
const PROC_GET_EXPENSE_BY_ID: &str = "get_expense_by_id";
const PROC_CREATE_EXPENSE: &str = "create_expense";
const PROC_UPDATE_EXPENSE: &str = "update_expense";
const PROC_DELETE_EXPENSE: &str = "delete_expense";
const PROC_SUBMIT_EXPENSE: &str = "submit_expense";
const PROC_APPROVE_EXPENSE: &str = "approve_expense";
const PROC_REJECT_EXPENSE: &str = "reject_expense";
const PROC_GET_EXPENSE_SUMMARY: &str = "get_expense_summary";

/// Provides CRUD and workflow operations for expense claims.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// List claims filtered by owner and/or status, newest first.
    pub async fn list(
        pool: &PgPool,
        user_id: Option<DbId>,
        status_id: Option<StatusId>,
        page: PageParams,
    ) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!("SELECT * FROM {PROC_GET_EXPENSES}($1, $2, $3, $4)");
        sqlx::query_as::<_, Expense>(&query)
            .bind(user_id)
            .bind(status_id)
            .bind(page.page())
            .bind(page.page_size())
            .fetch_all(pool)
            .await
    }

    /// Find a claim by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!("SELECT * FROM {PROC_GET_EXPENSE_BY_ID}($1)");
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new Draft claim, returning the assigned ID. The review and
    /// submission fields start out null.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExpense,
        currency: &str,
    ) -> Result<DbId, sqlx::Error> {
        let query = format!("SELECT {PROC_CREATE_EXPENSE}($1, $2, $3, $4, $5, $6, $7)");
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(input.user_id)
            .bind(input.category_id)
            .bind(input.amount_minor)
            .bind(currency)
            .bind(input.expense_date)
            .bind(&input.description)
            .bind(&input.receipt_file)
            .fetch_one(pool)
            .await
    }

    /// Replace the editable fields of a Draft claim. Returns the
    /// affected-row count.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExpense,
        currency: &str,
    ) -> Result<i32, sqlx::Error> {
        let query = format!("SELECT {PROC_UPDATE_EXPENSE}($1, $2, $3, $4, $5, $6, $7)");
        sqlx::query_scalar::<_, i32>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(input.amount_minor)
            .bind(currency)
            .bind(input.expense_date)
            .bind(&input.description)
            .bind(&input.receipt_file)
            .fetch_one(pool)
            .await
    }

    /// Remove a Draft claim. Returns the affected-row count.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<i32, sqlx::Error> {
        let query = format!("SELECT {PROC_DELETE_EXPENSE}($1)");
        sqlx::query_scalar::<_, i32>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Draft -> Submitted, stamping the submission timestamp.
    pub async fn submit(pool: &PgPool, id: DbId) -> Result<i32, sqlx::Error> {
        let query = format!("SELECT {PROC_SUBMIT_EXPENSE}($1)");
        sqlx::query_scalar::<_, i32>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Submitted -> Approved, stamping reviewer and review timestamp.
    pub async fn approve(
        pool: &PgPool,
        id: DbId,
        reviewed_by: DbId,
    ) -> Result<i32, sqlx::Error> {
        let query = format!("SELECT {PROC_APPROVE_EXPENSE}($1, $2)");
        sqlx::query_scalar::<_, i32>(&query)
            .bind(id)
            .bind(reviewed_by)
            .fetch_one(pool)
            .await
    }

    /// Submitted -> Rejected, stamping reviewer and review timestamp.
    pub async fn reject(
        pool: &PgPool,
        id: DbId,
        reviewed_by: DbId,
    ) -> Result<i32, sqlx::Error> {
        let query = format!("SELECT {PROC_REJECT_EXPENSE}($1, $2)");
        sqlx::query_scalar::<_, i32>(&query)
            .bind(id)
            .bind(reviewed_by)
            .fetch_one(pool)
            .await
    }

    /// Per-status counts and totals, recomputed on demand.
    pub async fn summary(pool: &PgPool) -> Result<Vec<ExpenseSummary>, sqlx::Error> {
        let query = format!("SELECT * FROM {PROC_GET_EXPENSE_SUMMARY}()");
        sqlx::query_as::<_, ExpenseSummary>(&query)
            .fetch_all(pool)
            .await
    }
}
