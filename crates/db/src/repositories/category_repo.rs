//! Repository over the expense category procedures.

use claimdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{CreateCategory, ExpenseCategory, UpdateCategory};

const PROC_GET_CATEGORIES: &str = "get_expense_categories";
const PROC_GET_CATEGORY_BY_ID: &str = "get_expense_category_by_id";
const PROC_CREATE_CATEGORY: &str = "create_expense_category";
const PROC_UPDATE_CATEGORY: &str = "update_expense_category";
const PROC_DELETE_CATEGORY: &str = "delete_expense_category";

/// Provides CRUD operations for expense categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List categories, optionally restricted to active ones.
    pub async fn list(
        pool: &PgPool,
        active_only: bool,
    ) -> Result<Vec<ExpenseCategory>, sqlx::Error> {
        let query = format!("SELECT * FROM {PROC_GET_CATEGORIES}($1)");
        sqlx::query_as::<_, ExpenseCategory>(&query)
            .bind(active_only)
            .fetch_all(pool)
            .await
    }

    /// Find a category by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ExpenseCategory>, sqlx::Error> {
        let query = format!("SELECT * FROM {PROC_GET_CATEGORY_BY_ID}($1)");
        sqlx::query_as::<_, ExpenseCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new active category, returning the assigned ID.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<DbId, sqlx::Error> {
        let query = format!("SELECT {PROC_CREATE_CATEGORY}($1)");
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Update name and active flag. Returns the affected-row count.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<i32, sqlx::Error> {
        let query = format!("SELECT {PROC_UPDATE_CATEGORY}($1, $2, $3)");
        sqlx::query_scalar::<_, i32>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Deactivate a category (soft delete). Returns the affected-row count
    /// (0 when the category is absent or already inactive).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<i32, sqlx::Error> {
        let query = format!("SELECT {PROC_DELETE_CATEGORY}($1)");
        sqlx::query_scalar::<_, i32>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
