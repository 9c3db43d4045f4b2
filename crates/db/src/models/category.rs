//! Expense category model and DTOs.

use claimdesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `get_expense_categories` / `get_expense_category_by_id`
/// procedures.
///
/// Categories are soft-deletable: delete deactivates, it never removes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExpenseCategory {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// DTO for updating an existing category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub is_active: bool,
}
