//! Expense claim model and DTOs.

use chrono::NaiveDate;
use claimdesk_core::types::{DbId, StatusId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `get_expenses` / `get_expense_by_id` procedures, with
/// owner, category, status, and reviewer names resolved by the store.
///
/// The review/submission fields are populated only consistent with the
/// current status: a Draft claim carries none of them, a Submitted claim
/// only `submitted_at`, a reviewed claim all of them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub category_id: DbId,
    pub category_name: String,
    pub status_id: StatusId,
    pub status_name: String,
    /// Authoritative amount in currency minor units (pence for GBP).
    pub amount_minor: i64,
    /// Derived two-decimal display amount; never trusted on write paths.
    pub amount_decimal: Decimal,
    pub currency: String,
    pub expense_date: NaiveDate,
    pub description: Option<String>,
    pub receipt_file: Option<String>,
    pub submitted_at: Option<Timestamp>,
    pub reviewed_by: Option<DbId>,
    pub reviewer_name: Option<String>,
    pub reviewed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a new claim. Every claim enters the workflow in Draft.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpense {
    pub user_id: DbId,
    pub category_id: DbId,
    pub amount_minor: i64,
    pub currency: Option<String>,
    pub expense_date: NaiveDate,
    pub description: Option<String>,
    pub receipt_file: Option<String>,
}

/// DTO for updating a claim; the store applies it only while Draft.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExpense {
    pub category_id: DbId,
    pub amount_minor: i64,
    pub currency: Option<String>,
    pub expense_date: NaiveDate,
    pub description: Option<String>,
    pub receipt_file: Option<String>,
}

/// Filter and paging parameters for claim listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseQuery {
    pub user_id: Option<DbId>,
    pub status_id: Option<StatusId>,
    pub page: Option<i32>,
    pub page_size: Option<i32>,
}
