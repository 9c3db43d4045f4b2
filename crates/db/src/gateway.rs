//! Persistence gateway: the sole point of contact with the expense store.
//!
//! Reads degrade to the fallback snapshot when the store cannot answer,
//! tagging the result with the classified failure and retaining it in the
//! process-wide last-error slot. Writes validate preconditions, invoke the
//! named procedure, and fold a zero row-count into the single ambiguous
//! not-found-or-conflict verdict; they never fall back, because fabricating
//! a write outcome would hand the caller a false signal for an
//! irreversible action.

use std::sync::RwLock;

use claimdesk_core::error::CoreError;
use claimdesk_core::money;
use claimdesk_core::pagination::PageParams;
use claimdesk_core::types::DbId;
use claimdesk_core::workflow;
use validator::Validate;

use crate::classify::{self, Diagnostic};
use crate::fallback;
use crate::models::category::{CreateCategory, ExpenseCategory, UpdateCategory};
use crate::models::expense::{CreateExpense, Expense, ExpenseQuery, UpdateExpense};
use crate::models::role::Role;
use crate::models::status::ExpenseStatusRow;
use crate::models::summary::ExpenseSummary;
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::repositories::{CategoryRepo, ExpenseRepo, RoleRepo, StatusRepo, UserRepo};
use crate::DbPool;

/// Which source answered a read.
#[derive(Debug, Clone)]
pub enum Source {
    /// The live store.
    Live,
    /// The in-memory snapshot, with the classified failure that caused the
    /// degradation.
    Fallback(Diagnostic),
}

/// A read result: the data is always present, the diagnostic is advisory.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub source: Source,
}

impl<T> Fetched<T> {
    fn live(data: T) -> Self {
        Self {
            data,
            source: Source::Live,
        }
    }

    fn degraded(data: T, diagnostic: Diagnostic) -> Self {
        Self {
            data,
            source: Source::Fallback(diagnostic),
        }
    }

    /// True when the snapshot answered instead of the live store.
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, Source::Fallback(_))
    }

    /// The classified failure, when the snapshot answered.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match &self.source {
            Source::Fallback(diagnostic) => Some(diagnostic),
            Source::Live => None,
        }
    }
}

/// Result alias for the write path.
pub type WriteResult<T> = Result<T, CoreError>;

/// Gateway facade over the expense store.
///
/// Holds the connection pool and the process-wide last-error slot. The slot
/// is best-effort diagnostics state: last-writer-wins under concurrent
/// reads is acceptable, and a successful read clears it.
pub struct ExpenseGateway {
    pool: DbPool,
    last_error: RwLock<Option<Diagnostic>>,
}

impl ExpenseGateway {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            last_error: RwLock::new(None),
        }
    }

    /// Read-only accessor for the most recent classified read failure.
    pub fn last_error(&self) -> Option<Diagnostic> {
        self.last_error
            .read()
            .ok()
            .and_then(|slot| slot.as_ref().cloned())
    }

    fn clear_last_error(&self) {
        if let Ok(mut slot) = self.last_error.write() {
            *slot = None;
        }
    }

    /// Classify, log, and retain a read failure, then serve the snapshot.
    fn degrade<T>(&self, context: &'static str, err: &sqlx::Error, snapshot: T) -> Fetched<T> {
        let diagnostic = classify::classify(context, err);
        tracing::error!(context, error = %err, "store read failed, serving fallback snapshot");
        if let Ok(mut slot) = self.last_error.write() {
            *slot = Some(diagnostic.clone());
        }
        Fetched::degraded(snapshot, diagnostic)
    }

    // -- Roles ---------------------------------------------------------------

    pub async fn roles(&self) -> Fetched<Vec<Role>> {
        match RoleRepo::list(&self.pool).await {
            Ok(rows) => {
                self.clear_last_error();
                Fetched::live(rows)
            }
            Err(err) => self.degrade("GetRoles", &err, fallback::roles()),
        }
    }

    pub async fn role_by_id(&self, id: DbId) -> Fetched<Option<Role>> {
        match RoleRepo::find_by_id(&self.pool, id).await {
            Ok(row) => {
                self.clear_last_error();
                Fetched::live(row)
            }
            Err(err) => {
                let snapshot = fallback::roles().into_iter().find(|r| r.id == id);
                self.degrade("GetRoleById", &err, snapshot)
            }
        }
    }

    // -- Users ---------------------------------------------------------------

    pub async fn users(&self, active_only: bool) -> Fetched<Vec<User>> {
        match UserRepo::list(&self.pool, active_only).await {
            Ok(rows) => {
                self.clear_last_error();
                Fetched::live(rows)
            }
            Err(err) => self.degrade("GetUsers", &err, fallback::users()),
        }
    }

    pub async fn user_by_id(&self, id: DbId) -> Fetched<Option<User>> {
        match UserRepo::find_by_id(&self.pool, id).await {
            Ok(row) => {
                self.clear_last_error();
                Fetched::live(row)
            }
            Err(err) => {
                let snapshot = fallback::users().into_iter().find(|u| u.id == id);
                self.degrade("GetUserById", &err, snapshot)
            }
        }
    }

    pub async fn create_user(&self, input: &CreateUser) -> WriteResult<DbId> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;
        UserRepo::create(&self.pool, input)
            .await
            .map_err(|err| Self::write_error("CreateUser", &err))
    }

    pub async fn update_user(&self, id: DbId, input: &UpdateUser) -> WriteResult<()> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;
        let affected = UserRepo::update(&self.pool, id, input)
            .await
            .map_err(|err| Self::write_error("UpdateUser", &err))?;
        Self::verdict("User", id, affected)
    }

    pub async fn delete_user(&self, id: DbId) -> WriteResult<()> {
        let affected = UserRepo::delete(&self.pool, id)
            .await
            .map_err(|err| Self::write_error("DeleteUser", &err))?;
        Self::verdict("User", id, affected)
    }

    // -- Categories ----------------------------------------------------------

    pub async fn categories(&self, active_only: bool) -> Fetched<Vec<ExpenseCategory>> {
        match CategoryRepo::list(&self.pool, active_only).await {
            Ok(rows) => {
                self.clear_last_error();
                Fetched::live(rows)
            }
            Err(err) => self.degrade("GetExpenseCategories", &err, fallback::categories()),
        }
    }

    pub async fn category_by_id(&self, id: DbId) -> Fetched<Option<ExpenseCategory>> {
        match CategoryRepo::find_by_id(&self.pool, id).await {
            Ok(row) => {
                self.clear_last_error();
                Fetched::live(row)
            }
            Err(err) => {
                let snapshot = fallback::categories().into_iter().find(|c| c.id == id);
                self.degrade("GetExpenseCategoryById", &err, snapshot)
            }
        }
    }

    pub async fn create_category(&self, input: &CreateCategory) -> WriteResult<DbId> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;
        CategoryRepo::create(&self.pool, input)
            .await
            .map_err(|err| Self::write_error("CreateExpenseCategory", &err))
    }

    pub async fn update_category(&self, id: DbId, input: &UpdateCategory) -> WriteResult<()> {
        input
            .validate()
            .map_err(|err| CoreError::Validation(err.to_string()))?;
        let affected = CategoryRepo::update(&self.pool, id, input)
            .await
            .map_err(|err| Self::write_error("UpdateExpenseCategory", &err))?;
        Self::verdict("ExpenseCategory", id, affected)
    }

    pub async fn delete_category(&self, id: DbId) -> WriteResult<()> {
        let affected = CategoryRepo::delete(&self.pool, id)
            .await
            .map_err(|err| Self::write_error("DeleteExpenseCategory", &err))?;
        Self::verdict("ExpenseCategory", id, affected)
    }

    // -- Statuses ------------------------------------------------------------

    pub async fn statuses(&self) -> Fetched<Vec<ExpenseStatusRow>> {
        match StatusRepo::list(&self.pool).await {
            Ok(rows) => {
                self.clear_last_error();
                Fetched::live(rows)
            }
            Err(err) => self.degrade("GetExpenseStatuses", &err, fallback::statuses()),
        }
    }

    // -- Expenses ------------------------------------------------------------

    pub async fn expenses(&self, query: &ExpenseQuery) -> Fetched<Vec<Expense>> {
        let page = PageParams::from_optional(query.page, query.page_size);
        match ExpenseRepo::list(&self.pool, query.user_id, query.status_id, page).await {
            Ok(rows) => {
                self.clear_last_error();
                Fetched::live(rows)
            }
            Err(err) => self.degrade("GetExpenses", &err, fallback::expenses()),
        }
    }

    pub async fn expense_by_id(&self, id: DbId) -> Fetched<Option<Expense>> {
        match ExpenseRepo::find_by_id(&self.pool, id).await {
            Ok(row) => {
                self.clear_last_error();
                Fetched::live(row)
            }
            Err(err) => {
                let snapshot = fallback::expenses().into_iter().find(|e| e.id == id);
                self.degrade("GetExpenseById", &err, snapshot)
            }
        }
    }

    pub async fn create_expense(&self, input: &CreateExpense) -> WriteResult<DbId> {
        workflow::validate_amount_minor(input.amount_minor).map_err(CoreError::Validation)?;
        let currency = money::normalize_currency(input.currency.as_deref());
        ExpenseRepo::create(&self.pool, input, &currency)
            .await
            .map_err(|err| Self::write_error("CreateExpense", &err))
    }

    pub async fn update_expense(&self, id: DbId, input: &UpdateExpense) -> WriteResult<()> {
        workflow::validate_amount_minor(input.amount_minor).map_err(CoreError::Validation)?;
        let currency = money::normalize_currency(input.currency.as_deref());
        let affected = ExpenseRepo::update(&self.pool, id, input, &currency)
            .await
            .map_err(|err| Self::write_error("UpdateExpense", &err))?;
        Self::verdict("Expense", id, affected)
    }

    pub async fn delete_expense(&self, id: DbId) -> WriteResult<()> {
        let affected = ExpenseRepo::delete(&self.pool, id)
            .await
            .map_err(|err| Self::write_error("DeleteExpense", &err))?;
        Self::verdict("Expense", id, affected)
    }

    pub async fn submit_expense(&self, id: DbId) -> WriteResult<()> {
        let affected = ExpenseRepo::submit(&self.pool, id)
            .await
            .map_err(|err| Self::write_error("SubmitExpense", &err))?;
        Self::verdict("Expense", id, affected)
    }

    pub async fn approve_expense(&self, id: DbId, reviewed_by: DbId) -> WriteResult<()> {
        let affected = ExpenseRepo::approve(&self.pool, id, reviewed_by)
            .await
            .map_err(|err| Self::write_error("ApproveExpense", &err))?;
        Self::verdict("Expense", id, affected)
    }

    pub async fn reject_expense(&self, id: DbId, reviewed_by: DbId) -> WriteResult<()> {
        let affected = ExpenseRepo::reject(&self.pool, id, reviewed_by)
            .await
            .map_err(|err| Self::write_error("RejectExpense", &err))?;
        Self::verdict("Expense", id, affected)
    }

    pub async fn summary(&self) -> Fetched<Vec<ExpenseSummary>> {
        match ExpenseRepo::summary(&self.pool).await {
            Ok(rows) => {
                self.clear_last_error();
                Fetched::live(rows)
            }
            Err(err) => self.degrade("GetExpenseSummary", &err, fallback::summary()),
        }
    }

    // -- Helpers -------------------------------------------------------------

    fn write_error(context: &'static str, err: &sqlx::Error) -> CoreError {
        tracing::error!(context, error = %err, "store write failed");
        classify::store_error(context, err)
    }

    /// Fold a row-count verdict into the ambiguous not-found-or-conflict
    /// outcome. A zero count means the target was absent or not in an
    /// eligible state; the store does not say which.
    fn verdict(entity: &'static str, id: DbId, affected: i32) -> WriteResult<()> {
        if affected == 0 {
            Err(CoreError::NotFoundOrConflict { entity, id })
        } else {
            Ok(())
        }
    }
}
