//! Repository over the user procedures.

use claimdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

const PROC_GET_USERS: &str = "get_users";
const PROC_GET_USER_BY_ID: &str = "get_user_by_id";
const PROC_CREATE_USER: &str = "create_user";
const PROC_UPDATE_USER: &str = "update_user";
const PROC_DELETE_USER: &str = "delete_user";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// List users, optionally restricted to active ones.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT * FROM {PROC_GET_USERS}($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(active_only)
            .fetch_all(pool)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT * FROM {PROC_GET_USER_BY_ID}($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new user, returning the assigned ID.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<DbId, sqlx::Error> {
        let query = format!("SELECT {PROC_CREATE_USER}($1, $2, $3, $4)");
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(&input.user_name)
            .bind(&input.email)
            .bind(input.role_id)
            .bind(input.manager_id)
            .fetch_one(pool)
            .await
    }

    /// Full-replacement update. Returns the affected-row count.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<i32, sqlx::Error> {
        let query = format!("SELECT {PROC_UPDATE_USER}($1, $2, $3, $4, $5, $6)");
        sqlx::query_scalar::<_, i32>(&query)
            .bind(id)
            .bind(&input.user_name)
            .bind(&input.email)
            .bind(input.role_id)
            .bind(input.manager_id)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Deactivate a user. Users are referenced by expenses, so delete never
    /// removes the row. Returns the affected-row count (0 when the user is
    /// absent or already inactive).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<i32, sqlx::Error> {
        let query = format!("SELECT {PROC_DELETE_USER}($1)");
        sqlx::query_scalar::<_, i32>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
