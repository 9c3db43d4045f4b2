//! User entity model and DTOs.

use claimdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `get_users` / `get_user_by_id` procedures, with the role
/// and manager names resolved by the store.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub user_name: String,
    pub email: String,
    pub role_id: DbId,
    pub role_name: String,
    pub manager_id: Option<DbId>,
    pub manager_name: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 200))]
    pub user_name: String,
    #[validate(email)]
    pub email: String,
    pub role_id: DbId,
    pub manager_id: Option<DbId>,
}

/// DTO for updating an existing user (full replacement).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 200))]
    pub user_name: String,
    #[validate(email)]
    pub email: String,
    pub role_id: DbId,
    pub manager_id: Option<DbId>,
    pub is_active: bool,
}
