//! Read-only repository over the role procedures.

use claimdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::Role;

const PROC_GET_ROLES: &str = "get_roles";
const PROC_GET_ROLE_BY_ID: &str = "get_role_by_id";

/// Provides read operations for the seeded role set.
pub struct RoleRepo;

impl RoleRepo {
    /// List all roles in ID order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT * FROM {PROC_GET_ROLES}()");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Find a role by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT * FROM {PROC_GET_ROLE_BY_ID}($1)");
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
