//! Role entity model.

use claimdesk_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `get_roles` / `get_role_by_id` procedures.
///
/// Roles are a fixed seeded set; this layer never writes them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}
