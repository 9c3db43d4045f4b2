//! Well-known role name constants.
//!
//! These must match the seed data in `20260801000001_create_roles_table.sql`.

pub const ROLE_EMPLOYEE: &str = "Employee";
pub const ROLE_MANAGER: &str = "Manager";
