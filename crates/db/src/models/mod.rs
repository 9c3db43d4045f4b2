//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the procedure's
//!   result set (lookup names such as `role_name` already resolved)
//! - `Deserialize` create/update DTOs for the write operations

pub mod category;
pub mod expense;
pub mod role;
pub mod status;
pub mod summary;
pub mod user;
