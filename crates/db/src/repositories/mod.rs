//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method invokes exactly one
//! named server-side procedure -- no ad-hoc query composition. Procedure
//! names are stable identifiers; changing one requires a matching
//! migration.

pub mod category_repo;
pub mod expense_repo;
pub mod role_repo;
pub mod status_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use expense_repo::ExpenseRepo;
pub use role_repo::RoleRepo;
pub use status_repo::StatusRepo;
pub use user_repo::UserRepo;
