//! Static fallback data returned when the store is unreachable.
//!
//! A disconnected, read-only snapshot: identifiers are illustrative and
//! carry no continuity guarantees with the live store, and nothing here is
//! ever written back. Rows respect the workflow's field-consistency
//! invariant (a Draft claim carries no review or submission fields), so
//! degraded pages render the same shapes as live ones.

use chrono::{Duration, Utc};
use claimdesk_core::money;
use claimdesk_core::types::Timestamp;
use claimdesk_core::workflow::{ExpenseStatus, ALL_STATUSES};

use crate::models::category::ExpenseCategory;
use crate::models::expense::Expense;
use crate::models::role::Role;
use crate::models::status::ExpenseStatusRow;
use crate::models::summary::ExpenseSummary;
use crate::models::user::User;

fn days_ago(days: i64) -> Timestamp {
    Utc::now() - Duration::days(days)
}

pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: 1,
            name: "Employee".into(),
            description: Some("Regular employee who can submit expenses".into()),
        },
        Role {
            id: 2,
            name: "Manager".into(),
            description: Some("Can approve or reject submitted expenses".into()),
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            user_name: "Alice Example".into(),
            email: "alice@example.co.uk".into(),
            role_id: 1,
            role_name: "Employee".into(),
            manager_id: Some(2),
            manager_name: Some("Bob Manager".into()),
            is_active: true,
            created_at: days_ago(30),
        },
        User {
            id: 2,
            user_name: "Bob Manager".into(),
            email: "bob.manager@example.co.uk".into(),
            role_id: 2,
            role_name: "Manager".into(),
            manager_id: None,
            manager_name: None,
            is_active: true,
            created_at: days_ago(60),
        },
    ]
}

pub fn categories() -> Vec<ExpenseCategory> {
    ["Travel", "Meals", "Supplies", "Accommodation", "Other"]
        .into_iter()
        .enumerate()
        .map(|(idx, name)| ExpenseCategory {
            id: idx as i64 + 1,
            name: name.into(),
            is_active: true,
        })
        .collect()
}

pub fn statuses() -> Vec<ExpenseStatusRow> {
    ALL_STATUSES
        .into_iter()
        .map(|status| ExpenseStatusRow {
            id: status.id(),
            name: status.name().into(),
        })
        .collect()
}

pub fn expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: 1,
            user_id: 1,
            user_name: "Alice Example".into(),
            category_id: 1,
            category_name: "Travel".into(),
            status_id: ExpenseStatus::Submitted.id(),
            status_name: "Submitted".into(),
            amount_minor: 2540,
            amount_decimal: money::display_amount(2540),
            currency: money::HOME_CURRENCY.into(),
            expense_date: days_ago(10).date_naive(),
            description: Some("Taxi from airport to client site".into()),
            receipt_file: None,
            submitted_at: Some(days_ago(9)),
            reviewed_by: None,
            reviewer_name: None,
            reviewed_at: None,
            created_at: days_ago(10),
        },
        Expense {
            id: 2,
            user_id: 1,
            user_name: "Alice Example".into(),
            category_id: 2,
            category_name: "Meals".into(),
            status_id: ExpenseStatus::Approved.id(),
            status_name: "Approved".into(),
            amount_minor: 1425,
            amount_decimal: money::display_amount(1425),
            currency: money::HOME_CURRENCY.into(),
            expense_date: days_ago(45).date_naive(),
            description: Some("Client lunch meeting".into()),
            receipt_file: None,
            submitted_at: Some(days_ago(44)),
            reviewed_by: Some(2),
            reviewer_name: Some("Bob Manager".into()),
            reviewed_at: Some(days_ago(43)),
            created_at: days_ago(45),
        },
        Expense {
            id: 3,
            user_id: 1,
            user_name: "Alice Example".into(),
            category_id: 3,
            category_name: "Supplies".into(),
            status_id: ExpenseStatus::Draft.id(),
            status_name: "Draft".into(),
            amount_minor: 799,
            amount_decimal: money::display_amount(799),
            currency: money::HOME_CURRENCY.into(),
            expense_date: days_ago(2).date_naive(),
            description: Some("Office stationery".into()),
            receipt_file: None,
            submitted_at: None,
            reviewed_by: None,
            reviewer_name: None,
            reviewed_at: None,
            created_at: days_ago(2),
        },
    ]
}

pub fn summary() -> Vec<ExpenseSummary> {
    vec![
        ExpenseSummary {
            status_id: ExpenseStatus::Draft.id(),
            status_name: "Draft".into(),
            total_count: 1,
            total_amount_minor: 799,
            total_amount: money::display_amount(799),
        },
        ExpenseSummary {
            status_id: ExpenseStatus::Submitted.id(),
            status_name: "Submitted".into(),
            total_count: 1,
            total_amount_minor: 2540,
            total_amount: money::display_amount(2540),
        },
        ExpenseSummary {
            status_id: ExpenseStatus::Approved.id(),
            status_name: "Approved".into(),
            total_count: 1,
            total_amount_minor: 1425,
            total_amount: money::display_amount(1425),
        },
        ExpenseSummary {
            status_id: ExpenseStatus::Rejected.id(),
            status_name: "Rejected".into(),
            total_count: 0,
            total_amount_minor: 0,
            total_amount: money::display_amount(0),
        },
    ]
}
