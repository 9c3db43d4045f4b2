//! Integration tests for the expense workflow transitions.
//!
//! The transitions are conditional updates inside the store's procedures;
//! these tests pin down the caller-visible contract: row-count verdicts,
//! field stamping, terminal states, and the single-winner guarantee under
//! concurrent approvals.

use chrono::NaiveDate;
use claimdesk_core::pagination::PageParams;
use claimdesk_db::models::expense::{CreateExpense, UpdateExpense};
use claimdesk_db::models::user::CreateUser;
use claimdesk_db::repositories::{ExpenseRepo, UserRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_expense(user_id: i64, amount_minor: i64) -> CreateExpense {
    CreateExpense {
        user_id,
        category_id: 1,
        amount_minor,
        currency: None,
        expense_date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
        description: None,
        receipt_file: None,
    }
}

/// Create an employee and a manager; returns (employee_id, manager_id).
async fn seed_people(pool: &PgPool) -> (i64, i64) {
    let employee = UserRepo::create(
        pool,
        &CreateUser {
            user_name: "Alice Example".to_string(),
            email: "alice@example.co.uk".to_string(),
            role_id: 1,
            manager_id: None,
        },
    )
    .await
    .unwrap();
    let manager = UserRepo::create(
        pool,
        &CreateUser {
            user_name: "Bob Manager".to_string(),
            email: "bob.manager@example.co.uk".to_string(),
            role_id: 2,
            manager_id: None,
        },
    )
    .await
    .unwrap();
    (employee, manager)
}

async fn draft_expense(pool: &PgPool, user_id: i64, amount_minor: i64) -> i64 {
    ExpenseRepo::create(pool, &new_expense(user_id, amount_minor), "GBP")
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: submit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submit_succeeds_once_then_noops(pool: PgPool) {
    let (employee, _) = seed_people(&pool).await;
    let id = draft_expense(&pool, employee, 2540).await;

    assert_eq!(ExpenseRepo::submit(&pool, id).await.unwrap(), 1);
    assert_eq!(ExpenseRepo::submit(&pool, id).await.unwrap(), 0);

    let expense = ExpenseRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(expense.status_name, "Submitted");
    assert!(expense.submitted_at.is_some());
    assert!(expense.reviewed_by.is_none());
    assert!(expense.reviewed_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submit_absent_claim_noops(pool: PgPool) {
    assert_eq!(ExpenseRepo::submit(&pool, 999).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Test: update/delete are Draft-only
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_blocked_after_submit(pool: PgPool) {
    let (employee, _) = seed_people(&pool).await;
    let id = draft_expense(&pool, employee, 799).await;
    ExpenseRepo::submit(&pool, id).await.unwrap();

    let update = UpdateExpense {
        category_id: 2,
        amount_minor: 9999,
        currency: None,
        expense_date: NaiveDate::from_ymd_opt(2026, 7, 20).unwrap(),
        description: Some("sneaky edit".to_string()),
        receipt_file: None,
    };
    assert_eq!(
        ExpenseRepo::update(&pool, id, &update, "GBP").await.unwrap(),
        0
    );
    assert_eq!(ExpenseRepo::delete(&pool, id).await.unwrap(), 0);

    // The submitted claim is untouched.
    let expense = ExpenseRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(expense.amount_minor, 799);
    assert_eq!(expense.status_name, "Submitted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_while_draft_removes_the_claim(pool: PgPool) {
    let (employee, _) = seed_people(&pool).await;
    let id = draft_expense(&pool, employee, 799).await;

    assert_eq!(ExpenseRepo::delete(&pool, id).await.unwrap(), 1);
    assert!(ExpenseRepo::find_by_id(&pool, id).await.unwrap().is_none());
    assert_eq!(ExpenseRepo::delete(&pool, id).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Test: approve / reject are Submitted-only and stamp review fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_approve_requires_submitted(pool: PgPool) {
    let (employee, manager) = seed_people(&pool).await;
    let id = draft_expense(&pool, employee, 2540).await;

    // Draft cannot be approved.
    assert_eq!(ExpenseRepo::approve(&pool, id, manager).await.unwrap(), 0);

    ExpenseRepo::submit(&pool, id).await.unwrap();
    assert_eq!(ExpenseRepo::approve(&pool, id, manager).await.unwrap(), 1);

    let expense = ExpenseRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(expense.status_name, "Approved");
    assert_eq!(expense.reviewed_by, Some(manager));
    assert_eq!(expense.reviewer_name.as_deref(), Some("Bob Manager"));
    assert!(expense.reviewed_at.is_some());
    assert!(expense.submitted_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reject_requires_submitted(pool: PgPool) {
    let (employee, manager) = seed_people(&pool).await;
    let id = draft_expense(&pool, employee, 2540).await;

    assert_eq!(ExpenseRepo::reject(&pool, id, manager).await.unwrap(), 0);

    ExpenseRepo::submit(&pool, id).await.unwrap();
    assert_eq!(ExpenseRepo::reject(&pool, id, manager).await.unwrap(), 1);

    let expense = ExpenseRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(expense.status_name, "Rejected");
    assert_eq!(expense.reviewed_by, Some(manager));
    assert!(expense.reviewed_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_terminal_states_admit_nothing(pool: PgPool) {
    let (employee, manager) = seed_people(&pool).await;
    let id = draft_expense(&pool, employee, 2540).await;
    ExpenseRepo::submit(&pool, id).await.unwrap();
    ExpenseRepo::approve(&pool, id, manager).await.unwrap();

    // An approved claim admits no further transition or edit.
    assert_eq!(ExpenseRepo::reject(&pool, id, manager).await.unwrap(), 0);
    assert_eq!(ExpenseRepo::approve(&pool, id, manager).await.unwrap(), 0);
    assert_eq!(ExpenseRepo::submit(&pool, id).await.unwrap(), 0);
    assert_eq!(ExpenseRepo::delete(&pool, id).await.unwrap(), 0);

    let expense = ExpenseRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(expense.status_name, "Approved");
}

// ---------------------------------------------------------------------------
// Test: concurrent approvals -- exactly one winner
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_approvals_single_winner(pool: PgPool) {
    let (employee, manager) = seed_people(&pool).await;
    let id = draft_expense(&pool, employee, 2540).await;
    ExpenseRepo::submit(&pool, id).await.unwrap();

    let (first, second) = tokio::join!(
        ExpenseRepo::approve(&pool, id, manager),
        ExpenseRepo::approve(&pool, id, manager),
    );
    assert_eq!(
        first.unwrap() + second.unwrap(),
        1,
        "exactly one concurrent approval must win"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_approve_and_reject_single_winner(pool: PgPool) {
    let (employee, manager) = seed_people(&pool).await;
    let id = draft_expense(&pool, employee, 2540).await;
    ExpenseRepo::submit(&pool, id).await.unwrap();

    let (approved, rejected) = tokio::join!(
        ExpenseRepo::approve(&pool, id, manager),
        ExpenseRepo::reject(&pool, id, manager),
    );
    assert_eq!(approved.unwrap() + rejected.unwrap(), 1);

    let expense = ExpenseRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert!(matches!(
        expense.status_name.as_str(),
        "Approved" | "Rejected"
    ));
}

// ---------------------------------------------------------------------------
// Test: summary aggregates per status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_counts_and_totals_by_status(pool: PgPool) {
    let (employee, _) = seed_people(&pool).await;
    draft_expense(&pool, employee, 799).await;
    let submitted = draft_expense(&pool, employee, 2540).await;
    ExpenseRepo::submit(&pool, submitted).await.unwrap();

    let summary = ExpenseRepo::summary(&pool).await.unwrap();
    assert_eq!(summary.len(), 4);

    let draft = &summary[0];
    assert_eq!(draft.status_name, "Draft");
    assert_eq!(draft.total_count, 1);
    assert_eq!(draft.total_amount_minor, 799);
    assert_eq!(draft.total_amount, Decimal::new(799, 2)); // 7.99

    let submitted = &summary[1];
    assert_eq!(submitted.status_name, "Submitted");
    assert_eq!(submitted.total_count, 1);
    assert_eq!(submitted.total_amount_minor, 2540);
    assert_eq!(submitted.total_amount, Decimal::new(2540, 2)); // 25.40

    for row in &summary[2..] {
        assert_eq!(row.total_count, 0);
        assert_eq!(row.total_amount_minor, 0);
        assert_eq!(row.total_amount, Decimal::ZERO);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_is_recomputed_on_demand(pool: PgPool) {
    let (employee, manager) = seed_people(&pool).await;
    let id = draft_expense(&pool, employee, 1425).await;
    ExpenseRepo::submit(&pool, id).await.unwrap();
    ExpenseRepo::approve(&pool, id, manager).await.unwrap();

    let summary = ExpenseRepo::summary(&pool).await.unwrap();
    let approved = summary.iter().find(|s| s.status_name == "Approved").unwrap();
    assert_eq!(approved.total_count, 1);
    assert_eq!(approved.total_amount_minor, 1425);

    // The listing agrees with the aggregate.
    let approved_rows =
        ExpenseRepo::list(&pool, None, Some(3), PageParams::default())
            .await
            .unwrap();
    assert_eq!(approved_rows.len(), 1);
}
