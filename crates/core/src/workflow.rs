//! Expense claim lifecycle state machine.
//!
//! Discriminants match the seed data (1-based) in the `expense_statuses`
//! table. The check-and-apply step of every transition is a single
//! conditional update inside the store's procedures; this module is the
//! caller-visible contract: which actions a claim in a given status admits,
//! and the preconditions shared by create and update.

use serde::Serialize;

use crate::types::StatusId;

/// Lifecycle status of an expense claim.
///
/// `Draft -> Submitted -> {Approved, Rejected}`. Approved and Rejected are
/// terminal; no transition re-enters Draft.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpenseStatus {
    Draft = 1,
    Submitted = 2,
    Approved = 3,
    Rejected = 4,
}

/// State-dependent operations on an expense claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseAction {
    Update,
    Delete,
    Submit,
    Approve,
    Reject,
}

impl ExpenseStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Map a database status ID back to the enum.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::Draft),
            2 => Some(Self::Submitted),
            3 => Some(Self::Approved),
            4 => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Display name matching the `expense_statuses` seed data.
    pub fn name(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Approved and Rejected admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Whether a claim in this status may undergo `action`.
    pub fn permits(self, action: ExpenseAction) -> bool {
        match action {
            ExpenseAction::Update | ExpenseAction::Delete | ExpenseAction::Submit => {
                self == Self::Draft
            }
            ExpenseAction::Approve | ExpenseAction::Reject => self == Self::Submitted,
        }
    }
}

impl From<ExpenseStatus> for StatusId {
    fn from(value: ExpenseStatus) -> Self {
        value as StatusId
    }
}

/// All statuses in ordinal order.
pub const ALL_STATUSES: [ExpenseStatus; 4] = [
    ExpenseStatus::Draft,
    ExpenseStatus::Submitted,
    ExpenseStatus::Approved,
    ExpenseStatus::Rejected,
];

/// Validate the claim amount precondition shared by create and update.
pub fn validate_amount_minor(amount_minor: i64) -> Result<(), String> {
    if amount_minor > 0 {
        Ok(())
    } else {
        Err(format!(
            "Claim amount must be positive, got {amount_minor} minor units"
        ))
    }
}
