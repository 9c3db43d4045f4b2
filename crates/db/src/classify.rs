//! Store fault classification.
//!
//! Inspects a low-level store failure and decides whether it is an
//! identity/authentication problem (misconfigured credentials) or a generic
//! fault, so the diagnostics surface can point operators at the right fix.

use claimdesk_core::error::CoreError;

/// Keywords whose presence in a fault message marks an identity failure.
const IDENTITY_KEYWORDS: &[&str] = &["login", "principal", "token", "authentication"];

/// Remediation hint attached to identity failures.
const IDENTITY_HINT: &str = "Database authentication failed. Check that DATABASE_URL \
     carries valid credentials and that the database role has been granted access.";

/// Diagnostic category of a classified fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Identity,
    Generic,
}

/// A classified store fault, retained for diagnostics surfaces.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Operation during which the fault occurred, e.g. `"GetExpenses"`.
    pub context: &'static str,
    pub kind: FaultKind,
    /// Stable human-readable description; identity failures carry the
    /// credential remediation hint instead of the raw message.
    pub message: String,
}

/// Classify a low-level store failure.
pub fn classify(context: &'static str, err: &sqlx::Error) -> Diagnostic {
    let text = err.to_string();
    if is_identity_failure(&text) {
        Diagnostic {
            context,
            kind: FaultKind::Identity,
            message: format!("[{context}] {IDENTITY_HINT}"),
        }
    } else {
        Diagnostic {
            context,
            kind: FaultKind::Generic,
            message: format!("[{context}] {}: {text}", category(err)),
        }
    }
}

/// Convert a write-path failure into the caller-facing error union.
pub fn store_error(context: &'static str, err: &sqlx::Error) -> CoreError {
    match classify(context, err).kind {
        FaultKind::Identity => CoreError::Identity {
            hint: IDENTITY_HINT.to_string(),
        },
        FaultKind::Generic => CoreError::Store {
            category: category(err).to_string(),
            message: err.to_string(),
        },
    }
}

fn is_identity_failure(message: &str) -> bool {
    let lower = message.to_lowercase();
    IDENTITY_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Short category name for a sqlx fault.
fn category(err: &sqlx::Error) -> &'static str {
    match err {
        sqlx::Error::Configuration(_) => "Configuration",
        sqlx::Error::Database(_) => "Database",
        sqlx::Error::Io(_) => "Io",
        sqlx::Error::Tls(_) => "Tls",
        sqlx::Error::Protocol(_) => "Protocol",
        sqlx::Error::RowNotFound => "RowNotFound",
        sqlx::Error::ColumnNotFound(_) => "ColumnNotFound",
        sqlx::Error::Decode(_) => "Decode",
        sqlx::Error::PoolTimedOut => "PoolTimedOut",
        sqlx::Error::PoolClosed => "PoolClosed",
        sqlx::Error::WorkerCrashed => "WorkerCrashed",
        _ => "Other",
    }
}
