use meritus_core::AccountId;

use crate::ledger::LedgerError;

/// Registry operation errors.
///
/// Every operation validates all of its guards before mutating anything,
/// so a returned error always means the registry state is unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("already registered: {0}")]
    AlreadyRegistered(AccountId),

    #[error("certificate {0} already revoked")]
    AlreadyRevoked(u64),

    #[error("achievement {achievement} already claimed by {student}")]
    AlreadyClaimed {
        achievement: u64,
        student: AccountId,
    },

    #[error("certificate already issued for this student, course, and completion date")]
    DuplicateCertificate,

    #[error("not registered: {0}")]
    NotRegistered(AccountId),

    #[error("institution not verified: {0}")]
    NotVerified(AccountId),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("insufficient fee: paid {paid}, minimum {min}")]
    InsufficientFee { paid: u128, min: u128 },

    #[error("insufficient funding: provided {provided}, required {required}")]
    InsufficientFunding { provided: u128, required: u128 },

    #[error("insufficient achievement points: have {have}, need {need}")]
    InsufficientPoints { have: u64, need: u64 },

    #[error("achievement {0} is not active")]
    InactiveAchievement(u64),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
