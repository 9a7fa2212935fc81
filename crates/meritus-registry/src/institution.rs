use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use meritus_core::AccountId;

/// Reputation assigned to every institution at registration.
pub const DEFAULT_REPUTATION: u32 = 500;

/// Upper bound of the reputation scale.
pub const MAX_REPUTATION: u32 = 1000;

/// Accreditation states of an institution.
///
/// Transitions happen only through owner action: `Pending → Verified` via
/// verification, and any state `→ Suspended` via suspension. Suspension
/// retroactively invalidates every certificate the institution issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstitutionStatus {
    /// Registered, awaiting accreditation review.
    Pending,
    /// Accredited; may issue certificates and skill badges.
    Verified,
    /// Accreditation withdrawn.
    Suspended,
}

impl fmt::Display for InstitutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Verified => write!(f, "Verified"),
            Self::Suspended => write!(f, "Suspended"),
        }
    }
}

/// An educational institution registered with the credential registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    /// Account handle the institution acts under.
    pub account: AccountId,
    /// Legal name.
    pub name: String,
    /// Official registration number.
    pub registration_number: String,
    /// Country of incorporation.
    pub country: String,
    /// Public website.
    pub website: String,
    /// Current accreditation status.
    pub status: InstitutionStatus,
    /// Reputation score in `[0, MAX_REPUTATION]`.
    pub reputation: u32,
    /// Number of certificates this institution has issued.
    pub certificates_issued: u64,
    /// When the institution registered.
    pub registered_at: DateTime<Utc>,
}
