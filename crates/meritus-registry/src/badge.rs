use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use meritus_core::AccountId;

/// Competency levels a skill badge can attest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
            Self::Expert => write!(f, "Expert"),
        }
    }
}

/// An issued competency attestation with optional expiry.
///
/// Validity is always derived from `expires_at` and the instant of the
/// query; it is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillBadge {
    /// Sequential badge id, starting at 1. Independent of certificate ids.
    pub id: u64,
    /// Issuing institution.
    pub issuer: AccountId,
    /// Student holding the badge.
    pub holder: AccountId,
    /// Attested skill.
    pub skill_name: String,
    /// Attested competency level.
    pub level: SkillLevel,
    /// Free-form description of the attestation.
    pub description: String,
    /// When the badge was issued.
    pub issued_at: DateTime<Utc>,
    /// Expiry instant; `None` means the badge never expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// Reference to the proof backing the attestation.
    pub verification_proof: String,
}

impl SkillBadge {
    /// Whether the badge is valid at the given instant.
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        match self.expires_at {
            None => true,
            Some(expiry) => at < expiry,
        }
    }

    /// Whether the badge is valid right now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}
