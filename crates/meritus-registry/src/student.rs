use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use meritus_core::AccountId;

/// A student registered with the credential registry.
///
/// Counters and points only ever increase: issuance and claim operations
/// add to them, nothing decrements or deletes a student record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Account handle the student acts under.
    pub account: AccountId,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// External student identifier (e.g. "STU-001").
    pub student_id: String,
    /// Number of certificates earned.
    pub certificates_earned: u64,
    /// Number of skill badges earned.
    pub skill_badges_earned: u64,
    /// Accumulated achievement points gating reward claims.
    pub achievement_points: u64,
    /// When the student registered.
    pub registered_at: DateTime<Utc>,
}
