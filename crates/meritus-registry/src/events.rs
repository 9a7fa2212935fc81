use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use meritus_core::AccountId;

use crate::badge::SkillLevel;

/// Notifications emitted by registry operations.
///
/// Append-only and externally observable; the registry itself never reads
/// them back. Each variant carries the identifiers a consumer needs to
/// index the change, plus the operation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RegistryEvent {
    InstitutionRegistered {
        institution: AccountId,
        name: String,
        at: DateTime<Utc>,
    },
    InstitutionVerified {
        institution: AccountId,
        at: DateTime<Utc>,
    },
    InstitutionSuspended {
        institution: AccountId,
        reason: String,
        at: DateTime<Utc>,
    },
    StudentRegistered {
        student: AccountId,
        name: String,
        at: DateTime<Utc>,
    },
    CertificateIssued {
        certificate: u64,
        institution: AccountId,
        student: AccountId,
        course_name: String,
        at: DateTime<Utc>,
    },
    CertificateRevoked {
        certificate: u64,
        institution: AccountId,
        reason: String,
        at: DateTime<Utc>,
    },
    SkillBadgeIssued {
        badge: u64,
        issuer: AccountId,
        holder: AccountId,
        skill_name: String,
        level: SkillLevel,
        at: DateTime<Utc>,
    },
    AchievementCreated {
        achievement: u64,
        name: String,
        points_required: u64,
        reward_amount: u128,
        at: DateTime<Utc>,
    },
    AchievementCompleted {
        achievement: u64,
        student: AccountId,
        reward_amount: u128,
        at: DateTime<Utc>,
    },
    ReputationUpdated {
        institution: AccountId,
        reputation: u32,
        at: DateTime<Utc>,
    },
    PlatformFeeUpdated {
        fee_bps: u32,
        at: DateTime<Utc>,
    },
    MinRewardUpdated {
        min_reward: u128,
        at: DateTime<Utc>,
    },
}

/// Append-only log of registry notifications.
pub struct EventLog {
    entries: RwLock<Vec<RegistryEvent>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Append an event.
    pub fn record(&self, event: RegistryEvent) {
        self.entries
            .write()
            .expect("event log lock poisoned")
            .push(event);
    }

    /// Snapshot of all events in emission order.
    pub fn snapshot(&self) -> Vec<RegistryEvent> {
        self.entries
            .read()
            .expect("event log lock poisoned")
            .clone()
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.entries.read().expect("event log lock poisoned").len()
    }

    /// Whether no event has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
