use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A milestone students can claim a reward for once they have accumulated
/// enough achievement points.
///
/// The promised reward is escrowed in full when the achievement is
/// created; each successful claim pays it out to one more student from the
/// shared reward pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Sequential achievement id, starting at 1.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// What the milestone rewards.
    pub description: String,
    /// Achievement points a student needs before claiming.
    pub points_required: u64,
    /// Reward per successful claim, in the smallest native unit.
    pub reward_amount: u128,
    /// Whether the achievement can currently be claimed.
    pub is_active: bool,
    /// How many students have completed this achievement.
    pub times_completed: u64,
    /// When the achievement was created.
    pub created_at: DateTime<Utc>,
}
