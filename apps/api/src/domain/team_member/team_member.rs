use serde::{Deserialize, Serialize};

use super::value_objects::MemberStatus;

/// Highest possible performance score
pub const MAX_SCORE: f32 = 5.0;

/// A person on the team overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: MemberStatus,
    pub tasks_completed: u32,
    pub performance_score: f32,
}

impl TeamMember {
    /// Score rendered as `4.8/5.0`
    pub fn score_label(&self) -> String {
        format!("{:.1}/{:.1}", self.performance_score, MAX_SCORE)
    }
}
