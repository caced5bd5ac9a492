use super::value_objects::TeamStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Largest team the simulator accepts
pub const MAX_MEMBER_COUNT: u32 = 1000;

/// Team aggregate root
///
/// Represents a named group of people working on the simulated project.
///
/// # Invariants
/// - Name cannot be blank
/// - Description cannot be blank
/// - Member count is between 1 and 1000
///
/// # Example
/// ```
/// use devteam_api::domain::team::{NewTeam, Team};
///
/// let team = Team::new(
///     "team-3".to_string(),
///     NewTeam {
///         name: "Core".to_string(),
///         description: "desc".to_string(),
///         member_count: 3,
///     },
/// )
/// .expect("valid team");
///
/// assert_eq!(team.name(), "Core");
/// assert_eq!(team.member_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    id: String,
    name: String,
    description: String,
    member_count: u32,
    #[serde(default)]
    status: TeamStatus,
    created_at: DateTime<Utc>,
}

/// Request body for creating a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub name: String,
    pub description: String,
    pub member_count: u32,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    /// * `input` - Name, description and member count from the client
    ///
    /// # Returns
    /// * `Ok(Team)` - New active team stamped with the current time
    /// * `Err(String)` - If any invariant is violated
    pub fn new(id: String, input: NewTeam) -> Result<Self, String> {
        if input.name.trim().is_empty() {
            return Err("Team name is required".to_string());
        }

        if input.description.trim().is_empty() {
            return Err("Description is required".to_string());
        }

        if input.member_count < 1 {
            return Err("Member count must be at least 1".to_string());
        }

        if input.member_count > MAX_MEMBER_COUNT {
            return Err(format!("Member count cannot exceed {}", MAX_MEMBER_COUNT));
        }

        Ok(Self {
            id,
            name: input.name,
            description: input.description,
            member_count: input.member_count,
            status: TeamStatus::Active,
            created_at: Utc::now(),
        })
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the team's description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns how many people are on the team
    pub fn member_count(&self) -> u32 {
        self.member_count
    }

    /// Returns the team's current status
    pub fn status(&self) -> TeamStatus {
        self.status
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from stored data
    ///
    /// Bypasses validation; only fixtures and stores should call this.
    pub fn from_parts(
        id: String,
        name: String,
        description: String,
        member_count: u32,
        status: TeamStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            member_count,
            status,
            created_at,
        }
    }
}
