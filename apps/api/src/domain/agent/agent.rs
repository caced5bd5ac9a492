use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{AgentRole, AgentStatus};
use crate::domain::patch::nullable;

/// A simulated member of the AI dev team
///
/// Agents are seeded at startup and only ever change through partial
/// updates; the simulator never creates or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub role: AgentRole,
    pub status: AgentStatus,
    /// Task the agent is working on, if any
    pub current_task_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields a client may change on an agent
///
/// Every field is optional; only the ones present in the request body are
/// applied. `id` and `createdAt` are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<AgentRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AgentStatus>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_task_id: Option<Option<String>>,
}

impl AgentPatch {
    /// Shallow-merges the provided fields onto `agent`
    pub fn apply(self, agent: &mut Agent) {
        if let Some(name) = self.name {
            agent.name = name;
        }
        if let Some(role) = self.role {
            agent.role = role;
        }
        if let Some(status) = self.status {
            agent.status = status;
        }
        if let Some(current_task_id) = self.current_task_id {
            agent.current_task_id = current_task_id;
        }
    }

    /// Returns true when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.role.is_none()
            && self.status.is_none()
            && self.current_task_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> Agent {
        Agent {
            id: "agent-1".to_string(),
            name: "Alex".to_string(),
            role: AgentRole::Architect,
            status: AgentStatus::Thinking,
            current_task_id: Some("task-1".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn patch_changes_only_given_fields() {
        let mut target = agent();
        let before = target.clone();

        AgentPatch {
            status: Some(AgentStatus::Idle),
            ..Default::default()
        }
        .apply(&mut target);

        assert_eq!(target.status, AgentStatus::Idle);
        assert_eq!(target.name, before.name);
        assert_eq!(target.role, before.role);
        assert_eq!(target.current_task_id, before.current_task_id);
        assert_eq!(target.created_at, before.created_at);
    }

    #[test]
    fn explicit_null_clears_current_task() {
        let mut target = agent();
        let patch: AgentPatch = serde_json::from_str(r#"{"currentTaskId":null}"#).unwrap();

        patch.apply(&mut target);

        assert_eq!(target.current_task_id, None);
    }

    #[test]
    fn absent_current_task_is_kept() {
        let mut target = agent();
        let patch: AgentPatch = serde_json::from_str(r#"{"name":"Alexis"}"#).unwrap();

        patch.apply(&mut target);

        assert_eq!(target.name, "Alexis");
        assert_eq!(target.current_task_id.as_deref(), Some("task-1"));
    }

    #[test]
    fn patch_ignores_id_in_body() {
        let patch: AgentPatch = serde_json::from_str(r#"{"id":"agent-99"}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn agent_serializes_camel_case() {
        let json = serde_json::to_value(agent()).unwrap();
        assert_eq!(json["currentTaskId"], "task-1");
        assert_eq!(json["role"], "architect");
        assert!(json["createdAt"].is_string());
    }
}
