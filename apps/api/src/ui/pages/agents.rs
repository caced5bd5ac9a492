use std::cmp::Ordering;

use super::{grid, header, title, Cell};
use crate::client::QueryState;
use crate::domain::agent::Agent;
use crate::ui::badge;
use crate::ui::table::TableState;
use crate::ui::virtualizer::Virtualizer;

/// Viewport height assumed when nothing else is known
pub const DEFAULT_VIEWPORT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentColumn {
    Name,
    Role,
    Status,
    CurrentTask,
}

impl AgentColumn {
    pub const ALL: [AgentColumn; 4] = [
        AgentColumn::Name,
        AgentColumn::Role,
        AgentColumn::Status,
        AgentColumn::CurrentTask,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgentColumn::Name => "Name",
            AgentColumn::Role => "Role",
            AgentColumn::Status => "Status",
            AgentColumn::CurrentTask => "Current Task",
        }
    }
}

fn compare(a: &Agent, b: &Agent, column: AgentColumn) -> Ordering {
    match column {
        AgentColumn::Name => a.name.cmp(&b.name),
        AgentColumn::Role => a.role.as_str().cmp(b.role.as_str()),
        AgentColumn::Status => a.status.as_str().cmp(b.status.as_str()),
        AgentColumn::CurrentTask => a.current_task_id.cmp(&b.current_task_id),
    }
}

/// Sortable, virtualized agent list
///
/// Every agent is on one page; only the rows inside the viewport (plus the
/// overscan) are rendered.
#[derive(Debug, Clone)]
pub struct AgentsPage {
    pub table: TableState<AgentColumn>,
    pub scroll_offset: u32,
    pub viewport_height: u32,
}

impl Default for AgentsPage {
    fn default() -> Self {
        Self {
            table: TableState::new(),
            scroll_offset: 0,
            viewport_height: DEFAULT_VIEWPORT,
        }
    }
}

impl AgentsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agents in display order
    pub fn rows(&self, agents: &[Agent]) -> Vec<Agent> {
        self.table.sorted(agents.to_vec(), compare)
    }

    pub fn render(&self, state: &QueryState<Vec<Agent>>) -> String {
        let agents = match state {
            QueryState::Idle | QueryState::Loading => return "Loading agents...\n".to_string(),
            QueryState::Error(message) if message.is_empty() => {
                return "Error: Failed to load agents\n".to_string()
            }
            QueryState::Error(message) => return format!("Error: {}\n", message),
            QueryState::Success(agents) => agents,
        };

        let subtitle = format!("{} agents active", agents.len());
        let mut out = title("Agents", Some(&subtitle));

        if agents.is_empty() {
            out.push_str("No agents available\n");
            return out;
        }

        let rows = self.rows(agents);
        let virtualizer = Virtualizer::for_agents(rows.len());
        let cells: Vec<Vec<Cell>> = virtualizer
            .items(self.scroll_offset, self.viewport_height)
            .into_iter()
            .map(|item| {
                let agent = &rows[item.index];
                vec![
                    Cell::from(agent.name.as_str()),
                    Cell::from(agent.role.as_str()),
                    Cell::from(badge::agent_status(agent.status)),
                    Cell::from(agent.current_task_id.as_deref().unwrap_or("—")),
                ]
            })
            .collect();

        let headers: Vec<String> = AgentColumn::ALL
            .iter()
            .map(|c| header(c.label(), self.table.sort_direction(*c)))
            .collect();
        out.push_str(&grid(&headers, &cells));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures;

    #[test]
    fn loading_and_error_states() {
        let page = AgentsPage::new();
        assert_eq!(page.render(&QueryState::Loading), "Loading agents...\n");
        assert_eq!(
            page.render(&QueryState::Error("Failed to fetch agents".to_string())),
            "Error: Failed to fetch agents\n"
        );
    }

    #[test]
    fn empty_list_message() {
        let out = AgentsPage::new().render(&QueryState::Success(vec![]));
        assert!(out.contains("0 agents active"));
        assert!(out.contains("No agents available"));
    }

    #[test]
    fn renders_every_fixture_agent() {
        let out = AgentsPage::new().render(&QueryState::Success(fixtures::agents()));
        assert!(out.contains("5 agents active"));
        for name in ["Alex", "Bailey", "Casey", "Dakota", "Evan"] {
            assert!(out.contains(name), "missing {}", name);
        }
        assert!(out.contains("task-1"));
        assert!(out.contains("—"));
    }

    #[test]
    fn sort_by_name_descending() {
        let mut page = AgentsPage::new();
        page.table.toggle_sort(AgentColumn::Name);
        page.table.toggle_sort(AgentColumn::Name);

        let rows = page.rows(&fixtures::agents());
        assert_eq!(rows[0].name, "Evan");
        assert_eq!(rows[4].name, "Alex");
    }

    #[test]
    fn viewport_limits_rendered_rows() {
        let mut agents = Vec::new();
        for n in 0..100 {
            let mut agent = fixtures::agents().remove(0);
            agent.id = format!("agent-{}", n);
            agent.name = format!("Agent {:03}", n);
            agents.push(agent);
        }

        let page = AgentsPage {
            viewport_height: 100,
            ..AgentsPage::new()
        };
        let out = page.render(&QueryState::Success(agents));

        // Two visible rows plus ten overscan below
        assert!(out.contains("Agent 011"));
        assert!(!out.contains("Agent 012"));
    }
}
