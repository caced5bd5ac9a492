use std::cmp::Ordering;

use super::{grid, header, title, Cell};
use crate::client::QueryState;
use crate::domain::task::{Task, TaskPriority, TaskStatus};
use crate::ui::badge;
use crate::ui::table::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskColumn {
    Title,
    Status,
    Priority,
    Assigned,
    Created,
}

impl TaskColumn {
    pub const ALL: [TaskColumn; 5] = [
        TaskColumn::Title,
        TaskColumn::Status,
        TaskColumn::Priority,
        TaskColumn::Assigned,
        TaskColumn::Created,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskColumn::Title => "Title",
            TaskColumn::Status => "Status",
            TaskColumn::Priority => "Priority",
            TaskColumn::Assigned => "Assigned",
            TaskColumn::Created => "Created",
        }
    }
}

fn priority_rank(priority: TaskPriority) -> u8 {
    match priority {
        TaskPriority::Low => 0,
        TaskPriority::Medium => 1,
        TaskPriority::High => 2,
    }
}

fn compare(a: &Task, b: &Task, column: TaskColumn) -> Ordering {
    match column {
        TaskColumn::Title => a.title.cmp(&b.title),
        TaskColumn::Status => a.status.as_str().cmp(b.status.as_str()),
        TaskColumn::Priority => priority_rank(a.priority).cmp(&priority_rank(b.priority)),
        TaskColumn::Assigned => a.assigned_agent_id.cmp(&b.assigned_agent_id),
        TaskColumn::Created => a.created_at.cmp(&b.created_at),
    }
}

/// Filterable, sortable, paginated task table
#[derive(Debug, Clone, Default)]
pub struct TasksPage {
    pub table: TableState<TaskColumn>,
    status_filter: Option<TaskStatus>,
    priority_filter: Option<TaskPriority>,
}

impl TasksPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_filter(&self) -> Option<TaskStatus> {
        self.status_filter
    }

    pub fn priority_filter(&self) -> Option<TaskPriority> {
        self.priority_filter
    }

    /// `None` shows every status; returns to the first page
    pub fn set_status_filter(&mut self, status: Option<TaskStatus>) {
        self.status_filter = status;
        self.table.reset_page();
    }

    /// `None` shows every priority; returns to the first page
    pub fn set_priority_filter(&mut self, priority: Option<TaskPriority>) {
        self.priority_filter = priority;
        self.table.reset_page();
    }

    pub fn filtered(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|t| self.status_filter.map_or(true, |s| t.status == s))
            .filter(|t| self.priority_filter.map_or(true, |p| t.priority == p))
            .cloned()
            .collect()
    }

    /// Current page after filtering and sorting
    pub fn rows(&self, tasks: &[Task]) -> Vec<Task> {
        self.table.page(self.filtered(tasks), compare)
    }

    pub fn render(&self, state: &QueryState<Vec<Task>>) -> String {
        let mut out = title("Tasks", Some("Manage and track your team tasks"));

        let tasks = match state {
            QueryState::Idle | QueryState::Loading => {
                out.push_str("Loading tasks...\n");
                return out;
            }
            QueryState::Error(_) => {
                out.push_str("Error loading tasks\nFailed to fetch tasks. Please try again later.\n");
                return out;
            }
            QueryState::Success(tasks) => tasks,
        };

        let total = self.filtered(tasks).len();
        if total == 0 {
            out.push_str("No tasks found\n");
            return out;
        }

        let cells: Vec<Vec<Cell>> = self
            .rows(tasks)
            .into_iter()
            .map(|task| {
                vec![
                    Cell::from(task.title),
                    Cell::from(badge::task_status(task.status)),
                    Cell::from(badge::task_priority(task.priority)),
                    Cell::from(task.assigned_agent_id.unwrap_or_else(|| "Unassigned".to_string())),
                    Cell::from(task.created_at.format("%Y-%m-%d").to_string()),
                ]
            })
            .collect();

        let headers: Vec<String> = TaskColumn::ALL
            .iter()
            .map(|c| header(c.label(), self.table.sort_direction(*c)))
            .collect();
        out.push_str(&grid(&headers, &cells));
        out.push('\n');
        out.push_str(&self.table.summary(total, "tasks"));
        out.push_str(&format!(
            "  (page {} of {}, {} per page)\n",
            self.table.page_index() + 1,
            self.table.page_count(total),
            self.table.page_size()
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures;

    fn many_tasks(n: usize) -> Vec<Task> {
        let template = fixtures::tasks().remove(0);
        (1..=n)
            .map(|i| Task {
                id: format!("task-{}", i),
                title: format!("Task {:02}", i),
                status: if i % 2 == 0 { TaskStatus::Completed } else { TaskStatus::Pending },
                ..template.clone()
            })
            .collect()
    }

    #[test]
    fn states_have_fixed_messages() {
        let page = TasksPage::new();
        assert!(page.render(&QueryState::Loading).contains("Loading tasks..."));
        assert!(page
            .render(&QueryState::Error("boom".to_string()))
            .contains("Error loading tasks"));
        assert!(page.render(&QueryState::Success(vec![])).contains("No tasks found"));
    }

    #[test]
    fn filters_combine() {
        let mut page = TasksPage::new();
        page.set_status_filter(Some(TaskStatus::InProgress));
        assert_eq!(page.filtered(&fixtures::tasks()).len(), 2);

        page.set_priority_filter(Some(TaskPriority::High));
        let rows = page.filtered(&fixtures::tasks());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "task-1");
    }

    #[test]
    fn filter_change_returns_to_first_page() {
        let tasks = many_tasks(30);
        let mut page = TasksPage::new();
        page.table.next_page(tasks.len());
        assert_eq!(page.table.page_index(), 1);

        page.set_status_filter(Some(TaskStatus::Pending));
        assert_eq!(page.table.page_index(), 0);
    }

    #[test]
    fn summary_counts_filtered_rows() {
        let mut page = TasksPage::new();
        page.set_status_filter(Some(TaskStatus::Completed));
        let out = page.render(&QueryState::Success(many_tasks(30)));
        assert!(out.contains("Showing 1 to 10 of 15 tasks"));
        assert!(out.contains("page 1 of 2"));
    }

    #[test]
    fn priority_sorts_by_urgency() {
        let mut page = TasksPage::new();
        page.table.toggle_sort(TaskColumn::Priority);
        let rows = page.rows(&fixtures::tasks());
        let order: Vec<TaskPriority> = rows.iter().map(|t| t.priority).collect();
        assert_eq!(order, vec![TaskPriority::Low, TaskPriority::Medium, TaskPriority::High]);
    }
}
