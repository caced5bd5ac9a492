use std::cmp::Ordering;

use super::{grid, header, title, Cell};
use crate::client::QueryState;
use crate::domain::team_member::{MemberStatus, TeamMember};
use crate::ui::badge;
use crate::ui::table::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberColumn {
    Name,
    Role,
    Status,
    TasksCompleted,
    PerformanceScore,
}

impl MemberColumn {
    pub const ALL: [MemberColumn; 5] = [
        MemberColumn::Name,
        MemberColumn::Role,
        MemberColumn::Status,
        MemberColumn::TasksCompleted,
        MemberColumn::PerformanceScore,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MemberColumn::Name => "Name",
            MemberColumn::Role => "Role",
            MemberColumn::Status => "Status",
            MemberColumn::TasksCompleted => "Tasks Completed",
            MemberColumn::PerformanceScore => "Performance Score",
        }
    }
}

fn compare(a: &TeamMember, b: &TeamMember, column: MemberColumn) -> Ordering {
    match column {
        MemberColumn::Name => a.name.cmp(&b.name),
        MemberColumn::Role => a.role.cmp(&b.role),
        MemberColumn::Status => a.status.as_str().cmp(b.status.as_str()),
        MemberColumn::TasksCompleted => a.tasks_completed.cmp(&b.tasks_completed),
        MemberColumn::PerformanceScore => a.performance_score.total_cmp(&b.performance_score),
    }
}

/// Roles present in `members`, in first-seen order
pub fn role_options(members: &[TeamMember]) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();
    for member in members {
        if !roles.contains(&member.role) {
            roles.push(member.role.clone());
        }
    }
    roles
}

/// Statuses present in `members`, in first-seen order
pub fn status_options(members: &[TeamMember]) -> Vec<MemberStatus> {
    let mut statuses = Vec::new();
    for member in members {
        if !statuses.contains(&member.status) {
            statuses.push(member.status);
        }
    }
    statuses
}

/// Team member table with role and status filters
#[derive(Debug, Clone, Default)]
pub struct TeamMembersPage {
    pub table: TableState<MemberColumn>,
    role_filter: Option<String>,
    status_filter: Option<MemberStatus>,
}

impl TeamMembersPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_role_filter(&mut self, role: Option<String>) {
        self.role_filter = role;
        self.table.reset_page();
    }

    pub fn set_status_filter(&mut self, status: Option<MemberStatus>) {
        self.status_filter = status;
        self.table.reset_page();
    }

    pub fn filtered(&self, members: &[TeamMember]) -> Vec<TeamMember> {
        members
            .iter()
            .filter(|m| self.role_filter.as_ref().map_or(true, |r| &m.role == r))
            .filter(|m| self.status_filter.map_or(true, |s| m.status == s))
            .cloned()
            .collect()
    }

    pub fn rows(&self, members: &[TeamMember]) -> Vec<TeamMember> {
        self.table.page(self.filtered(members), compare)
    }

    pub fn render(&self, state: &QueryState<Vec<TeamMember>>) -> String {
        let members = match state {
            QueryState::Idle | QueryState::Loading => {
                return "Loading team members...\n".to_string()
            }
            QueryState::Error(_) => {
                return "Failed to load team members. Please try again later.\n".to_string()
            }
            QueryState::Success(members) => members,
        };

        let noun = if members.len() == 1 { "member" } else { "members" };
        let subtitle = format!("{} {} in the team", members.len(), noun);
        let mut out = title("Team Members", Some(&subtitle));

        let roles = role_options(members);
        let statuses: Vec<&str> = status_options(members).iter().map(|s| s.label()).collect();
        out.push_str(&format!(
            "Role: {} [{}]\nStatus: {} [{}]\n\n",
            self.role_filter.as_deref().unwrap_or("All Roles"),
            roles.join(", "),
            self.status_filter.map_or("All Statuses", |s| s.label()),
            statuses.join(", "),
        ));

        let total = self.filtered(members).len();
        let cells: Vec<Vec<Cell>> = self
            .rows(members)
            .into_iter()
            .map(|member| {
                let score = member.score_label();
                vec![
                    Cell::from(member.name),
                    Cell::from(member.role),
                    Cell::from(badge::member_status(member.status)),
                    Cell::from(member.tasks_completed.to_string()),
                    Cell::from(score),
                ]
            })
            .collect();

        let headers: Vec<String> = MemberColumn::ALL
            .iter()
            .map(|c| header(c.label(), self.table.sort_direction(*c)))
            .collect();
        out.push_str(&grid(&headers, &cells));

        if cells.is_empty() {
            out.push_str("No team members found matching the selected filters.\n");
        }
        out.push('\n');
        out.push_str(&self.table.summary(total, "team members"));
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures;

    #[test]
    fn options_keep_first_seen_order() {
        let members = fixtures::team_members();
        assert_eq!(
            role_options(&members),
            vec!["Frontend Developer", "Backend Developer", "DevOps Engineer", "QA Engineer"]
        );
        assert_eq!(
            status_options(&members),
            vec![MemberStatus::Active, MemberStatus::Away, MemberStatus::Inactive]
        );
    }

    #[test]
    fn header_counts_members() {
        let page = TeamMembersPage::new();
        let out = page.render(&QueryState::Success(fixtures::team_members()));
        assert!(out.contains("8 members in the team"));
        assert!(out.contains("Showing 1 to 8 of 8 team members"));
        assert!(out.contains("4.8/5.0"));

        let one = vec![fixtures::team_members().remove(0)];
        assert!(page.render(&QueryState::Success(one)).contains("1 member in the team"));
    }

    #[test]
    fn filters_narrow_rows() {
        let mut page = TeamMembersPage::new();
        page.set_role_filter(Some("QA Engineer".to_string()));
        page.set_status_filter(Some(MemberStatus::Away));

        let rows = page.filtered(&fixtures::team_members());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Henry Taylor");
    }

    #[test]
    fn no_match_message() {
        let mut page = TeamMembersPage::new();
        page.set_role_filter(Some("Designer".to_string()));
        let out = page.render(&QueryState::Success(fixtures::team_members()));
        assert!(out.contains("No team members found matching the selected filters."));
        assert!(out.contains("Showing 0 to 0 of 0 team members"));
    }

    #[test]
    fn sort_by_score_descending() {
        let mut page = TeamMembersPage::new();
        page.table.toggle_sort(MemberColumn::PerformanceScore);
        page.table.toggle_sort(MemberColumn::PerformanceScore);
        let rows = page.rows(&fixtures::team_members());
        assert_eq!(rows[0].name, "Grace Lee");
        assert_eq!(rows[7].name, "Emma Brown");
    }

    #[test]
    fn loading_and_error_messages() {
        let page = TeamMembersPage::new();
        assert_eq!(page.render(&QueryState::Loading), "Loading team members...\n");
        assert!(page
            .render(&QueryState::Error("x".to_string()))
            .starts_with("Failed to load team members."));
    }
}
