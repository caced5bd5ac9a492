use super::{grid, title, Cell};
use crate::client::QueryState;
use crate::domain::team::{Team, TeamStatus};
use crate::ui::badge;

const HEADERS: [&str; 4] = ["Name", "Status", "Members", "Created"];

/// Team list with a status filter
#[derive(Debug, Clone, Default)]
pub struct TeamsPage {
    /// `None` shows every team
    pub status_filter: Option<TeamStatus>,
}

impl TeamsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filtered<'a>(&self, teams: &'a [Team]) -> Vec<&'a Team> {
        teams
            .iter()
            .filter(|team| self.status_filter.map_or(true, |s| team.status() == s))
            .collect()
    }

    pub fn render(&self, state: &QueryState<Vec<Team>>) -> String {
        let mut out = title("Teams", None);

        let teams = match state {
            QueryState::Idle | QueryState::Loading => {
                out.push_str("Loading...\n");
                return out;
            }
            QueryState::Error(_) => {
                out.push_str("Error loading teams\n");
                return out;
            }
            QueryState::Success(teams) => self.filtered(teams),
        };

        let filter = self.status_filter.map_or("all", |s| s.as_str());
        out.push_str(&format!("Status: {}\n\n", filter));

        let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        let cells: Vec<Vec<Cell>> = teams
            .iter()
            .map(|team| {
                vec![
                    Cell::from(team.name()),
                    Cell::from(badge::team_status(team.status())),
                    Cell::from(team.member_count().to_string()),
                    Cell::from(team.created_at().format("%Y-%m-%d").to_string()),
                ]
            })
            .collect();

        out.push_str(&grid(&headers, &cells));
        if cells.is_empty() {
            out.push_str("No teams found\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures;

    #[test]
    fn states_have_fixed_messages() {
        let page = TeamsPage::new();
        assert!(page.render(&QueryState::Loading).contains("Loading..."));
        assert!(page
            .render(&QueryState::Error("boom".to_string()))
            .contains("Error loading teams"));
    }

    #[test]
    fn status_filter_hides_other_teams() {
        let page = TeamsPage {
            status_filter: Some(TeamStatus::Inactive),
        };
        let out = page.render(&QueryState::Success(fixtures::teams()));
        assert!(out.contains("Research"));
        assert!(!out.contains("Platform"));
    }

    #[test]
    fn empty_filter_result_says_so() {
        let page = TeamsPage {
            status_filter: Some(TeamStatus::Active),
        };
        let out = page.render(&QueryState::Success(vec![]));
        assert!(out.contains("Name"));
        assert!(out.contains("No teams found"));
    }
}
