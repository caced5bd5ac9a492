//! Text renderings of the dashboard pages
//!
//! Each page owns its view state (filters, sorting, pagination) and renders
//! a `QueryState` into a block of text for the terminal.

pub mod agents;
pub mod tasks;
pub mod team_members;
pub mod teams;

pub use agents::{AgentColumn, AgentsPage};
pub use tasks::{TaskColumn, TasksPage};
pub use team_members::{MemberColumn, TeamMembersPage};
pub use teams::TeamsPage;

use colored::Colorize;

use super::badge::Badge;
use super::table::SortDirection;

/// Column gap in rendered grids
const GAP: &str = "  ";

/// One table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Badge(Badge),
}

impl Cell {
    fn text(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Badge(badge) => &badge.text,
        }
    }

    fn width(&self) -> usize {
        self.text().chars().count()
    }

    fn render(&self, width: usize) -> String {
        match self {
            Cell::Text(text) => format!("{:<width$}", text, width = width),
            Cell::Badge(badge) => badge.paint(width),
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<Badge> for Cell {
    fn from(badge: Badge) -> Self {
        Cell::Badge(badge)
    }
}

/// Header label with its sort marker
pub fn header(label: &str, direction: Option<SortDirection>) -> String {
    match direction {
        Some(direction) => format!("{} {}", label, direction.arrow()),
        None => label.to_string(),
    }
}

/// Lays out headers and rows as aligned columns
pub fn grid(headers: &[String], rows: &[Vec<Cell>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let head: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<w$}", h, w = *w))
        .collect();
    out.push_str(head.join(GAP).trim_end());
    out.push('\n');

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| cell.render(*width))
            .collect();
        out.push_str(line.join(GAP).trim_end());
        out.push('\n');
    }

    out
}

/// Page title followed by an optional subtitle line
fn title(name: &str, subtitle: Option<&str>) -> String {
    match subtitle {
        Some(subtitle) => format!("{}\n{}\n\n", name.bold(), subtitle),
        None => format!("{}\n\n", name.bold()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_aligns_columns() {
        let out = grid(
            &["Name".to_string(), "Role".to_string()],
            &[
                vec![Cell::from("Alex"), Cell::from("researcher")],
                vec![Cell::from("Bailey Ford"), Cell::from("tester")],
            ],
        );

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Name         Role");
        assert_eq!(lines[1], "Alex         researcher");
        assert_eq!(lines[2], "Bailey Ford  tester");
    }

    #[test]
    fn header_shows_sort_arrow() {
        assert_eq!(header("Name", Some(SortDirection::Asc)), "Name ↑");
        assert_eq!(header("Name", None), "Name");
    }
}
