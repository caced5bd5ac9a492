//! Colored status labels

use colored::{Color, Colorize};

use crate::domain::agent::AgentStatus;
use crate::domain::task::{TaskPriority, TaskStatus};
use crate::domain::team::TeamStatus;
use crate::domain::team_member::MemberStatus;

/// A label and the color it is painted in
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub text: String,
    pub color: Color,
}

impl Badge {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Paints the label left-aligned in `width` columns
    pub fn paint(&self, width: usize) -> String {
        format!("{:<width$}", self.text, width = width)
            .color(self.color)
            .to_string()
    }
}

pub fn agent_status(status: AgentStatus) -> Badge {
    let color = match status {
        AgentStatus::Thinking => Color::Blue,
        AgentStatus::Idle => Color::BrightBlack,
        AgentStatus::Error => Color::Red,
    };
    Badge::new(status.as_str(), color)
}

pub fn task_status(status: TaskStatus) -> Badge {
    let color = match status {
        TaskStatus::Pending => Color::BrightBlack,
        TaskStatus::InProgress => Color::Blue,
        TaskStatus::Completed => Color::Green,
        TaskStatus::Blocked => Color::Red,
    };
    Badge::new(status.label(), color)
}

pub fn task_priority(priority: TaskPriority) -> Badge {
    let color = match priority {
        TaskPriority::Low => Color::Blue,
        TaskPriority::Medium => Color::Yellow,
        TaskPriority::High => Color::Red,
    };
    Badge::new(priority.as_str(), color)
}

pub fn team_status(status: TeamStatus) -> Badge {
    let color = match status {
        TeamStatus::Active => Color::Green,
        TeamStatus::Inactive => Color::BrightBlack,
    };
    Badge::new(status.as_str(), color)
}

pub fn member_status(status: MemberStatus) -> Badge {
    let color = match status {
        MemberStatus::Active => Color::Green,
        MemberStatus::Away => Color::Yellow,
        MemberStatus::Inactive => Color::BrightBlack,
    };
    Badge::new(status.label(), color)
}
