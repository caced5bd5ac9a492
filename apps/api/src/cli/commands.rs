use std::net::IpAddr;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::domain::task::{TaskPriority, TaskStatus};
use crate::domain::team::TeamStatus;
use crate::domain::team_member::MemberStatus;
use crate::ui::pages::{MemberColumn, TaskColumn};

#[derive(Debug, Parser)]
#[command(name = "devteam")]
#[command(author, version, about = "Dashboard and mock API for a simulated AI dev team", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the simulator
    #[arg(long, global = true, env = "DEVTEAM_API_URL")]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the mock API server
    Serve {
        /// Interface to bind
        #[arg(long, env = "DEVTEAM_HOST")]
        host: Option<IpAddr>,

        /// Port to bind
        #[arg(short, long, env = "DEVTEAM_PORT")]
        port: Option<u16>,
    },

    /// Show the agents list
    Agents {
        #[arg(long, value_enum)]
        sort: Option<AgentSortArg>,

        #[arg(long)]
        desc: bool,
    },

    /// Show the task table
    Tasks {
        /// Only tasks with this status
        #[arg(long)]
        status: Option<TaskStatus>,

        /// Only tasks with this priority
        #[arg(long)]
        priority: Option<TaskPriority>,

        #[arg(long, value_enum)]
        sort: Option<TaskSortArg>,

        #[arg(long)]
        desc: bool,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page (10, 25 or 50)
        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },

    /// Show one task
    Task {
        id: String,
    },

    /// Show the teams list
    Teams {
        #[arg(long)]
        status: Option<TeamStatus>,
    },

    /// Show the team member table
    Members {
        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        status: Option<MemberStatus>,

        #[arg(long, value_enum)]
        sort: Option<MemberSortArg>,

        #[arg(long)]
        desc: bool,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },

    /// List sprints
    Sprints,

    /// Show one sprint
    Sprint {
        id: String,
    },

    /// Create a team
    CreateTeam {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        /// Number of members (1 to 1000)
        #[arg(long)]
        members: String,
    },

    /// Create a task
    CreateTask {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Id of the assigned agent
        #[arg(long)]
        agent: String,

        #[arg(long, default_value = "medium")]
        priority: TaskPriority,

        /// Due date as YYYY-MM-DD
        #[arg(long)]
        due: String,
    },

    /// Move a task to another status
    SetTaskStatus {
        id: String,
        status: TaskStatus,
    },

    /// Keep a page on screen, refreshing as the data changes
    Watch {
        #[arg(value_enum)]
        page: WatchTarget,
    },

    /// Check that the simulator is up
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WatchTarget {
    Agents,
    Tasks,
    Teams,
    Members,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentSortArg {
    Name,
    Role,
    Status,
    Task,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskSortArg {
    Title,
    Status,
    Priority,
    Assigned,
    Created,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MemberSortArg {
    Name,
    Role,
    Status,
    Tasks,
    Score,
}

impl From<AgentSortArg> for crate::ui::pages::AgentColumn {
    fn from(arg: AgentSortArg) -> Self {
        use crate::ui::pages::AgentColumn;
        match arg {
            AgentSortArg::Name => AgentColumn::Name,
            AgentSortArg::Role => AgentColumn::Role,
            AgentSortArg::Status => AgentColumn::Status,
            AgentSortArg::Task => AgentColumn::CurrentTask,
        }
    }
}

impl From<TaskSortArg> for TaskColumn {
    fn from(arg: TaskSortArg) -> Self {
        match arg {
            TaskSortArg::Title => TaskColumn::Title,
            TaskSortArg::Status => TaskColumn::Status,
            TaskSortArg::Priority => TaskColumn::Priority,
            TaskSortArg::Assigned => TaskColumn::Assigned,
            TaskSortArg::Created => TaskColumn::Created,
        }
    }
}

impl From<MemberSortArg> for MemberColumn {
    fn from(arg: MemberSortArg) -> Self {
        match arg {
            MemberSortArg::Name => MemberColumn::Name,
            MemberSortArg::Role => MemberColumn::Role,
            MemberSortArg::Status => MemberColumn::Status,
            MemberSortArg::Tasks => MemberColumn::TasksCompleted,
            MemberSortArg::Score => MemberColumn::PerformanceScore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_task_filters_from_wire_strings() {
        let cli = Cli::try_parse_from([
            "devteam", "tasks", "--status", "in_progress", "--priority", "high", "--sort", "title",
        ])
        .unwrap();

        match cli.command {
            Commands::Tasks {
                status,
                priority,
                sort,
                page,
                ..
            } => {
                assert_eq!(status, Some(TaskStatus::InProgress));
                assert_eq!(priority, Some(TaskPriority::High));
                assert_eq!(sort, Some(TaskSortArg::Title));
                assert_eq!(page, 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(Cli::try_parse_from(["devteam", "set-task-status", "task-1", "done"]).is_err());
    }

    #[test]
    fn sprint_takes_an_id() {
        let cli = Cli::try_parse_from(["devteam", "sprint", "sprint-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Sprint { id } if id == "sprint-1"));
    }

    #[test]
    fn verbosity_counts_flags() {
        let cli = Cli::try_parse_from(["devteam", "-vv", "health"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
