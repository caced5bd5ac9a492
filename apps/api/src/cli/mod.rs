//! Command line front end
//!
//! `serve` runs the simulator; every other command is a client of it that
//! renders one dashboard page to stdout.

pub mod commands;

pub use commands::{Cli, Commands, WatchTarget};

use std::net::SocketAddr;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use tokio::net::TcpListener;

use crate::api::{router, AppState};
use crate::client::{ApiClient, ClientError, QueryClient, QueryHandle, QueryState};
use crate::config::Config;
use crate::domain::task::TaskFilter;
use crate::ui::pages::{AgentsPage, TasksPage, TeamMembersPage, TeamsPage};
use crate::ui::table::SortDirection;
use crate::ui::{TaskForm, TeamForm, ToastKind, ToastQueue};

/// Runs one parsed command
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let api_url = cli.api_url.clone().unwrap_or_else(|| config.api_url.clone());
    let client = QueryClient::new(ApiClient::new(api_url));

    match cli.command {
        Commands::Serve { host, port } => {
            let addr = SocketAddr::new(host.unwrap_or(config.host), port.unwrap_or(config.port));
            serve(addr).await
        }
        Commands::Agents { sort, desc } => {
            let mut page = AgentsPage::new();
            page.table.set_sort(sort.map(|s| (s.into(), direction(desc))));
            let state = settle(client.agents().await);
            print!("{}", page.render(&state));
            Ok(())
        }
        Commands::Tasks {
            status,
            priority,
            sort,
            desc,
            page: number,
            page_size,
        } => {
            let mut page = TasksPage::new();
            page.set_status_filter(status);
            page.set_priority_filter(priority);
            page.table.set_sort(sort.map(|s| (s.into(), direction(desc))));
            page.table.set_page_size(page_size).map_err(anyhow::Error::msg)?;

            let result = client.tasks(TaskFilter::default()).await;
            if let Ok(tasks) = &result {
                let total = page.filtered(tasks).len();
                page.table.set_page(number.saturating_sub(1), total);
            }
            print!("{}", page.render(&settle(result)));
            Ok(())
        }
        Commands::Task { id } => {
            let task = client.task(&id).await?;
            println!("{}", serde_json::to_string_pretty(&task)?);
            Ok(())
        }
        Commands::Teams { status } => {
            let page = TeamsPage {
                status_filter: status,
            };
            print!("{}", page.render(&settle(client.teams().await)));
            Ok(())
        }
        Commands::Members {
            role,
            status,
            sort,
            desc,
            page: number,
            page_size,
        } => {
            let mut page = TeamMembersPage::new();
            page.set_role_filter(role);
            page.set_status_filter(status);
            page.table.set_sort(sort.map(|s| (s.into(), direction(desc))));
            page.table.set_page_size(page_size).map_err(anyhow::Error::msg)?;

            let result = client.team_members().await;
            if let Ok(members) = &result {
                let total = page.filtered(members).len();
                page.table.set_page(number.saturating_sub(1), total);
            }
            print!("{}", page.render(&settle(result)));
            Ok(())
        }
        Commands::Sprints => {
            for sprint in client.sprints().await? {
                println!(
                    "{}  {}  {} -> {}  ({})",
                    sprint.id,
                    sprint.name.bold(),
                    sprint.start_date.format("%Y-%m-%d"),
                    sprint.end_date.format("%Y-%m-%d"),
                    sprint.status
                );
            }
            Ok(())
        }
        Commands::Sprint { id } => {
            let sprint = client.api().get_sprint(&id).await?;
            println!("{}", serde_json::to_string_pretty(&sprint)?);
            Ok(())
        }
        Commands::CreateTeam {
            name,
            description,
            members,
        } => {
            let form = TeamForm {
                name,
                description,
                member_count: members,
            };
            create_team(&client, &form).await
        }
        Commands::CreateTask {
            title,
            description,
            agent,
            priority,
            due,
        } => {
            let form = TaskForm {
                title,
                description,
                assigned_agent: agent,
                priority,
                due_date: due,
            };
            let input = form
                .submit()
                .map_err(|errors| ClientError::Validation(errors.to_string()))?;
            let task = client.create_task(&input).await?;
            println!("{} {}", "Task created successfully!".green(), task.id);
            Ok(())
        }
        Commands::SetTaskStatus { id, status } => {
            let task = client.update_task_status(&id, status).await?;
            println!("{} is now {}", task.id, task.status.label());
            Ok(())
        }
        Commands::Watch { page } => watch(&client, page).await,
        Commands::Health => {
            let health = client.api().health().await?;
            println!("{}", health.status.green());
            Ok(())
        }
    }
}

/// Serves the simulator until Ctrl-C
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let app = router(AppState::with_fixtures());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

fn direction(desc: bool) -> SortDirection {
    if desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    }
}

/// Turns a one-shot fetch into the state a page renders
fn settle<T>(result: crate::client::ClientResult<T>) -> QueryState<T> {
    match result {
        Ok(data) => QueryState::Success(data),
        Err(e) => QueryState::Error(e.to_string()),
    }
}

async fn create_team(client: &QueryClient, form: &TeamForm) -> Result<()> {
    let mut toasts = ToastQueue::new();

    let input = match form.submit() {
        Ok(input) => input,
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("{} {}", format!("{}:", error.field).red(), error.message);
            }
            bail!("Team form has errors");
        }
    };

    let result = client.create_team(&input).await;
    match &result {
        Ok(_) => toasts.show("Team created successfully!", ToastKind::Success),
        Err(_) => toasts.show("Failed to create team", ToastKind::Error),
    };
    for toast in toasts.active(tokio::time::Instant::now()) {
        match toast.kind {
            ToastKind::Success => println!("{}", toast.message.green()),
            ToastKind::Error => eprintln!("{}", toast.message.red()),
        }
    }

    result?;

    // The new team was merged into the cached list, so this renders
    // without another request
    print!("{}", TeamsPage::new().render(&settle(client.teams().await)));
    Ok(())
}

async fn watch(client: &QueryClient, target: WatchTarget) -> Result<()> {
    match target {
        WatchTarget::Agents => {
            let page = AgentsPage::new();
            follow(client.watch_agents(), |state| page.render(state)).await
        }
        WatchTarget::Tasks => {
            let page = TasksPage::new();
            follow(client.watch_tasks(TaskFilter::default()), |state| page.render(state)).await
        }
        WatchTarget::Teams => {
            let page = TeamsPage::new();
            follow(client.watch_teams(), |state| page.render(state)).await
        }
        WatchTarget::Members => {
            let page = TeamMembersPage::new();
            follow(client.watch_team_members(), |state| page.render(state)).await
        }
    }
}

/// Prints every state of a watched query until Ctrl-C
async fn follow<T, F>(mut handle: QueryHandle<T>, render: F) -> Result<()>
where
    T: Clone,
    F: Fn(&QueryState<T>) -> String,
{
    print!("{}", render(&handle.state()));

    loop {
        tokio::select! {
            changed = handle.changed() => match changed {
                Some(state) => {
                    println!("{}", "─".repeat(40).dimmed());
                    print!("{}", render(&state));
                }
                None => return Ok(()),
            },
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}
