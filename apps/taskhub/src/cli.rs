//! Command parsing and execution

use std::io::Write;

use auth::{AuthError, Authenticator, SessionStorage};
use clap::{Parser, Subcommand};
use entities::EntityKind;
use entity_store::EntityStore;

#[derive(Parser)]
#[command(name = "taskhub")]
#[command(about = "TaskHub team dashboard on the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Log in and remember the session
    Login {
        /// Account email, matched case-insensitively
        email: String,
        /// Account password
        password: String,
    },

    /// Forget the session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Count the records of every kind
    Summary,

    /// List projects
    Projects,

    /// List tasks, optionally of one project
    Tasks {
        /// Only show tasks of this project
        project_id: Option<String>,
    },
}

impl Command {
    /// Runs the command, writing its output to `out`.
    pub fn run<S, W>(
        &self,
        store: &impl EntityStore,
        auth: &mut Authenticator<S>,
        out: &mut W,
    ) -> Result<(), CommandError>
    where
        S: SessionStorage,
        W: Write,
    {
        match self {
            Self::Login { email, password } => {
                let user = auth.login(store, email, password)?;
                writeln!(out, "Logged in as {} <{}>", user.name, user.email)?;
            }
            Self::Logout => {
                auth.logout()?;
                writeln!(out, "Logged out")?;
            }
            Self::Whoami => match auth.current_user() {
                Some(user) => writeln!(
                    out,
                    "{} <{}> - {} ({})",
                    user.name, user.email, user.role, user.id
                )?,
                None => writeln!(out, "Not logged in")?,
            },
            Self::Summary => {
                for kind in EntityKind::all() {
                    writeln!(out, "{:<10}{}", format!("{kind}s"), count(store, *kind))?;
                }
            }
            Self::Projects => {
                for project in store.projects() {
                    writeln!(
                        out,
                        "{}  {}  [{}, {}]  {}%  due {}",
                        project.id,
                        project.name,
                        project.status,
                        project.priority,
                        project.progress,
                        project.due_date
                    )?;
                }
            }
            Self::Tasks { project_id } => {
                let tasks = match project_id {
                    Some(project_id) => store.tasks_for_project(project_id),
                    None => store.tasks().iter().collect(),
                };
                for task in tasks {
                    writeln!(
                        out,
                        "{}  {}  [{}, {}]  due {}  ({})",
                        task.id,
                        task.title,
                        task.status,
                        task.priority,
                        task.due_date,
                        task.project_id
                    )?;
                }
            }
        }
        Ok(())
    }
}

fn count(store: &impl EntityStore, kind: EntityKind) -> usize {
    match kind {
        EntityKind::User => store.users().len(),
        EntityKind::Project => store.projects().len(),
        EntityKind::Task => store.tasks().len(),
        EntityKind::Message => store.messages().len(),
        EntityKind::Note => store.notes().len(),
        EntityKind::Meeting => store.meetings().len(),
        EntityKind::File => store.files().len(),
        EntityKind::Report => store.reports().len(),
    }
}

/// Command errors
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
