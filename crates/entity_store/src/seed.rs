//! Initial datasets.

use std::path::Path;

use entities::{FileItem, Meeting, Message, Note, Project, Report, Task, User};
use serde::{Deserialize, Serialize};

use crate::StoreResult;

const DEMO_JSON: &str = include_str!("../data/demo.json");

/// A full set of collections, used to seed a store or capture its state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub messages: Vec<Message>,
    pub notes: Vec<Note>,
    pub meetings: Vec<Meeting>,
    pub files: Vec<FileItem>,
    pub reports: Vec<Report>,
}

impl Dataset {
    /// Returns the built-in demo team: four users, three projects and their
    /// tasks, chat history, notes, meetings and reports.
    pub fn demo() -> Self {
        // DEMO_JSON is a compile-time constant, so parsing it has only one
        // possible outcome and that outcome is Ok.
        Self::from_json_str(DEMO_JSON).expect("embedded demo dataset is valid")
    }

    /// Parses a dataset from JSON. Missing collections are empty.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            users = dataset.users.len(),
            projects = dataset.projects.len(),
            tasks = dataset.tasks.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Writes the dataset to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
