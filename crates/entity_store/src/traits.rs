//! Entity store trait definitions.

use entities::{
    EntityId, FileItem, FileItemPatch, Meeting, MeetingPatch, Message, MessagePatch, NewFileItem,
    NewMeeting, NewMessage, NewNote, NewProject, NewReport, NewTask, NewUser, Note, NotePatch,
    Project, ProjectPatch, Report, ReportPatch, Task, TaskPatch, TaskStatus, User, UserPatch,
};

use crate::{StoreObserver, SubscriptionId};

/// Trait for entity storage operations.
///
/// Every `add_*` assigns a fresh id (and a creation timestamp for
/// time-stamped kinds) and returns it. `update_*` and `remove_*` return
/// whether an entity with that id existed; unknown ids are ignored. Observers
/// are notified after each successful mutation.
pub trait EntityStore {
    // =========================================================================
    // Observers
    // =========================================================================

    /// Registers an observer.
    fn subscribe(&mut self, observer: Box<dyn StoreObserver>) -> SubscriptionId;

    /// Removes an observer.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    // =========================================================================
    // User operations
    // =========================================================================

    /// Lists users in insertion order.
    fn users(&self) -> &[User];

    /// Gets a user by ID.
    fn user(&self, id: &str) -> Option<&User>;

    /// Gets a user by email, ignoring case.
    fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users().iter().find(|u| u.has_email(email))
    }

    /// Creates a new user.
    fn add_user(&mut self, user: NewUser) -> EntityId;

    /// Updates a user.
    fn update_user(&mut self, id: &str, patch: UserPatch) -> bool;

    /// Deletes a user. References to the user elsewhere are left dangling.
    fn remove_user(&mut self, id: &str) -> bool;

    // =========================================================================
    // Project operations
    // =========================================================================

    /// Lists projects in insertion order.
    fn projects(&self) -> &[Project];

    /// Gets a project by ID.
    fn project(&self, id: &str) -> Option<&Project>;

    /// Creates a new project.
    fn add_project(&mut self, project: NewProject) -> EntityId;

    /// Updates a project.
    fn update_project(&mut self, id: &str, patch: ProjectPatch) -> bool;

    /// Deletes a project and every task that belongs to it.
    fn remove_project(&mut self, id: &str) -> bool;

    // =========================================================================
    // Task operations
    // =========================================================================

    /// Lists tasks in insertion order.
    fn tasks(&self) -> &[Task];

    /// Gets a task by ID.
    fn task(&self, id: &str) -> Option<&Task>;

    /// Lists the tasks of one project.
    fn tasks_for_project(&self, project_id: &str) -> Vec<&Task> {
        self.tasks()
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }

    /// Creates a new task.
    fn add_task(&mut self, task: NewTask) -> EntityId;

    /// Updates a task.
    fn update_task(&mut self, id: &str, patch: TaskPatch) -> bool;

    /// Sets a task's status, stamping `completed_at` when it becomes
    /// `Completed`.
    fn set_task_status(&mut self, id: &str, status: TaskStatus) -> bool;

    /// Deletes a task.
    fn remove_task(&mut self, id: &str) -> bool;

    // =========================================================================
    // Message operations
    // =========================================================================

    /// Lists messages in insertion order.
    fn messages(&self) -> &[Message];

    /// Gets a message by ID.
    fn message(&self, id: &str) -> Option<&Message>;

    /// Sends a new message.
    fn add_message(&mut self, message: NewMessage) -> EntityId;

    /// Updates a message.
    fn update_message(&mut self, id: &str, patch: MessagePatch) -> bool;

    /// Deletes a message.
    fn remove_message(&mut self, id: &str) -> bool;

    // =========================================================================
    // Note operations
    // =========================================================================

    /// Lists notes in insertion order.
    fn notes(&self) -> &[Note];

    /// Gets a note by ID.
    fn note(&self, id: &str) -> Option<&Note>;

    /// Creates a new note.
    fn add_note(&mut self, note: NewNote) -> EntityId;

    /// Updates a note.
    fn update_note(&mut self, id: &str, patch: NotePatch) -> bool;

    /// Deletes a note.
    fn remove_note(&mut self, id: &str) -> bool;

    // =========================================================================
    // Meeting operations
    // =========================================================================

    /// Lists meetings in insertion order.
    fn meetings(&self) -> &[Meeting];

    /// Gets a meeting by ID.
    fn meeting(&self, id: &str) -> Option<&Meeting>;

    /// Schedules a new meeting.
    fn add_meeting(&mut self, meeting: NewMeeting) -> EntityId;

    /// Updates a meeting.
    fn update_meeting(&mut self, id: &str, patch: MeetingPatch) -> bool;

    /// Deletes a meeting.
    fn remove_meeting(&mut self, id: &str) -> bool;

    // =========================================================================
    // File operations
    // =========================================================================

    /// Lists files in insertion order.
    fn files(&self) -> &[FileItem];

    /// Gets a file by ID.
    fn file(&self, id: &str) -> Option<&FileItem>;

    /// Records a new upload.
    fn add_file(&mut self, file: NewFileItem) -> EntityId;

    /// Updates a file.
    fn update_file(&mut self, id: &str, patch: FileItemPatch) -> bool;

    /// Deletes a file.
    fn remove_file(&mut self, id: &str) -> bool;

    // =========================================================================
    // Report operations
    // =========================================================================

    /// Lists reports in insertion order.
    fn reports(&self) -> &[Report];

    /// Gets a report by ID.
    fn report(&self, id: &str) -> Option<&Report>;

    /// Lists the reports a user uploaded or may view.
    fn reports_visible_to(&self, user_id: &str) -> Vec<&Report> {
        self.reports()
            .iter()
            .filter(|r| r.is_visible_to(user_id))
            .collect()
    }

    /// Uploads a new report.
    fn add_report(&mut self, report: NewReport) -> EntityId;

    /// Updates a report.
    fn update_report(&mut self, id: &str, patch: ReportPatch) -> bool;

    /// Deletes a report.
    fn remove_report(&mut self, id: &str) -> bool;
}
