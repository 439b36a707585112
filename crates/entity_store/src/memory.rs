//! In-memory entity store implementation.

use std::fmt;

use chrono::Utc;
use entities::{
    Entity, EntityId, FileItem, FileItemPatch, Meeting, MeetingPatch, Message, MessagePatch,
    NewFileItem, NewMeeting, NewMessage, NewNote, NewProject, NewReport, NewTask, NewUser, Note,
    NotePatch, Project, ProjectPatch, Report, ReportPatch, Task, TaskPatch, TaskStatus, User,
    UserPatch,
};
use tracing::debug;

use crate::collection::Collection;
use crate::observer::{ChangeKind, ObserverRegistry, StoreEvent};
use crate::{Dataset, EntityStore, IdGenerator, StoreObserver, SubscriptionId, UuidIdGenerator};

#[derive(Debug, Default, Clone)]
struct Collections {
    users: Collection<User>,
    projects: Collection<Project>,
    tasks: Collection<Task>,
    messages: Collection<Message>,
    notes: Collection<Note>,
    meetings: Collection<Meeting>,
    files: Collection<FileItem>,
    reports: Collection<Report>,
}

/// Gives generic code access to the collection of one entity kind.
trait HasCollection<E> {
    fn collection(&self) -> &Collection<E>;
    fn collection_mut(&mut self) -> &mut Collection<E>;
}

macro_rules! has_collection {
    ($($field:ident: $entity:ty),* $(,)?) => {
        $(
            impl HasCollection<$entity> for Collections {
                fn collection(&self) -> &Collection<$entity> {
                    &self.$field
                }

                fn collection_mut(&mut self) -> &mut Collection<$entity> {
                    &mut self.$field
                }
            }
        )*
    };
}

has_collection!(
    users: User,
    projects: Project,
    tasks: Task,
    messages: Message,
    notes: Note,
    meetings: Meeting,
    files: FileItem,
    reports: Report,
);

/// In-memory entity store.
///
/// Constructed explicitly and handed to consumers by reference; there is no
/// process-wide instance.
pub struct MemoryEntityStore {
    collections: Collections,
    ids: Box<dyn IdGenerator>,
    observers: ObserverRegistry,
}

impl MemoryEntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::from_dataset(Dataset::default())
    }

    /// Creates a store holding the built-in demo dataset.
    pub fn seeded() -> Self {
        Self::from_dataset(Dataset::demo())
    }

    /// Creates a store holding `dataset`.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let collections = Collections {
            users: Collection::from_items(dataset.users),
            projects: Collection::from_items(dataset.projects),
            tasks: Collection::from_items(dataset.tasks),
            messages: Collection::from_items(dataset.messages),
            notes: Collection::from_items(dataset.notes),
            meetings: Collection::from_items(dataset.meetings),
            files: Collection::from_items(dataset.files),
            reports: Collection::from_items(dataset.reports),
        };
        Self {
            collections,
            ids: Box::new(UuidIdGenerator),
            observers: ObserverRegistry::default(),
        }
    }

    /// Replaces the id generator.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Copies the current collections into a [`Dataset`].
    pub fn snapshot(&self) -> Dataset {
        let c = &self.collections;
        Dataset {
            users: c.users.as_slice().to_vec(),
            projects: c.projects.as_slice().to_vec(),
            tasks: c.tasks.as_slice().to_vec(),
            messages: c.messages.as_slice().to_vec(),
            notes: c.notes.as_slice().to_vec(),
            meetings: c.meetings.as_slice().to_vec(),
            files: c.files.as_slice().to_vec(),
            reports: c.reports.as_slice().to_vec(),
        }
    }

    fn list<E: Entity>(&self) -> &[E]
    where
        Collections: HasCollection<E>,
    {
        HasCollection::<E>::collection(&self.collections).as_slice()
    }

    fn find<E: Entity>(&self, id: &str) -> Option<&E>
    where
        Collections: HasCollection<E>,
    {
        HasCollection::<E>::collection(&self.collections).get(id)
    }

    fn insert<E: Entity>(&mut self, draft: E::Draft) -> EntityId
    where
        Collections: HasCollection<E>,
    {
        let id = HasCollection::<E>::collection_mut(&mut self.collections).add(
            draft,
            self.ids.as_mut(),
            Utc::now(),
        );
        debug!(kind = %E::KIND, id = %id, "Entity added");
        self.observers.notify(StoreEvent::new(E::KIND, id.clone(), ChangeKind::Added));
        id
    }

    fn patch<E: Entity>(&mut self, id: &str, patch: E::Patch) -> bool
    where
        Collections: HasCollection<E>,
    {
        if !HasCollection::<E>::collection_mut(&mut self.collections).update(id, patch) {
            debug!(kind = %E::KIND, id, "Update ignored, entity not found");
            return false;
        }
        debug!(kind = %E::KIND, id, "Entity updated");
        self.observers.notify(StoreEvent::new(E::KIND, id, ChangeKind::Updated));
        true
    }

    fn delete<E: Entity>(&mut self, id: &str) -> bool
    where
        Collections: HasCollection<E>,
    {
        let removed = HasCollection::<E>::collection_mut(&mut self.collections).remove(id);
        if !removed {
            debug!(kind = %E::KIND, id, "Remove ignored, entity not found");
            return false;
        }
        debug!(kind = %E::KIND, id, "Entity removed");
        self.observers.notify(StoreEvent::new(E::KIND, id, ChangeKind::Removed));
        true
    }
}

impl Default for MemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryEntityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryEntityStore")
            .field("collections", &self.collections)
            .field("ids", &self.ids)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl EntityStore for MemoryEntityStore {
    fn subscribe(&mut self, observer: Box<dyn StoreObserver>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // =========================================================================
    // User operations
    // =========================================================================

    fn users(&self) -> &[User] {
        self.list()
    }

    fn user(&self, id: &str) -> Option<&User> {
        self.find(id)
    }

    fn add_user(&mut self, user: NewUser) -> EntityId {
        self.insert::<User>(user)
    }

    fn update_user(&mut self, id: &str, patch: UserPatch) -> bool {
        self.patch::<User>(id, patch)
    }

    fn remove_user(&mut self, id: &str) -> bool {
        self.delete::<User>(id)
    }

    // =========================================================================
    // Project operations
    // =========================================================================

    fn projects(&self) -> &[Project] {
        self.list()
    }

    fn project(&self, id: &str) -> Option<&Project> {
        self.find(id)
    }

    fn add_project(&mut self, project: NewProject) -> EntityId {
        self.insert::<Project>(project)
    }

    fn update_project(&mut self, id: &str, patch: ProjectPatch) -> bool {
        self.patch::<Project>(id, patch)
    }

    fn remove_project(&mut self, id: &str) -> bool {
        if !self.collections.projects.remove(id) {
            debug!(kind = "project", id, "Remove ignored, entity not found");
            return false;
        }
        let removed_tasks = self
            .collections
            .tasks
            .remove_where(|task| task.project_id == id);
        debug!(
            kind = "project",
            id,
            cascaded_tasks = removed_tasks.len(),
            "Project removed"
        );

        self.observers.notify(StoreEvent::new(Project::KIND, id, ChangeKind::Removed));
        for task_id in removed_tasks {
            self.observers.notify(StoreEvent::new(Task::KIND, task_id, ChangeKind::Removed));
        }
        true
    }

    // =========================================================================
    // Task operations
    // =========================================================================

    fn tasks(&self) -> &[Task] {
        self.list()
    }

    fn task(&self, id: &str) -> Option<&Task> {
        self.find(id)
    }

    fn add_task(&mut self, task: NewTask) -> EntityId {
        self.insert::<Task>(task)
    }

    fn update_task(&mut self, id: &str, patch: TaskPatch) -> bool {
        self.patch::<Task>(id, patch)
    }

    fn set_task_status(&mut self, id: &str, status: TaskStatus) -> bool {
        let completed_at = status.is_completed().then(|| Some(Utc::now()));
        self.patch::<Task>(
            id,
            TaskPatch {
                status: Some(status),
                completed_at,
                ..Default::default()
            },
        )
    }

    fn remove_task(&mut self, id: &str) -> bool {
        self.delete::<Task>(id)
    }

    // =========================================================================
    // Message operations
    // =========================================================================

    fn messages(&self) -> &[Message] {
        self.list()
    }

    fn message(&self, id: &str) -> Option<&Message> {
        self.find(id)
    }

    fn add_message(&mut self, message: NewMessage) -> EntityId {
        self.insert::<Message>(message)
    }

    fn update_message(&mut self, id: &str, patch: MessagePatch) -> bool {
        self.patch::<Message>(id, patch)
    }

    fn remove_message(&mut self, id: &str) -> bool {
        self.delete::<Message>(id)
    }

    // =========================================================================
    // Note operations
    // =========================================================================

    fn notes(&self) -> &[Note] {
        self.list()
    }

    fn note(&self, id: &str) -> Option<&Note> {
        self.find(id)
    }

    fn add_note(&mut self, note: NewNote) -> EntityId {
        self.insert::<Note>(note)
    }

    fn update_note(&mut self, id: &str, patch: NotePatch) -> bool {
        self.patch::<Note>(id, patch)
    }

    fn remove_note(&mut self, id: &str) -> bool {
        self.delete::<Note>(id)
    }

    // =========================================================================
    // Meeting operations
    // =========================================================================

    fn meetings(&self) -> &[Meeting] {
        self.list()
    }

    fn meeting(&self, id: &str) -> Option<&Meeting> {
        self.find(id)
    }

    fn add_meeting(&mut self, meeting: NewMeeting) -> EntityId {
        self.insert::<Meeting>(meeting)
    }

    fn update_meeting(&mut self, id: &str, patch: MeetingPatch) -> bool {
        self.patch::<Meeting>(id, patch)
    }

    fn remove_meeting(&mut self, id: &str) -> bool {
        self.delete::<Meeting>(id)
    }

    // =========================================================================
    // File operations
    // =========================================================================

    fn files(&self) -> &[FileItem] {
        self.list()
    }

    fn file(&self, id: &str) -> Option<&FileItem> {
        self.find(id)
    }

    fn add_file(&mut self, file: NewFileItem) -> EntityId {
        self.insert::<FileItem>(file)
    }

    fn update_file(&mut self, id: &str, patch: FileItemPatch) -> bool {
        self.patch::<FileItem>(id, patch)
    }

    fn remove_file(&mut self, id: &str) -> bool {
        self.delete::<FileItem>(id)
    }

    // =========================================================================
    // Report operations
    // =========================================================================

    fn reports(&self) -> &[Report] {
        self.list()
    }

    fn report(&self, id: &str) -> Option<&Report> {
        self.find(id)
    }

    fn add_report(&mut self, report: NewReport) -> EntityId {
        self.insert::<Report>(report)
    }

    fn update_report(&mut self, id: &str, patch: ReportPatch) -> bool {
        self.patch::<Report>(id, patch)
    }

    fn remove_report(&mut self, id: &str) -> bool {
        self.delete::<Report>(id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use chrono::NaiveDate;
    use entities::{Priority, ProjectStatus};

    use super::*;
    use crate::SequentialIdGenerator;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(id: &str) -> Project {
        Project::from_draft(
            id.to_string(),
            NewProject::new(id, date(2024, 7, 1), date(2024, 8, 15)),
            Utc::now(),
        )
    }

    fn task(id: &str, project_id: &str) -> Task {
        Task::from_draft(
            id.to_string(),
            NewTask::new(id, project_id, "user-1", date(2024, 8, 12)),
            Utc::now(),
        )
    }

    fn recorder(store: &mut MemoryEntityStore) -> Rc<RefCell<Vec<StoreEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        store.subscribe(Box::new(move |event: &StoreEvent| {
            sink.borrow_mut().push(event.clone());
        }));
        events
    }

    #[test]
    fn test_add_then_get_returns_input_plus_id() {
        let mut store = MemoryEntityStore::new();
        let draft = NewProject::new("Redesign", date(2024, 7, 1), date(2024, 8, 15))
            .with_description("Corporate website")
            .with_priority(Priority::High)
            .with_team(["user-1", "user-2"]);

        let id = store.add_project(draft.clone());

        let stored = store.project(&id).unwrap();
        assert_eq!(stored, &Project::from_draft(id.clone(), draft, Utc::now()));
    }

    /// Adds `$draft`, checks the stored record is the draft plus its id and
    /// stamp, then applies `$patch` and checks only the patched fields moved.
    macro_rules! assert_add_and_update {
        (
            $entity:ty,
            $add:ident,
            $get:ident,
            $update:ident,
            $draft:expr,
            $stamp:expr,
            $patch:expr
        ) => {{
            let mut store = MemoryEntityStore::new();
            let draft = $draft;
            let patch = $patch;

            let id = store.$add(draft.clone());
            let stored: $entity = store.$get(&id).unwrap().clone();
            let stamp = $stamp(&stored);
            assert_eq!(stored, <$entity>::from_draft(id.clone(), draft, stamp));

            let mut expected = stored.clone();
            expected.apply(patch.clone());
            assert_ne!(expected, stored);
            assert!(store.$update(&id, patch));
            assert_eq!(store.$get(&id).unwrap(), &expected);
        }};
    }

    fn unstamped<E>(_: &E) -> chrono::DateTime<Utc> {
        Utc::now()
    }

    fn at(h: u32, m: u32) -> chrono::DateTime<Utc> {
        use chrono::TimeZone;
        Utc.with_ymd_and_hms(2024, 8, 13, h, m, 0).unwrap()
    }

    #[test]
    fn test_add_and_update_user() {
        assert_add_and_update!(
            User,
            add_user,
            user,
            update_user,
            NewUser::new("Nina Park", "nina@icmw.de", "Designer").with_department("Design"),
            unstamped,
            UserPatch {
                department: Some(None),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_add_and_update_task() {
        assert_add_and_update!(
            Task,
            add_task,
            task,
            update_task,
            NewTask::new("Write copy", "project-2", "user-1", date(2024, 8, 20))
                .with_priority(Priority::Low)
                .with_assignees(["user-4"]),
            |t: &Task| t.created_at,
            TaskPatch {
                assignees: Some(vec!["user-2".to_string(), "user-4".to_string()]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_add_and_update_message() {
        assert_add_and_update!(
            Message,
            add_message,
            message,
            update_message,
            NewMessage::direct("user-2", "user-1", "Palette ready"),
            |m: &Message| m.timestamp,
            MessagePatch {
                content: Some("Palette ready for review".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_add_and_update_note() {
        assert_add_and_update!(
            Note,
            add_note,
            note,
            update_note,
            NewNote::new("user-1", "Ideas", "- Mobile app").for_project("project-1"),
            |n: &Note| n.timestamp,
            NotePatch {
                is_public: Some(true),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_add_and_update_meeting() {
        assert_add_and_update!(
            Meeting,
            add_meeting,
            meeting,
            update_meeting,
            NewMeeting::new("Design Review", "user-1", at(13, 30), at(14, 30))
                .with_location("Conference Room")
                .with_attendees(["user-1", "user-2"]),
            unstamped,
            MeetingPatch {
                end_time: Some(at(15, 0)),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_add_and_update_file() {
        assert_add_and_update!(
            FileItem,
            add_file,
            file,
            update_file,
            NewFileItem::new("logo.svg", 2048, "image/svg+xml", "/files/logo.svg", "user-2")
                .for_project("project-1"),
            |f: &FileItem| f.upload_date,
            FileItemPatch {
                name: Some("logo-v2.svg".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_add_and_update_report() {
        assert_add_and_update!(
            Report,
            add_report,
            report,
            update_report,
            NewReport::new("Q3", "/reports/q3.pdf", 10, "application/pdf", "user-1")
                .with_category("marketing"),
            |r: &Report| r.upload_date,
            ReportPatch {
                view_permissions: Some(vec!["user-1".to_string(), "user-4".to_string()]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_add_stamps_timestamp_for_time_stamped_kinds() {
        let mut store = MemoryEntityStore::new();
        let before = Utc::now();

        let message_id = store.add_message(NewMessage::to_channel("user-1", "general", "hi"));
        let report_id = store.add_report(NewReport::new(
            "Q3",
            "/reports/q3.pdf",
            10,
            "application/pdf",
            "user-1",
        ));

        let after = Utc::now();
        let sent = store.message(&message_id).unwrap().timestamp;
        let uploaded = store.report(&report_id).unwrap().upload_date;
        assert!(before <= sent && sent <= after);
        assert!(before <= uploaded && uploaded <= after);
    }

    #[test]
    fn test_rapid_adds_never_share_an_id() {
        let mut store = MemoryEntityStore::new();
        let ids: HashSet<_> = (0..500)
            .map(|i| store.add_note(NewNote::new("user-1", format!("note {i}"), "")))
            .collect();

        assert_eq!(ids.len(), 500);
        assert_eq!(store.notes().len(), 500);
    }

    #[test]
    fn test_ids_are_distinguishable_by_kind() {
        let mut store = MemoryEntityStore::new().with_id_generator(SequentialIdGenerator::new());

        let project_id = store.add_project(NewProject::new(
            "P",
            date(2024, 1, 1),
            date(2024, 2, 1),
        ));
        let task_id = store.add_task(NewTask::new("T", &project_id, "user-1", date(2024, 1, 5)));

        assert_eq!(project_id, "project-1");
        assert_eq!(task_id, "task-1");
    }

    #[test]
    fn test_sequential_ids_skip_seeded_ids() {
        let mut store = MemoryEntityStore::seeded().with_id_generator(SequentialIdGenerator::new());

        let id = store.add_task(NewTask::new("New", "project-1", "user-1", date(2024, 9, 1)));

        assert_eq!(id, "task-8");
    }

    #[test]
    fn test_update_overwrites_only_given_fields() {
        let mut store = MemoryEntityStore::from_dataset(Dataset {
            projects: vec![project("p1")],
            ..Default::default()
        });
        let before = store.project("p1").unwrap().clone();

        assert!(store.update_project(
            "p1",
            ProjectPatch {
                status: Some(ProjectStatus::OnHold),
                progress: Some(40),
                ..Default::default()
            },
        ));

        let after = store.project("p1").unwrap();
        assert_eq!(after.status, ProjectStatus::OnHold);
        assert_eq!(after.progress, 40);
        assert_eq!(after.name, before.name);
        assert_eq!(after.description, before.description);
        assert_eq!(after.team, before.team);
        assert_eq!(after.due_date, before.due_date);
    }

    #[test]
    fn test_update_unknown_id_is_a_silent_no_op() {
        let mut store = MemoryEntityStore::seeded();
        let snapshot = store.snapshot();
        let events = recorder(&mut store);

        assert!(!store.update_user(
            "user-404",
            UserPatch {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        ));

        assert_eq!(store.snapshot(), snapshot);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_remove_decreases_size_by_exactly_one() {
        let mut store = MemoryEntityStore::seeded();
        let count = store.meetings().len();

        assert!(store.remove_meeting("meeting-2"));
        assert_eq!(store.meetings().len(), count - 1);
        assert!(store.meeting("meeting-2").is_none());

        assert!(!store.remove_meeting("meeting-2"));
        assert_eq!(store.meetings().len(), count - 1);
    }

    #[test]
    fn test_remove_project_cascades_to_its_tasks_only() {
        let mut store = MemoryEntityStore::from_dataset(Dataset {
            projects: vec![project("p1")],
            tasks: vec![task("t1", "p1"), task("t2", "p2")],
            ..Default::default()
        });

        assert!(store.remove_project("p1"));

        assert!(store.projects().is_empty());
        let remaining: Vec<_> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(remaining, vec!["t2"]);
    }

    #[test]
    fn test_remove_unknown_project_keeps_tasks() {
        let mut store = MemoryEntityStore::from_dataset(Dataset {
            tasks: vec![task("t1", "p1")],
            ..Default::default()
        });

        assert!(!store.remove_project("p1"));
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_remove_user_leaves_references_dangling() {
        let mut store = MemoryEntityStore::seeded();
        let messages = store.messages().len();

        assert!(store.remove_user("user-2"));

        assert!(store.user("user-2").is_none());
        assert_eq!(store.messages().len(), messages);
        assert!(store.task("task-1").unwrap().is_assigned_to("user-2"));
    }

    #[test]
    fn test_observers_see_each_mutation_once_in_order() {
        let mut store = MemoryEntityStore::from_dataset(Dataset {
            projects: vec![project("p1")],
            tasks: vec![task("t1", "p1"), task("t2", "p2"), task("t3", "p1")],
            ..Default::default()
        });
        let events = recorder(&mut store);

        let note_id = store.add_note(NewNote::new("user-1", "n", ""));
        store.update_task("t2", TaskPatch::default());
        store.remove_project("p1");
        store.remove_note("missing");

        let expected = vec![
            StoreEvent::new(Note::KIND, note_id, ChangeKind::Added),
            StoreEvent::new(Task::KIND, "t2", ChangeKind::Updated),
            StoreEvent::new(Project::KIND, "p1", ChangeKind::Removed),
            StoreEvent::new(Task::KIND, "t1", ChangeKind::Removed),
            StoreEvent::new(Task::KIND, "t3", ChangeKind::Removed),
        ];
        assert_eq!(*events.borrow(), expected);
    }

    #[test]
    fn test_set_task_status_stamps_completion() {
        let mut store = MemoryEntityStore::seeded();

        assert!(store.set_task_status("task-2", TaskStatus::Review));
        assert!(store.task("task-2").unwrap().completed_at.is_none());

        assert!(store.set_task_status("task-2", TaskStatus::Completed));
        let task = store.task("task-2").unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(task.completed_at.is_some());

        assert!(!store.set_task_status("task-404", TaskStatus::Completed));
    }

    #[test]
    fn test_status_can_move_freely() {
        let mut store = MemoryEntityStore::seeded();

        store.set_task_status("task-1", TaskStatus::Completed);
        assert!(store.set_task_status("task-1", TaskStatus::ToDo));
        assert_eq!(store.task("task-1").unwrap().status, TaskStatus::ToDo);
    }

    #[test]
    fn test_add_report_stores_draft_unchanged() {
        let mut store = MemoryEntityStore::new();
        let draft = NewReport::new("Audit", "/r.pdf", 1, "application/pdf", "user-3")
            .with_view_permissions(["user-1"]);

        let id = store.add_report(draft.clone());

        let report = store.report(&id).unwrap();
        assert_eq!(report, &Report::from_draft(id.clone(), draft, report.upload_date));
        assert_eq!(report.view_permissions, vec!["user-1"]);
        assert_eq!(store.reports_visible_to("user-3").len(), 1);
        assert_eq!(store.reports_visible_to("user-1").len(), 1);
        assert!(store.reports_visible_to("user-2").is_empty());
    }

    #[test]
    fn test_user_by_email_ignores_case() {
        let store = MemoryEntityStore::seeded();
        assert_eq!(store.user_by_email("DEMO@icmw.de").unwrap().id, "user-1");
        assert!(store.user_by_email("nobody@icmw.de").is_none());
    }

    #[test]
    fn test_tasks_for_project() {
        let store = MemoryEntityStore::seeded();
        let ids: Vec<_> = store
            .tasks_for_project("project-2")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["task-2", "task-5", "task-6"]);
    }

    #[test]
    fn test_unsubscribed_observer_is_not_called() {
        let mut store = MemoryEntityStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let sub = store.subscribe(Box::new(move |_: &StoreEvent| {
            *counter.borrow_mut() += 1;
        }));

        store.add_user(NewUser::new("A", "a@icmw.de", "Dev"));
        assert!(store.unsubscribe(sub));
        store.add_user(NewUser::new("B", "b@icmw.de", "Dev"));

        assert_eq!(*calls.borrow(), 1);
    }
}
