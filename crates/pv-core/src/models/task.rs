//! Task model definition and related functionality.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{Priority, Status};

/// The atomic unit of work inside a phase.
///
/// `agent_type` and `depends_on` are always written, as `null` and `[]`
/// when unset, unless the task was read without them or was compacted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "TaskDocument", into = "TaskDocument")]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Task {
    /// Globally unique id, `<phase>.<section>.<task>`
    pub id: String,

    /// Short human-readable title
    pub title: String,

    /// Current status
    pub status: Status,

    /// Free-form agent label; any non-empty string is accepted
    pub agent_type: Option<String>,

    /// Ids of tasks that must be completed first
    pub depends_on: Vec<String>,

    /// Timestamps and bookkeeping
    pub tracking: Tracking,

    pub priority: Option<Priority>,

    pub estimated_minutes: Option<u64>,

    /// Nested checklist; not counted in progress rollups
    pub subtasks: Option<Vec<Value>>,

    /// Fields this version does not know about, kept verbatim
    pub extra: Map<String, Value>,

    #[serde(skip)]
    pub(crate) omitted: OmittedKeys,
}

/// Tasks are equal when they would be written identically.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.status == other.status
            && self.agent_type == other.agent_type
            && self.depends_on == other.depends_on
            && self.tracking == other.tracking
            && self.priority == other.priority
            && self.estimated_minutes == other.estimated_minutes
            && self.subtasks == other.subtasks
            && self.extra == other.extra
            && self.written_keys() == other.written_keys()
    }
}

/// Optional keys a task was stored without.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct OmittedKeys {
    agent_type: bool,
    depends_on: bool,
}

impl OmittedKeys {
    const BOTH: Self = Self {
        agent_type: true,
        depends_on: true,
    };
}

/// On-disk shape of a task. An outer `None` means the key is absent.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[cfg_attr(feature = "schema", schemars(rename = "Task"))]
struct TaskDocument {
    id: String,
    title: String,
    status: Status,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    agent_type: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    depends_on: Option<Vec<String>>,

    #[serde(default)]
    tracking: Tracking,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    estimated_minutes: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtasks: Option<Vec<Value>>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Maps an explicit `null` to `Some(None)` so it stays distinct from a
/// missing key.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<TaskDocument> for Task {
    fn from(doc: TaskDocument) -> Self {
        Self {
            omitted: OmittedKeys {
                agent_type: doc.agent_type.is_none(),
                depends_on: doc.depends_on.is_none(),
            },
            id: doc.id,
            title: doc.title,
            status: doc.status,
            agent_type: doc.agent_type.flatten(),
            depends_on: doc.depends_on.unwrap_or_default(),
            tracking: doc.tracking,
            priority: doc.priority,
            estimated_minutes: doc.estimated_minutes,
            subtasks: doc.subtasks,
            extra: doc.extra,
        }
    }
}

impl From<Task> for TaskDocument {
    fn from(task: Task) -> Self {
        let (write_agent, write_deps) = task.written_keys();
        let agent_type = write_agent.then_some(task.agent_type);
        let depends_on = write_deps.then_some(task.depends_on);
        Self {
            id: task.id,
            title: task.title,
            status: task.status,
            agent_type,
            depends_on,
            tracking: task.tracking,
            priority: task.priority,
            estimated_minutes: task.estimated_minutes,
            subtasks: task.subtasks,
            extra: task.extra,
        }
    }
}

impl Task {
    /// A fresh pending task with empty tracking.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: Status::Pending,
            agent_type: None,
            depends_on: Vec::new(),
            tracking: Tracking::default(),
            priority: None,
            estimated_minutes: None,
            subtasks: None,
            extra: Map::new(),
            omitted: OmittedKeys::default(),
        }
    }

    /// Whether `agent_type` and `depends_on` appear in the document.
    fn written_keys(&self) -> (bool, bool) {
        (
            self.agent_type.is_some() || !self.omitted.agent_type,
            !self.depends_on.is_empty() || !self.omitted.depends_on,
        )
    }

    /// Applies a status transition, stamping `started_at` / `completed_at`
    /// when they are not already set.
    pub fn transition(&mut self, status: Status, now: Timestamp) {
        self.status = status;
        match status {
            Status::InProgress => {
                self.tracking.started_at.get_or_insert(now);
            }
            Status::Completed => {
                self.tracking.completed_at.get_or_insert(now);
            }
            Status::Pending | Status::Blocked | Status::Skipped => {}
        }
    }

    /// Appends a line to `tracking.notes`.
    pub fn append_note(&mut self, note: &str) {
        self.tracking.notes = Some(match self.tracking.notes.take() {
            Some(existing) if !existing.is_empty() => format!("{existing}\n{note}"),
            _ => note.to_string(),
        });
    }

    /// Strips a completed task to its id, title, status and completion time.
    ///
    /// Returns `false` when the task was already minimal or is not completed.
    pub fn compact(&mut self) -> bool {
        if self.status != Status::Completed {
            return false;
        }

        let mut minimal = Task::new(self.id.clone(), self.title.clone());
        minimal.status = Status::Completed;
        minimal.tracking.completed_at = self.tracking.completed_at;
        minimal.omitted = OmittedKeys::BOTH;

        if *self == minimal {
            return false;
        }
        *self = minimal;
        true
    }
}

/// Tracking sub-object of a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Tracking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub started_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub completed_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent_minutes: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Number of attempts made so far
    #[serde(default, skip_serializing_if = "is_zero")]
    pub attempts: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_agent_id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}
