//! The static task record set.
//!
//! Records are built once at startup and never change afterwards. Status and
//! priority are closed enumerations; their serialized forms are the lowercase
//! strings clients filter on.

use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;

/// Progress state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Display label used by the home page.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

/// Relative importance of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Returned when a string is not one of the enumerated values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl FromStr for TaskStatus {
    type Err = ParseEnumError;

    /// Exact, case-sensitive match on the serialized form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "status",
                value: s.to_string(),
            })
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseEnumError {
                kind: "priority",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
}

impl Task {
    pub fn new(id: u64, title: impl Into<String>, status: TaskStatus, priority: Priority) -> Self {
        Self {
            id,
            title: title.into(),
            status,
            priority,
        }
    }
}

/// Payload of the task listing endpoint.
#[derive(Debug, Serialize)]
pub struct TaskList<'a> {
    pub tasks: Vec<&'a Task>,
    pub count: usize,
}

impl<'a> TaskList<'a> {
    fn from_tasks(tasks: Vec<&'a Task>) -> Self {
        let count = tasks.len();
        Self { tasks, count }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskStoreError {
    #[error("Task id must be positive")]
    ZeroId,
    #[error("Duplicate task id: {0}")]
    DuplicateId(u64),
}

/// Read-only record set, in insertion order.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Builds a store, rejecting zero or repeated ids.
    pub fn new(tasks: Vec<Task>) -> Result<Self, TaskStoreError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if task.id == 0 {
                return Err(TaskStoreError::ZeroId);
            }
            if !seen.insert(task.id) {
                return Err(TaskStoreError::DuplicateId(task.id));
            }
        }
        Ok(Self { tasks })
    }

    /// The demonstration record set served by the application.
    pub fn seeded() -> Result<Self, TaskStoreError> {
        use Priority::*;
        use TaskStatus::*;

        Self::new(vec![
            Task::new(1, "Setup Kubernetes cluster", Completed, High),
            Task::new(2, "Configure Terraform", Completed, High),
            Task::new(3, "Deploy application", InProgress, Medium),
            Task::new(4, "Setup monitoring", Pending, Low),
            Task::new(5, "Configure CI/CD", Pending, Medium),
        ])
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Lists tasks, optionally restricted to one status.
    ///
    /// An empty filter lists everything. A filter that names no known status
    /// matches nothing rather than failing.
    pub fn list(&self, status: Option<&str>) -> TaskList<'_> {
        match status.filter(|s| !s.is_empty()) {
            None => TaskList::from_tasks(self.tasks.iter().collect()),
            Some(filter) => match filter.parse::<TaskStatus>() {
                Ok(status) => TaskList::from_tasks(
                    self.tasks.iter().filter(|t| t.status == status).collect(),
                ),
                Err(_) => TaskList::from_tasks(Vec::new()),
            },
        }
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}
