//! Error types for the plan engine.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all plan operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// A task id that is not `<phase>.<section>.<task>`
    #[error("Malformed task ID '{id}': expected <phase>.<section>.<task>")]
    MalformedId { id: String },
    /// No task or phase matches the given id or prefix
    #[error("{kind} '{query}' not found{}", format_available(.available))]
    NotFound {
        kind: EntityKind,
        query: String,
        /// Ids of existing entities of the same kind
        available: Vec<String>,
    },
    /// A partial id matches more than one entity
    #[error(
        "'{query}' is ambiguous; it matches: {}",
        .candidates.join(", ")
    )]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
    /// Status value outside the allowed set
    #[error(
        "Invalid status '{value}'. Use: pending, in_progress, completed, blocked, skipped"
    )]
    InvalidStatus { value: String },
    /// Priority value outside the allowed set
    #[error("Invalid priority '{value}'. Use: low, medium, high")]
    InvalidPriority { value: String },
    /// Schema-level violation at a specific document path
    #[error("Validation failed at '{path}': {message}")]
    Validation { path: String, message: String },
    /// Document is missing a required top-level key
    #[error("Invalid plan document: {message}")]
    Structural { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Refusing to overwrite an existing plan file
    #[error("{} already exists. Use --force to overwrite.", .path.display())]
    AlreadyExists { path: PathBuf },
    /// File system operation errors
    #[error("File system error at path '{}': {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Kind of entity a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Task,
    Phase,
    Entity,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EntityKind::Task => "Task",
            EntityKind::Phase => "Phase",
            EntityKind::Entity => "Task or phase",
        })
    }
}

/// Most ids listed after a failed lookup.
const AVAILABLE_LIMIT: usize = 10;

fn format_available(ids: &[String]) -> String {
    match ids.len() {
        0 => String::new(),
        n if n <= AVAILABLE_LIMIT => format!(". Available: {}", ids.join(", ")),
        n => format!(
            ". Available: {} and {} more",
            ids[..AVAILABLE_LIMIT].join(", "),
            n - AVAILABLE_LIMIT
        ),
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    pub(crate) fn not_found(kind: EntityKind, query: impl Into<String>, available: Vec<String>) -> Self {
        Self::NotFound {
            kind,
            query: query.into(),
            available,
        }
    }

    pub(crate) fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// True for lookups that matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PlanError::NotFound { .. })
    }
}

/// Result type alias for plan operations
pub type Result<T> = std::result::Result<T, PlanError>;
