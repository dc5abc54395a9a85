//! Common error types used across the workspace.
//!
//! Every layer converts into [`RosterError`] via `#[from]`; the HTTP adapter
//! surfaces each variant's `Display` string as the response message, so the
//! strings here are part of the wire contract.

/// Top-level error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The request payload or filter failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record matched the requested id.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A stored record already carries the highest representable id, so no
    /// id is left for a new record.
    #[error("Error assigning user id")]
    IdsExhausted,
}

/// Rejected request payloads and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A create/replace payload is missing `name` or `age`.
    #[error("Request body must contain both name and age fields")]
    MissingNameOrAge,

    /// A partial-update payload supplied neither `name` nor `age`.
    #[error("Request body must contain at least one field to update")]
    EmptyUpdate,

    /// The request body could not be parsed into the expected JSON shape.
    #[error("Request body must be valid JSON")]
    MalformedBody,

    /// An age bound in the list query was not a number.
    #[error("Query parameters minAge and maxAge must be numeric")]
    NonNumericAgeBound,
}

/// No record with the requested id exists.
///
/// Keeps the id exactly as it arrived (it may not even be numeric); the
/// display string is the fixed wire message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("User Not Found")]
pub struct NotFoundError {
    /// The id that failed to match, as received.
    pub id: String,
}

impl NotFoundError {
    /// Build from anything displayable as an id.
    pub fn new(id: impl ToString) -> Self {
        Self { id: id.to_string() }
    }
}

/// A failure against the backing store, fatal to the current operation.
///
/// The read/write direction decides the message the client sees; the
/// underlying cause rides along as the error source for logging.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Loading or parsing the stored collection failed.
    #[error("Error reading file")]
    Read(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Serializing or writing the collection failed.
    #[error("Error writing file")]
    Write(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wrap a read-side failure.
    pub fn read(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Read(source.into())
    }

    /// Wrap a write-side failure.
    pub fn write(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Write(source.into())
    }
}
