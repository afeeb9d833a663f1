use deptrec_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Operation requires a persisted instance but the id is unset
    InvalidState,
    /// A row that should exist does not
    NotFound,
    InvalidInput,

    // Integration
    Persistence,
    Serialization,
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidState => "ERR_INVALID_STATE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus optional
/// context for humans reading logs.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Mapper-level failures raised before or after talking to the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapperError {
    /// The instance has no id, so there is no row to act on
    #[error("Can't {op} a department that doesn't exist in the database")]
    NotPersisted { op: &'static str },

    /// The statement ran but touched no row
    #[error("No department found with id {id}, or deletion failed")]
    RowNotFound { id: i64 },
}

impl From<MapperError> for ExError {
    fn from(err: MapperError) -> Self {
        let message = err.to_string();
        match err {
            MapperError::NotPersisted { op } => ExError::new(ExErrorKind::InvalidState)
                .with_op(op)
                .with_message(message),

            MapperError::RowNotFound { id } => ExError::new(ExErrorKind::NotFound)
                .with_op("delete")
                .with_entity_id(id.to_string())
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_entity() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("delete")
            .with_entity_id("42")
            .with_message("gone");

        assert_eq!(
            err.to_string(),
            "[ERR_NOT_FOUND] in operation 'delete': gone (entity_id: 42)"
        );
    }

    #[test]
    fn test_display_bare_kind() {
        let err = ExError::new(ExErrorKind::Config);
        assert_eq!(err.to_string(), "[ERR_CONFIG]");
    }
}
