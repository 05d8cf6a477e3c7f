use pantry_core_types::RequestId;
use thiserror::Error;

/// Result type alias using PantryError
pub type Result<T> = std::result::Result<T, PantryError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and tests) can match
/// on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InsufficientStock,
    ConstraintViolation,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InsufficientStock => "ERR_INSUFFICIENT_STOCK",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context. This is the error
/// that crosses crate boundaries (store, engine, CLI).
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

    /// Add entity context (item id or item name)
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

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

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

/// Domain error taxonomy for pantry operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PantryError {
    /// A new item failed validation
    #[error("Invalid item: {reason}")]
    InvalidItem { reason: String },

    /// A sale request failed validation
    #[error("Invalid sale: {reason}")]
    InvalidSale { reason: String },

    /// The stock-floor policy rejected a sale
    #[error("Insufficient stock for {item_name}: {available} available, {requested} requested")]
    InsufficientStock {
        item_name: String,
        available: i64,
        requested: i64,
    },

    /// Export encoding failed
    #[error("Export failed: {reason}")]
    Export { reason: String },
}

impl PantryError {
    /// Stable kind for this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            PantryError::InvalidItem { .. } | PantryError::InvalidSale { .. } => {
                ExErrorKind::InvalidInput
            }
            PantryError::InsufficientStock { .. } => ExErrorKind::InsufficientStock,
            PantryError::Export { .. } => ExErrorKind::Serialization,
        }
    }
}

impl From<PantryError> for ExError {
    fn from(err: PantryError) -> Self {
        let kind = err.kind();
        let ex = ExError::new(kind).with_message(err.to_string());
        match err {
            PantryError::InsufficientStock { item_name, .. } => ex.with_entity_id(item_name),
            _ => ex,
        }
    }
}

impl From<csv::Error> for PantryError {
    fn from(err: csv::Error) -> Self {
        PantryError::Export {
            reason: err.to_string(),
        }
    }
}
