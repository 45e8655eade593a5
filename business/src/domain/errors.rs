/// Boxed driver error kept as the `source` of a [`RepositoryError`].
pub type StorageError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
/// Storage failures keep the original driver error as their source; nothing
/// is retried or rewritten on the way up.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.foreign_key_violation")]
    ForeignKeyViolation {
        constraint: Option<String>,
        #[source]
        source: StorageError,
    },
    #[error("repository.duplicated")]
    Duplicated(#[source] StorageError),
    #[error("repository.connection")]
    Connection(#[source] StorageError),
    #[error("repository.database_error")]
    DatabaseError(#[source] StorageError),
}

impl RepositoryError {
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, RepositoryError::ForeignKeyViolation { .. })
    }

    /// Name of the violated constraint, when the store reported one.
    pub fn constraint(&self) -> Option<&str> {
        match self {
            RepositoryError::ForeignKeyViolation { constraint, .. } => constraint.as_deref(),
            _ => None,
        }
    }
}
