use business::domain::errors::RepositoryError;

#[derive(Debug, PartialEq, Eq)]
enum ErrorClass {
    ForeignKey(Option<String>),
    Unique,
    Connection,
    Other,
}

fn classify(err: &sqlx::Error) -> ErrorClass {
    match err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            ErrorClass::ForeignKey(db.constraint().map(str::to_owned))
        }
        sqlx::Error::Database(db) if db.is_unique_violation() => ErrorClass::Unique,
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => ErrorClass::Connection,
        _ => ErrorClass::Other,
    }
}

/// Translates a driver error, keeping it as the `source`.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match classify(&err) {
        ErrorClass::ForeignKey(constraint) => RepositoryError::ForeignKeyViolation {
            constraint,
            source: Box::new(err),
        },
        ErrorClass::Unique => RepositoryError::Duplicated(Box::new(err)),
        ErrorClass::Connection => RepositoryError::Connection(Box::new(err)),
        ErrorClass::Other => RepositoryError::DatabaseError(Box::new(err)),
    }
}
