#[derive(Debug, thiserror::Error)]
pub enum ItemPictureError {
    #[error("item_picture.not_found")]
    NotFound,
    /// The store rejected the owner reference; the driver error is kept.
    #[error("item_picture.user_not_found")]
    UserNotFound(#[source] crate::domain::errors::RepositoryError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
