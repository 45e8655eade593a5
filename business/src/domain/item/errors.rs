#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.not_found")]
    NotFound,
    #[error("item.invalid_quantity")]
    InvalidQuantity,
    #[error("item.list_not_found")]
    ListNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
