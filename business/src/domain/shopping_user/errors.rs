#[derive(Debug, thiserror::Error)]
pub enum ShoppingUserError {
    #[error("shopping_user.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
