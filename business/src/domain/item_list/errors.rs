#[derive(Debug, thiserror::Error)]
pub enum ItemListError {
    #[error("item_list.not_found")]
    NotFound,
    #[error("item_list.already_realized")]
    AlreadyRealized,
    #[error("item_list.due_before_creation")]
    DueBeforeCreation,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
