pub mod db;
mod error;
pub mod schema;
pub mod session;
pub mod shopping_user {
    pub mod entity;
    pub mod repository;
}
pub mod item_list {
    pub mod entity;
    pub mod repository;
}
pub mod item {
    pub mod entity;
    pub mod repository;
}
pub mod item_picture {
    pub mod entity;
    pub mod repository;
}

pub use db::{DatabaseConfig, DatabaseError, run_migrations};
pub use session::{PgSession, PgSessionFactory};
