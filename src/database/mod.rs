pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use models::{NewProject, Project};
pub use repository::{PgProjectStore, ProjectStore};
