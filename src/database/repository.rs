use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::database::manager::DatabaseError;
use crate::database::models::project::{normalize_text, NewProject, Project};

const SELECT_COLUMNS: &str =
    "id::bigint AS id, title, description, image, tag, giturl, previewurl";

/// Persistence operations over the projects table.
///
/// Implementations hold no per-request state; every call is a single
/// self-contained statement that may run concurrently with any other.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects, in no particular order
    async fn list(&self) -> Result<Vec<Project>, DatabaseError>;

    /// Project by id, or `DatabaseError::NotFound`
    async fn get(&self, id: i64) -> Result<Project, DatabaseError>;

    /// Insert and return the project with its store-assigned id
    async fn create(&self, project: NewProject) -> Result<Project, DatabaseError>;

    /// Remove by id; `DatabaseError::NotFound` when no row was removed
    async fn delete(&self, id: i64) -> Result<(), DatabaseError>;

    /// Connectivity probe for health reporting
    async fn ping(&self) -> Result<(), DatabaseError>;
}

/// Raw row shape; nullable columns come back as options
#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    description: Option<String>,
    image: Option<String>,
    tag: Option<Vec<String>>,
    giturl: Option<String>,
    previewurl: Option<String>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: normalize_text(row.description),
            image: normalize_text(row.image),
            tag: row.tag.unwrap_or_default(),
            git_url: normalize_text(row.giturl),
            preview_url: normalize_text(row.previewurl),
        }
    }
}

/// Postgres-backed store. `tag` is a native `text[]` column.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn list(&self) -> Result<Vec<Project>, DatabaseError> {
        let sql = format!("SELECT {} FROM projects", SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, ProjectRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Project, DatabaseError> {
        let sql = format!("SELECT {} FROM projects WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, ProjectRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Project::from)
            .ok_or_else(|| DatabaseError::NotFound("Project not found".to_string()))
    }

    async fn create(&self, project: NewProject) -> Result<Project, DatabaseError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO projects (title, description, image, tag, giturl, previewurl)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id::bigint
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image)
        .bind(&project.tag)
        .bind(&project.git_url)
        .bind(&project.preview_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(project.with_id(id))
    }

    async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        match result.rows_affected() {
            0 => Err(DatabaseError::NotFound("Project not found".to_string())),
            1 => Ok(()),
            n => Err(DatabaseError::QueryError(format!(
                "delete of project {} removed {} rows",
                id, n
            ))),
        }
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
