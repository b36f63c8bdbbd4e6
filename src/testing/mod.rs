use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewProject, Project};
use crate::database::repository::ProjectStore;

/// In-memory substitute for the Postgres store, counting every call
pub struct MemoryProjectStore {
    rows: Mutex<BTreeMap<i64, Project>>,
    next_id: Mutex<i64>,
    calls: AtomicUsize,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::with_projects(Vec::new())
    }

    /// Seed with existing rows; new ids continue after the highest seeded id
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let next_id = projects.iter().map(|p| p.id + 1).max().unwrap_or(1);
        Self {
            rows: Mutex::new(projects.into_iter().map(|p| (p.id, p)).collect()),
            next_id: Mutex::new(next_id),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of store operations performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn list(&self) -> Result<Vec<Project>, DatabaseError> {
        self.record_call();
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Project, DatabaseError> {
        self.record_call();
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| DatabaseError::NotFound("Project not found".to_string()))
    }

    async fn create(&self, project: NewProject) -> Result<Project, DatabaseError> {
        self.record_call();
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            id
        };
        let project = project.with_id(id);
        self.rows.lock().unwrap().insert(id, project.clone());
        Ok(project)
    }

    async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        self.record_call();
        match self.rows.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(DatabaseError::NotFound("Project not found".to_string())),
        }
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

/// Store whose every operation fails as if the pool were unreachable
pub struct FailingProjectStore;

#[async_trait]
impl ProjectStore for FailingProjectStore {
    async fn list(&self) -> Result<Vec<Project>, DatabaseError> {
        Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn get(&self, _id: i64) -> Result<Project, DatabaseError> {
        Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _project: NewProject) -> Result<Project, DatabaseError> {
        Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i64) -> Result<(), DatabaseError> {
        Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = MemoryProjectStore::new();
        let first = store
            .create(NewProject {
                title: "a".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        store.delete(first.id).await.unwrap();
        let second = store
            .create(NewProject {
                title: "b".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.calls(), 3);
    }
}
