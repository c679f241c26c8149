//! Task CRUD and id allocation.

use super::{StorageKey, Store};
use chrono::Utc;
use mockdesk_core::error::MockError;
use mockdesk_core::models::{CreateTaskRequest, Task, UpdateTaskRequest};
use mockdesk_core::query::{Page, TaskQuery};
use rand::Rng;
use std::collections::HashSet;
use tracing::info;

const TASK_ID_MIN: u32 = 1000;
const TASK_ID_MAX: u32 = 9999;

/// Random draws before falling back to the lowest free id.
const RANDOM_ID_ATTEMPTS: usize = 32;

/// Pick a `TASK-<4 digits>` id not used by any task in `existing`.
pub(crate) fn allocate_task_id<R: Rng>(existing: &[Task], rng: &mut R) -> Result<String, MockError> {
    let taken: HashSet<&str> = existing.iter().map(|t| t.id.as_str()).collect();

    for _ in 0..RANDOM_ID_ATTEMPTS {
        let id = format!("TASK-{}", rng.gen_range(TASK_ID_MIN..=TASK_ID_MAX));
        if !taken.contains(id.as_str()) {
            return Ok(id);
        }
    }

    (TASK_ID_MIN..=TASK_ID_MAX)
        .map(|n| format!("TASK-{n}"))
        .find(|id| !taken.contains(id.as_str()))
        .ok_or(MockError::Exhausted("task"))
}

impl Store {
    /// Filter and paginate the task collection.
    pub async fn list_tasks(&self, query: &TaskQuery) -> Result<Page<Task>, MockError> {
        let tasks = self.load::<Task>(StorageKey::Tasks).await?;
        Ok(query.run(tasks))
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, MockError> {
        self.load::<Task>(StorageKey::Tasks)
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(MockError::NotFound("Task"))
    }

    /// Create a task at the front of the collection.
    pub async fn create_task(&self, request: CreateTaskRequest) -> Result<Task, MockError> {
        request.validate()?;
        let task = self
            .mutate(StorageKey::Tasks, |tasks: &mut Vec<Task>| {
                let id = allocate_task_id(tasks, &mut rand::thread_rng())?;
                let task = request.into_task(id, Utc::now());
                tasks.insert(0, task.clone());
                Ok(task)
            })
            .await?;
        info!("task created {}", task.id);
        Ok(task)
    }

    pub async fn update_task(&self, id: &str, patch: UpdateTaskRequest) -> Result<Task, MockError> {
        patch.validate()?;
        let task = self
            .mutate(StorageKey::Tasks, |tasks: &mut Vec<Task>| {
                let task = tasks
                    .iter_mut()
                    .find(|t| t.id == id)
                    .ok_or(MockError::NotFound("Task"))?;
                task.apply(patch);
                Ok(task.clone())
            })
            .await?;
        info!("task updated {}", task.id);
        Ok(task)
    }

    /// Remove a task. Returns whether a record was removed; a missing id
    /// is not an error.
    pub async fn delete_task(&self, id: &str) -> Result<bool, MockError> {
        let removed = self
            .mutate(StorageKey::Tasks, |tasks: &mut Vec<Task>| {
                let before = tasks.len();
                tasks.retain(|t| t.id != id);
                Ok(tasks.len() != before)
            })
            .await?;
        info!("task delete {id} (removed: {removed})");
        Ok(removed)
    }
}
