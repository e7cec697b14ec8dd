//! Task commands

use tracing::info;
use workboard_core::{AppAction, TaskQuery};
use workboard_domain::{NewTask, Result, Task, TaskPatch, TaskStatus, WorkboardError};

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_logged, require};

/// Re-fetch tasks matching `query` into the store
pub async fn refresh_tasks(ctx: &AppContext, query: &TaskQuery) -> Result<usize> {
    execute_logged("tasks::refresh_tasks", || ctx.loader.reload_tasks(query)).await
}

pub async fn create_task(ctx: &AppContext, task: NewTask) -> Result<Task> {
    execute_logged("tasks::create_task", || async {
        require("title", &task.title)?;
        require("project", &task.project_id)?;
        if task.estimated_hours < 0.0 {
            return Err(WorkboardError::InvalidInput(
                "estimated hours cannot be negative".to_string(),
            ));
        }

        let created = ctx.gateway.create_task(&task).await?;
        info!(task_id = %created.id, project_id = %created.project_id, "Task created");
        ctx.store.dispatch(AppAction::AddTask(created.clone()));
        Ok(created)
    })
    .await
}

pub async fn update_task(ctx: &AppContext, id: &str, patch: TaskPatch) -> Result<Task> {
    execute_logged("tasks::update_task", || async {
        require("task id", id)?;
        if patch.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
            return Err(WorkboardError::InvalidInput("title is required".to_string()));
        }

        let updated = ctx.gateway.update_task(id, &patch).await?;
        ctx.store.dispatch(AppAction::UpdateTask(updated.clone()));
        Ok(updated)
    })
    .await
}

/// Move a task to another board column
pub async fn update_task_status(ctx: &AppContext, id: &str, status: TaskStatus) -> Result<Task> {
    update_task(ctx, id, TaskPatch::status(status)).await
}

pub async fn delete_task(ctx: &AppContext, id: &str) -> Result<()> {
    execute_logged("tasks::delete_task", || async {
        require("task id", id)?;
        ctx.gateway.delete_task(id).await?;

        let remaining: Vec<Task> =
            ctx.store.snapshot().tasks.iter().filter(|task| task.id != id).cloned().collect();
        ctx.store.dispatch(AppAction::SetTasks(remaining));
        info!(task_id = %id, "Task deleted");
        Ok(())
    })
    .await
}

/// Tasks due today for the signed-in user; read-only, not stored
pub async fn today_tasks(ctx: &AppContext) -> Result<Vec<Task>> {
    execute_logged("tasks::today_tasks", || ctx.gateway.today_tasks()).await
}
