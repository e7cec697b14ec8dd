//! Project commands

use tracing::info;
use workboard_core::{AppAction, ProjectQuery};
use workboard_domain::constants::COPY_SUFFIX;
use workboard_domain::{
    NewProject, Project, ProjectPatch, ProjectStatus, Result, WorkboardError,
};

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_logged, require};

/// Re-fetch projects matching `query` into the store
pub async fn refresh_projects(ctx: &AppContext, query: ProjectQuery) -> Result<usize> {
    execute_logged("projects::refresh_projects", || async {
        let projects = ctx.gateway.list_projects(&query).await?;
        let count = projects.len();
        ctx.store.dispatch(AppAction::SetProjects(projects));
        Ok(count)
    })
    .await
}

pub async fn create_project(ctx: &AppContext, project: NewProject) -> Result<Project> {
    execute_logged("projects::create_project", || create_and_add(ctx, &project)).await
}

pub async fn update_project(ctx: &AppContext, id: &str, patch: ProjectPatch) -> Result<Project> {
    execute_logged("projects::update_project", || patch_and_replace(ctx, id, &patch)).await
}

pub async fn delete_project(ctx: &AppContext, id: &str) -> Result<()> {
    execute_logged("projects::delete_project", || async {
        require("project id", id)?;
        ctx.gateway.delete_project(id).await?;

        let remaining: Vec<Project> = ctx
            .store
            .snapshot()
            .projects
            .iter()
            .filter(|project| project.id != id)
            .cloned()
            .collect();
        ctx.store.dispatch(AppAction::SetProjects(remaining));
        info!(project_id = %id, "Project deleted");
        Ok(())
    })
    .await
}

/// Create a not-started copy of an existing project named `"<name> (Copy)"`
pub async fn duplicate_project(ctx: &AppContext, id: &str) -> Result<Project> {
    execute_logged("projects::duplicate_project", || async {
        let source = ctx
            .store
            .snapshot()
            .project(id)
            .cloned()
            .ok_or_else(|| WorkboardError::NotFound(format!("project {id}")))?;

        let copy = duplicate_of(&source);
        let created = create_and_add(ctx, &copy).await?;
        info!(source_id = %id, project_id = %created.id, "Project duplicated");
        Ok(created)
    })
    .await
}

/// Archiving marks the project cancelled
pub async fn archive_project(ctx: &AppContext, id: &str) -> Result<Project> {
    execute_logged("projects::archive_project", || async move {
        patch_and_replace(ctx, id, &ProjectPatch::status(ProjectStatus::Cancelled)).await
    })
    .await
}

fn duplicate_of(source: &Project) -> NewProject {
    NewProject {
        name: format!("{}{COPY_SUFFIX}", source.name),
        status: ProjectStatus::NotStarted,
        ..NewProject::from(source)
    }
}

async fn create_and_add(ctx: &AppContext, project: &NewProject) -> Result<Project> {
    require("name", &project.name)?;
    require("owner", &project.owner_id)?;
    if project.monthly_hour_allocation < 0.0 {
        return Err(WorkboardError::InvalidInput(
            "monthly hour allocation cannot be negative".to_string(),
        ));
    }

    let created = ctx.gateway.create_project(project).await?;
    ctx.store.dispatch(AppAction::AddProject(created.clone()));
    Ok(created)
}

async fn patch_and_replace(ctx: &AppContext, id: &str, patch: &ProjectPatch) -> Result<Project> {
    require("project id", id)?;
    if patch.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
        return Err(WorkboardError::InvalidInput("name is required".to_string()));
    }

    let updated = ctx.gateway.update_project(id, patch).await?;
    ctx.store.dispatch(AppAction::UpdateProject(updated.clone()));
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use workboard_domain::Priority;

    use super::*;

    #[test]
    fn duplicate_resets_status_and_suffixes_name() {
        let source = Project {
            id: "p1".into(),
            name: "Website".into(),
            description: "Relaunch".into(),
            client_id: Some("c1".into()),
            owner_id: "u1".into(),
            priority: Priority::High,
            status: ProjectStatus::Completed,
            deadline: None,
            monthly_hour_allocation: 40.0,
            tags: vec!["web".into()],
            created_at: None,
            updated_at: None,
        };

        let copy = duplicate_of(&source);

        assert_eq!(copy.name, "Website (Copy)");
        assert_eq!(copy.status, ProjectStatus::NotStarted);
        assert_eq!(copy.client_id.as_deref(), Some("c1"));
        assert_eq!(copy.tags, vec!["web".to_string()]);
    }
}
