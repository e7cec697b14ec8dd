//! Immutable application snapshot

use serde::Serialize;
use workboard_domain::{
    Client, DashboardStats, Identified, Invoice, Notification, Profile, Project, Task, TimeEntry,
};

/// Everything the dashboard knows about the workspace at one point in time.
///
/// Snapshots are never mutated in place; the reducer produces a new one per
/// action and subscribers compare by pointer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub profiles: Vec<Profile>,
    pub clients: Vec<Client>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub time_entries: Vec<TimeEntry>,
    pub invoices: Vec<Invoice>,
    pub notifications: Vec<Notification>,
    pub is_loading: bool,
    /// `None` until the backend (or a local fallback) supplies numbers
    pub dashboard_stats: Option<DashboardStats>,
}

impl AppState {
    pub fn profile(&self, id: &str) -> Option<&Profile> {
        find(&self.profiles, id)
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        find(&self.clients, id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        find(&self.projects, id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        find(&self.tasks, id)
    }

    pub fn time_entry(&self, id: &str) -> Option<&TimeEntry> {
        find(&self.time_entries, id)
    }

    /// Tasks belonging to `project_id`
    pub fn project_tasks<'a>(&'a self, project_id: &'a str) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |task| task.project_id == project_id)
    }

    /// Time entries logged against `project_id`
    pub fn project_entries<'a>(
        &'a self,
        project_id: &'a str,
    ) -> impl Iterator<Item = &'a TimeEntry> {
        self.time_entries.iter().filter(move |entry| entry.project_id == project_id)
    }

    /// Unread notifications addressed to `user_id`
    pub fn unread_notifications<'a>(
        &'a self,
        user_id: &'a str,
    ) -> impl Iterator<Item = &'a Notification> {
        self.notifications.iter().filter(move |n| n.user_id == user_id && !n.read)
    }
}

fn find<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
