//! Pure state transitions
//!
//! `reduce` never mutates its input. Actions that change nothing (an update for
//! an id that is not present, marking a missing notification) hand back the
//! same `Arc` so subscribers can skip work by pointer comparison.

use std::sync::Arc;

use tracing::debug;
use workboard_domain::Identified;

use super::actions::AppAction;
use super::state::AppState;

/// Apply `action` to `state`, producing the next snapshot.
pub fn reduce(state: &Arc<AppState>, action: AppAction) -> Arc<AppState> {
    match action {
        AppAction::SetLoading(flag) => with(state, |next| next.is_loading = flag),
        AppAction::SetProfiles(items) => with(state, |next| next.profiles = items),
        AppAction::SetClients(items) => with(state, |next| next.clients = items),
        AppAction::SetProjects(items) => with(state, |next| next.projects = items),
        AppAction::SetTasks(items) => with(state, |next| next.tasks = items),
        AppAction::SetTimeEntries(items) => with(state, |next| next.time_entries = items),
        AppAction::SetInvoices(items) => with(state, |next| next.invoices = items),
        AppAction::SetNotifications(items) => with(state, |next| next.notifications = items),
        AppAction::SetDashboardStats(stats) => with(state, |next| next.dashboard_stats = stats),
        AppAction::AddProject(item) => with(state, |next| next.projects.push(item)),
        AppAction::AddTask(item) => with(state, |next| next.tasks.push(item)),
        AppAction::AddTimeEntry(item) => with(state, |next| next.time_entries.push(item)),
        AppAction::AddClient(item) => with(state, |next| next.clients.push(item)),
        AppAction::AddInvoice(item) => with(state, |next| next.invoices.push(item)),
        AppAction::UpdateProject(item) => {
            replace_by_id(state, item, |s| &s.projects, |s| &mut s.projects)
        }
        AppAction::UpdateTask(item) => replace_by_id(state, item, |s| &s.tasks, |s| &mut s.tasks),
        AppAction::UpdateClient(item) => {
            replace_by_id(state, item, |s| &s.clients, |s| &mut s.clients)
        }
        AppAction::MarkNotificationRead(id) => mark_read(state, &id),
    }
}

fn with(state: &Arc<AppState>, change: impl FnOnce(&mut AppState)) -> Arc<AppState> {
    let mut next = AppState::clone(state);
    change(&mut next);
    Arc::new(next)
}

fn replace_by_id<T: Identified + Clone>(
    state: &Arc<AppState>,
    item: T,
    items: fn(&AppState) -> &Vec<T>,
    items_mut: fn(&mut AppState) -> &mut Vec<T>,
) -> Arc<AppState> {
    if !items(state).iter().any(|existing| existing.id() == item.id()) {
        debug!(id = item.id(), "update for unknown id ignored");
        return Arc::clone(state);
    }

    with(state, |next| {
        for existing in items_mut(next).iter_mut().filter(|existing| existing.id() == item.id()) {
            *existing = item.clone();
        }
    })
}

fn mark_read(state: &Arc<AppState>, id: &str) -> Arc<AppState> {
    match state.notifications.iter().position(|n| n.id == id) {
        Some(position) if !state.notifications[position].read => {
            with(state, |next| next.notifications[position].read = true)
        }
        Some(_) => Arc::clone(state),
        None => {
            debug!(id, "mark-read for unknown notification ignored");
            Arc::clone(state)
        }
    }
}

#[cfg(test)]
mod tests {
    use workboard_domain::{DashboardStats, TaskStatus};

    use super::*;
    use crate::test_support::{notification, project, task};

    fn seeded() -> Arc<AppState> {
        Arc::new(AppState {
            projects: vec![project("p1", "Alpha")],
            tasks: vec![task("t1", "p1", TaskStatus::Todo), task("t2", "p1", TaskStatus::Review)],
            notifications: vec![notification("n1", false)],
            ..AppState::default()
        })
    }

    #[test]
    fn set_tasks_replaces_collection_and_keeps_input() {
        let before = seeded();
        let next = reduce(&before, AppAction::SetTasks(vec![task("t9", "p1", TaskStatus::Done)]));

        assert_eq!(next.tasks.len(), 1);
        assert_eq!(next.tasks[0].id, "t9");
        assert_eq!(before.tasks.len(), 2);
        assert_eq!(next.projects, before.projects);
    }

    #[test]
    fn add_appends_at_end() {
        let next = reduce(&seeded(), AppAction::AddTask(task("t3", "p1", TaskStatus::Backlog)));
        let ids: Vec<_> = next.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t1", "t2", "t3"]);
    }

    #[test]
    fn update_replaces_matching_record_in_place() {
        let mut changed = task("t1", "p1", TaskStatus::Todo);
        changed.status = TaskStatus::Done;

        let next = reduce(&seeded(), AppAction::UpdateTask(changed));

        assert_eq!(next.tasks[0].status, TaskStatus::Done);
        assert_eq!(next.tasks[1].id, "t2");
    }

    #[test]
    fn update_with_unknown_id_returns_same_snapshot() {
        let before = seeded();
        let next = reduce(&before, AppAction::UpdateProject(project("p404", "Ghost")));
        assert!(Arc::ptr_eq(&before, &next));
    }

    #[test]
    fn mark_read_flips_only_target() {
        let before = Arc::new(AppState {
            notifications: vec![notification("n1", false), notification("n2", false)],
            ..AppState::default()
        });

        let next = reduce(&before, AppAction::MarkNotificationRead("n2".into()));

        assert!(!next.notifications[0].read);
        assert!(next.notifications[1].read);
    }

    #[test]
    fn mark_read_of_missing_notification_is_noop() {
        let before = seeded();
        let next = reduce(&before, AppAction::MarkNotificationRead("n404".into()));
        assert!(Arc::ptr_eq(&before, &next));
    }

    #[test]
    fn stats_can_be_set_and_cleared() {
        let stats = DashboardStats { total_tasks: 3, ..DashboardStats::default() };
        let with_stats = reduce(&seeded(), AppAction::SetDashboardStats(Some(stats)));
        assert_eq!(with_stats.dashboard_stats, Some(stats));

        let cleared = reduce(&with_stats, AppAction::SetDashboardStats(None));
        assert_eq!(cleared.dashboard_stats, None);
    }
}
