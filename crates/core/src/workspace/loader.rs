//! Bulk load of every collection into the store
//!
//! Fetches run concurrently. A failed fetch never aborts the load; the
//! collection is replaced with an empty one and the failure is reported.
//! Results are committed in one batch, and only if no fetch was rejected as
//! unauthorized and the store was not reset while the fetches were in flight.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use workboard_domain::Result;

use super::ports::{ProjectQuery, TaskQuery, TimeEntryQuery, WorkspaceGateway};
use crate::store::{AppAction, Store};

/// Collections whose fetch failed during a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub failed: Vec<&'static str>,
    /// Results were not committed: the session ended during the load
    pub discarded: bool,
    unauthorized: bool,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && !self.discarded
    }

    fn settle<T>(&mut self, collection: &'static str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(collection, error = %err, "fetch failed; using empty value");
                self.unauthorized |= err.is_unauthorized();
                self.failed.push(collection);
                None
            }
        }
    }
}

/// Populates the [`Store`] from a [`WorkspaceGateway`]
pub struct WorkspaceLoader {
    gateway: Arc<dyn WorkspaceGateway>,
    store: Arc<Store>,
}

impl WorkspaceLoader {
    pub fn new(gateway: Arc<dyn WorkspaceGateway>, store: Arc<Store>) -> Self {
        Self { gateway, store }
    }

    /// Fetch users, clients, projects, tasks, time entries and dashboard
    /// stats, then replace each collection.
    #[instrument(skip(self))]
    pub async fn load_all(&self) -> LoadReport {
        self.store.dispatch(AppAction::SetLoading(true));
        let epoch = self.store.epoch();

        let gateway = &self.gateway;
        let project_query = ProjectQuery::default();
        let task_query = TaskQuery::default();
        let entry_query = TimeEntryQuery::default();
        let (users, clients, projects, tasks, entries, stats) = tokio::join!(
            gateway.list_users(),
            gateway.list_clients(),
            gateway.list_projects(&project_query),
            gateway.list_tasks(&task_query),
            gateway.list_time_entries(&entry_query),
            gateway.dashboard_stats(),
        );

        let mut report = LoadReport::default();
        let users = report.settle("users", users).unwrap_or_default();
        let clients = report.settle("clients", clients).unwrap_or_default();
        let projects = report.settle("projects", projects).unwrap_or_default();
        let tasks = report.settle("tasks", tasks).unwrap_or_default();
        let entries = report.settle("time_entries", entries).unwrap_or_default();
        let stats = report.settle("dashboard_stats", stats);

        info!(
            users = users.len(),
            clients = clients.len(),
            projects = projects.len(),
            tasks = tasks.len(),
            time_entries = entries.len(),
            failed = report.failed.len(),
            "workspace loaded"
        );

        if report.unauthorized {
            warn!("credential rejected during load; results dropped");
            report.discarded = true;
            self.store.dispatch(AppAction::SetLoading(false));
            return report;
        }

        report.discarded = !self.store.dispatch_all_since(
            epoch,
            vec![
                AppAction::SetProfiles(users),
                AppAction::SetClients(clients),
                AppAction::SetProjects(projects),
                AppAction::SetTasks(tasks),
                AppAction::SetTimeEntries(entries),
                AppAction::SetDashboardStats(stats),
                AppAction::SetLoading(false),
            ],
        );
        report
    }

    /// Refetch tasks with a server-side filter and replace the collection.
    ///
    /// Unlike [`load_all`](Self::load_all), a failure leaves the current tasks
    /// in place and is returned.
    #[instrument(skip(self))]
    pub async fn reload_tasks(&self, query: &TaskQuery) -> Result<usize> {
        let epoch = self.store.epoch();
        let tasks = self.gateway.list_tasks(query).await?;
        let count = tasks.len();
        self.store.dispatch_all_since(epoch, vec![AppAction::SetTasks(tasks)]);
        Ok(count)
    }

    #[instrument(skip(self))]
    pub async fn reload_time_entries(&self, query: &TimeEntryQuery) -> Result<usize> {
        let epoch = self.store.epoch();
        let entries = self.gateway.list_time_entries(query).await?;
        let count = entries.len();
        self.store.dispatch_all_since(epoch, vec![AppAction::SetTimeEntries(entries)]);
        Ok(count)
    }
}
