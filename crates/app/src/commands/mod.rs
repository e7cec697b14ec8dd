//! Orchestration commands
//!
//! Each command calls the gateway (when the resource has an endpoint),
//! dispatches the result into the store and logs its outcome.

pub mod actions;
pub mod clients;
pub mod dashboard;
pub mod invoices;
pub mod notifications;
pub mod projects;
pub mod session;
pub mod tasks;
pub mod time_entries;

pub use actions::{dispatch_json, snapshot_json};
pub use clients::{add_client, update_client, ClientDraft};
pub use dashboard::{overview, refresh_dashboard_stats};
pub use invoices::{add_invoice, InvoiceDraft};
pub use notifications::{mark_notification_read, unread_notifications};
pub use projects::{
    archive_project, create_project, delete_project, duplicate_project, refresh_projects,
    update_project,
};
pub use session::{load_workspace, restore_session, sign_in, sign_out, sign_up};
pub use tasks::{create_task, delete_task, refresh_tasks, today_tasks, update_task, update_task_status};
pub use time_entries::{
    cancel_timer, delete_time_entry, log_time, refresh_time_entries, start_timer, stop_timer,
    update_time_entry,
};
