//! Store actions and their wire envelope
//!
//! Actions are a closed enum. The envelope form (`{"type": ..., "payload": ...}`)
//! exists for callers that carry actions as JSON; unknown `type` strings decode
//! to `None` and leave the state untouched.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use workboard_domain::{
    Client, DashboardStats, Invoice, Notification, Profile, Project, Result, Task, TimeEntry,
    WorkboardError,
};

/// A single state transition request
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SetLoading(bool),
    SetProfiles(Vec<Profile>),
    SetClients(Vec<Client>),
    SetProjects(Vec<Project>),
    SetTasks(Vec<Task>),
    SetTimeEntries(Vec<TimeEntry>),
    SetInvoices(Vec<Invoice>),
    SetNotifications(Vec<Notification>),
    SetDashboardStats(Option<DashboardStats>),
    AddProject(Project),
    AddTask(Task),
    AddTimeEntry(TimeEntry),
    AddClient(Client),
    AddInvoice(Invoice),
    UpdateProject(Project),
    UpdateTask(Task),
    UpdateClient(Client),
    /// Carries the notification id
    MarkNotificationRead(String),
}

impl AppAction {
    /// Wire name of the action
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetLoading(_) => "SET_LOADING",
            Self::SetProfiles(_) => "SET_PROFILES",
            Self::SetClients(_) => "SET_CLIENTS",
            Self::SetProjects(_) => "SET_PROJECTS",
            Self::SetTasks(_) => "SET_TASKS",
            Self::SetTimeEntries(_) => "SET_TIME_ENTRIES",
            Self::SetInvoices(_) => "SET_INVOICES",
            Self::SetNotifications(_) => "SET_NOTIFICATIONS",
            Self::SetDashboardStats(_) => "SET_DASHBOARD_STATS",
            Self::AddProject(_) => "ADD_PROJECT",
            Self::AddTask(_) => "ADD_TASK",
            Self::AddTimeEntry(_) => "ADD_TIME_ENTRY",
            Self::AddClient(_) => "ADD_CLIENT",
            Self::AddInvoice(_) => "ADD_INVOICE",
            Self::UpdateProject(_) => "UPDATE_PROJECT",
            Self::UpdateTask(_) => "UPDATE_TASK",
            Self::UpdateClient(_) => "UPDATE_CLIENT",
            Self::MarkNotificationRead(_) => "MARK_NOTIFICATION_READ",
        }
    }

    /// The bulk replacements that return every collection to empty.
    pub fn reset_sequence() -> Vec<Self> {
        vec![
            Self::SetProfiles(Vec::new()),
            Self::SetClients(Vec::new()),
            Self::SetProjects(Vec::new()),
            Self::SetTasks(Vec::new()),
            Self::SetTimeEntries(Vec::new()),
            Self::SetInvoices(Vec::new()),
            Self::SetNotifications(Vec::new()),
            Self::SetDashboardStats(None),
            Self::SetLoading(false),
        ]
    }

    /// Encode into the `{type, payload}` envelope.
    pub fn to_envelope(&self) -> Result<ActionEnvelope> {
        let payload = match self {
            Self::SetLoading(flag) => Value::Bool(*flag),
            Self::SetProfiles(items) => to_value(items)?,
            Self::SetClients(items) => to_value(items)?,
            Self::SetProjects(items) => to_value(items)?,
            Self::SetTasks(items) => to_value(items)?,
            Self::SetTimeEntries(items) => to_value(items)?,
            Self::SetInvoices(items) => to_value(items)?,
            Self::SetNotifications(items) => to_value(items)?,
            Self::SetDashboardStats(stats) => to_value(stats)?,
            Self::AddProject(item) | Self::UpdateProject(item) => to_value(item)?,
            Self::AddTask(item) | Self::UpdateTask(item) => to_value(item)?,
            Self::AddTimeEntry(item) => to_value(item)?,
            Self::AddClient(item) | Self::UpdateClient(item) => to_value(item)?,
            Self::AddInvoice(item) => to_value(item)?,
            Self::MarkNotificationRead(id) => Value::String(id.clone()),
        };
        Ok(ActionEnvelope { kind: self.kind().to_string(), payload })
    }
}

/// JSON form of an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl ActionEnvelope {
    /// Decode into a typed action.
    ///
    /// Returns `Ok(None)` for an unrecognized `type` and
    /// `WorkboardError::InvalidInput` when the payload does not fit the type.
    pub fn decode(self) -> Result<Option<AppAction>> {
        let Self { kind, payload } = self;
        let action = match kind.as_str() {
            "SET_LOADING" => AppAction::SetLoading(parse(&kind, payload)?),
            "SET_PROFILES" => AppAction::SetProfiles(parse(&kind, payload)?),
            "SET_CLIENTS" => AppAction::SetClients(parse(&kind, payload)?),
            "SET_PROJECTS" => AppAction::SetProjects(parse(&kind, payload)?),
            "SET_TASKS" => AppAction::SetTasks(parse(&kind, payload)?),
            "SET_TIME_ENTRIES" => AppAction::SetTimeEntries(parse(&kind, payload)?),
            "SET_INVOICES" => AppAction::SetInvoices(parse(&kind, payload)?),
            "SET_NOTIFICATIONS" => AppAction::SetNotifications(parse(&kind, payload)?),
            "SET_DASHBOARD_STATS" => AppAction::SetDashboardStats(parse(&kind, payload)?),
            "ADD_PROJECT" => AppAction::AddProject(parse(&kind, payload)?),
            "ADD_TASK" => AppAction::AddTask(parse(&kind, payload)?),
            "ADD_TIME_ENTRY" => AppAction::AddTimeEntry(parse(&kind, payload)?),
            "ADD_CLIENT" => AppAction::AddClient(parse(&kind, payload)?),
            "ADD_INVOICE" => AppAction::AddInvoice(parse(&kind, payload)?),
            "UPDATE_PROJECT" => AppAction::UpdateProject(parse(&kind, payload)?),
            "UPDATE_TASK" => AppAction::UpdateTask(parse(&kind, payload)?),
            "UPDATE_CLIENT" => AppAction::UpdateClient(parse(&kind, payload)?),
            "MARK_NOTIFICATION_READ" => AppAction::MarkNotificationRead(parse(&kind, payload)?),
            _ => return Ok(None),
        };
        Ok(Some(action))
    }
}

fn parse<T: DeserializeOwned>(kind: &str, payload: Value) -> Result<T> {
    serde_json::from_value(payload)
        .map_err(|err| WorkboardError::InvalidInput(format!("malformed {kind} payload: {err}")))
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|err| WorkboardError::Internal(err.to_string()))
}
