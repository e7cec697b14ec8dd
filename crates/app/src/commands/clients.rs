//! Client commands
//!
//! The backend only lists clients; additions and edits are local to the
//! store and get an app-generated id.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use workboard_core::AppAction;
use workboard_domain::{Client, Result, WorkboardError};

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_logged_sync, require};

/// Fields a user enters for a new client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDraft {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub hourly_rate: f64,
}

pub fn add_client(ctx: &AppContext, draft: ClientDraft) -> Result<Client> {
    execute_logged_sync("clients::add_client", || {
        require("name", &draft.name)?;
        validate_rate(draft.hourly_rate)?;

        let now = Utc::now();
        let client = Client {
            id: Uuid::new_v4().to_string(),
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            company: draft.company.trim().to_string(),
            hourly_rate: draft.hourly_rate,
            is_active: true,
            created_at: Some(now),
            updated_at: Some(now),
        };
        ctx.store.dispatch(AppAction::AddClient(client.clone()));
        info!(client_id = %client.id, "Client added");
        Ok(client)
    })
}

/// Replace a client by id
pub fn update_client(ctx: &AppContext, client: Client) -> Result<Client> {
    execute_logged_sync("clients::update_client", || {
        require("name", &client.name)?;
        validate_rate(client.hourly_rate)?;
        if ctx.store.snapshot().client(&client.id).is_none() {
            return Err(WorkboardError::NotFound(format!("client {}", client.id)));
        }

        let updated = Client { updated_at: Some(Utc::now()), ..client.clone() };
        ctx.store.dispatch(AppAction::UpdateClient(updated.clone()));
        Ok(updated)
    })
}

fn validate_rate(rate: f64) -> Result<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(WorkboardError::InvalidInput("hourly rate cannot be negative".to_string()));
    }
    Ok(())
}
