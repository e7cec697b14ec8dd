//! Invoice commands
//!
//! Invoices are drafted locally from figures the caller supplies; totals are
//! stored as given and never recomputed.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use workboard_core::AppAction;
use workboard_domain::{Invoice, InvoiceStatus, Result, WorkboardError};

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_logged_sync, require};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub client_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_hours: f64,
    pub hourly_rate: f64,
    #[serde(default)]
    pub tax: f64,
}

impl InvoiceDraft {
    fn into_invoice(self) -> Invoice {
        let subtotal = self.total_hours * self.hourly_rate;
        let now = Utc::now();
        Invoice {
            id: Uuid::new_v4().to_string(),
            client_id: self.client_id,
            period_start: self.period_start,
            period_end: self.period_end,
            total_hours: self.total_hours,
            hourly_rate: self.hourly_rate,
            subtotal,
            tax: self.tax,
            total: subtotal + self.tax,
            status: InvoiceStatus::Draft,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

pub fn add_invoice(ctx: &AppContext, draft: InvoiceDraft) -> Result<Invoice> {
    execute_logged_sync("invoices::add_invoice", || {
        require("client", &draft.client_id)?;
        if draft.period_end < draft.period_start {
            return Err(WorkboardError::InvalidInput(
                "invoice period ends before it starts".to_string(),
            ));
        }
        if draft.total_hours < 0.0 || draft.hourly_rate < 0.0 || draft.tax < 0.0 {
            return Err(WorkboardError::InvalidInput(
                "invoice amounts cannot be negative".to_string(),
            ));
        }

        let invoice = draft.clone().into_invoice();
        ctx.store.dispatch(AppAction::AddInvoice(invoice.clone()));
        info!(invoice_id = %invoice.id, client_id = %invoice.client_id, total = invoice.total, "Invoice drafted");
        Ok(invoice)
    })
}
