//! Domain types and models
//!
//! Flat records exchanged with the backend. Identifiers are opaque strings;
//! references between records (`project_id`, `assignee_id`, ...) are not
//! enforced client-side.

pub mod auth;
pub mod client;
pub mod invoice;
pub mod notification;
pub mod project;
pub mod stats;
pub mod task;
pub mod time_entry;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use client::Client;
pub use invoice::{Invoice, InvoiceStatus};
pub use notification::{Notification, NotificationKind};
pub use project::{NewProject, Project, ProjectPatch, ProjectStatus};
pub use stats::DashboardStats;
pub use task::{NewTask, Priority, Subtask, Task, TaskPatch, TaskStatus};
pub use time_entry::{NewTimeEntry, TimeEntry};
pub use user::{Profile, UserRole};

/// Records addressable by an opaque string identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),+ $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_identified!(Profile, Client, Project, Task, TimeEntry, Invoice, Notification);
