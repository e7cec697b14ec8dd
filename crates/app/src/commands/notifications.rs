//! Notification commands

use workboard_core::AppAction;
use workboard_domain::Notification;

use crate::context::AppContext;

/// Mark a notification read; `false` if it was missing or already read
pub fn mark_notification_read(ctx: &AppContext, id: &str) -> bool {
    let before = ctx.store.snapshot();
    let after = ctx.store.dispatch(AppAction::MarkNotificationRead(id.to_string()));
    !std::sync::Arc::ptr_eq(&before, &after)
}

/// Unread notifications for the signed-in user, newest first
pub fn unread_notifications(ctx: &AppContext) -> Vec<Notification> {
    let Some(user) = ctx.session.current_user() else {
        return Vec::new();
    };
    let snapshot = ctx.store.snapshot();
    let mut unread: Vec<Notification> = snapshot.unread_notifications(&user.id).cloned().collect();
    unread.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    unread
}
