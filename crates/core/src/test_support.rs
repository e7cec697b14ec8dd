//! Record builders shared by unit tests

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use workboard_domain::{
    Client, Notification, NotificationKind, Priority, Profile, Project, ProjectStatus, Task,
    TaskStatus, TimeEntry, UserRole,
};

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).single().unwrap()
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn profile(id: &str, name: &str) -> Profile {
    Profile {
        id: id.into(),
        name: name.into(),
        email: format!("{id}@example.com"),
        role: UserRole::TeamMember,
        avatar: None,
        weekly_capacity: 40.0,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

pub fn client(id: &str, name: &str) -> Client {
    Client {
        id: id.into(),
        name: name.into(),
        email: String::new(),
        company: format!("{name} Ltd"),
        hourly_rate: 100.0,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

pub fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.into(),
        name: name.into(),
        description: String::new(),
        client_id: None,
        owner_id: "u1".into(),
        priority: Priority::Medium,
        status: ProjectStatus::InProgress,
        deadline: None,
        monthly_hour_allocation: 40.0,
        tags: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

pub fn task(id: &str, project_id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.into(),
        title: format!("Task {id}"),
        description: String::new(),
        project_id: project_id.into(),
        assignee_id: "u1".into(),
        priority: Priority::Medium,
        status,
        estimated_hours: 4.0,
        due_date: None,
        tags: Vec::new(),
        subtasks: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

pub fn entry(id: &str, task_id: &str, project_id: &str, date: NaiveDate, minutes: i64) -> TimeEntry {
    TimeEntry {
        id: id.into(),
        task_id: task_id.into(),
        project_id: project_id.into(),
        user_id: "u1".into(),
        date,
        duration: minutes,
        description: String::new(),
        created_at: None,
    }
}

pub fn notification(id: &str, read: bool) -> Notification {
    Notification {
        id: id.into(),
        user_id: "u1".into(),
        title: "Heads up".into(),
        message: "Something happened".into(),
        kind: NotificationKind::Info,
        read,
        created_at: None,
    }
}
