//! Record builders

use workboard_domain::{
    Client, DashboardStats, Priority, Profile, Project, ProjectStatus, Task, TaskStatus, TimeEntry,
    UserRole,
};

pub fn profile(id: &str) -> Profile {
    Profile {
        id: id.into(),
        name: format!("User {id}"),
        email: format!("{id}@example.com"),
        role: UserRole::ProjectManager,
        avatar: None,
        weekly_capacity: 40.0,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

pub fn client(id: &str) -> Client {
    Client {
        id: id.into(),
        name: format!("Client {id}"),
        email: String::new(),
        company: String::new(),
        hourly_rate: 120.0,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

pub fn project(id: &str) -> Project {
    Project {
        id: id.into(),
        name: format!("Project {id}"),
        description: String::new(),
        client_id: None,
        owner_id: "u1".into(),
        priority: Priority::High,
        status: ProjectStatus::InProgress,
        deadline: None,
        monthly_hour_allocation: 40.0,
        tags: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

pub fn task(id: &str, project_id: &str) -> Task {
    Task {
        id: id.into(),
        title: format!("Task {id}"),
        description: String::new(),
        project_id: project_id.into(),
        assignee_id: "u1".into(),
        priority: Priority::Medium,
        status: TaskStatus::Todo,
        estimated_hours: 2.0,
        due_date: None,
        tags: Vec::new(),
        subtasks: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

pub fn entry(id: &str, task_id: &str, project_id: &str, minutes: i64) -> TimeEntry {
    TimeEntry {
        id: id.into(),
        task_id: task_id.into(),
        project_id: project_id.into(),
        user_id: "u1".into(),
        date: chrono::NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        duration: minutes,
        description: String::new(),
        created_at: None,
    }
}

pub fn stats() -> DashboardStats {
    DashboardStats { total_tasks: 4, completed_tasks: 1, today_completed_tasks: 0, overdue_tasks: 1 }
}

/// Notification as the backend serializes it
pub fn notification_payload(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": "u1",
        "title": "Task assigned",
        "message": "You have a new task",
        "type": "info",
        "read": false,
        "created_at": "2024-04-02T09:00:00Z"
    })
}
