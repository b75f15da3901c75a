//! JSON payloads shaped like the backend's responses

use serde_json::{Value, json};

/// Paginated envelope around `results`
pub fn paginated(results: Vec<Value>, count: u64) -> Value {
    json!({
        "count": count,
        "next": null,
        "previous": null,
        "results": results,
    })
}

/// A user list row
pub fn user_json(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{username}@example.com"),
        "full_name": username,
        "first_name": "",
        "last_name": "",
        "profile_picture": null,
        "is_active": true,
        "is_verified": false,
        "is_staff": false,
        "current_semester": "3",
        "date_joined": "2024-01-15T09:30:00Z",
        "posts_count": 0,
        "materials_count": 0,
        "news_count": 0,
        "successful_donations_count": 0
    })
}

/// User counters
pub fn user_stats_json() -> Value {
    json!({
        "total_users": 100,
        "verified_users": 60,
        "active_users": 95,
        "staff_users": 3,
        "unverified_users": 40,
        "inactive_users": 5
    })
}

/// A contact message from a guest
pub fn contact_json(id: i64, subject: &str, is_read: bool) -> Value {
    json!({
        "id": id,
        "name": "Lea",
        "email": "lea@example.com",
        "subject": subject,
        "message": "Great platform",
        "user": null,
        "user_username": null,
        "user_email": null,
        "user_type": "guest",
        "is_read": is_read,
        "is_replied": false,
        "admin_notes": "",
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    })
}

/// Contact counters
pub fn contact_stats_json(unread: u64) -> Value {
    json!({
        "total_messages": 10,
        "unread_messages": unread,
        "unreplied_messages": 6,
        "registered_users": 4,
        "guest_users": 6,
        "by_subject": {"feedback": 5, "request": 2, "support": 2, "other": 1}
    })
}

/// A report about user 7
pub fn report_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "reporter": {"id": 3, "username": "alice", "email": "alice@example.com"},
        "reported_user": {"id": 7, "username": "mallory", "email": "m@example.com", "report_count": 2},
        "report_type": "user",
        "report_type_display": "User",
        "reason": "spam",
        "reason_display": "Spam",
        "description": "Posts ads",
        "screenshot": null,
        "status": status,
        "status_display": status,
        "created_at": "2024-04-10T14:00:00Z",
        "reviewed_by_username": null,
        "reviewed_at": null,
        "admin_notes": "",
        "action_taken": ""
    })
}

/// Report counters
pub fn report_dashboard_json(pending: u64) -> Value {
    json!({
        "summary": {
            "total_reports": 12,
            "pending_reports": pending,
            "under_review_reports": 2,
            "verified_reports": 3,
            "rejected_reports": 2,
            "resolved_reports": 1
        }
    })
}

/// A testimonial
pub fn testimonial_json(id: i64, approved: bool) -> Value {
    json!({
        "id": id,
        "name": "Lea",
        "title": "Student",
        "message": "Found every book I needed",
        "is_approved": approved,
        "is_featured": false,
        "display_order": id,
        "created_at": "2024-05-02T10:00:00Z",
        "contact_message": null
    })
}
