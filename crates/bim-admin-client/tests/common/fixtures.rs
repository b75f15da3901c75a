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
        "posts_count": 2,
        "materials_count": 1,
        "news_count": 0,
        "successful_donations_count": 4
    })
}

/// An admin row
pub fn admin_json(id: i64, username: &str, active: bool) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{username}@bim.org"),
        "full_name": username,
        "first_name": "",
        "last_name": "",
        "profile_picture": null,
        "is_active": active,
        "phone_number": "",
        "date_joined": "2023-11-02T12:00:00Z",
        "last_login": null
    })
}

/// A news article
pub fn news_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Article {id}"),
        "slug": format!("article-{id}"),
        "summary": "",
        "author": {"id": 1, "username": "root", "email": "root@bim.org"},
        "category": null,
        "featured_image": null,
        "featured_image_url": null,
        "status": status,
        "is_featured": false,
        "views_count": 10,
        "tags": "events,library",
        "tags_list": ["events", "library"],
        "meta_description": "",
        "created_at": "2024-02-01T08:00:00Z",
        "updated_at": "2024-02-02T08:00:00Z",
        "published_at": null
    })
}

/// A contact message
pub fn contact_json(id: i64, is_read: bool, is_replied: bool) -> Value {
    json!({
        "id": id,
        "name": "Lea",
        "email": "lea@example.com",
        "subject": "feedback",
        "message": "Great platform",
        "user": null,
        "user_username": null,
        "user_email": null,
        "user_type": "guest",
        "is_read": is_read,
        "is_replied": is_replied,
        "admin_notes": "",
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
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

/// A testimonial
pub fn testimonial_json(id: i64, approved: bool, featured: bool) -> Value {
    json!({
        "id": id,
        "name": "Lea",
        "title": "Student",
        "message": "Found every book I needed",
        "is_approved": approved,
        "is_featured": featured,
        "display_order": id,
        "created_at": "2024-05-02T10:00:00Z",
        "contact_message": null
    })
}
