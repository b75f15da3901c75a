//! Client behaviour against a mock backend

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod common;

use bim_admin_client::ClientError;
use bim_admin_core::Navigator;
use bim_admin_types::{
    ContactQuery, ContactStatusFilter, NewUser, NewsDraft, NewsStatus, ReportAction,
    ReportDecision, ReportQuery, ReportStatus, TestimonialQuery, UserQuery, routes,
};
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, body_string_contains, header, method, path, query_param},
};

#[tokio::test]
async fn test_requests_carry_token() {
    let backend = TestBackend::signed_in("tok-123", false).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users/statistics/"))
        .and(header("authorization", "Token tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_users": 10,
            "verified_users": 6,
            "active_users": 9,
            "staff_users": 2,
            "unverified_users": 4,
            "inactive_users": 1
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let stats = backend.client.users().statistics().await.unwrap();
    assert_eq!(stats.total_users, 10);
    assert_eq!(stats.inactive_users, 1);
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_redirects_once() {
    let backend = TestBackend::signed_in("expired", true).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Given token not valid for any token type"
        })))
        .mount(&backend.server)
        .await;

    let users = backend.client.users();
    let contacts = backend.client.contacts();
    let reports = backend.client.reports();
    let query = UserQuery::default();
    let (a, b, c) = tokio::join!(
        users.list(&query),
        contacts.statistics(),
        reports.dashboard(),
    );

    assert!(a.unwrap_err().is_unauthorized());
    assert!(b.unwrap_err().is_unauthorized());
    assert!(c.unwrap_err().is_unauthorized());
    assert!(backend.session.token().is_none());
    assert!(backend.session.refresh_token().is_none());
    assert!(backend.session.user().is_none());
    assert_eq!(backend.navigator.visits(routes::LOGIN), 1);
    assert_eq!(backend.navigator.current(), routes::LOGIN);

    // a later 401 in the same signed-out session does not redirect again
    let _ = backend.client.users().statistics().await;
    assert_eq!(backend.navigator.visits(routes::LOGIN), 1);
}

#[tokio::test]
async fn test_login_stores_credentials_and_rearms_redirect() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .and(body_json(json!({"email": "root@bim.org", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "fresh",
            "refresh": "r-2",
            "user": {"id": 1, "username": "root", "email": "root@bim.org", "is_staff": true, "is_superuser": true}
        })))
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&backend.server)
        .await;

    let _ = backend.client.auth().me().await;
    assert_eq!(backend.navigator.visits(routes::LOGIN), 1);

    let user = backend
        .client
        .auth()
        .login("root@bim.org", "pw")
        .await
        .unwrap();
    assert!(user.is_superuser);
    assert_eq!(backend.session.token().as_deref(), Some("fresh"));
    assert_eq!(backend.session.refresh_token().as_deref(), Some("r-2"));

    let _ = backend.client.auth().me().await;
    assert_eq!(backend.navigator.visits(routes::LOGIN), 2);
}

#[tokio::test]
async fn test_wrong_password_keeps_existing_session() {
    let backend = TestBackend::signed_in("tok-1", true).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "No active account found with the given credentials"
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let err = backend
        .client
        .auth()
        .login("root@bim.org", "wrong")
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(backend.session.token().as_deref(), Some("tok-1"));
    assert!(backend.session.user().is_some());
    assert_eq!(backend.navigator.visits(routes::LOGIN), 0);
}

#[tokio::test]
async fn test_refresh_replaces_access_token() {
    let backend = TestBackend::signed_in("old", false).await;
    Mock::given(method("POST"))
        .and(path("/api/token/refresh/"))
        .and(body_json(json!({"refresh": "refresh-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "new"})))
        .expect(1)
        .mount(&backend.server)
        .await;

    backend.client.auth().refresh().await.unwrap();
    assert_eq!(backend.session.token().as_deref(), Some("new"));
    assert_eq!(backend.session.refresh_token().as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn test_password_mismatch_sends_nothing() {
    let backend = TestBackend::signed_in("tok", false).await;
    Mock::given(method("POST"))
        .and(path("/api/admin/users/"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend.server)
        .await;

    let form = NewUser {
        email: "new@example.com".into(),
        username: "newbie".into(),
        password: "secret-1".into(),
        password2: "secret-2".into(),
        ..NewUser::default()
    };
    let err = backend.client.users().create(&form).await.unwrap_err();
    assert!(err.is_local());
    assert!(err.to_string().contains("Passwords do not match"));
}

#[tokio::test]
async fn test_create_user_surfaces_field_errors() {
    let backend = TestBackend::signed_in("tok", false).await;
    Mock::given(method("POST"))
        .and(path("/api/admin/users/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "username": ["A user with that username already exists."]
        })))
        .mount(&backend.server)
        .await;

    let form = NewUser {
        email: "new@example.com".into(),
        username: "taken".into(),
        password: "pw".into(),
        password2: "pw".into(),
        ..NewUser::default()
    };
    let err = backend.client.users().create(&form).await.unwrap_err();
    assert!(err.first_field_message("email").is_none());
    assert_eq!(
        err.first_field_message("username"),
        Some("A user with that username already exists.")
    );
}

#[tokio::test]
async fn test_verify_without_action_sends_nothing() {
    let backend = TestBackend::signed_in("tok", false).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend.server)
        .await;

    let err = backend
        .client
        .reports()
        .act(4, ReportAction::Verify, &ReportDecision::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidInput(_)));
}

#[tokio::test]
async fn test_report_transition_posts_decision() {
    let backend = TestBackend::signed_in("tok", false).await;
    Mock::given(method("POST"))
        .and(path("/api/admin/reports/4/verify/"))
        .and(body_json(json!({"action_taken": "Suspended 7 days", "admin_notes": ""})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Report verified"})))
        .expect(1)
        .mount(&backend.server)
        .await;

    let decision = ReportDecision {
        action_taken: "Suspended 7 days".into(),
        admin_notes: String::new(),
    };
    let response = backend
        .client
        .reports()
        .act(4, ReportAction::Verify, &decision)
        .await
        .unwrap();
    assert_eq!(response["message"], "Report verified");
}

#[tokio::test]
async fn test_list_filters_become_query_params() {
    let backend = TestBackend::signed_in("tok", false).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/reports/"))
        .and(query_param("page", "2"))
        .and(query_param("status", "pending"))
        .and(query_param("type", "user"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(paginated(vec![report_json(1, "pending")], 21)),
        )
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/contacts/"))
        .and(query_param("is_read", "false"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(paginated(vec![contact_json(3, false, false)], 1)),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let reports = backend
        .client
        .reports()
        .list(&ReportQuery {
            page: Some(2),
            status: Some(ReportStatus::Pending),
            report_type: Some("user".into()),
            ..ReportQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(reports.count, 21);
    assert_eq!(reports.results[0].reported_user.report_count, 2);

    let contacts = backend
        .client
        .contacts()
        .list(&ContactQuery::default().with_status(ContactStatusFilter::Unread))
        .await
        .unwrap();
    assert!(!contacts.results[0].is_read.get());
}

#[tokio::test]
async fn test_testimonials_accept_bare_array() {
    let backend = TestBackend::signed_in("tok", false).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/testimonials/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            testimonial_json(1, true, false),
            testimonial_json(2, false, false)
        ])))
        .mount(&backend.server)
        .await;

    let all = backend
        .client
        .testimonials()
        .list(&TestimonialQuery::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].is_approved.get());
}

#[tokio::test]
async fn test_news_count_uses_smallest_page() {
    let backend = TestBackend::signed_in("tok", false).await;
    Mock::given(method("GET"))
        .and(path("/api/news/articles/"))
        .and(query_param("page_size", "1"))
        .and(query_param("status", "published"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(paginated(vec![news_json(1, "published")], 37)),
        )
        .mount(&backend.server)
        .await;

    let count = backend
        .client
        .news()
        .count(Some(NewsStatus::Published))
        .await
        .unwrap();
    assert_eq!(count, 37);
}

#[tokio::test]
async fn test_news_create_sends_multipart() {
    let backend = TestBackend::signed_in("tok", false).await;
    Mock::given(method("POST"))
        .and(path("/api/news/articles/"))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("Library reopening"))
        .and(body_string_contains("name=\"summary\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(news_json(12, "draft")))
        .expect(1)
        .mount(&backend.server)
        .await;

    let draft = NewsDraft {
        title: "Library reopening".into(),
        content: "Monday at nine".into(),
        ..NewsDraft::default()
    };
    let created = backend.client.news().create(&draft).await.unwrap();
    assert_eq!(created.id, 12);
    assert_eq!(created.status, NewsStatus::Draft);
}

#[tokio::test]
async fn test_forbidden_does_not_sign_out() {
    let backend = TestBackend::signed_in("tok", false).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/admins/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "detail": "You do not have permission to perform this action."
        })))
        .mount(&backend.server)
        .await;

    let err = backend
        .client
        .admins()
        .list(&Default::default())
        .await
        .unwrap_err();
    assert!(err.is_forbidden());
    assert!(backend.session.is_authenticated());
    assert_eq!(backend.navigator.visits(routes::LOGIN), 0);
}

#[tokio::test]
async fn test_delete_tolerates_empty_body() {
    let backend = TestBackend::signed_in("tok", false).await;
    Mock::given(method("DELETE"))
        .and(path("/api/news/categories/events/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    backend.client.categories().delete("events").await.unwrap();
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let backend = TestBackend::signed_in("tok", false).await;
    let uri = backend.server.uri();
    drop(backend.server);

    let config = bim_admin_core::config::ApiConfig {
        base_url: uri,
        ..Default::default()
    };
    let client = bim_admin_client::ApiClient::new(
        &config,
        backend.session.clone(),
        backend.navigator.clone(),
    )
    .unwrap();
    let err = client.users().statistics().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(backend.session.is_authenticated());
}
