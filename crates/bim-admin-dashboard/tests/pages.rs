//! Page controllers against a mock backend

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod common;

use bim_admin_dashboard::{
    LoadStatus,
    pages::{
        ContactFlag, NewsCounts, TestimonialFlag, UserFilters, admins::FORBIDDEN_MESSAGE,
        reports::ACTION_REQUIRED,
    },
};
use bim_admin_types::{NewUser, Page, ReportAction, ReportDecision, ReportStatus, User, routes};
use common::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path, query_param},
};

async fn mount_contacts(console: &TestConsole, list: serde_json::Value, unread: u64, hits: u64) {
    Mock::given(method("GET"))
        .and(path("/api/admin/contacts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list))
        .expect(hits)
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/contacts/statistics/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_stats_json(unread)))
        .expect(hits)
        .mount(&console.server)
        .await;
}

#[tokio::test]
async fn test_contact_toggle_shows_before_response() {
    let console = TestConsole::signed_in(false).await;
    mount_contacts(
        &console,
        paginated(vec![contact_json(5, "feedback", false)], 1),
        3,
        1,
    )
    .await;

    let mut page = console.app.contacts();
    page.load().await;
    assert!(page.select(5));

    let toggle = page.begin_toggle(5, ContactFlag::Read).unwrap();
    assert!(toggle.proposed);

    // nothing has been sent yet; both copies and the counter already moved
    let row = page.list().find(|m| m.id == 5).unwrap();
    assert!(row.is_read.get());
    assert!(row.is_read.is_pending());
    assert!(page.selected().unwrap().is_read.get());
    assert_eq!(page.stats().unread_messages, 2);

    let outcome = page.settle_toggle(toggle, &Ok(json!({"message": "ok", "is_read": true})));
    assert!(!outcome.is_rejected());
    let row = page.list().find(|m| m.id == 5).unwrap();
    assert!(row.is_read.get());
    assert!(!row.is_read.is_pending());
    assert_eq!(page.stats().unread_messages, 2);
}

#[tokio::test]
async fn test_rejected_contact_toggle_reverts_and_reloads() {
    let console = TestConsole::signed_in(false).await;
    // initial load plus the reload after the rejection
    mount_contacts(
        &console,
        paginated(vec![contact_json(5, "feedback", false)], 1),
        3,
        2,
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/contacts/5/toggle_read/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&console.server)
        .await;

    let mut page = console.app.contacts();
    page.load().await;
    page.toggle(5, ContactFlag::Read).await;

    let row = page.list().find(|m| m.id == 5).unwrap();
    assert!(!row.is_read.get());
    assert!(!row.is_read.is_pending());
    assert_eq!(page.stats().unread_messages, 3);
}

#[tokio::test]
async fn test_contact_toggle_adopts_server_value() {
    let console = TestConsole::signed_in(false).await;
    // no reload after an accepted toggle
    mount_contacts(
        &console,
        paginated(vec![contact_json(5, "feedback", false)], 1),
        3,
        1,
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/contacts/5/toggle_read/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok", "is_read": false})))
        .expect(1)
        .mount(&console.server)
        .await;

    let mut page = console.app.contacts();
    page.load().await;
    assert!(page.select(5));
    page.toggle(5, ContactFlag::Read).await;

    let row = page.list().find(|m| m.id == 5).unwrap();
    assert!(!row.is_read.get());
    assert!(!row.is_read.is_pending());
    assert!(!page.selected().unwrap().is_read.get());
    assert_eq!(page.stats().unread_messages, 3);
}

#[tokio::test]
async fn test_save_notes_adopts_returned_message() {
    let console = TestConsole::signed_in(false).await;
    let mut updated = contact_json(5, "request", true);
    updated
        .as_object_mut()
        .unwrap()
        .insert("admin_notes".into(), json!("Called back"));

    Mock::given(method("PATCH"))
        .and(path("/api/admin/contacts/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated.clone()))
        .expect(1)
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/contacts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![updated], 1)))
        .expect(1)
        .mount(&console.server)
        .await;

    let mut page = console.app.contacts();
    assert!(page.save_notes(5, "Called back").await.is_none());
    assert_eq!(page.selected().unwrap().admin_notes, "Called back");
    assert_eq!(page.list().items().len(), 1);
}

#[tokio::test]
async fn test_only_feedback_becomes_testimonial() {
    let console = TestConsole::signed_in(false).await;
    mount_contacts(
        &console,
        paginated(vec![contact_json(8, "support", true)], 1),
        0,
        1,
    )
    .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&console.server)
        .await;

    let mut page = console.app.contacts();
    page.load().await;
    let notice = page.post_as_testimonial(8).await;
    assert!(notice.is_error());
}

#[tokio::test]
async fn test_admins_hidden_from_regular_staff() {
    let console = TestConsole::signed_in(false).await;
    assert!(console.app.sidebar().entry(routes::ADMINS).is_none());

    assert!(console.app.admins().is_none());
    assert_eq!(console.app.current_route(), routes::DASHBOARD);
    assert_eq!(console.app.navigator().visits(routes::DASHBOARD), 1);
}

#[tokio::test]
async fn test_admins_without_session_goes_to_login() {
    let console = TestConsole::signed_out().await;
    assert!(console.app.admins().is_none());
    assert_eq!(console.app.current_route(), routes::LOGIN);
}

#[tokio::test]
async fn test_admins_forbidden_leaves_page_with_notice() {
    let console = TestConsole::signed_in(true).await;
    assert!(console.app.sidebar().entry(routes::ADMINS).is_some());
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"detail": "You do not have permission to perform this action."})),
        )
        .mount(&console.server)
        .await;

    let mut page = console.app.admins().unwrap();
    let notice = page.load().await.unwrap();

    assert!(notice.is_error());
    assert_eq!(notice.message, FORBIDDEN_MESSAGE);
    assert_eq!(console.app.current_route(), routes::DASHBOARD);
    assert!(!page.list().is_loading());
    // 403 is not an authentication failure
    assert!(console.app.session().is_authenticated());
    assert!(!console.app.sent_to_login());
}

#[tokio::test]
async fn test_unauthorized_load_sends_to_login() {
    let console = TestConsole::signed_in(true).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Token expired"})))
        .mount(&console.server)
        .await;

    let mut page = console.app.users();
    page.load().await;

    assert!(console.app.sent_to_login());
    assert!(console.app.session().token().is_none());
    assert!(matches!(page.list().status(), LoadStatus::Failed(_)));
}

#[tokio::test]
async fn test_search_resets_to_first_page() {
    let console = TestConsole::signed_in(false).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users/"))
        .and(query_param("search", "bob"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![user_json(2, "bob")], 1)))
        .expect(1)
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users/"))
        .and(query_param("page", "3"))
        .and(query_param("page_size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![user_json(41, "carol")], 100)))
        .expect(1)
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![user_json(1, "alice")], 100)))
        .mount(&console.server)
        .await;

    let mut page = console.app.users();
    page.refetch().await;
    assert_eq!(page.pager().total_pages(), 5);

    page.go_to_page(3).await;
    assert_eq!(page.pager().page(), 3);

    page.set_search("bob").await;
    assert_eq!(page.pager().page(), 1);
    assert_eq!(page.pager().count(), 1);
    assert_eq!(page.list().items().first().unwrap().username, "bob");
}

#[tokio::test]
async fn test_filter_change_resets_to_first_page() {
    let console = TestConsole::signed_in(false).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users/"))
        .and(query_param("is_verified", "true"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![], 0)))
        .expect(1)
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![user_json(1, "alice")], 60)))
        .mount(&console.server)
        .await;

    let mut page = console.app.users();
    page.refetch().await;
    page.next_page().await;
    assert_eq!(page.pager().page(), 2);

    page.set_filters(UserFilters {
        verified: Some(true),
        ..UserFilters::default()
    })
    .await;
    assert_eq!(page.pager().page(), 1);
    assert!(page.list().is_empty());
}

#[tokio::test]
async fn test_stale_user_response_is_dropped() {
    let console = TestConsole::signed_in(false).await;
    let mut page = console.app.users();
    let user = |id: i64, name: &str| serde_json::from_value::<User>(user_json(id, name)).unwrap();

    let (first, _) = page.begin_fetch();
    let (second, query) = page.begin_fetch();
    assert_eq!(query.page, Some(1));

    assert!(page.finish_fetch(second, Ok(Page::from_results(vec![user(1, "a"), user(2, "b")]))));
    assert!(!page.finish_fetch(first, Ok(Page::from_results(vec![user(9, "z")]))));

    let ids: Vec<_> = page.list().items().iter().map(|u| u.id).collect();
    assert_eq!(ids, [1, 2]);
    assert_eq!(page.list().status(), &LoadStatus::Idle);
}

#[tokio::test]
async fn test_create_user_password_mismatch_sends_nothing() {
    let console = TestConsole::signed_in(false).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&console.server)
        .await;

    let form = NewUser {
        email: "bob@example.com".into(),
        username: "bob".into(),
        password: "secret-1".into(),
        password2: "secret-2".into(),
        ..NewUser::default()
    };
    let notice = console.app.users().create(&form).await.unwrap_err();
    assert_eq!(notice.message, "Passwords do not match");
}

#[tokio::test]
async fn test_create_user_reports_email_error_first() {
    let console = TestConsole::signed_in(false).await;
    Mock::given(method("POST"))
        .and(path("/api/admin/users/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "username": ["A user with that username already exists."],
            "email": ["user with this email already exists."]
        })))
        .expect(1)
        .mount(&console.server)
        .await;

    let form = NewUser {
        email: "bob@example.com".into(),
        username: "bob".into(),
        password: "secret-1".into(),
        password2: "secret-1".into(),
        ..NewUser::default()
    };
    let notice = console.app.users().create(&form).await.unwrap_err();
    assert_eq!(notice.message, "user with this email already exists.");
}

#[tokio::test]
async fn test_verify_without_action_taken_sends_nothing() {
    let console = TestConsole::signed_in(false).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&console.server)
        .await;

    let mut page = console.app.reports();
    let notice = page
        .act(4, ReportAction::Verify, &ReportDecision::default())
        .await;
    assert_eq!(notice.message, ACTION_REQUIRED);
    assert!(notice.is_error());
}

#[tokio::test]
async fn test_viewing_pending_report_claims_it() {
    let console = TestConsole::signed_in(false).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/reports/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![report_json(4, "pending")], 1)))
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/reports/dashboard/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_dashboard_json(5)))
        .mount(&console.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/reports/4/mark_under_review/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Report marked under review"})))
        .expect(1)
        .mount(&console.server)
        .await;

    let mut page = console.app.reports();
    page.load().await;
    assert_eq!(page.stats().summary.pending_reports, 5);

    let report = page.view(4).await.unwrap();
    assert_eq!(report.status, ReportStatus::UnderReview);
}

#[tokio::test]
async fn test_verify_report_uses_server_message() {
    let console = TestConsole::signed_in(false).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/reports/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![report_json(4, "verified")], 1)))
        .expect(1)
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/reports/dashboard/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_dashboard_json(0)))
        .expect(1)
        .mount(&console.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/reports/4/verify/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Report verified"})))
        .expect(1)
        .mount(&console.server)
        .await;

    let mut page = console.app.reports();
    let decision = ReportDecision {
        action_taken: "Warned the user".into(),
        admin_notes: String::new(),
    };
    let notice = page.act(4, ReportAction::Verify, &decision).await;

    assert!(!notice.is_error());
    assert_eq!(notice.message, "Report verified");
    assert!(page.selected().is_none());
    assert_eq!(page.stats().summary.pending_reports, 0);
}

#[tokio::test]
async fn test_testimonial_counts_follow_toggles_and_deletes() {
    let console = TestConsole::signed_in(false).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/testimonials/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            testimonial_json(1, true),
            testimonial_json(2, true),
            testimonial_json(3, false),
        ])))
        .expect(2)
        .mount(&console.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/testimonials/1/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&console.server)
        .await;

    let mut page = console.app.testimonials();
    page.load().await;
    assert_eq!((page.approved_count(), page.pending_count()), (2, 1));

    let toggle = page.begin_toggle(3, TestimonialFlag::Approved).unwrap();
    assert_eq!((page.approved_count(), page.pending_count()), (3, 0));
    page.settle_toggle(toggle, &Ok(json!({"message": "Testimonial approved"})));
    assert_eq!(page.approved_count(), 3);

    page.delete(1).await;
    assert_eq!(page.all().len(), 2);
    assert_eq!(page.testimonials().len(), 2);
    assert_eq!((page.approved_count(), page.pending_count()), (2, 0));
}

async fn mount_testimonials(console: &TestConsole, hits: u64) {
    Mock::given(method("GET"))
        .and(path("/api/admin/testimonials/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            testimonial_json(1, true),
            testimonial_json(2, true),
            testimonial_json(3, false),
        ])))
        .expect(hits)
        .mount(&console.server)
        .await;
}

#[rstest]
#[case::approval(TestimonialFlag::Approved, "toggle_approval")]
#[case::featured(TestimonialFlag::Featured, "toggle_featured")]
#[tokio::test]
async fn test_rejected_testimonial_toggle_reverts_and_reloads(
    #[case] flag: TestimonialFlag,
    #[case] action: &str,
) {
    let console = TestConsole::signed_in(false).await;
    // view and full set, loaded and then reloaded
    mount_testimonials(&console, 4).await;
    Mock::given(method("POST"))
        .and(path(format!("/api/admin/testimonials/3/{action}/")))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&console.server)
        .await;

    let mut page = console.app.testimonials();
    page.load().await;
    page.toggle(3, flag).await;

    let copies: Vec<_> = page
        .testimonials()
        .iter()
        .chain(page.all())
        .filter(|t| t.id == 3)
        .collect();
    assert_eq!(copies.len(), 2);
    for copy in copies {
        assert!(!copy.is_approved.get());
        assert!(!copy.is_featured.get());
        assert!(!copy.is_approved.is_pending());
        assert!(!copy.is_featured.is_pending());
    }
    assert_eq!((page.approved_count(), page.pending_count()), (2, 1));
}

#[tokio::test]
async fn test_failed_testimonial_delete_restores_row() {
    let console = TestConsole::signed_in(false).await;
    mount_testimonials(&console, 4).await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/testimonials/1/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&console.server)
        .await;

    let mut page = console.app.testimonials();
    page.load().await;
    page.delete(1).await;

    assert!(page.testimonials().iter().any(|t| t.id == 1));
    assert!(page.all().iter().any(|t| t.id == 1));
    assert_eq!((page.approved_count(), page.pending_count()), (2, 1));
}

#[tokio::test]
async fn test_overview_counts_articles_by_status() {
    let console = TestConsole::signed_in(true).await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users/statistics/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_stats_json()))
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/news/articles/"))
        .and(query_param("status", "published"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![], 4)))
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/news/articles/"))
        .and(query_param("status", "draft"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![], 2)))
        .mount(&console.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/news/articles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![], 7)))
        .mount(&console.server)
        .await;

    let mut page = console.app.overview();
    page.load().await;

    assert!(page.is_superuser());
    assert_eq!(page.stats().total_users, 100);
    assert_eq!(
        page.news(),
        NewsCounts {
            total: 7,
            published: 4,
            draft: 2
        }
    );
}
