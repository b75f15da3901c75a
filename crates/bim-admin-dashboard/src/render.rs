//! Terminal tables for records and counters

use bim_admin_types::{
    Admin, AdminStatistics, ContactMessage, ContactStatistics, News, NewsCategory, Report,
    ReportSummary, Testimonial, User, UserDetail, UserStatistics,
};
use chrono::{DateTime, Utc};
use comfy_table::{Cell, ContentArrangement, Table};

use crate::{
    navigation::Sidebar,
    notice::{Notice, NoticeLevel},
    pages::{NewsCounts, Share},
    pagination::Pager,
};

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.iter().copied());
    table
}

fn key_values<'a>(rows: impl IntoIterator<Item = (&'a str, String)>) -> Table {
    let mut table = table(&["Field", "Value"]);
    for (key, value) in rows {
        table.add_row([Cell::new(key), Cell::new(value)]);
    }
    table
}

/// `2024-05-01 10:00`
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

fn optional_timestamp(at: Option<&DateTime<Utc>>) -> String {
    at.map_or_else(|| "-".to_string(), timestamp)
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn flag(value: bool, pending: bool) -> String {
    if pending {
        format!("{}*", yes_no(value))
    } else {
        yes_no(value).to_string()
    }
}

/// `Page 2 of 5 (showing 21 to 40 of 93)`
pub fn pager_line(pager: &Pager) -> String {
    let (start, end) = pager.showing();
    format!(
        "Page {} of {} (showing {start} to {end} of {})",
        pager.page(),
        pager.total_pages(),
        pager.count()
    )
}

/// Sidebar entries, the active one marked
pub fn sidebar(sidebar: &Sidebar, current: &str) -> Table {
    let mut table = table(&["", "Section", "Route"]);
    for entry in sidebar.entries() {
        let marker = if entry.is_active(current) { ">" } else { "" };
        table.add_row([marker, entry.label, entry.href]);
    }
    table
}

/// Overview counters
pub fn overview(stats: &UserStatistics, news: NewsCounts) -> Table {
    key_values([
        ("Total users", stats.total_users.to_string()),
        ("Verified users", stats.verified_users.to_string()),
        ("Active users", stats.active_users.to_string()),
        ("Staff users", stats.staff_users.to_string()),
        ("News articles", news.total.to_string()),
        ("Published", news.published.to_string()),
        ("Drafts", news.draft.to_string()),
    ])
}

/// Analytics shares
pub fn shares(total: u64, shares: &[Share]) -> Table {
    let mut table = table(&["Segment", "Users", "Share"]);
    table.add_row(["Total".to_string(), total.to_string(), "100.0%".to_string()]);
    for share in shares {
        table.add_row([
            share.label.to_string(),
            share.count.to_string(),
            format!("{:.1}%", share.percent),
        ]);
    }
    table
}

/// Users list
pub fn users(users: &[User]) -> Table {
    let mut table = table(&["ID", "Username", "Name", "Email", "Verified", "Active", "Joined"]);
    for user in users {
        table.add_row([
            user.id.to_string(),
            user.username.clone(),
            user.display_name().to_string(),
            user.email.clone(),
            yes_no(user.is_verified).to_string(),
            yes_no(user.is_active).to_string(),
            timestamp(&user.date_joined),
        ]);
    }
    table
}

/// User counters
pub fn user_stats(stats: &UserStatistics) -> Table {
    key_values([
        ("Total", stats.total_users.to_string()),
        ("Verified", stats.verified_users.to_string()),
        ("Unverified", stats.unverified_users.to_string()),
        ("Active", stats.active_users.to_string()),
        ("Banned", stats.inactive_users.to_string()),
        ("Staff", stats.staff_users.to_string()),
    ])
}

/// One user profile
pub fn user_detail(detail: &UserDetail) -> Table {
    let user = &detail.user;
    key_values([
        ("ID", user.id.to_string()),
        ("Username", user.username.clone()),
        ("Name", user.display_name().to_string()),
        ("Email", user.email.clone()),
        ("Verified", yes_no(user.is_verified).to_string()),
        ("Active", yes_no(user.is_active).to_string()),
        ("Staff", yes_no(user.is_staff).to_string()),
        ("Superuser", yes_no(detail.is_superuser).to_string()),
        ("Semester", user.current_semester.clone().unwrap_or_default()),
        ("Phone", detail.phone_number.clone()),
        ("City", detail.city.clone()),
        ("Country", detail.country.clone()),
        ("Posts", user.posts_count.to_string()),
        ("Materials", user.materials_count.to_string()),
        ("Donations", user.successful_donations_count.to_string()),
        ("Joined", timestamp(&user.date_joined)),
        ("Last login", optional_timestamp(detail.last_login.as_ref())),
    ])
}

/// Admins list
pub fn admins(admins: &[Admin]) -> Table {
    let mut table = table(&["ID", "Username", "Email", "Phone", "Active", "Last login"]);
    for admin in admins {
        table.add_row([
            admin.id.to_string(),
            admin.username.clone(),
            admin.email.clone(),
            admin.phone_number.clone(),
            yes_no(admin.is_active).to_string(),
            optional_timestamp(admin.last_login.as_ref()),
        ]);
    }
    table
}

/// Admin counters
pub fn admin_stats(stats: &AdminStatistics) -> Table {
    key_values([
        ("Total", stats.total_admins.to_string()),
        ("Active", stats.active_admins.to_string()),
        ("Inactive", stats.inactive_admins.to_string()),
    ])
}

/// Articles list
pub fn news(articles: &[News]) -> Table {
    let mut table = table(&["ID", "Title", "Category", "Author", "Status", "Views", "Created"]);
    for article in articles {
        table.add_row([
            article.id.to_string(),
            article.title.clone(),
            article
                .category
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            article.author.username.clone(),
            article.status.to_string(),
            article.views_count.to_string(),
            timestamp(&article.created_at),
        ]);
    }
    table
}

/// One article
pub fn news_detail(article: &News) -> Table {
    key_values([
        ("ID", article.id.to_string()),
        ("Title", article.title.clone()),
        ("Slug", article.slug.clone()),
        ("Status", article.status.to_string()),
        ("Featured", yes_no(article.is_featured).to_string()),
        ("Author", article.author.username.clone()),
        (
            "Category",
            article
                .category
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
        ),
        ("Tags", article.tags_list.join(", ")),
        ("Summary", article.summary.clone()),
        ("Content", article.content.clone().unwrap_or_default()),
        ("Image", article.featured_image_url.clone().unwrap_or_default()),
        ("Views", article.views_count.to_string()),
        ("Created", timestamp(&article.created_at)),
        ("Published", optional_timestamp(article.published_at.as_ref())),
        ("Valid from", optional_timestamp(article.valid_from.as_ref())),
        ("Valid until", optional_timestamp(article.valid_until.as_ref())),
    ])
}

/// Categories list
pub fn categories(categories: &[NewsCategory]) -> Table {
    let mut table = table(&["Slug", "Name", "Description", "Articles"]);
    for category in categories {
        table.add_row([
            category.slug.clone(),
            category.name.clone(),
            category.description.clone(),
            category.news_count.to_string(),
        ]);
    }
    table
}

/// Contact messages; a `*` marks values waiting for the server
pub fn contacts(messages: &[ContactMessage]) -> Table {
    let mut table = table(&["ID", "From", "Subject", "Type", "Read", "Replied", "Received"]);
    for message in messages {
        table.add_row([
            message.id.to_string(),
            format!("{} <{}>", message.name, message.email),
            message.subject.label().to_string(),
            message.user_type.to_string(),
            flag(message.is_read.get(), message.is_read.is_pending()),
            flag(message.is_replied.get(), message.is_replied.is_pending()),
            timestamp(&message.created_at),
        ]);
    }
    table
}

/// Message counters
pub fn contact_stats(stats: &ContactStatistics) -> Table {
    key_values([
        ("Total", stats.total_messages.to_string()),
        ("Unread", stats.unread_messages.to_string()),
        ("Unreplied", stats.unreplied_messages.to_string()),
        ("Registered senders", stats.registered_users.to_string()),
        ("Guest senders", stats.guest_users.to_string()),
        ("Feedback", stats.by_subject.feedback.to_string()),
        ("Requests", stats.by_subject.request.to_string()),
        ("Support", stats.by_subject.support.to_string()),
        ("Other", stats.by_subject.other.to_string()),
    ])
}

/// One contact message
pub fn contact_detail(message: &ContactMessage) -> Table {
    key_values([
        ("ID", message.id.to_string()),
        ("From", message.name.clone()),
        ("Email", message.email.clone()),
        ("Account", message.user_username.clone().unwrap_or_default()),
        ("Subject", message.subject.label().to_string()),
        ("Message", message.message.clone()),
        ("Read", yes_no(message.is_read.get()).to_string()),
        ("Replied", yes_no(message.is_replied.get()).to_string()),
        ("Notes", message.admin_notes.clone()),
        ("Received", timestamp(&message.created_at)),
    ])
}

/// Reports list
pub fn reports(reports: &[Report]) -> Table {
    let mut table = table(&["ID", "Reporter", "Reported", "Type", "Reason", "Status", "Filed"]);
    for report in reports {
        table.add_row([
            report.id.to_string(),
            report.reporter.username.clone(),
            format!(
                "{} ({})",
                report.reported_user.username, report.reported_user.report_count
            ),
            report.report_type.clone(),
            report.reason.clone(),
            report.status.label().to_string(),
            timestamp(&report.created_at),
        ]);
    }
    table
}

/// Moderation counters
pub fn report_summary(summary: &ReportSummary) -> Table {
    key_values([
        ("Total", summary.total_reports.to_string()),
        ("Pending", summary.pending_reports.to_string()),
        ("Under review", summary.under_review_reports.to_string()),
        ("Verified", summary.verified_reports.to_string()),
        ("Rejected", summary.rejected_reports.to_string()),
        ("Resolved", summary.resolved_reports.to_string()),
    ])
}

/// One report
pub fn report_detail(report: &Report) -> Table {
    key_values([
        ("ID", report.id.to_string()),
        ("Reporter", report.reporter.username.clone()),
        ("Reported user", report.reported_user.username.clone()),
        (
            "Previous reports",
            report.reported_user.report_count.to_string(),
        ),
        ("Type", report.report_type.clone()),
        ("Reason", report.reason.clone()),
        ("Description", report.description.clone()),
        ("Screenshot", report.screenshot.clone().unwrap_or_default()),
        ("Status", report.status.label().to_string()),
        (
            "Reviewed by",
            report.reviewed_by_username.clone().unwrap_or_default(),
        ),
        ("Action taken", report.action_taken.clone()),
        ("Notes", report.admin_notes.clone()),
        ("Filed", timestamp(&report.created_at)),
    ])
}

/// Testimonials list; a `*` marks values waiting for the server
pub fn testimonials(testimonials: &[Testimonial]) -> Table {
    let mut table = table(&["ID", "Name", "Title", "Message", "Approved", "Featured", "Order"]);
    for testimonial in testimonials {
        table.add_row([
            testimonial.id.to_string(),
            testimonial.name.clone(),
            testimonial.title.clone(),
            testimonial.message.clone(),
            flag(
                testimonial.is_approved.get(),
                testimonial.is_approved.is_pending(),
            ),
            flag(
                testimonial.is_featured.get(),
                testimonial.is_featured.is_pending(),
            ),
            testimonial.display_order.to_string(),
        ]);
    }
    table
}

/// One-line rendering of a notice
pub fn notice(notice: &Notice) -> String {
    let prefix = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "ok",
        NoticeLevel::Error => "error",
    };
    format!("[{prefix}] {}", notice.message)
}
