//! `bim-admin`: terminal front end of the BIM admin console
//!
//! Every subcommand opens the page it acts on, runs one action and prints the
//! result as a table. Credentials persist in the session file between runs.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use anyhow::{Context, Result, bail};
use bim_admin_core::AdminConfig;
use bim_admin_dashboard::{
    App, Notice, logout,
    pages::{
        ContactFilters, ContactFlag, ContactsPage, NewsDetailPage, NewsEditor, NewsTransition, ReportFilters, TestimonialFlag,
        UserAction, UserDetailPage, UserFilters, admins, categories, news, testimonials, users,
    },
    render,
};
use bim_admin_types::{
    AdminActiveFilter, AdminUpdate, CategoryInput, ContactStatusFilter, ContactSubject,
    ImageUpload, NewAdmin, NewUser, NewsStatus, RecordId, ReportAction, ReportDecision,
    ReportStatus, TestimonialFilter, UserType,
};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Command line interface for the BIM admin console
#[derive(Parser)]
#[command(
    name = "bim-admin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Administrative console for the BIM resource-sharing platform"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable structured JSON logging
    #[arg(long, global = true)]
    json: bool,

    /// Backend base URL; overrides the config file
    #[arg(long, value_name = "URL", global = true, env = "BIM_ADMIN_API_URL")]
    api_url: Option<String>,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the credentials
    Login {
        /// Account email; prompted when omitted
        #[arg(long)]
        email: Option<String>,
    },

    /// Forget the stored credentials
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show the sidebar for the signed-in user
    Nav {
        /// Route to mark as active
        #[arg(long, default_value = "/dashboard")]
        path: String,
    },

    /// User and article counters
    Overview,

    /// User shares
    Analytics,

    /// Manage users
    Users {
        /// Users subcommand
        #[command(subcommand)]
        action: UsersCommands,
    },

    /// Manage admin accounts (superadmins only)
    Admins {
        /// Admins subcommand
        #[command(subcommand)]
        action: AdminsCommands,
    },

    /// Manage news articles
    News {
        /// News subcommand
        #[command(subcommand)]
        action: NewsCommands,
    },

    /// Manage news categories
    Categories {
        /// Categories subcommand
        #[command(subcommand)]
        action: CategoriesCommands,
    },

    /// Handle contact messages
    Contacts {
        /// Contacts subcommand
        #[command(subcommand)]
        action: ContactsCommands,
    },

    /// Moderate reports
    Reports {
        /// Reports subcommand
        #[command(subcommand)]
        action: ReportsCommands,
    },

    /// Moderate testimonials
    Testimonials {
        /// Testimonials subcommand
        #[command(subcommand)]
        action: TestimonialsCommands,
    },

    /// Inspect configuration
    Config {
        /// Config subcommand
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Skip the confirmation prompt
#[derive(Args, Clone, Copy)]
struct Confirmation {
    /// Do not ask for confirmation
    #[arg(short, long)]
    yes: bool,
}

/// User commands
#[derive(Subcommand)]
enum UsersCommands {
    /// List users
    List {
        /// Free text search
        #[arg(short, long)]
        search: Option<String>,
        /// Verification state
        #[arg(long)]
        verified: Option<bool>,
        /// `false` lists banned users
        #[arg(long)]
        active: Option<bool>,
        /// Staff accounts
        #[arg(long)]
        staff: Option<bool>,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show one user
    Show {
        /// User id
        id: RecordId,
    },
    /// Create a user; the password is prompted
    Create {
        /// Email address
        #[arg(long)]
        email: String,
        /// Login name
        #[arg(long)]
        username: String,
        /// Given name
        #[arg(long, default_value = "")]
        first_name: String,
        /// Family name
        #[arg(long, default_value = "")]
        last_name: String,
        /// Study semester
        #[arg(long, default_value = "")]
        semester: String,
    },
    /// Toggle the verified flag
    Verify {
        /// User id
        id: RecordId,
    },
    /// Ban or unban
    Ban {
        /// User id
        id: RecordId,
        #[command(flatten)]
        confirm: Confirmation,
    },
    /// Delete a user
    Delete {
        /// User id
        id: RecordId,
        #[command(flatten)]
        confirm: Confirmation,
    },
}

/// Admin commands
#[derive(Subcommand)]
enum AdminsCommands {
    /// List admins
    List {
        /// Free text search
        #[arg(short, long)]
        search: Option<String>,
        /// all, active or inactive
        #[arg(long, default_value = "all")]
        filter: AdminActiveFilter,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Create an admin; the password is prompted
    Create {
        /// Login name
        #[arg(long)]
        username: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Given name
        #[arg(long, default_value = "")]
        first_name: String,
        /// Family name
        #[arg(long, default_value = "")]
        last_name: String,
        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Change profile fields
    Update {
        /// Admin id
        id: RecordId,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// New given name
        #[arg(long)]
        first_name: Option<String>,
        /// New family name
        #[arg(long)]
        last_name: Option<String>,
        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// Activate or deactivate
    Toggle {
        /// Admin id
        id: RecordId,
        #[command(flatten)]
        confirm: Confirmation,
    },
    /// Delete an admin
    Delete {
        /// Admin id
        id: RecordId,
        #[command(flatten)]
        confirm: Confirmation,
    },
}

/// Article form fields shared by create and edit
#[derive(Args)]
struct ArticleFields {
    /// Headline
    #[arg(long)]
    title: Option<String>,
    /// Body
    #[arg(long)]
    content: Option<String>,
    /// draft, published or archived
    #[arg(long)]
    status: Option<NewsStatus>,
    /// Highlight on the landing page
    #[arg(long)]
    featured: Option<bool>,
    /// Comma separated tags
    #[arg(long)]
    tags: Option<String>,
    /// SEO description
    #[arg(long)]
    meta_description: Option<String>,
    /// Start of the validity window (RFC 3339)
    #[arg(long)]
    valid_from: Option<DateTime<Utc>>,
    /// End of the validity window (RFC 3339)
    #[arg(long)]
    valid_until: Option<DateTime<Utc>>,
    /// Publication time (RFC 3339)
    #[arg(long)]
    published_at: Option<DateTime<Utc>>,
    /// Featured image file
    #[arg(long, value_name = "FILE")]
    image: Option<PathBuf>,
}

/// News commands
#[derive(Subcommand)]
enum NewsCommands {
    /// List articles
    List {
        /// Free text search
        #[arg(short, long)]
        search: Option<String>,
        /// draft, published or archived
        #[arg(long)]
        status: Option<NewsStatus>,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Items per page
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Show one article
    Show {
        /// Article id
        id: RecordId,
    },
    /// Create an article
    Create {
        #[command(flatten)]
        fields: ArticleFields,
    },
    /// Edit an article
    Edit {
        /// Article id
        id: RecordId,
        #[command(flatten)]
        fields: ArticleFields,
    },
    /// Publish an article
    Publish {
        /// Article id
        id: RecordId,
    },
    /// Move an article back to draft
    Unpublish {
        /// Article id
        id: RecordId,
    },
    /// Archive an article
    Archive {
        /// Article id
        id: RecordId,
    },
    /// Delete an article
    Delete {
        /// Article id
        id: RecordId,
        #[command(flatten)]
        confirm: Confirmation,
    },
}

/// Category commands
#[derive(Subcommand)]
enum CategoriesCommands {
    /// List categories
    List,
    /// Create a category
    Create {
        /// Category name
        #[arg(long)]
        name: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Update a category
    Update {
        /// Category slug
        slug: String,
        /// New name
        #[arg(long)]
        name: String,
        /// New description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a category
    Delete {
        /// Category slug
        slug: String,
        #[command(flatten)]
        confirm: Confirmation,
    },
}

/// Where to find a message in the list
#[derive(Args, Clone)]
struct ContactListArgs {
    /// Free text search
    #[arg(short, long)]
    search: Option<String>,
    /// feedback, request, support or other
    #[arg(long)]
    subject: Option<ContactSubject>,
    /// all, unread, read, unreplied or replied
    #[arg(long, default_value = "all")]
    status: ContactStatusFilter,
    /// registered or guest
    #[arg(long)]
    user_type: Option<UserType>,
    /// Page number
    #[arg(short, long, default_value_t = 1)]
    page: u32,
}

/// Contact commands
#[derive(Subcommand)]
enum ContactsCommands {
    /// List messages and counters
    List {
        #[command(flatten)]
        list: ContactListArgs,
    },
    /// Show one message
    Show {
        /// Message id
        id: RecordId,
        #[command(flatten)]
        list: ContactListArgs,
    },
    /// Toggle the read flag
    Read {
        /// Message id
        id: RecordId,
        #[command(flatten)]
        list: ContactListArgs,
    },
    /// Toggle the replied flag
    Replied {
        /// Message id
        id: RecordId,
        #[command(flatten)]
        list: ContactListArgs,
    },
    /// Replace the internal notes
    Notes {
        /// Message id
        id: RecordId,
        /// New notes
        notes: String,
    },
    /// Post a feedback message as a testimonial
    Testimonial {
        /// Message id
        id: RecordId,
        #[command(flatten)]
        list: ContactListArgs,
    },
}

/// Where to find a report in the list
#[derive(Args, Clone)]
struct ReportListArgs {
    /// Moderation state
    #[arg(long)]
    status: Option<ReportStatus>,
    /// Report type key
    #[arg(long = "type")]
    report_type: Option<String>,
    /// Free text search
    #[arg(short, long)]
    search: Option<String>,
    /// Page number
    #[arg(short, long, default_value_t = 1)]
    page: u32,
}

/// Report commands
#[derive(Subcommand)]
enum ReportsCommands {
    /// List reports and counters
    List {
        #[command(flatten)]
        list: ReportListArgs,
    },
    /// Open a report; pending reports are claimed for review
    View {
        /// Report id
        id: RecordId,
        #[command(flatten)]
        list: ReportListArgs,
    },
    /// Apply a moderation transition
    Act {
        /// Report id
        id: RecordId,
        /// verify, reject or review
        action: ReportAction,
        /// What was done about the reported user; required for verify
        #[arg(long, default_value = "")]
        action_taken: String,
        /// Internal notes
        #[arg(long, default_value = "")]
        notes: String,
    },
}

/// Testimonial commands
#[derive(Subcommand)]
enum TestimonialsCommands {
    /// List testimonials
    List {
        /// all, approved or pending
        #[arg(long, default_value = "all")]
        filter: TestimonialFilter,
    },
    /// Toggle approval
    Approve {
        /// Testimonial id
        id: RecordId,
    },
    /// Toggle featured
    Feature {
        /// Testimonial id
        id: RecordId,
    },
    /// Delete a testimonial
    Delete {
        /// Testimonial id
        id: RecordId,
        #[command(flatten)]
        confirm: Confirmation,
    },
}

/// Configuration commands
#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}

/// Main entry point for the console
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // It's okay if .env doesn't exist
        eprintln!("Note: .env file not loaded: {e}");
    }

    let cli = Cli::parse();

    let mut config = AdminConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    let level = cli
        .log_level
        .unwrap_or_else(|| config.logging.level.clone());
    bim_admin_core::init_logging(&level, cli.json || config.logging.is_json())?;
    debug!(base_url = %config.api.base_url, "Configuration loaded");

    let app = App::new(config)?;
    let outcome = run(&app, cli.command).await;

    if app.sent_to_login() {
        bail!("Not signed in or session expired. Run `bim-admin login`.");
    }
    outcome
}

async fn run(app: &App, command: Commands) -> Result<()> {
    match command {
        Commands::Login { email } => login(app, email).await,
        Commands::Logout => {
            logout(app.session(), app.navigator().as_ref())?;
            println!("Signed out");
            Ok(())
        }
        Commands::Whoami => whoami(app).await,
        Commands::Nav { path } => {
            bim_admin_core::navigator::check_route(&path)?;
            let sidebar = app.sidebar();
            if sidebar.is_superuser() {
                println!("Super Admin");
            }
            println!("{}", render::sidebar(&sidebar, &path));
            Ok(())
        }
        Commands::Overview => {
            let mut page = app.overview();
            page.load().await;
            if page.is_superuser() {
                println!("Super Admin");
            }
            println!("{}", render::overview(page.stats(), page.news()));
            Ok(())
        }
        Commands::Analytics => {
            let mut page = app.analytics();
            page.load().await;
            let total = page.stats().map_or(0, |s| s.total_users);
            println!("{}", render::shares(total, &page.shares()));
            Ok(())
        }
        Commands::Users { action } => users_command(app, action).await,
        Commands::Admins { action } => admins_command(app, action).await,
        Commands::News { action } => news_command(app, action).await,
        Commands::Categories { action } => categories_command(app, action).await,
        Commands::Contacts { action } => contacts_command(app, action).await,
        Commands::Reports { action } => reports_command(app, action).await,
        Commands::Testimonials { action } => testimonials_command(app, action).await,
        Commands::Config {
            action: ConfigCommands::Show,
        } => {
            println!("{}", app.config().to_toml()?);
            Ok(())
        }
    }
}

fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn confirm(prompt: &str, confirmation: Confirmation) -> Result<bool> {
    if confirmation.yes {
        return Ok(true);
    }
    Ok(Confirm::with_theme(&theme())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

fn prompt_password(confirmation: bool) -> Result<(String, String)> {
    let password = Password::with_theme(&theme())
        .with_prompt("Password")
        .interact()?;
    let repeated = if confirmation {
        Password::with_theme(&theme())
            .with_prompt("Confirm password")
            .interact()?
    } else {
        password.clone()
    };
    Ok((password, repeated))
}

/// Print a notice; error notices end the command with a failure
fn report(notice: Option<Notice>) -> Result<()> {
    match notice {
        Some(notice) if notice.is_error() => bail!(notice.message),
        Some(notice) => {
            println!("{}", render::notice(&notice));
            Ok(())
        }
        None => Ok(()),
    }
}

async fn login(app: &App, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::with_theme(&theme())
            .with_prompt("Email")
            .interact_text()?,
    };
    let (password, _) = prompt_password(false)?;
    let user = app
        .client()
        .auth()
        .login(&email, &password)
        .await
        .context("Login failed")?;
    println!(
        "Signed in as {}{}",
        user.username,
        if user.is_superuser { " (Super Admin)" } else { "" }
    );
    Ok(())
}

async fn whoami(app: &App) -> Result<()> {
    let Some(stored) = app.session().user() else {
        bail!("Not signed in. Run `bim-admin login`.");
    };
    let user = app.client().auth().me().await.unwrap_or(stored);
    println!(
        "{} <{}>{}",
        user.username,
        user.email,
        if user.is_superuser { " (Super Admin)" } else { "" }
    );
    Ok(())
}

async fn users_command(app: &App, action: UsersCommands) -> Result<()> {
    match action {
        UsersCommands::List {
            search,
            verified,
            active,
            staff,
            page,
        } => {
            let mut list = app.users();
            list.set_filters(UserFilters {
                search: search.unwrap_or_default(),
                verified,
                active,
                staff,
            })
            .await;
            list.go_to_page(page).await;
            list.refetch_stats().await;
            println!("{}", render::user_stats(list.stats()));
            println!("{}", render::users(list.list().items()));
            println!("{}", render::pager_line(list.pager()));
            Ok(())
        }
        UsersCommands::Show { id } => {
            let mut detail = UserDetailPage::new(app.client().clone(), id);
            detail.load().await;
            let user = detail.user().context("User not found")?;
            println!("{}", render::user_detail(user));
            Ok(())
        }
        UsersCommands::Create {
            email,
            username,
            first_name,
            last_name,
            semester,
        } => {
            let (password, password2) = prompt_password(true)?;
            let form = NewUser {
                email,
                username,
                password,
                password2,
                first_name,
                last_name,
                current_semester: semester,
            };
            let created = app.users().create(&form).await;
            match created {
                Ok(user) => {
                    println!("Created user {} ({})", user.username, user.id);
                    Ok(())
                }
                Err(notice) => bail!(notice.message),
            }
        }
        UsersCommands::Verify { id } => {
            user_action(app, id, UserAction::ToggleVerification, None).await
        }
        UsersCommands::Ban { id, confirm } => {
            user_action(app, id, UserAction::ToggleBan, Some(confirm)).await
        }
        UsersCommands::Delete { id, confirm } => {
            user_action(app, id, UserAction::Delete, Some(confirm)).await
        }
    }
}

async fn user_action(
    app: &App,
    id: RecordId,
    action: UserAction,
    confirmation: Option<Confirmation>,
) -> Result<()> {
    let mut detail = UserDetailPage::new(app.client().clone(), id);
    if let Some(confirmation) = confirmation {
        let prompt = if action == UserAction::Delete {
            users::DELETE_CONFIRM.to_string()
        } else {
            detail.load().await;
            let user = detail.user().context("User not found")?;
            action.confirm_prompt(user)
        };
        if !confirm(&prompt, confirmation)? {
            return Ok(());
        }
    }
    report(detail.perform(action).await)?;
    if let Some(user) = detail.user() {
        println!("{}", render::user_detail(user));
    } else {
        info!(user = id, action = ?action, "Done");
    }
    Ok(())
}

async fn admins_command(app: &App, action: AdminsCommands) -> Result<()> {
    let Some(mut page) = app.admins() else {
        bail!("Admins are only visible to superadmins");
    };
    match action {
        AdminsCommands::List {
            search,
            filter,
            page: number,
        } => {
            report(page.load().await)?;
            if let Some(search) = search {
                report(page.set_search(search).await)?;
            }
            if filter != AdminActiveFilter::All {
                report(page.set_filter(filter).await)?;
            }
            report(page.go_to_page(number).await)?;
            println!("{}", render::admin_stats(page.stats()));
            println!("{}", render::admins(page.list().items()));
            println!("{}", render::pager_line(page.pager()));
            Ok(())
        }
        AdminsCommands::Create {
            username,
            email,
            first_name,
            last_name,
            phone,
        } => {
            let (password, password2) = prompt_password(true)?;
            let form = NewAdmin {
                username,
                email,
                password,
                password2,
                first_name,
                last_name,
                phone_number: phone,
            };
            let notice = page.create(&form).await;
            for (field, messages) in page.form_errors() {
                eprintln!("{field}: {}", messages.join(", "));
            }
            if notice.is_none() && !page.form_errors().is_empty() {
                bail!("Admin was not created");
            }
            report(notice)
        }
        AdminsCommands::Update {
            id,
            email,
            first_name,
            last_name,
            phone,
        } => {
            let changes = AdminUpdate {
                email,
                first_name,
                last_name,
                phone_number: phone,
            };
            report(page.update(id, &changes).await)
        }
        AdminsCommands::Toggle { id, confirm: yes } => {
            if !confirm(admins::TOGGLE_CONFIRM, yes)? {
                return Ok(());
            }
            report(page.toggle_active(id).await)
        }
        AdminsCommands::Delete { id, confirm: yes } => {
            if !confirm(admins::DELETE_CONFIRM, yes)? {
                return Ok(());
            }
            report(page.delete(id).await)
        }
    }
}

async fn read_image(path: &Path) -> Result<ImageUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Cannot read image {}", path.display()))?;
    let file_name = path
        .file_name()
        .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned());
    Ok(ImageUpload {
        mime: ImageUpload::guess_mime(&file_name).to_string(),
        file_name,
        bytes,
    })
}

async fn fill_draft(editor: &mut NewsEditor, fields: ArticleFields) -> Result<()> {
    let image = match &fields.image {
        Some(path) => Some(read_image(path).await?),
        None => None,
    };
    let draft = editor.draft_mut();
    if let Some(title) = fields.title {
        draft.title = title;
    }
    if let Some(content) = fields.content {
        draft.content = content;
    }
    if let Some(status) = fields.status {
        draft.status = status;
    }
    if let Some(featured) = fields.featured {
        draft.is_featured = featured;
    }
    if let Some(tags) = fields.tags {
        draft.tags = tags;
    }
    if let Some(meta) = fields.meta_description {
        draft.meta_description = meta;
    }
    draft.valid_from = fields.valid_from.or(draft.valid_from);
    draft.valid_until = fields.valid_until.or(draft.valid_until);
    draft.published_at = fields.published_at.or(draft.published_at);
    draft.featured_image = image;
    Ok(())
}

async fn news_command(app: &App, action: NewsCommands) -> Result<()> {
    match action {
        NewsCommands::List {
            search,
            status,
            page,
            page_size,
        } => {
            let mut list = app.news();
            let filtered = page_size.is_some() || status.is_some() || search.is_some();
            if let Some(size) = page_size {
                list.set_page_size(size).await;
            }
            if status.is_some() {
                list.set_status(status).await;
            }
            if let Some(search) = search {
                list.set_search(search).await;
            }
            if !filtered {
                list.refetch().await;
            }
            list.go_to_page(page).await;
            println!("{}", render::news(list.list().items()));
            println!("{}", render::pager_line(list.pager()));
            Ok(())
        }
        NewsCommands::Show { id } => {
            let mut detail = NewsDetailPage::new(app.client().clone(), id);
            detail.load().await;
            let article = detail.article().context("Article not found")?;
            println!("{}", render::news_detail(article));
            Ok(())
        }
        NewsCommands::Create { fields } => {
            let mut editor = NewsEditor::create(app.client().clone());
            fill_draft(&mut editor, fields).await?;
            let article = editor.submit().await.map_err(|n| anyhow::anyhow!(n.message))?;
            println!("Created article {} ({})", article.title, article.id);
            Ok(())
        }
        NewsCommands::Edit { id, fields } => {
            let mut editor = NewsEditor::edit(app.client().clone(), id)
                .await
                .map_err(|n| anyhow::anyhow!(n.message))?;
            fill_draft(&mut editor, fields).await?;
            let article = editor.submit().await.map_err(|n| anyhow::anyhow!(n.message))?;
            println!("Updated article {} ({})", article.title, article.id);
            Ok(())
        }
        NewsCommands::Publish { id } => news_transition(app, id, NewsTransition::Publish).await,
        NewsCommands::Unpublish { id } => news_transition(app, id, NewsTransition::Unpublish).await,
        NewsCommands::Archive { id } => news_transition(app, id, NewsTransition::Archive).await,
        NewsCommands::Delete { id, confirm: yes } => {
            if !confirm(news::DELETE_CONFIRM, yes)? {
                return Ok(());
            }
            let mut detail = NewsDetailPage::new(app.client().clone(), id);
            report(detail.delete().await)?;
            println!("Deleted article {id}");
            Ok(())
        }
    }
}

async fn news_transition(app: &App, id: RecordId, transition: NewsTransition) -> Result<()> {
    let mut list = app.news();
    list.transition(id, transition).await;
    println!("{}", render::news(list.list().items()));
    Ok(())
}

async fn categories_command(app: &App, action: CategoriesCommands) -> Result<()> {
    let mut page = app.categories();
    match action {
        CategoriesCommands::List => {
            page.load().await;
            println!("{}", render::categories(page.categories()));
            Ok(())
        }
        CategoriesCommands::Create { name, description } => {
            report(Some(page.create(&CategoryInput { name, description }).await))
        }
        CategoriesCommands::Update {
            slug,
            name,
            description,
        } => report(Some(
            page.update(&slug, &CategoryInput { name, description }).await,
        )),
        CategoriesCommands::Delete { slug, confirm: yes } => {
            if !confirm(categories::DELETE_CONFIRM, yes)? {
                return Ok(());
            }
            report(Some(page.delete(&slug).await))
        }
    }
}

async fn open_contacts(
    app: &App,
    list: ContactListArgs,
) -> ContactsPage {
    let mut page = app.contacts();
    let filters = ContactFilters {
        search: list.search.unwrap_or_default(),
        subject: list.subject,
        status: list.status,
        user_type: list.user_type,
    };
    page.load().await;
    if filters != ContactFilters::default() {
        page.set_filters(filters).await;
    }
    page.go_to_page(list.page).await;
    page
}

async fn contacts_command(app: &App, action: ContactsCommands) -> Result<()> {
    match action {
        ContactsCommands::List { list } => {
            let page = open_contacts(app, list).await;
            println!("{}", render::contact_stats(page.stats()));
            println!("{}", render::contacts(page.list().items()));
            println!("{}", render::pager_line(page.pager()));
            Ok(())
        }
        ContactsCommands::Show { id, list } => {
            let mut page = open_contacts(app, list).await;
            if !page.select(id) {
                bail!("Message {id} is not on this page");
            }
            if let Some(message) = page.selected() {
                println!("{}", render::contact_detail(message));
            }
            Ok(())
        }
        ContactsCommands::Read { id, list } => {
            contact_toggle(app, id, ContactFlag::Read, list).await
        }
        ContactsCommands::Replied { id, list } => {
            contact_toggle(app, id, ContactFlag::Replied, list).await
        }
        ContactsCommands::Notes { id, notes } => {
            let mut page = app.contacts();
            report(page.save_notes(id, &notes).await)?;
            if let Some(message) = page.selected() {
                println!("{}", render::contact_detail(message));
            }
            Ok(())
        }
        ContactsCommands::Testimonial { id, list } => {
            let mut page = open_contacts(app, list).await;
            report(Some(page.post_as_testimonial(id).await))
        }
    }
}

async fn contact_toggle(
    app: &App,
    id: RecordId,
    flag: ContactFlag,
    list: ContactListArgs,
) -> Result<()> {
    let mut page = open_contacts(app, list).await;
    if !page.select(id) {
        bail!("Message {id} is not on this page");
    }
    page.toggle(id, flag).await;
    if let Some(message) = page.selected() {
        println!("{}", render::contact_detail(message));
    }
    Ok(())
}

async fn reports_command(app: &App, action: ReportsCommands) -> Result<()> {
    let mut page = app.reports();
    match action {
        ReportsCommands::List { list } => {
            let number = list.page;
            let filters = report_filters(list);
            page.load().await;
            if filters != ReportFilters::default() {
                page.set_filters(filters).await;
            }
            page.go_to_page(number).await;
            println!("{}", render::report_summary(&page.stats().summary));
            println!("{}", render::reports(page.list().items()));
            println!("{}", render::pager_line(page.pager()));
            Ok(())
        }
        ReportsCommands::View { id, list } => {
            let number = list.page;
            page.set_filters(report_filters(list)).await;
            page.go_to_page(number).await;
            let report = page.view(id).await.context("Report is not on this page")?;
            println!("{}", render::report_detail(report));
            Ok(())
        }
        ReportsCommands::Act {
            id,
            action,
            action_taken,
            notes,
        } => {
            let decision = ReportDecision {
                action_taken,
                admin_notes: notes,
            };
            report(Some(page.act(id, action, &decision).await))
        }
    }
}

fn report_filters(list: ReportListArgs) -> ReportFilters {
    ReportFilters {
        status: list.status,
        report_type: list.report_type,
        search: list.search.unwrap_or_default(),
    }
}

async fn testimonials_command(app: &App, action: TestimonialsCommands) -> Result<()> {
    let mut page = app.testimonials();
    page.load().await;
    match action {
        TestimonialsCommands::List { filter } => {
            page.set_filter(filter).await;
        }
        TestimonialsCommands::Approve { id } => {
            page.toggle(id, TestimonialFlag::Approved).await;
        }
        TestimonialsCommands::Feature { id } => {
            page.toggle(id, TestimonialFlag::Featured).await;
        }
        TestimonialsCommands::Delete { id, confirm: yes } => {
            if !confirm(testimonials::DELETE_CONFIRM, yes)? {
                return Ok(());
            }
            page.delete(id).await;
        }
    }
    println!(
        "Approved: {}  Pending: {}",
        page.approved_count(),
        page.pending_count()
    );
    println!("{}", render::testimonials(page.testimonials()));
    Ok(())
}
