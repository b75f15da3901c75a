//! Endpoint groups, one per backend resource

mod admins;
mod auth;
mod categories;
mod contacts;
mod news;
mod reports;
mod testimonials;
mod users;

pub use admins::AdminsApi;
pub(crate) use auth::LOGIN_PATH;
pub use auth::AuthApi;
pub use categories::CategoriesApi;
pub use contacts::ContactsApi;
pub use news::NewsApi;
pub use reports::ReportsApi;
pub use testimonials::TestimonialsApi;
pub use users::UsersApi;
