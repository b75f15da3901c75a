//! News articles and categories

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use validator::Validate;

use crate::{RecordId, TypesError};

/// Publication state of an article
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsStatus {
    /// Not visible to readers
    #[default]
    Draft,
    /// Visible to readers
    Published,
    /// Withdrawn from listings
    Archived,
}

impl NewsStatus {
    /// Wire value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for NewsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewsStatus {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            other => Err(TypesError::unknown("news status", other)),
        }
    }
}

/// Article author summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsAuthor {
    /// User id
    pub id: RecordId,
    /// Login name
    pub username: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Avatar URL
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Category reference embedded in an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsCategoryRef {
    /// Category id
    pub id: RecordId,
    /// Category name
    pub name: String,
    /// URL slug
    pub slug: String,
    /// Description
    #[serde(default)]
    pub description: String,
}

/// A news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    /// Record id
    pub id: RecordId,
    /// Headline
    pub title: String,
    /// URL slug
    pub slug: String,
    /// Short summary
    #[serde(default)]
    pub summary: String,
    /// Body; omitted by the list endpoint
    #[serde(default)]
    pub content: Option<String>,
    /// Author
    pub author: NewsAuthor,
    /// Category, if assigned
    #[serde(default)]
    pub category: Option<NewsCategoryRef>,
    /// Stored image path
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Absolute image URL
    #[serde(default)]
    pub featured_image_url: Option<String>,
    /// Publication state
    pub status: NewsStatus,
    /// Highlighted on the landing page
    #[serde(default)]
    pub is_featured: bool,
    /// View counter
    #[serde(default)]
    pub views_count: u64,
    /// Comma separated tags
    #[serde(default)]
    pub tags: String,
    /// Tags split by the backend
    #[serde(default)]
    pub tags_list: Vec<String>,
    /// SEO description
    #[serde(default)]
    pub meta_description: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification
    pub updated_at: DateTime<Utc>,
    /// Publication time
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Start of the validity window
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,
    /// End of the validity window
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
    /// Number of comments
    #[serde(default)]
    pub comments_count: Option<u64>,
}

/// A news category with usage count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsCategory {
    /// Record id
    pub id: RecordId,
    /// Category name
    pub name: String,
    /// URL slug, used as the key for updates
    pub slug: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Articles in this category
    #[serde(default)]
    pub news_count: u64,
}

/// Body for creating or updating a category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct CategoryInput {
    /// Category name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// An image attached to an article form
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name sent with the part
    pub file_name: String,
    /// MIME type
    pub mime: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageUpload {
    /// Guess the MIME type from the file extension
    pub fn guess_mime(file_name: &str) -> &'static str {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
    }
}

/// Create/edit form for an article, sent as `multipart/form-data`
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct NewsDraft {
    /// Headline
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    /// Short summary; the title is used when empty
    pub summary: String,
    /// Body
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Publication state
    pub status: NewsStatus,
    /// Highlight on the landing page
    pub is_featured: bool,
    /// Comma separated tags
    pub tags: String,
    /// SEO description
    pub meta_description: String,
    /// Start of the validity window
    pub valid_from: Option<DateTime<Utc>>,
    /// End of the validity window
    pub valid_until: Option<DateTime<Utc>>,
    /// Publication time
    pub published_at: Option<DateTime<Utc>>,
    /// New featured image
    pub featured_image: Option<ImageUpload>,
}

impl NewsDraft {
    /// Prefill an edit form from an existing article
    pub fn from_article(news: &News) -> Self {
        Self {
            title: news.title.clone(),
            summary: news.summary.clone(),
            content: news.content.clone().unwrap_or_default(),
            status: news.status,
            is_featured: news.is_featured,
            tags: news.tags.clone(),
            meta_description: news.meta_description.clone(),
            valid_from: news.valid_from,
            valid_until: news.valid_until,
            published_at: news.published_at,
            featured_image: None,
        }
    }

    /// Text parts of the form, in submission order
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let summary = if self.summary.trim().is_empty() {
            self.title.clone()
        } else {
            self.summary.clone()
        };
        let mut fields = vec![
            ("title", self.title.clone()),
            ("summary", summary),
            ("content", self.content.clone()),
            ("status", self.status.as_str().to_string()),
            ("is_featured", self.is_featured.to_string()),
            ("tags", self.tags.clone()),
            ("meta_description", self.meta_description.clone()),
        ];
        for (name, value) in [
            ("valid_from", self.valid_from),
            ("valid_until", self.valid_until),
            ("published_at", self.published_at),
        ] {
            if let Some(value) = value {
                fields.push((name, value.to_rfc3339()));
            }
        }
        fields
    }
}
