use bim_admin_types::{News, NewsDraft, NewsQuery, NewsStatus, Page, RecordId};
use reqwest::{
    Method,
    multipart::{Form, Part},
};
use serde_json::Value;
use validator::Validate;

use crate::{ApiClient, ClientResult};

/// `/api/news/articles/`
#[derive(Debug, Clone, Copy)]
pub struct NewsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NewsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// One page of articles
    pub async fn list(&self, query: &NewsQuery) -> ClientResult<Page<News>> {
        self.client.get_with("/api/news/articles/", query).await
    }

    /// Number of articles in `status`, or all when `None`
    pub async fn count(&self, status: Option<NewsStatus>) -> ClientResult<u64> {
        let page = self.list(&NewsQuery::count_only(status)).await?;
        Ok(page.count)
    }

    /// One article with its body
    pub async fn get(&self, id: RecordId) -> ClientResult<News> {
        self.client
            .get_json(&format!("/api/news/articles/{id}/"))
            .await
    }

    /// Create an article from a multipart form
    pub async fn create(&self, draft: &NewsDraft) -> ClientResult<News> {
        draft.validate()?;
        self.client
            .send_multipart(Method::POST, "/api/news/articles/", form(draft)?)
            .await
    }

    /// Replace an article's fields from a multipart form
    pub async fn update(&self, id: RecordId, draft: &NewsDraft) -> ClientResult<News> {
        draft.validate()?;
        self.client
            .send_multipart(
                Method::PATCH,
                &format!("/api/news/articles/{id}/"),
                form(draft)?,
            )
            .await
    }

    /// Delete an article
    pub async fn delete(&self, id: RecordId) -> ClientResult<()> {
        self.client
            .delete(&format!("/api/news/articles/{id}/"))
            .await
    }

    /// Make an article visible
    pub async fn publish(&self, id: RecordId) -> ClientResult<Value> {
        self.transition(id, "publish").await
    }

    /// Move an article back to draft
    pub async fn unpublish(&self, id: RecordId) -> ClientResult<Value> {
        self.transition(id, "unpublish").await
    }

    /// Withdraw an article from listings
    pub async fn archive(&self, id: RecordId) -> ClientResult<Value> {
        self.transition(id, "archive").await
    }

    async fn transition(&self, id: RecordId, action: &str) -> ClientResult<Value> {
        self.client
            .post_action(&format!("/api/news/articles/{id}/{action}/"))
            .await
    }
}

fn form(draft: &NewsDraft) -> ClientResult<Form> {
    let mut form = draft
        .text_fields()
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));

    if let Some(image) = &draft.featured_image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime)?;
        form = form.part("featured_image", part);
    }
    Ok(form)
}
