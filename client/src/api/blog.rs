use tokio_util::sync::CancellationToken;

use super::ApiClient;
use crate::error::ApiError;
use crate::http::ApiRequest;
use crate::types::{BlogCategory, BlogPostDetail, BlogPostListItem, BlogQuery, PageResponse};
use crate::url::Query;

impl ApiClient {
    pub async fn blog_categories(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<BlogCategory>, ApiError> {
        let url = self.url("/api/v1/blog/categories");
        self.transport
            .send_json(ApiRequest::get(url), cancel)
            .await
    }

    pub async fn blog_posts(
        &self,
        query: &BlogQuery,
        cancel: &CancellationToken,
    ) -> Result<PageResponse<BlogPostListItem>, ApiError> {
        let url = self.url_with("/api/v1/blog/posts", &query.to_query());
        self.transport
            .send_json(ApiRequest::get(url), cancel)
            .await
    }

    pub async fn blog_post_detail(
        &self,
        post_id: i64,
        cancel: &CancellationToken,
    ) -> Result<BlogPostDetail, ApiError> {
        let url = self.url(&format!("/api/v1/blog/posts/{post_id}"));
        self.transport
            .send_json(ApiRequest::get(url), cancel)
            .await
    }

    pub async fn related_posts(
        &self,
        post_id: i64,
        limit: u32,
        cancel: &CancellationToken,
    ) -> Result<Vec<BlogPostListItem>, ApiError> {
        let query = Query::new().push("limit", limit);
        let url = self.url_with(&format!("/api/v1/blog/posts/{post_id}/related"), &query);
        self.transport
            .send_json(ApiRequest::get(url), cancel)
            .await
    }
}
