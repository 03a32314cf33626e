//! Comment Endpoints

use async_trait::async_trait;
use reqwest::Method;

use super::HttpApi;
use crate::error::ApiResult;
use crate::models::{Comment, NewComment};

#[async_trait(?Send)]
pub trait CommentApi {
    async fn list_comments_for(&self, post_id: u32) -> ApiResult<Vec<Comment>>;
    /// Every comment on the site (moderation)
    async fn list_all_comments(&self) -> ApiResult<Vec<Comment>>;
    async fn create_comment(&self, comment: &NewComment) -> ApiResult<Comment>;
    async fn delete_comment(&self, id: u32) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl CommentApi for HttpApi {
    async fn list_comments_for(&self, post_id: u32) -> ApiResult<Vec<Comment>> {
        let path = format!("/api/comentarios/publicacion/{}", post_id);
        self.send_json(self.request(Method::GET, &path)).await
    }

    async fn list_all_comments(&self) -> ApiResult<Vec<Comment>> {
        self.send_json(self.request(Method::GET, "/api/comentarios")).await
    }

    async fn create_comment(&self, comment: &NewComment) -> ApiResult<Comment> {
        let builder = self.request(Method::POST, "/api/comentarios/comentar").json(comment);
        self.send_json(builder).await
    }

    async fn delete_comment(&self, id: u32) -> ApiResult<()> {
        let path = format!("/api/comentarios/{}", id);
        self.send_empty(self.request(Method::DELETE, &path)).await
    }
}
