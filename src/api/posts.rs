//! Post Endpoints
//!
//! `/api/publicaciones` family.

use async_trait::async_trait;
use reqwest::Method;

use super::HttpApi;
use crate::error::ApiResult;
use crate::models::{NewPost, Post};

#[async_trait(?Send)]
pub trait PostApi {
    async fn list_posts(&self) -> ApiResult<Vec<Post>>;
    async fn get_post(&self, id: u32) -> ApiResult<Post>;
    /// Returns the post as stored by the backend (with id, date, likes)
    async fn create_post(&self, post: &NewPost) -> ApiResult<Post>;
    async fn delete_post(&self, id: u32) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl PostApi for HttpApi {
    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        self.send_json(self.request(Method::GET, "/api/publicaciones")).await
    }

    async fn get_post(&self, id: u32) -> ApiResult<Post> {
        let path = format!("/api/publicaciones/{}", id);
        self.send_json(self.request(Method::GET, &path)).await
    }

    async fn create_post(&self, post: &NewPost) -> ApiResult<Post> {
        let builder = self.request(Method::POST, "/api/publicaciones/publicar").json(post);
        self.send_json(builder).await
    }

    async fn delete_post(&self, id: u32) -> ApiResult<()> {
        let path = format!("/api/publicaciones/{}", id);
        self.send_empty(self.request(Method::DELETE, &path)).await
    }
}
