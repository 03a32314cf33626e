//! User Endpoints

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::HttpApi;
use crate::error::ApiResult;
use crate::models::{ProfileUpdate, User};

#[async_trait(?Send)]
pub trait UserApi {
    async fn get_user(&self, id: u32) -> ApiResult<User>;
    async fn update_user(&self, id: u32, update: &ProfileUpdate) -> ApiResult<()>;
    /// Number of registered users. Not every backend exposes this.
    async fn count_users(&self) -> ApiResult<usize>;
}

#[async_trait(?Send)]
impl UserApi for HttpApi {
    async fn get_user(&self, id: u32) -> ApiResult<User> {
        let path = format!("/api/v1/users/{}", id);
        self.send_json(self.request(Method::GET, &path)).await
    }

    async fn update_user(&self, id: u32, update: &ProfileUpdate) -> ApiResult<()> {
        let path = format!("/api/v1/users/{}", id);
        self.send_empty(self.request(Method::PUT, &path).json(update)).await
    }

    async fn count_users(&self) -> ApiResult<usize> {
        // Only the length matters; the user shape differs between backends
        let users: Vec<Value> = self.send_json(self.request(Method::GET, "/api/v1/usuarios")).await?;
        Ok(users.len())
    }
}
