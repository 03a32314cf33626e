//! Authentication Endpoint

use async_trait::async_trait;
use reqwest::Method;

use super::HttpApi;
use crate::error::ApiResult;
use crate::models::{LoginArgs, LoginResponse};

#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse>;
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let args = LoginArgs {
            nombre_usuario: username,
            contrasena: password,
        };
        let builder = self.request(Method::POST, "/api/v1/auth/login").json(&args);
        self.send_json(builder).await
    }
}
