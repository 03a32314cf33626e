//! Test doubles shared by unit tests

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::api::{AuthApi, CommentApi, PostApi, UserApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{Comment, LoginResponse, NewComment, NewPost, Post, ProfileUpdate, User};

pub const CREATED_AT: &str = "2025-06-01T12:00:00";

pub fn post(id: u32, category: &str, likes: u32) -> Post {
    Post {
        id,
        user_id: 1,
        category: category.to_string(),
        image_uri: None,
        title: format!("Hilo {}", id),
        description: String::new(),
        author_name: format!("autor{}", id),
        created_at: "2025-01-02T00:00:00".to_string(),
        likes,
    }
}

pub fn post_by(id: u32, author: &str) -> Post {
    Post {
        author_name: author.to_string(),
        ..post(id, "Shooter", 0)
    }
}

pub fn comment(id: u32, post_id: u32) -> Comment {
    Comment {
        id,
        post_id,
        user_id: 1,
        content: format!("Comentario {}", id),
        author_name: "autor".to_string(),
        created_at: CREATED_AT.to_string(),
    }
}

fn server_error() -> ApiError {
    ApiError::Status { status: 500, message: None }
}

/// In-memory backend with switchable failures
#[derive(Default)]
pub struct FakeApi {
    posts: Vec<Post>,
    comments: HashMap<u32, usize>,
    failing_comments: HashSet<u32>,
    user_count: Option<usize>,
    fail_posts: bool,
    fail_creates: bool,
    create_calls: Cell<usize>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    /// `post_id` has `count` comments
    pub fn with_comments(mut self, post_id: u32, count: usize) -> Self {
        self.comments.insert(post_id, count);
        self
    }

    pub fn failing_comments_for(mut self, post_id: u32) -> Self {
        self.failing_comments.insert(post_id);
        self
    }

    pub fn with_user_count(mut self, count: usize) -> Self {
        self.user_count = Some(count);
        self
    }

    pub fn failing_posts(mut self) -> Self {
        self.fail_posts = true;
        self
    }

    pub fn failing_creates(mut self) -> Self {
        self.fail_creates = true;
        self
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.get()
    }
}

#[async_trait(?Send)]
impl PostApi for FakeApi {
    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        if self.fail_posts {
            return Err(server_error());
        }
        Ok(self.posts.clone())
    }

    async fn get_post(&self, id: u32) -> ApiResult<Post> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::Status { status: 404, message: None })
    }

    async fn create_post(&self, body: &NewPost) -> ApiResult<Post> {
        self.create_calls.set(self.create_calls.get() + 1);
        if self.fail_creates {
            return Err(server_error());
        }
        Ok(Post {
            id: 1000,
            user_id: body.userid,
            category: body.category.clone(),
            image_uri: body.image_uri.clone(),
            title: body.title.clone(),
            description: body.description.clone(),
            author_name: body.authorname.clone(),
            created_at: CREATED_AT.to_string(),
            likes: 0,
        })
    }

    async fn delete_post(&self, _id: u32) -> ApiResult<()> {
        Ok(())
    }
}

#[async_trait(?Send)]
impl CommentApi for FakeApi {
    async fn list_comments_for(&self, post_id: u32) -> ApiResult<Vec<Comment>> {
        if self.failing_comments.contains(&post_id) {
            return Err(server_error());
        }
        let count = self.comments.get(&post_id).copied().unwrap_or(0);
        Ok((0..count as u32).map(|i| comment(i + 1, post_id)).collect())
    }

    async fn list_all_comments(&self) -> ApiResult<Vec<Comment>> {
        let mut all = Vec::new();
        for post in &self.posts {
            all.extend(self.list_comments_for(post.id).await.unwrap_or_default());
        }
        Ok(all)
    }

    async fn create_comment(&self, body: &NewComment) -> ApiResult<Comment> {
        self.create_calls.set(self.create_calls.get() + 1);
        if self.fail_creates {
            return Err(server_error());
        }
        Ok(Comment {
            id: 2000,
            post_id: body.publication_id,
            user_id: body.usuario_id,
            content: body.contenido.clone(),
            author_name: body.autor_nombre.clone(),
            created_at: CREATED_AT.to_string(),
        })
    }

    async fn delete_comment(&self, _id: u32) -> ApiResult<()> {
        Ok(())
    }
}

#[async_trait(?Send)]
impl UserApi for FakeApi {
    async fn get_user(&self, id: u32) -> ApiResult<User> {
        Ok(User {
            id: Some(id),
            nombre_usuario: "vega".to_string(),
            correo: "vega@example.com".to_string(),
        })
    }

    async fn update_user(&self, _id: u32, _update: &ProfileUpdate) -> ApiResult<()> {
        Ok(())
    }

    async fn count_users(&self) -> ApiResult<usize> {
        self.user_count.ok_or(ApiError::Status { status: 404, message: None })
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn login(&self, username: &str, _password: &str) -> ApiResult<LoginResponse> {
        Ok(LoginResponse {
            token: "fake-token".to_string(),
            usuario_id: "42".to_string(),
            nombre_usuario: username.to_string(),
            rol_id: "2".to_string(),
        })
    }
}
