//! Post Card Component
//!
//! One thread in the listing grid. Clicking opens the detail view.

use leptos::prelude::*;

use crate::context::use_app;
use crate::format::{avatar_initial, format_date_es};
use crate::models::Post;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let ctx = use_app();

    let initial = avatar_initial(&post.author_name);
    let date = format_date_es(&post.created_at);
    let category = post.category.clone();
    let title = post.title.clone();
    let description = post.description.clone();
    let author = post.author_name.clone();
    let likes = post.likes;

    view! {
        <div class="hilo-card" on:click=move |_| ctx.open_post(post.clone())>
            <div class="hilo-content">
                <div class="hilo-header">
                    <span class="category-badge">{category}</span>
                    <span class="hilo-likes">"❤️ " {likes}</span>
                </div>
                <h3 class="hilo-title">{title}</h3>
                <p class="hilo-description">{description}</p>
                <div class="hilo-footer">
                    <div class="author-info">
                        <div class="author-avatar">{initial}</div>
                        <div class="author-details">
                            <span class="author-name">{author}</span>
                            <span class="post-date">{date}</span>
                        </div>
                    </div>
                    <button class="btn-pixelhub-link">"Ver más →"</button>
                </div>
            </div>
        </div>
    }
}
