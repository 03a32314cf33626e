//! Listing Sidebar Cards
//!
//! "Tendencias" (top categories) on the left, "Más Populares" on the right.

use leptos::prelude::*;

use crate::context::use_app;
use crate::format::publication_count_label;
use crate::models::Post;
use crate::stats::CategoryStat;

/// Top categories by post count; clicking one selects its tab
#[component]
pub fn TrendingCard(trending: Memo<Vec<CategoryStat>>, active: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="sidebar-card">
            <h3 class="sidebar-title">"📊 Tendencias"</h3>
            <div class="trending-topics">
                {move || {
                    let stats = trending.get();
                    if stats.is_empty() {
                        return view! {
                            <p class="sidebar-text empty">"No hay publicaciones aún"</p>
                        }.into_any();
                    }
                    stats.into_iter().enumerate().map(|(index, stat)| {
                        let category = stat.category.clone();
                        view! {
                            <div class="trending-item" on:click=move |_| active.set(category.clone())>
                                <span class="trending-rank">{index + 1}</span>
                                <div class="trending-info">
                                    <p class="trending-name">{stat.category}</p>
                                    <span class="trending-count">{publication_count_label(stat.count)}</span>
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}

/// Ranked "most popular" list
#[component]
pub fn PopularCard(popular: Memo<Vec<Post>>) -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="sidebar-card">
            <h3 class="sidebar-title">"🔥 Más Populares"</h3>
            <div class="popular-posts">
                {move || popular.get().into_iter().enumerate().map(|(index, post)| {
                    let title = post.title.clone();
                    view! {
                        <div class="popular-post-item" on:click=move |_| ctx.open_post(post.clone())>
                            <span class="popular-rank">"#" {index + 1}</span>
                            <div class="popular-info">
                                <p class="popular-title">{title}</p>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
