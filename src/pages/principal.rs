//! Thread Listing Page
//!
//! Owns the post collection. Trending, the category grid and the
//! popularity list are all derived from it and recompute when it changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::PostApi;
use crate::cache::Collection;
use crate::compose::Composer;
use crate::components::{CategoryTabs, NewPostForm, PopularCard, PostCard, TrendingCard};
use crate::config::{CATEGORIES, DEFAULT_CATEGORY, POPULAR_WINDOW, TRENDING_SIZE};
use crate::context::use_app;
use crate::forms::PostDraft;
use crate::models::Post;
use crate::ranking::{by_category, most_popular};
use crate::stats::trending;
use crate::store::NoticeKind;

#[component]
pub fn Principal() -> impl IntoView {
    let ctx = use_app();

    let posts = RwSignal::new(Collection::<Post>::new());
    let active = RwSignal::new(DEFAULT_CATEGORY.to_string());
    let creating = RwSignal::new(false);
    let composer = RwSignal::new(Composer::new(PostDraft::default()));

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.list_posts().await {
                Ok(fetched) => {
                    log::debug!("Loaded {} posts", fetched.len());
                    posts.update(|c| c.replace(fetched));
                }
                Err(e) => {
                    log::error!("Failed to load posts: {}", e);
                    posts.update(|c| c.replace(Vec::new()));
                    ctx.notify(NoticeKind::Error, e.user_message("Error al cargar las publicaciones."));
                }
            }
        });
    });

    let top_categories = Memo::new(move |_| posts.with(|c| trending(c.items(), TRENDING_SIZE)));
    let visible = Memo::new(move |_| active.with(|a| posts.with(|c| by_category(c.items(), a))));
    let popular = Memo::new(move |_| posts.with(|c| most_popular(c.items(), POPULAR_WINDOW)));

    let loading = move || posts.with(|c| !c.is_loaded());
    let total = move || posts.with(|c| c.len());

    view! {
        <div class="principal-page">
            <aside class="sidebar-left">
                <TrendingCard trending=top_categories active=active />
            </aside>

            <main class="main-content">
                <div class="content-header">
                    <div>
                        <h1 class="page-title">"Hilos de la comunidad"</h1>
                        <p class="page-subtitle">
                            {move || format!("{} publicaciones · {} categorías", total(), CATEGORIES.len())}
                        </p>
                    </div>
                    <button class="btn-pixelhub" on:click=move |_| creating.set(true)>
                        "+ Nueva Publicación"
                    </button>
                </div>

                <CategoryTabs active=active />

                {move || {
                    if loading() {
                        return view! {
                            <div class="loading-state">"Cargando publicaciones..."</div>
                        }.into_any();
                    }
                    let shown = visible.get();
                    if shown.is_empty() {
                        return view! {
                            <div class="empty-state">"No hay hilos en esta categoría"</div>
                        }.into_any();
                    }
                    view! {
                        <div class="hilos-grid">
                            {shown.into_iter().map(|post| view! { <PostCard post=post /> }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </main>

            <aside class="sidebar-right">
                <PopularCard popular=popular />
                <div class="sidebar-card">
                    <h3 class="sidebar-title">"📈 Estadísticas"</h3>
                    <p class="sidebar-text">"Total de publicaciones: " {total}</p>
                </div>
            </aside>

            <Show when=move || creating.get()>
                <NewPostForm composer=composer posts=posts open=creating />
            </Show>
        </div>
    }
}
