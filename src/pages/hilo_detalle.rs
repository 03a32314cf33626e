//! Thread Detail Page
//!
//! A single post with its comments and the comment box.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{CommentApi, PostApi};
use crate::cache::{Collection, Placement};
use crate::compose::{settle_into, Composer};
use crate::config::COMMENT_MAX_LEN;
use crate::context::use_app;
use crate::error::SubmitError;
use crate::format::{avatar_initial, format_date_es};
use crate::forms::CommentDraft;
use crate::models::{Comment, Post};
use crate::routes::Route;
use crate::session::Author;
use crate::store::NoticeKind;

#[derive(Debug, Clone, PartialEq)]
enum PostState {
    Loading,
    Ready(Post),
    Missing,
}

#[component]
pub fn HiloDetalle(id: u32) -> impl IntoView {
    let ctx = use_app();

    let post = RwSignal::new(PostState::Loading);
    let comments = RwSignal::new(Collection::<Comment>::new());
    let composer = RwSignal::new(Composer::new(CommentDraft::for_post(id)));

    Effect::new(move |_| {
        let api = ctx.api();
        let handed_over = ctx.take_handoff(id);
        spawn_local(async move {
            match handed_over {
                Some(known) => post.set(PostState::Ready(known)),
                None => match api.get_post(id).await {
                    Ok(fetched) => post.set(PostState::Ready(fetched)),
                    Err(e) => {
                        log::error!("Failed to load post {}: {}", id, e);
                        post.set(PostState::Missing);
                    }
                },
            }

            match api.list_comments_for(id).await {
                Ok(fetched) => comments.update(|c| c.replace(fetched)),
                Err(e) => {
                    log::warn!("Failed to load comments for post {}: {}", id, e);
                    comments.update(|c| c.replace(Vec::new()));
                }
            }
        });
    });

    let add_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let author = Author::of(ctx.session_untracked().as_ref());
        let started = composer.write().begin(&author);
        let body = match started {
            Ok(body) => body,
            Err(SubmitError::Busy) | Err(SubmitError::Invalid(_)) => return,
        };

        let api = ctx.api();
        spawn_local(async move {
            let outcome = api.create_comment(&body).await;
            match settle_into(composer, comments, outcome, Placement::Back) {
                None => log::debug!("Left post {} before the comment came back", id),
                Some(Ok(())) => {}
                Some(Err(e)) => {
                    log::error!("Failed to comment on post {}: {}", id, e);
                    if !ctx.expire_if_unauthorized(&e) {
                        ctx.notify(NoticeKind::Error, e.user_message("Error al comentar."));
                    }
                }
            }
        });
    };

    let submitting = move || composer.with(|c| c.is_submitting());
    let can_submit = move || composer.with(|c| c.draft.can_submit()) && !submitting();

    let post_view = move || match post.get() {
        PostState::Loading => view! { <div class="loading-state">"Cargando..."</div> }.into_any(),
        PostState::Missing => view! {
            <div class="empty-state">
                <p>"No se encontró la publicación."</p>
                <button class="btn-pixelhub" on:click=move |_| ctx.navigate(Route::Principal)>
                    "Volver a los hilos"
                </button>
            </div>
        }.into_any(),
        PostState::Ready(p) => {
            let initial = avatar_initial(&p.author_name);
            let date = format_date_es(&p.created_at);
            view! {
                <article class="hilo-detalle">
                    <div class="hilo-header">
                        <span class="category-badge">{p.category}</span>
                        <span class="hilo-likes">"❤️ " {p.likes}</span>
                    </div>
                    <h1 class="hilo-title">{p.title}</h1>
                    <div class="author-info">
                        <div class="author-avatar">{initial}</div>
                        <div class="author-details">
                            <span class="author-name">{p.author_name}</span>
                            <span class="post-date">{date}</span>
                        </div>
                    </div>
                    {p.image_uri.filter(|uri| !uri.is_empty()).map(|uri| view! {
                        <img class="hilo-image" src=uri alt="Imagen de la publicación" />
                    })}
                    <p class="hilo-description">{p.description}</p>
                </article>
            }.into_any()
        }
    };

    let comments_view = move || {
        if comments.with(|c| !c.is_loaded()) {
            return view! { <p class="loading-state">"Cargando comentarios..."</p> }.into_any();
        }
        if comments.with(|c| c.is_empty()) {
            return view! {
                <p class="empty-state">"Aún no hay comentarios. ¡Sé el primero!"</p>
            }.into_any();
        }
        comments.with(|c| {
            c.items().iter().map(|comment| {
                let author = comment.display_author();
                let initial = avatar_initial(&author);
                let date = format_date_es(&comment.created_at);
                let content = comment.content.clone();
                view! {
                    <div class="comment-item">
                        <div class="author-avatar small">{initial}</div>
                        <div class="comment-body">
                            <div class="comment-meta">
                                <span class="author-name">{author}</span>
                                <span class="post-date">{date}</span>
                            </div>
                            <p class="comment-text">{content}</p>
                        </div>
                    </div>
                }
            }).collect_view()
        }).into_any()
    };

    view! {
        <div class="hilo-detalle-page">
            <button class="btn-pixelhub-link" on:click=move |_| ctx.navigate(Route::Principal)>
                "← Volver"
            </button>

            {post_view}

            <section class="comments-section">
                <h2>{move || format!("Comentarios ({})", comments.with(|c| c.len()))}</h2>

                <form class="comment-form" on:submit=add_comment>
                    <textarea
                        rows="3"
                        maxlength=COMMENT_MAX_LEN.to_string()
                        placeholder="Escribe un comentario..."
                        prop:value=move || composer.with(|c| c.draft.content.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            composer.update(|c| c.draft.content = value);
                        }
                    ></textarea>
                    <button type="submit" class="btn-pixelhub" disabled=move || !can_submit()>
                        {move || if submitting() { "Enviando..." } else { "Comentar" }}
                    </button>
                </form>

                <div class="comments-list">{comments_view}</div>
            </section>
        </div>
    }
}
