//! New Post Form Component
//!
//! "Nueva Publicación" modal. Submits through a `Composer`, so a second click
//! while the request is pending does nothing. The composer belongs to the
//! listing, so closing the modal mid-request keeps the result and the draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::PostApi;
use crate::cache::{Collection, Placement};
use crate::components::FieldError;
use crate::compose::{settle_into, Composer};
use crate::config::{CATEGORIES, DESCRIPTION_MAX_LEN};
use crate::context::use_app;
use crate::error::{FieldErrors, SubmitError};
use crate::forms::{chars_used, PostDraft};
use crate::models::Post;
use crate::session::Author;
use crate::store::NoticeKind;

const CREATE_FAILED: &str =
    "Error al crear la publicación. Asegúrate de que la descripción no sea muy larga (máximo 255 caracteres).";

/// Modal form for creating a post
#[component]
pub fn NewPostForm(
    composer: RwSignal<Composer<PostDraft>>,
    posts: RwSignal<Collection<Post>>,
    open: RwSignal<bool>,
) -> impl IntoView {
    let ctx = use_app();

    let errors = RwSignal::new(FieldErrors::new());

    let create_post = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let author = Author::of(ctx.session_untracked().as_ref());
        let started = composer.write().begin(&author);
        let body = match started {
            Ok(body) => body,
            Err(SubmitError::Busy) => return,
            Err(SubmitError::Invalid(invalid)) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());

        let api = ctx.api();
        spawn_local(async move {
            let outcome = api.create_post(&body).await;
            match settle_into(composer, posts, outcome, Placement::Front) {
                None => log::debug!("Listing closed before the new post came back"),
                Some(Ok(())) => {
                    open.set(false);
                    ctx.notify(NoticeKind::Success, "¡Publicación creada exitosamente!");
                }
                Some(Err(e)) => {
                    log::error!("Failed to create post: {}", e);
                    if !ctx.expire_if_unauthorized(&e) {
                        ctx.notify(NoticeKind::Error, e.user_message(CREATE_FAILED));
                    }
                }
            }
        });
    };

    let submitting = move || composer.with(|c| c.is_submitting());

    view! {
        <div class="modal-overlay" on:click=move |_| open.set(false)>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Nueva Publicación"</h2>
                    <button class="modal-close" on:click=move |_| open.set(false)>"×"</button>
                </div>
                <form class="publicacion-form" on:submit=create_post>
                    <label>"Categoría"</label>
                    <select
                        prop:value=move || composer.with(|c| c.draft.category.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            composer.update(|c| c.draft.category = value);
                        }
                    >
                        <option value="">"Selecciona una categoría"</option>
                        {CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                    </select>
                    <FieldError errors=errors field="category" />

                    <label>"Título"</label>
                    <input
                        type="text"
                        placeholder="Título de tu publicación"
                        prop:value=move || composer.with(|c| c.draft.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            composer.update(|c| c.draft.title = value);
                        }
                    />
                    <FieldError errors=errors field="title" />

                    <label>"Descripción"</label>
                    <textarea
                        rows="4"
                        maxlength=DESCRIPTION_MAX_LEN.to_string()
                        placeholder="Describe tu publicación"
                        prop:value=move || composer.with(|c| c.draft.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            composer.update(|c| c.draft.description = value);
                        }
                    ></textarea>
                    <small class="char-count">
                        {move || composer.with(|c| chars_used(&c.draft.description))}
                    </small>
                    <FieldError errors=errors field="description" />

                    <label>"URL de imagen (opcional)"</label>
                    <input
                        type="url"
                        placeholder="https://..."
                        prop:value=move || composer.with(|c| c.draft.image_url.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            composer.update(|c| c.draft.image_url = value);
                        }
                    />

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| open.set(false)>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn-pixelhub" disabled=submitting>
                            {move || if submitting() { "Publicando..." } else { "Publicar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
