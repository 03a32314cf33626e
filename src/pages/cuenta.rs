//! Account Page
//!
//! Profile editing for the logged-in user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::UserApi;
use crate::components::FieldError;
use crate::context::use_app;
use crate::format::avatar_initial;
use crate::forms::ProfileForm;
use crate::routes::Route;
use crate::store::NoticeKind;

#[component]
pub fn Cuenta() -> impl IntoView {
    let ctx = use_app();
    // Reload the editor only when the user changes, not on rename
    let user_id = Memo::new(move |_| ctx.session().map(|s| s.user_id));

    move || match user_id.get() {
        Some(id) => view! { <ProfileEditor user_id=id /> }.into_any(),
        None => view! {
            <div class="cuenta-page">
                <div class="empty-state">
                    <p>"No hay sesión activa. Por favor inicia sesión."</p>
                    <div class="hero-buttons">
                        <button
                            class="btn-pixelhub-primary"
                            on:click=move |_| ctx.navigate(Route::InicioSesion(None))
                        >
                            "Iniciar sesión"
                        </button>
                        <button class="btn-pixelhub-secondary" on:click=move |_| ctx.navigate(Route::Principal)>
                            "Ver hilos"
                        </button>
                    </div>
                </div>
            </div>
        }.into_any(),
    }
}

#[component]
fn ProfileEditor(user_id: u32) -> impl IntoView {
    let ctx = use_app();

    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let form = RwSignal::new(ProfileForm::default());
    let baseline = RwSignal::new(ProfileForm::default());

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.get_user(user_id).await {
                Ok(user) => {
                    let loaded = ProfileForm {
                        username: user.nombre_usuario,
                        email: user.correo,
                    };
                    baseline.set(loaded.clone());
                    form.set(loaded);
                }
                Err(e) => {
                    log::error!("Failed to load user {}: {}", user_id, e);
                    if !ctx.expire_if_unauthorized(&e) {
                        ctx.notify(NoticeKind::Error, e.user_message("Error al cargar el perfil."));
                    }
                }
            }
            set_loading.set(false);
        });
    });

    let errors = Memo::new(move |_| form.with(|f| f.validate().err().unwrap_or_default()));
    let can_save = move || !saving.get() && form.with(|f| baseline.with(|b| f.can_save(b)));

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !can_save() {
            return;
        }
        let current = form.get_untracked();
        let update = match current.validate() {
            Ok(update) => update,
            Err(_) => return,
        };
        set_saving.set(true);

        let api = ctx.api();
        spawn_local(async move {
            match api.update_user(user_id, &update).await {
                Ok(()) => {
                    log::info!("Profile {} updated", user_id);
                    ctx.rename(&current.username);
                    baseline.set(current);
                    ctx.notify(NoticeKind::Success, "Perfil actualizado correctamente.");
                }
                Err(e) => {
                    log::error!("Failed to update user {}: {}", user_id, e);
                    if !ctx.expire_if_unauthorized(&e) {
                        ctx.notify(NoticeKind::Error, e.user_message("Error al actualizar el perfil."));
                    }
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="cuenta-page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-state">"Cargando perfil..."</div> }
            >
                <div class="cuenta-card">
                    <div class="cuenta-header">
                        <div class="author-avatar large">
                            {move || baseline.with(|b| avatar_initial(&b.username))}
                        </div>
                        <h1>{move || baseline.with(|b| b.username.clone())}</h1>
                    </div>

                    <form class="cuenta-form" on:submit=save>
                        <label>"Nombre de usuario"</label>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.username = value);
                            }
                        />
                        <FieldError errors=errors field="username" />

                        <label>"Correo electrónico"</label>
                        <input
                            type="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.email = value);
                            }
                        />
                        <FieldError errors=errors field="email" />

                        <button type="submit" class="btn-pixelhub" disabled=move || !can_save()>
                            {move || if saving.get() { "Guardando..." } else { "Guardar Cambios" }}
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}
