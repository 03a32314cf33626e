//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AuthApi;
use crate::components::FieldError;
use crate::context::use_app;
use crate::error::FieldErrors;
use crate::forms::LoginForm;
use crate::routes::{LoginOrigin, Route};
use crate::session::Session;
use crate::store::NoticeKind;

const LOGIN_FAILED: &str = "Credenciales incorrectas o error en el servidor.";

#[component]
pub fn InicioSesion(origin: Option<LoginOrigin>) -> impl IntoView {
    let ctx = use_app();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (loading, set_loading) = signal(false);
    let (failure, set_failure) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let credentials = form.get_untracked();
        if let Err(invalid) = credentials.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FieldErrors::new());
        set_failure.set(None);
        set_loading.set(true);

        let api = ctx.api();
        spawn_local(async move {
            let result = api
                .login(credentials.username.trim(), &credentials.password)
                .await
                .and_then(Session::from_login);
            match result {
                Ok(session) => {
                    let welcome = format!("¡Bienvenido, {}!", session.username);
                    ctx.login(session);
                    ctx.notify(NoticeKind::Success, welcome);
                    ctx.navigate(Route::Principal);
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    set_failure.set(Some(LOGIN_FAILED.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-title">"Iniciar sesión"</h1>

                {(origin == Some(LoginOrigin::Donaciones)).then(|| view! {
                    <div class="notice-info">"Inicia sesión para realizar una donación"</div>
                })}
                {(origin == Some(LoginOrigin::Admin)).then(|| view! {
                    <div class="notice-info">"Inicia sesión para acceder al panel de administración"</div>
                })}

                <form class="login-form" on:submit=submit>
                    <label>"Nombre de usuario"</label>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.username = value);
                        }
                    />
                    <FieldError errors=errors field="username" />

                    <label>"Contraseña"</label>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.password = value);
                        }
                    />
                    <FieldError errors=errors field="password" />

                    {move || failure.get().map(|msg| view! { <p class="login-error">{msg}</p> })}

                    <button type="submit" class="btn-pixelhub" disabled=move || loading.get()>
                        {move || if loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>

                <button class="btn-pixelhub-link" on:click=move |_| ctx.navigate(Route::Home)>
                    "← Volver al inicio"
                </button>
            </div>
        </div>
    }
}
