//! Navigation Bar Component
//!
//! Top bar with the PixelHub brand, page links and the session control.

use leptos::prelude::*;

use crate::context::use_app;
use crate::routes::Route;

/// Top navigation bar
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app();

    let link = move |label: &'static str, target: Route| {
        let is_active = move || ctx.route.get() == target;
        view! {
            <button
                class=move || if is_active() { "nav-link active" } else { "nav-link" }
                on:click=move |_| ctx.navigate(target)
            >
                {label}
            </button>
        }
    };

    let is_admin = move || ctx.session().map(|s| s.is_admin()).unwrap_or(false);

    view! {
        <nav class="navbar-pixelhub">
            <span class="navbar-brand" on:click=move |_| ctx.navigate(Route::Home)>"PixelHub"</span>

            <div class="navbar-links">
                {link("Inicio", Route::Home)}
                {link("Hilos", Route::Principal)}
                {link("Donaciones", Route::Donaciones)}
                <Show when=move || ctx.session().is_some()>
                    {link("Mi Perfil", Route::Cuenta)}
                </Show>
                <Show when=is_admin>
                    {link("Admin", Route::Admin)}
                </Show>
            </div>

            <div class="navbar-session">
                {move || match ctx.session() {
                    Some(session) => view! {
                        <span class="navbar-user">{session.username}</span>
                        <button class="btn-pixelhub-secondary" on:click=move |_| ctx.logout()>
                            "Cerrar sesión"
                        </button>
                    }.into_any(),
                    None => view! {
                        <button
                            class="btn-pixelhub-primary"
                            on:click=move |_| ctx.navigate(Route::InicioSesion(None))
                        >
                            "Iniciar sesión"
                        </button>
                    }.into_any(),
                }}
            </div>
        </nav>
    }
}
