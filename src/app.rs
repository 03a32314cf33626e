//! PixelHub App
//!
//! Root component: restores the session, provides context, and switches
//! between pages on the current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NavBar, NoticeBanner};
use crate::context::AppContext;
use crate::pages::{Admin, Cuenta, Donaciones, HiloDetalle, Home, InicioSesion, Principal};
use crate::routes::Route;
use crate::session::{BrowserStorage, Session};
use crate::store::AppState;

fn current_hash() -> Option<String> {
    web_sys::window().and_then(|w| w.location().hash().ok())
}

#[component]
pub fn App() -> impl IntoView {
    let session = Session::restore(&BrowserStorage::local());
    if let Some(s) = &session {
        log::info!("Restored session for {}", s.username);
    }
    let store = Store::new(AppState::new(session));

    let initial = current_hash().map(|h| Route::parse(&h)).unwrap_or_default();
    let route_signal = signal(initial);
    let route = route_signal.0;
    let ctx = AppContext::new(route_signal, store);
    provide_context(ctx);

    // Back/forward buttons and hand-edited URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        if let Some(hash) = current_hash() {
            ctx.follow_hash(&hash);
        }
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <NoticeBanner />
            {move || match route.get() {
                Route::Home => view! { <Home /> }.into_any(),
                Route::Principal => view! { <Principal /> }.into_any(),
                Route::Hilo(id) => view! { <HiloDetalle id=id /> }.into_any(),
                Route::Cuenta => view! { <Cuenta /> }.into_any(),
                Route::Admin => view! { <Admin /> }.into_any(),
                Route::Donaciones => view! { <Donaciones /> }.into_any(),
                Route::InicioSesion(origin) => view! { <InicioSesion origin=origin /> }.into_any(),
            }}
        </div>
    }
}
