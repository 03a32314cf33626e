//! Application Context
//!
//! Navigation, session lifecycle and notices, provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::config;
use crate::error::ApiError;
use crate::models::Post;
use crate::routes::Route;
use crate::session::{self, BrowserStorage, Session};
use crate::store::{AppStateStoreFields, AppStore, Notice, NoticeKind};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view - read
    pub route: ReadSignal<Route>,
    /// Current view - write
    set_route: WriteSignal<Route>,
    store: AppStore,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), store: AppStore) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            store,
        }
    }

    /// Switch view and mirror it in the URL hash
    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.path());
        }
        self.set_route.set(route);
    }

    /// Sync from a `hashchange` event
    pub fn follow_hash(&self, hash: &str) {
        let route = Route::parse(hash);
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    /// Open a post's detail view, handing over the copy we already have
    pub fn open_post(&self, post: Post) {
        let id = post.id;
        self.store.handoff().set(Some(post));
        self.navigate(Route::Hilo(id));
    }

    /// Take the handed-over post if it is the one being shown
    pub fn take_handoff(&self, id: u32) -> Option<Post> {
        let post = self.store.handoff().get_untracked().filter(|p| p.id == id);
        self.store.handoff().set(None);
        post
    }

    /// Reactive read of the session
    pub fn session(&self) -> Option<Session> {
        self.store.session().get()
    }

    pub fn session_untracked(&self) -> Option<Session> {
        self.store.session().get_untracked()
    }

    /// API client carrying the current session token
    pub fn api(&self) -> HttpApi {
        let token = self.session_untracked().map(|s| s.token);
        HttpApi::from_config().with_token(token)
    }

    pub fn login(&self, session: Session) {
        session.persist(&BrowserStorage::local());
        log::info!("Logged in as {}", session.username);
        self.store.session().set(Some(session));
    }

    pub fn logout(&self) {
        Session::clear(&BrowserStorage::local());
        self.store.session().set(None);
        self.navigate(Route::Home);
    }

    /// Keep the session's display name in step with a profile edit
    pub fn rename(&self, username: &str) {
        let storage = BrowserStorage::local();
        self.store.session().update(|session| {
            if let Some(session) = session {
                session.rename(username, &storage);
            }
        });
    }

    /// On a 401, drop the stale session and send the user to log in again.
    ///
    /// Returns true when the session was ended, so callers can skip their
    /// own error notice.
    pub fn expire_if_unauthorized(&self, error: &ApiError) -> bool {
        let storage = BrowserStorage::local();
        let mut expired = false;
        self.store
            .session()
            .update(|current| expired = session::expire(current, error, &storage));
        if expired {
            log::warn!("Session rejected by the backend, logging out");
            self.notify(NoticeKind::Info, "Tu sesión ha expirado. Inicia sesión de nuevo.");
            self.navigate(Route::InicioSesion(None));
        }
        expired
    }

    /// Show a banner that clears itself after a few seconds
    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let store = self.store;
        let seq = store.notice_seq().get_untracked().wrapping_add(1);
        store.notice_seq().set(seq);
        store.notice().set(Some(Notice {
            kind,
            text: text.into(),
            seq,
        }));

        spawn_local(async move {
            TimeoutFuture::new(config::NOTICE_MILLIS).await;
            let current = store.notice().with_untracked(|n| n.as_ref().map(|n| n.seq));
            if current == Some(seq) {
                store.notice().set(None);
            }
        });
    }

    pub fn notice(&self) -> Option<Notice> {
        self.store.notice().get()
    }

    pub fn dismiss_notice(&self) {
        self.store.notice().set(None);
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
