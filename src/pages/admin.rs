//! Moderation Panel
//!
//! Admin-only tables of posts and comments with inline delete. Each tab
//! refetches when selected and after every delete.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{CommentApi, HttpApi, PostApi};
use crate::cache::Collection;
use crate::components::DeleteConfirmButton;
use crate::context::{use_app, AppContext};
use crate::error::ApiResult;
use crate::format::format_date_numeric;
use crate::models::{Comment, Post};
use crate::routes::{LoginOrigin, Route};
use crate::session::{admin_access, AdminAccess};
use crate::store::NoticeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum AdminTab {
    Publicaciones,
    Comentarios,
}

/// Fetches in flight per tab, so one tab finishing never ends the other's
/// loading state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TabLoads {
    publicaciones: u32,
    comentarios: u32,
}

impl TabLoads {
    fn slot(&mut self, tab: AdminTab) -> &mut u32 {
        match tab {
            AdminTab::Publicaciones => &mut self.publicaciones,
            AdminTab::Comentarios => &mut self.comentarios,
        }
    }

    fn start(&mut self, tab: AdminTab) {
        *self.slot(tab) += 1;
    }

    fn finish(&mut self, tab: AdminTab) {
        let slot = self.slot(tab);
        *slot = slot.saturating_sub(1);
    }

    fn is_loading(&self, tab: AdminTab) -> bool {
        match tab {
            AdminTab::Publicaciones => self.publicaciones > 0,
            AdminTab::Comentarios => self.comentarios > 0,
        }
    }
}

#[component]
pub fn Admin() -> impl IntoView {
    let ctx = use_app();
    let access = Memo::new(move |_| admin_access(ctx.session().as_ref()));

    Effect::new(move |_| match access.get() {
        AdminAccess::LoginRequired => ctx.navigate(Route::InicioSesion(Some(LoginOrigin::Admin))),
        AdminAccess::Denied => {
            ctx.notify(
                NoticeKind::Error,
                "Acceso denegado: Solo administradores pueden acceder a esta página",
            );
            ctx.navigate(Route::Principal);
        }
        AdminAccess::Granted => {}
    });

    move || (access.get() == AdminAccess::Granted).then(|| view! { <ModerationPanel /> })
}

async fn load_posts(api: &HttpApi, posts: RwSignal<Collection<Post>>) -> ApiResult<()> {
    let fetched = api.list_posts().await?;
    posts.update(|c| c.replace(fetched));
    Ok(())
}

async fn load_comments(api: &HttpApi, comments: RwSignal<Collection<Comment>>) -> ApiResult<()> {
    let fetched = api.list_all_comments().await?;
    comments.update(|c| c.replace(fetched));
    Ok(())
}

fn report_load_error(ctx: AppContext, what: &str, result: ApiResult<()>) {
    if let Err(e) = result {
        log::error!("Failed to load {}: {}", what, e);
        if !ctx.expire_if_unauthorized(&e) {
            ctx.notify(NoticeKind::Error, e.user_message("Error al cargar los datos."));
        }
    }
}

#[component]
fn ModerationPanel() -> impl IntoView {
    let ctx = use_app();

    let tab = RwSignal::new(AdminTab::Publicaciones);
    let posts = RwSignal::new(Collection::<Post>::new());
    let comments = RwSignal::new(Collection::<Comment>::new());
    let loads = RwSignal::new(TabLoads::default());
    let deleting = RwSignal::new(HashSet::<(AdminTab, u32)>::new());

    Effect::new(move |_| {
        let selected = tab.get();
        let api = ctx.api();
        loads.update(|l| l.start(selected));
        spawn_local(async move {
            match selected {
                AdminTab::Publicaciones => {
                    report_load_error(ctx, "posts", load_posts(&api, posts).await)
                }
                AdminTab::Comentarios => {
                    report_load_error(ctx, "comments", load_comments(&api, comments).await)
                }
            }
            loads.update(|l| l.finish(selected));
        });
    });

    let is_deleting = move |key: (AdminTab, u32)| Signal::derive(move || deleting.with(|d| d.contains(&key)));

    let delete_post = move |id: u32| {
        let key = (AdminTab::Publicaciones, id);
        deleting.update(|d| {
            d.insert(key);
        });
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_post(id).await {
                Ok(()) => {
                    log::info!("Deleted post {}", id);
                    ctx.notify(NoticeKind::Success, "Publicación eliminada.");
                    report_load_error(ctx, "posts", load_posts(&api, posts).await);
                }
                Err(e) => {
                    log::error!("Failed to delete post {}: {}", id, e);
                    if !ctx.expire_if_unauthorized(&e) {
                        ctx.notify(NoticeKind::Error, e.user_message("Error al eliminar la publicación."));
                    }
                }
            }
            deleting.update(|d| {
                d.remove(&key);
            });
        });
    };

    let delete_comment = move |id: u32| {
        let key = (AdminTab::Comentarios, id);
        deleting.update(|d| {
            d.insert(key);
        });
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_comment(id).await {
                Ok(()) => {
                    log::info!("Deleted comment {}", id);
                    ctx.notify(NoticeKind::Success, "Comentario eliminado.");
                    report_load_error(ctx, "comments", load_comments(&api, comments).await);
                }
                Err(e) => {
                    log::error!("Failed to delete comment {}: {}", id, e);
                    if !ctx.expire_if_unauthorized(&e) {
                        ctx.notify(NoticeKind::Error, e.user_message("Error al eliminar el comentario."));
                    }
                }
            }
            deleting.update(|d| {
                d.remove(&key);
            });
        });
    };

    let tab_button = move |label: &'static str, target: AdminTab| {
        view! {
            <button
                class=move || if tab.get() == target { "admin-tab active" } else { "admin-tab" }
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    let posts_table = move || {
        let rows = posts.with(|c| c.items().to_vec());
        view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Título"</th>
                        <th>"Autor"</th>
                        <th>"Categoría"</th>
                        <th>"Fecha"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|post| {
                        let id = post.id;
                        let date = format_date_numeric(&post.created_at);
                        let title = post.title.clone();
                        let author = post.author_name.clone();
                        let category = post.category.clone();
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td class="admin-link" on:click=move |_| ctx.open_post(post.clone())>{title}</td>
                                <td>{author}</td>
                                <td>{category}</td>
                                <td>{date}</td>
                                <td>
                                    <DeleteConfirmButton
                                        title="Eliminar publicación"
                                        pending=is_deleting((AdminTab::Publicaciones, id))
                                        on_confirm=move |_| delete_post(id)
                                    />
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        }
    };

    let comments_table = move || {
        let rows = comments.with(|c| c.items().to_vec());
        view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Comentario"</th>
                        <th>"Autor"</th>
                        <th>"Publicación"</th>
                        <th>"Fecha"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|comment| {
                        let id = comment.id;
                        let post_id = comment.post_id;
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{comment.content.clone()}</td>
                                <td>{comment.display_author()}</td>
                                <td class="admin-link" on:click=move |_| ctx.navigate(Route::Hilo(post_id))>
                                    {format!("#{}", post_id)}
                                </td>
                                <td>{format_date_numeric(&comment.created_at)}</td>
                                <td>
                                    <DeleteConfirmButton
                                        title="Eliminar comentario"
                                        pending=is_deleting((AdminTab::Comentarios, id))
                                        on_confirm=move |_| delete_comment(id)
                                    />
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        }
    };

    view! {
        <div class="admin-page">
            <h1 class="page-title">"Panel de Administración"</h1>
            <div class="admin-tabs">
                {tab_button("Publicaciones", AdminTab::Publicaciones)}
                {tab_button("Comentarios", AdminTab::Comentarios)}
            </div>

            {move || {
                let current = tab.get();
                if loads.with(|l| l.is_loading(current)) {
                    return view! { <div class="loading-state">"Cargando..."</div> }.into_any();
                }
                match current {
                    AdminTab::Publicaciones if posts.with(|c| c.is_empty()) => view! {
                        <div class="empty-state">"No hay publicaciones."</div>
                    }.into_any(),
                    AdminTab::Comentarios if comments.with(|c| c.is_empty()) => view! {
                        <div class="empty-state">"No hay comentarios."</div>
                    }.into_any(),
                    AdminTab::Publicaciones => posts_table().into_any(),
                    AdminTab::Comentarios => comments_table().into_any(),
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_tab_finishing_keeps_loading() {
        let mut loads = TabLoads::default();
        loads.start(AdminTab::Publicaciones);
        loads.start(AdminTab::Comentarios);

        loads.finish(AdminTab::Publicaciones);

        assert!(!loads.is_loading(AdminTab::Publicaciones));
        assert!(loads.is_loading(AdminTab::Comentarios));
    }

    #[test]
    fn test_overlapping_loads_on_one_tab() {
        let mut loads = TabLoads::default();
        loads.start(AdminTab::Comentarios);
        loads.start(AdminTab::Comentarios);
        loads.finish(AdminTab::Comentarios);
        assert!(loads.is_loading(AdminTab::Comentarios));

        loads.finish(AdminTab::Comentarios);
        loads.finish(AdminTab::Comentarios);
        assert_eq!(loads, TabLoads::default());
    }
}
