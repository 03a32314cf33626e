//! Delete Confirm Button Component
//!
//! Two-step delete for the moderation tables. Once confirmed, the button
//! stays disabled until the caller reports the request finished.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Idle,
    Confirming,
    Pending,
}

/// A pending request wins over an open confirmation
fn stage(pending: bool, confirming: bool) -> Stage {
    match (pending, confirming) {
        (true, _) => Stage::Pending,
        (false, true) => Stage::Confirming,
        (false, false) => Stage::Idle,
    }
}

/// Inline delete with a "¿Seguro?" step
///
/// # Arguments
/// * `title` - Tooltip for the initial button
/// * `pending` - True while this row's delete request is in flight
/// * `on_confirm` - Runs once per confirmation; ignored while pending
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] title: String,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirming.set(false);
        if !pending.get_untracked() {
            on_confirm.run(());
        }
    };

    move || match stage(pending.get(), confirming.get()) {
        Stage::Pending => view! {
            <button class="btn-action delete" disabled=true>"Eliminando..."</button>
        }
        .into_any(),
        Stage::Confirming => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">"¿Seguro?"</span>
                <button class="confirm-btn" on:click=confirm>"Sí"</button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        }
        .into_any(),
        Stage::Idle => view! {
            <button
                class="btn-action delete"
                title=title.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "Eliminar"
            </button>
        }
        .into_any(),
    }
}
