//! Notice Banner Component
//!
//! Shows the current transient notice; clicking dismisses it early.

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app();

    move || {
        ctx.notice().map(|notice| {
            view! {
                <div class=notice.kind.class() role="status" on:click=move |_| ctx.dismiss_notice()>
                    {notice.text}
                </div>
            }
        })
    }
}
