//! Category Tab Bar Component
//!
//! Tabs for the fixed category set; the selection drives the post grid.

use leptos::prelude::*;

use crate::config::CATEGORIES;

/// Category tab bar
#[component]
pub fn CategoryTabs(active: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="categories-nav">
            {CATEGORIES.iter().map(|category| {
                let name = *category;
                let is_active = move || active.with(|a| a == name);
                view! {
                    <button
                        class=move || if is_active() { "category-tab active" } else { "category-tab" }
                        on:click=move |_| active.set(name.to_string())
                    >
                        {name}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
