//! Inline validation message for one form field

use leptos::prelude::*;

use crate::error::FieldErrors;

#[component]
pub fn FieldError(#[prop(into)] errors: Signal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).map(str::to_string))
            .map(|msg| view! { <small class="field-error">{msg}</small> })
    }
}
