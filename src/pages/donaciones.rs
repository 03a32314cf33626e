//! Donations Page
//!
//! Simulated checkout: the form is validated client-side and nothing is
//! charged or sent anywhere.

use leptos::prelude::*;

use crate::components::FieldError;
use crate::context::use_app;
use crate::error::FieldErrors;
use crate::format::format_amount;
use crate::forms::{DonationForm, DONATION_AMOUNTS};
use crate::routes::{LoginOrigin, Route};
use crate::store::NoticeKind;

#[component]
pub fn Donaciones() -> impl IntoView {
    let ctx = use_app();
    let logged_in = Memo::new(move |_| ctx.session().is_some());

    Effect::new(move |_| {
        if !logged_in.get() {
            ctx.navigate(Route::InicioSesion(Some(LoginOrigin::Donaciones)));
        }
    });

    move || logged_in.get().then(|| view! { <DonationCheckout /> })
}

#[component]
fn DonationCheckout() -> impl IntoView {
    let ctx = use_app();

    let form = RwSignal::new(DonationForm::default());
    let errors = RwSignal::new(FieldErrors::new());

    let donate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|f| f.validate()) {
            Ok(amount) => {
                log::info!("Simulated donation of {}", amount);
                errors.set(FieldErrors::new());
                form.set(DonationForm::default());
                ctx.notify(
                    NoticeKind::Success,
                    format!("¡Gracias por tu donación de {}!", format_amount(amount)),
                );
                ctx.navigate(Route::Principal);
            }
            Err(invalid) => errors.set(invalid),
        }
    };

    view! {
        <div class="donaciones-page">
            <div class="donation-card">
                <h1 class="page-title">"Apoya a PixelHub"</h1>
                <p class="page-subtitle">
                    "Tu aporte nos ayuda a mantener la comunidad activa y sin anuncios."
                </p>

                <form class="donation-form" on:submit=donate>
                    <label>"Monto"</label>
                    <div class="amount-options">
                        {DONATION_AMOUNTS.iter().map(|amount| {
                            let amount = *amount;
                            let selected = move || form.with(|f| f.amount == Some(amount));
                            view! {
                                <button
                                    type="button"
                                    class=move || if selected() { "amount-btn selected" } else { "amount-btn" }
                                    on:click=move |_| form.update(|f| f.amount = Some(amount))
                                >
                                    {format_amount(amount)}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                    <FieldError errors=errors field="amount" />

                    <label>"Nombre del titular"</label>
                    <input
                        type="text"
                        placeholder="Ej: Juan Pérez"
                        prop:value=move || form.with(|f| f.card_holder.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.card_holder = value);
                        }
                    />
                    <FieldError errors=errors field="card_holder" />

                    <label>"Número de tarjeta"</label>
                    <input
                        type="text"
                        inputmode="numeric"
                        maxlength="19"
                        placeholder="0000 0000 0000 0000"
                        prop:value=move || form.with(|f| f.card_number.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.card_number = value);
                        }
                    />
                    <FieldError errors=errors field="card_number" />

                    <button type="submit" class="btn-pixelhub">"Realizar donación"</button>
                </form>
            </div>
        </div>
    }
}
