//! Landing Page
//!
//! Hero, feature cards and the community counters.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::routes::Route;
use crate::stats::{load_site_stats, SiteStats};

const FEATURES: &[(&str, &str, &str)] = &[
    ("💬", "Foros Dinámicos", "Crea hilos, comenta y participa en conversaciones sobre tus juegos favoritos."),
    ("🎨", "Creatividad", "Comparte imágenes, ideas y proyectos con una comunidad que comparte tu pasión."),
    ("🚀", "Innovación", "Descubre las últimas tendencias y noticias del mundo gamer."),
];

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_app();
    let (stats, set_stats) = signal(None::<SiteStats>);

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match load_site_stats(&api).await {
                Ok(loaded) => set_stats.set(Some(loaded)),
                Err(e) => {
                    log::warn!("Landing stats unavailable: {}", e);
                    set_stats.set(Some(SiteStats::default()));
                }
            }
        });
    });

    let counter = move |pick: fn(&SiteStats) -> usize| {
        move || match stats.get() {
            Some(s) => pick(&s).to_string(),
            None => "…".to_string(),
        }
    };

    view! {
        <div class="home-page">
            <section class="hero-section">
                <h1 class="hero-title">"Bienvenido a PixelHub"</h1>
                <p class="hero-subtitle">
                    "La comunidad donde los gamers comparten, debaten y crean juntos."
                </p>
                <div class="hero-buttons">
                    <button class="btn-pixelhub-primary" on:click=move |_| ctx.navigate(Route::Principal)>
                        "Explorar Hilos"
                    </button>
                    <button class="btn-pixelhub-secondary" on:click=move |_| ctx.navigate(Route::Donaciones)>
                        "Apoyar el Proyecto"
                    </button>
                </div>
            </section>

            <section class="features-section">
                {FEATURES.iter().map(|(icon, title, text)| view! {
                    <div class="feature-card">
                        <div class="feature-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }).collect_view()}
            </section>

            <section class="stats-section">
                <div class="stat-item">
                    <span class="stat-number">{counter(|s| s.users)}</span>
                    <span class="stat-label">"Usuarios Activos"</span>
                </div>
                <div class="stat-item">
                    <span class="stat-number">{counter(|s| s.posts)}</span>
                    <span class="stat-label">"Hilos Creados"</span>
                </div>
                <div class="stat-item">
                    <span class="stat-number">{counter(|s| s.comments)}</span>
                    <span class="stat-label">"Comentarios"</span>
                </div>
            </section>
        </div>
    }
}
