//! Routed pages

mod galeri;
mod home;
mod nilai;
mod not_found;
mod profile;
mod visi_misi;

use std::time::Duration;

use leptos::prelude::*;

pub use galeri::GaleriPage;
pub use home::HomePage;
pub use nilai::NilaiPage;
pub use not_found::NotFound;
pub use profile::ProfilePage;
pub use visi_misi::VisiMisiPage;

use crate::content::BANNER_IMAGE;
use crate::frontend::components::{Eyebrow, Reveal, RevealItem};
use crate::motion::{Easing, RevealConfig};

/// Reveal timing shared by the informational pages.
fn page_reveal() -> RevealConfig {
    RevealConfig::default()
        .with_threshold(0.2)
        .with_stagger(Duration::from_millis(80))
        .with_duration(Duration::from_millis(600))
        .with_distance(18.0)
        .with_easing(Easing::EXPO_OUT)
}

/// Dark banner at the top of every informational page.
#[component]
fn PageBanner(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="relative isolate overflow-hidden bg-slate-950 pb-20 pt-36 md:pb-28 md:pt-44">
            <div
                class="absolute inset-0 -z-20 bg-cover bg-center opacity-30"
                style=format!("background-image:url('{BANNER_IMAGE}')")
            ></div>
            <div class="absolute inset-0 -z-10 bg-gradient-to-b from-slate-950/60 via-slate-950/80 to-slate-950"></div>
            <Reveal config=page_reveal().with_threshold(0.1) class="mx-auto max-w-5xl px-6 text-center">
                <RevealItem index=0>
                    <Eyebrow text=eyebrow dark=true/>
                </RevealItem>
                <RevealItem index=1>
                    <h1 class="mt-6 text-4xl font-bold tracking-tight text-white md:text-6xl">{title}</h1>
                </RevealItem>
                <RevealItem index=2>
                    <p class="mx-auto mt-6 max-w-3xl text-lg leading-relaxed text-slate-300">{subtitle}</p>
                </RevealItem>
                <RevealItem index=3>{children.map(|c| c())}</RevealItem>
            </Reveal>
        </section>
    }
}
