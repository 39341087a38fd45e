use leptos::prelude::*;

use crate::content::marquee_logos;
use crate::frontend::hooks::use_motion;
use crate::log_err;

#[component]
fn PartnerLogo(src: String) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let report = src.clone();

    view! {
        <img
            src=src
            alt="Logo mitra"
            loading="lazy"
            class="h-12 w-auto shrink-0 object-contain opacity-70 grayscale transition hover:opacity-100 hover:grayscale-0"
            class:hidden=move || failed.get()
            on:error=move |_| {
                log_err!("partner logo failed to load", &report);
                set_failed.set(true);
            }
        />
    }
}

/// Endless strip of partner logos. The list is doubled so translating the
/// track by half its width loops without a seam.
#[component]
pub fn LogoMarquee() -> impl IntoView {
    let motion = use_motion();
    let track = move || {
        if motion.get().is_reduced() {
            "flex w-max items-center gap-16 px-8"
        } else {
            "flex w-max items-center gap-16 px-8 animate-marquee hover:[animation-play-state:paused]"
        }
    };

    let logos = marquee_logos()
        .into_iter()
        .map(|src| view! { <PartnerLogo src=src/> })
        .collect_view();

    view! {
        <div class="relative overflow-hidden [mask-image:linear-gradient(to_right,transparent,black_10%,black_90%,transparent)]">
            <div class=track>{logos}</div>
        </div>
    }
}
