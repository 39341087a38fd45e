use std::time::Duration;

use leptos::html::Video;
use leptos::prelude::*;

use crate::content::{HERO_SHOWCASE_IMAGE, HERO_STATS, HERO_VIDEO, NAV_CTA_ROUTE, TRUSTED_BY};
use crate::frontend::components::{ButtonVariant, IconSvg, LinkButton, Shimmer, SkeletonText};
use crate::frontend::hooks::{use_motion, use_readiness};
use crate::models::Icon;
use crate::motion::{FadeInConfig, RevealConfig};
use crate::state::ReadyTrigger;

const SKELETON_MS: u64 = 900;

/// `HTMLMediaElement.HAVE_CURRENT_DATA`
const HAVE_CURRENT_DATA: u16 = 2;

fn headline_config() -> RevealConfig {
    RevealConfig::default()
        .with_delay(Duration::from_millis(100))
        .with_stagger(Duration::from_millis(80))
        .with_duration(Duration::from_millis(600))
        .with_distance(16.0)
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let motion = use_motion();
    let readiness = use_readiness(ReadyTrigger::timer_ms(SKELETON_MS));
    let video_loaded = use_readiness(ReadyTrigger::ResourceLoad);
    let video = NodeRef::<Video>::new();
    let config = headline_config();
    let showcase_fade = FadeInConfig::scaled(Duration::from_millis(900), 1.06);

    // The first frame may already be buffered when hydration attaches listeners.
    Effect::new(move |_| {
        let ready = video
            .get()
            .is_some_and(|el| el.ready_state() >= HAVE_CURRENT_DATA);
        if ready {
            video_loaded.mark_ready();
        }
    });

    let replay = move |_| {
        if let Some(el) = video.get_untracked() {
            el.set_current_time(0.0);
            if let Err(err) = el.play() {
                tracing::debug!(error = ?err, "hero video replay refused");
            }
        }
    };

    let item = move |index: usize| move || config.child_style(index, readiness.is_ready(), motion.get());

    let stats = HERO_STATS
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            view! {
                <div class="relative overflow-hidden rounded-2xl border border-white/10 bg-white/10 p-4 backdrop-blur-xl" style=item(5 + i)>
                    <p class="text-2xl font-bold text-white md:text-3xl">{stat.value}</p>
                    <p class="mt-1 text-xs text-white/70 md:text-sm">{stat.label}</p>
                    <Show when=move || readiness.shows_placeholder()>
                        <Shimmer/>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="hero" class="relative isolate flex min-h-screen items-center overflow-hidden pt-24">
            <video
                node_ref=video
                class="absolute inset-0 -z-20 h-full w-full object-cover"
                autoplay=true
                muted=true
                preload="auto"
                on:loadeddata=move |_| video_loaded.mark_ready()
                on:ended=replay
            >
                <source src=HERO_VIDEO type="video/mp4"/>
            </video>
            <div class="absolute inset-0 -z-10 bg-gradient-to-b from-slate-950/80 via-slate-950/60 to-slate-950/90"></div>

            <div class="mx-auto grid w-full max-w-7xl items-center gap-12 px-6 py-16 lg:grid-cols-2">
                <div class="relative">
                    <div style=item(0)>
                        <span class="inline-flex items-center gap-2 rounded-full border border-white/15 bg-white/10 px-4 py-1.5 text-xs font-medium text-white/90 backdrop-blur-xl">
                            <IconSvg icon=Icon::Sparkles class="h-4 w-4"/>
                            "Kualitas Premium • Pelayanan Terpercaya"
                        </span>
                    </div>

                    <h1 class="mt-6 text-4xl font-bold leading-tight tracking-tight text-white md:text-6xl" style=item(1)>
                        "Mobilitas yang elegan, "
                        <span class="bg-gradient-to-r from-white via-blue-100 to-blue-300 bg-clip-text text-transparent">
                            "mendefinisikan standar baru"
                        </span>
                    </h1>

                    <p class="mt-6 max-w-xl text-lg leading-relaxed text-white/80" style=item(2)>
                        "Hadir dengan armada modern, pengemudi bersertifikat, dan standar layanan kelas dunia. Untuk bisnis yang gesit dan perjalanan personal yang berkelas."
                    </p>

                    <div class="mt-8 flex flex-wrap gap-4" style=item(3)>
                        <LinkButton href=NAV_CTA_ROUTE.path() variant=ButtonVariant::Light>
                            "Jadwalkan Konsultasi"
                        </LinkButton>
                        <button
                            type="button"
                            class="inline-flex items-center gap-2 rounded-full border border-white/20 px-6 py-3.5 text-base font-semibold text-white transition hover:bg-white/10"
                            on:click=|_| tracing::info!("company reel requested")
                        >
                            <IconSvg icon=Icon::PlayCircle/>
                            "Tonton Company Reel"
                        </button>
                    </div>

                    <div class="mt-10 grid max-w-lg grid-cols-3 gap-3" style=item(4)>{stats}</div>

                    <Show when=move || readiness.shows_placeholder()>
                        <div class="absolute inset-x-0 top-0 space-y-6">
                            <SkeletonText lines=2 class="max-w-md"/>
                            <SkeletonText lines=3 class="max-w-xl"/>
                        </div>
                    </Show>
                </div>

                <div class="relative">
                    <div class="relative aspect-[4/3] overflow-hidden rounded-[2rem] border border-white/10 bg-white/5 shadow-2xl">
                        <Show when=move || readiness.shows_placeholder()>
                            <Shimmer/>
                        </Show>
                        <img
                            src=HERO_SHOWCASE_IMAGE
                            alt="Armada eksekutif"
                            class="h-full w-full object-cover"
                            style=move || showcase_fade.style(readiness.is_ready(), motion.get())
                        />
                        <span class="absolute left-4 top-4 rounded-full bg-white/90 px-3 py-1 text-xs font-semibold text-slate-800">
                            "Armada Eksekutif • Driver Profesional"
                        </span>
                    </div>
                </div>
            </div>

            <Show when=move || video_loaded.is_ready()>
                <div class="absolute inset-x-0 bottom-8 mx-auto flex max-w-7xl flex-wrap items-center gap-x-8 gap-y-2 px-6 text-sm text-white/70">
                    <span>"Dipercaya oleh:"</span>
                    {TRUSTED_BY.iter().map(|name| view! { <span class="font-semibold text-white/90">{*name}</span> }).collect_view()}
                </div>
            </Show>
        </section>
    }
}
