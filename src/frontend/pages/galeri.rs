use std::time::Duration;

use leptos::prelude::*;

use crate::content::{GALLERY_SKELETON_TILES, filter_gallery, gallery_images, mosaic_span};
use crate::frontend::PageShell;
use crate::frontend::components::{
    CarouselControls, CarouselDots, IconSvg, Skeleton, SkeletonImage,
};
use crate::frontend::hooks::{use_autoplay, use_motion, use_readiness, use_wait_transition};
use crate::models::{GalleryImage, Icon, SiteRoute};
use crate::motion::{CrossFadeConfig, FadeInConfig};
use crate::state::{AutoplayConfig, Carousel, ReadyTrigger};

const GRID_SKELETON_MS: u64 = 900;

/// Hero rotation; off entirely under reduced motion.
const AUTOPLAY: AutoplayConfig = AutoplayConfig::new(Duration::from_millis(4500), None);

#[component]
fn HeroCarousel() -> impl IntoView {
    let carousel = match Carousel::new(gallery_images().to_vec()) {
        Ok(carousel) => RwSignal::new(carousel),
        Err(err) => {
            tracing::error!(%err, "gallery carousel not rendered");
            return ().into_any();
        }
    };

    let motion = use_motion();
    let fade = CrossFadeConfig::default();
    use_autoplay(carousel, AUTOPLAY, motion);

    let current = Memo::new(move |_| carousel.with(Carousel::current_index));
    let (shown, leaving) = use_wait_transition(current, move || fade.exit_duration(motion.get_untracked()));

    let slide = move || {
        let index = shown.get();
        let image = carousel.with_untracked(|c| c.items().get(index).copied());
        image.map(|image| {
            view! {
                <div
                    class="absolute inset-0"
                    style=move || {
                        if leaving.get() { fade.exit_style(motion.get()) } else { fade.enter_style(motion.get()) }
                    }
                >
                    <img src=image.src alt=image.caption() class="h-full w-full object-cover"/>
                    <div class="absolute inset-0 bg-gradient-to-t from-slate-950/80 via-slate-950/20 to-transparent"></div>
                    <p class="absolute bottom-20 left-6 text-sm font-medium text-white/90 md:left-10">{image.caption()}</p>
                </div>
            }
        })
    };

    view! {
        <section
            class="relative h-[70vh] min-h-[28rem] overflow-hidden bg-slate-950"
            on:mouseenter=move |_| carousel.update(Carousel::pause)
            on:mouseleave=move |_| carousel.update(Carousel::resume)
        >
            {slide}
            <div class="absolute inset-x-0 top-32 mx-auto max-w-6xl px-6">
                <h1 class="text-4xl font-bold tracking-tight text-white md:text-6xl">"Galeri"</h1>
                <p class="mt-4 max-w-xl text-lg text-white/80">
                    "Dokumentasi proyek dan kegiatan operasional kami."
                </p>
            </div>
            <div class="absolute inset-x-0 bottom-6 mx-auto flex max-w-6xl items-center justify-between px-6">
                <CarouselDots carousel=carousel dark=true/>
                <CarouselControls carousel=carousel/>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn MosaicTile(image: GalleryImage, index: usize) -> impl IntoView {
    view! {
        <figure class=format!("relative overflow-hidden rounded-2xl border border-slate-200 shadow-md {}", mosaic_span(index))>
            <SkeletonImage
                src=image.src
                alt=image.caption()
                class="h-48 w-full sm:h-56"
                fade=FadeInConfig::scaled(Duration::from_millis(600), 1.03)
            />
            <figcaption class="absolute bottom-3 left-3 rounded-full bg-slate-900/50 px-3 py-1 text-xs text-white backdrop-blur">
                {image.caption()}
            </figcaption>
        </figure>
    }
}

#[component]
pub fn GaleriPage() -> impl IntoView {
    let readiness = use_readiness(ReadyTrigger::timer_ms(GRID_SKELETON_MS));
    let query = RwSignal::new(String::new());
    let images = Memo::new(move |_| query.with(|q| filter_gallery(q)));

    let grid = move || {
        if readiness.shows_placeholder() {
            return (0..GALLERY_SKELETON_TILES)
                .map(|_| view! { <Skeleton class="h-44 rounded-2xl"/> })
                .collect_view()
                .into_any();
        }

        let found = images.get();
        if found.is_empty() {
            return view! {
                <p class="col-span-full py-16 text-center text-slate-500">
                    "Tidak ada dokumentasi yang cocok dengan pencarian Anda."
                </p>
            }
            .into_any();
        }

        found
            .into_iter()
            .enumerate()
            .map(|(index, image)| view! { <MosaicTile image=image index=index/> })
            .collect_view()
            .into_any()
    };

    view! {
        <PageShell route=SiteRoute::Galeri>
            <HeroCarousel/>

            <div class="sticky top-20 z-30 mt-6 px-4">
                <div class="mx-auto flex max-w-6xl items-center gap-2 rounded-3xl border border-slate-200 bg-white/80 p-2 shadow-sm backdrop-blur">
                    <IconSvg icon=Icon::Search class="ml-2 h-4 w-4 text-slate-500"/>
                    <input
                        type="search"
                        placeholder="Cari foto, proyek, atau kata kunci"
                        aria-label="Cari galeri"
                        class="flex-1 bg-transparent px-2 py-2 text-sm text-slate-900 outline-none placeholder:text-slate-400"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <section class="px-4 pb-20 pt-6">
                <div class="mx-auto grid max-w-6xl auto-rows-fr grid-cols-2 gap-4 sm:grid-cols-4">
                    {grid}
                </div>
            </section>
        </PageShell>
    }
}
