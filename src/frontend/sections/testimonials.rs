use std::time::Duration;

use leptos::prelude::*;

use crate::content::TESTIMONIALS;
use crate::frontend::components::{
    CarouselControls, CarouselDots, Eyebrow, IconSvg, Reveal, RevealItem, Shimmer,
};
use crate::frontend::hooks::{Readiness, use_autoplay, use_motion, use_readiness, use_wait_transition};
use crate::frontend::sections::LogoMarquee;
use crate::models::{Icon, Testimonial};
use crate::motion::{CrossFadeConfig, Easing, RevealConfig};
use crate::state::{AutoplayConfig, Carousel, ReadyTrigger};

const AUTOPLAY: AutoplayConfig =
    AutoplayConfig::new(Duration::from_secs(6), Some(Duration::from_secs(9)));

/// Timer that holds the avatar and quote placeholders.
pub const TESTIMONIAL_SKELETON_MS: u64 = 1200;

/// Staggered fade-up of the eyebrow, title and subtitle.
pub fn testimonial_heading() -> RevealConfig {
    RevealConfig::default()
        .with_threshold(0.3)
        .with_stagger(Duration::from_millis(150))
        .with_duration(Duration::from_millis(700))
        .with_distance(26.0)
        .with_easing(Easing::SMOOTH)
}

#[component]
fn TestimonialCard(testimonial: Testimonial, readiness: Readiness) -> impl IntoView {
    view! {
        <div class="grid items-center gap-10 md:grid-cols-[240px_1fr]">
            <div class="relative mx-auto aspect-square w-48 overflow-hidden rounded-3xl shadow-xl md:w-full">
                <img src=testimonial.avatar alt=testimonial.name class="h-full w-full object-cover"/>
                <Show when=move || readiness.shows_placeholder()>
                    <Shimmer/>
                </Show>
            </div>
            <div>
                <IconSvg icon=Icon::Quote class="h-10 w-10 text-blue-200"/>
                <Show when=move || readiness.shows_placeholder()>
                    <div class="relative my-3 h-4 overflow-hidden rounded-full bg-slate-200/70">
                        <Shimmer/>
                    </div>
                </Show>
                <blockquote class="mt-4 text-xl leading-relaxed text-slate-700 md:text-2xl">
                    {testimonial.quote}
                </blockquote>
                <div class="mt-8 flex flex-wrap items-end justify-between gap-6">
                    <div>
                        <p class="text-lg font-semibold text-slate-900">{testimonial.name}</p>
                        <p class="text-sm text-slate-500">{testimonial.role}</p>
                    </div>
                    <div class="rounded-2xl bg-blue-50 px-5 py-3 text-right">
                        <p class="text-2xl font-bold text-blue-700">{testimonial.highlight.value}</p>
                        <p class="text-xs font-medium uppercase tracking-wide text-blue-600/80">
                            {testimonial.highlight.label}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn TestimonialSection() -> impl IntoView {
    let carousel = match Carousel::new(TESTIMONIALS.to_vec()) {
        Ok(carousel) => RwSignal::new(carousel),
        Err(err) => {
            tracing::error!(%err, "testimonial carousel not rendered");
            return ().into_any();
        }
    };

    let readiness = use_readiness(ReadyTrigger::timer_ms(TESTIMONIAL_SKELETON_MS));
    let motion = use_motion();
    let fade = CrossFadeConfig::default();
    use_autoplay(carousel, AUTOPLAY, motion);

    let current = Memo::new(move |_| carousel.with(Carousel::current_index));
    let (shown, leaving) = use_wait_transition(current, move || fade.exit_duration(motion.get_untracked()));

    let slide = move || {
        let index = shown.get();
        let testimonial = carousel.with_untracked(|c| c.items().get(index).copied());
        testimonial.map(|testimonial| {
            view! {
                <div style=move || {
                    if leaving.get() { fade.exit_style(motion.get()) } else { fade.enter_style(motion.get()) }
                }>
                    <TestimonialCard testimonial=testimonial readiness=readiness/>
                </div>
            }
        })
    };

    view! {
        <section id="testimonials" class="relative overflow-hidden bg-slate-50 py-24 md:py-32">
            <div class="mx-auto max-w-6xl px-6">
                <Reveal config=testimonial_heading() class="mx-auto max-w-3xl text-center">
                    <RevealItem index=0>
                        <Eyebrow text="Testimoni Eksklusif"/>
                    </RevealItem>
                    <RevealItem index=1>
                        <h2 class="mt-4 text-3xl font-bold tracking-tight text-slate-900 md:text-4xl">
                            "Apa kata mitra kami"
                        </h2>
                    </RevealItem>
                    <RevealItem index=2>
                        <p class="mt-4 text-lg leading-relaxed text-slate-600">
                            "Suara dari para mitra dan klien yang mempercayai kami, reflektif dan apa adanya."
                        </p>
                    </RevealItem>
                </Reveal>

                <div
                    class="relative mt-16 min-h-[22rem] rounded-[2rem] border border-slate-200 bg-white p-8 shadow-xl md:p-12"
                    on:mouseenter=move |_| carousel.update(Carousel::pause)
                    on:mouseleave=move |_| carousel.update(Carousel::resume)
                >
                    {slide}
                    <div class="mt-10 flex items-center justify-between">
                        <CarouselDots carousel=carousel/>
                        <CarouselControls carousel=carousel/>
                    </div>
                </div>
            </div>

            <div class="mt-20">
                <p class="mb-8 text-center text-sm font-medium text-slate-500">
                    "Dipercaya oleh brand dan institusi lintas industri"
                </p>
                <LogoMarquee/>
            </div>
        </section>
    }
    .into_any()
}
