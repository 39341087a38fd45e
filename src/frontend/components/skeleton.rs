use leptos::html::Img;
use leptos::prelude::*;

use crate::frontend::hooks::{Readiness, use_motion, use_readiness};
use crate::log_err;
use crate::motion::{FadeInConfig, ShimmerConfig};
use crate::state::ReadyTrigger;

/// The sweeping gradient band. Renders nothing under reduced motion.
#[component]
pub fn Shimmer(#[prop(optional)] config: Option<ShimmerConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let motion = use_motion();

    move || {
        config.style(motion.get()).map(|style| {
            view! {
                <div class="pointer-events-none absolute inset-0 overflow-hidden" aria-hidden="true">
                    <div
                        class="absolute inset-y-0 -left-1/2 w-1/2 bg-gradient-to-r from-transparent via-white/60 to-transparent"
                        style=style
                    ></div>
                </div>
            }
        })
    }
}

/// A placeholder block with a shimmer overlay.
#[component]
pub fn Skeleton(
    #[prop(optional, into)] class: String,
    #[prop(optional)] shimmer: Option<ShimmerConfig>,
) -> impl IntoView {
    view! {
        <div class=format!("relative overflow-hidden rounded-lg bg-slate-200/70 {class}")>
            <Shimmer config=shimmer.unwrap_or_default()/>
        </div>
    }
}

/// Placeholder bars standing in for a paragraph.
#[component]
pub fn SkeletonText(
    #[prop(default = 3)] lines: usize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let bars = (0..lines)
        .map(|i| {
            let width = if i + 1 == lines && lines > 1 { "w-2/3" } else { "w-full" };
            view! { <Skeleton class=format!("h-4 {width}")/> }
        })
        .collect_view();

    view! { <div class=format!("space-y-3 {class}") aria-busy="true">{bars}</div> }
}

/// Real content kept in the document but transparent until `readiness`
/// flips, with `placeholder` laid over it until then.
#[component]
pub fn SkeletonSwap(
    readiness: Readiness,
    children: Children,
    #[prop(into)] placeholder: ViewFn,
    #[prop(optional)] fade: Option<FadeInConfig>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let fade = fade.unwrap_or_default();
    let motion = use_motion();

    view! {
        <div class=format!("relative {class}")>
            <div style=move || fade.style(readiness.is_ready(), motion.get())>{children()}</div>
            <Show when=move || readiness.shows_placeholder()>
                <div class="absolute inset-0">{placeholder.run()}</div>
            </Show>
        </div>
    }
}

/// Content gated by a fixed artificial delay.
#[component]
pub fn TimedSkeleton(
    delay_ms: u64,
    children: Children,
    #[prop(into)] placeholder: ViewFn,
    #[prop(optional)] fade: Option<FadeInConfig>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let readiness = use_readiness(ReadyTrigger::timer_ms(delay_ms));

    view! {
        <SkeletonSwap readiness=readiness placeholder=placeholder fade=fade.unwrap_or_default() class=class>
            {children()}
        </SkeletonSwap>
    }
}

/// An image behind a shimmer until it has actually loaded.
///
/// Images that fail are hidden and the placeholder stops shimmering.
#[component]
pub fn SkeletonImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] img_class: String,
    #[prop(optional)] fade: Option<FadeInConfig>,
    #[prop(optional)] eager: bool,
) -> impl IntoView {
    let fade = fade.unwrap_or_default();
    let motion = use_motion();
    let readiness = use_readiness(ReadyTrigger::ResourceLoad);
    let (failed, set_failed) = signal(false);
    let image = NodeRef::<Img>::new();

    // A cached image may finish before hydration attaches the load listener.
    Effect::new(move |_| {
        let Some(img) = image.get() else {
            return;
        };
        if img.complete() && img.natural_width() > 0 {
            readiness.mark_ready();
        }
    });

    let report_src = src.clone();
    let on_error = move |_| {
        log_err!("image failed to load", &report_src);
        set_failed.set(true);
    };

    view! {
        <div class=format!("relative overflow-hidden bg-slate-200/70 {class}")>
            <Show when=move || readiness.shows_placeholder() && !failed.get()>
                <Shimmer/>
            </Show>
            <img
                node_ref=image
                src=src
                alt=alt
                loading=if eager { "eager" } else { "lazy" }
                class=format!("h-full w-full object-cover {img_class}")
                class:hidden=move || failed.get()
                style=move || fade.style(readiness.is_ready(), motion.get())
                on:load=move |_| readiness.mark_ready()
                on:error=on_error
            />
        </div>
    }
}
