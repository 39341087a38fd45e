use leptos::prelude::*;

use crate::frontend::components::IconSvg;
use crate::models::Icon;
use crate::state::Carousel;

/// One marker per item; the current one is highlighted and clicking any
/// marker selects it.
#[component]
pub fn CarouselDots<T>(
    carousel: RwSignal<Carousel<T>>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] dark: bool,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let count = carousel.with_untracked(Carousel::len);
    let (active, idle) = if dark {
        ("w-8 bg-white", "w-2.5 bg-white/50 hover:bg-white/80")
    } else {
        ("w-8 bg-blue-600", "w-2.5 bg-slate-300 hover:bg-slate-400")
    };

    let dots = (0..count)
        .map(|index| {
            let is_current = move || carousel.with(|c| c.current_index() == index);
            view! {
                <button
                    type="button"
                    aria-label=format!("Slide {}", index + 1)
                    aria-current=move || is_current().then_some("true")
                    class=move || {
                        format!(
                            "h-2.5 rounded-full transition-all duration-300 {}",
                            if is_current() { active } else { idle },
                        )
                    }
                    on:click=move |_| {
                        carousel.maybe_update(|c| c.select_index(index));
                    }
                ></button>
            }
        })
        .collect_view();

    view! { <div class=format!("flex items-center justify-center gap-2 {class}")>{dots}</div> }
}

/// Previous and next buttons.
#[component]
pub fn CarouselControls<T>(
    carousel: RwSignal<Carousel<T>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let button = "inline-flex h-11 w-11 items-center justify-center rounded-full border border-slate-200 bg-white/90 text-slate-700 shadow-sm transition hover:bg-white hover:text-blue-700";

    view! {
        <div class=format!("flex items-center gap-3 {class}")>
            <button
                type="button"
                aria-label="Sebelumnya"
                class=button
                on:click=move |_| carousel.update(Carousel::retreat)
            >
                <IconSvg icon=Icon::ChevronLeft/>
            </button>
            <button
                type="button"
                aria-label="Berikutnya"
                class=button
                on:click=move |_| carousel.update(Carousel::advance)
            >
                <IconSvg icon=Icon::ChevronRight/>
            </button>
        </div>
    }
}
