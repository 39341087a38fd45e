use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::{self, NAV_CTA_LABEL, NAV_CTA_ROUTE, nav_items};
use crate::frontend::components::IconSvg;
use crate::frontend::hooks::use_window_scroll;
use crate::models::{Icon, NavItem};
use crate::state::{NavState, Viewport};

/// Fixed header with desktop dropdowns and a mobile drawer. Both renderings
/// share one [`NavState`]; the `md` breakpoint decides which one is visible.
#[component]
pub fn Nav() -> impl IntoView {
    let state = RwSignal::new(NavState::new());
    let pathname = use_location().pathname;

    use_window_scroll(move |offset| {
        state.maybe_update(|s| {
            let before = s.is_scrolled();
            s.on_scroll(offset);
            before != s.is_scrolled()
        });
    });

    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let width = window()
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or_default();
            state.maybe_update(|s| s.on_resize(Viewport::from_width(width)));
        });
        on_cleanup(move || handle.remove());
    });

    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::click, move |_| {
            state.maybe_update(|s| {
                let open = s.open_dropdown().is_some();
                s.close_dropdown();
                open
            });
        });
        on_cleanup(move || handle.remove());
    });

    let header_class = move || {
        let backing = if state.with(NavState::is_scrolled) {
            "bg-white/85 shadow-sm backdrop-blur-md border-b border-slate-200/70"
        } else {
            "bg-transparent"
        };
        format!("fixed inset-x-0 top-0 z-50 transition-all duration-300 {backing}")
    };

    let desktop = nav_items()
        .iter()
        .enumerate()
        .map(|(id, item)| view! { <DesktopEntry id=id item=item.clone() state=state pathname=pathname/> })
        .collect_view();

    view! {
        <header class=header_class>
            <nav class="mx-auto flex h-16 max-w-7xl items-center justify-between px-4 md:h-20 md:px-6">
                <a href="/" class="flex items-center gap-3" on:click=move |_| state.update(NavState::activate_link)>
                    <img src=content::LOGO_URL alt=content::COMPANY_NAME class="h-10 w-auto md:h-12"/>
                </a>

                <div class="hidden items-center gap-1 md:flex">{desktop}</div>

                <div class="hidden md:block">
                    <a
                        href=NAV_CTA_ROUTE.path()
                        class="inline-flex items-center gap-2 rounded-full bg-blue-600 px-5 py-2.5 text-sm font-semibold text-white shadow-md transition hover:bg-blue-700"
                    >
                        {NAV_CTA_LABEL}
                        <IconSvg icon=Icon::ArrowRight class="h-4 w-4"/>
                    </a>
                </div>

                <button
                    type="button"
                    class="inline-flex h-10 w-10 items-center justify-center rounded-lg text-slate-700 md:hidden"
                    aria-label="Menu"
                    aria-expanded=move || state.with(NavState::is_mobile_open).to_string()
                    on:click=move |_| state.update(NavState::toggle_mobile)
                >
                    {move || {
                        let icon = if state.with(NavState::is_mobile_open) { Icon::X } else { Icon::Menu };
                        view! { <IconSvg icon=icon class="h-6 w-6"/> }
                    }}
                </button>
            </nav>

            <Show when=move || state.with(NavState::is_mobile_open)>
                <div class="border-t border-slate-200 bg-white/95 backdrop-blur-md md:hidden">
                    <div class="space-y-1 px-4 py-4">
                        {nav_items()
                            .iter()
                            .enumerate()
                            .map(|(id, item)| view! { <MobileEntry id=id item=item.clone() state=state/> })
                            .collect_view()}
                        <a
                            href=NAV_CTA_ROUTE.path()
                            class="mt-3 block rounded-full bg-blue-600 px-5 py-3 text-center text-sm font-semibold text-white"
                            on:click=move |_| state.update(NavState::activate_link)
                        >
                            {NAV_CTA_LABEL}
                        </a>
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn DesktopEntry(id: usize, item: NavItem, state: RwSignal<NavState>, pathname: Memo<String>) -> impl IntoView {
    let link = "inline-flex items-center gap-1 rounded-lg px-3 py-2 text-sm font-medium transition-colors";

    if let Some(href) = item.href() {
        let class = move || {
            let tone = if pathname.with(|p| p == href) {
                "text-blue-700"
            } else {
                "text-slate-700 hover:text-blue-700"
            };
            format!("{link} {tone}")
        };
        return view! {
            <a href=href class=class on:click=move |_| state.update(NavState::activate_link)>
                {item.label}
            </a>
        }
        .into_any();
    }

    let links = item.children().to_vec();

    view! {
        <div
            class="relative"
            on:mouseenter=move |_| state.update(|s| s.hover_dropdown(id))
            on:mouseleave=move |_| state.update(NavState::close_dropdown)
        >
            <button
                type="button"
                class=format!("{link} text-slate-700 hover:text-blue-700")
                aria-haspopup="true"
                aria-expanded=move || state.with(|s| s.is_dropdown_open(id)).to_string()
                on:click=move |ev| {
                    ev.stop_propagation();
                    state.update(|s| s.toggle_dropdown(id));
                }
            >
                {item.label}
                <IconSvg icon=Icon::ChevronDown class="h-4 w-4"/>
            </button>
            <Show when=move || state.with(|s| s.is_dropdown_open(id))>
                <div class="absolute left-0 top-full w-72 pt-2">
                    <div class="rounded-xl border border-slate-200 bg-white p-2 shadow-xl">
                        {links
                            .iter()
                            .map(|child| {
                                view! {
                                    <a
                                        href=child.href()
                                        class="block rounded-lg px-4 py-2.5 text-sm text-slate-700 transition-colors hover:bg-blue-50 hover:text-blue-700"
                                        on:click=move |_| state.update(NavState::activate_link)
                                    >
                                        {child.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
fn MobileEntry(id: usize, item: NavItem, state: RwSignal<NavState>) -> impl IntoView {
    if let Some(href) = item.href() {
        return view! {
            <a
                href=href
                class="block rounded-lg px-3 py-2.5 text-base font-medium text-slate-700 hover:bg-slate-50"
                on:click=move |_| state.update(NavState::activate_link)
            >
                {item.label}
            </a>
        }
        .into_any();
    }

    let links = item.children().to_vec();

    view! {
        <div>
            <button
                type="button"
                class="flex w-full items-center justify-between rounded-lg px-3 py-2.5 text-base font-medium text-slate-700 hover:bg-slate-50"
                on:click=move |ev| {
                    ev.stop_propagation();
                    state.update(|s| s.toggle_dropdown(id));
                }
            >
                {item.label}
                <IconSvg icon=Icon::ChevronDown class="h-4 w-4"/>
            </button>
            <Show when=move || state.with(|s| s.is_dropdown_open(id))>
                <div class="ml-3 space-y-1 border-l border-slate-200 pl-3">
                    {links
                        .iter()
                        .map(|child| {
                            view! {
                                <a
                                    href=child.href()
                                    class="block rounded-lg px-3 py-2 text-sm text-slate-600 hover:bg-slate-50 hover:text-blue-700"
                                    on:click=move |_| state.update(NavState::activate_link)
                                >
                                    {child.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
