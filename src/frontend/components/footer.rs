use chrono::Datelike;
use leptos::prelude::*;

use crate::content::{
    self, ADDRESS_LINES, EMAIL, PHONE, SERVICES, TAGLINE, WHATSAPP_URL, nav_items,
};
use crate::frontend::components::IconSvg;
use crate::models::{Icon, NavTarget};

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    let pages = nav_items()
        .iter()
        .flat_map(|item| match &item.target {
            NavTarget::Link(route) => vec![(item.label, *route)],
            NavTarget::Dropdown(links) => links.iter().map(|l| (l.label, l.route)).collect(),
        })
        .filter(|(_, route)| route.is_implemented())
        .map(|(label, route)| {
            view! {
                <li>
                    <a href=route.path() class="text-slate-400 transition-colors hover:text-white">{label}</a>
                </li>
            }
        })
        .collect_view();

    let services = SERVICES
        .iter()
        .map(|s| view! { <li class="text-slate-400">{s.category.label()}</li> })
        .collect_view();

    view! {
        <footer class="bg-slate-950 text-slate-300">
            <div class="mx-auto grid max-w-7xl gap-10 px-6 py-16 md:grid-cols-2 lg:grid-cols-4">
                <div>
                    <img src=content::LOGO_URL alt=content::COMPANY_NAME class="mb-4 h-12 w-auto brightness-0 invert"/>
                    <p class="text-sm leading-relaxed text-slate-400">{TAGLINE}</p>
                </div>

                <div>
                    <h4 class="mb-4 text-sm font-semibold uppercase tracking-wider text-white">"Navigasi"</h4>
                    <ul class="space-y-2 text-sm">{pages}</ul>
                </div>

                <div>
                    <h4 class="mb-4 text-sm font-semibold uppercase tracking-wider text-white">"Layanan"</h4>
                    <ul class="space-y-2 text-sm">{services}</ul>
                </div>

                <div>
                    <h4 class="mb-4 text-sm font-semibold uppercase tracking-wider text-white">"Kontak"</h4>
                    <ul class="space-y-3 text-sm text-slate-400">
                        <li class="flex gap-3">
                            <IconSvg icon=Icon::MapPin class="mt-0.5 h-4 w-4 shrink-0 text-blue-400"/>
                            <span>
                                {ADDRESS_LINES
                                    .iter()
                                    .map(|line| view! { <span class="block">{*line}</span> })
                                    .collect_view()}
                            </span>
                        </li>
                        <li class="flex items-center gap-3">
                            <IconSvg icon=Icon::Phone class="h-4 w-4 text-blue-400"/>
                            <a href=format!("tel:{}", PHONE.replace(' ', "")) class="hover:text-white">{PHONE}</a>
                        </li>
                        <li class="flex items-center gap-3">
                            <IconSvg icon=Icon::Mail class="h-4 w-4 text-blue-400"/>
                            <a href=format!("mailto:{EMAIL}") class="hover:text-white">{EMAIL}</a>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="border-t border-slate-800">
                <p class="mx-auto max-w-7xl px-6 py-6 text-xs text-slate-500">
                    {format!("© {year} {}. All rights reserved.", content::COMPANY_NAME)}
                </p>
            </div>

            <a
                href=WHATSAPP_URL
                target="_blank"
                rel="noopener noreferrer"
                aria-label="WhatsApp"
                class="fixed bottom-6 right-6 z-40 inline-flex h-14 w-14 items-center justify-center rounded-full bg-emerald-500 text-white shadow-lg transition hover:scale-105 hover:bg-emerald-600"
            >
                <IconSvg icon=Icon::Phone class="h-6 w-6"/>
            </a>
        </footer>
    }
}
