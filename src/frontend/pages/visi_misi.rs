use leptos::prelude::*;

use super::{PageBanner, page_reveal};
use crate::content::{MISSIONS, VISION, VISION_STATS, VISION_TRAITS};
use crate::frontend::PageShell;
use crate::frontend::components::{IconSvg, Reveal, RevealItem, SkeletonText, TimedSkeleton};
use crate::models::{Icon, SiteRoute};

const VISION_SKELETON_MS: u64 = 650;

const DOCK: [(&str, &str, Icon); 3] = [
    ("#visi", "Visi", Icon::Sparkles),
    ("#misi", "Misi", Icon::ClipboardList),
    ("/nilai", "Nilai", Icon::Award),
];

#[component]
pub fn VisiMisiPage() -> impl IntoView {
    let stats = VISION_STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="rounded-2xl border border-white/10 bg-white/5 p-4 text-center">
                    <p class="text-2xl font-bold text-white">{stat.value}</p>
                    <p class="mt-1 text-xs text-slate-400">{stat.label}</p>
                </div>
            }
        })
        .collect_view();

    let traits = VISION_TRAITS
        .iter()
        .enumerate()
        .map(|(i, t)| {
            view! {
                <RevealItem index=i class="flex items-center gap-3 rounded-2xl bg-blue-50 px-4 py-3">
                    <IconSvg icon=t.icon class="h-5 w-5 text-blue-700"/>
                    <span class="text-sm font-semibold text-slate-800">{t.title}</span>
                </RevealItem>
            }
        })
        .collect_view();

    let missions = MISSIONS
        .iter()
        .enumerate()
        .map(|(i, mission)| {
            view! {
                <RevealItem index=i class="relative pl-14">
                    <span class="absolute left-0 top-0 inline-flex h-10 w-10 items-center justify-center rounded-full bg-blue-600 text-sm font-bold text-white shadow-lg">
                        {format!("{:02}", i + 1)}
                    </span>
                    <p class="rounded-2xl border border-slate-200 bg-white p-6 leading-relaxed text-slate-700 shadow-sm">
                        {*mission}
                    </p>
                </RevealItem>
            }
        })
        .collect_view();

    let dock = DOCK
        .iter()
        .map(|(href, label, icon)| {
            view! {
                <a
                    href=*href
                    class="inline-flex items-center gap-2 rounded-full px-4 py-2 text-sm font-medium text-slate-700 transition hover:bg-blue-50 hover:text-blue-700"
                >
                    <IconSvg icon=*icon class="h-4 w-4"/>
                    {*label}
                </a>
            }
        })
        .collect_view();

    view! {
        <PageShell route=SiteRoute::VisiMisi>
            <PageBanner
                eyebrow="Pengalaman Premium"
                title="Visi & Misi Perusahaan"
                subtitle="Menegaskan komitmen kami dalam menghadirkan solusi logistik terpadu dengan pendekatan modern, ramah pengguna, dan berkelas."
            >
                <div class="mx-auto mt-10 grid max-w-md grid-cols-3 gap-3">{stats}</div>
            </PageBanner>

            <section id="visi" class="bg-white py-20 md:py-28">
                <Reveal config=page_reveal().with_threshold(0.3) class="mx-auto max-w-4xl px-6">
                    <RevealItem index=0>
                        <p class="text-sm font-semibold uppercase tracking-wider text-blue-700">
                            "Kejelasan • Integritas • Keberlanjutan"
                        </p>
                        <h2 class="mt-4 text-3xl font-bold text-slate-900 md:text-4xl">"Visi Kami"</h2>
                    </RevealItem>
                    <RevealItem index=1 class="mt-8">
                        <TimedSkeleton
                            delay_ms=VISION_SKELETON_MS
                            placeholder=|| view! { <SkeletonText lines=5/> }
                        >
                            <p class="text-xl leading-relaxed text-slate-700">{VISION}</p>
                        </TimedSkeleton>
                    </RevealItem>
                </Reveal>
                <Reveal config=page_reveal().with_threshold(0.3) class="mx-auto mt-10 flex max-w-4xl flex-wrap gap-3 px-6">
                    {traits}
                </Reveal>
            </section>

            <section id="misi" class="bg-slate-50 py-20 md:py-28">
                <div class="mx-auto max-w-4xl px-6">
                    <h2 class="text-3xl font-bold text-slate-900 md:text-4xl">"Misi Kami"</h2>
                    <Reveal config=page_reveal() class="relative mt-12 space-y-8 before:absolute before:left-5 before:top-2 before:h-full before:w-px before:bg-blue-200">
                        {missions}
                    </Reveal>
                </div>
            </section>

            <nav class="fixed bottom-6 left-1/2 z-40 hidden -translate-x-1/2 items-center gap-1 rounded-full border border-slate-200 bg-white/90 p-1.5 shadow-xl backdrop-blur md:flex">
                {dock}
            </nav>
        </PageShell>
    }
}
