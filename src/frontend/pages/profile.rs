use std::time::Duration;

use leptos::prelude::*;

use super::{PageBanner, page_reveal};
use crate::content::{
    BUILDING_IMAGE, COMMITMENTS, LEGAL_DOCS, PILLARS, PROFILE_BADGES, PROFILE_PARAGRAPHS,
    PROFILE_TRAITS,
};
use crate::frontend::PageShell;
use crate::frontend::components::{
    IconSvg, Reveal, RevealItem, SectionHeading, SkeletonImage, SkeletonText, TimedSkeleton,
};
use crate::models::{Icon, LegalDoc, SiteRoute};
use crate::motion::FadeInConfig;

const TEXT_SKELETON_MS: u64 = 500;

#[component]
fn LegalDocCard(doc: LegalDoc) -> impl IntoView {
    view! {
        <a
            href=doc.url
            target="_blank"
            rel="noopener noreferrer"
            class="group block overflow-hidden rounded-2xl border border-slate-200 bg-white shadow-sm transition hover:-translate-y-1 hover:shadow-xl"
        >
            <SkeletonImage
                src=doc.url
                alt=doc.title
                class="aspect-[3/4]"
                img_class="object-top"
                fade=FadeInConfig::scaled(Duration::from_millis(600), 1.05)
            />
            <div class="flex items-center justify-between gap-3 p-4">
                <span class="inline-flex items-center gap-2 text-sm font-semibold text-slate-800">
                    <IconSvg icon=Icon::FileText class="h-4 w-4 text-blue-600"/>
                    {doc.title}
                </span>
                <IconSvg icon=Icon::ChevronRight class="h-4 w-4 text-slate-400 transition group-hover:translate-x-1"/>
            </div>
        </a>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let badges = PROFILE_BADGES
        .iter()
        .map(|badge| {
            view! {
                <span class="inline-flex items-center gap-2 rounded-full border border-white/15 bg-white/10 px-4 py-2 text-sm text-white/90 backdrop-blur">
                    <IconSvg icon=badge.icon class="h-4 w-4"/>
                    {badge.title}
                </span>
            }
        })
        .collect_view();

    let paragraphs = PROFILE_PARAGRAPHS
        .iter()
        .map(|p| view! { <p class="text-lg leading-relaxed text-slate-600">{*p}</p> })
        .collect_view();

    let traits = PROFILE_TRAITS
        .iter()
        .enumerate()
        .map(|(i, t)| {
            view! {
                <RevealItem index=i class="flex items-center gap-3 rounded-2xl border border-slate-200 bg-white p-4 shadow-sm">
                    <span class="inline-flex h-10 w-10 items-center justify-center rounded-xl bg-blue-50 text-blue-700">
                        <IconSvg icon=t.icon/>
                    </span>
                    <span class="font-semibold text-slate-800">{t.title}</span>
                </RevealItem>
            }
        })
        .collect_view();

    let docs = LEGAL_DOCS
        .iter()
        .enumerate()
        .map(|(i, doc)| view! { <RevealItem index=i><LegalDocCard doc=*doc/></RevealItem> })
        .collect_view();

    let commitments = COMMITMENTS
        .iter()
        .enumerate()
        .map(|(i, c)| {
            view! {
                <RevealItem index=i class="flex items-start gap-3">
                    <IconSvg icon=Icon::CheckCircle class="mt-0.5 h-5 w-5 shrink-0 text-emerald-400"/>
                    <span class="text-slate-200">{*c}</span>
                </RevealItem>
            }
        })
        .collect_view();

    let pillars = PILLARS
        .iter()
        .enumerate()
        .map(|(i, pillar)| {
            view! {
                <RevealItem index=i class="rounded-3xl border border-slate-200 bg-white p-8 shadow-sm">
                    <span class="inline-flex h-12 w-12 items-center justify-center rounded-2xl bg-blue-600 text-white">
                        <IconSvg icon=pillar.icon class="h-6 w-6"/>
                    </span>
                    <h3 class="mt-6 text-xl font-semibold text-slate-900">{pillar.title}</h3>
                    <p class="mt-3 text-sm leading-relaxed text-slate-600">{pillar.desc}</p>
                </RevealItem>
            }
        })
        .collect_view();

    view! {
        <PageShell route=SiteRoute::Profile>
            <PageBanner
                eyebrow="Profil Perusahaan"
                title="PT Batavia Sarana Sinergi Indonesia"
                subtitle="Jasa Pengurusan Transportasi dan solusi logistik terpadu yang efisien, aman, dan tepat waktu."
            >
                <div class="mt-8 flex flex-wrap justify-center gap-3">{badges}</div>
            </PageBanner>

            <section class="bg-white py-20 md:py-28">
                <div class="mx-auto grid max-w-7xl gap-14 px-6 lg:grid-cols-[1.4fr_1fr]">
                    <TimedSkeleton
                        delay_ms=TEXT_SKELETON_MS
                        placeholder=|| view! { <SkeletonText lines=10/> }
                    >
                        <div class="space-y-6">{paragraphs}</div>
                    </TimedSkeleton>
                    <div class="space-y-6">
                        <SkeletonImage src=BUILDING_IMAGE alt="Kantor perusahaan" class="aspect-[4/3] rounded-3xl"/>
                        <Reveal config=page_reveal() class="grid grid-cols-2 gap-4">{traits}</Reveal>
                    </div>
                </div>
            </section>

            <section id="legalitas" class="bg-slate-50 py-20 md:py-28">
                <div class="mx-auto max-w-7xl px-6">
                    <SectionHeading
                        eyebrow="Legalitas"
                        title="Dokumen Legal Perusahaan"
                        subtitle="Perizinan resmi yang menjadi dasar operasional kami."
                    />
                    <Reveal config=page_reveal() class="mt-12 grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                        {docs}
                    </Reveal>
                </div>
            </section>

            <section class="bg-slate-950 py-20 md:py-28">
                <div class="mx-auto grid max-w-7xl gap-12 px-6 lg:grid-cols-2">
                    <div>
                        <h2 class="text-3xl font-bold text-white md:text-4xl">"Komitmen Kami"</h2>
                        <p class="mt-4 text-slate-400">
                            "Setiap layanan dijalankan dengan standar yang sama: jelas, terukur, dan dapat dipertanggungjawabkan."
                        </p>
                    </div>
                    <Reveal config=page_reveal() class="space-y-4">{commitments}</Reveal>
                </div>
            </section>

            <section class="bg-white py-20 md:py-28">
                <div class="mx-auto max-w-7xl px-6">
                    <SectionHeading eyebrow="Pilar Strategis" title="Fondasi layanan kami" centered=true/>
                    <Reveal config=page_reveal() class="mt-12 grid gap-6 md:grid-cols-3">{pillars}</Reveal>
                </div>
            </section>
        </PageShell>
    }
}
