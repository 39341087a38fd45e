use std::time::Duration;

use leptos::prelude::*;

use super::{PageBanner, page_reveal};
use crate::content::{NAV_CTA_ROUTE, POLICY_BODY, POLICY_CARD, VALUES};
use crate::frontend::PageShell;
use crate::frontend::components::{
    ButtonVariant, IconSvg, LinkButton, Reveal, RevealItem, Skeleton, SkeletonSwap, SkeletonText,
};
use crate::frontend::hooks::use_readiness;
use crate::models::{CompanyValue, Icon, SiteRoute};
use crate::state::ReadyTrigger;

const SKELETON_MS: u64 = 650;
const POLICY_CARDS: usize = 3;

#[component]
fn ValueCard(value: CompanyValue) -> impl IntoView {
    view! {
        <article class="relative h-full overflow-hidden rounded-3xl border border-slate-200 bg-white p-8 shadow-sm transition hover:-translate-y-1 hover:shadow-xl">
            <div class=format!("pointer-events-none absolute -right-10 -top-10 h-40 w-40 rotate-45 rounded-3xl {}", value.accent)></div>
            <span class="relative inline-flex h-12 w-12 items-center justify-center rounded-2xl bg-slate-900 text-white">
                <IconSvg icon=value.icon class="h-6 w-6"/>
            </span>
            <h3 class="relative mt-6 text-2xl font-semibold text-slate-900">{value.title}</h3>
            <p class="relative mt-3 leading-relaxed text-slate-600">{value.desc}</p>
        </article>
    }
}

#[component]
pub fn NilaiPage() -> impl IntoView {
    let readiness = use_readiness(ReadyTrigger::timer_ms(SKELETON_MS));
    let cards = page_reveal().with_stagger(Duration::from_millis(120)).with_distance(14.0);

    let values = VALUES
        .iter()
        .enumerate()
        .map(|(i, value)| {
            view! {
                <RevealItem index=i>
                    <SkeletonSwap
                        readiness=readiness
                        class="h-full"
                        placeholder=|| view! {
                            <div class="h-full space-y-4 rounded-3xl border border-slate-200 bg-white p-8">
                                <Skeleton class="h-12 w-12 rounded-2xl"/>
                                <SkeletonText lines=4/>
                            </div>
                        }
                    >
                        <ValueCard value=*value/>
                    </SkeletonSwap>
                </RevealItem>
            }
        })
        .collect_view();

    let policies = (0..POLICY_CARDS)
        .map(|i| {
            view! {
                <RevealItem index=i class="rounded-2xl border border-slate-200 bg-white/80 p-5 shadow-sm backdrop-blur">
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <h4 class="text-sm font-semibold text-slate-900">{POLICY_CARD.title}</h4>
                            <p class="mt-1 text-xs text-slate-500">{POLICY_CARD.desc}</p>
                        </div>
                        <span class="inline-flex h-10 w-10 items-center justify-center rounded-lg bg-blue-50 text-blue-700">
                            <IconSvg icon=POLICY_CARD.icon/>
                        </span>
                    </div>
                    <p class="mt-4 text-sm text-slate-600">{POLICY_BODY}</p>
                </RevealItem>
            }
        })
        .collect_view();

    view! {
        <PageShell route=SiteRoute::Nilai>
            <PageBanner
                eyebrow="Nilai Perusahaan"
                title="Nilai - Nilai Perusahaan"
                subtitle="Prinsip yang memandu setiap keputusan dan setiap pengiriman yang kami tangani."
            />

            <section class="bg-slate-50 py-20 md:py-28">
                <div class="mx-auto max-w-7xl px-6">
                    <Reveal config=cards class="grid gap-6 md:grid-cols-3">{values}</Reveal>
                    <Reveal config=cards class="mt-14 grid gap-4 md:grid-cols-3">{policies}</Reveal>
                </div>
            </section>

            <section class="bg-white py-16">
                <div class="mx-auto flex max-w-4xl flex-col gap-6 rounded-3xl border border-slate-200 bg-gradient-to-r from-slate-50 to-white p-8 shadow-xl sm:flex-row sm:items-center sm:justify-between">
                    <div>
                        <h3 class="text-xl font-semibold text-slate-900">"Bermitra dengan kami"</h3>
                        <p class="mt-1 text-sm text-slate-600">
                            "Bersama kami, Anda mendapatkan standar tinggi, kepastian operasi, dan kolaborasi strategis."
                        </p>
                    </div>
                    <div class="flex items-center gap-4">
                        <LinkButton href=NAV_CTA_ROUTE.path() variant=ButtonVariant::Primary>"Hubungi Sales"</LinkButton>
                        <a href="/profile#legalitas" class="inline-flex items-center gap-1 text-sm font-medium text-slate-700 hover:text-blue-700">
                            "Lihat Dokumen"
                            <IconSvg icon=Icon::ChevronRight class="h-4 w-4"/>
                        </a>
                    </div>
                </div>
            </section>
        </PageShell>
    }
}
