use std::time::Duration;

use leptos::prelude::*;

use crate::content::{NAV_CTA_ROUTE, SERVICE_MOSAIC, SERVICES};
use crate::frontend::components::{
    ButtonVariant, IconSvg, LinkButton, Reveal, RevealItem, SectionHeading, SkeletonImage,
    SkeletonSwap, SkeletonText,
};
use crate::frontend::hooks::use_readiness;
use crate::models::{Icon, ServiceOffering};
use crate::motion::RevealConfig;
use crate::state::ReadyTrigger;

const SKELETON_MS: u64 = 1100;

#[component]
fn ServiceCard(service: ServiceOffering) -> impl IntoView {
    view! {
        <article class="group h-full rounded-3xl border border-slate-200 bg-white p-8 shadow-sm transition-all duration-300 hover:-translate-y-1 hover:border-blue-300 hover:shadow-xl">
            <span class="inline-flex h-12 w-12 items-center justify-center rounded-2xl bg-blue-50 text-blue-700 transition-transform group-hover:scale-110">
                <IconSvg icon=service.icon class="h-6 w-6"/>
            </span>
            <h3 class="mt-6 text-xl font-semibold text-slate-900">{service.category.label()}</h3>
            <p class="mt-3 text-sm leading-relaxed text-slate-600">{service.desc}</p>
            <ul class="mt-6 space-y-2">
                {service
                    .points
                    .iter()
                    .map(|point| {
                        view! {
                            <li class="flex items-center gap-2 text-sm text-slate-700">
                                <IconSvg icon=Icon::Check class="h-4 w-4 text-emerald-500"/>
                                {*point}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a href="#contact" class="mt-6 inline-flex items-center gap-1 text-sm font-semibold text-blue-700">
                "Pelajari lebih lanjut"
                <IconSvg icon=Icon::ArrowRight class="h-4 w-4"/>
            </a>
        </article>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    let readiness = use_readiness(ReadyTrigger::timer_ms(SKELETON_MS));
    let cards = RevealConfig::default()
        .with_threshold(0.2)
        .with_stagger(Duration::from_millis(180));

    let services = SERVICES
        .iter()
        .enumerate()
        .map(|(i, service)| {
            view! {
                <RevealItem index=i>
                    <SkeletonSwap
                        readiness=readiness
                        class="h-full"
                        placeholder=|| view! {
                            <div class="h-full rounded-3xl border border-slate-200 bg-white p-8">
                                <SkeletonText lines=5/>
                            </div>
                        }
                    >
                        <ServiceCard service=*service/>
                    </SkeletonSwap>
                </RevealItem>
            }
        })
        .collect_view();

    let mosaic = SERVICE_MOSAIC
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let span = if i == 0 { "col-span-2 aspect-[21/9]" } else { "aspect-square" };
            view! {
                <SkeletonImage src=*src alt=format!("Dokumentasi layanan {}", i + 1) class=format!("rounded-2xl {span}")/>
            }
        })
        .collect_view();

    view! {
        <section id="services" class="relative bg-white py-24 md:py-32">
            <div class="mx-auto max-w-7xl px-6">
                <SectionHeading
                    eyebrow="Layanan Kami"
                    title="Layanan Terintegrasi"
                    subtitle="Kami menghadirkan solusi menyeluruh dengan standar premium, menggabungkan strategi, eksekusi, dan pengawasan dalam satu alur kerja."
                    centered=true
                />

                <Reveal config=cards class="mt-16 grid gap-6 md:grid-cols-2 xl:grid-cols-4">
                    {services}
                </Reveal>

                <div class="mt-16 grid grid-cols-2 gap-4 md:grid-cols-3">{mosaic}</div>

                <div class="mt-20 flex flex-col items-start justify-between gap-8 rounded-[2rem] bg-gradient-to-br from-blue-700 to-blue-900 p-10 text-white shadow-2xl md:flex-row md:items-center md:p-14">
                    <div class="max-w-2xl">
                        <h3 class="text-3xl font-bold">"Siap mengakselerasi kinerja layanan Anda?"</h3>
                        <p class="mt-4 text-blue-100">
                            "Tim kami siap membantu Anda merancang solusi yang elegan, efektif, dan dapat diandalkan, dari perencanaan hingga eksekusi."
                        </p>
                    </div>
                    <LinkButton href=NAV_CTA_ROUTE.path() variant=ButtonVariant::Light>
                        "Konsultasi Sekarang"
                    </LinkButton>
                </div>
            </div>
        </section>
    }
}
