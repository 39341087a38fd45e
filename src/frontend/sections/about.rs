use std::time::Duration;

use leptos::prelude::*;

use crate::content::{ABOUT_POINTS, COMPANY_NAME, ILLUSTRATION_IMAGE, PORT_IMAGE};
use crate::frontend::components::{IconSvg, Reveal, RevealItem, Shimmer};
use crate::frontend::hooks::use_readiness;
use crate::models::Icon;
use crate::motion::{Easing, RevealConfig, ShimmerConfig};
use crate::state::ReadyTrigger;

const SKELETON_MS: u64 = 1200;

fn fade_up() -> RevealConfig {
    RevealConfig::default()
        .with_stagger(Duration::from_millis(250))
        .with_duration(Duration::from_millis(900))
        .with_distance(40.0)
        .with_easing(Easing::EaseOut)
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let readiness = use_readiness(ReadyTrigger::timer_ms(SKELETON_MS));
    let shimmer = ShimmerConfig::default().with_repeat_delay(Duration::from_millis(800));

    let points = ABOUT_POINTS
        .iter()
        .enumerate()
        .map(|(i, point)| {
            view! {
                <RevealItem index=i + 1 class="flex items-start gap-4 rounded-2xl border border-slate-200 bg-white p-6 shadow-sm transition-shadow hover:shadow-lg">
                    <span class="inline-flex h-10 w-10 shrink-0 items-center justify-center rounded-full bg-blue-50 text-blue-700">
                        <IconSvg icon=Icon::CheckCircle/>
                    </span>
                    <p class="pt-2 text-lg font-semibold text-slate-800">{*point}</p>
                </RevealItem>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="relative overflow-hidden bg-slate-50 py-24 md:py-32">
            <div class="mx-auto max-w-7xl px-6">
                <Reveal config=fade_up().with_threshold(0.3) class="mx-auto mb-20 max-w-4xl text-center">
                    <RevealItem index=0>
                        <h2 class="text-4xl font-bold tracking-tight text-slate-900 md:text-5xl">"Tentang Kami"</h2>
                    </RevealItem>
                    <RevealItem index=1>
                        <p class="mt-8 text-lg leading-relaxed text-slate-600">
                            "Dengan semangat kolaborasi dan sinergi, "
                            <span class="font-semibold text-slate-900">{COMPANY_NAME}</span>
                            " hadir untuk mendukung kebutuhan berbagai sektor melalui layanan yang efisien, terpercaya, dan adaptif. Kami percaya bahwa setiap pergerakan memiliki arti, dan setiap proses harus memberikan nilai."
                        </p>
                        <p class="mt-4 text-lg leading-relaxed text-slate-600">
                            "Dengan tim yang berdedikasi dan sistem yang terintegrasi, kami siap menjadi mitra andal dalam setiap perjalanan bisnis Anda."
                        </p>
                    </RevealItem>
                </Reveal>

                <Reveal config=fade_up().with_threshold(0.2) class="grid grid-cols-1 items-center gap-20 lg:grid-cols-2">
                    <RevealItem index=0 class="relative mx-auto w-full max-w-2xl">
                        <div class="relative aspect-[16/10] w-full overflow-hidden rounded-[2rem] border border-slate-200 bg-slate-200/70 shadow-2xl">
                            <Show when=move || readiness.shows_placeholder()>
                                <Shimmer config=shimmer/>
                            </Show>
                            <img src=PORT_IMAGE alt="Pelabuhan industri" class="h-full w-full object-cover transition duration-700 ease-out hover:scale-105"/>
                        </div>
                        <div class="absolute -bottom-14 right-6 aspect-square w-[45%] overflow-hidden rounded-[1.5rem] border border-white bg-slate-200/70 shadow-2xl">
                            <Show when=move || readiness.shows_placeholder()>
                                <Shimmer config=shimmer/>
                            </Show>
                            <img src=ILLUSTRATION_IMAGE alt="Ilustrasi perusahaan" class="h-full w-full object-cover transition duration-700 ease-out hover:scale-105"/>
                        </div>
                    </RevealItem>
                    <div class="space-y-6">{points}</div>
                </Reveal>
            </div>
        </section>
    }
}
