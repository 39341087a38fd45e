use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::content::{CTA_FEATURES, EMAIL, PHONE};
use crate::forms::{ContactForm, Toast};
use crate::frontend::components::{
    EmailInput, Eyebrow, IconSvg, Reveal, RevealItem, SubmitButton, TextArea, TextInput,
    ToastViewport,
};
use crate::models::{Icon, ServiceCategory};

#[component]
fn ServiceChip(service: ServiceCategory, form: RwSignal<ContactForm>) -> impl IntoView {
    let selected = move || form.with(|f| f.is_selected(service));

    view! {
        <button
            type="button"
            aria-pressed=move || selected().to_string()
            class=move || {
                let tone = if selected() {
                    "border-blue-600 bg-blue-600 text-white shadow-md"
                } else {
                    "border-slate-200 bg-white text-slate-700 hover:border-blue-300"
                };
                format!("inline-flex items-center gap-2 rounded-full border px-4 py-2 text-sm font-medium transition {tone}")
            }
            on:click=move |_| form.update(|f| f.toggle_service(service))
        >
            <Show when=selected>
                <IconSvg icon=Icon::Check class="h-4 w-4"/>
            </Show>
            {service.label()}
        </button>
    }
}

/// Contact call-to-action. Submissions are validated and acknowledged
/// locally; nothing is sent over the network.
#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let toast = RwSignal::new(None::<Toast>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut current = form.get_untracked();
        let outcome = current.submit();
        form.set(current);

        match outcome {
            Ok((_request, confirmation)) => toast.set(Some(confirmation)),
            Err(rejection) => toast.set(Some(rejection)),
        }
    };

    let name = Signal::derive(move || form.with(|f| f.name.clone()));
    let email = Signal::derive(move || form.with(|f| f.email.clone()));
    let message = Signal::derive(move || form.with(|f| f.message.clone()));

    let features = CTA_FEATURES
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            view! {
                <RevealItem index=i + 2 class="flex gap-4">
                    <span class="inline-flex h-11 w-11 shrink-0 items-center justify-center rounded-xl bg-white/10 text-white">
                        <IconSvg icon=feature.icon/>
                    </span>
                    <div>
                        <p class="font-semibold text-white">{feature.title}</p>
                        <p class="mt-1 text-sm text-blue-100/80">{feature.desc}</p>
                    </div>
                </RevealItem>
            }
        })
        .collect_view();

    let chips = ServiceCategory::ALL
        .into_iter()
        .map(|service| view! { <ServiceChip service=service form=form/> })
        .collect_view();

    view! {
        <section id="contact" class="relative overflow-hidden bg-gradient-to-br from-slate-950 via-blue-950 to-slate-900 py-24 md:py-32">
            <div class="mx-auto grid max-w-7xl gap-14 px-6 lg:grid-cols-2">
                <Reveal class="space-y-8">
                    <RevealItem index=0>
                        <Eyebrow text="Hubungi Kami" dark=true/>
                    </RevealItem>
                    <RevealItem index=1>
                        <h2 class="text-4xl font-bold tracking-tight text-white md:text-5xl">
                            "Solusi Premium untuk Bisnis Anda"
                        </h2>
                        <p class="mt-6 text-lg leading-relaxed text-blue-100/80">
                            "Kami menghadirkan layanan terintegrasi yang berfokus pada presisi, efisiensi, dan hasil nyata. Setiap solusi dirancang khusus untuk mendukung pertumbuhan dan kesuksesan bisnis Anda."
                        </p>
                    </RevealItem>
                    <div class="space-y-6">{features}</div>
                    <RevealItem index=6 class="flex flex-wrap gap-6 text-sm text-blue-100">
                        <span class="inline-flex items-center gap-2">
                            <IconSvg icon=Icon::Phone class="h-4 w-4"/>
                            {PHONE}
                        </span>
                        <span class="inline-flex items-center gap-2">
                            <IconSvg icon=Icon::Mail class="h-4 w-4"/>
                            {EMAIL}
                        </span>
                    </RevealItem>
                </Reveal>

                <form
                    class="space-y-6 rounded-[2rem] bg-white p-8 shadow-2xl md:p-10"
                    novalidate=true
                    on:submit=on_submit
                >
                    <h3 class="text-2xl font-bold text-slate-900">"Konsultasi Gratis"</h3>
                    <TextInput
                        label="Nama"
                        name="name"
                        placeholder="Nama lengkap"
                        required=true
                        value=name
                        on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                    />
                    <EmailInput
                        label="Email"
                        value=email
                        on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                    />
                    <div>
                        <p class="mb-3 block text-sm font-medium text-slate-700">
                            "Layanan yang dibutuhkan"
                            <span class="text-red-500">" *"</span>
                        </p>
                        <div class="flex flex-wrap gap-2">{chips}</div>
                    </div>
                    <TextArea
                        label="Pesan (opsional)"
                        name="message"
                        placeholder="Ceritakan kebutuhan Anda"
                        value=message
                        on_input=Callback::new(move |v: String| form.update(|f| f.message = v))
                    />
                    <SubmitButton class="w-full">
                        <IconSvg icon=Icon::Send class="h-4 w-4"/>
                        "Kirim Permintaan"
                    </SubmitButton>
                </form>
            </div>

            <ToastViewport toast=toast/>
        </section>
    }
}
