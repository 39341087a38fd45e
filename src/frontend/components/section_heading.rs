use leptos::prelude::*;

/// Small pill label above a section title.
#[component]
pub fn Eyebrow(#[prop(into)] text: String, #[prop(optional)] dark: bool) -> impl IntoView {
    let tone = if dark {
        "border-white/20 bg-white/10 text-white"
    } else {
        "border-blue-200 bg-blue-50 text-blue-700"
    };

    view! {
        <span class=format!("inline-flex items-center rounded-full border px-4 py-1.5 text-xs font-semibold uppercase tracking-wider {tone}")>
            {text}
        </span>
    }
}

#[component]
pub fn SectionHeading(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] centered: bool,
) -> impl IntoView {
    let align = if centered { "mx-auto text-center" } else { "" };

    view! {
        <div class=format!("max-w-3xl {align}")>
            <Eyebrow text=eyebrow/>
            <h2 class="mt-4 text-3xl font-bold tracking-tight text-slate-900 md:text-4xl">{title}</h2>
            {subtitle.map(|s| view! { <p class="mt-4 text-lg leading-relaxed text-slate-600">{s}</p> })}
        </div>
    }
}
