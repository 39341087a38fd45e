use leptos::prelude::*;

const FIELD_CLASSES: &str = "w-full rounded-xl border border-slate-200 bg-white px-4 py-3 text-slate-900
                             placeholder-slate-400
                             focus:border-transparent focus:outline-none focus:ring-2 focus:ring-blue-500
                             transition-all";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    view! {
        <div>
            <label for=name.clone() class="mb-2 block text-sm font-medium text-slate-700">
                {label}
                {required.then(|| view! { <span class="text-red-500">" *"</span> })}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=FIELD_CLASSES
            />
        </div>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="nama@perusahaan.com"
            input_type="email"
            required=true
            value=value
            on_input=on_input
        />
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(default = 4)] rows: u32,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="mb-2 block text-sm font-medium text-slate-700">
                {label}
            </label>
            <textarea
                id=name.clone()
                name=name
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=FIELD_CLASSES
            ></textarea>
        </div>
    }
}
