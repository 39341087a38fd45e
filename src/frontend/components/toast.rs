use leptos::prelude::*;

use crate::forms::{TOAST_DURATION, Toast, ToastVariant};
use crate::frontend::components::IconSvg;
use crate::frontend::hooks::use_auto_clear;
use crate::models::Icon;

/// Bottom-corner notification bound to `toast`. It dismisses itself after
/// [`TOAST_DURATION`] and can be closed early.
#[component]
pub fn ToastViewport(toast: RwSignal<Option<Toast>>) -> impl IntoView {
    use_auto_clear(toast, TOAST_DURATION);

    move || {
        toast.get().map(|t| {
            let (icon, classes) = match t.variant {
                ToastVariant::Success => (
                    Icon::CheckCircle,
                    "bg-white border-emerald-200 text-slate-800",
                ),
                ToastVariant::Destructive => (Icon::X, "bg-red-600 border-red-700 text-white"),
            };

            view! {
                <div
                    role="status"
                    aria-live="polite"
                    class=format!(
                        "fixed bottom-6 left-1/2 z-50 w-[min(92vw,24rem)] -translate-x-1/2 rounded-xl border p-4 shadow-xl md:left-auto md:right-6 md:translate-x-0 {}",
                        classes,
                    )
                >
                    <div class="flex items-start gap-3">
                        <IconSvg icon=icon class="mt-0.5 h-5 w-5 shrink-0"/>
                        <div class="flex-1">
                            <p class="text-sm font-semibold">{t.title}</p>
                            <p class="mt-1 text-sm opacity-90">{t.description}</p>
                        </div>
                        <button
                            type="button"
                            aria-label="Tutup"
                            class="opacity-70 transition hover:opacity-100"
                            on:click=move |_| toast.set(None)
                        >
                            <IconSvg icon=Icon::X class="h-4 w-4"/>
                        </button>
                    </div>
                </div>
            }
        })
    }
}
