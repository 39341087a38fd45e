//! Fallback for paths without a page, including nav entries not built yet

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::not_found_message;
use crate::frontend::PageShell;
use crate::frontend::components::{ButtonVariant, LinkButton};
use crate::models::SiteRoute;

#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;

    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    let message = move || {
        let path = pathname.get();
        if let Err(err) = SiteRoute::from_path(&path) {
            tracing::debug!(%err, "unknown path");
        }
        not_found_message(&path)
    };

    view! {
        <PageShell>
            <div class="flex min-h-screen items-center justify-center bg-gradient-to-br from-slate-50 via-white to-blue-50 px-6">
                <div class="text-center">
                    <h1 class="mb-4 bg-gradient-to-r from-blue-700 to-blue-400 bg-clip-text text-8xl font-bold text-transparent md:text-9xl">
                        "404"
                    </h1>
                    <p class="mb-2 text-2xl font-semibold text-slate-900">"Halaman tidak ditemukan"</p>
                    <p class="mb-8 max-w-md text-slate-500">{message}</p>
                    <LinkButton href="/" variant=ButtonVariant::Primary>"Kembali ke Beranda"</LinkButton>
                </div>
            </div>
        </PageShell>
    }
}
