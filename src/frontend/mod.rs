pub mod components;
pub mod hooks;
pub mod pages;
pub mod sections;

use components::{Footer, Nav, PageHead};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use pages::{GaleriPage, HomePage, NilaiPage, NotFound, ProfilePage, VisiMisiPage};

use crate::content;
use crate::models::SiteRoute;

/// Public origin used for canonical links. The server provides it from its
/// configuration; the client falls back to the production origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(pub String);

pub fn use_site_url() -> String {
    use_context::<SiteUrl>()
        .map(|url| url.0)
        .unwrap_or_else(|| content::SITE_URL.to_string())
}

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-white text-slate-900 antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    hooks::provide_motion_preference();

    view! {
        <Stylesheet id="leptos" href="/pkg/batavia.css"/>
        <Link rel="icon" href=content::LOGO_URL/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/profile") view=ProfilePage/>
                <Route path=path!("/visi-misi") view=VisiMisiPage/>
                <Route path=path!("/nilai") view=NilaiPage/>
                <Route path=path!("/galeri") view=GaleriPage/>
            </Routes>
        </Router>
    }
}

/// Fixed navigation, page metadata and footer around one page's sections.
#[component]
pub fn PageShell(children: Children, #[prop(optional)] route: Option<SiteRoute>) -> impl IntoView {
    let head = match route {
        Some(route) => view! { <PageHead route=route/> }.into_any(),
        None => view! { <PageHead/> }.into_any(),
    };

    view! {
        {head}
        <Nav/>
        <main class="min-h-screen">{children()}</main>
        <Footer/>
    }
}
