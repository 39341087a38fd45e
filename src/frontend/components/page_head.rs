use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::content::{NOT_FOUND_META, page_meta};
use crate::frontend::use_site_url;
use crate::models::SiteRoute;

/// Title, description, crawler and link-preview tags for one page. Without a
/// route the not-found tags are emitted and no canonical link.
#[component]
pub fn PageHead(#[prop(optional)] route: Option<SiteRoute>) -> impl IntoView {
    let meta = route.map(page_meta).unwrap_or(&NOT_FOUND_META);
    let canonical = route.map(|r| format!("{}{}", use_site_url(), r.path()));

    let open_graph = meta.open_graph.clone().map(|og| {
        let url = canonical
            .clone()
            .or_else(|| og.url.map(str::to_string))
            .unwrap_or_default();
        view! {
            <Meta property="og:title" content=og.title/>
            <Meta property="og:description" content=og.description/>
            <Meta property="og:type" content=og.kind.unwrap_or("website")/>
            <Meta property="og:url" content=url/>
            {og.image.map(|image| view! { <Meta property="og:image" content=image/> })}
        }
    });

    let twitter = meta.twitter.clone().map(|card| {
        view! {
            <Meta name="twitter:card" content=card.card/>
            <Meta name="twitter:title" content=card.title/>
            <Meta name="twitter:description" content=card.description/>
            {card.image.map(|image| view! { <Meta name="twitter:image" content=image/> })}
        }
    });

    view! {
        <Title text=meta.title/>
        <Meta name="description" content=meta.description/>
        {meta.keywords.map(|keywords| view! { <Meta name="keywords" content=keywords/> })}
        {meta.robots.map(|robots| view! { <Meta name="robots" content=robots/> })}
        {canonical.map(|href| view! { <Link rel="canonical" href=href/> })}
        {open_graph}
        {twitter}
    }
}
