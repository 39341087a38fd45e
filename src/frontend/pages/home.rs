use leptos::prelude::*;

use crate::frontend::PageShell;
use crate::frontend::sections::{
    AboutSection, ContactSection, HeroSection, ServicesSection, TestimonialSection,
};
use crate::models::SiteRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell route=SiteRoute::Home>
            <HeroSection/>
            <AboutSection/>
            <ServicesSection/>
            <TestimonialSection/>
            <ContactSection/>
        </PageShell>
    }
}
