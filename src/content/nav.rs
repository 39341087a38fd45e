use std::sync::LazyLock;

use crate::models::{NavItem, NavLink, SiteRoute};

pub const NAV_CTA_LABEL: &str = "Konsultasi Gratis";
pub const NAV_CTA_ROUTE: SiteRoute = SiteRoute::Kontak;

static NAV_ITEMS: LazyLock<Vec<NavItem>> = LazyLock::new(|| {
    vec![
        NavItem::link("Beranda", SiteRoute::Home),
        NavItem::dropdown(
            "Tentang Kami",
            vec![
                NavLink::new("Profile", SiteRoute::Profile),
                NavLink::new("Visi & Misi", SiteRoute::VisiMisi),
                NavLink::new("Nilai - Nilai Perusahaan", SiteRoute::Nilai),
            ],
        ),
        NavItem::dropdown(
            "Layanan",
            vec![
                NavLink::new("Semua Moda Transportasi Pengiriman", SiteRoute::SemuaModa),
                NavLink::new("Pesawat Carter", SiteRoute::PesawatCarter),
                NavLink::new("Kargo Proyek", SiteRoute::KargoProyek),
                NavLink::new("Pergudangan", SiteRoute::Pergudangan),
            ],
        ),
        NavItem::link("Galeri", SiteRoute::Galeri),
        NavItem::link("Kontak", SiteRoute::Kontak),
    ]
});

pub fn nav_items() -> &'static [NavItem] {
    &NAV_ITEMS
}
