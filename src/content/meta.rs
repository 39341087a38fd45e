use crate::models::{OpenGraph, PageMeta, SiteRoute, TwitterCard};

use super::{LOGO_URL, SITE_URL};

pub const HOME_META: PageMeta = PageMeta {
    title: "PT Batavia Sarana Sinergi Indonesia | Solusi Logistik & Transportasi Terpercaya",
    description: "PT Batavia Sarana Sinergi Indonesia menyediakan solusi perencanaan, operasional, distribusi logistik, dan layanan khusus yang efisien, aman, dan tepat waktu.",
    keywords: Some(
        "logistik Indonesia, distribusi barang, transportasi terpercaya, perencanaan strategi, pengelolaan operasional, jasa logistik Jakarta, Batavia Sarana Sinergi",
    ),
    robots: None,
    open_graph: Some(OpenGraph {
        title: "PT Batavia Sarana Sinergi Indonesia - Solusi Logistik & Transportasi",
        description: "Mitra strategis dalam perencanaan, operasional, distribusi, dan layanan logistik khusus. Solusi efisien & terpercaya untuk bisnis Anda.",
        kind: Some("website"),
        url: Some(SITE_URL),
        image: Some(LOGO_URL),
    }),
    twitter: Some(TwitterCard {
        card: "summary_large_image",
        title: "PT Batavia Sarana Sinergi Indonesia - Solusi Logistik & Transportasi",
        description: "Solusi logistik, transportasi, perencanaan, dan layanan khusus yang efisien & terpercaya.",
        image: Some(LOGO_URL),
    }),
};

pub const PROFILE_META: PageMeta = PageMeta {
    title: "Profil Perusahaan | PT Batavia Sarana Sinergi Indonesia",
    description: "Profil resmi PT Batavia Sarana Sinergi Indonesia: perusahaan JPT & solusi logistik terpadu yang mengutamakan keandalan, efisiensi, dan ketepatan waktu.",
    keywords: None,
    robots: Some("index, follow"),
    open_graph: Some(OpenGraph {
        title: "Profil | PT Batavia Sarana Sinergi Indonesia",
        description: "Siapa kami, legalitas, dan nilai inti dalam memberikan solusi logistik & transportasi yang terpercaya.",
        kind: None,
        url: None,
        image: None,
    }),
    twitter: None,
};

pub const VISI_MISI_META: PageMeta = PageMeta {
    title: "Visi & Misi | PT Batavia Sarana Sinergi Indonesia",
    description: "Visi dan Misi PT Batavia Sarana Sinergi Indonesia dengan pengalaman premium, elegan, dan modern.",
    keywords: None,
    robots: None,
    open_graph: None,
    twitter: None,
};

pub const NILAI_META: PageMeta = PageMeta {
    title: "Nilai Utama | PT Batavia Sarana Sinergi Indonesia",
    description: "Nilai-nilai utama PT Batavia Sarana Sinergi Indonesia: profesional, terpercaya, dan berkelas.",
    keywords: None,
    robots: None,
    open_graph: None,
    twitter: None,
};

pub const GALERI_META: PageMeta = PageMeta {
    title: "Galeri - PT Batavia Sarana Sinergi",
    description: "Dokumentasi proyek, momen lapangan, dan detail layanan PT Batavia Sarana Sinergi Indonesia.",
    keywords: None,
    robots: None,
    open_graph: None,
    twitter: None,
};

pub const NOT_FOUND_META: PageMeta = PageMeta {
    title: "Halaman Tidak Ditemukan | PT Batavia Sarana Sinergi Indonesia",
    description: "Halaman yang Anda cari tidak tersedia.",
    keywords: None,
    robots: Some("noindex"),
    open_graph: None,
    twitter: None,
};

/// Metadata for a route; routes without a page get the not-found tags.
pub fn page_meta(route: SiteRoute) -> &'static PageMeta {
    match route {
        SiteRoute::Home => &HOME_META,
        SiteRoute::Profile => &PROFILE_META,
        SiteRoute::VisiMisi => &VISI_MISI_META,
        SiteRoute::Nilai => &NILAI_META,
        SiteRoute::Galeri => &GALERI_META,
        _ => &NOT_FOUND_META,
    }
}

/// Body text of the 404 page. Nav entries without a page yet are announced as
/// coming soon; every other path gets the generic text.
pub fn not_found_message(path: &str) -> String {
    match SiteRoute::from_path(path) {
        Ok(route) if !route.is_implemented() => {
            format!("Halaman {} sedang kami siapkan.", route.path())
        }
        _ => "Halaman yang Anda cari tidak ditemukan atau telah dipindahkan.".to_string(),
    }
}
