use crate::models::{
    Feature, Highlight, Icon, ServiceCategory, ServiceOffering, Stat, Testimonial,
};

use super::{ILLUSTRATION_IMAGE, PORT_IMAGE};

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "99.3%", label: "Uptime Operasional" },
    Stat { value: "24/7", label: "Layanan Pelanggan" },
    Stat { value: "500+", label: "Mitra Korporat" },
];

pub const HERO_SHOWCASE_IMAGE: &str =
    "https://images.unsplash.com/photo-1549924231-f129b911e442?q=80&w=2069&auto=format&fit=crop";

pub const TRUSTED_BY: [&str; 4] = ["Bank Mandiri", "Pertamina", "Telkom Indonesia", "Astra"];

pub const ABOUT_POINTS: [&str; 3] = [
    "Solusi Terpadu",
    "Layanan Profesional",
    "Proses Yang Efisien",
];

pub const SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        category: ServiceCategory::Planning,
        icon: Icon::Layers,
        desc: "Pendekatan terstruktur untuk memetakan kebutuhan, menyusun prioritas, dan merancang langkah eksekusi yang presisi.",
        points: [
            "Analisis kebutuhan lintas fungsi",
            "Roadmap eksekusi yang jelas",
            "Indikator kinerja terukur",
        ],
    },
    ServiceOffering {
        category: ServiceCategory::Operations,
        icon: Icon::ShieldCheck,
        desc: "Operasional yang rapi dan adaptif untuk memastikan kelancaran proses harian dengan risiko yang terkelola.",
        points: [
            "SOP dan tata kelola efisien",
            "Monitoring & pelaporan rutin",
            "Optimasi sumber daya",
        ],
    },
    ServiceOffering {
        category: ServiceCategory::Distribution,
        icon: Icon::Truck,
        desc: "Jalur distribusi yang andal serta tepat waktu untuk menjaga kontinuitas layanan dan kepuasan pelanggan.",
        points: [
            "Perencanaan rute efektif",
            "Pelacakan dan visibilitas",
            "Koordinasi multi-vendor",
        ],
    },
    ServiceOffering {
        category: ServiceCategory::Special,
        icon: Icon::Settings,
        desc: "Solusi kustom yang dirancang sesuai karakter industri dan tantangan unik organisasi Anda.",
        points: [
            "Integrasi sistem",
            "Penyesuaian workflow",
            "Dukungan implementasi end-to-end",
        ],
    },
];

pub const SERVICE_MOSAIC: [&str; 4] = [PORT_IMAGE, ILLUSTRATION_IMAGE, PORT_IMAGE, PORT_IMAGE];

/// Short blurbs next to the contact form, one per service line.
pub const CTA_FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::ClipboardList,
        title: "Perencanaan & Strategi",
        desc: "Merancang solusi tepat guna yang disesuaikan dengan kebutuhan klien.",
    },
    Feature {
        icon: Icon::ShieldCheck,
        title: "Pengelolaan Operasional",
        desc: "Menyediakan dukungan penuh dalam pelaksanaan kegiatan harian secara efisien.",
    },
    Feature {
        icon: Icon::Truck,
        title: "Distribusi & Logistik",
        desc: "Menjamin alur distribusi barang atau jasa yang cepat dan tepat waktu.",
    },
    Feature {
        icon: Icon::Briefcase,
        title: "Layanan Khusus",
        desc: "Solusi kustom untuk berbagai industri, sesuai tantangan dan kebutuhan unik Anda.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Nadia Prameswari",
        role: "Direktur Operasional, Arunika Group",
        avatar: "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?w=600&auto=format&fit=crop&q=80",
        quote: "Pendekatan tim sangat presisi dan penuh estetika. Proses internal kami menjadi lebih rapi, pelanggan lebih terhubung, dan hasilnya terasa naik kelas.",
        highlight: Highlight { value: "+280%", label: "Pertumbuhan Interaksi" },
    },
    Testimonial {
        name: "Reza Alfarizi",
        role: "Head of Marketing, SagaraTech",
        avatar: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=600&auto=format&fit=crop&q=80",
        quote: "Desain yang menawan sekaligus performa tangguh. Konversi meningkat tajam tanpa kompromi pada estetika, pondasi premium bagi brand kami.",
        highlight: Highlight { value: "+7.9%", label: "Conversion Rate" },
    },
    Testimonial {
        name: "Laras Sekar",
        role: "CEO, Prima Logistik",
        avatar: "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=600&auto=format&fit=crop&q=80",
        quote: "Eksekusi end-to-end begitu disiplin. Tim tanggap, insight tajam, hasil konsisten. Kami mendapatkan arah jelas sekaligus kecepatan yang berkelas.",
        highlight: Highlight { value: "98%", label: "Retensi Klien" },
    },
];

/// Partner logo sprites live at `/logos/3.png` through `/logos/21.png`.
const FIRST_LOGO: usize = 3;
const LOGO_COUNT: usize = 19;

pub fn partner_logos() -> Vec<String> {
    (FIRST_LOGO..FIRST_LOGO + LOGO_COUNT)
        .map(|n| format!("/logos/{n}.png"))
        .collect()
}

/// The logo strip repeated twice so a -50% translate loops seamlessly.
pub fn marquee_logos() -> Vec<String> {
    let logos = partner_logos();
    logos.iter().chain(logos.iter()).cloned().collect()
}
