use crate::models::{CompanyValue, Feature, Icon, LegalDoc, Stat};

pub const TAGLINE: &str =
    "Mitra strategis Anda dalam perencanaan, operasional, logistik, dan layanan khusus.";

pub const ADDRESS_LINES: [&str; 4] = [
    "Gedung Menara 165, Lt 17 Unit A",
    "JL. T.B Simatupang Kav. 1 – Cilandak Timur,",
    "Pasar Minggu, Jakarta Selatan",
    "DKI Jakarta 12560",
];
pub const PHONE: &str = "+62 819 0878 8889";
pub const EMAIL: &str = "info@bataviasaranasinergi.com";
pub const WHATSAPP_URL: &str = "https://wa.me/6281908788889";

// Profile

pub const PROFILE_BADGES: [Feature; 3] = [
    Feature { icon: Icon::ShieldCheck, title: "Terlisensi & Terverifikasi", desc: "" },
    Feature { icon: Icon::Truck, title: "Jaringan Distribusi Nasional", desc: "" },
    Feature { icon: Icon::Clock, title: "SLA Tepat Waktu", desc: "" },
];

pub const PROFILE_PARAGRAPHS: [&str; 4] = [
    "PT Batavia Sarana Sinergi Indonesia adalah perusahaan yang bergerak di bidang Jasa Pengurusan Transportasi (JPT) dan solusi logistik terpadu, hadir untuk menjawab kebutuhan pengiriman barang yang efisien, aman, dan tepat waktu.",
    "Didukung oleh tim profesional dengan pengalaman lebih dari satu dekade di industri logistik dan transportasi, kami berkomitmen memberikan layanan yang mengedepankan integritas, keandalan, serta transparansi dalam setiap prosesnya.",
    "Sejak awal berdiri, PT Batavia Sarana Sinergi Indonesia menjadikan nilai kepercayaan, tanggung jawab, dan uji kelayakan sebagai fondasi utama dalam membangun hubungan jangka panjang dengan klien dan mitra usaha.",
    "Kami percaya bahwa logistik bukan sekadar pemindahan barang, melainkan bagian strategis dari keberhasilan operasional bisnis. Oleh karena itu, kami hadir sebagai mitra sinergis yang siap mendukung pertumbuhan dan kelancaran rantai pasok Anda, baik di tingkat nasional maupun internasional.",
];

pub const PROFILE_TRAITS: [Feature; 4] = [
    Feature { icon: Icon::Building, title: "JPT Terpadu", desc: "" },
    Feature { icon: Icon::Award, title: "Integritas", desc: "" },
    Feature { icon: Icon::ShieldCheck, title: "Keandalan", desc: "" },
    Feature { icon: Icon::Clock, title: "Tepat Waktu", desc: "" },
];

pub const COMMITMENTS: [&str; 4] = [
    "Perencanaan & Strategi berbasis kebutuhan klien",
    "Pengelolaan Operasional yang efisien & transparan",
    "Distribusi & Logistik cepat serta terukur",
    "Layanan Khusus lintas industri",
];

pub const LEGAL_DOCS: [LegalDoc; 4] = [
    LegalDoc {
        title: "SK Kemenkumham",
        url: "https://www.bataviasaranasinergi.com/wp-content/uploads/2025/05/2.-SK-KEMKUMHAM_page-0001-1001x1536.jpg",
    },
    LegalDoc {
        title: "Surat Keterangan Terdaftar (SKT)",
        url: "https://www.bataviasaranasinergi.com/wp-content/uploads/2025/05/4.-SKT_page-0001-1087x1536.jpg",
    },
    LegalDoc {
        title: "NIB",
        url: "https://www.bataviasaranasinergi.com/wp-content/uploads/2025/05/6.-NIB_page-0001-1085x1536.jpg",
    },
    LegalDoc {
        title: "Sertifikat Standar",
        url: "https://www.bataviasaranasinergi.com/wp-content/uploads/2025/05/7.-SERTIFIKAT-STANDAR_page-0002-1085x1536.jpg",
    },
];

pub const PILLARS: [Feature; 3] = [
    Feature {
        icon: Icon::ShieldCheck,
        title: "Kepastian & Kepatuhan",
        desc: "Mematuhi regulasi dan standar industri agar proses berjalan mulus dan aman.",
    },
    Feature {
        icon: Icon::Truck,
        title: "Konektivitas & Kapabilitas",
        desc: "Jaringan moda transportasi yang lincah untuk kebutuhan nasional dan internasional.",
    },
    Feature {
        icon: Icon::Clock,
        title: "Kecepatan & Ketepatan",
        desc: "SLA terukur, pelacakan transparan, dan pengiriman tepat waktu.",
    },
];

// Visi & Misi

pub const VISION: &str = "Menjadi perusahaan jasa pengurusan transportasi yang terdepan, terpercaya, dan profesional dalam menyediakan solusi logistik yang terpadu dan berkelanjutan. Kami berkomitmen untuk menjadi mitra strategis bagi para pelaku usaha dalam mendukung kelancaran rantai pasok nasional dan internasional melalui pelayanan yang unggul, teknologi yang modern, serta integritas yang tinggi.";

pub const VISION_TRAITS: [Feature; 3] = [
    Feature { icon: Icon::ShieldCheck, title: "Transparansi", desc: "" },
    Feature { icon: Icon::Gauge, title: "Efisiensi", desc: "" },
    Feature { icon: Icon::Leaf, title: "Ramah Lingkungan", desc: "" },
];

pub const VISION_STATS: [Stat; 3] = [
    Stat { value: "99.9%", label: "Reliability" },
    Stat { value: "24/7", label: "Reliability" },
    Stat { value: "100+", label: "Reliability" },
];

pub const MISSIONS: [&str; 6] = [
    "Menyediakan layanan pengurusan transportasi dan logistik multimoda yang cepat, aman, efisien, dan sesuai dengan kebutuhan spesifik pelanggan di berbagai sektor industri.",
    "Mengembangkan sistem operasional berbasis teknologi informasi terkini untuk mendukung transparansi, kecepatan pemrosesan, dan monitoring yang akurat dalam setiap proses pengiriman.",
    "Membangun jaringan kemitraan strategis, baik dengan pelanggan, mitra usaha, maupun pihak regulator, untuk menciptakan kolaborasi yang saling menguntungkan dan berorientasi jangka panjang.",
    "Meningkatkan kualitas sumber daya manusia melalui pelatihan berkelanjutan dan pembinaan profesionalisme agar mampu memberikan pelayanan terbaik secara konsisten.",
    "Menjalankan bisnis secara etis, mematuhi regulasi dan standar industri logistik, serta berkontribusi dalam menciptakan sistem logistik nasional yang efisien dan berdaya saing global.",
    "Mendorong inovasi dan keberlanjutan dalam setiap aspek operasional guna mendukung pertumbuhan usaha yang ramah lingkungan dan bertanggung jawab secara sosial.",
];

// Nilai

pub const VALUES: [CompanyValue; 3] = [
    CompanyValue {
        icon: Icon::Layers,
        title: "Uji Kelayakan",
        desc: "Kami menganalisis keputusan dari berbagai sudut untuk menjamin kelayakan operasional, teknis, dan finansial. Pendekatan holistik ini mengurangi risiko dan meningkatkan efisiensi.",
        accent: "bg-amber-400/30",
    },
    CompanyValue {
        icon: Icon::Shield,
        title: "Integritas",
        desc: "Integritas adalah landasan operasional kami: jujur, konsisten, dan bertanggung jawab, membangun kepercayaan jangka panjang bersama mitra dan klien.",
        accent: "bg-rose-400/25",
    },
    CompanyValue {
        icon: Icon::TrendingUp,
        title: "Daya Ungkit",
        desc: "Kami menciptakan sinergi dan memaksimalkan potensi untuk mendorong pertumbuhan berkelanjutan dan solusi logistik yang berdampak.",
        accent: "bg-emerald-400/25",
    },
];

pub const POLICY_CARD: Feature = Feature {
    icon: Icon::Layers,
    title: "Proses & Kebijakan",
    desc: "Standar operasi dan kebijakan mutu kami.",
};

pub const POLICY_BODY: &str =
    "Kami menerapkan kontrol kualitas terpadu dan audit berkala untuk memastikan konsistensi hasil.";
