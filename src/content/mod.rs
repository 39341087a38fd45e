//! Static company copy and configuration tables. Built once, never mutated.

pub use company::*;
pub use gallery::*;
pub use home::*;
pub use meta::*;
pub use nav::*;

mod company;
mod gallery;
mod home;
mod meta;
mod nav;

pub const COMPANY_NAME: &str = "PT Batavia Sarana Sinergi Indonesia";
pub const SITE_URL: &str = "https://www.bataviasaranasinergi.com";

pub const LOGO_URL: &str = "https://www.bataviasaranasinergi.com/wp-content/uploads/2025/05/cropped-LOGO-PT-BATAVIA-SARANA-SINERGI-INODENSIA-04-scaled-1-1536x862.png";
pub const PORT_IMAGE: &str = "https://www.bataviasaranasinergi.com/wp-content/uploads/2025/05/industrial-port-container-yard-2048x1411.jpg";
pub const ILLUSTRATION_IMAGE: &str = "https://www.bataviasaranasinergi.com/wp-content/uploads/2025/05/DESAIN-LAMAN-WEB-BATAVIA-07-768x776.png";
pub const BANNER_IMAGE: &str = "https://www.bataviasaranasinergi.com/wp-content/uploads/2025/05/DESAIN-LAMAN-WEB-BATAVIA-06-scaled.png";
pub const BUILDING_IMAGE: &str = "https://www.bataviasaranasinergi.com/wp-content/uploads/2025/05/Untitled-1-1.png";
pub const HERO_VIDEO: &str = "https://www.bataviasaranasinergi.com/wp-content/uploads/2025/05/hero-cd1f9b39-2.mp4";

/// Remote origins the pages load media from.
pub fn media_origins() -> [&'static str; 2] {
    [SITE_URL, "https://images.unsplash.com"]
}
