//! Home page sections, top to bottom

mod about;
mod cta;
mod hero;
mod logo_marquee;
mod services;
mod testimonials;

pub use about::AboutSection;
pub use cta::ContactSection;
pub use hero::HeroSection;
pub use logo_marquee::LogoMarquee;
pub use services::ServicesSection;
pub use testimonials::{TESTIMONIAL_SKELETON_MS, TestimonialSection, testimonial_heading};
