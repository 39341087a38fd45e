use std::collections::HashMap;

use batavia::forms::ContactForm;
use batavia::models::ServiceCategory;
use batavia::state::Carousel;

pub fn get_seed_carousel(len: usize) -> Carousel<usize> {
    Carousel::new((0..len).collect()).expect("Seed carousel must not be empty")
}

pub fn parse_service(label: &str) -> ServiceCategory {
    label
        .parse()
        .expect("Invalid service label in test helper")
}

pub fn get_seed_contact_form(name: &str, email: &str, services: &[&str]) -> ContactForm {
    let mut form = ContactForm::new();
    form.name = name.to_string();
    form.email = email.to_string();
    for label in services {
        form.toggle_service(parse_service(label));
    }
    form
}

pub fn get_seed_form_budi() -> ContactForm {
    get_seed_contact_form("Budi", "budi@x.com", &["Distribusi & Logistik"])
}

pub fn get_seed_form_missing_name() -> ContactForm {
    get_seed_contact_form("", "x@y.com", &["Layanan Khusus"])
}

/// A lookup closure over a fixed set of environment values.
pub fn env_lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}
