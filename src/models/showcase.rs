use super::{Icon, ServiceCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub quote: &'static str,
    pub highlight: Highlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub category: ServiceCategory,
    pub icon: Icon,
    pub desc: &'static str,
    pub points: [&'static str; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalDoc {
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyValue {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
    /// Tailwind background class for the diagonal highlight.
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One tile of the gallery mosaic. `number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub number: usize,
    pub src: &'static str,
}

impl GalleryImage {
    pub fn caption(&self) -> String {
        format!("Dokumentasi • {}", self.number)
    }

    /// Case-insensitive match against the tile's search labels,
    /// "project N" and "dokumentasi N". An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        format!("project {}", self.number).contains(&query)
            || format!("dokumentasi {}", self.number).contains(&query)
    }
}
