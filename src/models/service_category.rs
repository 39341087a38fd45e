use serde::{Deserialize, Serialize};

/// The four service lines offered on the site and selectable in the contact form.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Planning,
    Operations,
    Distribution,
    Special,
}

impl ServiceCategory {
    pub const ALL: [Self; 4] = [
        Self::Planning,
        Self::Operations,
        Self::Distribution,
        Self::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Operations => "operations",
            Self::Distribution => "distribution",
            Self::Special => "special",
        }
    }

    /// Display name shown on chips, cards and in the footer.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planning => "Perencanaan & Strategi",
            Self::Operations => "Pengelolaan Operasional",
            Self::Distribution => "Distribusi & Logistik",
            Self::Special => "Layanan Khusus",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl PartialEq<&str> for ServiceCategory {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other || self.label() == *other
    }
}

impl std::str::FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("invalid service category: {}", s))
    }
}
