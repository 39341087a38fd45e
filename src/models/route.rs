use serde::{Deserialize, Serialize};

use crate::common::RouteError;

/// Every path the navigation links to.
///
/// Only the variants for which [`SiteRoute::is_implemented`] holds have a page
/// behind them; the rest fall through to the router's not-found view.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SiteRoute {
    Home,
    Profile,
    VisiMisi,
    Nilai,
    Galeri,
    Kontak,
    SemuaModa,
    PesawatCarter,
    KargoProyek,
    Pergudangan,
}

impl SiteRoute {
    pub const ALL: [Self; 10] = [
        Self::Home,
        Self::Profile,
        Self::VisiMisi,
        Self::Nilai,
        Self::Galeri,
        Self::Kontak,
        Self::SemuaModa,
        Self::PesawatCarter,
        Self::KargoProyek,
        Self::Pergudangan,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Profile => "/profile",
            Self::VisiMisi => "/visi-misi",
            Self::Nilai => "/nilai",
            Self::Galeri => "/galeri",
            Self::Kontak => "/kontak",
            Self::SemuaModa => "/semua-moda",
            Self::PesawatCarter => "/pesawat-carter",
            Self::KargoProyek => "/kargo-proyek",
            Self::Pergudangan => "/pergudangan",
        }
    }

    pub fn is_implemented(&self) -> bool {
        matches!(
            self,
            Self::Home | Self::Profile | Self::VisiMisi | Self::Nilai | Self::Galeri
        )
    }

    pub fn implemented() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(Self::is_implemented)
    }

    /// Parses a request path, ignoring a trailing slash, query and fragment.
    pub fn from_path(path: &str) -> Result<Self, RouteError> {
        let bare = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let bare = match bare.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        Self::ALL
            .into_iter()
            .find(|r| r.path() == bare)
            .ok_or_else(|| RouteError::Unknown(path.to_string()))
    }
}

impl std::fmt::Display for SiteRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl PartialEq<&str> for SiteRoute {
    fn eq(&self, other: &&str) -> bool {
        self.path() == *other
    }
}

impl std::str::FromStr for SiteRoute {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s)
    }
}
