use super::SiteRoute;

/// Leaf entry of a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: SiteRoute,
}

impl NavLink {
    pub const fn new(label: &'static str, route: SiteRoute) -> Self {
        Self { label, route }
    }

    pub fn href(&self) -> &'static str {
        self.route.path()
    }
}

/// What a top-level entry does. Dropdowns hold leaves only, so the menu is
/// never deeper than one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Link(SiteRoute),
    Dropdown(Vec<NavLink>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavItem {
    pub fn link(label: &'static str, route: SiteRoute) -> Self {
        Self {
            label,
            target: NavTarget::Link(route),
        }
    }

    pub fn dropdown(label: &'static str, children: Vec<NavLink>) -> Self {
        Self {
            label,
            target: NavTarget::Dropdown(children),
        }
    }

    pub fn href(&self) -> Option<&'static str> {
        match &self.target {
            NavTarget::Link(route) => Some(route.path()),
            NavTarget::Dropdown(_) => None,
        }
    }

    pub fn children(&self) -> &[NavLink] {
        match &self.target {
            NavTarget::Link(_) => &[],
            NavTarget::Dropdown(children) => children,
        }
    }

    pub fn is_dropdown(&self) -> bool {
        matches!(self.target, NavTarget::Dropdown(_))
    }
}
