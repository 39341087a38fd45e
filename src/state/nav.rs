use serde::{Deserialize, Serialize};

/// Scroll offset in px past which the header gets its opaque backing.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Width in px at which the desktop menu replaces the drawer (Tailwind `md`).
pub const DESKTOP_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn from_width(width: f64) -> Self {
        if width >= DESKTOP_BREAKPOINT {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }
}

/// State of the fixed site header.
///
/// Dropdowns are identified by the index of their top-level nav item; at most
/// one is open at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    scrolled: bool,
    mobile_open: bool,
    open_dropdown: Option<usize>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn open_dropdown(&self) -> Option<usize> {
        self.open_dropdown
    }

    pub fn is_dropdown_open(&self, id: usize) -> bool {
        self.open_dropdown == Some(id)
    }

    /// Re-evaluated on every scroll event.
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// Click on a dropdown trigger: opens `id` (closing any other) or closes
    /// it if it was already open.
    pub fn toggle_dropdown(&mut self, id: usize) {
        self.open_dropdown = if self.open_dropdown == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Hover on a dropdown trigger: always ends with `id` open.
    pub fn hover_dropdown(&mut self, id: usize) {
        self.open_dropdown = Some(id);
    }

    /// Click outside any open dropdown.
    pub fn close_dropdown(&mut self) {
        self.open_dropdown = None;
    }

    /// The drawer only exists below the breakpoint; widening the window
    /// closes it. Returns whether anything changed.
    pub fn on_resize(&mut self, viewport: Viewport) -> bool {
        if viewport == Viewport::Desktop && self.mobile_open {
            self.mobile_open = false;
            return true;
        }
        false
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// A navigational link was activated: everything closes.
    pub fn activate_link(&mut self) {
        self.mobile_open = false;
        self.open_dropdown = None;
    }
}
