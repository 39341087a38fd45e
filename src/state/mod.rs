//! Presentation state machines behind the shared page components.
//!
//! None of these types touch the DOM; the components in
//! [`crate::frontend`] feed them browser events and render from them.

pub use carousel::*;
pub use loading::*;
pub use nav::*;
pub use reveal::*;

mod carousel;
mod loading;
mod nav;
mod reveal;
