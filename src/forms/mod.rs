pub use contact::*;
pub use toast::*;

mod contact;
mod toast;
