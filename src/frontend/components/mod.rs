//! Reusable UI components shared by the sections and pages

mod button;
mod carousel;
mod footer;
mod icon;
mod input;
mod nav;
mod page_head;
mod reveal;
mod section_heading;
mod skeleton;
mod toast;

pub use button::{ButtonVariant, LinkButton, SubmitButton};
pub use carousel::{CarouselControls, CarouselDots};
pub use footer::Footer;
pub use icon::IconSvg;
pub use input::{EmailInput, TextArea, TextInput};
pub use nav::Nav;
pub use page_head::PageHead;
pub use reveal::{Reveal, RevealItem};
pub use section_heading::{Eyebrow, SectionHeading};
pub use skeleton::{Shimmer, Skeleton, SkeletonImage, SkeletonSwap, SkeletonText, TimedSkeleton};
pub use toast::ToastViewport;
