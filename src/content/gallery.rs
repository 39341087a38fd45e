use std::sync::LazyLock;

use crate::models::GalleryImage;

use super::{BANNER_IMAGE, ILLUSTRATION_IMAGE};

/// Placeholder tiles shown while the mosaic is "loading".
pub const GALLERY_SKELETON_TILES: usize = 8;

static GALLERY: LazyLock<Vec<GalleryImage>> = LazyLock::new(|| {
    [
        ILLUSTRATION_IMAGE,
        BANNER_IMAGE,
        ILLUSTRATION_IMAGE,
        BANNER_IMAGE,
        ILLUSTRATION_IMAGE,
        BANNER_IMAGE,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, src)| GalleryImage { number: i + 1, src })
    .collect()
});

pub fn gallery_images() -> &'static [GalleryImage] {
    &GALLERY
}

pub fn filter_gallery(query: &str) -> Vec<GalleryImage> {
    gallery_images()
        .iter()
        .filter(|img| img.matches(query))
        .copied()
        .collect()
}

/// Tailwind span classes of the first mosaic tiles; later tiles take one cell.
pub fn mosaic_span(index: usize) -> &'static str {
    match index {
        0 => "col-span-2 row-span-2",
        3 => "col-span-2",
        _ => "",
    }
}
