//! Gallery chrome styling.

mod styles;

pub use styles::GALLERY_STYLES;
